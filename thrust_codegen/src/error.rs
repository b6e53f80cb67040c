use std::{io, path::PathBuf};

use thiserror::Error;

pub type EmitResult<T> = Result<T, EmitError>;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO Error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Coefficient {axis} of propeller {propeller} is not finite")]
    NonFinite { propeller: usize, axis: &'static str },
}

impl EmitError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EmitError::Io {
            path: path.into(),
            source,
        }
    }
}
