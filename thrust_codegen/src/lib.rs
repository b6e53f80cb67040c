//! Generates `thrust_allocate.h` and `thrust_allocate.c` from an allocation matrix
//!
//! The generated files are built as a [`HeaderFile`] and a [`SourceFile`] first and only then
//! serialized, so the output only depends on the matrix. Re-emitting into the same directory
//! truncates and rewrites both files.

pub mod api;
pub mod error;
pub mod header;
pub mod model;
pub mod source;

use std::{fs, path::Path};

use thrust_math::AllocationMatrix;
use tracing::{debug, info, instrument};

pub use error::{EmitError, EmitResult};
pub use header::{HeaderFile, HEADER_FILE_NAME};
pub use source::{SourceFile, SOURCE_FILE_NAME};

use api::InitCall;
use model::COEFFICIENT_FIELDS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub header: String,
    pub source: String,
}

impl GeneratedArtifact {
    /// Overwrites both files in `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> EmitResult<()> {
        fs::create_dir_all(dir).map_err(|err| EmitError::io(dir, err))?;

        for (name, contents) in [
            (HEADER_FILE_NAME, &self.header),
            (SOURCE_FILE_NAME, &self.source),
        ] {
            let path = dir.join(name);
            fs::write(&path, contents).map_err(|err| EmitError::io(&path, err))?;

            debug!(?path, bytes = contents.len(), "Wrote file");
        }

        Ok(())
    }
}

/// Builds the file model of an allocation matrix without touching the disk
pub fn build_files(allocation: &AllocationMatrix) -> EmitResult<(HeaderFile, SourceFile)> {
    let mut rows = Vec::with_capacity(allocation.propeller_count());

    for (index, coefficients) in allocation.rows().enumerate() {
        if let Some(axis) = coefficients.iter().position(|it| !it.is_finite()) {
            return Err(EmitError::NonFinite {
                propeller: index,
                axis: COEFFICIENT_FIELDS[axis].name,
            });
        }

        rows.push(InitCall {
            index,
            coefficients,
        });
    }

    Ok((HeaderFile::new(rows.len()), SourceFile::new(rows)))
}

pub fn render(allocation: &AllocationMatrix) -> EmitResult<GeneratedArtifact> {
    let (header, source) = build_files(allocation)?;

    Ok(GeneratedArtifact {
        header: header.to_string(),
        source: source.to_string(),
    })
}

#[instrument(level = "debug", skip_all, fields(propellers = allocation.propeller_count()))]
pub fn emit(
    allocation: &AllocationMatrix,
    destination: impl AsRef<Path>,
) -> EmitResult<GeneratedArtifact> {
    let destination = destination.as_ref();

    let artifact = render(allocation)?;
    artifact.write_to(destination)?;

    info!(?destination, "Generated thrust allocation sources");

    Ok(artifact)
}
