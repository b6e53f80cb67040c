use std::fmt::{self, Display};

use crate::{
    api::{self, InitCall, ARRAY_NAME, MOTOR_NUM, STRUCT_NAME},
    header::HEADER_FILE_NAME,
    model::{Function, Include},
};

pub const SOURCE_FILE_NAME: &str = "thrust_allocate.c";

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub header: Include,
    pub includes: Vec<Include>,
    pub functions: Vec<Function>,
    /// Body of the table initializer, one call per propeller
    pub rows: Vec<InitCall>,
}

impl SourceFile {
    pub fn new(rows: Vec<InitCall>) -> Self {
        Self {
            header: Include::Local(HEADER_FILE_NAME),
            includes: vec![
                Include::System("stdlib.h"),
                Include::System("stdio.h"),
                Include::System("math.h"),
            ],
            functions: vec![api::init_from_params(), api::allocate_from_vector6d()],
            rows,
        }
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        writeln!(f)?;
        for include in &self.includes {
            writeln!(f, "{include}")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "{STRUCT_NAME} {ARRAY_NAME}[{MOTOR_NUM}];")?;

        for (idx, function) in self.functions.iter().enumerate() {
            if idx != 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            writeln!(f, "{}", function.definition())?;
        }

        writeln!(f)?;
        writeln!(f, "{}", api::table_init(&self.rows).definition())
    }
}
