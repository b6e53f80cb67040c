use std::fmt::{self, Display};

use crate::{
    api::{self, MOTOR_NUM},
    model::{Function, Include, TypedefStruct},
};

pub const HEADER_FILE_NAME: &str = "thrust_allocate.h";
pub const INCLUDE_GUARD: &str = "__THRUST_ALLOCATE_H";

/// Widest return type among the declared prototypes
const RETURN_TYPE_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    pub guard: &'static str,
    pub includes: Vec<Include>,
    pub motor_num: usize,
    pub allocator: TypedefStruct,
    pub prototypes: Vec<Function>,
}

impl HeaderFile {
    pub fn new(motor_num: usize) -> Self {
        Self {
            guard: INCLUDE_GUARD,
            includes: vec![Include::Local("coordinate_conversion.h")],
            motor_num,
            allocator: api::allocator_struct(),
            prototypes: vec![api::init_from_params(), api::allocate_from_vector6d()],
        }
    }
}

impl Display for HeaderFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "#ifndef {}", self.guard)?;
        writeln!(f, "#define {}", self.guard)?;
        writeln!(f)?;
        writeln!(f, "#pragma pack(push)")?;
        writeln!(f, "#pragma pack(1)")?;
        writeln!(f)?;
        writeln!(f)?;
        for include in &self.includes {
            writeln!(f, "{include}")?;
        }
        writeln!(f)?;

        // Firmware tooling expects the CRLF pair after the motor count
        write!(f, "#define {MOTOR_NUM} {} \r\n\r\n", self.motor_num)?;

        writeln!(f)?;
        writeln!(f, "{}", self.allocator)?;
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f)?;
        for prototype in &self.prototypes {
            writeln!(f, "{}", prototype.declaration(RETURN_TYPE_WIDTH))?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "#pragma pack(pop)")?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "#endif")
    }
}
