//! Small C syntax model, only covers what `thrust_allocate.{h,c}` needs

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Include {
    /// `#include "path"`
    Local(&'static str),
    /// `#include <path>`
    System(&'static str),
}

impl Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Include::Local(path) => write!(f, "#include \"{path}\""),
            Include::System(path) => write!(f, "#include <{path}>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub ty: &'static str,
    pub name: &'static str,
    /// Matching member of `Vector6d`
    pub axis: &'static str,
    pub doc: &'static str,
}

/// The six coefficients of one allocation row, in matrix column order
pub const COEFFICIENT_FIELDS: [Field; 6] = [
    Field { ty: "float", name: "x_cf", axis: "x", doc: "force coefficient along X" },
    Field { ty: "float", name: "y_cf", axis: "y", doc: "force coefficient along Y" },
    Field { ty: "float", name: "z_cf", axis: "z", doc: "force coefficient along Z" },
    Field { ty: "float", name: "rx_cf", axis: "rx", doc: "torque coefficient about X" },
    Field { ty: "float", name: "ry_cf", axis: "ry", doc: "torque coefficient about Y" },
    Field { ty: "float", name: "rz_cf", axis: "rz", doc: "torque coefficient about Z" },
];

const FIELD_NAME_WIDTH: usize = 5;

/// Default body indentation
pub const BODY_INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedefStruct {
    pub name: &'static str,
    pub brief: &'static str,
    pub details: &'static [&'static str],
    pub fields: &'static [Field],
}

impl Display for TypedefStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/**")?;
        writeln!(f, " * @brief   {}", self.brief)?;
        for line in self.details {
            writeln!(f, " *          {line}")?;
        }
        writeln!(f, " *")?;
        writeln!(f, " */")?;
        writeln!(f, "typedef struct {{")?;
        for field in self.fields {
            let member = format!("{};", field.name);
            writeln!(
                f,
                "    {} {member:<width$} // {}",
                field.ty,
                field.doc,
                width = FIELD_NAME_WIDTH + 1
            )?;
        }
        write!(f, "}} {};", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub ty: &'static str,
    pub name: &'static str,
    pub doc: &'static str,
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ty.ends_with('*') {
            write!(f, "{}{}", self.ty, self.name)
        } else {
            write!(f, "{} {}", self.ty, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub return_ty: &'static str,
    pub name: &'static str,
    pub params: Vec<Param>,
    pub brief: &'static str,
    pub returns: Option<&'static str>,
    pub body: Vec<String>,
    /// Spaces in front of every non empty body line
    pub indent: usize,
}

impl Function {
    fn signature(&self, return_width: usize) -> String {
        let params = if self.params.is_empty() {
            "void".to_owned()
        } else {
            self.params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "{:<return_width$} {}({params})",
            self.return_ty, self.name
        )
    }

    /// Prototype as it appears in a header, return types padded to `return_width`
    pub fn declaration(&self, return_width: usize) -> Declaration<'_> {
        Declaration {
            function: self,
            return_width,
        }
    }

    /// Doxygen block, signature and body
    pub fn definition(&self) -> Definition<'_> {
        Definition { function: self }
    }
}

pub struct Declaration<'a> {
    function: &'a Function,
    return_width: usize,
}

impl Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.function.signature(self.return_width))
    }
}

pub struct Definition<'a> {
    function: &'a Function,
}

impl Display for Definition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function;

        writeln!(f, "/**")?;
        writeln!(f, " * @brief {}", function.brief)?;
        writeln!(f, " *")?;
        for param in &function.params {
            writeln!(f, " * @param {} {}", param.name, param.doc)?;
        }
        if let Some(returns) = function.returns {
            writeln!(f, " * @return {returns}")?;
        }
        writeln!(f, " */")?;
        writeln!(f, "{}", function.signature(0))?;
        writeln!(f, "{{")?;
        for line in &function.body {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "{:indent$}{line}", "", indent = function.indent)?;
            }
        }
        write!(f, "}}")
    }
}

/// Pads a member name so the assignment operators of a field block line up
pub fn aligned_member(name: &str) -> String {
    format!("{name:<FIELD_NAME_WIDTH$}")
}
