//! The C surface exposed to firmware: the allocator struct, its two functions and the table initializer

use std::fmt::{self, Display};

use crate::model::{
    aligned_member, Field, Function, Param, TypedefStruct, BODY_INDENT, COEFFICIENT_FIELDS,
};

pub const STRUCT_NAME: &str = "ThrustAllocate";
pub const ARRAY_NAME: &str = "thrust_matrix";
pub const MOTOR_NUM: &str = "MOTOR_NUM";

pub const INIT_FROM_PARAMS: &str = "ThrustAllocate_InitfromParams";
pub const ALLOCATE_FROM_VECTOR: &str = "ThrustAllocate_AllocatefromVector6d";
pub const TABLE_INIT: &str = "ThrustAllocateInit";

const ALLOCATOR_PARAM: Param = Param {
    ty: "ThrustAllocate *",
    name: "p_ta",
    doc: "allocator of the propeller",
};

pub fn allocator_struct() -> TypedefStruct {
    TypedefStruct {
        name: STRUCT_NAME,
        brief: "Thrust allocation",
        details: &[
            "Maps a generalized force onto the thrust of one propeller. The generalized force is",
            "always a six dimensional vector so every allocation row has six coefficients.",
        ],
        fields: &COEFFICIENT_FIELDS,
    }
}

fn coefficient_param(field: &Field) -> Param {
    Param {
        ty: field.ty,
        name: field.name,
        doc: field.doc,
    }
}

pub fn init_from_params() -> Function {
    let params = std::iter::once(ALLOCATOR_PARAM)
        .chain(COEFFICIENT_FIELDS.iter().map(coefficient_param))
        .collect();

    let body = COEFFICIENT_FIELDS
        .iter()
        .map(|field| {
            format!(
                "{}->{} = {};",
                ALLOCATOR_PARAM.name,
                aligned_member(field.name),
                field.name
            )
        })
        .collect();

    Function {
        return_ty: "void",
        name: INIT_FROM_PARAMS,
        params,
        brief: "Initializes the allocator of one propeller from its coefficients",
        returns: None,
        body,
        indent: BODY_INDENT,
    }
}

pub fn allocate_from_vector6d() -> Function {
    let vector = Param {
        ty: "Vector6d *",
        name: "t",
        doc: "six dimensional generalized force",
    };

    let mut body = vec!["float thrust = 0;".to_owned(), String::new()];
    body.extend(COEFFICIENT_FIELDS.iter().map(|field| {
        format!(
            "thrust += {}->{} * {}->{};",
            vector.name, field.axis, ALLOCATOR_PARAM.name, field.name
        )
    }));
    body.push(String::new());
    body.push("return thrust;".to_owned());

    Function {
        return_ty: "float",
        name: ALLOCATE_FROM_VECTOR,
        params: vec![ALLOCATOR_PARAM, vector],
        brief: "Thrust of one propeller for the commanded generalized force",
        returns: Some("float"),
        body,
        indent: BODY_INDENT,
    }
}

/// Fills `thrust_matrix` with one allocation row per propeller
///
/// Calls are unindented, with one blank line after `{` and two before `}`
pub fn table_init(rows: &[InitCall]) -> Function {
    let mut body = vec![String::new()];
    body.extend(rows.iter().map(ToString::to_string));
    body.extend([String::new(), String::new()]);

    Function {
        return_ty: "void",
        name: TABLE_INIT,
        params: Vec::new(),
        brief: "Loads the thrust allocation matrix",
        returns: None,
        body,
        indent: 0,
    }
}

/// `ThrustAllocate_InitfromParams(&thrust_matrix[i],...);` for one allocation row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitCall {
    pub index: usize,
    pub coefficients: [f64; 6],
}

impl Display for InitCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INIT_FROM_PARAMS}(&{ARRAY_NAME}[{}]", self.index)?;
        for coefficient in self.coefficients {
            write!(f, ",{}", format_coefficient(coefficient))?;
        }
        write!(f, ");")
    }
}

/// Fixed point with six decimals, never exponent notation
pub fn format_coefficient(value: f64) -> String {
    format!("{value:.6}")
}
