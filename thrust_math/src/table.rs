use std::fmt::{self, Display};

use crate::AllocationMatrix;

pub const AXIS_HEADERS: [&str; 6] = ["x", "y", "z", "rx", "ry", "rz"];

const CELL_WIDTH: usize = 12;

/// Read only grid view of an [`AllocationMatrix`], one row per propeller
pub struct Table<'a> {
    allocation: &'a AllocationMatrix,
}

impl<'a> Table<'a> {
    pub fn new(allocation: &'a AllocationMatrix) -> Self {
        Self { allocation }
    }

    fn label(&self, propeller: usize) -> String {
        self.allocation
            .ids()
            .get(propeller)
            .cloned()
            .unwrap_or_else(|| propeller.to_string())
    }
}

impl Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.allocation.propeller_count();
        let label_width = (0..count)
            .map(|it| self.label(it).chars().count())
            .max()
            .unwrap_or(0);

        write!(f, "{:label_width$}", "")?;
        for header in AXIS_HEADERS {
            write!(f, " {header:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;

        for (propeller, row) in self.allocation.rows().enumerate() {
            write!(f, "{:<label_width$}", self.label(propeller))?;
            for coefficient in row {
                write!(f, " {coefficient:>CELL_WIDTH$.6}")?;
            }
            writeln!(f)?;
        }

        write!(f, "shape: {count} × 6")
    }
}
