//! Propeller Thrusts -> Wrench

use nalgebra::DVector;

use crate::{AllocError, AllocResult, Wrench};

use super::ConfigurationMatrix;

pub fn forward_solve(configuration: &ConfigurationMatrix, thrusts: &[f64]) -> AllocResult<Wrench> {
    if thrusts.len() != configuration.ncols() {
        return Err(AllocError::InvalidDimension {
            expected: configuration.ncols(),
            found: thrusts.len(),
        });
    }

    let thrusts = DVector::from_column_slice(thrusts);
    let wrench = configuration * thrusts;

    Wrench::try_from(wrench.as_slice())
}
