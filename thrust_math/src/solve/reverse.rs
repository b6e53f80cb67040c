//! Desired Wrench -> Propeller Thrusts

use nalgebra::{MatrixXx6, SVD};
use tracing::{debug, instrument};

use crate::{AllocError, AllocResult, PropellerPose, Wrench};

use super::{configuration_matrix, AllocationMatrix, ConfigurationMatrix};

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Pseudoinverse solver
///
/// Singular values at or below `relative_tolerance * sigma_max` are treated as zero. When no
/// tolerance is configured `max(6, N) * f64::EPSILON` is used. The tolerance must be finite and
/// not negative, and `max_iterations` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver {
    relative_tolerance: Option<f64>,
    max_iterations: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            relative_tolerance: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Solver {
    pub fn with_relative_tolerance(mut self, relative_tolerance: f64) -> Self {
        self.relative_tolerance = Some(relative_tolerance);
        self
    }

    /// Iteration cap of the SVD, 0 is rejected by [`Solver::solve`] since the decomposition would
    /// never give up
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Absolute singular value cutoff for a configuration with `propellers` columns
    pub fn cutoff(&self, sigma_max: f64, propellers: usize) -> f64 {
        let relative = self
            .relative_tolerance
            .unwrap_or_else(|| propellers.max(6) as f64 * f64::EPSILON);

        relative * sigma_max
    }

    #[instrument(level = "trace", skip_all, fields(propellers = wrenches.len()))]
    pub fn solve(&self, wrenches: &[Wrench]) -> AllocResult<AllocationMatrix> {
        if wrenches.is_empty() {
            return Err(AllocError::EmptyConfiguration);
        }
        self.check()?;

        let configuration = configuration_matrix(wrenches);
        let pseudo_inverse = self.pseudo_inverse(&configuration)?;

        Ok(AllocationMatrix {
            ids: Vec::new(),
            configuration,
            pseudo_inverse,
        })
    }

    pub fn solve_poses(&self, poses: &[PropellerPose]) -> AllocResult<AllocationMatrix> {
        let wrenches: Vec<_> = poses.iter().map(PropellerPose::wrench).collect();
        let mut allocation = self.solve(&wrenches)?;

        allocation.ids = poses.iter().map(|it| it.id.clone()).collect();

        Ok(allocation)
    }

    fn check(&self) -> AllocResult<()> {
        if let Some(tolerance) = self.relative_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(AllocError::Numerical(format!(
                    "Relative tolerance must be finite and not negative, got {tolerance}"
                )));
            }
        }

        if self.max_iterations == 0 {
            return Err(AllocError::Numerical(
                "SVD iteration cap must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }

    fn pseudo_inverse(&self, configuration: &ConfigurationMatrix) -> AllocResult<MatrixXx6<f64>> {
        if let Some(idx) = configuration.iter().position(|it| !it.is_finite()) {
            return Err(AllocError::Numerical(format!(
                "Non-finite wrench component for propeller {}",
                idx / 6
            )));
        }

        let propellers = configuration.ncols();
        let svd = SVD::try_new(
            configuration.clone(),
            true,
            true,
            f64::EPSILON,
            self.max_iterations,
        )
        .ok_or_else(|| {
            AllocError::Numerical(format!(
                "SVD did not converge within {} iterations",
                self.max_iterations
            ))
        })?;

        let sigma_max = svd.singular_values.max();
        let cutoff = self.cutoff(sigma_max, propellers);
        let rank = svd.singular_values.iter().filter(|&&it| it > cutoff).count();

        debug!(propellers, sigma_max, cutoff, rank, "Decomposed configuration matrix");

        svd.pseudo_inverse(cutoff)
            .map_err(|err| AllocError::Numerical(err.to_owned()))
    }
}

/// Solves with the default tolerance
pub fn solve(wrenches: &[Wrench]) -> AllocResult<AllocationMatrix> {
    Solver::default().solve(wrenches)
}

/// Maps every pose to its wrench and solves with the default tolerance, keeping the pose ids
pub fn solve_poses(poses: &[PropellerPose]) -> AllocResult<AllocationMatrix> {
    Solver::default().solve_poses(poses)
}
