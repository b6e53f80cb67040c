pub mod forward;
pub mod reverse;

use nalgebra::{Matrix6xX, MatrixXx6, Vector6};

use crate::{table::Table, Wrench};

pub use reverse::{solve, solve_poses, Solver};

/// One column per propeller, rows are `(fx, fy, fz, tx, ty, tz)`
pub type ConfigurationMatrix = Matrix6xX<f64>;

pub fn configuration_matrix(wrenches: &[Wrench]) -> ConfigurationMatrix {
    Matrix6xX::from_iterator(
        wrenches.len(),
        wrenches.iter().flat_map(|it| it.to_array().into_iter()),
    )
}

/// Pseudoinverse of a [`ConfigurationMatrix`], row `i` holds the coefficients
/// `(x_cf, y_cf, z_cf, rx_cf, ry_cf, rz_cf)` of propeller `i`
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationMatrix {
    pub(crate) ids: Vec<String>,

    pub(crate) configuration: ConfigurationMatrix,
    pub(crate) pseudo_inverse: MatrixXx6<f64>,
}

impl AllocationMatrix {
    pub fn propeller_count(&self) -> usize {
        self.pseudo_inverse.nrows()
    }

    /// Propeller ids in solve order, empty when solved from bare wrenches
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn configuration(&self) -> &ConfigurationMatrix {
        &self.configuration
    }

    pub fn matrix(&self) -> &MatrixXx6<f64> {
        &self.pseudo_inverse
    }

    pub fn row(&self, propeller: usize) -> Option<[f64; 6]> {
        if propeller >= self.propeller_count() {
            return None;
        }

        let row = self.pseudo_inverse.row(propeller);
        Some(std::array::from_fn(|axis| row[axis]))
    }

    pub fn rows(&self) -> impl Iterator<Item = [f64; 6]> + '_ {
        self.pseudo_inverse
            .row_iter()
            .map(|row| std::array::from_fn(|axis| row[axis]))
    }

    /// Per propeller thrust for a commanded wrench
    pub fn allocate(&self, wrench: &Wrench) -> Vec<f64> {
        let command = Vector6::from(wrench.to_array());

        (&self.pseudo_inverse * command).iter().copied().collect()
    }

    pub fn table(&self) -> Table<'_> {
        Table::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_abs_diff_eq;
    use glam::{dvec3, DVec3};

    use crate::{AllocError, PropellerPose, Wrench};

    use super::*;

    fn arbitrary_layout() -> Vec<PropellerPose> {
        let diagonal = dvec3(1.0, 1.0, 0.0).normalize();
        let anti_diagonal = dvec3(-1.0, 1.0, 0.0).normalize();

        vec![
            PropellerPose::new("right", 0.0, 0.0, diagonal),
            PropellerPose::new("left", 0.0, 0.0, anti_diagonal),
            PropellerPose::new("lateral", 0.0, -FRAC_PI_2, DVec3::ZERO),
            PropellerPose::new("up 1", FRAC_PI_2, 0.0, diagonal * 2.0),
            PropellerPose::new("up 2", FRAC_PI_2, 0.0, anti_diagonal * 2.0),
            PropellerPose::new("up 3", FRAC_PI_2, 0.0, dvec3(0.0, -2.0, 0.0)),
        ]
    }

    fn assert_pseudo_inverse(allocation: &AllocationMatrix) {
        let m = allocation.configuration();
        let a = allocation.matrix();

        assert_eq!(a.nrows(), m.ncols());
        assert_eq!(a.ncols(), 6);
        assert_abs_diff_eq!(m * a * m, m.clone(), epsilon = 1e-9);
        assert_abs_diff_eq!(a * m * a, a.clone(), epsilon = 1e-9);
    }

    #[test]
    fn empty_configuration() {
        assert_eq!(solve(&[]), Err(AllocError::EmptyConfiguration));
        assert_eq!(solve_poses(&[]), Err(AllocError::EmptyConfiguration));
    }

    #[test]
    fn orthonormal_is_transpose() -> anyhow::Result<()> {
        let wrenches = [
            Wrench::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            Wrench::from_array([0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
        ];

        let allocation = solve(&wrenches)?;

        assert_eq!(allocation.propeller_count(), 2);
        let rows: Vec<_> = allocation.rows().collect();
        for (row, wrench) in rows.iter().zip(&wrenches) {
            for (actual, expected) in row.iter().zip(wrench.to_array()) {
                assert_abs_diff_eq!(*actual, expected, epsilon = 1e-12);
            }
        }
        assert_abs_diff_eq!(
            allocation.matrix().clone(),
            allocation.configuration().transpose(),
            epsilon = 1e-12
        );

        Ok(())
    }

    #[test]
    fn single_propeller() -> anyhow::Result<()> {
        let allocation = solve_poses(&[PropellerPose::new(
            "only",
            FRAC_PI_4,
            0.3,
            dvec3(0.2, -0.1, 0.4),
        )])?;

        assert_eq!(allocation.propeller_count(), 1);
        assert_eq!(allocation.ids(), &["only".to_owned()]);
        assert_pseudo_inverse(&allocation);

        Ok(())
    }

    #[test]
    fn roundtrip_arbitrary() -> anyhow::Result<()> {
        let layout = arbitrary_layout();
        let allocation = solve_poses(&layout)?;

        assert_eq!(allocation.propeller_count(), layout.len());
        assert_pseudo_inverse(&allocation);

        let wrench = Wrench::new(dvec3(0.9, -0.5, 0.3), dvec3(-0.2, 0.1, 0.4));
        let thrusts = allocation.allocate(&wrench);
        let actual = forward::forward_solve(allocation.configuration(), &thrusts)?;

        let error = wrench - actual;
        assert!(error.force.length_squared() < 1e-12);
        assert!(error.torque.length_squared() < 1e-12);

        Ok(())
    }

    #[test]
    fn rank_deficient_is_minimum_norm() -> anyhow::Result<()> {
        // Four vertical propellers can only lift, pitch and roll
        let layout = [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]
            .into_iter()
            .enumerate()
            .map(|(idx, (x, y))| {
                PropellerPose::new(format!("vertical {idx}"), FRAC_PI_2, 0.0, dvec3(x, y, 0.0))
            })
            .collect::<Vec<_>>();

        let allocation = solve_poses(&layout)?;
        assert_pseudo_inverse(&allocation);

        // Pure lift is shared evenly
        let thrusts = allocation.allocate(&Wrench::new(DVec3::Z, DVec3::ZERO));
        for thrust in thrusts {
            assert_abs_diff_eq!(thrust, 0.25, epsilon = 1e-9);
        }

        // Surge is unreachable so the least squares answer is no thrust at all
        let thrusts = allocation.allocate(&Wrench::new(DVec3::Y, DVec3::ZERO));
        for thrust in thrusts {
            assert_abs_diff_eq!(thrust, 0.0, epsilon = 1e-9);
        }

        Ok(())
    }

    #[test]
    fn more_propellers_than_axes() -> anyhow::Result<()> {
        let mut layout = arbitrary_layout();
        layout.extend(arbitrary_layout().into_iter().map(|mut it| {
            it.id.push_str(" extra");
            it.yaw += 0.1;
            it
        }));

        let allocation = solve_poses(&layout)?;

        assert_eq!(allocation.propeller_count(), 12);
        assert_pseudo_inverse(&allocation);

        Ok(())
    }

    #[test]
    fn zero_matrix_allocates_nothing() -> anyhow::Result<()> {
        let allocation = solve(&[Wrench::default(), Wrench::default()])?;

        assert!(allocation.matrix().iter().all(|&it| it == 0.0));

        Ok(())
    }

    #[test]
    fn non_finite_pose() {
        let layout = [
            PropellerPose::new("ok", 0.0, 0.0, DVec3::ZERO),
            PropellerPose::new("broken", f64::NAN, 0.0, DVec3::ZERO),
        ];

        assert!(matches!(
            solve_poses(&layout),
            Err(AllocError::Numerical(_))
        ));

        let layout = [PropellerPose::new("far", 0.0, 0.0, dvec3(f64::INFINITY, 0.0, 0.0))];
        assert!(matches!(
            solve_poses(&layout),
            Err(AllocError::Numerical(_))
        ));
    }

    #[test]
    fn input_order_is_preserved() -> anyhow::Result<()> {
        let layout = arbitrary_layout();
        let allocation = solve_poses(&layout)?;

        let ids: Vec<_> = layout.iter().map(|it| it.id.clone()).collect();
        assert_eq!(allocation.ids(), ids.as_slice());

        for (idx, pose) in layout.iter().enumerate() {
            let column = allocation.configuration().column(idx);
            for (actual, expected) in column.iter().zip(pose.wrench().to_array()) {
                assert_eq!(*actual, expected);
            }
        }

        Ok(())
    }

    #[test]
    fn loose_tolerance_drops_small_singular_values() -> anyhow::Result<()> {
        let wrenches = [
            Wrench::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            Wrench::from_array([0.0, 1e-6, 0.0, 0.0, 0.0, 0.0]),
        ];

        let strict = solve(&wrenches)?;
        assert_abs_diff_eq!(strict.matrix()[(1, 1)], 1e6, epsilon = 1e-3);

        let loose = Solver::default()
            .with_relative_tolerance(1e-3)
            .solve(&wrenches)?;
        assert_abs_diff_eq!(loose.matrix()[(1, 1)], 0.0);
        assert_abs_diff_eq!(loose.matrix()[(0, 0)], 1.0, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn invalid_tolerance_is_rejected() -> anyhow::Result<()> {
        let wrenches = [Wrench::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0])];

        for tolerance in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1e-9] {
            let result = Solver::default()
                .with_relative_tolerance(tolerance)
                .solve(&wrenches);

            assert!(
                matches!(result, Err(AllocError::Numerical(_))),
                "tolerance {tolerance} gave {result:?}"
            );
        }

        // Zero keeps every non zero singular value
        let allocation = Solver::default()
            .with_relative_tolerance(0.0)
            .solve(&wrenches)?;
        assert_abs_diff_eq!(allocation.matrix()[(0, 0)], 1.0, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn iteration_cap() -> anyhow::Result<()> {
        let wrenches = [Wrench::from_array([0.0, 0.0, 2.0, 0.0, 0.0, 0.0])];

        assert!(matches!(
            Solver::default().with_max_iterations(0).solve(&wrenches),
            Err(AllocError::Numerical(_))
        ));

        let allocation = Solver::default().with_max_iterations(50).solve(&wrenches)?;
        assert_abs_diff_eq!(allocation.matrix()[(0, 2)], 0.5, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn row_out_of_range() -> anyhow::Result<()> {
        let allocation = solve(&[Wrench::from_array([0.0, 0.0, 2.0, 0.0, 0.0, 0.0])])?;

        let row = allocation.row(0).expect("First row");
        assert_abs_diff_eq!(row[2], 0.5, epsilon = 1e-12);
        assert_eq!(allocation.row(1), None);

        Ok(())
    }
}
