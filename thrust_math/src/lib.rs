// +X: Right, +Y: Forwards, +Z: Up
// Yaw 0 thrusts along +Y, positive yaw turns counter clockwise (top view), positive pitch tilts towards +Z

pub mod blue_rov;
pub mod error;
pub mod pose;
pub mod solve;
pub mod table;
pub mod utils;
pub mod x3d;

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use glam::DVec3;

pub use error::{AllocError, AllocResult};
pub use pose::{map_pose, PropellerPose};
pub use solve::{solve, solve_poses, AllocationMatrix, ConfigurationMatrix, Solver};

/// Generalized force produced by a unit thrust, ordered `(fx, fy, fz, tx, ty, tz)`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Wrench {
    pub force: DVec3,
    pub torque: DVec3,
}

impl Wrench {
    pub const fn new(force: DVec3, torque: DVec3) -> Self {
        Self { force, torque }
    }

    pub fn from_array(array: [f64; 6]) -> Self {
        let [fx, fy, fz, tx, ty, tz] = array;

        Self {
            force: DVec3::new(fx, fy, fz),
            torque: DVec3::new(tx, ty, tz),
        }
    }

    pub fn to_array(&self) -> [f64; 6] {
        [
            self.force.x,
            self.force.y,
            self.force.z,
            self.torque.x,
            self.torque.y,
            self.torque.z,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.force.is_finite() && self.torque.is_finite()
    }
}

impl TryFrom<&[f64]> for Wrench {
    type Error = AllocError;

    fn try_from(value: &[f64]) -> AllocResult<Self> {
        let array: [f64; 6] = value
            .try_into()
            .map_err(|_| AllocError::InvalidDimension {
                expected: 6,
                found: value.len(),
            })?;

        Ok(Self::from_array(array))
    }
}

impl Add for Wrench {
    type Output = Wrench;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            force: self.force + rhs.force,
            torque: self.torque + rhs.torque,
        }
    }
}

impl AddAssign for Wrench {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Wrench {
    type Output = Wrench;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            force: self.force - rhs.force,
            torque: self.torque - rhs.torque,
        }
    }
}

impl SubAssign for Wrench {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Wrench {
    type Output = Wrench;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            force: self.force * rhs,
            torque: self.torque * rhs,
        }
    }
}

impl MulAssign<f64> for Wrench {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Wrench {
    type Output = Wrench;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            force: self.force / rhs,
            torque: self.torque / rhs,
        }
    }
}

impl DivAssign<f64> for Wrench {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
