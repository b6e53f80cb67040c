//! Propeller mounting pose -> Wrench

use glam::{dvec3, DVec3};

use crate::{utils::vec_from_angles, Wrench};

#[derive(Debug, Clone, PartialEq)]
pub struct PropellerPose {
    /// Display name, not required to be unique
    pub id: String,
    /// Elevation of the thrust axis in radians
    pub pitch: f64,
    /// Azimuth of the thrust axis in radians, 0 thrusts along +Y
    pub yaw: f64,
    /// Offset from origin
    pub position: DVec3,
}

impl PropellerPose {
    pub fn new(id: impl Into<String>, pitch: f64, yaw: f64, position: DVec3) -> Self {
        Self {
            id: id.into(),
            pitch,
            yaw,
            position,
        }
    }

    /// Unit vector
    pub fn direction(&self) -> DVec3 {
        vec_from_angles(self.pitch, self.yaw)
    }

    pub fn wrench(&self) -> Wrench {
        let force = self.direction();

        Wrench {
            force,
            torque: self.position.cross(force),
        }
    }
}

/// Generalized force produced by a unit thrust from a propeller mounted at `(x, y, z)`
pub fn map_pose(pitch: f64, yaw: f64, x: f64, y: f64, z: f64) -> Wrench {
    let force = vec_from_angles(pitch, yaw);
    let torque = dvec3(x, y, z).cross(force);

    Wrench { force, torque }
}
