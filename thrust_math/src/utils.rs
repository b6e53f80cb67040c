use std::f64::consts::PI;

use glam::{dvec3, DVec3};

use crate::{AllocError, AllocResult, PropellerPose};

/// Unit thrust direction for a propeller tilted by `pitch` (elevation) and `yaw` (azimuth from +Y)
pub fn vec_from_angles(pitch: f64, yaw: f64) -> DVec3 {
    let x = -pitch.cos() * yaw.sin();
    let y = pitch.cos() * yaw.cos();
    let z = pitch.sin();

    dvec3(x, y, z)
}

/// Cross product of two loosely typed vectors, both must be 3 dimensional
pub fn cross(a: &[f64], b: &[f64]) -> AllocResult<DVec3> {
    Ok(to_vec3(a)?.cross(to_vec3(b)?))
}

fn to_vec3(vec: &[f64]) -> AllocResult<DVec3> {
    match vec {
        &[x, y, z] => Ok(dvec3(x, y, z)),
        _ => Err(AllocError::InvalidDimension {
            expected: 3,
            found: vec.len(),
        }),
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PoseTransform {
    ReflectXY,
    ReflectYZ,
    ReflectXZ,
}

impl PoseTransform {
    pub fn transform_vec(&self, vec: DVec3) -> DVec3 {
        match self {
            PoseTransform::ReflectXY => dvec3(vec.x, vec.y, -vec.z),
            PoseTransform::ReflectYZ => dvec3(-vec.x, vec.y, vec.z),
            PoseTransform::ReflectXZ => dvec3(vec.x, -vec.y, vec.z),
        }
    }

    /// Mirrors both the mounting point and the thrust direction of `pose`
    pub fn transform(&self, pose: &PropellerPose) -> PropellerPose {
        let (pitch, yaw) = match self {
            PoseTransform::ReflectXY => (-pose.pitch, pose.yaw),
            PoseTransform::ReflectYZ => (pose.pitch, -pose.yaw),
            PoseTransform::ReflectXZ => (pose.pitch, PI - pose.yaw),
        };

        PropellerPose {
            id: pose.id.clone(),
            pitch,
            yaw,
            position: self.transform_vec(pose.position),
        }
    }
}
