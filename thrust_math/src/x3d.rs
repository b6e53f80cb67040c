use std::fmt::{self, Display};

use crate::{utils::PoseTransform, PropellerPose};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum X3dPropellerId {
    FrontLeftBottom,
    FrontLeftTop,
    FrontRightBottom,
    FrontRightTop,
    BackLeftBottom,
    BackLeftTop,
    BackRightBottom,
    BackRightTop,
}

impl Display for X3dPropellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Mirrors `front_right_top` into all eight corners of an X3d frame
pub fn x3d_layout(front_right_top: &PropellerPose) -> Vec<PropellerPose> {
    #[rustfmt::skip]
    let propellers = [
        (X3dPropellerId::FrontRightTop, [].as_slice()),

        (X3dPropellerId::FrontRightBottom, [PoseTransform::ReflectXY].as_slice()),
        (X3dPropellerId::FrontLeftTop, [PoseTransform::ReflectYZ].as_slice()),
        (X3dPropellerId::BackRightTop, [PoseTransform::ReflectXZ].as_slice()),

        (X3dPropellerId::FrontLeftBottom, [PoseTransform::ReflectXY, PoseTransform::ReflectYZ].as_slice()),
        (X3dPropellerId::BackLeftTop, [PoseTransform::ReflectYZ, PoseTransform::ReflectXZ].as_slice()),
        (X3dPropellerId::BackRightBottom, [PoseTransform::ReflectXZ, PoseTransform::ReflectXY].as_slice()),

        (X3dPropellerId::BackLeftBottom, [PoseTransform::ReflectXY, PoseTransform::ReflectYZ, PoseTransform::ReflectXZ].as_slice()),
    ];

    propellers
        .into_iter()
        .map(|(propeller_id, transforms)| {
            let mut pose = transforms
                .iter()
                .fold(front_right_top.clone(), |pose, transform| {
                    transform.transform(&pose)
                });
            pose.id = propeller_id.to_string();

            pose
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    use crate::{solve_poses, utils::vec_from_angles, Wrench};

    use super::*;

    fn seed() -> PropellerPose {
        PropellerPose::new(
            "seed",
            0.6,
            -0.7,
            dvec3(1.0, 1.0, 1.0).normalize(),
        )
    }

    #[test]
    fn eight_mirrored_propellers() {
        let layout = x3d_layout(&seed());

        assert_eq!(layout.len(), 8);
        assert_eq!(layout[0].id, "FrontRightTop");
        assert_eq!(layout[7].id, "BackLeftBottom");

        let back_left_bottom = &layout[7];
        assert_eq!(back_left_bottom.position, -seed().position);

        let direction = vec_from_angles(back_left_bottom.pitch, back_left_bottom.yaw);
        let expected = -seed().direction();
        assert_abs_diff_eq!(direction.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(direction.y, expected.y, epsilon = 1e-12);
        assert_abs_diff_eq!(direction.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn solve_roundtrip_x3d() -> anyhow::Result<()> {
        let layout = x3d_layout(&seed());
        let allocation = solve_poses(&layout)?;

        let wrench = Wrench::new(dvec3(-0.6, 0.5, 0.3), dvec3(0.2, 0.1, 0.4));
        let thrusts = allocation.allocate(&wrench);
        let actual =
            crate::solve::forward::forward_solve(allocation.configuration(), &thrusts)?;

        let error = wrench - actual;
        assert!(error.force.length_squared() < 1e-12);
        assert!(error.torque.length_squared() < 1e-12);

        Ok(())
    }
}
