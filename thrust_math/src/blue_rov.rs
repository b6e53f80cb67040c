use std::fmt::{self, Display};

use crate::{utils::PoseTransform, PropellerPose};

/// Propeller ids for blue rov heavy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeavyPropellerId {
    LateralFrontLeft,
    LateralFrontRight,
    LateralBackLeft,
    LateralBackRight,
    VerticalFrontLeft,
    VerticalFrontRight,
    VerticalBackLeft,
    VerticalBackRight,
}

impl Display for HeavyPropellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Mirrors the front right lateral and vertical seeds into the four corners of a heavy frame
pub fn heavy_layout(
    lateral_front_right: &PropellerPose,
    vertical_front_right: &PropellerPose,
) -> Vec<PropellerPose> {
    #[rustfmt::skip]
    let propellers = [
        (HeavyPropellerId::LateralFrontRight, lateral_front_right, [].as_slice()),
        (HeavyPropellerId::LateralFrontLeft, lateral_front_right, [PoseTransform::ReflectYZ].as_slice()),
        (HeavyPropellerId::LateralBackRight, lateral_front_right, [PoseTransform::ReflectXZ].as_slice()),
        (HeavyPropellerId::LateralBackLeft, lateral_front_right, [PoseTransform::ReflectYZ, PoseTransform::ReflectXZ].as_slice()),

        (HeavyPropellerId::VerticalFrontRight, vertical_front_right, [].as_slice()),
        (HeavyPropellerId::VerticalFrontLeft, vertical_front_right, [PoseTransform::ReflectYZ].as_slice()),
        (HeavyPropellerId::VerticalBackRight, vertical_front_right, [PoseTransform::ReflectXZ].as_slice()),
        (HeavyPropellerId::VerticalBackLeft, vertical_front_right, [PoseTransform::ReflectYZ, PoseTransform::ReflectXZ].as_slice()),
    ];

    propellers
        .into_iter()
        .map(|(propeller_id, seed, transforms)| {
            let mut pose = transforms
                .iter()
                .fold(seed.clone(), |pose, transform| transform.transform(&pose));
            pose.id = propeller_id.to_string();

            pose
        })
        .collect()
}
