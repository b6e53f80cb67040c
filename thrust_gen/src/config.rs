use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use glam::dvec3;
use serde::{Deserialize, Serialize};
use thrust_math::{blue_rov::heavy_layout, x3d::x3d_layout, PropellerPose, Solver};

use crate::cache;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatorConfig {
    pub name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub angle_unit: AngleUnit,
    /// Overrides the default singular value cutoff of the solver
    #[serde(default)]
    pub relative_tolerance: Option<f64>,

    pub layout: LayoutDefinition,
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LayoutDefinition {
    X3d(X3dDefinition),
    BlueRovHeavy(BlueRovDefinition),
    Custom(CustomDefinition),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct X3dDefinition {
    /// Front right top propeller, mirrored into the other seven
    pub seed: PropellerDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlueRovDefinition {
    pub lateral: PropellerDefinition,
    pub vertical: PropellerDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomDefinition {
    pub propellers: Vec<PropellerDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropellerDefinition {
    #[serde(default)]
    pub id: String,
    pub pitch: f64,
    pub yaw: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PropellerDefinition {
    pub fn to_pose(&self, unit: AngleUnit) -> PropellerPose {
        PropellerPose::new(
            self.id.clone(),
            unit.to_radians(self.pitch),
            unit.to_radians(self.yaw),
            dvec3(self.x, self.y, self.z),
        )
    }
}

impl AllocatorConfig {
    /// Propeller poses in the order they will appear in the generated table
    pub fn poses(&self) -> Vec<PropellerPose> {
        let unit = self.angle_unit;

        match &self.layout {
            LayoutDefinition::X3d(x3d) => x3d_layout(&x3d.seed.to_pose(unit)),
            LayoutDefinition::BlueRovHeavy(blue_rov) => heavy_layout(
                &blue_rov.lateral.to_pose(unit),
                &blue_rov.vertical.to_pose(unit),
            ),
            LayoutDefinition::Custom(custom) => custom
                .propellers
                .iter()
                .map(|it| it.to_pose(unit))
                .collect(),
        }
    }

    pub fn solver(&self) -> Solver {
        match self.relative_tolerance {
            Some(tolerance) => Solver::default().with_relative_tolerance(tolerance),
            None => Solver::default(),
        }
    }
}

/// Reads a TOML config, or a propeller cache when the file has a `.json` extension
pub fn read_config<P: AsRef<Path>>(path: P) -> anyhow::Result<AllocatorConfig> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("Read config {}", path.display()))?;

    if path.extension().is_some_and(|it| it == "json") {
        let name = path
            .file_stem()
            .map(|it| it.to_string_lossy().into_owned())
            .unwrap_or_default();

        return cache::parse_cache(&contents)
            .map(|propellers| cache::into_config(name, propellers))
            .with_context(|| format!("Parse propeller cache {}", path.display()));
    }

    toml::from_str(&contents).with_context(|| format!("Parse config {}", path.display()))
}
