//! Propeller list cache kept by the desktop propeller editor
//!
//! `{"propeller_info": [{"id": "...", "params": [pitch, yaw, x, y, z]}]}`, angles in radians

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::config::{
    default_output_dir, AllocatorConfig, AngleUnit, CustomDefinition, LayoutDefinition,
    PropellerDefinition,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropellerCache {
    #[serde(default)]
    pub propeller_info: Vec<CachedPropeller>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedPropeller {
    pub id: String,
    pub params: Vec<f64>,
}

impl TryFrom<&CachedPropeller> for PropellerDefinition {
    type Error = anyhow::Error;

    fn try_from(value: &CachedPropeller) -> anyhow::Result<Self> {
        let &[pitch, yaw, x, y, z] = value.params.as_slice() else {
            bail!(
                "Propeller {:?} has {} params, expected pitch, yaw, x, y and z",
                value.id,
                value.params.len()
            );
        };

        Ok(PropellerDefinition {
            id: value.id.clone(),
            pitch,
            yaw,
            x,
            y,
            z,
        })
    }
}

pub fn parse_cache(contents: &str) -> anyhow::Result<Vec<PropellerDefinition>> {
    let cache: PropellerCache = serde_json::from_str(contents)?;

    cache
        .propeller_info
        .iter()
        .map(PropellerDefinition::try_from)
        .collect()
}

pub fn into_config(name: String, propellers: Vec<PropellerDefinition>) -> AllocatorConfig {
    AllocatorConfig {
        name,
        output_dir: default_output_dir(),
        angle_unit: AngleUnit::Radians,
        relative_tolerance: None,
        layout: LayoutDefinition::Custom(CustomDefinition { propellers }),
    }
}
