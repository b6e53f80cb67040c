use std::path::{Path, PathBuf};

use anyhow::Context;
use thrust_codegen::GeneratedArtifact;
use thrust_math::AllocationMatrix;
use tracing::info;

use crate::config::{read_config, AllocatorConfig};

/// Every request solves from the current config, nothing is reused between calls
pub fn solve_config(config: &AllocatorConfig) -> anyhow::Result<AllocationMatrix> {
    let poses = config.poses();
    info!(name = %config.name, propellers = poses.len(), "Solving allocation matrix");

    config
        .solver()
        .solve_poses(&poses)
        .with_context(|| format!("Solve allocation matrix for {}", config.name))
}

pub fn show(config_path: &Path) -> anyhow::Result<String> {
    let config = read_config(config_path)?;
    let allocation = solve_config(&config)?;

    Ok(allocation.table().to_string())
}

pub fn generate(
    config_path: &Path,
    out: Option<PathBuf>,
) -> anyhow::Result<(PathBuf, GeneratedArtifact)> {
    let config = read_config(config_path)?;
    let allocation = solve_config(&config)?;

    let out = out.unwrap_or(config.output_dir);
    let artifact = thrust_codegen::emit(&allocation, &out)
        .with_context(|| format!("Generate sources in {}", out.display()))?;

    Ok((out, artifact))
}
