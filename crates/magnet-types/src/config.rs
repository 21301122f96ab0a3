// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MagnetResult;

/// Macroscopic solenoid description as it appears in JSON config files.
///
/// Geometry validation happens when the solenoid model is built from
/// this config, not at deserialization time, so a config file can be
/// loaded, inspected, and reported on even when its geometry is bad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolenoidConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Winding current [A].
    #[serde(default = "default_current")]
    pub current: f64,
    /// Axial length [m].
    #[serde(default = "default_length")]
    pub length: f64,
    /// Turns per meter [1/m].
    #[serde(default = "default_turn_density")]
    pub turn_density: f64,
    /// Center of the winding, (x0, y0, z0) [m].
    #[serde(default)]
    pub center: [f64; 3],
    /// Winding radius [m].
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_name() -> String {
    "solenoid".to_string()
}
fn default_current() -> f64 {
    400.0
}
fn default_length() -> f64 {
    1.0
}
fn default_turn_density() -> f64 {
    2000.0
}
fn default_radius() -> f64 {
    0.5
}

impl Default for SolenoidConfig {
    fn default() -> Self {
        SolenoidConfig {
            name: default_name(),
            current: default_current(),
            length: default_length(),
            turn_density: default_turn_density(),
            center: [0.0; 3],
            radius: default_radius(),
        }
    }
}

impl SolenoidConfig {
    /// Load a config from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MagnetResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SolenoidConfig = serde_json::from_str(&text)?;
        Ok(config)
    }
}
