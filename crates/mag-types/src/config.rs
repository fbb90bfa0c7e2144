// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::MagResult;

/// Rendering parameters for field-file batches.
///
/// Everything here used to be hard-coded at the top of the plotting
/// scripts; it is explicit configuration so that a sweep can be rendered
/// with different settings without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Colour model name: "rgb" or "hls".
    #[serde(default = "default_colour_model")]
    pub colour_model: String,
    /// Index of the z layer to slice (0-based, into the distinct z values).
    #[serde(default)]
    pub z_layer: usize,
    /// Keep every `arrow_stride`-th site in x and y for arrow overlays.
    #[serde(default = "default_arrow_stride")]
    pub arrow_stride: usize,
    /// Uniform length-unit conversion applied to lattice coordinates.
    /// Default converts the simulator's metres to nanometres.
    #[serde(default = "default_length_scale")]
    pub length_scale: f64,
}

fn default_colour_model() -> String {
    "rgb".to_string()
}
fn default_arrow_stride() -> usize {
    5
}
fn default_length_scale() -> f64 {
    1e9
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            colour_model: default_colour_model(),
            z_layer: 0,
            arrow_stride: default_arrow_stride(),
            length_scale: default_length_scale(),
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> MagResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
