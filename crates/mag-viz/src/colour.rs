// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Colour Encoder
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! HLS colour encoding of magnetisation vectors.
//!
//! The in-plane angle of each vector becomes the hue, the out-of-plane
//! component the lightness, saturation is fixed at 1. Stateless and
//! deterministic.

use std::f64::consts::PI;
use std::str::FromStr;

use ndarray::Array2;

use mag_types::error::{MagError, MagResult};

/// Output colour space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourModel {
    /// Red/green/blue triples in [0, 1].
    Rgb,
    /// Hue in [0, 2π), lightness and saturation in [0, 1].
    Hls,
}

impl FromStr for ColourModel {
    type Err = MagError;

    fn from_str(s: &str) -> MagResult<Self> {
        match s {
            "rgb" => Ok(ColourModel::Rgb),
            "hls" => Ok(ColourModel::Hls),
            other => Err(MagError::ConfigError(format!(
                "unsupported colour model '{other}': valid models are rgb, hls"
            ))),
        }
    }
}

/// Encode (N, 3) unit vectors as (N, 3) colour triples.
///
/// hue = atan2(vy, vx) folded into [0, 2π); lightness = 0.5 * (vz + 1);
/// saturation = 1. For [`ColourModel::Rgb`] each triple then goes
/// through the standard HLS→RGB transform.
pub fn generate_colours(field: &Array2<f64>, model: ColourModel) -> Array2<f64> {
    let mut out = hls_angles(field);
    if model == ColourModel::Hls {
        return out;
    }
    for mut row in out.rows_mut() {
        let rgb = hls_to_rgb(row[0] / (2.0 * PI), row[1], row[2]);
        row[0] = rgb[0];
        row[1] = rgb[1];
        row[2] = rgb[2];
    }
    out
}

/// Encode with a colour model given by name; unknown names fail with a
/// configuration error.
pub fn generate_colours_named(field: &Array2<f64>, model: &str) -> MagResult<Array2<f64>> {
    Ok(generate_colours(field, model.parse()?))
}

/// The intermediate (hue, lightness, saturation) triples.
fn hls_angles(field: &Array2<f64>) -> Array2<f64> {
    let n = field.nrows();
    let mut hls = Array2::ones((n, 3));
    for i in 0..n {
        let mut hue = field[[i, 1]].atan2(field[[i, 0]]);
        if hue < 0.0 {
            hue += 2.0 * PI;
        }
        hls[[i, 0]] = hue;
        hls[[i, 1]] = 0.5 * (field[[i, 2]] + 1.0);
    }
    hls
}

/// Standard HLS→RGB transform; `h` is in the [0, 1) hue domain.
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    [
        ramp(m1, m2, h + 1.0 / 3.0),
        ramp(m1, m2, h),
        ramp(m1, m2, h - 1.0 / 3.0),
    ]
}

fn ramp(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * 6.0 * hue
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
