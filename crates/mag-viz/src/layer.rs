// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Layer Extraction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-z-plane views of a lattice for 2D rendering.
//!
//! Lattice z values are generated, not parsed, so sites of one layer
//! compare exactly equal and an equality filter is sound.

use ndarray::{Array2, Array3};

use mag_types::error::{MagError, MagResult};
use mag_types::state::Lattice;

/// Flat indices of every site in the `layer`-th distinct z plane.
pub fn z_layer_indices(lattice: &Lattice, layer: usize) -> MagResult<Vec<usize>> {
    if layer >= lattice.zs.len() {
        return Err(MagError::ConfigError(format!(
            "z layer {layer} out of range: lattice has {} layers",
            lattice.zs.len()
        )));
    }
    let z0 = lattice.zs[layer];
    Ok(lattice
        .z
        .iter()
        .enumerate()
        .filter(|(_, z)| **z == z0)
        .map(|(i, _)| i)
        .collect())
}

/// Keep-mask over one nx × ny layer selecting every `stride`-th site in
/// both x and y, for arrow-overlay subsampling.
pub fn arrow_mask(nx: usize, ny: usize, stride: usize) -> MagResult<Vec<bool>> {
    if stride == 0 {
        return Err(MagError::ConfigError(
            "arrow stride must be at least 1".to_string(),
        ));
    }
    let mut mask = Vec::with_capacity(nx * ny);
    for iy in 0..ny {
        for ix in 0..nx {
            mask.push(iy % stride == 0 && ix % stride == 0);
        }
    }
    Ok(mask)
}

/// Reshape a layer's (nx*ny, 3) colour rows into an (ny, nx, 3) image
/// array, row iy / column ix matching the lattice ordering.
pub fn layer_image(colours: &Array2<f64>, nx: usize) -> MagResult<Array3<f64>> {
    let n = colours.nrows();
    if nx == 0 || n % nx != 0 {
        return Err(MagError::ConfigError(format!(
            "cannot shape {n} colour rows into image rows of {nx} sites"
        )));
    }
    let ny = n / nx;
    let mut image = Array3::zeros((ny, nx, 3));
    for i in 0..n {
        let (iy, ix) = (i / nx, i % nx);
        for c in 0..3 {
            image[[iy, ix, c]] = colours[[i, c]];
        }
    }
    Ok(image)
}
