// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Render Pipeline Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Config-driven slice-and-colour pipeline over a synthetic lattice.

use mag_types::config::RenderConfig;
use mag_types::state::{GridHeader, Lattice, Magnetisation};
use mag_viz::colour::{generate_colours_named, ColourModel};
use mag_viz::layer::{arrow_mask, layer_image, z_layer_indices};
use ndarray::Array2;
use proptest::prelude::*;

fn film_lattice(nx: usize, ny: usize, nz: usize) -> Lattice {
    let h = GridHeader {
        dx: 4e-9,
        dy: 4e-9,
        dz: 4e-9,
        xbase: 2e-9,
        ybase: 2e-9,
        zbase: 2e-9,
        xmin: 0.0,
        xmax: nx as f64 * 4e-9,
        ymin: 0.0,
        ymax: ny as f64 * 4e-9,
        zmin: 0.0,
        zmax: nz as f64 * 4e-9,
    };
    Lattice::from_header(&h, 1e9).unwrap()
}

/// A vortex-like in-plane texture with the core tilted out of plane.
fn sample_m(lattice: &Lattice) -> Magnetisation {
    let n = lattice.len();
    let mut raw = Array2::zeros((n, 3));
    let (cx, cy) = (
        lattice.xs[lattice.xs.len() / 2],
        lattice.ys[lattice.ys.len() / 2],
    );
    for i in 0..n {
        let (dx, dy) = (lattice.x[i] - cx, lattice.y[i] - cy);
        let r = (dx * dx + dy * dy).sqrt();
        if r < 1e-12 {
            raw[[i, 2]] = 1.0;
        } else {
            raw[[i, 0]] = -dy / r;
            raw[[i, 1]] = dx / r;
        }
    }
    Magnetisation::from_raw(&raw)
}

#[test]
fn test_slice_colour_image_pipeline() {
    let cfg = RenderConfig {
        colour_model: "rgb".to_string(),
        z_layer: 1,
        arrow_stride: 2,
        length_scale: 1e9,
    };
    let lattice = film_lattice(6, 4, 3);
    let m = sample_m(&lattice);

    let indices = z_layer_indices(&lattice, cfg.z_layer).unwrap();
    assert_eq!(indices.len(), 24);

    let field = m.to_field();
    let mut layer_field = Array2::zeros((indices.len(), 3));
    for (row, &i) in indices.iter().enumerate() {
        for c in 0..3 {
            layer_field[[row, c]] = field[[i, c]];
        }
    }

    let colours = generate_colours_named(&layer_field, &cfg.colour_model).unwrap();
    let image = layer_image(&colours, lattice.xs.len()).unwrap();
    assert_eq!(image.shape(), &[4, 6, 3]);

    let mask = arrow_mask(6, 4, cfg.arrow_stride).unwrap();
    assert_eq!(mask.len(), indices.len());
    assert_eq!(mask.iter().filter(|k| **k).count(), 6);
}

#[test]
fn test_bad_model_in_config_fails() {
    let cfg = RenderConfig {
        colour_model: "xyz".to_string(),
        ..RenderConfig::default()
    };
    assert!(cfg.colour_model.parse::<ColourModel>().is_err());
}

proptest! {
    /// RGB outputs always lie inside [0, 1] for any unit-ish input.
    #[test]
    fn rgb_always_in_unit_cube(
        rows in prop::collection::vec(
            (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0),
            1..50,
        ),
    ) {
        let n = rows.len();
        let mut raw = Array2::zeros((n, 3));
        for (i, (vx, vy, vz)) in rows.iter().enumerate() {
            raw[[i, 0]] = *vx;
            raw[[i, 1]] = *vy;
            raw[[i, 2]] = *vz;
        }
        let m = Magnetisation::from_raw(&raw);
        let rgb = generate_colours_named(&m.to_field(), "rgb").unwrap();
        for v in rgb.iter() {
            prop_assert!((0.0..=1.0).contains(v), "rgb component out of range: {}", v);
        }
    }
}
