//! Visualisation-side data preparation.
//!
//! `colour` maps unit magnetisation vectors to HLS/RGB triples, `layer`
//! slices a lattice into single z planes and image-shaped arrays. No
//! plotting backend lives here; both modules stop at arrays.

pub mod colour;
pub mod layer;
