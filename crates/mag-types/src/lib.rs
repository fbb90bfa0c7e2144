//! Shared types for OOMMF post-processing.
//!
//! Grid headers, lattices, normalised magnetisation arrays, the error
//! enumeration and render configuration used by the format readers and
//! the colour/layer tooling.

pub mod config;
pub mod error;
pub mod state;
