// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagError {
    #[error("Missing or malformed header key '{key}' in {path}")]
    HeaderKey { key: String, path: String },

    #[error("Malformed header: expected {expected}, got line {line:?}")]
    HeaderLine { expected: String, line: String },

    #[error("Grid span on {axis} axis ({span}) is not an integer multiple of step {step}")]
    GridShape { axis: char, span: f64, step: f64 },

    #[error("Data size mismatch: header declares {expected}, body contains {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Malformed data row {line}: {message}")]
    DataRow { line: usize, message: String },

    #[error("Unknown column '{name}'. Valid columns:\n{options}")]
    UnknownColumn { name: String, options: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MagResult<T> = Result<T, MagError>;
