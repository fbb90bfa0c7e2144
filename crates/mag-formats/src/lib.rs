//! Readers for the text outputs of an OOMMF run.
//!
//! `omf` parses regular-mesh vector-field files, `odt` parses the tabular
//! scalar log, `naming` recovers labels from output file names.

pub mod naming;
pub mod odt;
pub mod omf;
