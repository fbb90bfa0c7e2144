// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — Output Naming
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Labels recovered from OOMMF output file names.
//!
//! The driver writes files like
//! `m_Bz050mT-Oxs_MinDriver-Magnetization-00-0016933.omf`; the leading
//! `m_…` part is the basename used to label rendered frames.

use regex::Regex;

/// The `m_…` label preceding the `-Oxs` driver suffix, if present.
pub fn field_file_label(file_name: &str) -> Option<String> {
    let re = Regex::new(r"(m_.*?)-Oxs").expect("valid label regex");
    re.captures(file_name)
        .map(|caps| caps[1].to_string())
}

/// Applied field in mT encoded in a label such as `m_Bz050mT`.
pub fn applied_field_mt(label: &str) -> Option<f64> {
    let re = Regex::new(r"Bz(\d+)mT").expect("valid field regex");
    re.captures(label)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}
