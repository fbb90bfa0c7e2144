// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — OMF Reader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Regular-mesh OVF text reader.
//!
//! Parses the geometry header of an `.omf` file and normalises the flat
//! magnetisation body. Coordinates are never read from the file; they
//! are generated from the header, so a batch of files sharing one mesh
//! can reuse a single [`Lattice`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use regex::Regex;

use mag_types::error::{MagError, MagResult};
use mag_types::state::{GridHeader, Lattice, Magnetisation};

/// Marker line terminating the header region.
const DATA_BEGIN: &str = "# Begin: Data Text";

/// Header keys required to reconstruct the mesh geometry.
const REQUIRED_KEYS: [&str; 12] = [
    "xstepsize",
    "ystepsize",
    "zstepsize",
    "xbase",
    "ybase",
    "zbase",
    "xmin",
    "xmax",
    "ymin",
    "ymax",
    "zmin",
    "zmax",
];

/// Reader for one OVF rectangular-mesh text file.
///
/// The header is parsed eagerly on [`open`](OmfReader::open); the body is
/// read on each [`read_m`](OmfReader::read_m) call. [`set_path`]
/// (OmfReader::set_path) re-points the reader at another file with the
/// same geometry without touching the parsed header.
#[derive(Debug, Clone)]
pub struct OmfReader {
    path: PathBuf,
    header: GridHeader,
}

impl OmfReader {
    /// Open `path` and parse its geometry header.
    pub fn open<P: AsRef<Path>>(path: P) -> MagResult<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path)?;
        let header = parse_header(&text, &path.display().to_string())?;
        Ok(OmfReader { path, header })
    }

    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-point at another field file sharing this reader's mesh.
    /// The header and any lattice derived from it are unaffected.
    pub fn set_path<P: AsRef<Path>>(&mut self, path: P) {
        self.path = path.as_ref().to_path_buf();
    }

    /// Generate the coordinate lattice for this header, with the uniform
    /// length-unit `scale` applied last.
    pub fn coordinates(&self, scale: f64) -> MagResult<Lattice> {
        Lattice::from_header(&self.header, scale)
    }

    /// Load and unit-normalise the magnetisation body of the current file.
    ///
    /// The row count must equal the header's nx*ny*nz.
    pub fn read_m(&self) -> MagResult<Magnetisation> {
        let text = fs::read_to_string(&self.path)?;
        let data = parse_body(&text)?;
        let expected = self.header.n_sites()?;
        if data.nrows() != expected {
            return Err(MagError::SizeMismatch {
                expected,
                found: data.nrows(),
            });
        }
        Ok(Magnetisation::from_raw(&data))
    }
}

/// Parse the header region (everything before `# Begin: Data Text`).
pub fn parse_header(text: &str, path: &str) -> MagResult<GridHeader> {
    let kv_re = Regex::new(
        r"^#\s*([A-Za-z]+):\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*$",
    )
    .expect("valid header regex");

    let mut values: HashMap<&str, f64> = HashMap::new();
    let mut saw_marker = false;
    for line in text.lines() {
        if line.trim_end() == DATA_BEGIN {
            saw_marker = true;
            break;
        }
        if let Some(caps) = kv_re.captures(line) {
            let key = &caps[1];
            if let Some(&known) = REQUIRED_KEYS.iter().find(|&&k| k == key) {
                // Value matched the numeric pattern, so the parse cannot fail.
                if let Ok(v) = caps[2].parse::<f64>() {
                    values.insert(known, v);
                }
            }
        }
    }
    if !saw_marker {
        return Err(MagError::HeaderLine {
            expected: format!("'{DATA_BEGIN}' marker"),
            line: "<end of file>".to_string(),
        });
    }

    let get = |key: &str| -> MagResult<f64> {
        values.get(key).copied().ok_or_else(|| MagError::HeaderKey {
            key: key.to_string(),
            path: path.to_string(),
        })
    };

    let header = GridHeader {
        dx: get("xstepsize")?,
        dy: get("ystepsize")?,
        dz: get("zstepsize")?,
        xbase: get("xbase")?,
        ybase: get("ybase")?,
        zbase: get("zbase")?,
        xmin: get("xmin")?,
        xmax: get("xmax")?,
        ymin: get("ymin")?,
        ymax: get("ymax")?,
        zmin: get("zmin")?,
        zmax: get("zmax")?,
    };
    header.validate()?;
    Ok(header)
}

/// Parse the flat numeric body: every non-comment line is one lattice
/// site with exactly three components.
pub fn parse_body(text: &str) -> MagResult<Array2<f64>> {
    let mut flat: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut count = 0usize;
        for tok in trimmed.split_whitespace() {
            let v: f64 = tok.parse().map_err(|_| MagError::DataRow {
                line: lineno + 1,
                message: format!("not a real number: {tok:?}"),
            })?;
            flat.push(v);
            count += 1;
        }
        if count != 3 {
            return Err(MagError::DataRow {
                line: lineno + 1,
                message: format!("expected 3 components, got {count}"),
            });
        }
        rows += 1;
    }
    Array2::from_shape_vec((rows, 3), flat).map_err(|e| MagError::DataRow {
        line: 0,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> String {
        let mut s = String::new();
        s.push_str("# OOMMF OVF 2.0\n");
        s.push_str("# Segment count: 1\n");
        s.push_str("# Begin: Segment\n");
        s.push_str("# Begin: Header\n");
        s.push_str("# Title: m\n");
        s.push_str("# meshtype: rectangular\n");
        s.push_str("# meshunit: m\n");
        s.push_str("# xmin: 0\n");
        s.push_str("# ymin: 0\n");
        s.push_str("# zmin: 0\n");
        s.push_str("# xmax: 3.0\n");
        s.push_str("# ymax: 3.0\n");
        s.push_str("# zmax: 3.0\n");
        s.push_str("# xbase:  0.0\n");
        s.push_str("# ybase: 0.0\n");
        s.push_str("# zbase: 0.0\n");
        s.push_str("# xstepsize: 1.0\n");
        s.push_str("# ystepsize: 1e0\n");
        s.push_str("# zstepsize: 1.0\n");
        s.push_str("# End: Header\n");
        s.push_str("# Begin: Data Text\n");
        s
    }

    #[test]
    fn test_parse_header_counts() {
        let h = parse_header(&sample_header(), "test.omf").unwrap();
        assert_eq!(h.nx().unwrap(), 3);
        assert_eq!(h.ny().unwrap(), 3);
        assert_eq!(h.nz().unwrap(), 3);
        assert_eq!(h.dx, 1.0);
        assert_eq!(h.dy, 1.0);
    }

    #[test]
    fn test_scientific_notation_values() {
        let text = sample_header()
            .replace("# xstepsize: 1.0", "# xstepsize: +1.0e+00")
            .replace("# xmax: 3.0", "# xmax: 3e-0");
        let h = parse_header(&text, "test.omf").unwrap();
        assert_eq!(h.nx().unwrap(), 3);
    }

    #[test]
    fn test_missing_key_is_error() {
        let text = sample_header().replace("# zstepsize: 1.0\n", "");
        let err = parse_header(&text, "test.omf").unwrap_err();
        match err {
            MagError::HeaderKey { key, path } => {
                assert_eq!(key, "zstepsize");
                assert_eq!(path, "test.omf");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_data_marker_is_error() {
        let text = sample_header().replace("# Begin: Data Text\n", "");
        assert!(matches!(
            parse_header(&text, "test.omf"),
            Err(MagError::HeaderLine { .. })
        ));
    }

    #[test]
    fn test_parse_body_shape() {
        let body = "# comment\n1 0 0\n0.5 0.5 0\n\n0 0 -1\n";
        let data = parse_body(body).unwrap();
        assert_eq!(data.shape(), &[3, 3]);
        assert_eq!(data[[2, 2]], -1.0);
    }

    #[test]
    fn test_parse_body_bad_row_width() {
        let err = parse_body("1 0\n").unwrap_err();
        assert!(matches!(err, MagError::DataRow { line: 1, .. }));
    }

    #[test]
    fn test_parse_body_bad_number() {
        let err = parse_body("1 x 0\n").unwrap_err();
        assert!(matches!(err, MagError::DataRow { line: 1, .. }));
    }
}
