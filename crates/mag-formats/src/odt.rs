// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — ODT Reader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! ODT scalar-log reader.
//!
//! The column declaration sits on the 4th line of the file as
//! `# Columns: {Oxs_CGEvolve::Total energy} {…} …`. Names may be
//! brace-delimited (allowing namespacing `::` and embedded spaces) or
//! bare whitespace-terminated tokens. Lookup is exact-match only.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};

use mag_types::error::{MagError, MagResult};

/// Leading label of the column-declaration line.
const COLUMNS_PREFIX: &str = "# Columns:";

/// Zero-based line index of the column declaration.
const COLUMNS_LINE: usize = 3;

/// A name-indexed view over the numeric table of an ODT file.
#[derive(Debug, Clone)]
pub struct OdtTable {
    path: PathBuf,
    names: Vec<String>,
    columns: HashMap<String, usize>,
    data: Array2<f64>,
}

impl OdtTable {
    /// Open `path`, parse the column declaration and load the body.
    pub fn open<P: AsRef<Path>>(path: P) -> MagResult<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path)?;
        let names = parse_columns(&text)?;
        let data = parse_body(&text, names.len())?;
        let columns = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Ok(OdtTable {
            path,
            names,
            columns,
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Zero-based index of `name`, exact match only.
    pub fn column_index(&self, name: &str) -> MagResult<usize> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| MagError::UnknownColumn {
                name: name.to_string(),
                options: self.names.join("\n"),
            })
    }

    /// The time-series column for `name`.
    pub fn get(&self, name: &str) -> MagResult<Array1<f64>> {
        let idx = self.column_index(name)?;
        Ok(self.data.column(idx).to_owned())
    }

    /// The full (rows, columns) table.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }
}

/// Tokenize the column-declaration line into names.
pub fn parse_columns(text: &str) -> MagResult<Vec<String>> {
    let line = text.lines().nth(COLUMNS_LINE).ok_or_else(|| MagError::HeaderLine {
        expected: format!("'{COLUMNS_PREFIX}' on line {}", COLUMNS_LINE + 1),
        line: "<end of file>".to_string(),
    })?;
    let rest = line
        .strip_prefix(COLUMNS_PREFIX)
        .ok_or_else(|| MagError::HeaderLine {
            expected: format!("'{COLUMNS_PREFIX}' on line {}", COLUMNS_LINE + 1),
            line: line.to_string(),
        })?;
    tokenize(rest, line)
}

/// A token is either `{…}` (first `}` terminates; may contain spaces)
/// or a bare run of non-whitespace. Anything else is a hard failure.
fn tokenize(rest: &str, full_line: &str) -> MagResult<Vec<String>> {
    let mut names = Vec::new();
    let mut chars = rest.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '{' {
            chars.next();
            let inner_start = start + c.len_utf8();
            let mut inner_end = None;
            for (i, ch) in chars.by_ref() {
                if ch == '}' {
                    inner_end = Some(i);
                    break;
                }
            }
            let end = inner_end.ok_or_else(|| MagError::HeaderLine {
                expected: "closing '}' in column declaration".to_string(),
                line: full_line.to_string(),
            })?;
            names.push(rest[inner_start..end].trim().to_string());
        } else {
            let mut end = rest.len();
            for (i, ch) in chars.by_ref() {
                if ch.is_whitespace() {
                    end = i;
                    break;
                }
            }
            names.push(rest[start..end].to_string());
        }
    }
    Ok(names)
}

/// Load all non-comment lines as the numeric body; every row must carry
/// exactly `n_cols` values.
pub fn parse_body(text: &str, n_cols: usize) -> MagResult<Array2<f64>> {
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
        if count != n_cols {
            return Err(MagError::SizeMismatch {
                expected: n_cols,
                found: count,
            });
        }
        rows += 1;
    }
    Array2::from_shape_vec((rows, n_cols), flat).map_err(|e| MagError::DataRow {
        line: 0,
        message: e.to_string(),
    })
}
