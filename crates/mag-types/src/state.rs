// ─────────────────────────────────────────────────────────────────────
// OOMMF Post — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Regular-mesh grid header, derived coordinate lattice and normalised
//! magnetisation arrays.

use ndarray::{Array1, Array2};

use crate::error::{MagError, MagResult};

/// Relative tolerance when checking that a grid span is an integer
/// multiple of its step size.
const SHAPE_TOL: f64 = 1e-6;

/// Geometry attributes extracted from an OVF-style file header.
///
/// Sample counts are never stored; they are re-derived from the bounding
/// box and step sizes so that a header and its body can be cross-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct GridHeader {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub xbase: f64,
    pub ybase: f64,
    pub zbase: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl GridHeader {
    fn axis_count(&self, axis: char, min: f64, max: f64, step: f64) -> MagResult<usize> {
        let span = max - min;
        if !(step.is_finite() && step > 0.0) || !span.is_finite() || span < 0.0 {
            return Err(MagError::GridShape { axis, span, step });
        }
        let n = span / step;
        let rounded = n.round();
        if (n - rounded).abs() > SHAPE_TOL * n.abs().max(1.0) {
            return Err(MagError::GridShape { axis, span, step });
        }
        Ok(rounded as usize)
    }

    /// Number of samples along x: (xmax - xmin) / dx.
    pub fn nx(&self) -> MagResult<usize> {
        self.axis_count('x', self.xmin, self.xmax, self.dx)
    }

    /// Number of samples along y: (ymax - ymin) / dy.
    pub fn ny(&self) -> MagResult<usize> {
        self.axis_count('y', self.ymin, self.ymax, self.dy)
    }

    /// Number of samples along z: (zmax - zmin) / dz.
    pub fn nz(&self) -> MagResult<usize> {
        self.axis_count('z', self.zmin, self.zmax, self.dz)
    }

    /// Total lattice sites nx * ny * nz.
    pub fn n_sites(&self) -> MagResult<usize> {
        Ok(self.nx()? * self.ny()? * self.nz()?)
    }

    /// Check every axis invariant without deriving counts.
    pub fn validate(&self) -> MagResult<()> {
        self.n_sites().map(|_| ())
    }
}

/// The full set of evenly spaced sample positions implied by a grid
/// header, flattened in x-fastest, then y, then z order.
///
/// Positions are always generated from the header, never read from a
/// file body, so one lattice can be shared across a batch of field
/// files with identical geometry.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// (N, 3) array of sample positions.
    pub coordinates: Array2<f64>,
    /// Flat per-site coordinates, one entry per lattice site.
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub z: Array1<f64>,
    /// Distinct axis coordinates in ascending order (nx / ny / nz values).
    pub xs: Array1<f64>,
    pub ys: Array1<f64>,
    pub zs: Array1<f64>,
}

impl Lattice {
    /// Generate the lattice for `header`, applying the uniform
    /// length-unit `scale` last (e.g. 1e9 for metres → nanometres).
    pub fn from_header(header: &GridHeader, scale: f64) -> MagResult<Self> {
        let nx = header.nx()?;
        let ny = header.ny()?;
        let nz = header.nz()?;
        let n = nx * ny * nz;

        let xs: Array1<f64> =
            Array1::from_iter((0..nx).map(|i| (header.xbase + i as f64 * header.dx) * scale));
        let ys: Array1<f64> =
            Array1::from_iter((0..ny).map(|i| (header.ybase + i as f64 * header.dy) * scale));
        let zs: Array1<f64> =
            Array1::from_iter((0..nz).map(|i| (header.zbase + i as f64 * header.dz) * scale));

        let mut coordinates = Array2::zeros((n, 3));
        let mut row = 0;
        for iz in 0..nz {
            for iy in 0..ny {
                for ix in 0..nx {
                    coordinates[[row, 0]] = xs[ix];
                    coordinates[[row, 1]] = ys[iy];
                    coordinates[[row, 2]] = zs[iz];
                    row += 1;
                }
            }
        }

        let x = coordinates.column(0).to_owned();
        let y = coordinates.column(1).to_owned();
        let z = coordinates.column(2).to_owned();

        Ok(Lattice {
            coordinates,
            x,
            y,
            z,
            xs,
            ys,
            zs,
        })
    }

    /// Number of lattice sites.
    pub fn len(&self) -> usize {
        self.coordinates.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unit-normalised magnetisation components, one value per lattice site.
#[derive(Debug, Clone)]
pub struct Magnetisation {
    pub mx: Array1<f64>,
    pub my: Array1<f64>,
    pub mz: Array1<f64>,
}

impl Magnetisation {
    /// Normalise raw (N, 3) field rows by their own magnitude.
    ///
    /// Rows with zero magnitude map to the zero vector rather than NaN;
    /// empty cells in OOMMF geometry masks are written as (0, 0, 0).
    pub fn from_raw(data: &Array2<f64>) -> Self {
        let n = data.nrows();
        let mut mx = Array1::zeros(n);
        let mut my = Array1::zeros(n);
        let mut mz = Array1::zeros(n);
        for i in 0..n {
            let (vx, vy, vz) = (data[[i, 0]], data[[i, 1]], data[[i, 2]]);
            let mag = (vx * vx + vy * vy + vz * vz).sqrt();
            if mag > 0.0 {
                mx[i] = vx / mag;
                my[i] = vy / mag;
                mz[i] = vz / mag;
            }
        }
        Magnetisation { mx, my, mz }
    }

    /// Stack the components back into an (N, 3) array, the shape the
    /// colour encoder consumes.
    pub fn to_field(&self) -> Array2<f64> {
        let n = self.mx.len();
        let mut field = Array2::zeros((n, 3));
        for i in 0..n {
            field[[i, 0]] = self.mx[i];
            field[[i, 1]] = self.my[i];
            field[[i, 2]] = self.mz[i];
        }
        field
    }

    pub fn len(&self) -> usize {
        self.mx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mx.is_empty()
    }
}
