// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text export of sampled fields.
//!
//! One sample per line, `x;y;z;Bx;By;Bz`, no header. Written, never
//! read back; downstream tooling treats it as the interchange format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array1;

use magnet_types::error::MagnetResult;

use crate::batch::field_batch;
use crate::source::{FieldDiagnostic, FieldSource};

/// Evaluate `source` at the given points and write them out.
///
/// Singular samples are written as `NaN`; their diagnostics are
/// returned so the caller can see which rows they are.
pub fn export_field<F, P>(
    path: P,
    source: &F,
    x: &Array1<f64>,
    y: &Array1<f64>,
    z: &Array1<f64>,
) -> MagnetResult<Vec<FieldDiagnostic>>
where
    F: FieldSource,
    P: AsRef<Path>,
{
    let batch = field_batch(source, x, y, z)?;

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for i in 0..x.len() {
        writeln!(
            out,
            "{};{};{};{};{};{}",
            x[i], y[i], z[i], batch.bx[i], batch.by[i], batch.bz[i]
        )?;
    }
    out.flush()?;

    Ok(batch.diagnostics)
}

/// Axis-aligned bounding box for a field map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

/// Sample `source` on an `nb_points`³ grid over `bounds` and write the
/// flattened map (y-outer, x-middle, z-inner, meshgrid order).
pub fn export_field_map<F, P>(
    path: P,
    source: &F,
    bounds: MapBounds,
    nb_points: usize,
) -> MagnetResult<Vec<FieldDiagnostic>>
where
    F: FieldSource,
    P: AsRef<Path>,
{
    let xs = Array1::linspace(bounds.x_min, bounds.x_max, nb_points);
    let ys = Array1::linspace(bounds.y_min, bounds.y_max, nb_points);
    let zs = Array1::linspace(bounds.z_min, bounds.z_max, nb_points);

    let total = nb_points * nb_points * nb_points;
    let mut x = Vec::with_capacity(total);
    let mut y = Vec::with_capacity(total);
    let mut z = Vec::with_capacity(total);
    for &yj in ys.iter() {
        for &xi in xs.iter() {
            for &zk in zs.iter() {
                x.push(xi);
                y.push(yj);
                z.push(zk);
            }
        }
    }

    export_field(
        path,
        source,
        &Array1::from(x),
        &Array1::from(y),
        &Array1::from(z),
    )
}

/// Sample the field along the line x = x0, y = y0: returns (z, Bz).
///
/// The computational half of a main-axis profile plot; rendering is
/// the caller's business.
pub fn sample_axis<F>(
    source: &F,
    x0: f64,
    y0: f64,
    z_min: f64,
    z_max: f64,
    nb_points: usize,
) -> (Array1<f64>, Array1<f64>)
where
    F: FieldSource,
{
    let z = Array1::linspace(z_min, z_max, nb_points);
    let bz = z.mapv(|zi| source.field(x0, y0, zi).bz);
    (z, bz)
}
