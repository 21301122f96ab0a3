// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Batch Evaluation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shape-preserving batch evaluation over ndarray coordinate arrays.
//!
//! Applies a scalar `FieldSource` elementwise to x/y/z arrays of any
//! (identical) shape. Edge-case branches are taken per element, so one
//! point landing on a conductor yields its NaN sample and diagnostic
//! without poisoning the rest of the batch.

use ndarray::{Array, Dimension};

use magnet_types::error::{MagnetError, MagnetResult};

use crate::source::{FieldDiagnostic, FieldSource};

/// Field components over a batch of query points, same shape as the
/// inputs, plus the diagnostics collected along the way.
#[derive(Debug, Clone)]
pub struct FieldBatch<D: Dimension> {
    pub bx: Array<f64, D>,
    pub by: Array<f64, D>,
    pub bz: Array<f64, D>,
    /// One entry per singular query point, in element order.
    pub diagnostics: Vec<FieldDiagnostic>,
}

/// Evaluate `source` at every (x[i], y[i], z[i]).
///
/// The three coordinate arrays must share one shape; a mismatch is a
/// configuration error. Output arrays preserve that shape.
pub fn field_batch<F, D>(
    source: &F,
    x: &Array<f64, D>,
    y: &Array<f64, D>,
    z: &Array<f64, D>,
) -> MagnetResult<FieldBatch<D>>
where
    F: FieldSource,
    D: Dimension,
{
    if x.shape() != y.shape() || x.shape() != z.shape() {
        return Err(MagnetError::ConfigError(format!(
            "coordinate shape mismatch: x {:?}, y {:?}, z {:?}",
            x.shape(),
            y.shape(),
            z.shape()
        )));
    }

    let mut bx = Vec::with_capacity(x.len());
    let mut by = Vec::with_capacity(x.len());
    let mut bz = Vec::with_capacity(x.len());
    let mut diagnostics = Vec::new();

    for ((&xi, &yi), &zi) in x.iter().zip(y.iter()).zip(z.iter()) {
        let s = source.field(xi, yi, zi);
        bx.push(s.bx);
        by.push(s.by);
        bz.push(s.bz);
        if let Some(d) = s.diagnostic {
            diagnostics.push(d);
        }
    }

    let dim = x.raw_dim();
    let shape_err =
        |e: ndarray::ShapeError| MagnetError::ConfigError(format!("batch reshape failed: {e}"));

    Ok(FieldBatch {
        bx: Array::from_shape_vec(dim.clone(), bx).map_err(shape_err)?,
        by: Array::from_shape_vec(dim.clone(), by).map_err(shape_err)?,
        bz: Array::from_shape_vec(dim, bz).map_err(shape_err)?,
        diagnostics,
    })
}
