// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Field Source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field-evaluation contract shared by loops and solenoids.

/// Non-fatal notice raised during field evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDiagnostic {
    /// The query point lies exactly on a conducting ring; the analytic
    /// field diverges there and the sample is the NaN sentinel.
    OnConductor { x: f64, y: f64, z: f64 },
}

/// Field at one query point, plus the diagnostic channel.
///
/// A singular evaluation yields the NaN triple and `Some(diagnostic)`;
/// it is expected and recoverable, never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub bx: f64,
    pub by: f64,
    pub bz: f64,
    pub diagnostic: Option<FieldDiagnostic>,
}

impl FieldSample {
    pub(crate) fn new(bx: f64, by: f64, bz: f64) -> Self {
        FieldSample {
            bx,
            by,
            bz,
            diagnostic: None,
        }
    }

    pub(crate) fn singular(diagnostic: FieldDiagnostic) -> Self {
        FieldSample {
            bx: f64::NAN,
            by: f64::NAN,
            bz: f64::NAN,
            diagnostic: Some(diagnostic),
        }
    }

    /// The (Bx, By, Bz) triple.
    pub fn components(&self) -> (f64, f64, f64) {
        (self.bx, self.by, self.bz)
    }

    pub fn is_singular(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// A magnetostatic source that can be evaluated at an arbitrary point.
///
/// Implementations are pure: immutable state, no I/O, deterministic
/// for identical floating-point inputs. Shared references may be
/// evaluated concurrently without synchronization.
pub trait FieldSource {
    /// Field at the point (x, y, z) in the global frame.
    fn field(&self, x: f64, y: f64, z: f64) -> FieldSample;
}
