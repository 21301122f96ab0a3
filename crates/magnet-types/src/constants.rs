// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Vacuum permeability (H/m), 4π × 10⁻⁷ exactly.
pub const MU0_SI: f64 = 4.0e-7 * std::f64::consts::PI;

/// Smallest admissible number of loops in a discretized solenoid.
/// A winding shorter than one turn spacing still contributes one loop.
pub const MIN_LOOP_COUNT: usize = 1;
