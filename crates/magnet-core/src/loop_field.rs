// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Current Loop
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytic field of an idealized zero-thickness circular current loop.
//!
//! Closed-form Biot-Savart solution (Smythe form) through the complete
//! elliptic integrals K(m), E(m), with dedicated branches for the loop
//! axis, the conductor itself, and the near-singular parameter regime.

use std::f64::consts::PI;
use std::fmt;

use magnet_math::elliptic::{ellipe, ellipk, ellipkm1};
use magnet_types::error::{MagnetError, MagnetResult};

use crate::source::{FieldDiagnostic, FieldSample, FieldSource};

/// |m - 1| below which K(m) switches to the complementary-parameter
/// evaluation. Chosen per query point, never globally.
const NEAR_SINGULAR_M: f64 = 0.01;

/// r/r0 below which the general formula yields to the axial power
/// series. The elliptic bracket in Br cancels to O((r/r0)²) there and
/// amplifies rounding by r0/r; at 1e-4 the series truncation and the
/// bracket roundoff are both ~1e-8 relative, the f64 crossover.
const NEAR_AXIS_A: f64 = 1e-4;

/// A circular current loop, axis along z.
///
/// The strength scale `b0` is the field magnitude at the loop center;
/// every sample scales linearly with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentLoop {
    b0: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    r0: f64,
}

impl CurrentLoop {
    /// Build a loop with center field `b0`, center `(x0, y0, z0)` and
    /// radius `r0`.
    ///
    /// Fails unless every parameter is finite and `r0 > 0`: the field
    /// formula divides by the radius, so degenerate geometry is
    /// rejected at construction rather than surfacing as NaN later.
    pub fn new(b0: f64, x0: f64, y0: f64, z0: f64, r0: f64) -> MagnetResult<Self> {
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(MagnetError::ConfigError(format!(
                "loop radius must be finite and > 0, got {r0}"
            )));
        }
        if !b0.is_finite() {
            return Err(MagnetError::ConfigError(format!(
                "loop center field must be finite, got {b0}"
            )));
        }
        if !x0.is_finite() || !y0.is_finite() || !z0.is_finite() {
            return Err(MagnetError::ConfigError(format!(
                "loop center must be finite, got ({x0}, {y0}, {z0})"
            )));
        }
        Ok(CurrentLoop { b0, x0, y0, z0, r0 })
    }

    /// Field magnitude at the loop center.
    pub fn center_field(&self) -> f64 {
        self.b0
    }

    /// Loop center (x0, y0, z0).
    pub fn center(&self) -> (f64, f64, f64) {
        (self.x0, self.y0, self.z0)
    }

    /// Loop radius.
    pub fn radius(&self) -> f64 {
        self.r0
    }

    /// Axial power series for 0 < r << r0.
    ///
    /// From the on-axis profile f(z) = b0 r0³ (r0² + z²)^{-3/2} and
    /// div B = 0 in axisymmetry:
    ///   Br = -(r/2) f'(z)  = (3/2) b0 r0³ z r (r0² + z²)^{-5/2}
    ///   Bz = f(z) - (r²/4) f''(z),
    ///   f''(z) = 3 b0 r0³ (4z² - r0²) (r0² + z²)^{-7/2}.
    /// Truncation is O((r/r0)²) relative, which beats the elliptic
    /// form below `NEAR_AXIS_A` where its Br bracket cancels.
    fn field_near_axis(&self, x1: f64, y1: f64, z1: f64, r: f64) -> FieldSample {
        let u = self.r0 * self.r0 + z1 * z1;
        let r0_cubed = self.r0.powi(3);

        let f = self.b0 * r0_cubed / u.powf(1.5);
        let f_dd = 3.0 * self.b0 * r0_cubed * (4.0 * z1 * z1 - self.r0 * self.r0) / u.powf(3.5);

        let br = 1.5 * self.b0 * r0_cubed * z1 * r / u.powf(2.5);
        let bz = f - 0.25 * r * r * f_dd;

        FieldSample::new(br * x1 / r, br * y1 / r, bz)
    }
}

impl fmt::Display for CurrentLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B0 = {}, x0 = {}, y0 = {}, z0 = {}, r0 = {}",
            self.b0, self.x0, self.y0, self.z0, self.r0
        )
    }
}

impl FieldSource for CurrentLoop {
    /// Exact analytic field at (x, y, z).
    ///
    /// With the point relativized to the loop center and r its radial
    /// distance from the axis, the branches are:
    /// - on the conductor (r == r0, z1 == 0): divergent, NaN sentinel
    ///   plus an `OnConductor` diagnostic;
    /// - on the axis (r == 0): `bz = b0 (r0^2 / (r0^2 + z1^2))^{3/2}`,
    ///   avoiding the 0/0 azimuthal decomposition;
    /// - general: elliptic-integral form with a = r/r0, b = z1/r0,
    ///   Q = (1+a)^2 + b^2, m = 4a/Q.
    fn field(&self, x: f64, y: f64, z: f64) -> FieldSample {
        let x1 = x - self.x0;
        let y1 = y - self.y0;
        let z1 = z - self.z0;

        let r = x1.hypot(y1);

        if r == self.r0 && z1 == 0.0 {
            return FieldSample::singular(FieldDiagnostic::OnConductor { x, y, z });
        }

        if r == 0.0 {
            let ca = self.r0 / (self.r0 * self.r0 + z1 * z1).sqrt();
            return FieldSample::new(0.0, 0.0, self.b0 * ca.powi(3));
        }

        let a = r / self.r0;
        if a < NEAR_AXIS_A {
            return self.field_near_axis(x1, y1, z1, r);
        }
        let b = z1 / self.r0;
        let q = (1.0 + a) * (1.0 + a) + b * b;
        // Q - 4a = (1 - a)^2 + b^2, free of the cancellation the
        // subtraction form suffers next to the ring.
        let denom = (1.0 - a) * (1.0 - a) + b * b;
        if denom == 0.0 {
            // within half an ulp of the conductor after relativization
            return FieldSample::singular(FieldDiagnostic::OnConductor { x, y, z });
        }
        let m = (4.0 * a / q).min(1.0);

        // Near m = 1 the direct K(m) loses the whole significand to
        // the 1 - m subtraction; (Q - 4a)/Q is the same complement
        // computed exactly.
        let k_val = if (m - 1.0).abs() < NEAR_SINGULAR_M {
            ellipkm1(denom / q)
        } else {
            ellipk(m)
        };
        let e_val = ellipe(m);

        let sqrt_q = q.sqrt();

        let bz = self.b0 / (PI * sqrt_q) * (e_val * (1.0 - a * a - b * b) / denom + k_val);
        let br = self.b0 * (z1 / r) / (PI * sqrt_q)
            * (e_val * (1.0 + a * a + b * b) / denom - k_val);

        FieldSample::new(br * x1 / r, br * y1 / r, bz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_loop() -> CurrentLoop {
        CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert!(CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 0.0).is_err());
        assert!(CurrentLoop::new(1.0, 0.0, 0.0, 0.0, -2.0).is_err());
        assert!(CurrentLoop::new(1.0, 0.0, 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_center_value_exact() {
        let tile = CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 2.0).unwrap();
        let s = tile.field(0.0, 0.0, 0.0);
        assert_eq!(s.components(), (0.0, 0.0, 1.0));
        assert!(s.diagnostic.is_none());
    }

    #[test]
    fn test_on_axis_closed_form() {
        let b0 = 3.0;
        let r0 = 2.0;
        let tile = CurrentLoop::new(b0, 0.0, 0.0, 0.0, r0).unwrap();
        for &z in &[-5.0, -0.7, 0.0, 0.3, 1.0, 10.0] {
            let s = tile.field(0.0, 0.0, z);
            let expected = b0 * (r0 * r0 / (r0 * r0 + z * z)).powf(1.5);
            assert_eq!(s.bx, 0.0);
            assert_eq!(s.by, 0.0);
            assert!(
                (s.bz - expected).abs() < 1e-12,
                "Bz(0,0,{z}) = {}, expected {expected}",
                s.bz
            );
        }
    }

    #[test]
    fn test_axis_reference_value() {
        // Unit loop at z = 5: Bz = (1/26)^1.5 ~ 0.00754
        let s = unit_loop().field(0.0, 0.0, 5.0);
        let expected = (1.0f64 / 26.0).powf(1.5);
        assert!((s.bz - expected).abs() < 1e-12);
        assert!((s.bz - 0.00754).abs() < 5e-6);
    }

    #[test]
    fn test_general_branch_continuous_with_axis() {
        // Just off the axis the general formula must agree with the
        // on-axis closed form to O(r).
        let tile = unit_loop();
        for &z in &[-2.0, 0.5, 1.0, 4.0] {
            let on_axis = tile.field(0.0, 0.0, z);
            let off_axis = tile.field(1e-8, 0.0, z);
            assert!(
                (on_axis.bz - off_axis.bz).abs() < 1e-6,
                "axis discontinuity at z = {z}: {} vs {}",
                on_axis.bz,
                off_axis.bz
            );
            assert!(off_axis.bx.abs() < 1e-6);
        }
    }

    #[test]
    fn test_near_axis_radial_component_accurate() {
        // Br ~ (3/2) b0 z r / (1 + z²)^{5/2} for a unit loop as r -> 0.
        // The elliptic bracket cancels to O(r²) here, so naive
        // evaluation turns roundoff into radial components that are
        // orders of magnitude wrong at small r.
        let tile = unit_loop();
        let z: f64 = 0.5;
        let slope = 1.5 * z / (1.0 + z * z).powf(2.5);

        // series branch, then the general branch just above threshold
        for &r in &[1e-8, 1e-6, 1e-5, 2e-4, 1e-3] {
            let s = tile.field(r, 0.0, z);
            let exact = slope * r;
            let rel = (s.bx - exact).abs() / exact;
            assert!(
                rel < 1e-5,
                "Bx({r:e}, 0, {z}) = {:e}, leading order {exact:e}, rel err {rel:e}",
                s.bx
            );
            assert_eq!(s.by, 0.0);
        }
    }

    #[test]
    fn test_near_axis_branch_continuous() {
        // Bx/r must match across the series/general handover.
        let tile = unit_loop();
        let z = 0.5;
        let below = tile.field(0.99e-4, 0.0, z);
        let above = tile.field(1.01e-4, 0.0, z);
        let slope_below = below.bx / 0.99e-4;
        let slope_above = above.bx / 1.01e-4;
        assert!(
            (slope_below - slope_above).abs() / slope_below.abs() < 1e-6,
            "branch handover discontinuity: {slope_below} vs {slope_above}"
        );

        // Bz likewise
        assert!((below.bz - above.bz).abs() / below.bz.abs() < 1e-6);
    }

    #[test]
    fn test_on_conductor_is_singular() {
        let tile = unit_loop();
        let s = tile.field(1.0, 0.0, 0.0);
        assert!(s.bx.is_nan() && s.by.is_nan() && s.bz.is_nan());
        assert_eq!(
            s.diagnostic,
            Some(FieldDiagnostic::OnConductor {
                x: 1.0,
                y: 0.0,
                z: 0.0
            })
        );

        // Same ring point reached off the x axis
        let c = std::f64::consts::FRAC_1_SQRT_2;
        let tile2 = CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 2.0f64.sqrt()).unwrap();
        let s2 = tile2.field(c * 2.0f64.sqrt(), c * 2.0f64.sqrt(), 0.0);
        // hypot may or may not land exactly on r0; only the exact hit is singular
        if s2.is_singular() {
            assert!(s2.bz.is_nan());
        }
    }

    #[test]
    fn test_near_singular_branch_finite() {
        // Points just off the conductor have m within 0.01 of 1 and
        // must still produce large but finite fields.
        let tile = unit_loop();
        for &eps in &[1e-3, 1e-5, 1e-7] {
            let s = tile.field(1.0 + eps, 0.0, 0.0);
            assert!(s.bz.is_finite(), "Bz not finite at eps = {eps}");
            assert!(s.bz.abs() > 1.0, "field should be large near the conductor");
            assert!(s.diagnostic.is_none());
        }
    }

    #[test]
    fn test_rotational_symmetry() {
        let tile = unit_loop();
        let (r, z) = (1.3, 0.4);
        let reference = tile.field(r, 0.0, z);
        let br_ref = reference.bx.hypot(reference.by);

        for &theta in &[0.3, 1.0, 2.1, 3.9, 5.5] {
            let (x, y) = (r * f64::cos(theta), r * f64::sin(theta));
            let s = tile.field(x, y, z);
            let br = s.bx.hypot(s.by);
            assert!(
                (br - br_ref).abs() < 1e-12,
                "radial magnitude varies with theta = {theta}"
            );
            assert!(
                (s.bz - reference.bz).abs() < 1e-12,
                "axial field varies with theta = {theta}"
            );
            // (bx, by) points along the radial direction of the query point
            assert!((s.bx - br_ref * f64::cos(theta)).abs() < 1e-12);
            assert!((s.by - br_ref * f64::sin(theta)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_field_linear_in_center_field() {
        let weak = CurrentLoop::new(1.0, 1.0, 2.0, 3.0, 5.0).unwrap();
        let strong = CurrentLoop::new(7.5, 1.0, 2.0, 3.0, 5.0).unwrap();
        let a = weak.field(2.0, -1.0, 4.0);
        let b = strong.field(2.0, -1.0, 4.0);
        assert!((b.bx - 7.5 * a.bx).abs() < 1e-12);
        assert!((b.by - 7.5 * a.by).abs() < 1e-12);
        assert!((b.bz - 7.5 * a.bz).abs() < 1e-12);
    }

    #[test]
    fn test_offset_center_translates_field() {
        let at_origin = unit_loop();
        let shifted = CurrentLoop::new(1.0, 1.0, 2.0, 3.0, 1.0).unwrap();
        let a = at_origin.field(0.4, -0.2, 0.9);
        let b = shifted.field(1.4, 1.8, 3.9);
        // coordinate relativization costs a few ulps
        assert!((a.bx - b.bx).abs() < 1e-12);
        assert!((a.by - b.by).abs() < 1e-12);
        assert!((a.bz - b.bz).abs() < 1e-12);
    }

    #[test]
    fn test_display_summary() {
        let tile = CurrentLoop::new(1.0, 1.0, 2.0, 3.0, 5.0).unwrap();
        assert_eq!(
            tile.to_string(),
            "B0 = 1, x0 = 1, y0 = 2, z0 = 3, r0 = 5"
        );
    }
}
