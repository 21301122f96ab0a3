// ─────────────────────────────────────────────────────────────────────
// SCPN Magnetics — Solenoid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Finite solenoid as an ordered stack of coaxial current loops.
//!
//! The winding is discretized into N = round(n L) loops, evenly spaced
//! over [z0 - L/2, z0 + L/2], and the field is the superposition of
//! the analytic single-loop fields in fixed stack order.

use std::fmt;

use magnet_types::config::SolenoidConfig;
use magnet_types::constants::{MIN_LOOP_COUNT, MU0_SI};
use magnet_types::error::{MagnetError, MagnetResult};

use crate::loop_field::CurrentLoop;
use crate::source::{FieldSample, FieldSource};

/// A finite solenoid with its axis along z.
///
/// Canonically parametrized by the winding current; see
/// [`Solenoid::from_center_field`] for the center-field alias.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Solenoid {
    current: f64,
    /// Infinite-solenoid scale μ0 n I, reported but not summed over.
    b_inf: f64,
    length: f64,
    turn_density: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    r0: f64,
    loops: Vec<CurrentLoop>,
}

impl Solenoid {
    /// Build a solenoid carrying current `current` [A], of length
    /// `length` [m], with `turn_density` loops per meter, centered at
    /// `(x0, y0, z0)`, winding radius `r0` [m].
    ///
    /// Each discrete loop carries the full current, so its center
    /// field is μ0 I / (2 r0).
    ///
    /// Fails with a configuration error if `length`, `turn_density`,
    /// or `r0` is non-positive, or any parameter is non-finite.
    pub fn new(
        current: f64,
        length: f64,
        turn_density: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        r0: f64,
    ) -> MagnetResult<Self> {
        Self::check_geometry(current, length, turn_density, r0)?;
        let per_loop = MU0_SI * current / (2.0 * r0);
        Self::assemble(current, per_loop, length, turn_density, x0, y0, z0, r0)
    }

    /// Center-field parametrization: `b_total` is the assembly's total
    /// center-field scale, split uniformly over the N loops
    /// (current-sheet approximation). The equivalent winding current
    /// `I = 2 r0 (b_total / N) / μ0` is derived and reported.
    pub fn from_center_field(
        b_total: f64,
        length: f64,
        turn_density: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        r0: f64,
    ) -> MagnetResult<Self> {
        Self::check_geometry(b_total, length, turn_density, r0)?;
        let per_loop = b_total / Self::count_loops(length, turn_density) as f64;
        let current = 2.0 * r0 * per_loop / MU0_SI;
        Self::assemble(current, per_loop, length, turn_density, x0, y0, z0, r0)
    }

    /// Build from a JSON-backed config (current parametrization).
    pub fn from_config(config: &SolenoidConfig) -> MagnetResult<Self> {
        let [x0, y0, z0] = config.center;
        Self::new(
            config.current,
            config.length,
            config.turn_density,
            x0,
            y0,
            z0,
            config.radius,
        )
    }

    fn check_geometry(scale: f64, length: f64, turn_density: f64, r0: f64) -> MagnetResult<()> {
        if !scale.is_finite() {
            return Err(MagnetError::ConfigError(format!(
                "solenoid strength parameter must be finite, got {scale}"
            )));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(MagnetError::ConfigError(format!(
                "solenoid length must be finite and > 0, got {length}"
            )));
        }
        if !turn_density.is_finite() || turn_density <= 0.0 {
            return Err(MagnetError::ConfigError(format!(
                "solenoid turn density must be finite and > 0, got {turn_density}"
            )));
        }
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(MagnetError::ConfigError(format!(
                "solenoid radius must be finite and > 0, got {r0}"
            )));
        }
        Ok(())
    }

    /// N = round(n L), clamped to at least one loop.
    fn count_loops(length: f64, turn_density: f64) -> usize {
        ((turn_density * length).round() as usize).max(MIN_LOOP_COUNT)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        current: f64,
        per_loop: f64,
        length: f64,
        turn_density: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        r0: f64,
    ) -> MagnetResult<Self> {
        let count = Self::count_loops(length, turn_density);

        let mut loops = Vec::with_capacity(count);
        if count == 1 {
            loops.push(CurrentLoop::new(per_loop, x0, y0, z0, r0)?);
        } else {
            let spacing = length / (count - 1) as f64;
            for i in 0..count {
                let zi = z0 - length / 2.0 + i as f64 * spacing;
                loops.push(CurrentLoop::new(per_loop, x0, y0, zi, r0)?);
            }
        }

        Ok(Solenoid {
            current,
            b_inf: MU0_SI * turn_density * current,
            length,
            turn_density,
            x0,
            y0,
            z0,
            r0,
            loops,
        })
    }

    /// Winding current [A].
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Field an infinite solenoid with this winding would carry, μ0 n I.
    pub fn center_field(&self) -> f64 {
        self.b_inf
    }

    /// Axial length [m].
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Loops per meter [1/m].
    pub fn turn_density(&self) -> f64 {
        self.turn_density
    }

    /// Center of the winding.
    pub fn center(&self) -> (f64, f64, f64) {
        (self.x0, self.y0, self.z0)
    }

    /// Winding radius [m].
    pub fn radius(&self) -> f64 {
        self.r0
    }

    /// Number of discretized loops, round(n L) clamped to >= 1.
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// The constituent loops, in ascending axial order.
    pub fn loops(&self) -> &[CurrentLoop] {
        &self.loops
    }
}

impl fmt::Display for Solenoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I = {}, x0 = {}, y0 = {}, z0 = {}, r0 = {}, N = {}, L = {}",
            self.current,
            self.x0,
            self.y0,
            self.z0,
            self.r0,
            self.loops.len(),
            self.length
        )
    }
}

impl FieldSource for Solenoid {
    /// Superposition of the constituent loop fields, summed in stack
    /// order so identical inputs reproduce bit-identical results.
    ///
    /// A query point on one of the conducting rings propagates that
    /// loop's NaN sentinel through the sum; the first offending loop
    /// supplies the call's diagnostic.
    fn field(&self, x: f64, y: f64, z: f64) -> FieldSample {
        let mut bx = 0.0;
        let mut by = 0.0;
        let mut bz = 0.0;
        let mut diagnostic = None;

        for tile in &self.loops {
            let s = tile.field(x, y, z);
            bx += s.bx;
            by += s.by;
            bz += s.bz;
            if diagnostic.is_none() {
                diagnostic = s.diagnostic;
            }
        }

        FieldSample {
            bx,
            by,
            bz,
            diagnostic,
        }
    }
}
