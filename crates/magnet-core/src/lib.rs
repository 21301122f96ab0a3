//! Analytic magnetostatics: circular current loops and finite solenoids.
//!
//! Closed-form Biot-Savart solution via complete elliptic integrals,
//! with superposition over discretized windings and shape-preserving
//! batch evaluation.

pub mod batch;
pub mod export;
pub mod loop_field;
pub mod solenoid;
pub mod source;

pub use batch::{field_batch, FieldBatch};
pub use loop_field::CurrentLoop;
pub use solenoid::Solenoid;
pub use source::{FieldDiagnostic, FieldSample, FieldSource};
