//! Mathematical primitives for SCPN Magnetics.

pub mod elliptic;
