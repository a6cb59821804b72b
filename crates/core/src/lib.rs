//! Fluid Dynamics Core Library
//!
//! Geometric primitives shared by the fluid solver and its renderers.
//! [`Vector`] is the three-component `f64` vector used for positions,
//! directions, velocities and normals.
//!
//! ## Features
//! - `approx` (default): `AbsDiffEq`, `RelativeEq` and `UlpsEq` for [`Vector`]
//! - `nalgebra` (default): conversions to and from `nalgebra::Vector3<f64>`

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Vector, Vector3, VectorError};
