//! Core types and utilities

pub mod error;
#[cfg(any(feature = "approx", feature = "nalgebra"))]
mod interop;
pub mod vector;

pub use error::VectorError;
pub use vector::{Vector, Vector3};
