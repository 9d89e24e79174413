//! GCJ-02 offset correction for Chinese web-map tiles.
//!
//! Roadmap tiles served for mainland China are drawn in the obfuscated
//! GCJ-02 system, while GPS data and satellite imagery are WGS-84. This crate
//! converts between the two and decides, per map layer, whether a
//! conversion applies at all.

pub mod engine;
pub mod error;
pub mod layer;
pub mod offset;
pub mod point;
#[cfg(feature = "python")]
mod py;

pub use engine::OffsetEngine;
pub use error::OffsetError;
pub use layer::{Direction, LayerKind};
pub use offset::region::BoundingBox;
pub use offset::solver::{FixedPointSolver, InverseSolution, Phase};
pub use point::GeoPoint;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
