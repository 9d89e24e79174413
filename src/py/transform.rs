//! PyO3 bindings for offset correction.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine::OffsetEngine;
use crate::error::OffsetError;
use crate::layer::{Direction, LayerKind};
use crate::point::GeoPoint;

/// Convert one WGS-84 coordinate for display on a `layer` tile.
///
/// Args:
///     lat: Latitude in degrees.
///     lng: Longitude in degrees.
///     layer: Map type id ("roadmap", "satellite", "hybrid", ...).
///
/// Returns:
///     (lat, lng) tuple; unchanged for satellite and hybrid layers.
#[pyfunction]
#[pyo3(signature = (lat, lng, layer="roadmap"))]
pub fn wgs84_to_gcj02(lat: f64, lng: f64, layer: &str) -> (f64, f64) {
    OffsetEngine::new()
        .apply(GeoPoint::new(lat, lng), LayerKind::from_name(layer), Direction::ToGcj02)
        .to_tuple()
}

/// Convert one tile coordinate of a `layer` back to WGS-84.
#[pyfunction]
#[pyo3(signature = (lat, lng, layer="roadmap"))]
pub fn gcj02_to_wgs84(lat: f64, lng: f64, layer: &str) -> (f64, f64) {
    OffsetEngine::new()
        .apply(GeoPoint::new(lat, lng), LayerKind::from_name(layer), Direction::ToWgs84)
        .to_tuple()
}

/// Convert arrays of coordinates.
///
/// Args:
///     lat: 1D array of latitudes.
///     lng: 1D array of longitudes.
///     direction: "to_gcj02" or "to_wgs84".
///     layer: Map type id. Defaults to "roadmap".
///
/// Returns:
///     Tuple of (lat_out, lng_out) arrays.
#[pyfunction]
#[pyo3(signature = (lat, lng, direction, layer="roadmap"))]
#[allow(clippy::type_complexity)]
pub fn transform_points<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lng: PyReadonlyArray1<'py, f64>,
    direction: &str,
    layer: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let direction: Direction = direction
        .parse()
        .map_err(|e: OffsetError| PyValueError::new_err(e.to_string()))?;
    let layer = LayerKind::from_name(layer);

    let lat = lat.as_array().to_vec();
    let lng = lng.as_array().to_vec();

    let points = py.allow_threads(move || {
        OffsetEngine::new().apply_columns(&lat, &lng, layer, direction)
    });
    let points = points.map_err(|e| PyValueError::new_err(e.to_string()))?;

    let (lats, lngs): (Vec<f64>, Vec<f64>) = points.iter().map(GeoPoint::to_tuple).unzip();

    Ok((PyArray1::from_vec(py, lats), PyArray1::from_vec(py, lngs)))
}
