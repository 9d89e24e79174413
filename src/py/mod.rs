use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::wgs84_to_gcj02, m)?)?;
    m.add_function(wrap_pyfunction!(transform::gcj02_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(transform::transform_points, m)?)?;
    Ok(())
}
