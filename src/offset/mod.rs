pub mod ellipsoid;
pub mod gcj02;
pub mod region;
pub mod series;
pub mod solver;

use crate::point::GeoPoint;

/// A datum-level perturbation between two geographic coordinate systems,
/// both expressed as latitude/longitude in degrees.
pub trait GeodeticTransform: Send + Sync {
    /// Source system -> perturbed system.
    fn forward(&self, point: GeoPoint) -> GeoPoint;

    /// Perturbed system -> source system. Best effort for transforms without
    /// a closed-form inverse.
    fn inverse(&self, point: GeoPoint) -> GeoPoint;

    /// Batch forward transform (default: loop).
    fn forward_batch(&self, points: &mut [GeoPoint]) {
        for p in points.iter_mut() {
            *p = self.forward(*p);
        }
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, points: &mut [GeoPoint]) {
        for p in points.iter_mut() {
            *p = self.inverse(*p);
        }
    }
}
