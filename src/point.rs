use std::ops::{Add, Sub};

/// A latitude/longitude pair in degrees.
///
/// Plain value type: no range checks are applied, so callers supplying
/// latitudes beyond ±90 get a defined (if meaningless) result back from the
/// transforms. Arithmetic is component-wise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Largest per-axis difference to `other`, in degrees.
    pub fn max_abs_diff(&self, other: &GeoPoint) -> f64 {
        (self.lat - other.lat).abs().max((self.lng - other.lng).abs())
    }

    pub fn to_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Build from a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl Add for GeoPoint {
    type Output = GeoPoint;

    fn add(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint::new(self.lat + rhs.lat, self.lng + rhs.lng)
    }
}

impl Sub for GeoPoint {
    type Output = GeoPoint;

    fn sub(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint::new(self.lat - rhs.lat, self.lng - rhs.lng)
    }
}
