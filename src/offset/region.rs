//! Boundary classifier: where the GCJ-02 offset model applies.

use crate::point::GeoPoint;

/// Axis-aligned latitude/longitude rectangle, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub const fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Rectangle spanned by a south-west and a north-east corner.
    pub fn from_corners(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self::new(south_west.lng, south_west.lat, north_east.lng, north_east.lat)
    }

    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lng)
    }

    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lng)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        !(point.lng < self.min_lng
            || point.lng > self.max_lng
            || point.lat < self.min_lat
            || point.lat > self.max_lat)
    }
}

/// Region the offset model was fitted to (mainland China, coarse).
pub const CHINA: BoundingBox = BoundingBox::new(72.004, 0.8293, 137.8347, 55.8271);

/// True when `point` lies outside [`CHINA`]; the forward transform is the
/// identity there.
pub fn is_outside_region(point: GeoPoint) -> bool {
    !CHINA.contains(point)
}
