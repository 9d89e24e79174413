//! Offset-correction engine.
//!
//! The handle the map integration holds on to: decides per layer whether
//! coordinates need correcting and routes them through GCJ-02 in the
//! requested direction. Immutable after construction, so one instance can be
//! shared across threads.

use rayon::prelude::*;

use crate::error::OffsetError;
use crate::layer::{Direction, LayerKind};
use crate::offset::gcj02::Gcj02;
use crate::offset::region::BoundingBox;
use crate::offset::solver::{FixedPointSolver, InverseSolution};
use crate::offset::GeodeticTransform;
use crate::point::GeoPoint;

#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetEngine {
    gcj02: Gcj02,
}

impl OffsetEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver(solver: FixedPointSolver) -> Self {
        Self {
            gcj02: Gcj02::with_solver(solver),
        }
    }

    /// WGS-84 -> GCJ-02. Identity outside mainland China.
    pub fn forward(&self, point: GeoPoint) -> GeoPoint {
        self.gcj02.forward(point)
    }

    /// GCJ-02 -> WGS-84, accurate to ~1e-6°. Never fails; see
    /// [`OffsetEngine::inverse_with_report`] to learn whether it converged.
    ///
    /// The accuracy holds away from the edges of the China bounding box.
    /// Within ~0.02° of an edge, forward can carry a point across the
    /// boundary where it becomes the identity: the search then either stops
    /// at the GCJ-02 input (north/east edges) or oscillates across the edge
    /// without converging (south/west edges).
    pub fn inverse(&self, point: GeoPoint) -> GeoPoint {
        self.gcj02.inverse(point)
    }

    pub fn inverse_with_report(&self, point: GeoPoint) -> InverseSolution {
        self.gcj02.inverse_with_report(point)
    }

    /// Correct `point` for display on (or reading from) a `layer` tile.
    pub fn apply(&self, point: GeoPoint, layer: LayerKind, direction: Direction) -> GeoPoint {
        if !layer.needs_correction() {
            return point;
        }
        match direction {
            Direction::ToGcj02 => self.forward(point),
            Direction::ToWgs84 => self.inverse(point),
        }
    }

    /// In-place [`OffsetEngine::apply`] over a run of points (polyline
    /// vertices, marker lists).
    pub fn apply_batch(&self, points: &mut [GeoPoint], layer: LayerKind, direction: Direction) {
        if !layer.needs_correction() {
            return;
        }
        points
            .par_iter_mut()
            .for_each(|p| *p = self.apply(*p, layer, direction));
    }

    /// [`OffsetEngine::apply`] over parallel latitude/longitude columns.
    pub fn apply_columns(
        &self,
        lat: &[f64],
        lng: &[f64],
        layer: LayerKind,
        direction: Direction,
    ) -> Result<Vec<GeoPoint>, OffsetError> {
        if lat.len() != lng.len() {
            return Err(OffsetError::Shape(format!(
                "lat and lng must have same length, got {} and {}",
                lat.len(),
                lng.len()
            )));
        }
        let mut points: Vec<GeoPoint> = lat
            .iter()
            .zip(lng.iter())
            .map(|(&la, &lo)| GeoPoint::new(la, lo))
            .collect();
        self.apply_batch(&mut points, layer, direction);
        Ok(points)
    }

    /// Correct a viewport by its south-west and north-east corners.
    ///
    /// Corners are converted independently; the GCJ-02 shift varies slowly
    /// enough that the result is still a valid SW/NE pair for map-sized boxes.
    pub fn apply_bounds(
        &self,
        bounds: BoundingBox,
        layer: LayerKind,
        direction: Direction,
    ) -> BoundingBox {
        let sw = self.apply(bounds.south_west(), layer, direction);
        let ne = self.apply(bounds.north_east(), layer, direction);
        BoundingBox::from_corners(sw, ne)
    }
}
