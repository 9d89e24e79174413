//! WGS-84 <-> GCJ-02.
//!
//! forward: (Δφ, Δλ) from the empirical series at (λ − 105°, φ − 35°), scaled
//!   to degrees with the Krasovsky radii of curvature:
//!   Δφ° = Δφ·180 / (M·π),  Δλ° = Δλ·180 / (N·cosφ·π)
//! inverse: no closed form; two-phase fixed-point search over forward.
//!
//! Outside the China bounding box forward is the identity.

use std::f64::consts::PI;

use crate::offset::ellipsoid::{Ellipsoid, KRASOVSKY_1940};
use crate::offset::region::{BoundingBox, CHINA};
use crate::offset::series::{transform_lat, transform_lng};
use crate::offset::solver::{FixedPointSolver, InverseSolution};
use crate::offset::GeodeticTransform;
use crate::point::GeoPoint;

/// The GCJ-02 obfuscation as a geodetic transform.
#[derive(Clone, Copy, Debug)]
pub struct Gcj02 {
    ellipsoid: Ellipsoid,
    region: BoundingBox,
    solver: FixedPointSolver,
}

impl Gcj02 {
    pub fn new() -> Self {
        Self::with_solver(FixedPointSolver::default())
    }

    /// GCJ-02 with a custom inverse budget. The model constants stay fixed.
    pub fn with_solver(solver: FixedPointSolver) -> Self {
        Self {
            ellipsoid: KRASOVSKY_1940,
            region: CHINA,
            solver,
        }
    }

    /// Inverse with the solver's convergence report.
    pub fn inverse_with_report(&self, point: GeoPoint) -> InverseSolution {
        self.solver.solve(|p| self.forward(p), point)
    }

    /// Offset (Δlat, Δlng) in degrees that forward adds at `point`.
    fn delta(&self, point: GeoPoint) -> GeoPoint {
        let x = point.lng - 105.0;
        let y = point.lat - 35.0;
        let d_lat = transform_lat(x, y);
        let d_lng = transform_lng(x, y);

        let rad_lat = point.lat / 180.0 * PI;
        let (m, n) = self.ellipsoid.radii_of_curvature(rad_lat);
        GeoPoint::new(
            (d_lat * 180.0) / (m * PI),
            (d_lng * 180.0) / (n * rad_lat.cos() * PI),
        )
    }
}

impl Default for Gcj02 {
    fn default() -> Self {
        Self::new()
    }
}

impl GeodeticTransform for Gcj02 {
    fn forward(&self, point: GeoPoint) -> GeoPoint {
        if !self.region.contains(point) {
            return point;
        }
        point + self.delta(point)
    }

    fn inverse(&self, point: GeoPoint) -> GeoPoint {
        self.inverse_with_report(point).point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::solver::Phase;
    use approx::assert_relative_eq;

    const CITIES: &[(&str, f64, f64)] = &[
        ("Beijing", 39.9042, 116.4074),
        ("Shanghai", 31.2304, 121.4737),
        ("Urumqi", 43.8256, 87.6168),
        ("Lhasa", 29.6520, 91.1721),
        ("Haikou", 20.0440, 110.1999),
        ("Sanya", 18.2528, 109.5119),
        ("Harbin", 45.7500, 126.6300),
        ("Shenzhen", 22.5400, 114.0600),
    ];

    #[test]
    fn test_forward_reference_values() {
        let gcj = Gcj02::new();
        // (WGS-84 lat, lng) -> (GCJ-02 lat, lng), published conversion vectors
        let cases: &[((f64, f64), (f64, f64))] = &[
            ((39.915, 116.404), (39.916_404_281_501_64, 116.410_244_499_169_38)),
            ((39.904179, 116.407387), (39.905582, 116.413629)),
            ((30.593354, 114.304569), (30.590943, 114.310012)),
        ];
        for &((lat, lng), (exp_lat, exp_lng)) in cases {
            let out = gcj.forward(GeoPoint::new(lat, lng));
            assert_relative_eq!(out.lat, exp_lat, epsilon = 1e-6);
            assert_relative_eq!(out.lng, exp_lng, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_forward_tiananmen_offset_magnitude() {
        // Around Beijing the shift is ~150 m north and ~530 m east
        let gcj = Gcj02::new();
        let wgs = GeoPoint::new(39.90923, 116.39742);
        let out = gcj.forward(wgs);
        assert_relative_eq!(out.lat, 39.910_633_504_6, epsilon = 1e-9);
        assert_relative_eq!(out.lng, 116.403_663_624_4, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_identity_outside_china() {
        let gcj = Gcj02::new();
        let cases = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(40.7484, -73.9857),
            GeoPoint::new(35.6895, 139.6917), // Tokyo, east of the box
            GeoPoint::new(56.0, 100.0),
            GeoPoint::new(30.0, 72.0),
            GeoPoint::new(120.0, 100.0), // nonsense latitude, still untouched
        ];
        for p in cases {
            assert_eq!(gcj.forward(p), p);
        }
    }

    #[test]
    fn test_forward_applies_on_box_edges() {
        let gcj = Gcj02::new();
        let edges = [
            GeoPoint::new(30.0, 72.004),
            GeoPoint::new(55.8271, 100.0),
            GeoPoint::new(0.8293, 137.8347),
        ];
        for p in edges {
            assert_ne!(gcj.forward(p), p, "edge point {p:?} should be shifted");
        }
    }

    #[test]
    fn test_forward_is_deterministic() {
        let gcj = Gcj02::new();
        let p = GeoPoint::new(31.2304, 121.4737);
        let a = gcj.forward(p);
        let b = gcj.forward(p);
        assert_eq!(a.lat.to_bits(), b.lat.to_bits());
        assert_eq!(a.lng.to_bits(), b.lng.to_bits());

        let c = gcj.inverse(a);
        let d = gcj.inverse(a);
        assert_eq!(c.lat.to_bits(), d.lat.to_bits());
        assert_eq!(c.lng.to_bits(), d.lng.to_bits());
    }

    #[test]
    fn test_roundtrip_cities() {
        let gcj = Gcj02::new();
        for &(name, lat, lng) in CITIES {
            let wgs = GeoPoint::new(lat, lng);
            let sol = gcj.inverse_with_report(gcj.forward(wgs));
            assert!(sol.converged, "{name} did not converge");
            assert!(sol.iterations <= 30, "{name}: {} iterations", sol.iterations);
            assert_eq!(sol.phase, Phase::Subtractive, "{name}");
            assert!(
                (sol.point.lat - lat).abs() < 1e-6,
                "{name}: lat {} vs {lat}",
                sol.point.lat
            );
            assert!(
                (sol.point.lng - lng).abs() < 1e-6,
                "{name}: lng {} vs {lng}",
                sol.point.lng
            );
        }
    }

    #[test]
    fn test_roundtrip_grid() {
        let gcj = Gcj02::new();
        let mut lat = 2.0;
        while lat < 55.0 {
            let mut lng = 74.0;
            while lng < 137.0 {
                let wgs = GeoPoint::new(lat, lng);
                let back = gcj.inverse(gcj.forward(wgs));
                assert!(back.max_abs_diff(&wgs) < 1e-6, "({lat}, {lng}) -> {back:?}");
                lng += 3.7;
            }
            lat += 2.9;
        }
    }

    #[test]
    fn test_roundtrip_near_box_edges() {
        // ~0.02° inside the edges the round trip still holds
        let gcj = Gcj02::new();
        for wgs in [GeoPoint::new(0.85, 72.03), GeoPoint::new(55.80, 137.81)] {
            let sol = gcj.inverse_with_report(gcj.forward(wgs));
            assert!(sol.converged, "{wgs:?}");
            assert!(sol.point.max_abs_diff(&wgs) < 1e-6, "{wgs:?} -> {:?}", sol.point);
        }
    }

    #[test]
    fn test_inverse_north_east_corner_stops_at_input() {
        // forward pushes the corner out of the box, where forward is the identity
        let gcj = Gcj02::new();
        let wgs = GeoPoint::new(55.8271, 137.8347);
        let shifted = gcj.forward(wgs);
        assert!(!CHINA.contains(shifted));

        let sol = gcj.inverse_with_report(shifted);
        assert!(sol.converged);
        assert_eq!(sol.iterations, 1);
        assert_eq!(sol.point, shifted);
        assert!(sol.point.max_abs_diff(&wgs) > 5e-3);
    }

    #[test]
    fn test_inverse_south_west_corner_does_not_converge() {
        // Estimates keep crossing the western edge in and out of the box
        let gcj = Gcj02::new();
        let wgs = GeoPoint::new(0.8293, 72.004);
        let sol = gcj.inverse_with_report(gcj.forward(wgs));
        assert!(!sol.converged);
        assert_eq!(sol.phase, Phase::Additive);
        assert_eq!(sol.iterations, 60);
        assert!(sol.point.max_abs_diff(&wgs) > 1e-3);
    }

    #[test]
    fn test_inverse_outside_china_is_identity() {
        let gcj = Gcj02::new();
        let p = GeoPoint::new(48.8566, 2.3522);
        assert_eq!(gcj.inverse(p), p);
    }

    #[test]
    fn test_batch_matches_single() {
        let gcj = Gcj02::new();
        let mut pts: Vec<GeoPoint> = CITIES
            .iter()
            .map(|&(_, lat, lng)| GeoPoint::new(lat, lng))
            .collect();
        let expected: Vec<GeoPoint> = pts.iter().map(|&p| gcj.forward(p)).collect();
        gcj.forward_batch(&mut pts);
        assert_eq!(pts, expected);

        gcj.inverse_batch(&mut pts);
        for (p, &(_, lat, lng)) in pts.iter().zip(CITIES) {
            assert!(p.max_abs_diff(&GeoPoint::new(lat, lng)) < 1e-6);
        }
    }
}
