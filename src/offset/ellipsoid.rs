/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    /// Ellipsoid from semi-major axis and flattening.
    pub const fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            e2: 2.0 * f - f * f,
        }
    }

    /// Meridional and prime-vertical radii of curvature at `lat_rad`.
    ///
    /// Returns `(M, N)` with M = a(1-e²)/W³ and N = a/W, W = sqrt(1 - e²sin²φ).
    pub fn radii_of_curvature(&self, lat_rad: f64) -> (f64, f64) {
        let sin_lat = lat_rad.sin();
        let magic = 1.0 - self.e2 * sin_lat * sin_lat;
        let sqrt_magic = magic.sqrt();
        let meridional = (self.a * (1.0 - self.e2)) / (magic * sqrt_magic);
        let prime_vertical = self.a / sqrt_magic;
        (meridional, prime_vertical)
    }
}

/// Krasovsky 1940 (a = 6378245, 1/f = 298.3), the ellipsoid the GCJ-02
/// offset model is defined on.
///
/// e² is pinned to the published literal rather than derived from `f`;
/// GCJ-02 output must match reference tables to the last digit.
#[allow(clippy::excessive_precision)]
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid {
    a: 6_378_245.0,
    e2: 0.006_693_421_622_965_943_23,
};
