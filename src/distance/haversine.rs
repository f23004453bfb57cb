//! Great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// # Examples
///
/// ```
/// use spot_routing::models::Coordinate;
/// use spot_routing::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator.
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(&a, &a), 0.0);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lat2) = (a.latitude().to_radians(), b.latitude().to_radians());
    let dlat = (b.latitude() - a.latitude()).to_radians();
    let dlon = (b.longitude() - a.longitude()).to_radians();
    let s1 = (dlat / 2.0).sin();
    let s2 = (dlon / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
