//! Great-circle distance between WGS84 coordinates.

use geo::Coord;

/// Earth radius in metres used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in metres between two coordinates.
///
/// Coordinates use `x = longitude` and `y = latitude` in degrees. The
/// function is pure and total over finite inputs; a non-finite component
/// propagates as `NaN`. Callers that only hold an optional coordinate must
/// gate on its presence and report the distance as unknown rather than call
/// this with a placeholder.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tableside_core::haversine_distance_m;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let east = Coord { x: 1.0, y: 0.0 };
/// let d = haversine_distance_m(origin, east);
/// assert!((d - 111_195.0).abs() < 10.0);
/// ```
#[must_use]
pub fn haversine_distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
