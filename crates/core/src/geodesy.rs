//! Great-circle distance and bearing helpers.
//!
//! The earth is treated as a sphere with the WGS84 equatorial radius. Every
//! distance the walk logic compares goes through here, so all of them come
//! from the same model.

use geo::{Bearing, Destination, Distance, HaversineMeasure, Point};

/// Sphere radius in meters
pub const EARTH_RADIUS: f64 = 6_378_137.0;

fn sphere() -> HaversineMeasure {
    HaversineMeasure::new(EARTH_RADIUS)
}

/// Great-circle distance between two points in meters
pub fn distance(p1: Point, p2: Point) -> f64 {
    sphere().distance(p1, p2)
}

/// Point reached by travelling `distance` meters from `origin` along `bearing` (degrees from north)
pub fn destination(origin: Point, bearing: f64, distance: f64) -> Point {
    sphere().destination(origin, bearing, distance)
}

/// Initial bearing from `p1` towards `p2`, normalized to [0, 360)
pub fn bearing(p1: Point, p2: Point) -> f64 {
    sphere().bearing(p1, p2).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_meridian_distance() {
        // a thousandth of a degree of latitude is 2πR / 360_000
        let dist = distance(Point::new(128.0, 49.000), Point::new(128.0, 49.001));
        assert_abs_diff_eq!(dist, 111.319_49, epsilon = 0.001);
    }

    #[test]
    fn test_destination_inverts_distance() {
        let origin = Point::new(-74.0060, 40.7128);
        let target = destination(origin, 37.0, 2_500.0);

        assert_abs_diff_eq!(distance(origin, target), 2_500.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bearing(origin, target), 37.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bearing_is_normalized() {
        // due west would be -90 without normalization
        let east = Point::new(128.001, 49.0);
        let west = Point::new(128.0, 49.0);

        let b = bearing(east, west);
        assert!((0.0..360.0).contains(&b));
        assert_abs_diff_eq!(b, 270.0, epsilon = 0.01);
    }
}
