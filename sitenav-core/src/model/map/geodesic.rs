use geo::{Distance, Haversine, Point};

use crate::Meters;

/// Great-circle distance between two points in meters
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

/// Great-circle distance rounded to the nearest meter.
///
/// `None` when either point has non-finite coordinates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rounded_meters(a: Point<f64>, b: Point<f64>) -> Option<Meters> {
    let meters = haversine_distance(a, b).round();
    if meters.is_finite() && meters >= 0.0 {
        Some(meters.min(f64::from(Meters::MAX)) as Meters)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(34.7818, 32.0853);
        let b = Point::new(34.7830, 32.0861);

        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
        assert_eq!(rounded_meters(a, b), rounded_meters(b, a));
    }

    #[test]
    fn one_thousandth_degree_of_latitude_is_about_111_meters() {
        let a = Point::new(34.78, 32.0);
        let b = Point::new(34.78, 32.001);

        assert_eq!(rounded_meters(a, b), Some(111));
    }

    #[test]
    fn same_point_is_zero_meters() {
        let a = Point::new(34.78, 32.08);
        assert_eq!(rounded_meters(a, a), Some(0));
    }

    #[test]
    fn non_finite_coordinates_have_no_distance() {
        let a = Point::new(f64::NAN, 32.0);
        let b = Point::new(34.78, 32.0);
        assert_eq!(rounded_meters(a, b), None);
    }
}
