//! Decides when the globe should re-center on the station.
//!
//! Both coordinates are truncated toward zero to whole degrees before they
//! are compared, so `-9.9` counts as `-9` and `10.9` as `10`. This keeps the
//! globe still until the station has drifted a full threshold away in whole
//! degrees, matching what the viewer has always done.

use crate::core::geo::LatLng;

/// Whole-degree part of a coordinate, truncated toward zero.
/// Non-finite values have no whole-degree part.
fn whole_degrees(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

fn axis_exceeds(center: f64, update: f64, threshold_deg: i64) -> bool {
    match (whole_degrees(center), whole_degrees(update)) {
        (Some(c), Some(u)) => u.abs_diff(c) >= threshold_deg.max(0) as u64,
        _ => false,
    }
}

/// Returns true if `update` is at least `threshold_deg` whole degrees away
/// from `center` in latitude or in longitude.
pub fn should_recenter(center: &LatLng, update: &LatLng, threshold_deg: i64) -> bool {
    axis_exceeds(center.lat, update.lat, threshold_deg)
        || axis_exceeds(center.lng, update.lng, threshold_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RECENTER_THRESHOLD_DEG;

    fn check(center: (f64, f64), update: (f64, f64)) -> bool {
        should_recenter(
            &LatLng::new(center.0, center.1),
            &LatLng::new(update.0, update.1),
            RECENTER_THRESHOLD_DEG,
        )
    }

    #[test]
    fn truncates_toward_zero_across_the_sign_boundary() {
        // |10 - (-9)| = 19
        assert!(!check((10.9, 0.0), (-9.1, 0.0)));
        // |10 - (-10)| = 20
        assert!(check((10.9, 0.0), (-10.1, 0.0)));
    }

    #[test]
    fn fractional_parts_do_not_count() {
        // 19.99 - 0.0 is almost 20 but truncates to 19
        assert!(!check((0.0, 0.0), (19.99, 0.0)));
        assert!(check((0.0, 0.0), (20.0, 0.0)));
        assert!(!check((-0.9, 0.0), (19.5, 0.0)));
    }

    #[test]
    fn either_axis_is_enough() {
        assert!(check((0.0, 0.0), (0.0, -25.0)));
        assert!(check((0.0, 170.0), (0.0, -170.0)));
        assert!(!check((5.0, 5.0), (15.0, 15.0)));
    }

    #[test]
    fn symmetric_when_both_sides_truncate() {
        let pairs = [((10.9, 0.0), (-9.1, 0.0)), ((3.7, -40.2), (-15.5, -21.0))];
        for (a, b) in pairs {
            assert_eq!(check(a, b), check(b, a));
        }
    }

    #[test]
    fn non_finite_coordinates_never_trigger() {
        assert!(!check((0.0, 0.0), (f64::NAN, 0.0)));
        assert!(!check((f64::INFINITY, 0.0), (0.0, 0.0)));
    }

    #[test]
    fn huge_finite_coordinates_do_not_overflow() {
        assert!(check((0.0, 0.0), (-1e300, 0.0)));
        assert!(check((1e300, 0.0), (-1e300, 0.0)));
        assert!(check((0.0, f64::MAX), (0.0, f64::MIN)));
        assert!(!check((-1e300, 0.0), (-1e300, 0.0)));
    }
}
