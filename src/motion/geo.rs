use crate::config::constant::EARTH_RADIUS_KM;
use crate::domain::types::Coordinate;

/// Result of moving along a leg for some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub position: Coordinate,
    pub progress: f64,
    pub arrived: bool,
}

/// Haversine distance in kilometres.
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Fraction of the leg `start -> end` covered after `elapsed_seconds` at `speed_kmh`.
///
/// A zero-length leg counts as already complete. A leg that can never finish
/// (non-positive or non-finite speed) stays at 0.
pub fn leg_progress(start: Coordinate, end: Coordinate, speed_kmh: f64, elapsed_seconds: f64) -> f64 {
    let distance = great_circle_distance_km(start, end);
    if distance == 0.0 {
        return 1.0;
    }
    if !(speed_kmh > 0.0) || !speed_kmh.is_finite() {
        return 0.0;
    }

    let total_trip_seconds = (distance / speed_kmh) * 3600.0;
    if !(total_trip_seconds > 0.0) || !total_trip_seconds.is_finite() {
        return 0.0;
    }

    let progress = elapsed_seconds / total_trip_seconds;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Straight-line interpolation on the map (lat and lon independently), not a geodesic.
pub fn lerp(start: Coordinate, end: Coordinate, t: f64) -> Coordinate {
    Coordinate {
        lat: start.lat + (end.lat - start.lat) * t,
        lon: start.lon + (end.lon - start.lon) * t,
    }
}

pub fn advance(start: Coordinate, end: Coordinate, speed_kmh: f64, elapsed_seconds: f64) -> Advance {
    let progress = leg_progress(start, end, speed_kmh, elapsed_seconds);
    let arrived = progress >= 1.0;
    // Snap to the target on arrival so float error in lerp never leaves a residue.
    let position = if arrived { end } else { lerp(start, end, progress) };

    Advance {
        position,
        progress,
        arrived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burj() -> Coordinate {
        Coordinate::new(25.197197, 55.274376)
    }

    fn marina() -> Coordinate {
        Coordinate::new(25.080, 55.140)
    }

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(great_circle_distance_km(burj(), burj()), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = great_circle_distance_km(burj(), marina());
        let ba = great_circle_distance_km(marina(), burj());
        assert!((ab - ba).abs() < 1e-9, "{ab} vs {ba}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = great_circle_distance_km(Coordinate::new(25.0, 55.0), Coordinate::new(26.0, 55.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn no_elapsed_time_stays_at_start() {
        let step = advance(burj(), marina(), 50.0, 0.0);
        assert!(!step.arrived);
        assert_eq!(step.position, burj());
        assert_eq!(step.progress, 0.0);
    }

    #[test]
    fn full_trip_arrives_at_end() {
        let distance = great_circle_distance_km(burj(), marina());
        let trip = distance / 50.0 * 3600.0;

        let exact = advance(burj(), marina(), 50.0, trip);
        assert!(exact.arrived);
        assert_eq!(exact.position, marina());

        let overshoot = advance(burj(), marina(), 50.0, trip * 3.0);
        assert!(overshoot.arrived);
        assert_eq!(overshoot.position, marina());
        assert_eq!(overshoot.progress, 1.0);
    }

    #[test]
    fn halfway_is_the_midpoint() {
        let distance = great_circle_distance_km(burj(), marina());
        let trip = distance / 40.0 * 3600.0;
        let step = advance(burj(), marina(), 40.0, trip / 2.0);

        assert!(!step.arrived);
        assert!((step.progress - 0.5).abs() < 1e-12);
        assert!((step.position.lat - (burj().lat + marina().lat) / 2.0).abs() < 1e-9);
        assert!((step.position.lon - (burj().lon + marina().lon) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn progress_never_decreases_with_time() {
        let mut last = 0.0;
        for secs in (0..2000).step_by(25) {
            let p = advance(burj(), marina(), 35.0, secs as f64).progress;
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn position_stays_on_the_segment() {
        for secs in [1.0, 60.0, 300.0, 900.0] {
            let step = advance(burj(), marina(), 60.0, secs);
            let expected = lerp(burj(), marina(), step.progress);
            assert!((step.position.lat - expected.lat).abs() < 1e-12);
            assert!((step.position.lon - expected.lon).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_length_leg_is_already_arrived() {
        let step = advance(burj(), burj(), 50.0, 0.0);
        assert!(step.arrived);
        assert_eq!(step.position, burj());
    }

    #[test]
    fn zero_speed_never_arrives() {
        let step = advance(burj(), marina(), 0.0, 1.0e9);
        assert!(!step.arrived);
        assert_eq!(step.progress, 0.0);
        assert_eq!(step.position, burj());
    }

    #[test]
    fn negative_elapsed_is_clamped() {
        let step = advance(burj(), marina(), 50.0, -120.0);
        assert_eq!(step.progress, 0.0);
        assert_eq!(step.position, burj());
    }
}
