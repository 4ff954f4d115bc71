//! Random goal placement.

use geo::Point;
use rand::Rng;

use crate::{
    geodesy,
    walk::tracker::{Result, TrackerError},
};

/// A bearing and distance drawn for a new goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalDraw {
    /// Degrees clockwise from north, in [0, 360)
    pub bearing: f64,
    /// Meters, in [max_distance / 2, max_distance)
    pub distance: f64,
}

impl GoalDraw {
    pub fn sample<R: Rng + ?Sized>(max_distance: f64, rng: &mut R) -> Result<Self> {
        if !(max_distance.is_finite() && max_distance > 0.0) {
            return Err(TrackerError::InvalidGoalDistance(max_distance));
        }

        let bearing = rng.random::<f64>() * 360.0;
        let distance = (0.5 + rng.random::<f64>() / 2.0) * max_distance;

        Ok(Self { bearing, distance })
    }

    pub fn destination_from(&self, origin: Point) -> Point {
        geodesy::destination(origin, self.bearing, self.distance)
    }
}

/// Picks a point in the ring between `max_distance / 2` and `max_distance` around `origin`.
pub fn random_goal<R: Rng + ?Sized>(origin: Point, max_distance: f64, rng: &mut R) -> Result<Point> {
    Ok(GoalDraw::sample(max_distance, rng)?.destination_from(origin))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::walk::tracker::GoalTracker;

    fn at(latitude: f64, longitude: f64) -> Point {
        Point::new(longitude, latitude)
    }

    #[test]
    fn test_draw_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let draw = GoalDraw::sample(500.0, &mut rng).unwrap();
            assert!((0.0..360.0).contains(&draw.bearing));
            assert!((250.0..500.0).contains(&draw.distance));
        }
    }

    #[test]
    fn test_rejects_invalid_max_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            GoalDraw::sample(0.0, &mut rng).unwrap_err(),
            TrackerError::InvalidGoalDistance(0.0)
        );
        assert!(random_goal(at(49.1, 128.0), f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn test_chooses_goal_within_ring() {
        let step_size = geodesy::distance(at(49.000, 128.0), at(49.002, 128.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let tracker = GoalTracker::new(at(49.100, 128.0), step_size)
                .unwrap()
                .with_random_goal(step_size * 100.0, &mut rng)
                .unwrap();

            assert!(tracker.previous_distance() > step_size * 49.0);
            assert!(tracker.previous_distance() < step_size * 101.0);
            assert!(!tracker.is_found());
        }
    }

    #[test]
    fn test_same_seed_same_goal() {
        let tracker = || GoalTracker::new(at(49.100, 128.0), 30.0).unwrap();

        let first = tracker()
            .with_random_goal(1_000.0, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let second = tracker()
            .with_random_goal(1_000.0, &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(first.goal(), second.goal());
    }

    #[test]
    fn test_goal_is_placed_around_anchor() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut tracker = GoalTracker::new(at(49.100, 128.0), 30.0)
            .unwrap()
            .with_goal(at(49.000, 128.0));

        // wander a long way from where the tracker was created
        tracker.update_position(at(49.150, 128.0));
        assert_eq!(tracker.previous_position(), at(49.150, 128.0));

        for _ in 0..20 {
            let goal = tracker.choose_goal(1_000.0, &mut rng).unwrap();
            let from_anchor = geodesy::distance(tracker.anchor(), goal);

            assert!(from_anchor >= 500.0 - 1e-3 && from_anchor < 1_000.0 + 1e-3);
            assert!(geodesy::distance(tracker.previous_position(), goal) > 4_000.0);
        }
    }
}
