//! The warmer/colder state machine.
//!
//! A [`GoalTracker`] keeps a *reference point*: the position and distance to
//! the goal at which the last clue was given. Each fix is compared against it:
//!
//! - **Found**: the fix lies inside the goal radius. Emitted once, after which
//!   the tracker stays found and silent until a new goal is set.
//! - **Too far**: the fix is further from the goal than the starting distance
//!   plus two goal radii, so the distance itself is reported.
//! - **No clue**: the fix is less than one goal radius from the reference
//!   point. Only the clue progress is updated.
//! - **Warmer / Colder**: otherwise, by whether the distance to the goal shrank.
//!
//! The reference point only moves when a clue is emitted.

use geo::Point;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::{
    geodesy,
    walk::{clue::Clue, goal},
};

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("Goal radius must be a positive number of meters, got {0}")]
    InvalidRadius(f64),

    #[error("Maximum goal distance must be a positive number of meters, got {0}")]
    InvalidGoalDistance(f64),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Clone, Debug)]
pub struct GoalTracker {
    /// Position at construction. Goals are always placed around this point.
    anchor: Point,
    goal_radius: f64,
    goal: Point,
    previous_position: Point,
    /// From `previous_position` to the goal
    previous_distance: f64,
    /// Distance to the goal past which the walker is told how far away they are
    max_distance: f64,
    clue: Option<Clue>,
    /// Fraction of the goal radius covered since the last clue
    clue_progress: f64,
    found: bool,
}

impl GoalTracker {
    /// Creates a tracker with no goal. Until a goal is set it reports itself
    /// as found and ignores every fix.
    pub fn new(position: Point, goal_radius: f64) -> Result<Self> {
        if !(goal_radius.is_finite() && goal_radius > 0.0) {
            return Err(TrackerError::InvalidRadius(goal_radius));
        }

        Ok(Self {
            anchor: position,
            goal_radius,
            goal: position,
            previous_position: position,
            previous_distance: 0.0,
            max_distance: 0.0,
            clue: None,
            clue_progress: 0.0,
            found: true,
        })
    }

    /// Targets a new goal, measured from the last reference point.
    pub fn set_goal(&mut self, goal: Point) {
        self.goal = goal;
        self.previous_distance = geodesy::distance(self.previous_position, goal);
        self.max_distance = self.previous_distance + 2.0 * self.goal_radius;
        self.clue = None;
        self.clue_progress = 0.0;
        self.found = false;

        debug!(
            latitude = goal.y(),
            longitude = goal.x(),
            distance = self.previous_distance,
            "goal set"
        );
    }

    pub fn with_goal(mut self, goal: Point) -> Self {
        self.set_goal(goal);
        self
    }

    /// Picks a random goal between half of `max_distance` and `max_distance`
    /// away from the anchor and targets it.
    ///
    /// Note that the anchor is the position the tracker was created with, not
    /// the walker's latest position.
    pub fn choose_goal<R: Rng + ?Sized>(
        &mut self,
        max_distance: f64,
        rng: &mut R,
    ) -> Result<Point> {
        let goal = goal::random_goal(self.anchor, max_distance, rng)?;
        self.set_goal(goal);
        Ok(goal)
    }

    pub fn with_random_goal<R: Rng + ?Sized>(
        mut self,
        max_distance: f64,
        rng: &mut R,
    ) -> Result<Self> {
        self.choose_goal(max_distance, rng)?;
        Ok(self)
    }

    /// Feeds a position fix, returning the clue it earns, if any.
    pub fn update_position(&mut self, position: Point) -> Option<Clue> {
        if self.found {
            trace!("goal already found, ignoring fix");
            return None;
        }

        let distance_to_goal = geodesy::distance(position, self.goal);

        if distance_to_goal < self.goal_radius {
            info!(distance = distance_to_goal, "goal found");
            self.found = true;
            let clue = Clue::Found {
                distance: distance_to_goal,
            };
            return Some(self.emit(position, distance_to_goal, clue));
        }

        if self.max_distance < distance_to_goal {
            debug!(
                distance = distance_to_goal,
                max_distance = self.max_distance,
                "walker is too far from the goal"
            );
            let clue = Clue::TooFar {
                distance: distance_to_goal,
            };
            return Some(self.emit(position, distance_to_goal, clue));
        }

        let distance_change = distance_to_goal - self.previous_distance;
        let distance_from_previous = geodesy::distance(self.previous_position, position);

        if distance_from_previous < self.goal_radius {
            self.clue_progress = distance_from_previous / self.goal_radius;
            trace!(progress = self.clue_progress, "step too small for a clue");
            return None;
        }

        let clue = if distance_change < 0.0 {
            Clue::Warmer
        } else {
            Clue::Colder
        };
        trace!(%clue, distance_change, "clue given");

        Some(self.emit(position, distance_to_goal, clue))
    }

    fn emit(&mut self, position: Point, distance_to_goal: f64, clue: Clue) -> Clue {
        self.previous_position = position;
        self.previous_distance = distance_to_goal;
        self.clue_progress = 0.0;
        self.clue = Some(clue);
        clue
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn goal_radius(&self) -> f64 {
        self.goal_radius
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn previous_position(&self) -> Point {
        self.previous_position
    }

    pub fn previous_distance(&self) -> f64 {
        self.previous_distance
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// The most recently emitted clue for the current goal
    pub fn clue(&self) -> Option<Clue> {
        self.clue
    }

    pub fn clue_progress(&self) -> f64 {
        self.clue_progress
    }

    pub fn is_found(&self) -> bool {
        self.found
    }
}
