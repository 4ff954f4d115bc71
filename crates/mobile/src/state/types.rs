//! Values handed across the FFI boundary.

use geo::Point;
use warmer_walker_core::walk::{self, GoalTracker};

/// A location fix from the platform's location service.
#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PositionFix> for Point {
    fn from(fix: PositionFix) -> Self {
        Point::new(fix.longitude, fix.latitude)
    }
}

impl From<Point> for PositionFix {
    fn from(point: Point) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum ClueKind {
    Warmer,
    Colder,
    TooFar,
    Found,
}

impl From<walk::ClueKind> for ClueKind {
    fn from(kind: walk::ClueKind) -> Self {
        match kind {
            walk::ClueKind::Warmer => ClueKind::Warmer,
            walk::ClueKind::Colder => ClueKind::Colder,
            walk::ClueKind::TooFar => ClueKind::TooFar,
            walk::ClueKind::Found => ClueKind::Found,
        }
    }
}

/// What the screen should show after a fix.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ClueUpdate {
    /// Clue earned by this fix, if any
    pub clue: Option<ClueKind>,
    /// Text of the latest clue for the current goal, empty before the first one
    pub message: String,
    /// Fraction of the goal radius walked since the last clue
    pub progress: f64,
    pub found: bool,
}

impl ClueUpdate {
    pub(crate) fn new(clue: Option<walk::Clue>, tracker: &GoalTracker) -> Self {
        Self {
            clue: clue.map(|c| c.kind().into()),
            message: tracker.clue().map(|c| c.to_string()).unwrap_or_default(),
            progress: tracker.clue_progress(),
            found: tracker.is_found(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct GoalInfo {
    pub goal: PositionFix,
    /// Meters from the walker's reference position to the goal
    pub distance: f64,
    /// Bumped on every new goal; tags goal image requests
    pub generation: u64,
}

/// Everything the platform needs to fetch a picture of the goal.
///
/// The result should be passed back through `WalkSession::accept_goal_image`
/// before being shown, since the goal may have changed while it was loading.
#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct GoalImageRequest {
    pub generation: u64,
    pub location: PositionFix,
    /// Degrees from north, looking from the walker's reference position towards the goal
    pub heading: f64,
}
