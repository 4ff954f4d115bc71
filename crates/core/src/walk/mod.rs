//! The warmer/colder walk: a hidden goal, a stream of position fixes, and the
//! clues that lead a walker towards it.

pub mod clue;
pub mod config;
pub mod goal;
pub mod tracker;

pub use clue::{Clue, ClueKind};
pub use config::{ConfigError, GameConfig};
pub use goal::{GoalDraw, random_goal};
pub use tracker::{GoalTracker, TrackerError};
