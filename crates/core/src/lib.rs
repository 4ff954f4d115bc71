//! # warmer-walker-core
//!
//! Game logic for Warmer Walker: walk towards a hidden goal and get told
//! whether you are getting warmer or colder.
//!
//! ## Example
//!
//! ```
//! use warmer_walker_core::walk::{Clue, GoalTracker};
//! use geo::Point;
//!
//! let mut tracker = GoalTracker::new(Point::new(128.0, 49.100), 200.0)
//!     .unwrap()
//!     .with_goal(Point::new(128.0, 49.000));
//!
//! // about 330 meters closer
//! assert_eq!(tracker.update_position(Point::new(128.0, 49.097)), Some(Clue::Warmer));
//! ```

pub mod geodesy;
pub mod walk;
