use geo::Point;
use serde::Deserialize;

use crate::walk::tracker::{self, GoalTracker};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed walk config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid walk config: {0}")]
    Invalid(String),
}

/// Tunables for a walk. Missing fields fall back to [`GameConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Meters. Both the "found" circle and the step needed before the next clue.
    pub goal_radius: f64,
    /// Meters. Goals are placed between half of this and this far from the start.
    pub max_goal_distance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal_radius: 30.0,
            max_goal_distance: 1_000.0,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.goal_radius.is_finite() && self.goal_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "goal_radius must be positive, got {}",
                self.goal_radius
            )));
        }

        // the nearest possible goal must lie outside the found circle
        if !(self.max_goal_distance.is_finite() && self.max_goal_distance >= 2.0 * self.goal_radius) {
            return Err(ConfigError::Invalid(format!(
                "max_goal_distance must be at least twice goal_radius ({}), got {}",
                self.goal_radius, self.max_goal_distance
            )));
        }

        Ok(())
    }

    /// A goalless tracker anchored at `position`
    pub fn new_tracker(&self, position: Point) -> tracker::Result<GoalTracker> {
        GoalTracker::new(position, self.goal_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = GameConfig::from_json(r#"{ "goal_radius": 50 }"#).unwrap();
        assert_eq!(config.goal_radius, 50.0);
        assert_eq!(config.max_goal_distance, GameConfig::default().max_goal_distance);

        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "goal_radius": -1 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "goal_radius": 100, "max_goal_distance": 150 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_new_tracker_uses_radius() {
        let config = GameConfig::default();
        let tracker = config.new_tracker(Point::new(128.0, 49.1)).unwrap();
        assert_eq!(tracker.goal_radius(), config.goal_radius);
        assert_eq!(tracker.anchor(), Point::new(128.0, 49.1));
    }
}
