use std::fmt;

use strum::EnumDiscriminants;

/// Feedback given to the walker after a position fix.
///
/// Distances are kept unrounded; rounding to whole meters only happens when a
/// clue is displayed.
#[derive(Clone, Copy, Debug, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(ClueKind), derive(strum::Display, Hash))]
pub enum Clue {
    /// The walker covered at least one goal radius and ended up closer.
    Warmer,
    /// The walker covered at least one goal radius and did not end up closer.
    Colder,
    /// The walker wandered past the useful comparison range.
    TooFar { distance: f64 },
    /// The walker stepped inside the goal radius.
    Found { distance: f64 },
}

impl Clue {
    pub fn kind(&self) -> ClueKind {
        ClueKind::from(self)
    }

    /// Distance to the goal carried by the clue, if it reveals one
    pub fn distance(&self) -> Option<f64> {
        match self {
            Clue::Warmer | Clue::Colder => None,
            Clue::TooFar { distance } | Clue::Found { distance } => Some(*distance),
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clue::Warmer => write!(f, "Warmer"),
            Clue::Colder => write!(f, "Colder"),
            Clue::TooFar { distance } => write!(f, "{}m away", distance.round()),
            Clue::Found { distance } => write!(f, "Found {}m away", distance.round()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_display() {
        assert_eq!(Clue::Warmer.to_string(), "Warmer");
        assert_eq!(Clue::Colder.to_string(), "Colder");
        // rounded half away from zero
        assert_eq!(Clue::Found { distance: 0.4 }.to_string(), "Found 0m away");
        assert_eq!(Clue::TooFar { distance: 1_499.5 }.to_string(), "1500m away");
    }

    #[test]
    fn test_clue_kind() {
        assert_eq!(Clue::Found { distance: 3.0 }.kind(), ClueKind::Found);
        assert_eq!(Clue::Warmer.kind().to_string(), "Warmer");
        assert_eq!(Clue::Colder.distance(), None);
        assert_eq!(Clue::TooFar { distance: 900.0 }.distance(), Some(900.0));
    }
}
