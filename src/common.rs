//! Common types for Battleship: shot outcomes, player identities and game errors.

use core::fmt;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot completed a ship, carrying its name.
    Sunk(&'static str),
    /// Shot sank the opponent's last ship. Ends the game.
    Won,
}

impl ShotOutcome {
    /// Console message announcing the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            ShotOutcome::Miss => "You missed!",
            ShotOutcome::Hit => "You hit a ship!",
            ShotOutcome::Sunk(_) => "You sank a ship!",
            ShotOutcome::Won => "You sank the last ship. You won. Congratulations!",
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Errors returned by `Game` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement refused; the same ship must be placed again.
    Placement(crate::placement::PlacementError),
    /// Operation not allowed in the current phase.
    WrongPhase,
}

impl From<crate::placement::PlacementError> for GameError {
    fn from(err: crate::placement::PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Placement(e) => write!(f, "{}", e),
            GameError::WrongPhase => write!(f, "operation not allowed in the current phase"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
