//! Ship placement validation.
//!
//! A ship is given as two endpoint coordinates. The endpoints must share a
//! row or a column, the inclusive segment between them must be exactly as
//! long as the ship, and no cell of the segment may touch an already placed
//! ship, diagonals included.

use core::fmt;

use log::debug;

use crate::board::{Board, BB};
use crate::coord::Position;
use crate::fleet::Fleet;
use crate::ship::{Orientation, Ship, ShipClass};

/// Why a placement was refused. The ship slot is not consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Malformed coordinates, or endpoints not on one row or column.
    WrongLocation,
    /// Segment length differs from the ship being placed.
    WrongLength { ship: &'static str },
    /// Segment overlaps or touches another ship.
    TooClose,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongLocation => write!(f, "Error! Wrong ship location! Try again:"),
            PlacementError::WrongLength { ship } => {
                write!(f, "Error! Wrong length of the {}! Try again:", ship)
            }
            PlacementError::TooClose => {
                write!(f, "Error! You placed it too close to another one. Try again:")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Parse a setup line: exactly two whitespace-separated coordinates.
pub fn parse_endpoints(line: &str) -> Result<(Position, Position), PlacementError> {
    let mut parts = line.split_whitespace();
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PlacementError::WrongLocation);
    };
    let a = a.parse().map_err(|_| PlacementError::WrongLocation)?;
    let b = b.parse().map_err(|_| PlacementError::WrongLocation)?;
    Ok((a, b))
}

/// Inclusive straight segment between two endpoints.
///
/// Equal endpoints give a single-cell horizontal segment.
pub fn segment(a: Position, b: Position) -> Result<(Orientation, BB), PlacementError> {
    let (orientation, cells) = if a.row() == b.row() {
        let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
        (
            Orientation::Horizontal,
            BB::from_iter((lo..=hi).map(|c| (a.row(), c))),
        )
    } else if a.col() == b.col() {
        let (lo, hi) = (a.row().min(b.row()), a.row().max(b.row()));
        (
            Orientation::Vertical,
            BB::from_iter((lo..=hi).map(|r| (r, a.col()))),
        )
    } else {
        return Err(PlacementError::WrongLocation);
    };
    let cells = cells.map_err(|_| PlacementError::WrongLocation)?;
    Ok((orientation, cells))
}

/// Check a placement of `class` between `a` and `b` without changing anything.
pub fn validate(
    board: &Board,
    class: ShipClass,
    a: Position,
    b: Position,
) -> Result<Ship, PlacementError> {
    let (orientation, cells) = segment(a, b)?;
    if cells.count_ones() != class.length() {
        return Err(PlacementError::WrongLength { ship: class.name() });
    }
    if !(cells.neighborhood() & board.ship_map()).is_empty() {
        return Err(PlacementError::TooClose);
    }
    Ok(Ship::new(class, orientation, cells))
}

/// Validate and commit a placement onto the real board and the fleet.
///
/// On error neither the board nor the fleet is modified.
pub fn place(
    board: &mut Board,
    fleet: &mut Fleet,
    class: ShipClass,
    a: Position,
    b: Position,
) -> Result<Ship, PlacementError> {
    let ship = validate(board, class, a, b)?;
    board.occupy(ship.mask());
    fleet.push(ship);
    debug!("placed {:?}", ship);
    Ok(ship)
}
