//! Resolving a shot against the opponent's board.

use log::debug;

use crate::board::{Board, CellState};
use crate::common::ShotOutcome;
use crate::coord::Position;
use crate::fleet::Fleet;

/// Fire at `target` on `board`, owned by `fleet`, and classify the result.
///
/// Re-firing at a resolved cell changes nothing and reports the cell's
/// terminal state again (`Hit` or `Miss`); it never re-announces a sink or
/// a win.
///
/// # Panics
///
/// If an occupied cell belongs to no ship in `fleet`.
pub fn resolve(board: &mut Board, fleet: &Fleet, target: Position) -> ShotOutcome {
    let outcome = match board.cell(target) {
        CellState::Occupied => {
            board.mark_hit(target);
            let Some(ship) = fleet.ship_at(target) else {
                panic!("occupied cell {} belongs to no ship", target);
            };
            if fleet.all_sunk(board.hits()) {
                ShotOutcome::Won
            } else if ship.is_sunk(board.hits()) {
                ShotOutcome::Sunk(ship.name())
            } else {
                ShotOutcome::Hit
            }
        }
        CellState::Empty => {
            board.mark_miss(target);
            ShotOutcome::Miss
        }
        CellState::Hit => ShotOutcome::Hit,
        CellState::Miss => ShotOutcome::Miss,
    };
    debug!("shot at {} -> {:?}", target, outcome);
    outcome
}
