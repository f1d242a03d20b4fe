//! Game board state: ship occupancy, hits and misses, with on-demand
//! projections for the owner and the opponent.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::bitboard::BitBoard;
use crate::config::BOARD_SIZE;
use crate::coord::Position;

/// Bitboard covering the whole grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Ship present, not yet fired upon.
    Occupied,
    Hit,
    Miss,
}

impl CellState {
    /// Console symbol for the cell.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Occupied => 'O',
            CellState::Hit => 'X',
            CellState::Miss => 'M',
        }
    }
}

/// Who is looking at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The board's owner sees unfired ship cells.
    Owner,
    /// The opponent sees only shots: fog of war over everything else.
    Opponent,
}

/// One player's grid.
///
/// Cell states only move forward: `Empty -> Occupied` during setup,
/// `Occupied -> Hit` or `Empty -> Miss` during play.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Ground-truth state of a cell.
    pub fn cell(&self, pos: Position) -> CellState {
        let (r, c) = pos.into();
        if self.hits.get(r, c).unwrap_or(false) {
            CellState::Hit
        } else if self.misses.get(r, c).unwrap_or(false) {
            CellState::Miss
        } else if self.ship_map.get(r, c).unwrap_or(false) {
            CellState::Occupied
        } else {
            CellState::Empty
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        match state {
            CellState::Occupied => (self.ship_map & !self.hits).count_ones(),
            CellState::Hit => self.hits.count_ones(),
            CellState::Miss => self.misses.count_ones(),
            CellState::Empty => (!(self.ship_map | self.misses)).count_ones(),
        }
    }

    /// Projection of this board for `observer`.
    pub fn view(&self, observer: View) -> BoardView<'_> {
        BoardView {
            board: self,
            observer,
        }
    }

    pub(crate) fn occupy(&mut self, mask: BB) {
        self.ship_map |= mask;
    }

    pub(crate) fn mark_hit(&mut self, pos: Position) {
        let (r, c) = pos.into();
        let _ = self.hits.set(r, c);
    }

    pub(crate) fn mark_miss(&mut self, pos: Position) {
        let (r, c) = pos.into();
        let _ = self.misses.set(r, c);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{\n{}}}", self.view(View::Owner))
    }
}

/// A board as seen by one observer.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    observer: View,
}

impl BoardView<'_> {
    /// Cell state visible to the observer.
    pub fn cell(&self, pos: Position) -> CellState {
        match (self.board.cell(pos), self.observer) {
            (CellState::Occupied, View::Opponent) => CellState::Empty,
            (state, _) => state,
        }
    }

    /// Fixed-width grid text, one line per row, each line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        f.write_str(" ")?;
        for c in 1..=size {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, "{}", (b'A' + r as u8) as char)?;
            for c in 0..size {
                let state = Position::new(r, c)
                    .map(|pos| self.cell(pos))
                    .map_err(|_| fmt::Error)?;
                write!(f, " {}", state.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
