//! Ship definitions and footprints using our `BitBoard`.

use crate::board::BB;
use crate::coord::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Catalog entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board.
///
/// The footprint is a straight, contiguous run of `class.length()` cells;
/// `Ship::new` is only reachable through the placement validator, which
/// establishes that.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    mask: BB,
}

impl Ship {
    pub(crate) fn new(class: ShipClass, orientation: Orientation, mask: BB) -> Self {
        debug_assert_eq!(mask.count_ones(), class.length());
        Self {
            class,
            orientation,
            mask,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.mask.get(pos.row(), pos.col()).unwrap_or(false)
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.mask
            .iter_set_bits()
            .filter_map(|(r, c)| Position::new(r, c).ok())
    }

    /// True once every cell of the ship appears in `hits`.
    pub fn is_sunk(&self, hits: BB) -> bool {
        (self.mask & hits) == self.mask
    }
}

impl core::fmt::Debug for Ship {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut cells = self.cells();
        let first = cells.next();
        let last = cells.last().or(first);
        match (first, last) {
            (Some(a), Some(b)) => write!(
                f,
                "Ship {{ name: \"{}\", from: {}, to: {}, orientation: {:?} }}",
                self.name(),
                a,
                b,
                self.orientation
            ),
            _ => write!(f, "Ship {{ name: \"{}\" }}", self.name()),
        }
    }
}
