//! The ships a player has placed.

use alloc::vec::Vec;

use crate::board::BB;
use crate::config::SHIPS;
use crate::coord::Position;
use crate::ship::{Ship, ShipClass};

/// Placed ships in catalog order. Ships are never removed; sunk ships stay
/// in the fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Catalog entry that still has to be placed, if any.
    pub fn next_class(&self) -> Option<ShipClass> {
        SHIPS.get(self.ships.len()).copied()
    }

    /// True once every catalog entry has been placed.
    pub fn is_complete(&self) -> bool {
        self.next_class().is_none()
    }

    /// The ship occupying `pos`.
    pub fn ship_at(&self, pos: Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(pos))
    }

    /// Union of all ship footprints.
    pub fn footprint(&self) -> BB {
        self.ships.iter().fold(BB::new(), |acc, s| acc | s.mask())
    }

    pub fn sunk_count(&self, hits: BB) -> usize {
        self.ships.iter().filter(|s| s.is_sunk(hits)).count()
    }

    /// True when every placed ship is sunk.
    pub fn all_sunk(&self, hits: BB) -> bool {
        self.ships.iter().all(|s| s.is_sunk(hits))
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }
}
