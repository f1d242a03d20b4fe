use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Ships every player places, in placement order.
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Aircraft Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Destroyer", 2),
];

/// Number of ship cells in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Default names used by the binary when none are given.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];
