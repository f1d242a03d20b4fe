use battleship_duel::placement::{self, PlacementError};
use battleship_duel::{Board, CellState, Fleet, Orientation, Position, ShipClass, SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

const LAYOUT: [(&str, &str); 5] = [
    ("A1", "A5"),
    ("C1", "C4"),
    ("E1", "E3"),
    ("G1", "G3"),
    ("I1", "I2"),
];

fn place_layout(board: &mut Board, fleet: &mut Fleet) {
    for (class, (a, b)) in SHIPS.iter().zip(LAYOUT) {
        placement::place(board, fleet, *class, pos(a), pos(b)).unwrap();
    }
}

#[test]
fn diagonal_endpoints_are_wrong_location() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let err = placement::place(&mut board, &mut fleet, SHIPS[4], pos("A1"), pos("B2"));
    assert_eq!(err, Err(PlacementError::WrongLocation));
    assert_eq!(board, Board::new());
    assert!(fleet.is_empty());
}

#[test]
fn wrong_length_names_the_ship() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let err = placement::place(&mut board, &mut fleet, SHIPS[0], pos("A1"), pos("A4"));
    assert_eq!(
        err,
        Err(PlacementError::WrongLength {
            ship: "Aircraft Carrier"
        })
    );
    assert_eq!(
        err.unwrap_err().to_string(),
        "Error! Wrong length of the Aircraft Carrier! Try again:"
    );
    assert_eq!(board, Board::new());
}

#[test]
fn equal_endpoints_only_fit_a_single_cell_ship() {
    let board = Board::new();
    assert_eq!(
        placement::validate(&board, SHIPS[4], pos("D4"), pos("D4")),
        Err(PlacementError::WrongLength { ship: "Destroyer" })
    );
    let dinghy = ShipClass::new("Dinghy", 1);
    let ship = placement::validate(&board, dinghy, pos("D4"), pos("D4")).unwrap();
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![pos("D4")]);
}

#[test]
fn adjacent_ship_is_too_close() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let destroyer = SHIPS[4];
    placement::place(&mut board, &mut fleet, destroyer, pos("A1"), pos("A2")).unwrap();

    let before = board;
    let err = placement::place(&mut board, &mut fleet, destroyer, pos("B1"), pos("B2"));
    assert_eq!(err, Err(PlacementError::TooClose));
    assert_eq!(board, before);
    assert_eq!(fleet.len(), 1);
}

#[test]
fn diagonal_touch_and_overlap_are_too_close() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    placement::place(&mut board, &mut fleet, SHIPS[2], pos("E5"), pos("E7")).unwrap();

    for (a, b) in [("F8", "H8"), ("D2", "D4"), ("C6", "E6"), ("E7", "G7"), ("B4", "D4")] {
        assert_eq!(
            placement::validate(&board, SHIPS[3], pos(a), pos(b)).map(|_| ()),
            Err(PlacementError::TooClose),
            "{}-{} should touch E5-E7",
            a,
            b
        );
    }
    // one empty row in between is enough
    assert!(placement::validate(&board, SHIPS[3], pos("G5"), pos("G7")).is_ok());
    assert!(placement::validate(&board, SHIPS[3], pos("B8"), pos("D8")).is_err());
    assert!(placement::validate(&board, SHIPS[3], pos("B9"), pos("D9")).is_ok());
}

#[test]
fn reversed_endpoints_place_the_same_cells() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let ship = placement::place(&mut board, &mut fleet, SHIPS[1], pos("J7"), pos("G7")).unwrap();
    assert_eq!(ship.orientation(), Orientation::Vertical);
    let cells: Vec<String> = ship.cells().map(|p| p.to_string()).collect();
    assert_eq!(cells, ["G7", "H7", "I7", "J7"]);
    assert_eq!(board.cell(pos("G7")), CellState::Occupied);
    assert_eq!(fleet.ship_at(pos("H7")).map(|s| s.name()), Some("Battleship"));
}

#[test]
fn full_fleet_occupies_seventeen_cells() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    place_layout(&mut board, &mut fleet);

    assert!(fleet.is_complete());
    assert_eq!(fleet.next_class(), None);
    assert_eq!(board.count(CellState::Occupied), TOTAL_SHIP_CELLS);
    assert_eq!(fleet.footprint(), board.ship_map());

    for (i, a) in fleet.ships().iter().enumerate() {
        for b in &fleet.ships()[i + 1..] {
            assert!((a.mask().neighborhood() & b.mask()).is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Whatever is tried after a fixed fleet, accepted ships never touch it.
    #[test]
    fn accepted_placements_never_touch(r1 in 0usize..10, c1 in 0usize..10, r2 in 0usize..10, c2 in 0usize..10) {
        let mut board = Board::new();
        let mut fleet = Fleet::new();
        placement::place(&mut board, &mut fleet, SHIPS[1], pos("D4"), pos("D7")).unwrap();
        let before = board;

        let a = Position::new(r1, c1).unwrap();
        let b = Position::new(r2, c2).unwrap();
        let len = if r1 == r2 { c1.abs_diff(c2) + 1 } else { r1.abs_diff(r2) + 1 };
        let class = ShipClass::new("Probe", len);

        match placement::place(&mut board, &mut fleet, class, a, b) {
            Ok(ship) => {
                prop_assert!(r1 == r2 || c1 == c2);
                prop_assert!((ship.mask().neighborhood() & before.ship_map()).is_empty());
                prop_assert_eq!(board.count(CellState::Occupied), 4 + len);
            }
            Err(e) => {
                prop_assert_eq!(board, before);
                prop_assert_eq!(fleet.len(), 1);
                if r1 != r2 && c1 != c2 {
                    prop_assert_eq!(e, PlacementError::WrongLocation);
                } else {
                    prop_assert_eq!(e, PlacementError::TooClose);
                }
            }
        }
    }
}
