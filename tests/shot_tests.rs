use battleship_duel::placement;
use battleship_duel::shot::resolve;
use battleship_duel::{Board, CellState, Fleet, Position, ShotOutcome, View, SHIPS};
use proptest::prelude::*;

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn full_fleet() -> (Board, Fleet) {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    for (class, (a, b)) in SHIPS.iter().zip([
        ("A1", "A5"),
        ("C1", "C4"),
        ("E1", "E3"),
        ("G1", "G3"),
        ("I1", "I2"),
    ]) {
        placement::place(&mut board, &mut fleet, *class, pos(a), pos(b)).unwrap();
    }
    (board, fleet)
}

#[test]
fn destroyer_alone_hit_then_won() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    placement::place(&mut board, &mut fleet, SHIPS[4], pos("A1"), pos("A2")).unwrap();

    assert_eq!(resolve(&mut board, &fleet, pos("A1")), ShotOutcome::Hit);
    assert_eq!(resolve(&mut board, &fleet, pos("A2")), ShotOutcome::Won);
}

#[test]
fn destroyer_sinks_while_others_float() {
    let (mut board, fleet) = full_fleet();
    assert_eq!(resolve(&mut board, &fleet, pos("I1")), ShotOutcome::Hit);
    assert_eq!(resolve(&mut board, &fleet, pos("I2")), ShotOutcome::Sunk("Destroyer"));
    assert_eq!(fleet.sunk_count(board.hits()), 1);
}

#[test]
fn miss_is_idempotent() {
    let (mut board, fleet) = full_fleet();
    assert_eq!(resolve(&mut board, &fleet, pos("J10")), ShotOutcome::Miss);
    let after_first = board;
    assert_eq!(resolve(&mut board, &fleet, pos("J10")), ShotOutcome::Miss);
    assert_eq!(board, after_first);
    assert_eq!(board.cell(pos("J10")), CellState::Miss);
}

#[test]
fn refiring_a_sunk_cell_reports_hit_only() {
    let (mut board, fleet) = full_fleet();
    resolve(&mut board, &fleet, pos("G1"));
    resolve(&mut board, &fleet, pos("G2"));
    assert_eq!(resolve(&mut board, &fleet, pos("G3")), ShotOutcome::Sunk("Cruiser"));
    let after = board;
    for cell in ["G1", "G2", "G3"] {
        assert_eq!(resolve(&mut board, &fleet, pos(cell)), ShotOutcome::Hit);
    }
    assert_eq!(board, after);
}

#[test]
fn exactly_one_sunk_per_ship_and_one_win() {
    let (mut board, fleet) = full_fleet();
    let mut sunk = Vec::new();
    let mut won = 0;
    for ship in fleet.ships() {
        let cells: Vec<Position> = ship.cells().collect();
        for (i, cell) in cells.iter().enumerate() {
            let outcome = resolve(&mut board, &fleet, *cell);
            let last = i + 1 == cells.len();
            match outcome {
                ShotOutcome::Hit => assert!(!last),
                ShotOutcome::Sunk(name) => {
                    assert!(last);
                    sunk.push(name);
                }
                ShotOutcome::Won => {
                    assert!(last);
                    won += 1;
                }
                ShotOutcome::Miss => panic!("{} is a ship cell", cell),
            }
        }
    }
    // the final ship reports Won instead of Sunk
    assert_eq!(sunk, ["Aircraft Carrier", "Battleship", "Submarine", "Cruiser"]);
    assert_eq!(won, 1);
    assert!(fleet.all_sunk(board.hits()));
}

#[test]
fn outcome_messages() {
    assert_eq!(ShotOutcome::Miss.message(), "You missed!");
    assert_eq!(ShotOutcome::Hit.message(), "You hit a ship!");
    assert_eq!(ShotOutcome::Sunk("Cruiser").message(), "You sank a ship!");
    assert_eq!(
        ShotOutcome::Won.message(),
        "You sank the last ship. You won. Congratulations!"
    );
}

#[test]
#[should_panic(expected = "belongs to no ship")]
fn occupied_cell_without_owner_is_a_contract_violation() {
    let (mut board, _) = full_fleet();
    resolve(&mut board, &Fleet::new(), pos("A1"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn empty_cells_always_miss(row in 0usize..10, col in 0usize..10) {
        let (mut board, fleet) = full_fleet();
        let target = Position::new(row, col).unwrap();
        prop_assume!(board.cell(target) == CellState::Empty);
        prop_assert_eq!(resolve(&mut board, &fleet, target), ShotOutcome::Miss);
        prop_assert_eq!(resolve(&mut board, &fleet, target), ShotOutcome::Miss);
        prop_assert_eq!(board.count(CellState::Miss), 1);
        prop_assert_eq!(board.view(View::Opponent).cell(target), CellState::Miss);
    }

    /// Firing never reveals an unfired ship cell to the opponent.
    #[test]
    fn fog_never_shows_ships(shots in proptest::collection::vec((0usize..10, 0usize..10), 0..60)) {
        let (mut board, fleet) = full_fleet();
        for (r, c) in shots {
            resolve(&mut board, &fleet, Position::new(r, c).unwrap());
        }
        let fog = board.view(View::Opponent);
        for p in Position::all() {
            prop_assert_ne!(fog.cell(p), CellState::Occupied);
        }
        prop_assert!(!fog.render().contains('O'));
        prop_assert_eq!(
            board.count(CellState::Hit) + board.count(CellState::Occupied),
            17
        );
    }
}
