use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, Coord, FleetGenerator, Orientation, Ship, FLEET, MAX_TRY_COUNT, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

/// Board whose only unbuffered free cells are (4,4) and (6,6).
fn blocked_board() -> Board {
    let mut board = Board::new();
    for (x, y) in [(2, 2), (5, 2), (2, 5), (4, 6), (6, 4)] {
        board
            .add_ship(Ship::new(1, Coord::new(x, y), Orientation::Horizontal))
            .unwrap();
    }
    board
}

#[test]
fn test_default_budget() {
    assert_eq!(FleetGenerator::new().max_tries(), MAX_TRY_COUNT);
    assert_eq!(FleetGenerator::default(), FleetGenerator::new());
}

#[test]
fn test_generated_fleet_composition() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = FleetGenerator::new().generate(&mut rng);
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, FLEET.to_vec());
    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(board.live_ship_count(), NUM_SHIPS);
}

#[test]
fn test_same_seed_same_layout() {
    let mut rng1 = SmallRng::seed_from_u64(2024);
    let mut rng2 = SmallRng::seed_from_u64(2024);
    let b1 = FleetGenerator::new().generate(&mut rng1);
    let b2 = FleetGenerator::new().generate(&mut rng2);
    assert_eq!(b1, b2);
}

#[test]
fn test_small_budget_still_completes() {
    // abandoned ships force whole-board restarts until a full fleet fits
    let mut rng = SmallRng::seed_from_u64(5);
    let board = FleetGenerator::with_max_tries(3).generate(&mut rng);
    assert_eq!(board.ships().len(), NUM_SHIPS);
}

#[test]
fn test_blocked_board_has_two_free_cells() {
    let board = blocked_board();
    let free: Vec<Coord> = Coord::all()
        .filter(|&c| {
            let cell = board.cell(c).unwrap();
            !cell.occupied && !cell.buffered
        })
        .collect();
    assert_eq!(free, vec![Coord::new(4, 4), Coord::new(6, 6)]);
}

#[test]
fn test_abandoned_ship_does_not_stop_the_pass() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = blocked_board();
    // the length-3 ship cannot fit anywhere; both singles still go down
    let placed = FleetGenerator::new().fill(&mut rng, &mut board, &[3, 1, 1]);
    assert_eq!(placed, 2);
    let added: Vec<_> = board.ships()[5..].iter().map(|s| s.origin()).collect();
    assert_eq!(added.len(), 2);
    assert!(added.contains(&Coord::new(4, 4)));
    assert!(added.contains(&Coord::new(6, 6)));
    assert!(board.ships().iter().all(|s| s.length() == 1));
}

#[test]
fn test_short_pass_is_reported() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut board = Board::new();
    // no attempts at all: generate would discard this board and start over
    let placed = FleetGenerator::with_max_tries(0).fill(&mut rng, &mut board, &FLEET);
    assert_eq!(placed, 0);
    assert!(board.ships().is_empty());

    let placed = FleetGenerator::new().fill(&mut rng, &mut Board::new(), &FLEET[..1]);
    assert_eq!(placed, 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fleet_ships_keep_their_distance(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = FleetGenerator::new().generate(&mut rng);
        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        prop_assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);

        // no cell of one ship touches another ship, diagonals included
        for (i, a) in board.ships().iter().enumerate() {
            for b in board.ships().iter().skip(i + 1) {
                for &ca in a.cells() {
                    let near: Vec<Coord> = ca.neighbours().collect();
                    for cb in b.cells() {
                        prop_assert!(!near.contains(cb), "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }
}
