use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, Coord, Game, GameStatus, MoveOutcome, Orientation, RandomTargeting, Ship, Side,
    Visibility, NUM_CELLS,
};

fn board_with(ships: &[(usize, i32, i32, Orientation)]) -> Board {
    let mut board = Board::new();
    for &(len, x, y, o) in ships {
        board.add_ship(Ship::new(len, Coord::new(x, y), o)).unwrap();
    }
    board
}

#[test]
fn test_computer_vs_computer_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::random(&mut rng);
    assert_eq!(game.computer_board().visibility(), Visibility::Concealed);
    let mut p1 = RandomTargeting::new(SmallRng::seed_from_u64(1));
    let mut p2 = RandomTargeting::new(SmallRng::seed_from_u64(2));

    let mut moves = 0;
    while game.status() == GameStatus::InProgress {
        moves += 1;
        let side = game.current();
        let outcome = match side {
            Side::Player => game.take_turn(&mut p1),
            Side::Computer => game.take_turn(&mut p2),
        }
        .unwrap();
        // automated shots are never rejected
        assert!(!matches!(outcome, MoveOutcome::Rejected(..)));
        if outcome.passes_turn() {
            assert_eq!(game.current(), side.opponent());
        } else {
            assert_eq!(game.current(), side);
        }
        if moves > 2 * NUM_CELLS {
            panic!("game took too many moves");
        }
    }
    assert_eq!(game.shots(Side::Player) + game.shots(Side::Computer), moves);
    match game.status() {
        GameStatus::Won => assert!(game.computer_board().is_defeated()),
        GameStatus::Lost => assert!(game.player_board().is_defeated()),
        GameStatus::InProgress => unreachable!(),
    }
}

#[test]
fn test_scripted_game_to_victory() {
    let player = board_with(&[(1, 6, 6, Orientation::Horizontal)]);
    let computer = board_with(&[(2, 1, 1, Orientation::Horizontal)]);
    let mut game = Game::new(player, computer);

    struct Fixed(Vec<Coord>);
    impl sea_battle::Targeting for Fixed {
        fn next_target(&mut self) -> Result<Coord, sea_battle::TargetError> {
            Ok(self.0.remove(0))
        }
    }
    let mut shots = Fixed(vec![
        Coord::new(1, 1),
        Coord::new(1, 1),
        Coord::new(2, 1),
    ]);

    assert_eq!(game.take_turn(&mut shots), Ok(MoveOutcome::Hit(Coord::new(1, 1))));
    assert!(matches!(
        game.take_turn(&mut shots),
        Ok(MoveOutcome::Rejected(_, sea_battle::BoardError::AlreadyShot))
    ));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(
        game.take_turn(&mut shots),
        Ok(MoveOutcome::Sink(Coord::new(2, 1), 2))
    );
    assert_eq!(game.current(), Side::Player);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_loss_detected() {
    let player = board_with(&[(1, 3, 3, Orientation::Vertical)]);
    let computer = board_with(&[(1, 1, 1, Orientation::Vertical)]);
    let mut game = Game::new(player, computer);

    struct Fixed(Vec<Coord>);
    impl sea_battle::Targeting for Fixed {
        fn next_target(&mut self) -> Result<Coord, sea_battle::TargetError> {
            Ok(self.0.remove(0))
        }
    }
    let mut human = Fixed(vec![Coord::new(6, 6)]);
    let mut computer = Fixed(vec![Coord::new(3, 3)]);

    assert!(game.take_turn(&mut human).unwrap().passes_turn());
    assert_eq!(game.current(), Side::Computer);
    assert_eq!(
        game.take_turn(&mut computer),
        Ok(MoveOutcome::Sink(Coord::new(3, 3), 1))
    );
    assert_eq!(game.status(), GameStatus::Lost);
}
