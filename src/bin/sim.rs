use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, Game, GameStatus, RandomTargeting, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::random(&mut rng1);
    let mut p1 = RandomTargeting::new(SmallRng::from_rng(&mut rng1));
    let mut p2 = RandomTargeting::new(SmallRng::from_rng(&mut rng2));

    while game.status() == GameStatus::InProgress {
        match game.current() {
            Side::Player => game.take_turn(&mut p1),
            Side::Computer => game.take_turn(&mut p2),
        }
        .map_err(|e| anyhow::anyhow!(e))?;
    }

    let status = game.status();
    let winner = match status {
        GameStatus::Won => Some("player1"),
        GameStatus::Lost => Some("player2"),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "player1": {
            "status": status,
            "shots": game.shots(Side::Player),
            "ships_left": game.player_board().live_ship_count(),
        },
        "player2": {
            "shots": game.shots(Side::Computer),
            "ships_left": game.computer_board().live_ship_count(),
        },
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
