use std::io::{self, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    init_logging, ui, CliTargeting, Game, GameStatus, RandomTargeting, Side, Targeting,
    AI_DELAY_MS,
};
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about = "Sea Battle on a 6x6 board against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = AI_DELAY_MS, help = "Pause before each computer move, in milliseconds")]
    ai_delay_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut game = Game::random(&mut rng);
    let mut human = CliTargeting::stdio();
    let mut computer = RandomTargeting::new(SmallRng::from_rng(&mut rng));
    let delay = Duration::from_millis(cli.ai_delay_ms);

    println!("{}", ui::GREETING);
    loop {
        let side = game.current();
        if side == Side::Computer {
            println!("\nComputer's move\n");
            sleep(delay).await;
        }
        print!("{}", ui::player_view(&game));
        match game.status() {
            GameStatus::Won => {
                println!("{}", ui::WIN_BANNER);
                break;
            }
            GameStatus::Lost => {
                println!("{}", ui::LOSS_BANNER);
                break;
            }
            GameStatus::InProgress => {}
        }
        io::stdout().flush()?;

        let targeting: &mut dyn Targeting = match side {
            Side::Player => &mut human,
            Side::Computer => &mut computer,
        };
        let outcome = game.take_turn(targeting).map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", ui::outcome_message(side, &outcome));
    }
    Ok(())
}
