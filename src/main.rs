#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_duel::{init_logging, Console, Game, DEFAULT_PLAYER_NAMES};
#[cfg(feature = "std")]
use clap::Parser;

/// Two-player hot-seat Battleship on a 10x10 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name of the player who places and fires first.
    #[arg(long, default_value = DEFAULT_PLAYER_NAMES[0])]
    player1: String,
    /// Name of the second player.
    #[arg(long, default_value = DEFAULT_PLAYER_NAMES[1])]
    player2: String,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = Game::new(cli.player1, cli.player2);
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let winner = console.run(&mut game)?;
    log::info!("game over, winner: {}", game.player(winner).name());
    Ok(())
}
