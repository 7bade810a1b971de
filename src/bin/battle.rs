//! Creature battle demo.
//!
//! Pits two fire roosters against each other and prints every attack until
//! one of them is defeated.

use anyhow::Result;
use clap::Parser;

use tui_tilequest::core::{Battle, BattleResult, Creature, Side};

#[derive(Debug, Parser)]
#[command(name = "battle", about = "Run a creature battle and print each turn")]
struct Args {
    /// Name of the creature that attacks first
    #[arg(long, default_value = "Manok")]
    challenger: String,

    /// Name of the defending creature
    #[arg(long, default_value = "Puti")]
    opponent: String,

    /// Full rounds before the battle is called a draw
    #[arg(long, default_value_t = 100)]
    rounds: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut battle = Battle::new(
        Creature::flame_rooster(args.challenger),
        Creature::flame_rooster(args.opponent),
    )
    .with_round_cap(args.rounds);

    while battle.result().is_none() {
        if let Some(event) = battle.step() {
            println!("{event}  ({} HP left)", event.defender_health);
        }
    }

    match battle.result() {
        Some(BattleResult::Winner(Side::Challenger)) => {
            println!("{} wins!", battle.challenger().name())
        }
        Some(BattleResult::Winner(Side::Opponent)) => {
            println!("{} wins!", battle.opponent().name())
        }
        Some(BattleResult::Draw) | None => println!("The battle is a draw."),
    }
    Ok(())
}
