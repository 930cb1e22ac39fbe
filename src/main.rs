use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_duel::game::{GameConfig, Level};
use snake_duel::modes::DuelMode;

#[derive(Parser)]
#[command(name = "snake_duel")]
#[command(version, about = "Two-player snake duel for the terminal")]
struct Cli {
    /// Skip the menu and start at this level
    #[arg(long)]
    level: Option<LevelArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Hard,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Easy => Level::Easy,
            LevelArg::Medium => Level::Medium,
            LevelArg::Hard => Level::Hard,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI draws on stderr, so logs keep to stdout
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::default();

    let mut mode = DuelMode::new(config, cli.level.map(Level::from));
    mode.run().await?;

    Ok(())
}
