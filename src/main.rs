//! Headless simulation runner.
//!
//! Plays one game between policy-driven players and logs the result.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`; `debug` shows every turn)
//! - `DECKBUILDER_PLAYERS`: number of players (default 2)
//! - `DECKBUILDER_SEED`: shuffle seed (default: random)
//! - `DECKBUILDER_CATALOG`: path to a JSON card table (default: standard)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckbuilder::{GameBuilder, GameConfig, GameResult};

fn env_parse<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a number, got `{raw}`"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = GameConfig::new(env_parse("DECKBUILDER_PLAYERS")?.unwrap_or(2));
    if let Some(seed) = env_parse("DECKBUILDER_SEED")? {
        config = config.with_seed(seed);
    }

    let mut builder = GameBuilder::new().with_config(config);
    if let Ok(path) = std::env::var("DECKBUILDER_CATALOG") {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("reading card table {path}"))?;
        builder = builder.with_catalog_json(&json)?;
        info!(%path, "loaded card table");
    }

    let mut game = builder.build()?;
    let report = game.run_game();

    for (seat, score) in report.scores.iter() {
        info!(
            player = %game.player(seat).name(),
            score,
            cards = report.card_counts[seat],
            "final score"
        );
    }
    match &report.result {
        GameResult::Winner(seat) => info!(winner = %game.player(*seat).name(), "winner"),
        GameResult::Tie(seats) => {
            let names: Vec<&str> = seats.iter().map(|&s| game.player(s).name()).collect();
            info!(players = ?names, "tie");
        }
    }

    Ok(())
}
