use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use crossterm::{
    cursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use memoterm::config::Config;
use memoterm::core::SequenceEngine;
use memoterm::runner::GameRunner;
use memoterm::score::{RankingClient, ScoreSink, ScoreStore};
use memoterm::ui::TuiPanel;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    info!(player = %config.player, scores = %config.scores_path.display(), "starting");

    // Terminal setup; the panel owns it from here.
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let engine = SequenceEngine::new(StdRng::from_os_rng());
    let panel = TuiPanel::new(terminal, config.player.clone());
    let store = ScoreStore::new(config.scores_path.clone());
    let client = config.ranking_addr.clone().map(RankingClient::new);
    let sink = ScoreSink::new(config.player.clone(), store, client);

    let result = GameRunner::new(engine, panel, sink).run().await;

    // Restore the terminal whether the game ended cleanly or not.
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    result
}

/// File-backed logging, only when `MEMOTERM_LOG` asks for it. Writing to
/// stderr would scribble over the alternate screen.
fn init_tracing(config: &Config) {
    let Some(path) = &config.log_path else {
        return;
    };
    let file = match File::create(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("memoterm: cannot open log file {}: {error}", path.display());
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
