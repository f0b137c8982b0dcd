//! Ranking service.
//!
//! The remote end of score submission. Each connection speaks newline
//! delimited JSON: a [`ScoreEntry`] per line in, the updated board per line
//! out. Ranking reuses [`Leaderboard::insert`], so the service and the local
//! fallback order entries identically.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::{Leaderboard, ScoreEntry};
use crate::score::store::ScoreStore;

/// Reply for a line that does not parse as a submission.
#[derive(Debug, Serialize)]
struct ErrorReply<'a> {
    error: &'a str,
}

/// State shared between connection tasks.
struct Shared {
    board: Mutex<Leaderboard>,
    store: ScoreStore,
}

/// Accept loop. Seeds the board from the store, then serves until the
/// listener itself errors out.
pub async fn serve(listener: TcpListener, store: ScoreStore) -> Result<()> {
    let board = store.load().await;
    info!(
        entries = board.len(),
        addr = %listener.local_addr()?,
        "ranking service up"
    );
    let shared = Arc::new(Shared {
        board: Mutex::new(board),
        store,
    });

    loop {
        let (stream, peer) = listener.accept().await?;
        let shared = Arc::clone(&shared);
        tokio::spawn(async move {
            if let Err(error) = handle_connection(stream, shared).await {
                warn!(%peer, %error, "connection ended with an error");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, shared: Arc<Shared>) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<ScoreEntry>(&line) {
            Ok(entry) => {
                info!(name = %entry.name, score = entry.score, "score submitted");
                let mut board = shared.board.lock().await;
                *board = board.clone().insert(entry);
                if let Err(error) = shared.store.save(&board).await {
                    warn!(%error, "could not persist the ranking board");
                }
                serde_json::to_string(&*board)?
            }
            Err(error) => {
                warn!(%error, "unparseable submission");
                serde_json::to_string(&ErrorReply {
                    error: "expected a {name, score, date} object",
                })?
            }
        };
        write_half.write_all(reply.as_bytes()).await?;
        write_half.write_all(b"\n").await?;
    }
    Ok(())
}
