//! Plays a short scripted match through the service and prints every
//! committed outcome event as the host would see it.
//!
//! Run with `RUST_LOG=debug` to watch the engine and store at work:
//!
//! ```text
//! RUST_LOG=debug cargo run --example scripted_match
//! ```

use fourstack::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = MoveService::new(MemoryStore::new());

    let game_id = service
        .create_game(vec![
            PlayerSeat::new(PlayerId(1), "red", PlayerStatus::HasTurn),
            PlayerSeat::new(PlayerId(2), "yellow", PlayerStatus::WaitingTurn),
        ])
        .await?;
    println!("new game: {game_id}");

    // Red builds the bottom row left to right; yellow answers in column 6.
    // Red's fourth token completes the alignment.
    let script: [(u64, u8); 7] =
        [(1, 0), (2, 6), (1, 1), (2, 6), (1, 2), (2, 6), (1, 3)];

    for (player, row) in script {
        match service
            .handle_move(game_id, PlayerId(player), MoveRequest { row })
            .await
        {
            Ok(outcome) => {
                println!("P-{player} -> {}", serde_json::to_string(&outcome)?);
            }
            Err(err) => match err.reply() {
                Some(reply) => {
                    println!("P-{player} -> {}", serde_json::to_string(&reply)?);
                }
                None => return Err(err.into()),
            },
        }
    }

    // One move past the end: the winner no longer holds the turn.
    let err = service
        .handle_move(game_id, PlayerId(2), MoveRequest { row: 0 })
        .await
        .unwrap_err();
    if let Some(reply) = err.reply() {
        println!("P-2 -> {}", serde_json::to_string(&reply)?);
    }

    Ok(())
}
