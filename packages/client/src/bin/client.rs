//! Terminal client for Plex Shuffler match sessions.
//!
//! Joins a room, sends likes and filter changes from stdin, and prints
//! member lists and matches pushed by the server. Reconnects on disconnection
//! (max 5 attempts with 5 second interval) and re-announces entry each time.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin shuffler-client -- --name Alice --room movie-night
//! cargo run --bin shuffler-client -- -n Bob -r movie-night -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use shuffler_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "shuffler-client")]
#[command(about = "Terminal client for Plex Shuffler match sessions", long_about = None)]
struct Args {
    /// Display name in the room
    #[arg(short = 'n', long)]
    name: String,

    /// Room to join
    #[arg(short = 'r', long)]
    room: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = shuffler_client::run_client(args.url, args.name, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
