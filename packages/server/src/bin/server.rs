//! Plex Shuffler server.
//!
//! Hosts the match-session WebSocket and the shuffle / room HTTP API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin shuffler-server
//! cargo run --bin shuffler-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use shuffler_server::{
    domain::SessionRegistry,
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemorySessionRepository,
    },
    ui::{AppState, Server},
    usecase::{
        AddChoiceUseCase, ConnectClientUseCase, DisconnectClientUseCase, EnterSessionUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, RelayFilterUseCase, ShufflePlaylistUseCase,
    },
};
use shuffler_shared::logger::setup_logger;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "shuffler-server")]
#[command(about = "Plex Shuffler match-session and playlist server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // 1. Repository（プロセス内のセッションレジストリ）
    let registry = Arc::new(Mutex::new(SessionRegistry::default()));
    let repository = Arc::new(InMemorySessionRepository::new(registry));

    // 2. MessagePusher
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));

    // 3. UseCases
    let app_state = AppState {
        connect_client_usecase: Arc::new(ConnectClientUseCase::new(message_pusher.clone())),
        disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        enter_session_usecase: Arc::new(EnterSessionUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        add_choice_usecase: Arc::new(AddChoiceUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        relay_filter_usecase: Arc::new(RelayFilterUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        shuffle_playlist_usecase: Arc::new(ShufflePlaylistUseCase::new()),
        get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
        get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
    };

    // 4. Server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
