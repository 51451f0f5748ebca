//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, FilterChange, RoomName, TitleId, UserName, ValueObjectError},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::{AddChoiceError, BroadcastError},
};

/// Upper bound of one incoming frame; events are small JSON objects
const MAX_EVENT_SIZE: usize = 64 * 1024;

/// Reasons an incoming event is rejected
#[derive(Debug, Error)]
enum EventError {
    #[error("Malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid event: {0}")]
    InvalidValue(#[from] ValueObjectError),

    #[error(transparent)]
    AddChoice(#[from] AddChoiceError),

    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.max_message_size(MAX_EVENT_SIZE)
        .max_frame_size(MAX_EVENT_SIZE)
        .on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that forwards pushed messages to the WebSocket sink.
///
/// The task ends when the sink fails or every sender of `rx` is dropped.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Create a channel for this connection to receive pushed messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_client_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    let (sender, mut receiver) = socket.split();

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", connection_id_clone, text);
                    let result =
                        handle_event(&state_clone, &connection_id_clone, text.as_str()).await;
                    if let Err(e) = result {
                        reject(&state_clone, &connection_id_clone, e).await;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to push room events to this connection
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match state.disconnect_client_usecase.execute(&connection_id).await {
        Ok(Some(user)) => tracing::info!(
            "'{}' left room '{}' (connection '{}')",
            user.name,
            user.room,
            connection_id
        ),
        Ok(None) => tracing::info!("Connection '{}' closed", connection_id),
        Err(e) => tracing::warn!("Failed to notify departure of '{}': {}", connection_id, e),
    }
}

/// Parse one text frame and dispatch it to the matching use case
async fn handle_event(
    state: &AppState,
    connection_id: &ConnectionId,
    text: &str,
) -> Result<(), EventError> {
    let event: ClientEvent = serde_json::from_str(text)?;

    // DTO から Domain Model への変換
    match event {
        ClientEvent::UserEnteredSession { name, room } => {
            let name = UserName::new(name)?;
            let room = RoomName::new(room)?;
            let user = state
                .enter_session_usecase
                .execute(connection_id.clone(), name, room)
                .await?;
            tracing::info!(
                "'{}' entered room '{}' (first: {})",
                user.name,
                user.room,
                user.is_first
            );
        }
        ClientEvent::AddUserChoice { room, rating_key } => {
            let room = RoomName::new(room)?;
            let title_id = TitleId::new(rating_key)?;
            let matches = state
                .add_choice_usecase
                .execute(connection_id, &room, title_id)
                .await?;
            tracing::debug!("Room '{}' has {} matches", room, matches.len());
        }
        ClientEvent::ChangeType { room, value } => {
            relay(state, room, FilterChange::MediaType(value)).await?;
        }
        ClientEvent::ChangeGenre { room, value } => {
            relay(state, room, FilterChange::Genre(value)).await?;
        }
        ClientEvent::ChangeSortBy { room, value } => {
            relay(state, room, FilterChange::SortBy(value)).await?;
        }
    }

    Ok(())
}

async fn relay(state: &AppState, room: String, change: FilterChange) -> Result<(), EventError> {
    let room = RoomName::new(room)?;
    let count = state.relay_filter_usecase.execute(&room, change).await?;
    tracing::debug!("Relayed filter change to {} members of '{}'", count, room);
    Ok(())
}

/// Report a rejected event back to its sender only
async fn reject(state: &AppState, connection_id: &ConnectionId, error: EventError) {
    match &error {
        // 通知の失敗は送信元の責任ではないので返さない
        EventError::Broadcast(_) | EventError::AddChoice(AddChoiceError::Broadcast(_)) => {
            tracing::warn!("{}", error);
        }
        _ => {
            tracing::warn!("Rejected event from '{}': {}", connection_id, error);
            if let Err(e) = state
                .connect_client_usecase
                .send_error(connection_id, error.to_string())
                .await
            {
                tracing::warn!("Failed to send error to '{}': {}", connection_id, e);
            }
        }
    }
}
