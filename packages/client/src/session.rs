//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use shuffler_server::infrastructure::dto::websocket::{ClientEvent, ServerMessage};

use crate::error::ClientError;

use super::{command::Command, formatter::MessageFormatter, ui::redisplay_prompt};

type WsWriter = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

async fn send_event(write: &mut WsWriter, event: &ClientEvent) -> Result<(), ClientError> {
    let json = serde_json::to_string(event)?;
    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))
}

fn display(text: &str, name: &str) {
    let formatted = match serde_json::from_str::<ServerMessage>(text) {
        Ok(message) => MessageFormatter::format(&message, name),
        Err(_) => MessageFormatter::format_raw_message(text),
    };
    print!("{}", formatted);
    redisplay_prompt(name);
}

/// Run one WebSocket session.
///
/// Entry is announced on every connect, so a reconnecting user is rebound
/// to their previous choices by the server.
///
/// # Returns
///
/// * `Ok(())` - the user quit or input ended
/// * `Err(ClientError::ConnectionError)` - the connection failed or was lost
pub async fn run_client_session(
    url: &str,
    name: &str,
    room: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to shuffler server!");
    println!(
        "\nYou are '{}' in room '{}'. Enter a rating key to like it, /type /genre /sort to change filters, /quit to leave.\n",
        name, room
    );

    let (mut write, mut read) = ws_stream.split();

    send_event(
        &mut write,
        &ClientEvent::UserEnteredSession {
            name: name.to_string(),
            room: room.to_string(),
        },
    )
    .await?;

    loop {
        tokio::select! {
            message = read.next() => match message {
                Some(Ok(Message::Text(text))) => display(&text, name),
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    return Err(ClientError::ConnectionError("Connection lost".to_string()));
                }
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionError(e.to_string()));
                }
                Some(Ok(_)) => {}
            },
            line = input_rx.recv() => {
                let Some(line) = line else {
                    write.send(Message::Close(None)).await.ok();
                    return Ok(());
                };
                match Command::parse(&line) {
                    Ok(command) => match command.into_event(room) {
                        Some(event) => send_event(&mut write, &event).await?,
                        None => {
                            write.send(Message::Close(None)).await.ok();
                            return Ok(());
                        }
                    },
                    Err(e) => {
                        println!("{}", e);
                        redisplay_prompt(name);
                    }
                }
            }
        }
    }
}
