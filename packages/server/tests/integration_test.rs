//! Integration tests for the shuffler server using process-based testing.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio_tungstenite::{connect_async, tungstenite::Message};

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Helper struct to manage server process lifecycle
struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    /// Start a test server on the specified port and wait until it answers
    async fn start(port: u16) -> Self {
        let process = Command::new(env!("CARGO_BIN_EXE_shuffler-server"))
            .args(["--port", &port.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server");
        let server = TestServer { process, port };

        for _ in 0..50 {
            if reqwest::get(server.http_url("/api/health")).await.is_ok() {
                return server;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("Server on port {} did not become ready", port);
    }

    fn http_url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

async fn send(ws: &mut WsStream, event: Value) {
    ws.send(Message::Text(event.to_string().into()))
        .await
        .expect("Failed to send event");
}

/// Read messages until one with the given type arrives
async fn recv_type(ws: &mut WsStream, message_type: &str) -> Value {
    let read = async {
        while let Some(msg) = ws.next().await {
            if let Ok(Message::Text(text)) = msg {
                let value: Value = serde_json::from_str(&text).expect("Invalid JSON");
                if value["type"] == message_type {
                    return value;
                }
            }
        }
        panic!("Connection closed before '{}' arrived", message_type);
    };
    tokio::time::timeout(Duration::from_secs(5), read)
        .await
        .unwrap_or_else(|_| panic!("Timed out waiting for '{}'", message_type))
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start(18180).await;

    // when (操作):
    let body: Value = reqwest::get(server.http_url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_shuffle_endpoint_keeps_every_episode_in_order() {
    // テスト項目: シャッフル API が全エピソードを番組内の順序を保って返す
    // given (前提条件):
    let server = TestServer::start(18181).await;
    let request = json!({
        "shows": [
            {"id": "A", "episodes": ["a1", "a2", "a3", "a4"]},
            {"ratingKey": "B", "episodes": ["b1", "b2"]},
            {"id": "C", "episodes": []}
        ]
    });

    // when (操作):
    let body: Value = reqwest::Client::new()
        .post(server.http_url("/api/shuffle"))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body["total"], 6);
    let episodes: Vec<String> = serde_json::from_value(body["episodes"].clone()).unwrap();
    let of_a: Vec<&String> = episodes.iter().filter(|e| e.starts_with('a')).collect();
    let of_b: Vec<&String> = episodes.iter().filter(|e| e.starts_with('b')).collect();
    assert_eq!(of_a, ["a1", "a2", "a3", "a4"]);
    assert_eq!(of_b, ["b1", "b2"]);
}

#[tokio::test]
async fn test_unknown_room_returns_not_found() {
    // テスト項目: 参加者のいないルームの詳細は 404
    // given (前提条件):
    let server = TestServer::start(18182).await;

    // when (操作):
    let response = reqwest::get(server.http_url("/api/rooms/nobody-here"))
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_two_users_match_on_common_choice() {
    // テスト項目: 2 人が同じタイトルを選ぶと両者にマッチが通知され、ルーム API に反映される
    // given (前提条件):
    let server = TestServer::start(18183).await;
    let (mut alice, _) = connect_async(server.ws_url()).await.unwrap();
    let (mut bob, _) = connect_async(server.ws_url()).await.unwrap();
    send(&mut alice, json!({"type": "user_entered_session", "name": "Alice", "room": "r1"})).await;
    recv_type(&mut alice, "set_matches").await;
    send(&mut bob, json!({"type": "user_entered_session", "name": "Bob", "room": "r1"})).await;
    let users = recv_type(&mut bob, "session_users").await;
    assert_eq!(users["users"][0]["name"], "Alice");
    assert_eq!(users["users"][0]["is_first"], true);
    assert_eq!(users["users"][1]["is_first"], false);
    recv_type(&mut bob, "set_matches").await;

    // when (操作):
    send(&mut alice, json!({"type": "add_user_choice", "room": "r1", "rating_key": "t1"})).await;
    recv_type(&mut bob, "set_matches").await;
    send(&mut bob, json!({"type": "add_user_choice", "room": "r1", "rating_key": "t1"})).await;

    // then (期待する結果):
    let to_bob = recv_type(&mut bob, "set_matches").await;
    assert_eq!(to_bob["matches"], json!(["t1"]));
    // alice には bob の入室時、自分の選択時、bob の選択時の順に届く
    recv_type(&mut alice, "set_matches").await;
    recv_type(&mut alice, "set_matches").await;
    let to_alice = recv_type(&mut alice, "set_matches").await;
    assert_eq!(to_alice["matches"], json!(["t1"]));

    let rooms: Value = reqwest::get(server.http_url("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rooms, json!([{"room": "r1", "users": ["Alice", "Bob"], "matches": ["t1"]}]));
}

#[tokio::test]
async fn test_filter_change_is_relayed() {
    // テスト項目: フィルタ変更がルームの他の参加者に中継される
    // given (前提条件):
    let server = TestServer::start(18184).await;
    let (mut alice, _) = connect_async(server.ws_url()).await.unwrap();
    let (mut bob, _) = connect_async(server.ws_url()).await.unwrap();
    send(&mut alice, json!({"type": "user_entered_session", "name": "Alice", "room": "r1"})).await;
    recv_type(&mut alice, "set_matches").await;
    send(&mut bob, json!({"type": "user_entered_session", "name": "Bob", "room": "r1"})).await;
    recv_type(&mut bob, "set_matches").await;

    // when (操作):
    send(&mut alice, json!({"type": "change_genre", "room": "r1", "value": "Comedy"})).await;

    // then (期待する結果):
    let relayed = recv_type(&mut bob, "set_genre").await;
    assert_eq!(relayed["value"], "Comedy");
}

#[tokio::test]
async fn test_departure_updates_remaining_members() {
    // テスト項目: 切断すると残りの参加者に参加者一覧が再通知される
    // given (前提条件):
    let server = TestServer::start(18185).await;
    let (mut alice, _) = connect_async(server.ws_url()).await.unwrap();
    let (mut bob, _) = connect_async(server.ws_url()).await.unwrap();
    send(&mut alice, json!({"type": "user_entered_session", "name": "Alice", "room": "r1"})).await;
    recv_type(&mut alice, "set_matches").await;
    send(&mut bob, json!({"type": "user_entered_session", "name": "Bob", "room": "r1"})).await;
    recv_type(&mut alice, "set_matches").await;

    // when (操作):
    bob.close(None).await.unwrap();

    // then (期待する結果):
    let users = recv_type(&mut alice, "session_users").await;
    assert_eq!(users["users"], json!([{
        "name": "Alice",
        "room": "r1",
        "is_first": true,
        "joined_at": users["users"][0]["joined_at"].clone()
    }]));
}

#[tokio::test]
async fn test_malformed_event_gets_error_reply() {
    // テスト項目: 不正なイベントには送信元にだけ error が返る
    // given (前提条件):
    let server = TestServer::start(18186).await;
    let (mut alice, _) = connect_async(server.ws_url()).await.unwrap();

    // when (操作):
    send(&mut alice, json!({"type": "user_entered_session", "name": "  ", "room": "r1"})).await;

    // then (期待する結果):
    let error = recv_type(&mut alice, "error").await;
    assert!(error["message"].as_str().unwrap().contains("must not be empty"));
}
