//! Full-stack collaboration tests: a real server on a free port and real
//! WebSocket clients connected through it.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use teampad::config::Config;
use teampad::state::AppState;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Start a server on a free port, return its address.
async fn start_test_server() -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().join("data").display().to_string(),
        ..Config::default()
    };
    let state = Arc::new(AppState::new(&config));
    state.seed_defaults().await.unwrap();
    let app = teampad::app(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("127.0.0.1:{}", addr.port()), dir)
}

async fn connect(addr: &str, user: &str) -> WsClient {
    let url = format!("ws://{addr}/ws/document?user={user}");
    let (socket, _) = tokio_tungstenite::connect_async(url).await.unwrap();
    socket
}

/// Read the next text frame as JSON, skipping anything else.
async fn next_frame(socket: &mut WsClient) -> Value {
    loop {
        let message = timeout(Duration::from_secs(2), socket.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended unexpectedly")
            .expect("websocket error");
        if message.is_text() {
            return serde_json::from_str(&message.into_text().unwrap()).unwrap();
        }
    }
}

fn usernames(presence: &Value) -> Vec<String> {
    presence
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["username"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn a_fresh_connection_receives_init_with_itself_listed() {
    let (addr, _dir) = start_test_server().await;

    let mut alice = connect(&addr, "alice").await;
    let init = next_frame(&mut alice).await;

    assert_eq!(init["type"], "init");
    assert_eq!(init["data"]["document"]["title"], "Untitled Document");
    assert_eq!(usernames(&init["data"]["users"]), vec!["alice"]);
    assert_eq!(init["data"]["users"][0]["cursor"], Value::Null);
}

#[tokio::test]
async fn joins_and_cursor_moves_are_observed_by_peers() {
    let (addr, _dir) = start_test_server().await;

    let mut alice = connect(&addr, "alice").await;
    let _ = next_frame(&mut alice).await; // alice's init

    let mut bob = connect(&addr, "bob").await;
    let bob_init = next_frame(&mut bob).await;
    assert_eq!(usernames(&bob_init["data"]["users"]), vec!["alice", "bob"]);

    let presence = next_frame(&mut alice).await;
    assert_eq!(presence["type"], "presence");
    assert_eq!(usernames(&presence["data"]), vec!["alice", "bob"]);

    bob.send(Message::text(
        json!({"type": "cursor", "data": {"position": 7}}).to_string(),
    ))
    .await
    .unwrap();

    let presence = next_frame(&mut alice).await;
    assert_eq!(presence["type"], "presence");
    assert_eq!(presence["data"][0]["username"], "alice");
    assert_eq!(presence["data"][0]["cursor"], Value::Null);
    assert_eq!(presence["data"][1]["username"], "bob");
    assert_eq!(presence["data"][1]["cursor"], 7);
}

#[tokio::test]
async fn updates_reach_peers_and_the_next_joiner() {
    let (addr, _dir) = start_test_server().await;

    let mut alice = connect(&addr, "alice").await;
    let _ = next_frame(&mut alice).await;
    let mut bob = connect(&addr, "bob").await;
    let _ = next_frame(&mut bob).await;
    let _ = next_frame(&mut alice).await; // presence for bob's join

    bob.send(Message::text(
        json!({
            "type": "update",
            "data": {
                "title": "Minutes",
                "content": "agenda item one",
                "lastEditedBy": "spoofed",
                "lastUpdated": "1999-01-01 00:00:00"
            }
        })
        .to_string(),
    ))
    .await
    .unwrap();

    let update = next_frame(&mut alice).await;
    assert_eq!(update["type"], "update");
    assert_eq!(update["data"]["title"], "Minutes");
    assert_eq!(update["data"]["content"], "agenda item one");
    // The server decides the provenance fields, not the client
    assert_eq!(update["data"]["lastEditedBy"], "bob");
    assert_ne!(update["data"]["lastUpdated"], "1999-01-01 00:00:00");

    let mut carol = connect(&addr, "carol").await;
    let init = next_frame(&mut carol).await;
    assert_eq!(init["data"]["document"], update["data"]);
}

#[tokio::test]
async fn a_malformed_frame_is_reported_without_ending_the_session() {
    let (addr, _dir) = start_test_server().await;

    let mut alice = connect(&addr, "alice").await;
    let _ = next_frame(&mut alice).await;
    let mut bob = connect(&addr, "bob").await;
    let _ = next_frame(&mut bob).await;
    let _ = next_frame(&mut alice).await;

    alice
        .send(Message::text("this is not a frame".to_string()))
        .await
        .unwrap();

    let error = next_frame(&mut alice).await;
    assert_eq!(error["type"], "error");
    assert!(error["data"]["message"].as_str().unwrap().len() > 0);

    // The same connection keeps working afterwards
    alice
        .send(Message::text(
            json!({"type": "cursor", "data": {"position": 3}}).to_string(),
        ))
        .await
        .unwrap();

    let presence = next_frame(&mut bob).await;
    assert_eq!(presence["type"], "presence");
    assert_eq!(presence["data"][0]["cursor"], 3);
}

#[tokio::test]
async fn a_departure_is_broadcast_to_the_remaining_sessions() {
    let (addr, _dir) = start_test_server().await;

    let mut alice = connect(&addr, "alice").await;
    let _ = next_frame(&mut alice).await;
    let mut bob = connect(&addr, "bob").await;
    let _ = next_frame(&mut bob).await;
    let _ = next_frame(&mut alice).await;

    alice.close(None).await.unwrap();

    let presence = next_frame(&mut bob).await;
    assert_eq!(presence["type"], "presence");
    assert_eq!(usernames(&presence["data"]), vec!["bob"]);
}
