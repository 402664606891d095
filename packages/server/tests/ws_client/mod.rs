//! Minimal WebSocket client helpers for integration tests.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connect to the server's WebSocket endpoint.
pub async fn connect(url: &str) -> WsStream {
    let (stream, _) = connect_async(url).await.expect("WebSocket connect failed");
    stream
}

/// Send one JSON event.
pub async fn send(ws: &mut WsStream, event: serde_json::Value) {
    ws.send(Message::Text(event.to_string().into()))
        .await
        .expect("WebSocket send failed");
}

/// Receive the next text frame as JSON, with a timeout.
pub async fn recv(ws: &mut WsStream) -> serde_json::Value {
    let deadline = Duration::from_secs(5);
    loop {
        let frame = tokio::time::timeout(deadline, ws.next())
            .await
            .expect("timed out waiting for a server message")
            .expect("connection closed while waiting for a server message")
            .expect("WebSocket receive failed");
        match frame {
            Message::Text(text) => {
                return serde_json::from_str(&text).expect("server sent invalid JSON");
            }
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("unexpected frame: {other:?}"),
        }
    }
}

/// Assert that no message arrives within a short grace period.
pub async fn expect_silence(ws: &mut WsStream) {
    let result = tokio::time::timeout(Duration::from_millis(300), ws.next()).await;
    assert!(result.is_err(), "expected silence, got {result:?}");
}
