//! Shared test fixtures.

use std::time::Duration;

/// A game server running on a dedicated port for one test.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server on the given port and wait until it accepts
    /// connections.
    pub async fn start(port: u16) -> Self {
        tokio::spawn(async move {
            if let Err(e) = critmass_server::run_server("127.0.0.1", port).await {
                eprintln!("test server on port {port} failed: {e}");
            }
        });

        // Poll until the listener is up
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                return Self { port };
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("test server on port {port} did not come up");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
