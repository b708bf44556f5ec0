#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use blocking_responses_api::error::StartupError;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("blocking_responses_api=debug")
            .with_test_writer()
            .init();
    });
}

/// A running server with a handle for graceful shutdown.
pub struct TestApp {
    pub address: String,
    pub shutdown: Option<oneshot::Sender<()>>,
    pub handle: JoinHandle<Result<(), StartupError>>,
}

impl TestApp {
    /// Signals shutdown and waits for the server task to finish.
    pub async fn stop(mut self) -> Result<(), StartupError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("Server task panicked")
    }
}

/// Spawns the application on a random local port.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> TestApp {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(blocking_responses_api::serve(listener, async {
        let _ = rx.await;
    }));

    let address = format!("http://127.0.0.1:{port}");
    assert!(
        wait_until_ready(&address).await,
        "Server never became ready at {address}"
    );

    TestApp {
        address,
        shutdown: Some(tx),
        handle,
    }
}

/// Polls `/api/health` until the server answers or the attempts run out.
pub async fn wait_until_ready(address: &str) -> bool {
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("{address}/api/health"))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    false
}

/// Finds a port that is free right now by binding and releasing it.
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve a local port")
        .port()
}
