// Shared stub for the remote game-state endpoint.

use axum::http::{StatusCode, header};
use axum::{Router, routing::get};
use std::time::Duration;

/// Serves `GET /state` on an ephemeral local port, answering with the given
/// status and body after an artificial delay. Returns the base URL.
pub async fn spawn_state_stub(delay: Duration, status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/state",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}")
}
