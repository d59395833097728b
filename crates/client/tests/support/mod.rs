//! Shared scaffolding: an in-process mock API on an ephemeral port plus a
//! client pointed at it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use client::ApiClient;
use common::TokenStore;

/// Serve `app` on 127.0.0.1:0 and return the bound address.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A client configured against the mock server, `/api/v1` included.
pub fn client_for(addr: SocketAddr, tokens: Arc<TokenStore>) -> ApiClient {
    let cfg = configs::ApiConfig {
        base_url: format!("http://{addr}/api/v1"),
        timeout_secs: 5,
    };
    ApiClient::new(&cfg, tokens).unwrap()
}
