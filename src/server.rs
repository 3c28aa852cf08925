use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error};

pub async fn start_api_server() {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/findArtists", post(api::find_artists));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
