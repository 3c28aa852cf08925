use crate::{config, info, server};

pub async fn serve() {
    info!("Serving on {}", config::server_addr());
    server::start_api_server().await;
}
