use std::sync::Arc;

use crate::{config, error, server, spotify::SpotifyClient};

pub async fn serve() {
    let client = match SpotifyClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("{}. Add it to {}", e, config::env_path().display()),
    };

    if let Err(e) = server::start_api_server(Arc::new(client)).await {
        error!("Server stopped: {}", e);
    }
}
