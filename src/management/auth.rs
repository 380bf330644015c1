use chrono::Utc;
use reqwest::Client;

use crate::{error::FetchError, spotify, types::Token};

// seconds before expiry at which a token is considered stale
const EXPIRY_MARGIN: u64 = 240;

/// Holds the app access token in memory and renews it when it runs out.
pub struct TokenManager {
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(token_url: String, client_id: String, client_secret: String) -> Self {
        TokenManager {
            token_url,
            client_id,
            client_secret,
            token: None,
        }
    }

    pub async fn get_valid_token(&mut self, client: &Client) -> Result<String, FetchError> {
        if self.is_expired() {
            let token = spotify::auth::request_client_token(
                client,
                &self.token_url,
                &self.client_id,
                &self.client_secret,
            )
            .await?;
            self.token = Some(token);
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => Err(FetchError::Other("no access token available".to_string())),
        }
    }

    /// Drops the cached token so the next request fetches a fresh one.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    fn is_expired(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token
                    .obtained_at
                    .saturating_add(token.expires_in)
                    .saturating_sub(EXPIRY_MARGIN)
            }
            None => true,
        }
    }
}
