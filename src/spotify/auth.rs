use chrono::Utc;
use reqwest::Client;

use crate::{
    error::FetchError,
    types::{ClientCredentialsResponse, Token},
};

const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Exchanges the application credentials for an app access token.
///
/// Uses the OAuth 2.0 client credentials grant. The token only grants access
/// to public catalog data, which is all playlist extraction needs. No user
/// interaction is involved and nothing is written to disk.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `client_id` / `client_secret` - Credentials of the registered application
///
/// # Errors
///
/// - [`FetchError::Unauthorized`] if the endpoint rejects the credentials
/// - [`FetchError::Transport`] on network failures
/// - [`FetchError::Decode`] if the response is not a token payload
pub async fn request_client_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, FetchError> {
    let response = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(if status.is_client_error() {
            FetchError::Unauthorized(body)
        } else {
            FetchError::Status {
                status,
                message: body,
            }
        });
    }

    let json = response
        .json::<ClientCredentialsResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
