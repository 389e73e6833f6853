use reqwest::{Client, StatusCode};

use crate::{config, errors::AuthError, types::TokenResponse};

/// Exchanges client credentials for a bearer access token.
///
/// Sends a form-encoded client-credentials grant request to the Spotify
/// token endpoint and extracts the access token from the response. The
/// token is valid for roughly an hour, far longer than a CLI run, so no
/// expiry tracking or refresh handling is performed.
///
/// # Arguments
///
/// * `client_id` - Client ID from the Spotify developer dashboard
/// * `client_secret` - Matching client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - Bearer token for subsequent API requests
/// - `Err(AuthError)` - Non-200 response or transport failure
///
/// # Error Handling
///
/// Any non-200 status is converted into [`AuthError::Status`] carrying the
/// returned status code; there is no retry. A failed exchange halts the
/// whole pipeline since nothing else can be requested without a token.
///
/// # Example
///
/// ```
/// let token = request_access_token(&client_id, &client_secret).await?;
/// ```
pub async fn request_access_token(
    client_id: &str,
    client_secret: &str,
) -> Result<String, AuthError> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(AuthError::Status(response.status()));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
