use crate::{config, error, spotify, success};

pub async fn auth() {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => {
            error!("{}", e);
        }
    };
    let client_secret = match config::spotify_client_secret() {
        Ok(secret) => secret,
        Err(e) => {
            error!("{}", e);
        }
    };

    match spotify::auth::request_access_token(&client_id, &client_secret).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => {
            error!("Failed to authenticate with Spotify API: {}", e);
        }
    }
}
