use reqwest::Client;

use crate::{
    config,
    types::{TopTracksResponse, TrackObject},
};

/// Fetches an artist's top tracks for a market.
///
/// Single request to the top-tracks endpoint; the result is the API's raw
/// track objects in the API's order. Sorting by popularity and truncation
/// to five entries happen in [`crate::utils::rank_tracks`].
///
/// # Arguments
///
/// * `artist_id` - Spotify artist ID
/// * `token` - Valid bearer token
/// * `market` - ISO 3166-1 alpha-2 market code, "US" by default at the CLI
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackObject>)` - Top tracks as returned by the API
/// - `Err(reqwest::Error)` - Network error or non-2xx API response
///
/// Callers treat a failure as "no tracks available" and keep rendering the
/// rest of the artist detail.
pub async fn get_top_tracks(
    artist_id: &str,
    token: &str,
    market: &str,
) -> Result<Vec<TrackObject>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = market
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;
    Ok(res.tracks)
}
