use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config,
    types::{ArtistResponse, ArtistStub, Enrichment},
};

/// Fetches the full profile for a single artist.
///
/// # Arguments
///
/// * `artist_id` - Spotify artist ID
/// * `token` - Valid bearer token
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(ArtistResponse)` - Profile with popularity, follower count and images
/// - `Err(reqwest::Error)` - Network error or non-2xx API response
pub async fn get_artist(artist_id: &str, token: &str) -> Result<ArtistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<ArtistResponse>().await
}

/// Enriches a batch of artist stubs with their full profiles.
///
/// Issues one profile request per stub, sequentially and without retries.
/// Stubs whose request fails are recorded in [`Enrichment::failed_ids`]
/// instead of being dropped silently, so the caller can warn that the
/// ranking is built from partial data. Successful profiles keep the stubs'
/// encounter order; ranking and truncation are left to
/// [`crate::utils::rank_artists`].
///
/// A progress bar tracks the batch since large playlists mean one request
/// per distinct artist.
///
/// # Arguments
///
/// * `stubs` - Artist stubs collected from the playlist scan
/// * `token` - Valid bearer token
///
/// # Example
///
/// ```
/// let enrichment = enrich_artists(&stubs, &token).await;
/// let ranked = utils::rank_artists(enrichment.artists, 10);
/// ```
pub async fn enrich_artists(stubs: &[ArtistStub], token: &str) -> Enrichment {
    let pb = ProgressBar::new(stubs.len() as u64);
    pb.set_message("Fetching artist profiles...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30}] {pos}/{len}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut enrichment = Enrichment::default();

    for stub in stubs {
        match get_artist(&stub.id, token).await {
            Ok(profile) => enrichment.artists.push(profile.into()),
            Err(_) => enrichment.failed_ids.push(stub.id.clone()),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    enrichment
}
