use std::collections::HashSet;

use reqwest::Client;

use crate::{
    config,
    types::{ArtistStub, PlaylistTracksResponse},
    utils,
};

/// Collects the distinct artists appearing in a playlist.
///
/// Requests the playlist's track listing page by page, following the API's
/// `next` pagination links. Every artist of every non-null track is
/// considered; an artist id is appended exactly once, the first time it is
/// encountered, so the output order is first-appearance order across the
/// whole scan.
///
/// # Arguments
///
/// * `playlist_id` - Spotify playlist ID to scan
/// * `token` - Valid bearer token
/// * `max_pages` - Upper bound on pages fetched; guards against very long
///   playlists driving an unbounded request chain
///
/// # Returns
///
/// The collected artist stubs. A failed page request (non-2xx status,
/// transport error, or a malformed body) ends the scan and returns whatever
/// was collected up to that point; a failure on the first page therefore
/// yields an empty list, which the caller treats as "nothing to rank".
///
/// # Example
///
/// ```
/// let stubs = collect_artists("37i9dQZF1DX3QbJYj9DkHB", &token, 50).await;
/// ```
pub async fn collect_artists(playlist_id: &str, token: &str, max_pages: u32) -> Vec<ArtistStub> {
    let client = Client::new();
    let mut url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let mut seen: HashSet<String> = HashSet::new();
    let mut stubs: Vec<ArtistStub> = Vec::new();
    let mut pages_fetched = 0;

    while pages_fetched < max_pages {
        let response = match client.get(&url).bearer_auth(token).send().await {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(_) => break, // page failed, keep what we have
            },
            Err(_) => break,
        };

        let page: PlaylistTracksResponse = match response.json().await {
            Ok(page) => page,
            Err(_) => break,
        };

        utils::merge_page_artists(&mut stubs, &mut seen, &page.items);
        pages_fetched += 1;

        match page.next {
            Some(next_url) => url = next_url,
            None => break,
        }
    }

    stubs
}
