use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config, error, openai, spotify, success, types::ArtistDetail, utils, warning};

/// Market used for top-track lookups.
const MARKET: &str = "US";

pub async fn artist(name: String, playlist_id: String, max_pages: u32) {
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

    let token = match spotify::auth::request_access_token(&client_id, &client_secret).await {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to authenticate with Spotify API: {}", e);
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Collecting playlist artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let stubs = spotify::playlist::collect_artists(&playlist_id, &token, max_pages).await;
    pb.finish_and_clear();

    let lowered = name.to_lowercase();
    let Some(stub) = stubs.iter().find(|s| s.name.to_lowercase() == lowered) else {
        warning!("No artist named '{}' appears in playlist {}.", name, playlist_id);
        return;
    };

    let detail: ArtistDetail = match spotify::artists::get_artist(&stub.id, &token).await {
        Ok(profile) => profile.into(),
        Err(e) => {
            error!("Failed to fetch profile for {}: {}", stub.name, e);
        }
    };

    render_artist_detail(&detail, &token, config::openai_api_key().as_deref()).await;
}

pub(super) async fn render_artist_detail(
    detail: &ArtistDetail,
    token: &str,
    summary_key: Option<&str>,
) {
    println!();
    success!("Artist details:");
    println!("Name: {}", detail.name);
    println!("Popularity: {}", detail.popularity);
    println!("Followers: {}", utils::format_followers(detail.followers));
    if let Some(image) = &detail.image {
        println!("Image: {}", image);
    }

    let tracks = match spotify::tracks::get_top_tracks(&detail.id, token, MARKET).await {
        Ok(tracks) => utils::rank_tracks(tracks),
        Err(e) => {
            warning!("Failed to fetch top tracks for {}: {}", detail.name, e);
            Vec::new()
        }
    };

    if !tracks.is_empty() {
        println!();
        success!("Top {} tracks:", tracks.len());
        for track in &tracks {
            println!("{} (popularity: {})", track.name, track.popularity);
            if let Some(url) = &track.url {
                println!("  Listen on Spotify: {}", url);
            }
            if let Some(image) = &track.image {
                println!("  Album art: {}", image);
            }
        }
    }

    if let Some(key) = summary_key {
        match openai::query_summary(&detail.name, key).await {
            Ok(summary) => {
                println!();
                success!("Generated artist summary:");
                println!("{}", summary);
            }
            Err(e) => warning!("Failed to fetch artist summary: {}", e),
        }
    }
    println!();
}
