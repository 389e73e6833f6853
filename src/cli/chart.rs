use std::{
    io::{self, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info, spotify, success,
    types::{ArtistDetail, ArtistTableRow},
    utils, warning,
};

pub async fn chart(playlist_id: String, top: usize, max_pages: u32) {
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

    let ranked = build_ranking(&playlist_id, &token, top, max_pages).await;
    if ranked.is_empty() {
        return;
    }

    render_table(&ranked);

    let summary_key = config::openai_api_key();
    loop {
        print!("Select an artist by rank or name (Enter to quit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }
        if line.trim().is_empty() {
            break;
        }

        match utils::resolve_selection(&line, &ranked) {
            Some(idx) => {
                super::artist::render_artist_detail(&ranked[idx], &token, summary_key.as_deref())
                    .await
            }
            None => warning!("No artist matches '{}'.", line.trim()),
        }
    }
}

async fn build_ranking(
    playlist_id: &str,
    token: &str,
    top: usize,
    max_pages: u32,
) -> Vec<ArtistDetail> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Collecting playlist artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let stubs = spotify::playlist::collect_artists(playlist_id, token, max_pages).await;
    pb.finish_and_clear();

    if stubs.is_empty() {
        info!("No artists found in playlist {}.", playlist_id);
        return Vec::new();
    }
    info!("Found {} distinct artists.", stubs.len());

    let enrichment = spotify::artists::enrich_artists(&stubs, token).await;
    if !enrichment.failed_ids.is_empty() {
        warning!(
            "Skipped {} artists whose profile could not be fetched.",
            enrichment.failed_ids.len()
        );
    }

    let ranked = utils::rank_artists(enrichment.artists, top);
    if ranked.is_empty() {
        info!("No artist profiles could be fetched.");
    }
    ranked
}

fn render_table(ranked: &[ArtistDetail]) {
    success!("Top {} artists by popularity:", ranked.len());

    let table_rows: Vec<ArtistTableRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, artist)| ArtistTableRow {
            rank: i + 1,
            name: artist.name.clone(),
            popularity: artist.popularity,
            followers: artist.followers,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
