use std::collections::HashSet;

use crate::types::{ArtistDetail, ArtistStub, PlaylistItem, Track, TrackObject};

pub fn merge_page_artists(
    stubs: &mut Vec<ArtistStub>,
    seen: &mut HashSet<String>,
    items: &[PlaylistItem],
) {
    for item in items {
        // local tracks and removed episodes come back as null
        let Some(track) = &item.track else { continue };
        for artist in &track.artists {
            if seen.insert(artist.id.clone()) {
                stubs.push(artist.clone());
            }
        }
    }
}

pub fn rank_artists(mut artists: Vec<ArtistDetail>, limit: usize) -> Vec<ArtistDetail> {
    // stable sort keeps encounter order for equal popularity
    artists.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    artists.truncate(limit);
    artists
}

pub fn rank_tracks(tracks: Vec<TrackObject>) -> Vec<Track> {
    let mut tracks: Vec<Track> = tracks.into_iter().map(Track::from).collect();
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    tracks.truncate(5);
    tracks
}

pub fn resolve_selection(input: &str, artists: &[ArtistDetail]) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(rank) = trimmed.parse::<usize>() {
        if (1..=artists.len()).contains(&rank) {
            return Some(rank - 1);
        }
        return None;
    }

    let lowered = trimmed.to_lowercase();
    artists.iter().position(|a| a.name.to_lowercase() == lowered)
}

pub fn format_followers(followers: u64) -> String {
    let digits = followers.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
