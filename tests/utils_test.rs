use std::collections::HashSet;

use spopcli::types::{
    AlbumRef, ArtistDetail, ArtistStub, ExternalUrls, Image, PlaylistItem, PlaylistTrack,
    TrackObject,
};
use spopcli::utils::*;

// Helper function to create a test artist stub
fn create_test_stub(id: &str, name: &str) -> ArtistStub {
    ArtistStub {
        id: id.to_string(),
        name: name.to_string(),
    }
}

// Helper function to create a playlist item with the given track artists
fn create_test_item(artists: &[(&str, &str)]) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            artists: artists
                .iter()
                .map(|(id, name)| create_test_stub(id, name))
                .collect(),
        }),
    }
}

// Helper function to create a test artist detail
fn create_test_detail(id: &str, name: &str, popularity: u32) -> ArtistDetail {
    ArtistDetail {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
        followers: 1000,
        image: None,
    }
}

// Helper function to create a test track object
fn create_test_track(name: &str, popularity: u32, with_album: bool) -> TrackObject {
    TrackObject {
        name: name.to_string(),
        popularity,
        external_urls: ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{}", name)),
        },
        album: with_album.then(|| AlbumRef {
            images: vec![Image {
                url: format!("https://i.scdn.co/image/{}", name),
            }],
        }),
    }
}

#[test]
fn test_merge_page_artists_dedupes_in_first_appearance_order() {
    // Track A features X and Y, track B features X and Z
    let items = vec![
        create_test_item(&[("x", "Artist X"), ("y", "Artist Y")]),
        create_test_item(&[("x", "Artist X"), ("z", "Artist Z")]),
    ];

    let mut stubs = Vec::new();
    let mut seen = HashSet::new();
    merge_page_artists(&mut stubs, &mut seen, &items);

    let ids: Vec<&str> = stubs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y", "z"]);
}

#[test]
fn test_merge_page_artists_skips_null_tracks() {
    let items = vec![
        PlaylistItem { track: None },
        create_test_item(&[("a", "Artist A")]),
        PlaylistItem { track: None },
    ];

    let mut stubs = Vec::new();
    let mut seen = HashSet::new();
    merge_page_artists(&mut stubs, &mut seen, &items);

    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs[0].name, "Artist A");
}

#[test]
fn test_merge_page_artists_dedupes_across_pages() {
    let mut stubs = Vec::new();
    let mut seen = HashSet::new();

    let page1 = vec![create_test_item(&[("a", "Artist A"), ("b", "Artist B")])];
    merge_page_artists(&mut stubs, &mut seen, &page1);

    // Second page repeats A and introduces C
    let page2 = vec![create_test_item(&[("a", "Artist A"), ("c", "Artist C")])];
    merge_page_artists(&mut stubs, &mut seen, &page2);

    let ids: Vec<&str> = stubs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_merge_page_artists_empty_playlist() {
    let mut stubs = Vec::new();
    let mut seen = HashSet::new();
    merge_page_artists(&mut stubs, &mut seen, &[]);
    assert!(stubs.is_empty());
}

#[test]
fn test_rank_artists_sorts_by_popularity_and_truncates() {
    let artists = vec![
        create_test_detail("x", "Artist X", 50),
        create_test_detail("y", "Artist Y", 90),
        create_test_detail("z", "Artist Z", 70),
    ];

    let ranked = rank_artists(artists, 2);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Artist Y");
    assert_eq!(ranked[0].popularity, 90);
    assert_eq!(ranked[1].name, "Artist Z");
    assert_eq!(ranked[1].popularity, 70);
}

#[test]
fn test_rank_artists_ties_keep_encounter_order() {
    let artists = vec![
        create_test_detail("a", "Artist A", 60),
        create_test_detail("b", "Artist B", 80),
        create_test_detail("c", "Artist C", 60),
        create_test_detail("d", "Artist D", 60),
    ];

    let ranked = rank_artists(artists, 10);

    let names: Vec<&str> = ranked.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Artist B", "Artist A", "Artist C", "Artist D"]);
}

#[test]
fn test_rank_artists_shorter_than_limit_is_not_padded() {
    let artists = vec![
        create_test_detail("a", "Artist A", 10),
        create_test_detail("b", "Artist B", 20),
        create_test_detail("c", "Artist C", 30),
    ];

    // limit 5, only 3 enriched artists
    let ranked = rank_artists(artists, 5);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_rank_artists_empty_input() {
    let ranked = rank_artists(Vec::new(), 10);
    assert!(ranked.is_empty());
}

#[test]
fn test_rank_tracks_caps_at_five_sorted_descending() {
    let tracks = vec![
        create_test_track("t1", 10, true),
        create_test_track("t2", 90, true),
        create_test_track("t3", 50, true),
        create_test_track("t4", 70, true),
        create_test_track("t5", 30, true),
        create_test_track("t6", 60, true),
        create_test_track("t7", 20, true),
    ];

    let ranked = rank_tracks(tracks);

    assert_eq!(ranked.len(), 5);
    let popularities: Vec<u32> = ranked.iter().map(|t| t.popularity).collect();
    assert_eq!(popularities, vec![90, 70, 60, 50, 30]);
}

#[test]
fn test_rank_tracks_maps_link_and_album_image() {
    let ranked = rank_tracks(vec![create_test_track("song", 40, true)]);

    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked[0].url.as_deref(),
        Some("https://open.spotify.com/track/song")
    );
    assert_eq!(
        ranked[0].image.as_deref(),
        Some("https://i.scdn.co/image/song")
    );
}

#[test]
fn test_rank_tracks_handles_missing_album() {
    let ranked = rank_tracks(vec![create_test_track("bare", 40, false)]);

    assert_eq!(ranked.len(), 1);
    assert!(ranked[0].image.is_none());
}

#[test]
fn test_resolve_selection_by_rank() {
    let artists = vec![
        create_test_detail("a", "Artist A", 90),
        create_test_detail("b", "Artist B", 80),
    ];

    assert_eq!(resolve_selection("1", &artists), Some(0));
    assert_eq!(resolve_selection(" 2 ", &artists), Some(1));

    // ranks are 1-indexed and bounded
    assert_eq!(resolve_selection("0", &artists), None);
    assert_eq!(resolve_selection("3", &artists), None);
}

#[test]
fn test_resolve_selection_by_name_case_insensitive() {
    let artists = vec![
        create_test_detail("a", "Artist A", 90),
        create_test_detail("b", "Artist B", 80),
    ];

    assert_eq!(resolve_selection("artist b", &artists), Some(1));
    assert_eq!(resolve_selection("ARTIST A", &artists), Some(0));
    assert_eq!(resolve_selection("Artist C", &artists), None);
}

#[test]
fn test_resolve_selection_empty_input() {
    let artists = vec![create_test_detail("a", "Artist A", 90)];

    assert_eq!(resolve_selection("", &artists), None);
    assert_eq!(resolve_selection("   ", &artists), None);
}

#[test]
fn test_format_followers_groups_thousands() {
    assert_eq!(format_followers(0), "0");
    assert_eq!(format_followers(999), "999");
    assert_eq!(format_followers(1000), "1,000");
    assert_eq!(format_followers(12345678), "12,345,678");
}
