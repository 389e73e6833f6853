use spopcli::types::{
    ArtistDetail, ArtistResponse, CompletionResponse, PlaylistTracksResponse, TokenResponse,
    TopTracksResponse, Track,
};

#[test]
fn test_token_response_deserializes() {
    let json = r#"{
        "access_token": "BQC-abc123",
        "token_type": "Bearer",
        "expires_in": 3600
    }"#;

    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "BQC-abc123");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_playlist_page_with_null_track_and_next_link() {
    let json = r#"{
        "items": [
            {"track": {"artists": [{"id": "x", "name": "Artist X"}]}},
            {"track": null}
        ],
        "next": "https://api.spotify.com/v1/playlists/p/tracks?offset=100"
    }"#;

    let page: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(page.items.len(), 2);
    assert!(page.items[0].track.is_some());
    assert!(page.items[1].track.is_none());
    assert!(page.next.is_some());
}

#[test]
fn test_playlist_last_page_has_no_next() {
    let json = r#"{"items": [], "next": null}"#;

    let page: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    assert!(page.items.is_empty());
    assert!(page.next.is_none());
}

#[test]
fn test_artist_profile_maps_first_image() {
    let json = r#"{
        "id": "abc",
        "name": "Artist",
        "popularity": 73,
        "followers": {"total": 123456},
        "images": [
            {"url": "https://i.scdn.co/image/large"},
            {"url": "https://i.scdn.co/image/small"}
        ]
    }"#;

    let profile: ArtistResponse = serde_json::from_str(json).unwrap();
    let detail = ArtistDetail::from(profile);

    assert_eq!(detail.popularity, 73);
    assert_eq!(detail.followers, 123456);
    assert_eq!(detail.image.as_deref(), Some("https://i.scdn.co/image/large"));
}

#[test]
fn test_artist_profile_without_images() {
    let json = r#"{
        "id": "abc",
        "name": "Artist",
        "popularity": 10,
        "followers": {"total": 5},
        "images": []
    }"#;

    let profile: ArtistResponse = serde_json::from_str(json).unwrap();
    let detail = ArtistDetail::from(profile);
    assert!(detail.image.is_none());
}

#[test]
fn test_top_tracks_response_maps_to_track() {
    let json = r#"{
        "tracks": [
            {
                "name": "Song",
                "popularity": 88,
                "external_urls": {"spotify": "https://open.spotify.com/track/t"},
                "album": {"images": [{"url": "https://i.scdn.co/image/cover"}]}
            },
            {
                "name": "Bare",
                "popularity": 12,
                "external_urls": {},
                "album": null
            }
        ]
    }"#;

    let res: TopTracksResponse = serde_json::from_str(json).unwrap();
    let tracks: Vec<Track> = res.tracks.into_iter().map(Track::from).collect();

    assert_eq!(tracks[0].url.as_deref(), Some("https://open.spotify.com/track/t"));
    assert_eq!(tracks[0].image.as_deref(), Some("https://i.scdn.co/image/cover"));
    assert!(tracks[1].url.is_none());
    assert!(tracks[1].image.is_none());
}

#[test]
fn test_completion_response_first_choice() {
    let json = r#"{
        "choices": [
            {"text": "\n\nA band formed in 1990.  "},
            {"text": "second"}
        ]
    }"#;

    let res: CompletionResponse = serde_json::from_str(json).unwrap();
    let summary = res.choices.first().map(|c| c.text.trim().to_string());
    assert_eq!(summary.as_deref(), Some("A band formed in 1990."));
}
