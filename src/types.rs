use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Response of the client-credentials token exchange. Only `access_token`
/// is ever used; the token is re-requested on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Identity-only artist record collected while scanning a playlist.
/// Uniqueness is enforced by `id`, order is first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistStub {
    pub id: String,
    pub name: String,
}

/// Full artist profile used for ranking and the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
    pub image: Option<String>,
}

/// Outcome of enriching a batch of artist stubs. Profile requests that
/// fail are recorded by id instead of being dropped silently, so callers
/// can tell the user the ranking is built from partial data.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub artists: Vec<ArtistDetail>,
    pub failed_ids: Vec<String>,
}

/// Display projection of a top track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub popularity: u32,
    pub url: Option<String>,
    pub image: Option<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub artists: Vec<ArtistStub>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistResponse {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub followers: Followers,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub album: Option<AlbumRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

impl From<ArtistResponse> for ArtistDetail {
    fn from(res: ArtistResponse) -> Self {
        ArtistDetail {
            id: res.id,
            name: res.name,
            popularity: res.popularity,
            followers: res.followers.total,
            image: res.images.into_iter().next().map(|i| i.url),
        }
    }
}

impl From<TrackObject> for Track {
    fn from(obj: TrackObject) -> Self {
        Track {
            name: obj.name,
            popularity: obj.popularity,
            url: obj.external_urls.spotify,
            image: obj
                .album
                .and_then(|a| a.images.into_iter().next())
                .map(|i| i.url),
        }
    }
}
