use reqwest::Client;

use crate::{
    config,
    errors::SummaryError,
    types::{CompletionRequest, CompletionResponse},
};

/// Requests a short generated summary for an artist.
///
/// Builds a fixed natural-language prompt embedding the artist name and
/// sends it to an OpenAI-compatible completion endpoint, capped at 150
/// tokens. The trimmed text of the first choice is returned.
///
/// # Arguments
///
/// * `artist_name` - Artist to summarize
/// * `api_key` - OpenAI API key
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - Trimmed summary text
/// - `Err(SummaryError)` - Non-success status, transport failure, or a
///   response without choices
///
/// Summary failures are non-fatal by design: the CLI surfaces them as a
/// warning and the rest of the artist detail still renders.
pub async fn query_summary(artist_name: &str, api_key: &str) -> Result<String, SummaryError> {
    let request = CompletionRequest {
        model: config::openai_model(),
        prompt: format!(
            "Provide a brief summary, list of members, and debut date for the music artist: {}.",
            artist_name
        ),
        max_tokens: 150,
    };

    let client = Client::new();
    let response = client
        .post(format!("{}/completions", config::openai_apiurl()))
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SummaryError::Status(status));
    }

    let res: CompletionResponse = response.json().await?;
    res.choices
        .first()
        .map(|choice| choice.text.trim().to_string())
        .ok_or(SummaryError::EmptyResponse)
}
