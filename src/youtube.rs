use anyhow::{anyhow, Result};
use url::Url;

use crate::types::PlaylistId;

fn is_youtube_domain(domain: Option<&str>) -> bool {
    match domain {
        Some("youtube.com") => true,
        Some("www.youtube.com") => true,
        Some("m.youtube.com") => true,
        Some("www.m.youtube.com") => true,
        Some("music.youtube.com") => true,
        _ => false,
    }
}

fn is_valid_playlist_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn get_list_parameter(parsed: &Url, reference: &str) -> Result<String> {
    if !is_youtube_domain(parsed.domain()) {
        return Err(anyhow!("\"{}\" is not a YouTube URL", reference));
    }

    parsed
        .query_pairs()
        .find(|(name, _)| name == "list")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| anyhow!("\"{}\" has no list query parameter", reference))
}

/// Accepts either a bare playlist id or a YouTube URL carrying a `list` query parameter
/// (`/playlist?list=..` or `/watch?v=..&list=..`). URLs without a scheme are read as https.
pub fn get_playlist_id(reference: &str) -> Result<PlaylistId> {
    let reference = reference.trim();

    let id = match Url::parse(reference) {
        Ok(parsed) => get_list_parameter(&parsed, reference)?,
        Err(url::ParseError::RelativeUrlWithoutBase) if reference.contains('/') => {
            let parsed = Url::parse(&format!("https://{}", reference)).map_err(|e| {
                anyhow!("\"{}\" is not a valid playlist reference: {}", reference, e)
            })?;

            get_list_parameter(&parsed, reference)?
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => reference.to_string(),
        Err(e) => return Err(anyhow!("\"{}\" is not a valid playlist reference: {}", reference, e)),
    };

    if !is_valid_playlist_id(&id) {
        return Err(anyhow!("\"{}\" is not a valid playlist id", id));
    }

    Ok(PlaylistId(id))
}
