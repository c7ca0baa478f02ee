use anyhow::anyhow;
use log::debug;
use reqwest::{
    blocking::{Client, Response},
    StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{SyncError, SyncResult},
    playlist_service::{PlaylistService, MAX_PAGE_SIZE},
    types::{PlaylistEntry, PlaylistId, PlaylistPage, VideoId},
};

const PLAYLIST_ITEMS_API: &str = "https://www.googleapis.com/youtube/v3/playlistItems";
const VIDEO_KIND: &str = "youtube#video";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistItemSnippet,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    playlist_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    resource_id: ResourceId,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    kind: String,
    video_id: String,
}

impl From<PlaylistItem> for PlaylistEntry {
    fn from(item: PlaylistItem) -> Self {
        PlaylistEntry {
            video_id: VideoId(item.snippet.resource_id.video_id),
            title: item.snippet.title.unwrap_or_default(),
            playlist_id: PlaylistId(item.snippet.playlist_id),
        }
    }
}

impl From<PlaylistItemListResponse> for PlaylistPage {
    fn from(response: PlaylistItemListResponse) -> Self {
        PlaylistPage {
            entries: response.items.into_iter().map(PlaylistEntry::from).collect(),
            next_page_token: response.next_page_token.unwrap_or_default(),
        }
    }
}

fn insert_request(playlist: &PlaylistId, video: &VideoId) -> PlaylistItem {
    PlaylistItem {
        snippet: PlaylistItemSnippet {
            playlist_id: playlist.0.clone(),
            title: None,
            resource_id: ResourceId {
                kind: VIDEO_KIND.to_string(),
                video_id: video.0.clone(),
            },
        },
    }
}

/// YouTube Data API v3 client authenticated with an OAuth access token issued elsewhere.
pub struct YoutubeClient {
    http: Client,
    access_token: String,
}

impl YoutubeClient {
    pub fn new(access_token: String) -> Self {
        YoutubeClient {
            http: Client::new(),
            access_token,
        }
    }
}

fn list_context(playlist: &PlaylistId) -> String {
    format!("Error querying playlist items of {}", playlist)
}

fn insert_context(playlist: &PlaylistId, video: &VideoId) -> String {
    format!("Error inserting video {} into {}", video, playlist)
}

/// `pageToken` is only sent after the first page.
fn list_query<'a>(
    playlist: &'a PlaylistId,
    page_token: &'a str,
    max_results: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let mut query = vec![
        ("part", "snippet,id"),
        ("playlistId", playlist.0.as_str()),
        ("maxResults", max_results),
    ];
    if !page_token.is_empty() {
        query.push(("pageToken", page_token));
    }

    query
}

fn status_error(status: StatusCode, body: &str) -> anyhow::Error {
    let body = body.trim();

    if body.is_empty() {
        anyhow!("HTTP {}", status)
    } else {
        anyhow!("HTTP {}: {}", status, body)
    }
}

fn ensure_success(response: Response) -> anyhow::Result<Response> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let body = response
            .text()
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
        Err(status_error(status, &body))
    }
}

impl PlaylistService for YoutubeClient {
    fn list_page(&mut self, playlist: &PlaylistId, page_token: &str) -> SyncResult<PlaylistPage> {
        let context = || list_context(playlist);
        let max_results = MAX_PAGE_SIZE.to_string();
        let query = list_query(playlist, page_token, &max_results);

        let response = self
            .http
            .get(PLAYLIST_ITEMS_API)
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()
            .map_err(|e| SyncError::api(context(), e))?;

        let body: PlaylistItemListResponse = ensure_success(response)
            .map_err(|e| SyncError::api(context(), e))?
            .json()
            .map_err(|e| SyncError::api(context(), e))?;

        Ok(body.into())
    }

    fn insert(&mut self, playlist: &PlaylistId, video: &VideoId) -> SyncResult<PlaylistEntry> {
        let context = || insert_context(playlist, video);

        debug!("Inserting {} into {}", video, playlist);

        let response = self
            .http
            .post(PLAYLIST_ITEMS_API)
            .bearer_auth(&self.access_token)
            .query(&[("part", "snippet")])
            .json(&insert_request(playlist, video))
            .send()
            .map_err(|e| SyncError::api(context(), e))?;

        let item: PlaylistItem = ensure_success(response)
            .map_err(|e| SyncError::api(context(), e))?
            .json()
            .map_err(|e| SyncError::api(context(), e))?;

        Ok(item.into())
    }
}
