use std::collections::HashMap;

use anyhow::anyhow;

use crate::{
    error::{SyncError, SyncResult},
    pacer::Pacer,
    playlist_service::{PlaylistService, MAX_PAGE_SIZE},
    types::{PlaylistEntry, PlaylistId, PlaylistPage, VideoId},
};

pub fn pl(id: &str) -> PlaylistId {
    PlaylistId(id.to_string())
}

pub fn vids(ids: &[&str]) -> Vec<VideoId> {
    ids.iter().map(|id| VideoId(id.to_string())).collect()
}

/// In-memory playlists paged with offset tokens. Inserts are appended so a second run sees them.
pub struct FakePlaylistService {
    playlists: HashMap<PlaylistId, Vec<VideoId>>,
    page_size: usize,
    list_calls: usize,
    insert_calls: usize,
    fail_list_on: Option<usize>,
    fail_insert_on: Option<usize>,
    pub inserted: Vec<(PlaylistId, VideoId)>,
}

impl FakePlaylistService {
    pub fn new() -> Self {
        FakePlaylistService {
            playlists: HashMap::new(),
            page_size: MAX_PAGE_SIZE,
            list_calls: 0,
            insert_calls: 0,
            fail_list_on: None,
            fail_insert_on: None,
            inserted: vec![],
        }
    }

    pub fn with_playlist(mut self, id: &str, videos: &[&str]) -> Self {
        self.playlists.insert(pl(id), vids(videos));
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fails the n-th (1-based) list call.
    pub fn fail_list_on_call(mut self, n: usize) -> Self {
        self.fail_list_on = Some(n);
        self
    }

    /// Fails the n-th (1-based) insert call.
    pub fn fail_insert_on_call(mut self, n: usize) -> Self {
        self.fail_insert_on = Some(n);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls
    }

    pub fn reset_calls(&mut self) {
        self.list_calls = 0;
        self.insert_calls = 0;
        self.inserted.clear();
    }

    pub fn videos_of(&self, id: &str) -> Vec<VideoId> {
        self.playlists.get(&pl(id)).cloned().unwrap_or_default()
    }
}

impl PlaylistService for FakePlaylistService {
    fn list_page(&mut self, playlist: &PlaylistId, page_token: &str) -> SyncResult<PlaylistPage> {
        self.list_calls += 1;

        if self.fail_list_on == Some(self.list_calls) {
            return Err(SyncError::api(
                format!("Error querying playlist items of {}", playlist),
                anyhow!("simulated list failure"),
            ));
        }

        let videos = self.playlists.get(playlist).ok_or_else(|| {
            SyncError::api(
                format!("Error querying playlist items of {}", playlist),
                anyhow!("playlist not found"),
            )
        })?;

        let start: usize = if page_token.is_empty() {
            0
        } else {
            page_token.parse::<usize>().map_err(|e| {
                SyncError::api(format!("Bad page token {}", page_token), e)
            })?
        };
        let end = (start + self.page_size).min(videos.len());

        let entries = videos[start..end]
            .iter()
            .map(|video| PlaylistEntry {
                video_id: video.clone(),
                title: format!("Title of {}", video),
                playlist_id: playlist.clone(),
            })
            .collect();

        let next_page_token = if end < videos.len() {
            end.to_string()
        } else {
            String::new()
        };

        Ok(PlaylistPage {
            entries,
            next_page_token,
        })
    }

    fn insert(&mut self, playlist: &PlaylistId, video: &VideoId) -> SyncResult<PlaylistEntry> {
        self.insert_calls += 1;

        if self.fail_insert_on == Some(self.insert_calls) {
            return Err(SyncError::api(
                format!("Error inserting video {} into {}", video, playlist),
                anyhow!("simulated insert failure"),
            ));
        }

        self.playlists
            .entry(playlist.clone())
            .or_default()
            .push(video.clone());
        self.inserted.push((playlist.clone(), video.clone()));

        Ok(PlaylistEntry {
            video_id: video.clone(),
            title: format!("Title of {}", video),
            playlist_id: playlist.clone(),
        })
    }
}

#[derive(Default)]
pub struct CountingPacer {
    pub pauses: usize,
}

impl Pacer for CountingPacer {
    fn pause(&mut self) {
        self.pauses += 1;
    }
}
