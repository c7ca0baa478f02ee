use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(pub String);

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub video_id: VideoId,
    pub title: String,
    pub playlist_id: PlaylistId,
}

/// One page of a playlist. An empty `next_page_token` means there is nothing left to fetch.
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    pub entries: Vec<PlaylistEntry>,
    pub next_page_token: String,
}

/// Which playlists are merged, and into what.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub sources: Vec<PlaylistId>,
    pub target: PlaylistId,
}

pub type MissingVideos = HashSet<VideoId>;

#[derive(Debug, Default)]
pub struct ApplyReport {
    pub inserted: Vec<PlaylistEntry>,
}
