use crate::{
    error::SyncResult,
    types::{PlaylistEntry, PlaylistId, PlaylistPage, VideoId},
};

/// Hard limit on `maxResults` imposed by the playlistItems endpoint.
pub const MAX_PAGE_SIZE: usize = 50;

/// The two remote operations the synchronizer needs.
pub trait PlaylistService {
    /// Returns one page of at most [`MAX_PAGE_SIZE`] entries. An empty `page_token` asks for the first page.
    fn list_page(&mut self, playlist: &PlaylistId, page_token: &str) -> SyncResult<PlaylistPage>;

    fn insert(&mut self, playlist: &PlaylistId, video: &VideoId) -> SyncResult<PlaylistEntry>;
}
