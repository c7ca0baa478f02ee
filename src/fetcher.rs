use log::debug;

use crate::{
    error::SyncResult,
    playlist_service::PlaylistService,
    types::{PlaylistEntry, PlaylistId},
};

/// Follows continuation tokens until the service returns an empty one.
/// Entries keep the order the service returned them in.
pub fn fetch_all_entries(
    service: &mut dyn PlaylistService,
    playlist: &PlaylistId,
) -> SyncResult<Vec<PlaylistEntry>> {
    let mut entries = vec![];
    let mut page_token = String::new();
    let mut page_number = 0;

    loop {
        let page = service.list_page(playlist, &page_token)?;
        page_number += 1;

        debug!(
            "Fetched page {} of {} ({} entries)",
            page_number,
            playlist,
            page.entries.len()
        );

        entries.extend(page.entries);
        page_token = page.next_page_token;

        if page_token.is_empty() {
            break;
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use crate::{
        test_utils::{pl, vids, FakePlaylistService},
        types::VideoId,
    };

    use super::fetch_all_entries;

    #[test]
    fn it_fetches_single_empty_page_once() {
        let mut service = FakePlaylistService::new().with_playlist("P1", &[]);

        let entries = fetch_all_entries(&mut service, &pl("P1")).unwrap();

        assert!(entries.is_empty());
        assert_eq!(service.list_calls(), 1);
    }

    #[test]
    fn it_issues_one_call_per_page() {
        let ids: Vec<String> = (0..120).map(|i| format!("v{}", i)).collect();
        let ids: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
        let mut service = FakePlaylistService::new().with_playlist("P1", &ids);

        let entries = fetch_all_entries(&mut service, &pl("P1")).unwrap();

        assert_eq!(entries.len(), 120);
        assert_eq!(service.list_calls(), 3);
    }

    #[test]
    fn it_stops_exactly_on_full_last_page() {
        let ids: Vec<String> = (0..100).map(|i| format!("v{}", i)).collect();
        let ids: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
        let mut service = FakePlaylistService::new().with_playlist("P1", &ids);

        fetch_all_entries(&mut service, &pl("P1")).unwrap();

        assert_eq!(service.list_calls(), 2);
    }

    #[test]
    fn it_keeps_service_order() {
        let mut service = FakePlaylistService::new()
            .with_page_size(2)
            .with_playlist("P1", &["c", "a", "b"]);

        let entries = fetch_all_entries(&mut service, &pl("P1")).unwrap();
        let ids: Vec<VideoId> = entries.into_iter().map(|e| e.video_id).collect();

        assert_eq!(ids, vids(&["c", "a", "b"]));
    }

    #[test]
    fn it_propagates_list_failure() {
        let mut service = FakePlaylistService::new()
            .with_page_size(2)
            .with_playlist("P1", &["a", "b", "c", "d"])
            .fail_list_on_call(2);

        let result = fetch_all_entries(&mut service, &pl("P1"));

        assert!(result.is_err());
        assert_eq!(service.list_calls(), 2);
    }
}
