use log::{debug, info};

use crate::{
    error::SyncResult,
    fetcher::fetch_all_entries,
    pacer::Pacer,
    playlist_service::PlaylistService,
    types::{ApplyReport, MissingVideos, PlaylistEntry, PlaylistId, SyncPlan},
};

/// Union of every source's videos minus what the target already holds.
pub fn collect_missing(
    service: &mut dyn PlaylistService,
    plan: &SyncPlan,
) -> SyncResult<MissingVideos> {
    let mut missing = MissingVideos::new();

    for source in &plan.sources {
        let entries = fetch_all_entries(service, source)?;
        info!("Source {} holds {} entries", source, entries.len());

        missing.extend(entries.into_iter().map(|e| e.video_id));
    }

    let target_entries = fetch_all_entries(service, &plan.target)?;
    info!("Target {} holds {} entries", plan.target, target_entries.len());

    for entry in target_entries {
        missing.remove(&entry.video_id);
    }

    info!("{} videos missing from {}", missing.len(), plan.target);

    Ok(missing)
}

/// Inserts every missing video into `target`, pausing after each successful insert.
/// Stops at the first failure; nothing after it is attempted.
pub fn apply_missing(
    service: &mut dyn PlaylistService,
    target: &PlaylistId,
    missing: MissingVideos,
    pacer: &mut dyn Pacer,
    on_inserted: &mut dyn FnMut(&PlaylistEntry),
) -> SyncResult<ApplyReport> {
    let mut report = ApplyReport::default();

    for video in missing {
        let entry = service.insert(target, &video)?;
        debug!("Inserted {} into {}", entry.video_id, entry.playlist_id);

        on_inserted(&entry);
        report.inserted.push(entry);

        pacer.pause();
    }

    Ok(report)
}

pub fn synchronize(
    service: &mut dyn PlaylistService,
    plan: &SyncPlan,
    pacer: &mut dyn Pacer,
    on_inserted: &mut dyn FnMut(&PlaylistEntry),
) -> SyncResult<ApplyReport> {
    let missing = collect_missing(service, plan)?;

    apply_missing(service, &plan.target, missing, pacer, on_inserted)
}
