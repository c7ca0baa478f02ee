use std::time::Duration;

use anyhow::Result;
use env_logger::Env;
use log::info;

use crate::{
    api::cli::{Cli, CliCommand},
    config::config::Config,
    pacer::FixedDelay,
    reconciler::{collect_missing, synchronize},
    types::{MissingVideos, PlaylistEntry, VideoId},
    youtube_client::YoutubeClient,
};

mod api;
mod config;
mod error;
mod fetcher;
mod pacer;
mod playlist_service;
mod reconciler;
#[cfg(test)]
mod test_utils;
mod types;
mod youtube;
mod youtube_client;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli {};
    let program = cli.run();

    match program.command {
        CliCommand::Synchronize {
            dry_run,
            delay,
            config,
        } => command_synchronize(config, dry_run, delay),
        CliCommand::Missing { short, config } => command_missing(config, short),
    }
}

fn command_synchronize(config: Option<String>, dry_run: bool, delay: Option<u64>) -> Result<()> {
    let config = Config::new_from_file(config)?;
    let plan = config.get_sync_plan()?;
    let mut client = YoutubeClient::new(config.get_access_token()?);

    if dry_run {
        let missing = collect_missing(&mut client, &plan)?;
        print_missing(&missing, true);
        return Ok(());
    }

    let delay = delay
        .map(Duration::from_secs)
        .unwrap_or(config.get_insert_delay());
    let mut pacer = FixedDelay(delay);

    let report = synchronize(&mut client, &plan, &mut pacer, &mut print_inserted)?;

    info!(
        "Inserted {} videos into {}",
        report.inserted.len(),
        plan.target
    );

    Ok(())
}

fn command_missing(config: Option<String>, short: bool) -> Result<()> {
    let config = Config::new_from_file(config)?;
    let plan = config.get_sync_plan()?;
    let mut client = YoutubeClient::new(config.get_access_token()?);

    let missing = collect_missing(&mut client, &plan)?;
    print_missing(&missing, short);

    Ok(())
}

fn print_inserted(entry: &PlaylistEntry) {
    println!("{} : {}", entry.video_id, entry.title);
}

fn print_missing(missing: &MissingVideos, short: bool) {
    let mut ids: Vec<&VideoId> = missing.iter().collect();
    ids.sort();

    if !short {
        println!("{} videos missing from target playlist:", ids.len());
    }

    for id in ids {
        if short {
            println!("{}", id);
        } else {
            println!("  https://www.youtube.com/watch?v={}", id);
        }
    }
}
