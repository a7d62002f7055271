//! Sync command implementation.
//!
//! Runs every configured target: fetch the artist's catalog (via the
//! track cache), filter titles by the target's keyword, and add the
//! tracks missing from the playlist.

use std::path::PathBuf;

use spotify_api_rs::auth::{request_access_token, Credentials};
use spotify_api_rs::client::SpotifyClient;
use spotify_cache_rs::search::TrackMatcher;
use spotify_cache_rs::{CacheStore, CatalogTrack, TrackSync};

use super::config::{Config, TargetConfig};
use super::{CommandContext, CommandError, Result};
use crate::output::sync as report;

/// Options for the sync command.
#[derive(Debug)]
pub struct SyncOptions {
    /// Report without modifying playlists.
    pub dry_run: bool,
    /// Only run the target with this name.
    pub target: Option<String>,
    /// Cache directory override.
    pub cache_dir: Option<PathBuf>,
    /// Clear the cache before running.
    pub clear_cache: bool,
    /// Bypass the cache entirely.
    pub no_cache: bool,
}

/// Per-target outcome, collected for the JSON summary.
struct TargetOutcome {
    name: String,
    artist: String,
    playlist: String,
    matched: usize,
    new_tracks: usize,
    added: usize,
    fallback: Option<String>,
}

/// Executes the sync command.
///
/// # Errors
///
/// Returns an error when no targets are selected, authentication fails,
/// or an API/cache operation fails mid-run. A malformed keyword is NOT an
/// error: it degrades to substring matching with a warning.
pub async fn execute(
    ctx: &CommandContext,
    opts: &SyncOptions,
    config: &Config,
    credentials: Credentials,
) -> Result<()> {
    let targets = select_targets(config, opts.target.as_deref())?;

    let store = match &opts.cache_dir {
        Some(dir) => CacheStore::with_dir(dir),
        None => CacheStore::new()?,
    };

    if opts.clear_cache {
        store.clear()?;
        if !ctx.quiet && !ctx.json_output {
            eprintln!("Cleared cache directory '{}'", store.dir().display());
        }
    }

    let http = reqwest::Client::new();
    let token = request_access_token(&http, &credentials).await?;
    let client = SpotifyClient::new(token.access_token);

    let cache_status = if opts.no_cache {
        "disabled".to_string()
    } else {
        format!("enabled ({})", store.dir().display())
    };
    let sync = if opts.no_cache {
        TrackSync::without_cache(client, store)
    } else {
        TrackSync::new(client, store)
    };

    report::print_startup(ctx, targets.len(), &cache_status, opts.dry_run);

    let total = targets.len();
    let mut outcomes = Vec::with_capacity(total);
    for (i, (name, target)) in targets.iter().enumerate() {
        report::print_target_header(ctx, i + 1, total, name);

        let outcome = process_target(ctx, opts, &sync, name, target).await?;
        outcomes.push(outcome);

        if !ctx.json_output && !ctx.quiet {
            println!();
        }
    }

    let total_added: usize = outcomes.iter().map(|o| o.new_tracks).sum();
    report::print_run_summary(ctx, total_added, opts.dry_run);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&run_summary_json(&outcomes, opts.dry_run))?);
    }

    Ok(())
}

/// Processes one target; returns what happened for the summary.
async fn process_target(
    ctx: &CommandContext,
    opts: &SyncOptions,
    sync: &TrackSync,
    name: &str,
    target: &TargetConfig,
) -> Result<TargetOutcome> {
    let artist = sync.client().artist(&target.artist_id).await?;
    let playlist = sync.client().playlist(&target.playlist_id).await?;
    report::print_target_details(ctx, &artist.name, &playlist.name, &target.keyword);

    let existing = sync.client().playlist_track_ids(&target.playlist_id).await?;
    let (tracks, summary) = sync.artist_tracks(&target.artist_id).await?;
    report::print_refresh_summary(ctx, &summary);

    let matcher = TrackMatcher::compile(&target.keyword);
    if let Some(error) = matcher.fallback_error() {
        report::print_fallback_warning(ctx, &target.keyword, error);
    }

    let matched: Vec<&CatalogTrack> = tracks
        .iter()
        .filter(|track| matcher.matches(&track.name))
        .collect();
    report::print_match_summary(ctx, &target.keyword, matched.len(), matcher.is_expression());

    let new_tracks: Vec<&CatalogTrack> = matched
        .iter()
        .copied()
        .filter(|track| !existing.contains(&track.id))
        .collect();

    let mut added = 0;
    if new_tracks.is_empty() {
        report::print_no_new_tracks(ctx);
    } else {
        report::print_track_list(ctx, &new_tracks, &playlist.name, opts.dry_run);

        if !opts.dry_run {
            let ids: Vec<String> = new_tracks.iter().map(|track| track.id.clone()).collect();
            sync.client()
                .add_tracks_to_playlist(&target.playlist_id, &ids)
                .await?;
            added = ids.len();
            report::print_added_confirmation(ctx);
        }
    }

    Ok(TargetOutcome {
        name: name.to_string(),
        artist: artist.name,
        playlist: playlist.name,
        matched: matched.len(),
        new_tracks: new_tracks.len(),
        added,
        fallback: matcher.fallback_error().map(|e| e.to_string()),
    })
}

/// Resolves the targets to run, optionally narrowed by name.
fn select_targets<'a>(
    config: &'a Config,
    filter: Option<&str>,
) -> Result<Vec<(String, &'a TargetConfig)>> {
    if config.targets.is_empty() {
        return Err(CommandError::Config(
            "no sync targets configured; run 'sps config edit' to add some".to_string(),
        ));
    }

    let named: Vec<(String, &TargetConfig)> = config
        .targets
        .iter()
        .enumerate()
        .map(|(i, target)| (target.display_name(i), target))
        .collect();

    match filter {
        None => Ok(named),
        Some(wanted) => {
            let selected: Vec<_> = named
                .into_iter()
                .filter(|(name, _)| name == wanted)
                .collect();
            if selected.is_empty() {
                return Err(CommandError::Config(format!(
                    "no sync target named '{wanted}'"
                )));
            }
            Ok(selected)
        }
    }
}

/// Builds the machine-readable run summary.
fn run_summary_json(outcomes: &[TargetOutcome], dry_run: bool) -> serde_json::Value {
    serde_json::json!({
        "dry_run": dry_run,
        "total_new_tracks": outcomes.iter().map(|o| o.new_tracks).sum::<usize>(),
        "total_added": outcomes.iter().map(|o| o.added).sum::<usize>(),
        "targets": outcomes.iter().map(|o| serde_json::json!({
            "name": o.name,
            "artist": o.artist,
            "playlist": o.playlist,
            "matched": o.matched,
            "new_tracks": o.new_tracks,
            "added": o.added,
            "keyword_fallback": o.fallback,
        })).collect::<Vec<_>>(),
    })
}
