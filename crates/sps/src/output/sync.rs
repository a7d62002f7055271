//! Console reporting for the sync command.
//!
//! All functions are no-ops in quiet or JSON mode (the sync command emits
//! a single JSON summary instead); warnings go to stderr regardless of
//! JSON mode so they never pollute machine-readable stdout.

use owo_colors::OwoColorize;
use spotify_cache_rs::search::SearchError;
use spotify_cache_rs::{CatalogTrack, RefreshSummary};

use super::helpers::{count_tracks, separator};
use crate::commands::CommandContext;

/// Number of tracks listed before eliding (non-verbose mode).
const TRACK_LIST_PREVIEW: usize = 5;

/// Prints the run banner: target count, cache status, dry-run notice.
pub fn print_startup(ctx: &CommandContext, target_count: usize, cache_status: &str, dry_run: bool) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    println!(
        "Running {} sync target{}",
        target_count,
        if target_count == 1 { "" } else { "s" }
    );
    println!("Cache: {cache_status}");
    if dry_run {
        if ctx.use_colors {
            println!("{}", "DRY RUN: no playlists will be modified".yellow());
        } else {
            println!("DRY RUN: no playlists will be modified");
        }
    }
    println!();
}

/// Prints the header that introduces one target.
pub fn print_target_header(ctx: &CommandContext, index: usize, total: usize, name: &str) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    println!("{}", separator());
    if ctx.use_colors {
        println!("({}/{}) {}", index, total, name.green().bold());
    } else {
        println!("({}/{}) {}", index, total, name);
    }
    println!("{}", separator());
}

/// Prints resolved artist/playlist/keyword details (verbose mode only).
pub fn print_target_details(
    ctx: &CommandContext,
    artist_name: &str,
    playlist_name: &str,
    keyword: &str,
) {
    if ctx.json_output || ctx.quiet || !ctx.verbose {
        return;
    }

    println!("Artist:   {artist_name}");
    println!("Playlist: {playlist_name}");
    println!("Keyword:  '{keyword}'");
}

/// Prints where the artist's track list came from.
pub fn print_refresh_summary(ctx: &CommandContext, summary: &RefreshSummary) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    if summary.from_cache {
        if summary.new_tracks > 0 {
            println!(
                "Loaded {} from cache, found {} new",
                count_tracks(summary.total - summary.new_tracks),
                count_tracks(summary.new_tracks)
            );
        } else {
            println!(
                "Loaded {} from cache, no new releases",
                count_tracks(summary.total)
            );
        }
    } else {
        println!("Fetched {} from the API", count_tracks(summary.total));
    }
}

/// Prints how many tracks matched the keyword.
pub fn print_match_summary(
    ctx: &CommandContext,
    keyword: &str,
    matched: usize,
    is_expression: bool,
) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    let kind = if is_expression {
        "expression"
    } else {
        "keyword"
    };
    println!(
        "{} match the {} '{}'",
        count_tracks(matched),
        kind,
        keyword
    );
}

/// Warns that a boolean-looking keyword failed to parse and substring
/// matching is used instead. Goes to stderr; shown even in JSON mode.
pub fn print_fallback_warning(ctx: &CommandContext, keyword: &str, error: &SearchError) {
    if ctx.quiet {
        return;
    }

    let message = format!(
        "warning: could not parse '{keyword}' as a search expression ({error}); \
         falling back to plain substring search"
    );
    if ctx.use_colors {
        eprintln!("{}", message.yellow());
    } else {
        eprintln!("{message}");
    }
}

/// Prints the tracks about to be (or that would be) added.
///
/// Non-verbose mode lists the first five and elides the rest; verbose
/// mode lists everything with release dates.
pub fn print_track_list(
    ctx: &CommandContext,
    tracks: &[&CatalogTrack],
    playlist_name: &str,
    dry_run: bool,
) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    if dry_run {
        println!(
            "[DRY RUN] {} would be added to '{}':",
            count_tracks(tracks.len()),
            playlist_name
        );
    } else {
        println!(
            "Adding {} to '{}'...",
            count_tracks(tracks.len()),
            playlist_name
        );
    }

    for (i, track) in tracks.iter().enumerate() {
        if ctx.verbose {
            println!("  {:02}. {} (released {})", i + 1, track.name, track.release_date);
        } else if i < TRACK_LIST_PREVIEW {
            println!("  {:02}. {}", i + 1, track.name);
        } else {
            println!("  ... and {}", count_tracks(tracks.len() - TRACK_LIST_PREVIEW));
            break;
        }
    }
}

/// Confirms that tracks were added.
pub fn print_added_confirmation(ctx: &CommandContext) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    if ctx.use_colors {
        println!("  {}", "Added to playlist".green());
    } else {
        println!("  Added to playlist");
    }
}

/// Notes that a target produced nothing new.
pub fn print_no_new_tracks(ctx: &CommandContext) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    println!("  No new tracks to add");
}

/// Prints the final run summary.
pub fn print_run_summary(ctx: &CommandContext, total_added: usize, dry_run: bool) {
    if ctx.json_output || ctx.quiet {
        return;
    }

    println!("{}", separator());
    let message = if dry_run {
        format!("[DRY RUN] {} would be added in total", count_tracks(total_added))
    } else {
        format!("Done: added {} in total", count_tracks(total_added))
    };
    if ctx.use_colors {
        println!("{}", message.green().bold());
    } else {
        println!("{message}");
    }
    println!("{}", separator());
}
