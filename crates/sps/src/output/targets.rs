//! Output formatting for the targets command.

use owo_colors::OwoColorize;

use super::helpers::truncate_str;
use crate::commands::config::TargetConfig;

/// Formats the configured targets as a table.
pub fn format_targets_table(targets: &[TargetConfig], use_colors: bool) -> String {
    if targets.is_empty() {
        return "No sync targets configured. Run 'sps config edit' to add some.\n".to_string();
    }

    let mut out = String::new();
    for (i, target) in targets.iter().enumerate() {
        let name = target.display_name(i);
        let line = format!(
            "{:>2}. {}\n    artist:   {}\n    playlist: {}\n    keyword:  '{}'\n",
            i + 1,
            if use_colors {
                name.green().bold().to_string()
            } else {
                name
            },
            target.artist_id,
            target.playlist_id,
            truncate_str(&target.keyword, 60)
        );
        out.push_str(&line);
    }
    out
}

/// Formats the configured targets as JSON.
pub fn format_targets_json(targets: &[TargetConfig]) -> serde_json::Result<String> {
    let entries: Vec<serde_json::Value> = targets
        .iter()
        .enumerate()
        .map(|(i, target)| {
            serde_json::json!({
                "name": target.display_name(i),
                "artist_id": target.artist_id,
                "playlist_id": target.playlist_id,
                "keyword": target.keyword,
            })
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "targets": entries }))
}
