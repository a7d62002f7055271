//! Cache command implementation.
//!
//! Inspect and clear the on-disk track cache.

use std::path::Path;

use spotify_cache_rs::CacheStore;

use super::{CommandContext, Result};

/// Resolves the cache store for the optional directory override.
fn resolve_store(cache_dir: Option<&Path>) -> Result<CacheStore> {
    match cache_dir {
        Some(dir) => Ok(CacheStore::with_dir(dir)),
        None => Ok(CacheStore::new()?),
    }
}

/// Executes the cache path command.
pub fn execute_path(ctx: &CommandContext, cache_dir: Option<&Path>) -> Result<()> {
    let store = resolve_store(cache_dir)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": store.dir().display().to_string(),
            "exists": store.dir().exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", store.dir().display());
    }

    Ok(())
}

/// Executes the cache clear command.
pub fn execute_clear(ctx: &CommandContext, cache_dir: Option<&Path>) -> Result<()> {
    let store = resolve_store(cache_dir)?;
    store.clear()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": store.dir().display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Cleared cache directory '{}'", store.dir().display());
    }

    Ok(())
}
