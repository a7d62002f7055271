//! Targets command implementation.
//!
//! Lists the sync targets from the configuration file.

use std::path::Path;

use super::config::load_config;
use super::{CommandContext, Result};
use crate::output::targets::{format_targets_json, format_targets_table};

/// Executes the targets command.
pub fn execute(ctx: &CommandContext, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    if ctx.json_output {
        println!("{}", format_targets_json(&config.targets)?);
    } else if !ctx.quiet {
        print!("{}", format_targets_table(&config.targets, ctx.use_colors));
    }

    Ok(())
}
