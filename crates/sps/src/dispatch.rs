//! Command dispatch module for routing CLI commands to their handlers.
//!
//! This module provides trait-based dispatch for CLI commands, splitting
//! them into those that need Spotify credentials (sync) and those that
//! run purely locally (config, targets, cache, completions).

use std::path::{Path, PathBuf};

use spotify_api_rs::auth::Credentials;

use crate::cli::{CacheCommands, Cli, Commands, ConfigCommands, Shell};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that can be executed without credentials.
#[allow(async_fn_in_trait)]
pub trait NoAuthCommand {
    /// Execute the command without Spotify credentials.
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that require credentials.
#[allow(async_fn_in_trait)]
pub trait AuthCommand {
    /// Execute the command with resolved credentials.
    async fn execute(
        &self,
        ctx: &CommandContext,
        config: &Config,
        credentials: Credentials,
    ) -> Result<()>;
}

/// Commands that don't require credentials.
pub enum NoAuthDispatch<'a> {
    Config {
        command: &'a Option<ConfigCommands>,
        config_path: Option<&'a Path>,
    },
    Completions(&'a Shell),
    Cache {
        command: &'a Option<CacheCommands>,
        cache_dir: Option<&'a Path>,
    },
    Targets {
        config_path: Option<&'a Path>,
    },
    Help,
}

impl<'a> NoAuthDispatch<'a> {
    /// Try to create a no-auth dispatch from the CLI command.
    /// Returns None if the command requires credentials.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        let config_path = cli.config.as_deref();
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config {
                command,
                config_path,
            }),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            Some(Commands::Cache { command, cache_dir }) => Some(Self::Cache {
                command,
                cache_dir: cache_dir.as_deref(),
            }),
            Some(Commands::Targets) => Some(Self::Targets { config_path }),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoAuthCommand for NoAuthDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config {
                command,
                config_path,
            } => dispatch_config(ctx, command, *config_path).await,
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Cache { command, cache_dir } => match command {
                Some(CacheCommands::Clear) => commands::cache::execute_clear(ctx, *cache_dir),
                Some(CacheCommands::Path) | None => commands::cache::execute_path(ctx, *cache_dir),
            },
            Self::Targets { config_path } => commands::targets::execute(ctx, *config_path),
            Self::Help => {
                if !ctx.quiet {
                    println!("sps - Spotify playlist sync");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
async fn dispatch_config(
    ctx: &CommandContext,
    command: &Option<ConfigCommands>,
    config_path: Option<&Path>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx, config_path),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx, config_path).await,
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::execute_set(ctx, config_path, key, value)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx, config_path),
    }
}

/// Commands that require credentials.
pub enum AuthDispatch<'a> {
    Sync {
        dry_run: bool,
        target: &'a Option<String>,
        cache_dir: &'a Option<PathBuf>,
        clear_cache: bool,
        no_cache: bool,
    },
}

impl<'a> AuthDispatch<'a> {
    /// Try to create an auth dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Sync {
                dry_run,
                target,
                cache_dir,
                clear_cache,
                no_cache,
            }) => Some(Self::Sync {
                dry_run: *dry_run,
                target,
                cache_dir,
                clear_cache: *clear_cache,
                no_cache: *no_cache,
            }),
            _ => None,
        }
    }
}

impl AuthCommand for AuthDispatch<'_> {
    async fn execute(
        &self,
        ctx: &CommandContext,
        config: &Config,
        credentials: Credentials,
    ) -> Result<()> {
        match self {
            Self::Sync {
                dry_run,
                target,
                cache_dir,
                clear_cache,
                no_cache,
            } => {
                let opts = commands::sync::SyncOptions {
                    dry_run: *dry_run,
                    target: (*target).clone(),
                    cache_dir: (*cache_dir).clone(),
                    clear_cache: *clear_cache,
                    no_cache: *no_cache,
                };
                commands::sync::execute(ctx, &opts, config, credentials).await
            }
        }
    }
}
