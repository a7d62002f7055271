//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sps CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sps - sync artist catalogs into Spotify playlists
#[derive(Parser, Debug)]
#[command(name = "sps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (default: ~/.config/sps/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show per-track details)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the Spotify client id (default: from config)
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Override the Spotify client secret (default: from config)
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Override the refresh token (default: from config)
    #[arg(long, global = true, env = "SPOTIFY_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured sync targets
    #[command(alias = "s")]
    Sync {
        /// Show what would be added without modifying playlists
        #[arg(short = 'd', long)]
        dry_run: bool,

        /// Only run the target with this name
        #[arg(long)]
        target: Option<String>,

        /// Directory for track cache files (default: XDG cache dir)
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Clear all cached track lists before running
        #[arg(long)]
        clear_cache: bool,

        /// Disable the track cache (always fetch from the API)
        #[arg(long)]
        no_cache: bool,
    },

    /// List the configured sync targets
    #[command(alias = "t")]
    Targets,

    /// Inspect and manage the track cache
    Cache {
        /// Directory for track cache files (default: XDG cache dir)
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: Option<CacheCommands>,
    },

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Print the cache directory path (default)
    Path,

    /// Delete all cached track lists
    Clear,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
