use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{AuthCommand, AuthDispatch, NoAuthCommand, NoAuthDispatch};
use spotify_api_rs::auth::Credentials;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Local commands first (config, targets, cache, completions, help)
    if let Some(dispatch) = NoAuthDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx).await;
    }

    // Credentialed commands: load config, resolve credentials
    let config = load_config(cli.config.as_deref())?;
    let credentials = resolve_credentials(cli, &config)?;

    if let Some(dispatch) = AuthDispatch::from_cli(cli) {
        return dispatch.execute(&ctx, &config, credentials).await;
    }

    // Fallback for any unhandled commands
    if !cli.quiet {
        println!("Command not yet implemented: {:?}", cli.command);
    }
    Ok(())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Sync(_) => "SYNC_ERROR",
        CommandError::CacheStore(_) => "CACHE_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(error_exit_status(e))
}

/// Returns the numeric exit status for an error.
///
/// Configuration and cache problems are 5, transport problems 3, API
/// rejections 2 (4 when rate-limited), serialization 1.
fn error_exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Config(_) => 5,
        CommandError::CacheStore(_) => 5,
        CommandError::Api(api) => api_exit_status(api),
        CommandError::Sync(spotify_cache_rs::SyncError::Api(api)) => api_exit_status(api),
        CommandError::Sync(spotify_cache_rs::SyncError::Cache(_)) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}

/// Maps an API-layer error to an exit status.
fn api_exit_status(e: &spotify_api_rs::error::Error) -> u8 {
    match e {
        spotify_api_rs::error::Error::Api(api_error) => api_error.exit_code() as u8,
        spotify_api_rs::error::Error::Request(_) => 3,
    }
}

/// Resolves Spotify credentials with priority: flag/env > config file.
///
/// `--client-id`/`--client-secret`/`--refresh-token` (or their
/// `SPOTIFY_*` environment variables, which clap folds into the same
/// flags) override the config file values.
fn resolve_credentials(cli: &Cli, config: &Config) -> commands::Result<Credentials> {
    let client_id = cli
        .client_id
        .clone()
        .or_else(|| config.client_id.clone())
        .ok_or_else(|| missing_credential("client_id", "SPOTIFY_CLIENT_ID"))?;

    let client_secret = cli
        .client_secret
        .clone()
        .or_else(|| config.client_secret.clone())
        .ok_or_else(|| missing_credential("client_secret", "SPOTIFY_CLIENT_SECRET"))?;

    let mut credentials = Credentials::new(client_id, client_secret);
    if let Some(refresh_token) = cli
        .refresh_token
        .clone()
        .or_else(|| config.refresh_token.clone())
    {
        credentials = credentials.with_refresh_token(refresh_token);
    }

    Ok(credentials)
}

/// Builds the error for a credential that was found nowhere.
fn missing_credential(key: &str, env_var: &str) -> CommandError {
    CommandError::Config(format!(
        "{key} not configured; set it in the config file ('sps config set {key} ...') \
         or the {env_var} environment variable"
    ))
}
