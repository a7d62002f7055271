//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/sps/config.yaml.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Minimum secret length to apply masking (show first and last N characters).
const SECRET_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked secret.
const SECRET_MASK_VISIBLE_CHARS: usize = 4;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# sps - Spotify playlist sync configuration
# https://github.com/itakeshi/spotify-sync-rs

# Spotify application credentials (https://developer.spotify.com/dashboard)
# client_id: "your-client-id"
# client_secret: "your-client-secret"

# Refresh token for playlist modification (obtain once with any OAuth
# helper; omit for read-only/dry-run use)
# refresh_token: "your-refresh-token"

# Sync targets: tracks of `artist_id` matching `keyword` are added to
# `playlist_id`. The keyword may be a boolean expression:
#   keyword: "Remix AND NOT Live"
targets: []
#  - name: "Example singles"
#    artist_id: "0OdUWJ0sBjDrqHygGUXeCF"
#    playlist_id: "37i9dQZF1DXcBWIGoYBM5M"
#    keyword: "Remix"
"#;

/// Configuration file structure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Spotify application client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Spotify application client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Refresh token for user-scoped (playlist-modifying) access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Sync targets.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// One sync target: an artist whose matching tracks feed a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Display name for progress output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The artist whose catalog is scanned.
    pub artist_id: String,

    /// The playlist that receives matching tracks.
    pub playlist_id: String,

    /// Keyword or boolean search expression matched against track titles.
    pub keyword: String,
}

impl TargetConfig {
    /// The target's display name, falling back to "Target N" (1-based).
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Target {}", index + 1))
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/sps/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/sps
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("sps"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("sps"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
///
/// Resolution order: the `--config` flag, the `SPS_CONFIG` environment
/// variable, then the XDG default.
pub fn get_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = env::var("SPS_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.yaml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default (empty) configuration; credentials
/// can still arrive via flags or environment variables.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = get_config_path(override_path)?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = serde_yaml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config, override_path: Option<&Path>) -> Result<()> {
    let path = get_config_path(override_path)?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = serde_yaml::to_string(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext, override_path: Option<&Path>) -> Result<()> {
    let config = load_config(override_path)?;
    let path = get_config_path(override_path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "client_id": config.client_id,
            "client_secret": config.client_secret.as_deref().map(mask_secret),
            "refresh_token": config.refresh_token.as_deref().map(mask_secret),
            "targets": config.targets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            if let Some(ref client_id) = config.client_id {
                println!("client_id: {}", client_id);
            }
            if let Some(ref client_secret) = config.client_secret {
                println!("client_secret: {}", mask_secret(client_secret));
            }
            if let Some(ref refresh_token) = config.refresh_token {
                println!("refresh_token: {}", mask_secret(refresh_token));
            }

            println!("\ntargets ({}):", config.targets.len());
            for (i, target) in config.targets.iter().enumerate() {
                println!(
                    "  {}. {} [artist {} -> playlist {}] keyword: '{}'",
                    i + 1,
                    target.display_name(i),
                    target.artist_id,
                    target.playlist_id,
                    target.keyword
                );
            }
        } else {
            println!("(No config file exists. Run 'sps config edit' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config edit command.
pub async fn execute_edit(ctx: &CommandContext, override_path: Option<&Path>) -> Result<()> {
    let path = get_config_path(override_path)?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    // Create default config if it doesn't exist
    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

        if !ctx.quiet && !ctx.json_output {
            eprintln!("Created default config at: {}", path.display());
        }
    }

    // Get editor from environment
    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    if ctx.verbose {
        eprintln!("Opening {} with {}", path.display(), editor);
    }

    // Open editor (async to avoid blocking the tokio runtime)
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .await
        .map_err(|e| CommandError::Config(format!("Failed to open editor '{}': {}", editor, e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if status.success() {
            println!("Config saved.");
        } else {
            eprintln!("Editor exited with error");
        }
    }

    Ok(())
}

/// Executes the config set command.
///
/// Only the scalar credential keys are settable; targets are edited in
/// the file directly.
pub fn execute_set(
    ctx: &CommandContext,
    override_path: Option<&Path>,
    key: &str,
    value: &str,
) -> Result<()> {
    let mut config = load_config(override_path)?;
    let path = get_config_path(override_path)?;

    match key {
        "client_id" => config.client_id = Some(value.to_string()),
        "client_secret" => config.client_secret = Some(value.to_string()),
        "refresh_token" => config.refresh_token = Some(value.to_string()),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: client_id, client_secret, refresh_token \
                 (edit targets with 'sps config edit')",
                key
            )));
        }
    }

    save_config(&config, override_path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": key,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {}", key);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext, override_path: Option<&Path>) -> Result<()> {
    let path = get_config_path(override_path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Masks a secret for display, showing only the first and last N characters.
///
/// Uses character-based (not byte-based) indexing to safely handle
/// multi-byte UTF-8 characters.
fn mask_secret(secret: &str) -> String {
    let char_count = secret.chars().count();
    if char_count > SECRET_MASK_MIN_LENGTH {
        let prefix: String = secret.chars().take(SECRET_MASK_VISIBLE_CHARS).collect();
        let suffix: String = secret
            .chars()
            .skip(char_count - SECRET_MASK_VISIBLE_CHARS)
            .collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.client_id.is_none());
        assert!(config.client_secret.is_none());
        assert!(config.refresh_token.is_none());
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
client_id: "abc123"
client_secret: "def456"
refresh_token: "rt-789"
targets:
  - name: "Singles"
    artist_id: "artist-1"
    playlist_id: "playlist-1"
    keyword: "Remix AND NOT Live"
  - artist_id: "artist-2"
    playlist_id: "playlist-2"
    keyword: "acoustic"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.client_id.as_deref(), Some("abc123"));
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].keyword, "Remix AND NOT Live");
        assert!(config.targets[1].name.is_none());
    }

    #[test]
    fn test_config_deserialization_missing_target_field_fails() {
        let yaml = r#"
targets:
  - name: "Broken"
    artist_id: "artist-1"
    keyword: "remix"
"#;
        let result: std::result::Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err(), "playlist_id is required");
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_config_serialization_skips_missing_credentials() {
        let config = Config {
            client_id: Some("abc".to_string()),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("client_id"));
        assert!(!yaml.contains("client_secret"));
        assert!(!yaml.contains("refresh_token"));
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.targets.is_empty());
        assert!(config.client_id.is_none());
    }

    #[test]
    fn test_target_display_name() {
        let named = TargetConfig {
            name: Some("My Singles".to_string()),
            artist_id: "a".to_string(),
            playlist_id: "p".to_string(),
            keyword: "k".to_string(),
        };
        assert_eq!(named.display_name(0), "My Singles");

        let unnamed = TargetConfig {
            name: None,
            artist_id: "a".to_string(),
            playlist_id: "p".to_string(),
            keyword: "k".to_string(),
        };
        assert_eq!(unnamed.display_name(0), "Target 1");
        assert_eq!(unnamed.display_name(2), "Target 3");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
        assert_eq!(mask_secret("123456789"), "1234...6789");
        assert_eq!(mask_secret("12345678"), "****");
        assert_eq!(mask_secret("short"), "****");
    }

    #[test]
    fn test_mask_secret_utf8() {
        // Multi-byte characters are counted as characters, not bytes.
        assert_eq!(mask_secret("секретныйтокен"), "секр...окен");
        assert_eq!(mask_secret("секрет"), "****");
    }

    #[test]
    #[serial]
    fn test_get_config_path_flag_override_wins() {
        let original = env::var("SPS_CONFIG").ok();
        env::set_var("SPS_CONFIG", "/tmp/env-config.yaml");

        let path = get_config_path(Some(Path::new("/tmp/flag-config.yaml"))).unwrap();

        if let Some(val) = original {
            env::set_var("SPS_CONFIG", val);
        } else {
            env::remove_var("SPS_CONFIG");
        }

        assert_eq!(path, PathBuf::from("/tmp/flag-config.yaml"));
    }

    #[test]
    #[serial]
    fn test_get_config_path_env_override() {
        let original = env::var("SPS_CONFIG").ok();
        env::set_var("SPS_CONFIG", "/tmp/env-config.yaml");

        let path = get_config_path(None).unwrap();

        if let Some(val) = original {
            env::set_var("SPS_CONFIG", val);
        } else {
            env::remove_var("SPS_CONFIG");
        }

        assert_eq!(path, PathBuf::from("/tmp/env-config.yaml"));
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_is_default() {
        let original = env::var("SPS_CONFIG").ok();
        env::remove_var("SPS_CONFIG");

        let config =
            load_config(Some(Path::new("/nonexistent/sps/config.yaml"))).unwrap();

        if let Some(val) = original {
            env::set_var("SPS_CONFIG", val);
        }

        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, "client_id: \"from-file\"").unwrap();
        writeln!(file, "targets: []").unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        assert_eq!(config.client_id.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_load_config_invalid_yaml_is_config_error() {
        use std::io::Write;

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, "targets: [ this is not").unwrap();

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            refresh_token: None,
            targets: vec![TargetConfig {
                name: Some("Singles".to_string()),
                artist_id: "a1".to_string(),
                playlist_id: "p1".to_string(),
                keyword: "Remix".to_string(),
            }],
        };

        save_config(&config, Some(&config_path)).unwrap();
        let reloaded = load_config(Some(&config_path)).unwrap();

        assert_eq!(reloaded.client_id.as_deref(), Some("id"));
        assert_eq!(reloaded.targets, config.targets);
    }
}
