//! Cache file storage with XDG path support.
//!
//! Each artist's track list is stored as JSON at
//! `<cache-dir>/<artist_id>.json`, where the default cache dir is the
//! XDG cache path for `sps` (`~/.cache/sps/tracks` on Unix). Writes are
//! atomic (tempfile + rename); a missing or unreadable cache file is
//! treated as a cache miss, never an error, so a damaged file simply
//! triggers a fresh fetch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::TrackCache;

/// Subdirectory holding the per-artist cache files.
const TRACKS_SUBDIR: &str = "tracks";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "sps";

/// Errors that can occur during cache storage operations.
#[derive(Debug, Error)]
pub enum CacheStoreError {
    /// Failed to determine XDG cache directory.
    #[error("failed to determine cache directory: no valid home directory found")]
    NoCacheDir,

    /// I/O error during file read.
    #[error("failed to read cache file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write cache file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error while clearing the cache directory.
    #[error("failed to clear cache directory '{path}': {source}")]
    ClearError {
        /// The directory that failed to clear.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for cache store operations.
pub type Result<T> = std::result::Result<T, CacheStoreError>;

/// Persistent storage for per-artist track caches.
///
/// # Example
///
/// ```no_run
/// use spotify_cache_rs::{CacheStore, TrackCache};
///
/// let store = CacheStore::new()?;
///
/// if let Some(cache) = store.load("artist-id")? {
///     println!("{} cached tracks", cache.tracks.len());
/// }
/// # Ok::<(), spotify_cache_rs::CacheStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory holding the per-artist cache files.
    dir: PathBuf,
}

impl CacheStore {
    /// Creates a new `CacheStore` at the default XDG cache directory.
    ///
    /// # Errors
    ///
    /// Returns `CacheStoreError::NoCacheDir` if the home directory cannot
    /// be determined.
    pub fn new() -> Result<Self> {
        let dir = Self::default_dir()?;
        Ok(Self { dir })
    }

    /// Creates a new `CacheStore` rooted at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the default XDG cache directory for track caches.
    ///
    /// On Unix: `~/.cache/sps/tracks`
    /// On macOS: `~/Library/Caches/sps/tracks`
    ///
    /// # Errors
    ///
    /// Returns `CacheStoreError::NoCacheDir` if the home directory cannot
    /// be determined.
    pub fn default_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CacheStoreError::NoCacheDir)?;
        Ok(project_dirs.cache_dir().join(TRACKS_SUBDIR))
    }

    /// Returns the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the cache file path for an artist.
    pub fn path_for(&self, artist_id: &str) -> PathBuf {
        self.dir.join(format!("{artist_id}.json"))
    }

    /// Loads an artist's cached tracks.
    ///
    /// Returns `Ok(None)` when no usable cache exists: the file is
    /// missing, or its contents fail to parse (a damaged cache is a
    /// miss, not an error).
    ///
    /// # Errors
    ///
    /// Returns `CacheStoreError::ReadError` for I/O errors other than
    /// "file not found".
    pub fn load(&self, artist_id: &str) -> Result<Option<TrackCache>> {
        let path = self.path_for(artist_id);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CacheStoreError::ReadError { path, source: e });
            }
        };

        Ok(serde_json::from_str(&contents).ok())
    }

    /// Saves an artist's track cache atomically.
    ///
    /// Creates the cache directory if needed, writes to a temp file, and
    /// renames it over the target so a crash mid-write cannot leave a
    /// truncated cache behind.
    ///
    /// # Errors
    ///
    /// - Returns `CacheStoreError::CreateDirError` if the directory cannot
    ///   be created.
    /// - Returns `CacheStoreError::WriteError` if the file cannot be
    ///   written.
    /// - Returns `CacheStoreError::Json` if serialization fails.
    pub fn save(&self, cache: &TrackCache) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CacheStoreError::CreateDirError {
            path: self.dir.clone(),
            source: e,
        })?;

        let json = serde_json::to_string_pretty(cache)?;

        let path = self.path_for(&cache.artist_id);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| CacheStoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| CacheStoreError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Returns true if a cache file exists for the artist.
    pub fn exists(&self, artist_id: &str) -> bool {
        self.path_for(artist_id).exists()
    }

    /// Removes the entire cache directory.
    ///
    /// Does not return an error if the directory doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `CacheStoreError::ClearError` if the directory cannot be
    /// removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheStoreError::ClearError {
                path: self.dir.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogTrack;

    #[test]
    fn test_default_dir_is_absolute_and_named() {
        let dir = CacheStore::default_dir().expect("should get default dir");
        assert!(dir.is_absolute(), "dir should be absolute: {:?}", dir);

        let dir_str = dir.to_string_lossy();
        assert!(
            dir_str.contains("sps"),
            "dir should contain 'sps': {}",
            dir_str
        );
        assert!(
            dir_str.ends_with("tracks"),
            "dir should end with 'tracks': {}",
            dir_str
        );
    }

    #[test]
    fn test_path_for_appends_artist_id() {
        let store = CacheStore::with_dir("/tmp/sps-test");
        assert_eq!(
            store.path_for("artist-1"),
            PathBuf::from("/tmp/sps-test/artist-1.json")
        );
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let store = CacheStore::with_dir("/nonexistent/sps-cache");
        let result = store.load("artist-1").expect("missing file is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = CacheStore::with_dir(temp_dir.path());

        let cache = TrackCache::new(
            "artist-1",
            vec![CatalogTrack::new("t1", "Summer Remix", "2024-05-01")],
        );
        store.save(&cache).expect("save failed");

        let loaded = store
            .load("artist-1")
            .expect("load failed")
            .expect("cache should exist");
        assert_eq!(loaded, cache);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("tracks");
        let store = CacheStore::with_dir(&nested);

        store
            .save(&TrackCache::new("artist-1", vec![]))
            .expect("save failed");
        assert!(nested.join("artist-1.json").exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = CacheStore::with_dir(temp_dir.path());

        store
            .save(&TrackCache::new("artist-1", vec![]))
            .expect("save failed");

        assert!(store.path_for("artist-1").exists());
        assert!(!temp_dir.path().join("artist-1.tmp").exists());
    }

    #[test]
    fn test_corrupt_cache_is_a_miss() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = CacheStore::with_dir(temp_dir.path());

        fs::create_dir_all(temp_dir.path()).unwrap();
        fs::write(store.path_for("artist-1"), "{ not valid json").unwrap();

        let result = store.load("artist-1").expect("corrupt file is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_exists() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = CacheStore::with_dir(temp_dir.path());

        assert!(!store.exists("artist-1"));
        store
            .save(&TrackCache::new("artist-1", vec![]))
            .expect("save failed");
        assert!(store.exists("artist-1"));
    }

    #[test]
    fn test_clear_removes_directory() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("tracks");
        let store = CacheStore::with_dir(&dir);

        store
            .save(&TrackCache::new("artist-1", vec![]))
            .expect("save failed");
        assert!(dir.exists());

        store.clear().expect("clear failed");
        assert!(!dir.exists());
    }

    #[test]
    fn test_clear_missing_directory_is_ok() {
        let store = CacheStore::with_dir("/nonexistent/sps-cache-clear");
        store.clear().expect("clearing a missing dir should succeed");
    }

    #[test]
    fn test_read_error_message_includes_path() {
        let error = CacheStoreError::ReadError {
            path: PathBuf::from("/home/user/.cache/sps/tracks/a.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read cache file '/home/user/.cache/sps/tracks/a.json': permission denied"
        );
    }

    #[test]
    fn test_clear_error_message_includes_path() {
        let error = CacheStoreError::ClearError {
            path: PathBuf::from("/home/user/.cache/sps/tracks"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "failed to clear cache directory '/home/user/.cache/sps/tracks': permission denied"
        );
    }
}
