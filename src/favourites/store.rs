use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Movie;

/// Errors from persisting the favourites list. Loading never errors; a
/// missing or corrupt payload degrades to an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write favourites to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode favourites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable favourites storage: one JSON file holding the full list.
///
/// The file is the single named slot the favourites live in; every save
/// rewrites it whole. There is no incremental persistence.
pub struct FavouritesStore {
    path: PathBuf,
}

impl FavouritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.local/share/moviedeck/favourites.json` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("moviedeck").join("favourites.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full persisted list. A missing file means no favourites
    /// yet; an unreadable or undecodable payload is logged and treated the
    /// same way rather than surfaced as an error.
    pub fn load(&self) -> Vec<Movie> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read favourites, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(movies) => movies,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "favourites payload is not decodable, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Serializes and writes the full list, creating parent directories on
    /// first use.
    pub fn save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(movies)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, payload).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
