//! Application state

use anyhow::Result;
use biblio_core::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

const LIBRARY_FILE: &str = "library.json";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Books, users and loans
    pub catalog: Arc<RwLock<Catalog>>,

    /// Directory holding `library.json`; `None` keeps everything in memory
    pub data_path: Option<PathBuf>,
}

impl AppState {
    /// In-memory state with no persistence
    pub fn in_memory(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            data_path: None,
        }
    }

    /// Create state persisted under `data_path`, loading any saved catalog
    pub async fn persistent(data_path: impl Into<PathBuf>) -> Result<Self> {
        let data_path = data_path.into();
        tokio::fs::create_dir_all(&data_path).await?;

        let library_path = data_path.join(LIBRARY_FILE);
        let catalog = match load_catalog(&library_path).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Failed to load library index, starting fresh: {}", e);
                Catalog::default()
            }
        };

        Ok(Self {
            catalog: Arc::new(RwLock::new(catalog)),
            data_path: Some(data_path),
        })
    }

    /// State configured from `BIBLIO_DATA_PATH`
    pub async fn from_env() -> Result<Self> {
        match std::env::var("BIBLIO_DATA_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::persistent(path).await,
            _ => {
                tracing::info!("BIBLIO_DATA_PATH not set, keeping the catalog in memory");
                Ok(Self::in_memory(Catalog::default()))
            }
        }
    }

    /// Get path to library index file
    pub fn library_path(&self) -> Option<PathBuf> {
        self.data_path.as_ref().map(|p| p.join(LIBRARY_FILE))
    }

    /// Persist the catalog, if a data path is configured
    pub async fn save(&self, catalog: &Catalog) -> Result<()> {
        match self.library_path() {
            Some(path) => save_catalog(catalog, &path).await,
            None => Ok(()),
        }
    }
}

/// Load the catalog from a JSON file; a missing file is an empty catalog
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    match tokio::fs::read_to_string(path).await {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Catalog::default()),
        Err(e) => Err(e.into()),
    }
}

/// Save the catalog atomically
/// Writes to a temp file then renames to avoid partial writes
pub async fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(catalog)?;

    // Same directory keeps the rename on one filesystem
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &data).await?;

    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}
