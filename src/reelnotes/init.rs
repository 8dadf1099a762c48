use crate::commands::CmdResult;
use crate::config::ReelConfig;
use crate::error::{ReelError, Result};
use crate::manager::ReviewManager;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "REELNOTES_HOME";

pub struct ReelContext {
    pub manager: ReviewManager<FileStore>,
    pub config: ReelConfig,
    pub data_dir: PathBuf,
    /// Outcome of loading the list (seeding, unreadable slot warnings).
    pub load_result: CmdResult,
}

/// Pick the data directory: an explicit path wins, then `REELNOTES_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    ProjectDirs::from("com", "reelnotes", "reelnotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ReelError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(data_dir: PathBuf) -> ReelContext {
    let config = ReelConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        ReelConfig::default()
    });
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "initializing");

    let store = FileStore::new(data_dir.clone());
    let (manager, load_result) = ReviewManager::load(store, &config);

    ReelContext {
        manager,
        config,
        data_dir,
        load_result,
    }
}
