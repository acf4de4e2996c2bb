use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, info, warn};

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Costify";
const APP_NAME: &str = "Costify";

/// Overrides the storage directory when set.
pub const DATA_DIR_ENV: &str = "COSTIFY_DATA_DIR";

/// Named records kept in the storage directory, one JSON array each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Inventory,
    GlobalCosts,
}

impl Record {
    pub fn file_name(self) -> &'static str {
        match self {
            Record::Inventory => "costify_inventory.json",
            Record::GlobalCosts => "costify_global_costs.json",
        }
    }
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Reads one record. Missing or malformed data yields an empty collection.
pub fn load_record<T: DeserializeOwned>(dir: &Path, record: Record) -> Vec<T> {
    let path = dir.join(record.file_name());
    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved record yet");
            return Vec::new();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read saved record");
            return Vec::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(items) => items,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "discarding malformed saved record");
            Vec::new()
        }
    }
}

pub fn save_record<T: Serialize>(
    dir: &Path,
    record: Record,
    items: &[T],
) -> Result<(), PersistSaveError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(items)?;
    fs::write(dir.join(record.file_name()), json)?;
    Ok(())
}

pub fn load_persisted_state() -> PersistedState {
    let Some(dir) = data_dir() else {
        warn!("no storage directory available; starting empty");
        return PersistedState::default();
    };
    let state = PersistedState {
        inventory: load_record(&dir, Record::Inventory),
        presets: load_record(&dir, Record::GlobalCosts),
    };
    info!(
        dir = %dir.display(),
        calculations = state.inventory.len(),
        presets = state.presets.len(),
        "loaded saved state"
    );
    state
}

pub fn save_persisted_record<T: Serialize>(
    record: Record,
    items: &[T],
) -> Result<(), PersistSaveError> {
    let dir = data_dir().ok_or(PersistSaveError::StorageUnavailable)?;
    save_record(&dir, record, items)
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
