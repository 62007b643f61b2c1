// src/modules/store/snapshot.rs
//
// Durable persistence for the local content store: one namespaced JSON
// blob holding the entire state tree, written on every mutation and read
// once at process start. The session flag is NOT part of the snapshot; it
// lives in the short-lived session store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::modules::store::state::StoreState;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Store mutations are synchronous, so persistence is too.
pub trait SnapshotStore: Send + Sync {
    /// None when no snapshot has ever been written.
    fn load(&self) -> Result<Option<StoreState>, SnapshotError>;

    fn save(&self, state: &StoreState) -> Result<(), SnapshotError>;
}

impl<T: SnapshotStore> SnapshotStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<StoreState>, SnapshotError> {
        (**self).load()
    }

    fn save(&self, state: &StoreState) -> Result<(), SnapshotError> {
        (**self).save(state)
    }
}

//
// ──────────────────────────────────────────────────────────
// File-backed snapshots
// ──────────────────────────────────────────────────────────
//

pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub const DEFAULT_FILE_NAME: &'static str = "portfolio-cms-store.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Write to a sibling temp file, then rename over the target, so the
    /// snapshot on disk is always either the previous or the new contents.
    fn atomic_write(&self, content: &str) -> Result<(), SnapshotError> {
        if let Some(dir) = self.dir() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<StoreState>, SnapshotError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &StoreState) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(state)?;
        self.atomic_write(&content)
    }
}

//
// ──────────────────────────────────────────────────────────
// In-memory snapshots (tests, ephemeral wiring)
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct MemorySnapshotStore {
    state: Mutex<Option<StoreState>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<StoreState>, SnapshotError> {
        Ok(self.state.lock().expect("snapshot state poisoned").clone())
    }

    fn save(&self, state: &StoreState) -> Result<(), SnapshotError> {
        *self.state.lock().expect("snapshot state poisoned") = Some(state.clone());
        Ok(())
    }
}
