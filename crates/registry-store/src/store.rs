//! Persistent storage for the registry document.

use crate::error::StoreError;
use crate::types::MemberRegistry;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// File-backed store holding the registry as pretty-printed JSON.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the registry document.
    ///
    /// A missing file yields an empty registry; an unreadable file or
    /// malformed JSON is an error.
    pub async fn load(&self) -> Result<MemberRegistry, StoreError> {
        if !self.path.exists() {
            info!(
                "Registry file not found at {:?}, starting with empty registry",
                self.path
            );
            return Ok(MemberRegistry::new());
        }

        let data = fs::read(&self.path).await?;
        let registry: MemberRegistry = serde_json::from_slice(&data)?;

        info!(
            pending = registry.pending_count(),
            approved = registry.approved_count(),
            "Loaded registry from {:?}",
            self.path
        );
        Ok(registry)
    }

    /// Save the whole registry document.
    ///
    /// Writes to a temp file and renames over the target so a crash
    /// mid-write never leaves a truncated document behind.
    pub async fn save(&self, registry: &MemberRegistry) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(registry)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!("Saved registry ({} bytes) to {:?}", data.len(), self.path);
        Ok(())
    }

    /// Check if a registry file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// In-memory store for tests or when persistence is disabled.
pub struct MemoryStore;

impl MemoryStore {
    /// "Save" does nothing for the memory store.
    pub async fn save(&self, _registry: &MemberRegistry) -> Result<(), StoreError> {
        debug!("Memory store: save is a no-op");
        Ok(())
    }

    /// "Load" returns an empty registry.
    pub async fn load(&self) -> Result<MemberRegistry, StoreError> {
        debug!("Memory store: returning empty registry");
        Ok(MemberRegistry::new())
    }
}

/// Storage backend with or without durable persistence.
pub enum Store {
    /// JSON file on disk
    File(FileStore),
    /// In-memory only (state is lost on restart)
    Memory(MemoryStore),
}

impl Store {
    /// File-backed store at the given path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Store::File(FileStore::new(path))
    }

    /// In-memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore)
    }

    /// Load the registry.
    pub async fn load(&self) -> Result<MemberRegistry, StoreError> {
        match self {
            Store::File(s) => s.load().await,
            Store::Memory(s) => s.load().await,
        }
    }

    /// Save the registry.
    pub async fn save(&self, registry: &MemberRegistry) -> Result<(), StoreError> {
        match self {
            Store::File(s) => s.save(registry).await,
            Store::Memory(s) => s.save(registry).await,
        }
    }
}
