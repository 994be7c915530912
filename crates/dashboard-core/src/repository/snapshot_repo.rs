//! Snapshot Repository
//!
//! Loads and persists the dashboard snapshot and theme preference through
//! any [`KeyValueStorage`].

use super::migrate;
use super::traits::KeyValueStorage;
use crate::config::DashboardConfig;
use crate::domain::{DomainResult, Snapshot, Theme};

pub struct SnapshotRepository<S: KeyValueStorage> {
    storage: S,
    data_key: String,
    theme_key: String,
}

impl<S: KeyValueStorage> SnapshotRepository<S> {
    pub fn new(storage: S, config: &DashboardConfig) -> Self {
        Self {
            storage,
            data_key: config.data_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key the raw blob is moved to when it cannot be decoded
    pub fn corrupt_key(&self) -> String {
        format!("{}.corrupt", self.data_key)
    }

    /// Stored snapshot, migrated to the current schema; `None` on first run
    pub fn load(&self) -> DomainResult<Option<Snapshot>> {
        self.storage
            .read(&self.data_key)?
            .map(|raw| migrate::decode(&raw))
            .transpose()
    }

    /// Stored snapshot, or the seed content when nothing usable is stored.
    ///
    /// An undecodable blob is copied to [`corrupt_key`](Self::corrupt_key)
    /// before the seed replaces it. Storage failures are logged; the
    /// returned snapshot is still usable in memory.
    pub fn load_or_seed(&self) -> Snapshot {
        match self.load() {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    lists = snapshot.todos.len(),
                    categories = snapshot.notes.len(),
                    collections = snapshot.links.len(),
                    "dashboard snapshot loaded"
                );
                snapshot
            }
            Ok(None) => {
                tracing::info!("no stored snapshot, seeding dashboard");
                self.seed()
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored snapshot unreadable, seeding dashboard");
                self.quarantine();
                self.seed()
            }
        }
    }

    pub fn save(&self, snapshot: &Snapshot) -> DomainResult<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.storage.write(&self.data_key, &raw)?;
        tracing::trace!(bytes = raw.len(), "dashboard snapshot saved");
        Ok(())
    }

    /// Theme preference; missing or unreadable values mean [`Theme::System`]
    pub fn load_theme(&self) -> Theme {
        match self.storage.read(&self.theme_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, value = %raw, "unknown theme preference");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unavailable");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> DomainResult<()> {
        let raw = serde_json::to_string(&theme)?;
        self.storage.write(&self.theme_key, &raw)
    }

    /// Wipe stored data and start over from the seed
    pub fn reset(&self) -> DomainResult<Snapshot> {
        self.storage.remove(&self.data_key)?;
        let seed = Snapshot::seed();
        self.save(&seed)?;
        Ok(seed)
    }

    fn seed(&self) -> Snapshot {
        let seed = Snapshot::seed();
        if let Err(err) = self.save(&seed) {
            tracing::warn!(error = %err, "could not persist seed snapshot");
        }
        seed
    }

    fn quarantine(&self) {
        let raw = match self.storage.read(&self.data_key) {
            Ok(Some(raw)) => raw,
            _ => return,
        };
        if let Err(err) = self.storage.write(&self.corrupt_key(), &raw) {
            tracing::warn!(error = %err, "could not keep unreadable snapshot");
        }
    }
}
