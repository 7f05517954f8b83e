use crate::model::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use tracing::warn;

/// On-disk shape of the cache: one object, one id list, newest last.
#[derive(Debug, Serialize, Deserialize)]
struct SeenFile {
    seen_ids: Vec<String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Bounded, insertion-ordered set of listing ids already surfaced in a
/// prior run. Exists purely to suppress re-notification; it is not a source
/// of truth about listings, so occasional dedup misses after eviction are
/// acceptable. Order is kept in the deque, membership in the set.
pub struct SeenCache {
    ids: VecDeque<String>,
    index: HashSet<String>,
    capacity: usize,
}

impl SeenCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: VecDeque::new(),
            index: HashSet::new(),
            capacity,
        }
    }

    /// Loads the persisted cache. A missing or unreadable file degrades to
    /// an empty cache: everything gets treated as new, which risks a
    /// duplicate alert but never a missed one. Never fails the run.
    pub fn load(path: &Path, capacity: usize) -> Self {
        let mut cache = Self::new(capacity);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Seen cache unreadable, starting empty: {e}");
                }
                return cache;
            }
        };

        match serde_json::from_str::<SeenFile>(&content) {
            Ok(file) => {
                for id in file.seen_ids {
                    cache.insert(id);
                }
            }
            Err(e) => warn!("Seen cache corrupt, starting empty: {e}"),
        }

        cache
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Records an id, evicting the oldest entries beyond capacity. Returns
    /// false when the id was already present.
    pub fn insert(&mut self, id: String) -> bool {
        if !self.index.insert(id.clone()) {
            return false;
        }
        self.ids.push_back(id);
        while self.ids.len() > self.capacity {
            if let Some(oldest) = self.ids.pop_front() {
                self.index.remove(&oldest);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Persists the cache. Callers log the error and carry on; a caching
    /// problem must not invalidate the run's classification work.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = SeenFile {
            seen_ids: self.ids.iter().cloned().collect(),
            updated_at: Some(Utc::now()),
        };
        let json = serde_json::to_string(&file)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
