//! In-memory retention of generated report bundles
//!
//! Reports exist only for the download step of the current process; there is
//! no persistence. The store keeps the most recent bundles up to a fixed
//! capacity and evicts the oldest beyond it.

use chrono::{DateTime, Utc};
use ppr_report::ReportBundle;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A generated bundle plus its retention metadata
#[derive(Debug)]
pub struct StoredBundle {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bundle: ReportBundle,
}

/// Bounded, process-lifetime store of generated report bundles
#[derive(Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<StoreInner>>,
    capacity: usize,
}

struct StoreInner {
    bundles: HashMap<Uuid, Arc<StoredBundle>>,
    order: VecDeque<Uuid>,
}

impl ReportStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                bundles: HashMap::new(),
                order: VecDeque::new(),
            })),
            capacity: capacity.max(1),
        }
    }

    /// Insert a freshly generated bundle, evicting the oldest entry if the
    /// store is full. Returns the id the bundle is retrievable under.
    pub fn insert(&self, bundle: ReportBundle) -> Arc<StoredBundle> {
        let stored = Arc::new(StoredBundle {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            bundle,
        });

        let mut inner = self.write_lock();
        while inner.order.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.bundles.remove(&oldest);
                tracing::debug!(%oldest, "evicted report bundle");
            }
        }
        inner.order.push_back(stored.id);
        inner.bundles.insert(stored.id, Arc::clone(&stored));

        stored
    }

    /// Look up a stored bundle by id
    pub fn get(&self, id: Uuid) -> Option<Arc<StoredBundle>> {
        self.read_lock().bundles.get(&id).map(Arc::clone)
    }

    /// Number of bundles currently retained
    pub fn len(&self) -> usize {
        self.read_lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        // A poisoned lock only means another handler panicked mid-access;
        // the map itself is still usable.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
