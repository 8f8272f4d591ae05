use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use super::loader::load_catalog;
use super::model::Catalog;

// ---------------------------------------------------------------------------
// CatalogStore – observable catalog snapshot
// ---------------------------------------------------------------------------

/// Owns the current catalog snapshot and publishes replacements.
///
/// Snapshots are shared read-only through `Arc`; a rescan never edits the
/// published catalog, it swaps in a new one and notifies subscribers.
pub struct CatalogStore {
    snapshot: Arc<Catalog>,
    subscribers: Vec<Sender<Arc<Catalog>>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            snapshot: Arc::new(catalog),
            subscribers: Vec::new(),
        }
    }

    /// Scan `dir` once and hold the result.
    pub fn load(dir: &Path, prefix: &str) -> Self {
        Self::new(load_catalog(dir, prefix))
    }

    /// The current read-only snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.snapshot)
    }

    /// Register for snapshot updates. The current snapshot is delivered
    /// immediately, so a late subscriber never misses the initial load.
    pub fn subscribe(&mut self) -> Receiver<Arc<Catalog>> {
        let (tx, rx) = mpsc::channel();
        // Cannot fail: `rx` is still alive here.
        let _ = tx.send(self.snapshot());
        self.subscribers.push(tx);
        rx
    }

    /// Publish a new snapshot. Subscribers whose receiver was dropped are
    /// forgotten.
    pub fn replace(&mut self, catalog: Catalog) {
        self.snapshot = Arc::new(catalog);
        let snapshot = &self.snapshot;
        self.subscribers
            .retain(|tx| tx.send(Arc::clone(snapshot)).is_ok());
        log::debug!(
            "Published {} to {} subscriber(s)",
            self.snapshot,
            self.subscribers.len()
        );
    }

    /// Rescan `dir` and publish the result.
    pub fn reload(&mut self, dir: &Path, prefix: &str) {
        self.replace(load_catalog(dir, prefix));
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn subscriber_receives_current_snapshot_first() {
        let mut store = CatalogStore::new(Catalog::from_names(["nssl0001.jpg"]));
        let rx = store.subscribe();

        let first = rx.try_recv().expect("initial snapshot should be queued");
        assert_eq!(first.as_slice(), ["nssl0001.jpg"]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn replace_notifies_and_keeps_old_snapshot_intact() {
        let mut store = CatalogStore::new(Catalog::from_names(["a.jpg"]));
        let before = store.snapshot();
        let rx = store.subscribe();
        let _ = rx.try_recv();

        store.replace(Catalog::from_names(["b.jpg", "c.jpg"]));

        let update = rx.try_recv().expect("update should be delivered");
        assert_eq!(update.as_slice(), ["b.jpg", "c.jpg"]);
        assert_eq!(before.as_slice(), ["a.jpg"]);
        assert!(Arc::ptr_eq(&update, &store.snapshot()));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = CatalogStore::new(Catalog::default());
        let keep = store.subscribe();
        drop(store.subscribe());
        assert_eq!(store.subscriber_count(), 2);

        store.replace(Catalog::default());

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(keep.try_iter().count(), 2);
    }

    #[test]
    fn reload_rescans_directory() {
        let dir = TempDir::new().expect("tempdir should be created");
        let mut store = CatalogStore::load(dir.path(), "nssl");
        assert!(store.snapshot().is_empty());

        fs::write(dir.path().join("nssl0001.jpg"), b"x").expect("file should be written");
        store.reload(dir.path(), "nssl");

        assert_eq!(store.snapshot().as_slice(), ["nssl0001.jpg"]);
    }
}
