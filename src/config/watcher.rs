//! Deployment descriptor watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_table;
use crate::mapping::MappingTable;
use crate::observability::metrics;

/// Monitors a descriptor file and emits a freshly built table on change.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<MappingTable>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for table updates, meant for
    /// [`run_reload_loop`](crate::mapping::store::run_reload_loop).
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<MappingTable>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file on notify's background thread.
    ///
    /// Watching stops when the returned handle is dropped, which also closes
    /// the update channel.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Descriptor change detected, reloading");
                        match load_table(&path) {
                            Ok(table) => {
                                let _ = tx.send(table);
                            }
                            Err(e) => {
                                metrics::record_reload(false);
                                tracing::error!(
                                    error = %e,
                                    "Failed to reload descriptor, keeping current mapping table"
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Descriptor watcher started");
        Ok(watcher)
    }
}
