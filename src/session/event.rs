//! Dev session events and debounce state

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Something the supervisor wants the caller to know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ServerStarted { url: String },
    BrowserOpened { url: String },
    WatchStarted { root: PathBuf },
    /// Debounced batch of source files whose content changed.
    FilesChanged { paths: Vec<PathBuf> },
    /// Non-fatal trouble (server or browser failed to start, watcher hiccup)
    Warning { message: String },
    Shutdown,
}

/// Collects changes until the filesystem has been quiet for `debounce`.
pub(crate) struct WatcherState {
    debounce: Duration,
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub(crate) fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending_changes: HashSet::new(),
            last_change: None,
        }
    }

    pub(crate) fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    pub(crate) fn should_rebuild(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Drain the batch, sorted for stable output.
    pub(crate) fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }
}
