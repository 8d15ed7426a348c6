//! Source watching with debouncing

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use sha2::{Digest, Sha256};

use crate::config::WatchConfig;
use crate::error::{LiveError, LiveResult};

use super::event::{SessionEvent, WatcherState};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// notify sometimes reports existing files right after registration
const STARTUP_COOLDOWN: Duration = Duration::from_millis(500);

/// Decides which paths under the project root can trigger a rebuild.
#[derive(Debug)]
pub struct ChangeFilter {
    root: PathBuf,
    extensions: Vec<String>,
    ignore: Gitignore,
}

impl ChangeFilter {
    pub fn new(root: &Path, watch: &WatchConfig) -> LiveResult<Self> {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        let mut builder = GitignoreBuilder::new(&root);
        for pattern in &watch.ignore {
            builder.add_line(None, pattern).map_err(|e| {
                LiveError::Watch(format!("invalid ignore pattern `{}`: {}", pattern, e))
            })?;
        }
        let ignore = builder
            .build()
            .map_err(|e| LiveError::Watch(e.to_string()))?;

        let extensions = watch
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(Self {
            root,
            extensions,
            ignore,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths outside the root are never accepted.
    pub fn accepts(&self, path: &Path) -> bool {
        let watched_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|w| w == ext))
            .unwrap_or(false);
        if !watched_extension {
            return false;
        }

        match path.strip_prefix(&self.root) {
            Ok(rel) => !self.ignore.matched_path_or_any_parents(rel, false).is_ignore(),
            Err(_) => false,
        }
    }
}

pub(crate) fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hash every watched file currently under the root.
pub(crate) fn snapshot(filter: &ChangeFilter) -> HashMap<PathBuf, String> {
    let mut hashes = HashMap::new();

    let walker = WalkBuilder::new(filter.root())
        .hidden(false)
        .git_ignore(false)
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        if !filter.accepts(path) {
            continue;
        }
        if let Ok(content) = std::fs::read(path) {
            hashes.insert(path.to_path_buf(), content_hash(&content));
        }
    }

    hashes
}

/// Record `path` in `hashes` and report whether it differs from last time.
///
/// A watched file that disappeared counts as a change.
pub(crate) fn record_change(hashes: &mut HashMap<PathBuf, String>, path: &Path) -> bool {
    match std::fs::read(path) {
        Ok(content) => {
            let new_hash = content_hash(&content);
            if hashes.get(path) == Some(&new_hash) {
                return false;
            }
            hashes.insert(path.to_path_buf(), new_hash);
            true
        }
        Err(_) => hashes.remove(path).is_some(),
    }
}

/// Queue `path` on `state` if it is watched and its content changed.
pub(crate) fn track(
    filter: &ChangeFilter,
    hashes: &mut HashMap<PathBuf, String>,
    state: &mut WatcherState,
    path: PathBuf,
) {
    let path = path.canonicalize().unwrap_or(path);
    if filter.accepts(&path) && record_change(hashes, &path) {
        state.add_change(path);
    }
}

/// Collect every path reported before `deadline`.
pub(crate) fn hold_until(rx: &Receiver<PathBuf>, deadline: Instant) -> Vec<PathBuf> {
    let mut held = Vec::new();
    while Instant::now() < deadline {
        if let Ok(path) = rx.recv_timeout(POLL_INTERVAL) {
            held.push(path);
        }
    }
    held
}

/// Watch `filter.root()` until `running` is cleared, reporting debounced
/// batches of changed files.
pub(crate) fn watch_loop(
    filter: &ChangeFilter,
    debounce: Duration,
    running: &AtomicBool,
    on_event: &mut dyn FnMut(SessionEvent),
) -> LiveResult<()> {
    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for path in event.paths {
                    let _ = tx.send(path);
                }
            }
        },
        Config::default(),
    )?;
    watcher.watch(filter.root(), RecursiveMode::Recursive)?;

    let mut hashes = snapshot(filter);
    let mut state = WatcherState::new(debounce);

    // Cooldown events are checked against the snapshot, so registration
    // noise is dropped and real edits still count.
    for path in hold_until(&rx, Instant::now() + STARTUP_COOLDOWN) {
        track(filter, &mut hashes, &mut state, path);
    }

    on_event(SessionEvent::WatchStarted {
        root: filter.root().to_path_buf(),
    });

    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(POLL_INTERVAL) {
            track(filter, &mut hashes, &mut state, path);
        }

        if state.should_rebuild() {
            on_event(SessionEvent::FilesChanged {
                paths: state.take_changes(),
            });
        }
    }

    Ok(())
}
