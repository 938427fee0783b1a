//! Content directory watching.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period that ends a burst of file events.
const DEBOUNCE: Duration = Duration::from_millis(150);

/// A burst of content file changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    /// Changed content files, sorted and deduplicated
    pub paths: Vec<PathBuf>,
}

/// File watcher for detecting content changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events. Events stop when
    /// the watcher is dropped.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(16);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            } else {
                tracing::warn!("Not watching missing path {}", path.display());
            }
        }

        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                let mut changed = content_paths(&event);

                // Collapse the rest of the burst into one event
                while let Ok(next) = sync_rx.recv_timeout(DEBOUNCE) {
                    changed.extend(content_paths(&next));
                }

                if changed.is_empty() {
                    continue;
                }
                changed.sort();
                changed.dedup();

                if async_tx.blocking_send(WatchEvent { paths: changed }).is_err() {
                    break;
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

fn content_paths(event: &notify::Event) -> Vec<PathBuf> {
    event
        .paths
        .iter()
        .filter(|path| is_content_change(path, &event.kind))
        .cloned()
        .collect()
}

/// Whether an event on `path` can change the catalog.
fn is_content_change(path: &Path, kind: &notify::EventKind) -> bool {
    use notify::EventKind;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );

    is_yaml
        && matches!(
            kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn only_yaml_changes_count() {
        let modify = EventKind::Modify(ModifyKind::Any);

        assert!(is_content_change(Path::new("content/docs.yaml"), &modify));
        assert!(is_content_change(
            Path::new("content/i18n/en.yml"),
            &EventKind::Create(CreateKind::File)
        ));
        assert!(!is_content_change(Path::new("content/notes.txt"), &modify));
        assert!(!is_content_change(
            Path::new("content/docs.yaml"),
            &EventKind::Access(notify::event::AccessKind::Any)
        ));
    }

    #[tokio::test]
    async fn watches_content_changes() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs.yaml");

        // Create the watcher first so it catches the write
        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&docs, "button: {}\n").unwrap();
        fs::write(temp.path().join("ignored.txt"), "x").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        let event = event
            .expect("timeout waiting for file watch event")
            .expect("channel should not be closed");
        assert!(event.paths.iter().all(|p| p.extension().unwrap() == "yaml"));
        assert!(event.paths.iter().any(|p| p.ends_with("docs.yaml")));
    }
}
