use anyhow::Result;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{error, info, warn};

/// Settle time before reloading, so an editor's save burst reloads once
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Watches the config file and page directory, calling `on_change` after
/// each burst of file events. Dropping the watcher stops it.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    pub fn new<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        for path in &paths {
            if path.exists() {
                watcher.watch(path, RecursiveMode::Recursive)?;
                info!("Watching path: {}", path.display());
            } else {
                warn!("Path does not exist, skipping: {}", path.display());
            }
        }

        std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Ok(_event)) => {
                    std::thread::sleep(DEBOUNCE);
                    // fold the rest of the burst into this reload
                    while rx.try_recv().is_ok() {}
                    info!("Change detected, reloading pages");
                    on_change();
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(e) => {
                    error!("Watch channel error: {:?}", e);
                    break;
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}
