use std::path::PathBuf;

use tracing::{info, warn};

use crate::config;
use crate::portfolio::{AppData, builtin_defaults, load_defaults_file};
use crate::storage::{FileSlot, Storage};

/// Content shown before the artist saves anything, and after a reset.
pub fn load_defaults(settings: &config::Settings) -> AppData {
    let Some(path) = &settings.content.defaults_path else {
        return builtin_defaults();
    };
    match load_defaults_file(path) {
        Ok(data) => {
            info!(path = %path.display(), "loaded default content");
            data
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load default content, using built-in");
            builtin_defaults()
        }
    }
}

pub fn open_storage(settings: &config::Settings) -> Storage<FileSlot> {
    let dir = settings.storage_dir().unwrap_or_else(|| {
        warn!("no data directory available, storing portfolio in ./.folio");
        PathBuf::from(".folio")
    });
    info!(dir = %dir.display(), key = %settings.storage.key, "opening portfolio storage");
    Storage::new(
        FileSlot::new(dir),
        settings.storage.key.clone(),
        load_defaults(settings),
    )
}
