//! Persistence of the portfolio into a single key-value slot.
//!
//! `Storage` never surfaces failures: a missing or malformed slot loads as
//! the defaults and a failed write is only logged.

mod debounce;
mod slot;

pub use debounce::Debouncer;
pub use slot::*;

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::portfolio::AppData;

/// Default key the portfolio is stored under.
pub const STORAGE_KEY: &str = "portfolio_data_v2";

pub struct Storage<S: Slot> {
    slot: S,
    key: String,
    defaults: AppData,
}

impl<S: Slot> Storage<S> {
    pub fn new(slot: S, key: impl Into<String>, defaults: AppData) -> Self {
        Self {
            slot,
            key: key.into(),
            defaults,
        }
    }

    /// Read and parse the stored portfolio. `Ok(None)` when the slot is empty.
    pub fn try_load(&self) -> Result<Option<AppData>> {
        match self.slot.read(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Stored portfolio, or the defaults when absent or unreadable.
    pub fn load(&self) -> AppData {
        match self.try_load() {
            Ok(Some(data)) => {
                debug!(key = %self.key, "loaded stored portfolio");
                data
            }
            Ok(None) => {
                info!(key = %self.key, "no stored portfolio, using defaults");
                self.defaults.clone()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to load stored portfolio, using defaults");
                self.defaults.clone()
            }
        }
    }

    pub fn try_save(&mut self, data: &AppData) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        self.slot.write(&self.key, &raw)?;
        Ok(())
    }

    pub fn save(&mut self, data: &AppData) {
        match self.try_save(data) {
            Ok(()) => info!(key = %self.key, "portfolio saved"),
            Err(e) => error!(key = %self.key, error = %e, "failed to save portfolio"),
        }
    }

    /// Clear the slot and hand back the defaults.
    pub fn reset(&mut self) -> AppData {
        if let Err(e) = self.slot.remove(&self.key) {
            error!(key = %self.key, error = %e, "failed to clear stored portfolio");
        } else {
            info!(key = %self.key, "stored portfolio cleared");
        }
        self.defaults.clone()
    }

    #[cfg(test)]
    pub(crate) fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }
}

#[cfg(test)]
mod tests;
