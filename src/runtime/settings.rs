use crate::config;

/// Load and validate settings, falling back to the built-in defaults (default
/// storage key, 1 s autosave, mouse on, log filter `info`) when the file or
/// environment is unusable.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("folio: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // A broken config never blocks startup.
            eprintln!("folio: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
