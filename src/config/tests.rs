use super::load::{default_config_path, default_data_dir, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_folio_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", "/tmp/folio-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/folio-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("folio")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("folio")
            .join("config.toml")
    );
}

#[test]
fn default_data_dir_follows_xdg_data_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_DATA_HOME", "/tmp/xdg-data");
    assert_eq!(default_data_dir().unwrap(), PathBuf::from("/tmp/xdg-data/folio"));

    let _g2 = EnvGuard::remove("XDG_DATA_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_data_dir().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/share/folio")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[storage]
dir = "/tmp/folio-data"
key = "my_portfolio"
autosave_delay_ms = 250

[ui]
header_text = "hello"
mouse = false
portrait_title = "Faces"
landscape_title = "Places"

[content]
defaults_path = "/tmp/folio-defaults.toml"

[log]
path = "/tmp/folio.log"
filter = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FOLIO__STORAGE__AUTOSAVE_DELAY_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.storage.dir, Some(PathBuf::from("/tmp/folio-data")));
    assert_eq!(s.storage.key, "my_portfolio");
    assert_eq!(s.storage.autosave_delay_ms, 250);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.mouse);
    assert_eq!(s.ui.portrait_title, "Faces");
    assert_eq!(s.ui.landscape_title, "Places");
    assert_eq!(
        s.content.defaults_path,
        Some(PathBuf::from("/tmp/folio-defaults.toml"))
    );
    assert_eq!(s.log.filter, "debug");
    assert_eq!(s.log_path(), Some(PathBuf::from("/tmp/folio.log")));
    assert_eq!(s.storage_dir(), Some(PathBuf::from("/tmp/folio-data")));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[storage]
autosave_delay_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("FOLIO__STORAGE__AUTOSAVE_DELAY_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.storage.autosave_delay_ms, 0);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "FOLIO_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );

    let s = Settings::load().unwrap();
    assert_eq!(s.storage.key, "portfolio_data_v2");
    assert_eq!(s.storage.autosave_delay_ms, 1000);
    assert!(s.ui.mouse);
    assert_eq!(s.log.filter, "info");
    assert!(s.content.defaults_path.is_none());
}

#[test]
fn log_path_defaults_into_storage_dir() {
    let s = Settings {
        storage: StorageSettings {
            dir: Some(PathBuf::from("/srv/folio")),
            ..StorageSettings::default()
        },
        ..Settings::default()
    };
    assert_eq!(s.log_path(), Some(PathBuf::from("/srv/folio/folio.log")));
}

#[test]
fn validate_rejects_bad_storage_keys() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.storage.key = "  ".into();
    assert!(s.validate().is_err());

    s.storage.key = "../escape".into();
    assert!(s.validate().is_err());
}
