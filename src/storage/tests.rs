use super::*;
use crate::portfolio::{AlbumKind, Photo, ProfileField, builtin_defaults};
use std::time::{Duration, Instant};

fn memory_storage() -> Storage<MemorySlot> {
    Storage::new(MemorySlot::new(), STORAGE_KEY, builtin_defaults())
}

fn edited() -> AppData {
    let mut data = builtin_defaults();
    data.update_profile(ProfileField::Name, "Robin Vale".into());
    data.update_photo(AlbumKind::Portrait, Photo::new("p3", "https://x/3.jpg", "Dunes", "2019"));
    data.landscape_photos.truncate(3);
    data
}

#[test]
fn load_without_stored_value_returns_defaults() {
    let storage = memory_storage();
    assert_eq!(storage.load(), builtin_defaults());
    assert!(storage.try_load().unwrap().is_none());
}

#[test]
fn load_with_invalid_json_returns_defaults() {
    let mut storage = memory_storage();
    storage.slot_mut().write(STORAGE_KEY, "{not json").unwrap();
    assert!(storage.try_load().is_err());
    assert_eq!(storage.load(), builtin_defaults());
}

#[test]
fn load_with_wrong_shape_returns_defaults() {
    let mut storage = memory_storage();
    storage
        .slot_mut()
        .write(STORAGE_KEY, r#"{"profile": 3, "portraitPhotos": []}"#)
        .unwrap();
    assert_eq!(storage.load(), builtin_defaults());
}

#[test]
fn save_then_load_round_trips() {
    let mut storage = memory_storage();
    let data = edited();
    storage.save(&data);
    assert_eq!(storage.load(), data);

    let loaded = storage.load();
    storage.save(&loaded);
    assert_eq!(storage.load(), data);
}

#[test]
fn reset_clears_slot_and_returns_defaults() {
    let mut storage = memory_storage();
    storage.save(&edited());
    assert_eq!(storage.reset(), builtin_defaults());
    assert!(storage.try_load().unwrap().is_none());
    assert_eq!(storage.load(), builtin_defaults());
}

#[test]
fn file_slot_round_trips_and_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let slot_dir = dir.path().join("nested").join("folio");
    let mut storage = Storage::new(FileSlot::new(&slot_dir), "k", builtin_defaults());

    assert_eq!(storage.load(), builtin_defaults());

    let data = edited();
    storage.save(&data);
    assert!(slot_dir.join("k.json").is_file());
    assert!(!slot_dir.join("k.json.tmp").exists());
    assert_eq!(storage.load(), data);

    storage.reset();
    assert!(!slot_dir.join("k.json").exists());
    // Removing an absent key is fine.
    storage.reset();
}

#[test]
fn file_slot_with_garbage_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("k.json"), b"\xff\xfe garbage").unwrap();
    let storage = Storage::new(FileSlot::new(dir.path()), "k", builtin_defaults());
    assert_eq!(storage.load(), builtin_defaults());
}

#[test]
fn custom_defaults_are_used_on_absence() {
    let defaults = edited();
    let storage = Storage::new(MemorySlot::new(), STORAGE_KEY, defaults.clone());
    assert_eq!(storage.load(), defaults);
}

#[test]
fn debouncer_fires_only_after_delay() {
    let start = Instant::now();
    let mut d = Debouncer::new(Duration::from_millis(1000));
    d.schedule(1, start);
    assert_eq!(d.time_left(start), Some(Duration::from_millis(1000)));
    assert_eq!(d.poll(start + Duration::from_millis(999)), None);
    assert_eq!(d.poll(start + Duration::from_millis(1000)), Some(1));
    assert_eq!(d.time_left(start), None);
    assert_eq!(d.poll(start + Duration::from_millis(5000)), None);
}

#[test]
fn debouncer_keeps_only_latest_value_and_extends_deadline() {
    let start = Instant::now();
    let mut d = Debouncer::new(Duration::from_millis(1000));
    d.schedule("a", start);
    d.schedule("b", start + Duration::from_millis(600));
    assert_eq!(d.poll(start + Duration::from_millis(1200)), None);
    assert_eq!(
        d.time_left(start + Duration::from_millis(1200)),
        Some(Duration::from_millis(400))
    );
    assert_eq!(d.poll(start + Duration::from_millis(1600)), Some("b"));
}

#[test]
fn debouncer_flush_and_cancel() {
    let start = Instant::now();
    let mut d = Debouncer::new(Duration::from_secs(1));
    d.schedule(7, start);
    assert_eq!(d.flush(), Some(7));
    assert_eq!(d.flush(), None);

    d.schedule(8, start);
    d.cancel();
    assert_eq!(d.poll(start + Duration::from_secs(2)), None);
}
