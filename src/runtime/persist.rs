use std::time::{Duration, Instant};

use tracing::debug;

use crate::app::{App, Effect};
use crate::portfolio::AppData;
use crate::storage::{Debouncer, Slot, Storage};

/// Carries out the storage side of `Effect`s: debounced autosave, immediate
/// saves and resets.
pub struct Persister<S: Slot> {
    storage: Storage<S>,
    pending: Debouncer<AppData>,
}

impl<S: Slot> Persister<S> {
    pub fn new(storage: Storage<S>, autosave_delay: Duration) -> Self {
        Self {
            storage,
            pending: Debouncer::new(autosave_delay),
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    /// Time until the pending autosave is due.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.pending.time_left(now)
    }

    /// Write the pending snapshot once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(data) = self.pending.poll(now) {
            debug!("autosave due");
            self.storage.save(&data);
        }
    }

    /// Returns `true` when the app should exit.
    pub fn apply(&mut self, effect: Effect, app: &mut App, now: Instant) -> bool {
        match effect {
            Effect::None => {}
            Effect::ScheduleSave => self.pending.schedule(app.data.clone(), now),
            Effect::SaveNow => {
                self.pending.cancel();
                self.storage.save(&app.data);
            }
            Effect::Reset => {
                self.pending.cancel();
                let data = self.storage.reset();
                app.replace_data(data);
            }
            Effect::Quit => {
                if let Some(data) = self.pending.flush() {
                    self.storage.save(&data);
                }
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Action, FieldRef, Mode};
    use crate::portfolio::{ProfileField, builtin_defaults};
    use crate::storage::MemorySlot;

    const DELAY: Duration = Duration::from_millis(1000);

    fn setup() -> (Persister<MemorySlot>, App) {
        let storage = Storage::new(MemorySlot::new(), "portfolio_data_v2", builtin_defaults());
        let mut app = App::new(storage.load());
        app.mode = Mode::Editing;
        (Persister::new(storage, DELAY), app)
    }

    fn type_into_name(app: &mut App, persister: &mut Persister<MemorySlot>, text: &str, now: Instant) {
        app.update(Action::BeginEdit(FieldRef::Profile(ProfileField::Name)));
        for c in text.chars() {
            let effect = app.update(Action::EditInput(c));
            persister.apply(effect, app, now);
        }
    }

    #[test]
    fn burst_of_edits_saves_once_after_delay() {
        let (mut persister, mut app) = setup();
        let start = Instant::now();

        type_into_name(&mut app, &mut persister, "!!", start);
        persister.tick(start + Duration::from_millis(999));
        assert!(persister.storage().try_load().unwrap().is_none());

        persister.tick(start + DELAY);
        let saved = persister.storage().try_load().unwrap().unwrap();
        assert_eq!(saved.profile.name, "Alex Lumière!!");
        assert!(persister.time_left(start + DELAY).is_none());
    }

    #[test]
    fn logout_saves_immediately_and_drops_pending() {
        let (mut persister, mut app) = setup();
        let start = Instant::now();

        type_into_name(&mut app, &mut persister, "?", start);
        let effect = app.update(Action::Logout);
        assert!(!persister.apply(effect, &mut app, start));

        let saved = persister.storage().try_load().unwrap().unwrap();
        assert_eq!(saved.profile.name, "Alex Lumière?");
        assert!(persister.time_left(start).is_none());
    }

    #[test]
    fn quit_flushes_pending_autosave() {
        let (mut persister, mut app) = setup();
        let start = Instant::now();

        type_into_name(&mut app, &mut persister, "#", start);
        let effect = app.update(Action::Quit);
        assert!(persister.apply(effect, &mut app, start));
        let saved = persister.storage().try_load().unwrap().unwrap();
        assert_eq!(saved.profile.name, "Alex Lumière#");
    }

    #[test]
    fn quit_without_changes_leaves_slot_empty() {
        let (mut persister, mut app) = setup();
        assert!(persister.apply(Effect::Quit, &mut app, Instant::now()));
        assert!(persister.storage().try_load().unwrap().is_none());
    }

    #[test]
    fn reset_restores_defaults_and_cancels_autosave() {
        let (mut persister, mut app) = setup();
        let start = Instant::now();

        type_into_name(&mut app, &mut persister, "x", start);
        persister.apply(Effect::SaveNow, &mut app, start);
        app.mode = Mode::Editing;
        type_into_name(&mut app, &mut persister, "y", start);

        app.update(Action::RequestReset);
        let effect = app.update(Action::ConfirmReset);
        persister.apply(effect, &mut app, start);

        assert_eq!(app.data, builtin_defaults());
        assert!(!app.is_editing());
        persister.tick(start + DELAY);
        assert!(persister.storage().try_load().unwrap().is_none());
    }
}
