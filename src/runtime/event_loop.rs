use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Action, App, Overlay, QrSlot, Section};
use crate::config;
use crate::portfolio::AlbumKind;
use crate::runtime::persist::Persister;
use crate::storage::Slot;
use crate::ui::{self, HitMap, HitTarget};

/// Upper bound on how long one iteration waits for input.
const TICK: Duration = Duration::from_millis(50);

/// Main terminal event loop: draws, maps input to actions and lets the
/// persister carry out their effects. Returns `Ok(())` when the user quits.
pub fn run<S: Slot>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    persister: &mut Persister<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut hits = HitMap::default();

    loop {
        persister.tick(Instant::now());

        terminal.draw(|f| hits = ui::draw(f, app, &settings.ui))?;

        let timeout = persister
            .time_left(Instant::now())
            .map_or(TICK, |left| left.min(TICK));
        if !event::poll(timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_action(app, key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                hits.resolve(mouse.column, mouse.row).and_then(click_action)
            }
            _ => None,
        };

        if let Some(action) = action {
            let effect = app.update(action);
            if persister.apply(effect, app, Instant::now()) {
                return Ok(());
            }
        }
    }
}

/// Translate a key press into an action for the current app state.
pub fn key_action(app: &App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match &app.overlay {
        Overlay::Login(_) => return login_key(key),
        Overlay::Qr(_) => return Some(Action::DismissOverlay),
        Overlay::ConfirmReset => {
            return Some(match key.code {
                KeyCode::Char('y') => Action::ConfirmReset,
                _ => Action::DismissOverlay,
            });
        }
        Overlay::None => {}
    }

    if app.editing.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::EndEdit),
            KeyCode::Backspace => Some(Action::EditBackspace),
            KeyCode::Char(c) if !c.is_control() => Some(Action::EditInput(c)),
            _ => None,
        };
    }

    let focused_album = match app.focus {
        Section::Album(album) => Some(album),
        _ => None,
    };
    let editing = app.is_editing();

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Advance(AlbumKind::Portrait)),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Retreat(AlbumKind::Portrait)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Advance(AlbumKind::Landscape)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Retreat(AlbumKind::Landscape)),
        KeyCode::Char('n') | KeyCode::Char(' ') => focused_album.map(Action::Advance),
        KeyCode::Char('p') => focused_album.map(Action::Retreat),
        KeyCode::Char('1') => Some(Action::ZoomQr(QrSlot::First)),
        KeyCode::Char('2') => Some(Action::ZoomQr(QrSlot::Second)),
        KeyCode::Char('a') if !editing => Some(Action::OpenLogin),
        KeyCode::Char('f') if editing => Some(Action::CycleField),
        KeyCode::Enter | KeyCode::Char('e') if editing => Some(Action::BeginEditSelected),
        KeyCode::Char('x') if editing => Some(Action::Logout),
        KeyCode::Char('R') if editing => Some(Action::RequestReset),
        _ => None,
    }
}

fn login_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::DismissOverlay),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            Some(Action::LoginSwitchField)
        }
        KeyCode::Enter => Some(Action::SubmitLogin),
        KeyCode::Backspace => Some(Action::LoginBackspace),
        KeyCode::Char(c) if !c.is_control() => Some(Action::LoginInput(c)),
        _ => None,
    }
}

/// Translate a click on a resolved region into an action.
pub fn click_action(target: &HitTarget) -> Option<Action> {
    match target {
        HitTarget::Page { album, pair } => Some(Action::ToggleAt(*album, *pair)),
        HitTarget::Field(field) => Some(Action::BeginEdit(field.clone())),
        HitTarget::Prev(album) => Some(Action::Retreat(*album)),
        HitTarget::Next(album) => Some(Action::Advance(*album)),
        HitTarget::Qr(slot) => Some(Action::ZoomQr(*slot)),
        HitTarget::Login => Some(Action::OpenLogin),
        HitTarget::Logout => Some(Action::Logout),
        HitTarget::Reset => Some(Action::RequestReset),
        HitTarget::Dismiss => Some(Action::DismissOverlay),
        HitTarget::Inert => None,
    }
}
