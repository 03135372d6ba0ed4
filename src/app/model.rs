//! Application model types: `App`, the `Action`s that update it and the
//! `Effect`s the runtime has to carry out afterwards.
//!
//! Every state change goes through `App::update`, so keyboard and mouse input
//! funnel into the same transitions.

use tracing::{debug, info, warn};

use crate::auth;
use crate::book::{FlipAction, FlipController, Pair, pair};
use crate::portfolio::{AlbumKind, AppData, PhotoField, ProfileField};

/// Whether the artist is logged in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Editing,
}

/// Screen section that keyboard input is aimed at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Profile,
    Album(AlbumKind),
    Contact,
}

impl Section {
    const ORDER: [Section; 4] = [
        Section::Profile,
        Section::Album(AlbumKind::Portrait),
        Section::Album(AlbumKind::Landscape),
        Section::Contact,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QrSlot {
    First,
    Second,
}

impl QrSlot {
    pub fn field(self) -> ProfileField {
        match self {
            QrSlot::First => ProfileField::QrCode1,
            QrSlot::Second => ProfileField::QrCode2,
        }
    }
}

/// An editable text field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldRef {
    Profile(ProfileField),
    Photo {
        album: AlbumKind,
        id: String,
        field: PhotoField,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Passphrase,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub passphrase: String,
    pub active: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn active_mut(&mut self) -> &mut String {
        match self.active {
            LoginField::Username => &mut self.username,
            LoginField::Passphrase => &mut self.passphrase,
        }
    }
}

/// Modal drawn over the page.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Login(LoginForm),
    Qr(QrSlot),
    ConfirmReset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    Focus(Section),
    Advance(AlbumKind),
    Retreat(AlbumKind),
    ToggleAt(AlbumKind, usize),
    OpenLogin,
    LoginInput(char),
    LoginBackspace,
    LoginSwitchField,
    SubmitLogin,
    Logout,
    CycleField,
    BeginEditSelected,
    BeginEdit(FieldRef),
    EditInput(char),
    EditBackspace,
    EndEdit,
    RequestReset,
    ConfirmReset,
    ZoomQr(QrSlot),
    DismissOverlay,
    Quit,
}

/// Work left for the runtime after an update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Data changed in edit mode; persist after the autosave delay.
    ScheduleSave,
    /// Persist right away (leaving edit mode).
    SaveNow,
    /// Clear the stored portfolio and reload the defaults.
    Reset,
    Quit,
}

/// The main application model.
pub struct App {
    pub data: AppData,
    portrait: FlipController,
    landscape: FlipController,
    pub mode: Mode,
    pub focus: Section,
    pub overlay: Overlay,
    /// Field currently receiving typed characters.
    pub editing: Option<FieldRef>,
    /// Index into `editable_fields()` highlighted for keyboard editing.
    pub field_cursor: usize,
}

impl App {
    pub fn new(data: AppData) -> Self {
        let portrait = FlipController::new(pair(data.photos(AlbumKind::Portrait)).len());
        let landscape = FlipController::new(pair(data.photos(AlbumKind::Landscape)).len());
        Self {
            data,
            portrait,
            landscape,
            mode: Mode::Browsing,
            focus: Section::Profile,
            overlay: Overlay::None,
            editing: None,
            field_cursor: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    /// Pages of `album`, derived from the current photos.
    pub fn pairs(&self, album: AlbumKind) -> Vec<Pair> {
        pair(self.data.photos(album))
    }

    pub fn book(&self, album: AlbumKind) -> &FlipController {
        match album {
            AlbumKind::Portrait => &self.portrait,
            AlbumKind::Landscape => &self.landscape,
        }
    }

    fn book_mut(&mut self, album: AlbumKind) -> &mut FlipController {
        match album {
            AlbumKind::Portrait => &mut self.portrait,
            AlbumKind::Landscape => &mut self.landscape,
        }
    }

    fn sync_books(&mut self) {
        for album in AlbumKind::ALL {
            let count = self.data.photos(album).len().div_ceil(2);
            self.book_mut(album).set_pair_count(count);
        }
    }

    /// Swap in freshly loaded data: both books close and edit mode ends.
    pub fn replace_data(&mut self, data: AppData) {
        self.data = data;
        self.sync_books();
        for album in AlbumKind::ALL {
            self.book_mut(album).rewind();
        }
        self.mode = Mode::Browsing;
        self.overlay = Overlay::None;
        self.editing = None;
        self.field_cursor = 0;
    }

    /// Fields reachable from the keyboard in the focused section. Album
    /// sections expose the photos currently visible on each side.
    pub fn editable_fields(&self) -> Vec<FieldRef> {
        match self.focus {
            Section::Profile => [
                ProfileField::Name,
                ProfileField::Title,
                ProfileField::Bio,
                ProfileField::AvatarUrl,
                ProfileField::SocialLink,
            ]
            .into_iter()
            .map(FieldRef::Profile)
            .collect(),
            Section::Contact => [ProfileField::QrCode1, ProfileField::QrCode2]
                .into_iter()
                .map(FieldRef::Profile)
                .collect(),
            Section::Album(album) => {
                let pairs = self.pairs(album);
                let spread = self.book(album).spread();
                let visible = [
                    spread.open.map(|i| &pairs[i].front),
                    spread
                        .turned
                        .filter(|&i| !pairs[i].placeholder_back)
                        .map(|i| &pairs[i].back),
                ];
                visible
                    .into_iter()
                    .flatten()
                    .flat_map(|photo| {
                        PhotoField::ALL.into_iter().map(|field| FieldRef::Photo {
                            album,
                            id: photo.id.clone(),
                            field,
                        })
                    })
                    .collect()
            }
        }
    }

    /// Field highlighted by the keyboard cursor, in edit mode only.
    pub fn selected_field(&self) -> Option<FieldRef> {
        if !self.is_editing() {
            return None;
        }
        let fields = self.editable_fields();
        if fields.is_empty() {
            None
        } else {
            Some(fields[self.field_cursor % fields.len()].clone())
        }
    }

    /// Current text of `field`, `None` when the photo no longer exists.
    pub fn field_value(&self, field: &FieldRef) -> Option<&str> {
        match field {
            FieldRef::Profile(f) => Some(self.data.profile.field(*f)),
            FieldRef::Photo { album, id, field } => {
                self.data.photo(*album, id).map(|p| p.field(*field))
            }
        }
    }

    /// Apply `edit` to the text of `field`. Photo edits go through the
    /// store's update-by-id. Returns whether anything changed.
    fn edit_field(&mut self, field: &FieldRef, edit: impl FnOnce(&mut String)) -> bool {
        match field {
            FieldRef::Profile(f) => {
                let mut value = self.data.profile.field(*f).to_string();
                edit(&mut value);
                self.data.update_profile(*f, value);
                true
            }
            FieldRef::Photo { album, id, field } => {
                let Some(mut photo) = self.data.photo(*album, id).cloned() else {
                    return false;
                };
                edit(photo.field_mut(*field));
                self.data.update_photo(*album, photo)
            }
        }
    }

    /// Apply one action and report what the runtime still has to do.
    pub fn update(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
            Action::Focus(section) => self.set_focus(section),
            Action::Advance(album) => self.navigate(album, FlipAction::Advance),
            Action::Retreat(album) => self.navigate(album, FlipAction::Retreat),
            Action::ToggleAt(album, i) => self.navigate(album, FlipAction::ToggleAt(i)),
            Action::OpenLogin => {
                if !self.is_editing() {
                    self.overlay = Overlay::Login(LoginForm::default());
                }
            }
            Action::LoginInput(c) => {
                if let Overlay::Login(form) = &mut self.overlay {
                    form.active_mut().push(c);
                }
            }
            Action::LoginBackspace => {
                if let Overlay::Login(form) = &mut self.overlay {
                    form.active_mut().pop();
                }
            }
            Action::LoginSwitchField => {
                if let Overlay::Login(form) = &mut self.overlay {
                    form.active = match form.active {
                        LoginField::Username => LoginField::Passphrase,
                        LoginField::Passphrase => LoginField::Username,
                    };
                }
            }
            Action::SubmitLogin => self.submit_login(),
            Action::Logout => {
                if self.is_editing() {
                    self.mode = Mode::Browsing;
                    self.editing = None;
                    self.overlay = Overlay::None;
                    info!("artist logged out");
                    return Effect::SaveNow;
                }
            }
            Action::CycleField => {
                let len = self.editable_fields().len();
                if self.is_editing() && len > 0 {
                    self.field_cursor = (self.field_cursor + 1) % len;
                }
            }
            Action::BeginEditSelected => {
                if let Some(field) = self.selected_field() {
                    self.editing = Some(field);
                }
            }
            Action::BeginEdit(field) => {
                if self.is_editing() && self.field_value(&field).is_some() {
                    self.editing = Some(field);
                }
            }
            Action::EditInput(c) => return self.edit_active(|s| s.push(c)),
            Action::EditBackspace => {
                return self.edit_active(|s| {
                    s.pop();
                });
            }
            Action::EndEdit => self.editing = None,
            Action::RequestReset => {
                if self.is_editing() {
                    self.editing = None;
                    self.overlay = Overlay::ConfirmReset;
                }
            }
            Action::ConfirmReset => {
                if self.overlay == Overlay::ConfirmReset {
                    self.overlay = Overlay::None;
                    warn!("portfolio reset requested");
                    return Effect::Reset;
                }
            }
            Action::ZoomQr(slot) => self.overlay = Overlay::Qr(slot),
            Action::DismissOverlay => self.overlay = Overlay::None,
        }
        Effect::None
    }

    fn set_focus(&mut self, section: Section) {
        if self.focus != section {
            self.focus = section;
            self.field_cursor = 0;
        }
    }

    fn navigate(&mut self, album: AlbumKind, action: FlipAction) {
        self.editing = None;
        self.set_focus(Section::Album(album));
        let book = self.book_mut(album);
        *book = book.apply(action);
        // The visible photos changed, so do the keyboard-editable fields.
        self.field_cursor = 0;
        debug!(album = album.label(), index = self.book(album).index(), "page turned");
    }

    fn submit_login(&mut self) {
        let Overlay::Login(form) = &mut self.overlay else {
            return;
        };
        match auth::check(&form.username, &form.passphrase) {
            Ok(()) => {
                self.overlay = Overlay::None;
                self.mode = Mode::Editing;
                self.field_cursor = 0;
                info!("artist logged in");
            }
            Err(e) => {
                warn!("rejected artist login");
                form.error = Some(e.to_string());
            }
        }
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) -> Effect {
        let Some(field) = self.editing.clone() else {
            return Effect::None;
        };
        if self.is_editing() && self.edit_field(&field, edit) {
            Effect::ScheduleSave
        } else {
            Effect::None
        }
    }
}
