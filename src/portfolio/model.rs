//! Portfolio model types: `Photo`, `ProfileData`, `AppData` and the field
//! selectors used by the editor.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One photo record. `id` is unique within its album and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub date: String,
}

impl Photo {
    pub fn new(id: &str, url: &str, caption: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            caption: caption.to_string(),
            date: date.to_string(),
        }
    }

    pub fn field(&self, field: PhotoField) -> &str {
        match field {
            PhotoField::Caption => &self.caption,
            PhotoField::Date => &self.date,
            PhotoField::Url => &self.url,
        }
    }

    pub fn field_mut(&mut self, field: PhotoField) -> &mut String {
        match field {
            PhotoField::Caption => &mut self.caption,
            PhotoField::Date => &mut self.date,
            PhotoField::Url => &mut self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    pub social_link: String,
    pub qr_code1: String,
    pub qr_code2: String,
}

impl ProfileData {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Bio => &self.bio,
            ProfileField::AvatarUrl => &self.avatar_url,
            ProfileField::SocialLink => &self.social_link,
            ProfileField::QrCode1 => &self.qr_code1,
            ProfileField::QrCode2 => &self.qr_code2,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Title => &mut self.title,
            ProfileField::Bio => &mut self.bio,
            ProfileField::AvatarUrl => &mut self.avatar_url,
            ProfileField::SocialLink => &mut self.social_link,
            ProfileField::QrCode1 => &mut self.qr_code1,
            ProfileField::QrCode2 => &mut self.qr_code2,
        }
    }
}

/// Everything that gets persisted, in the exact shape of the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub profile: ProfileData,
    pub portrait_photos: Vec<Photo>,
    pub landscape_photos: Vec<Photo>,
}

impl AppData {
    /// Ordered photos of one album.
    pub fn photos(&self, album: AlbumKind) -> &[Photo] {
        match album {
            AlbumKind::Portrait => &self.portrait_photos,
            AlbumKind::Landscape => &self.landscape_photos,
        }
    }

    fn photos_mut(&mut self, album: AlbumKind) -> &mut Vec<Photo> {
        match album {
            AlbumKind::Portrait => &mut self.portrait_photos,
            AlbumKind::Landscape => &mut self.landscape_photos,
        }
    }

    /// Replace the record whose id matches `photo.id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no record has that id.
    pub fn update_photo(&mut self, album: AlbumKind, photo: Photo) -> bool {
        match self.photos_mut(album).iter_mut().find(|p| p.id == photo.id) {
            Some(slot) => {
                *slot = photo;
                true
            }
            None => {
                debug!(album = album.label(), id = %photo.id, "update for unknown photo id ignored");
                false
            }
        }
    }

    pub fn update_profile(&mut self, field: ProfileField, value: String) {
        *self.profile.field_mut(field) = value;
    }

    pub fn photo(&self, album: AlbumKind, id: &str) -> Option<&Photo> {
        self.photos(album).iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlbumKind {
    /// Portrait series, pages turn around a vertical hinge.
    Portrait,
    /// Landscape series, pages turn around a horizontal hinge.
    Landscape,
}

impl AlbumKind {
    pub const ALL: [AlbumKind; 2] = [AlbumKind::Portrait, AlbumKind::Landscape];

    pub fn label(self) -> &'static str {
        match self {
            AlbumKind::Portrait => "portrait",
            AlbumKind::Landscape => "landscape",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PhotoField {
    Caption,
    Date,
    Url,
}

impl PhotoField {
    pub const ALL: [PhotoField; 3] = [PhotoField::Caption, PhotoField::Date, PhotoField::Url];

    pub fn label(self) -> &'static str {
        match self {
            PhotoField::Caption => "caption",
            PhotoField::Date => "date",
            PhotoField::Url => "url",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Title,
    Bio,
    AvatarUrl,
    SocialLink,
    QrCode1,
    QrCode2,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Title => "title",
            ProfileField::Bio => "bio",
            ProfileField::AvatarUrl => "avatar",
            ProfileField::SocialLink => "social",
            ProfileField::QrCode1 => "qr 1",
            ProfileField::QrCode2 => "qr 2",
        }
    }
}
