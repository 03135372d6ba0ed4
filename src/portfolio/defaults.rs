use std::path::Path;

use crate::error::Result;

use super::model::{AppData, Photo, ProfileData};

/// The compiled-in portfolio shown on first start and after a reset.
pub fn builtin_defaults() -> AppData {
    AppData {
        profile: ProfileData {
            name: "Alex Lumière".to_string(),
            title: "Visual Storyteller & Photographer".to_string(),
            bio: "Capturing the ephemeral moments of light and shadow. My work explores the \
                  silence between chaos and the beauty found in the mundane. Welcome to my \
                  visual diary."
                .to_string(),
            avatar_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1000&auto=format&fit=crop".to_string(),
            social_link: "instagram.com/alex.lumiere".to_string(),
            qr_code1: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https://instagram.com".to_string(),
            qr_code2: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https://weixin.qq.com".to_string(),
        },
        portrait_photos: vec![
            Photo::new("p1", "https://images.unsplash.com/photo-1515462277126-2dd0c162007a?q=80&w=800&auto=format&fit=crop", "Neon Rain", "2023"),
            Photo::new("p2", "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?q=80&w=800&auto=format&fit=crop", "Space Station", "2023"),
            Photo::new("p3", "https://images.unsplash.com/photo-1520690214124-2405c5217036?q=80&w=800&auto=format&fit=crop", "Desert Mirage", "2024"),
            Photo::new("p4", "https://images.unsplash.com/photo-1500462918059-b1a0cb512f1d?q=80&w=800&auto=format&fit=crop", "Red Temple", "2024"),
            Photo::new("p5", "https://images.unsplash.com/photo-1492571350019-22de08371fd3?q=80&w=800&auto=format&fit=crop", "Tokyo Night", "2024"),
            Photo::new("p6", "https://images.unsplash.com/photo-1534447677768-be436bb09401?q=80&w=800&auto=format&fit=crop", "Silence", "2024"),
        ],
        landscape_photos: vec![
            Photo::new("l1", "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?q=80&w=1000&auto=format&fit=crop", "Highlands", "2023"),
            Photo::new("l2", "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=1000&auto=format&fit=crop", "Valley Mist", "2023"),
            Photo::new("l3", "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=1000&auto=format&fit=crop", "Yosemite Fall", "2024"),
            Photo::new("l4", "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?q=80&w=1000&auto=format&fit=crop", "Deep Woods", "2024"),
        ],
    }
}

/// Read a replacement default portfolio from a TOML file.
///
/// The file uses the same keys as the stored JSON (`profile`,
/// `portraitPhotos`, `landscapePhotos`).
pub fn load_defaults_file(path: &Path) -> Result<AppData> {
    let raw = std::fs::read_to_string(path)?;
    let data: AppData = toml::from_str(&raw)?;
    Ok(data)
}
