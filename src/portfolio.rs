//! Portfolio content: the profile and the two photo albums.
//!
//! `AppData` is the single aggregate that gets persisted; the photo store
//! operations (`photos`, `update_photo`, `update_profile`) live on it.

mod defaults;
mod model;

pub use defaults::*;
pub use model::*;
