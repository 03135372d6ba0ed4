//! Artist login gate.
//!
//! The credentials ship with the binary; this only keeps visitors from
//! stumbling into edit mode and is not a security boundary.

use crate::error::{FolioError, Result};

const ARTIST_USERNAME: &str = "3214128190";
const ARTIST_PASSPHRASE: &str = "shanlvbi";

pub fn check(username: &str, passphrase: &str) -> Result<()> {
    if username == ARTIST_USERNAME && passphrase == ARTIST_PASSPHRASE {
        Ok(())
    } else {
        Err(FolioError::InvalidCredentials)
    }
}
