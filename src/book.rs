//! Flip-book model: pairing photos into two-sided pages and tracking which
//! pages have been turned.
//!
//! Both albums share this logic; only the renderer differs per orientation.

mod flip;
mod pairing;

pub use flip::*;
pub use pairing::*;
