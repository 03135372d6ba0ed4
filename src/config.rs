//! folio settings: where the portfolio slot lives and how often it is
//! autosaved (`storage`), header and album titles and mouse support (`ui`),
//! an optional replacement for the built-in portfolio (`content`) and the
//! log file and filter (`log`).
//!
//! Values come from `config.toml` with `FOLIO__SECTION__KEY` environment
//! overrides on top.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
