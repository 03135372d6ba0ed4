//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the portfolio data, the
//! navigation state of both books and the editor/login/modal state.

mod model;

pub use model::*;
