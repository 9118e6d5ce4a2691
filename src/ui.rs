//! Ratatui front-end: a command bar with the search field on top, the
//! "Game Details" form on the left, the games table on the right and a status
//! footer. Modal notices and the delete confirmation are drawn over the rest.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
