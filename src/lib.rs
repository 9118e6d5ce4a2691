//! Core library surface for the game catalog manager, a terminal application
//! that keeps a small catalog of games in a CSV file.
//!
//! The binary only wires these pieces together; tests and other tooling can
//! drive the store and the catalog controller directly.
pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod validation;

/// Persistence entry points used by `main.rs` and the integration tests.
pub use store::{ensure_store, read_all, write_all, GameStore};

/// The controller that owns the full set and the view.
pub use catalog::{Catalog, CommandError, SortKey, ViewFilter, ViewSpec};

/// Domain types shared by every layer.
pub use models::{CatalogEntry, Column, GameRecord, RecordId};

pub use validation::{validate_record, ValidationError};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
