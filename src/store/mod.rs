//! CSV persistence: the whole catalog is read and rewritten in one go.

mod file;
mod records;

pub use file::{ensure_store, GameStore};
pub use records::{read_all, write_all};
