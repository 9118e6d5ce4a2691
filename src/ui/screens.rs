use crate::models::{CatalogEntry, RecordId};

/// Cursor and explicit selection for the games table. The cursor is the
/// highlighted row; `chosen` is the row picked with Enter, which Update and
/// Delete act on.
#[derive(Default)]
pub(crate) struct GameTable {
    pub(crate) cursor: usize,
    pub(crate) chosen: Option<RecordId>,
}

impl GameTable {
    /// The view was rebuilt: drop the selection and go back to the top.
    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
        self.chosen = None;
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        let mut new = self.cursor as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.cursor = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// Row under the cursor.
    pub(crate) fn current<'a>(&self, view: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
        view.get(self.cursor)
    }
}
