//! The catalog controller. It owns the full record set loaded from the store
//! plus a description of what the table should show (filter and sort stack),
//! and recomputes the visible rows from those two whenever either changes.
//! The UI never edits records directly; it calls one of the command methods
//! here and redraws from `view()`.

use std::cmp::Ordering;

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{CatalogEntry, GameRecord, RecordId};
use crate::store::{read_all, write_all, GameStore};
use crate::validation::{validate_record, ValidationError};

/// Failure of a mutating command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Game {0} no longer exists. Refresh and select it again.")]
    NotFound(RecordId),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Which subset of the full set the view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFilter {
    #[default]
    All,
    /// Lowercased search term matched against names.
    NameContains(String),
    /// A single record, used by the highest-rated query.
    Single(RecordId),
}

/// One ordering applied on top of the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RatingDescending,
    Platform { ascending: bool },
}

impl SortKey {
    fn same_column(self, other: SortKey) -> bool {
        matches!(
            (self, other),
            (SortKey::RatingDescending, SortKey::RatingDescending)
                | (SortKey::Platform { .. }, SortKey::Platform { .. })
        )
    }

    fn compare(self, a: &GameRecord, b: &GameRecord) -> Ordering {
        match self {
            SortKey::RatingDescending => rating_sort_value(&b.rating)
                .partial_cmp(&rating_sort_value(&a.rating))
                .unwrap_or(Ordering::Equal),
            SortKey::Platform { ascending } => {
                let order = a.platform.to_lowercase().cmp(&b.platform.to_lowercase());
                if ascending {
                    order
                } else {
                    order.reverse()
                }
            }
        }
    }
}

/// Filter plus sort stack. Sorts are stable and run in order, so the last
/// key decides the primary order and earlier keys break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSpec {
    pub filter: ViewFilter,
    pub sorts: Vec<SortKey>,
}

impl ViewSpec {
    fn push_sort(&mut self, key: SortKey) {
        self.sorts.retain(|existing| !existing.same_column(key));
        self.sorts.push(key);
    }
}

/// Rating used for ordering: plain decimal text (digits with at most one
/// dot) parses, anything else sorts as -1 so it lands below every valid
/// rating.
pub fn rating_sort_value(rating: &str) -> f64 {
    let digits = rating.replacen('.', "", 1);
    if !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit()) {
        rating.parse().unwrap_or(-1.0)
    } else {
        -1.0
    }
}

/// Full set, view descriptor and the sort toggles.
pub struct Catalog {
    store: GameStore,
    entries: Vec<CatalogEntry>,
    spec: ViewSpec,
    view: Vec<CatalogEntry>,
    next_id: u64,
    /// Flipped by every rating sort but never read when ordering; the rating
    /// sort is always descending.
    rating_toggle: bool,
    /// Direction the next platform sort will use.
    platform_ascending: bool,
}

impl Catalog {
    /// Load the store and show everything.
    pub fn open(store: GameStore) -> Result<Self> {
        let mut catalog = Self {
            store,
            entries: Vec::new(),
            spec: ViewSpec::default(),
            view: Vec::new(),
            next_id: 1,
            rating_toggle: true,
            platform_ascending: true,
        };
        catalog.refresh()?;
        Ok(catalog)
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Every record in file order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Rows currently shown in the table.
    pub fn view(&self) -> &[CatalogEntry] {
        &self.view
    }

    pub fn view_spec(&self) -> &ViewSpec {
        &self.spec
    }

    pub fn rating_toggle(&self) -> bool {
        self.rating_toggle
    }

    pub fn get(&self, id: RecordId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Re-read the store and reset the view to the full, unsorted set.
    pub fn refresh(&mut self) -> Result<()> {
        let records = read_all(&self.store)?;
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let id = self.allocate_id();
            entries.push(CatalogEntry { id, record });
        }
        self.entries = entries;
        info!(count = self.entries.len(), "loaded catalog");
        self.reset_view();
        Ok(())
    }

    /// Validate, append and persist a new record.
    pub fn add(&mut self, record: GameRecord) -> Result<RecordId, CommandError> {
        validate_record(&record)?;
        let id = self.allocate_id();
        info!(%id, name = %record.name, "adding game");
        self.entries.push(CatalogEntry { id, record });
        self.persist()?;
        Ok(id)
    }

    /// Replace the record behind `id` after validating the new values.
    pub fn update(&mut self, id: RecordId, record: GameRecord) -> Result<(), CommandError> {
        let index = self.position(id)?;
        validate_record(&record)?;
        info!(%id, name = %record.name, "updating game");
        self.entries[index].record = record;
        self.persist()?;
        Ok(())
    }

    /// Remove the record behind `id`, returning it.
    pub fn delete(&mut self, id: RecordId) -> Result<GameRecord, CommandError> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        info!(%id, name = %removed.record.name, "deleting game");
        self.persist()?;
        Ok(removed.record)
    }

    /// Order the view by rating, highest first. The toggle flips on every
    /// call without changing the direction.
    pub fn sort_by_rating(&mut self) {
        self.spec.push_sort(SortKey::RatingDescending);
        self.rating_toggle = !self.rating_toggle;
        self.recompute_view();
    }

    /// Order the view by platform, ascending on the first call and then
    /// alternating. Returns the direction just applied.
    pub fn sort_by_platform(&mut self) -> bool {
        let ascending = self.platform_ascending;
        self.spec.push_sort(SortKey::Platform { ascending });
        self.platform_ascending = !self.platform_ascending;
        self.recompute_view();
        ascending
    }

    /// Narrow the view to the best rated record. Ratings that do not parse
    /// as a number are skipped; on ties the earliest record wins. When no
    /// record qualifies the view is left alone and `None` is returned.
    pub fn highest_rated(&mut self) -> Option<CatalogEntry> {
        let mut best: Option<&CatalogEntry> = None;
        let mut best_value = -1.0_f64;
        for entry in &self.entries {
            let Ok(value) = entry.record.rating.trim().parse::<f64>() else {
                continue;
            };
            if value > best_value {
                best_value = value;
                best = Some(entry);
            }
        }

        let best = best.cloned()?;
        self.spec = ViewSpec {
            filter: ViewFilter::Single(best.id),
            sorts: Vec::new(),
        };
        self.recompute_view();
        Some(best)
    }

    /// Case-insensitive substring match on names. A blank term reloads the
    /// store and shows everything. Returns the number of rows now visible.
    pub fn search(&mut self, term: &str) -> Result<usize> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            self.refresh()?;
            return Ok(self.view.len());
        }

        self.spec = ViewSpec {
            filter: ViewFilter::NameContains(term),
            sorts: Vec::new(),
        };
        self.recompute_view();
        debug!(matches = self.view.len(), "searched catalog");
        Ok(self.view.len())
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: RecordId) -> Result<usize, CommandError> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CommandError::NotFound(id))
    }

    /// Write the full set and show it unfiltered.
    fn persist(&mut self) -> Result<()> {
        let records: Vec<GameRecord> = self
            .entries
            .iter()
            .map(|entry| entry.record.clone())
            .collect();
        write_all(&self.store, &records)?;
        self.reset_view();
        Ok(())
    }

    fn reset_view(&mut self) {
        self.spec = ViewSpec::default();
        self.recompute_view();
    }

    fn recompute_view(&mut self) {
        let mut rows: Vec<CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| match &self.spec.filter {
                ViewFilter::All => true,
                ViewFilter::NameContains(term) => entry.record.name.to_lowercase().contains(term),
                ViewFilter::Single(id) => entry.id == *id,
            })
            .cloned()
            .collect();

        for key in &self.spec.sorts {
            rows.sort_by(|a, b| key.compare(&a.record, &b.record));
        }

        self.view = rows;
    }
}
