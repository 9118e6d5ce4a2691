//! Domain models for the game catalog. Records stay plain text holders: every
//! field is kept exactly as typed so the CSV file round-trips byte for byte,
//! and typed checks only happen in `validation` right before a write.

use std::fmt;

/// The nine catalog columns, in file order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Type,
    ReleaseDate,
    Developer,
    Platform,
    Downloads,
    Version,
    Rating,
    MinAge,
}

impl Column {
    /// Every column in the order used by the header row and the form.
    pub const ALL: [Column; 9] = [
        Column::Name,
        Column::Type,
        Column::ReleaseDate,
        Column::Developer,
        Column::Platform,
        Column::Downloads,
        Column::Version,
        Column::Rating,
        Column::MinAge,
    ];

    /// Header name written to the first row of the store file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Type => "type",
            Column::ReleaseDate => "release_date",
            Column::Developer => "developer",
            Column::Platform => "platform",
            Column::Downloads => "downloads",
            Column::Version => "version",
            Column::Rating => "rating",
            Column::MinAge => "min_age",
        }
    }

    /// Human-facing label used by the form and the table header.
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Type => "Type",
            Column::ReleaseDate => "Release Date",
            Column::Developer => "Developer",
            Column::Platform => "Platform",
            Column::Downloads => "Downloads",
            Column::Version => "Version",
            Column::Rating => "Rating",
            Column::MinAge => "Min Age",
        }
    }

    /// Position of the column inside a row.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Number of fields every stored row must carry.
pub const FIELD_COUNT: usize = Column::ALL.len();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One game entry. Numeric-looking fields (downloads, rating, min age) stay
/// textual; see `validation::validate_record` for the rules enforced on write.
pub struct GameRecord {
    pub name: String,
    /// Genre or category. Named `kind` because `type` is reserved.
    pub kind: String,
    /// `DD-MM-YYYY` text.
    pub release_date: String,
    pub developer: String,
    pub platform: String,
    pub downloads: String,
    pub version: String,
    pub rating: String,
    pub min_age: String,
}

impl GameRecord {
    /// Build a record from exactly nine values. Any other count yields `None`,
    /// which is how the store drops malformed rows.
    pub fn from_fields<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = fields.into_iter().map(Into::into).collect();
        let values: [String; FIELD_COUNT] = values.try_into().ok()?;
        let [name, kind, release_date, developer, platform, downloads, version, rating, min_age] =
            values;
        Some(Self {
            name,
            kind,
            release_date,
            developer,
            platform,
            downloads,
            version,
            rating,
            min_age,
        })
    }

    /// Borrow the value stored for `column`.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Type => &self.kind,
            Column::ReleaseDate => &self.release_date,
            Column::Developer => &self.developer,
            Column::Platform => &self.platform,
            Column::Downloads => &self.downloads,
            Column::Version => &self.version,
            Column::Rating => &self.rating,
            Column::MinAge => &self.min_age,
        }
    }

    /// Mutable access used by the form when it edits a single column.
    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Name => &mut self.name,
            Column::Type => &mut self.kind,
            Column::ReleaseDate => &mut self.release_date,
            Column::Developer => &mut self.developer,
            Column::Platform => &mut self.platform,
            Column::Downloads => &mut self.downloads,
            Column::Version => &mut self.version,
            Column::Rating => &mut self.rating,
            Column::MinAge => &mut self.min_age,
        }
    }

    /// All nine values in column order, ready for a CSV row or a table row.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        Column::ALL.map(|column| self.field(column))
    }

    /// Copy of the record with every value trimmed, matching what the form
    /// submits.
    pub fn trimmed(&self) -> Self {
        let mut trimmed = self.clone();
        for column in Column::ALL {
            let value = trimmed.field_mut(column);
            *value = value.trim().to_string();
        }
        trimmed
    }
}

/// Session-scoped identity for a record held in memory. Ids are handed out
/// from a counter that only grows, so an id taken from an old view can never
/// point at a different record after a reload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record paired with its in-memory id.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: RecordId,
    pub record: GameRecord,
}
