//! Write-time checks for game records. The rules run in a fixed order and the
//! first failing rule decides the message shown to the user.

use thiserror::Error;

use crate::models::{Column, GameRecord};

/// Why a record was refused. The `Display` text is what the notice shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField(Column),
    #[error("Downloads must be an integer.")]
    Downloads,
    #[error("Rating must be a number (0-10).")]
    RatingNotNumber,
    #[error("Rating must be 0-10.")]
    RatingOutOfRange,
    #[error("Min Age must be integer.")]
    MinAge,
    #[error("Release Date must be DD-MM-YYYY.")]
    ReleaseDate,
}

/// Lowest and highest accepted rating, both inclusive.
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Check a record that is about to be written. Values are expected to be
/// trimmed already (the form does that).
pub fn validate_record(record: &GameRecord) -> Result<(), ValidationError> {
    if let Some(column) = Column::ALL
        .into_iter()
        .find(|column| record.field(*column).is_empty())
    {
        return Err(ValidationError::MissingField(column));
    }

    if record.downloads.parse::<i64>().is_err() {
        return Err(ValidationError::Downloads);
    }

    let rating = record
        .rating
        .parse::<f64>()
        .map_err(|_| ValidationError::RatingNotNumber)?;
    if !RATING_RANGE.contains(&rating) {
        return Err(ValidationError::RatingOutOfRange);
    }

    if record.min_age.parse::<i64>().is_err() {
        return Err(ValidationError::MinAge);
    }

    if !is_release_date_shaped(&record.release_date) {
        return Err(ValidationError::ReleaseDate);
    }

    Ok(())
}

/// `DD-MM-YYYY` shape only: ten characters, dashes at positions 2 and 5, and
/// digits between every dash. Day and month ranges are not checked.
pub fn is_release_date_shaped(date: &str) -> bool {
    let chars: Vec<char> = date.chars().collect();
    chars.len() == 10
        && chars[2] == '-'
        && chars[5] == '-'
        && date
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit()))
}
