//! Civil-date helpers.
//!
//! Dates are stored in the sortable ISO `YYYY-MM-DD` form and converted
//! to the `DD/MM/YYYY` display form only at presentation time.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Format of dates in the persisted form.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Format of dates on rendered pages.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Return today's civil date in local time.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Render a date in display form.
#[must_use]
pub fn display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Render an optional date in display form, empty when absent.
#[must_use]
pub fn display_opt(date: Option<NaiveDate>) -> String {
    date.map(display).unwrap_or_default()
}

/// Reformat a raw ISO date string for display.
///
/// Fails soft: input that does not parse as `YYYY-MM-DD` is returned
/// unchanged, and empty input stays empty.
#[must_use]
pub fn to_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw, ISO_FORMAT) {
        Ok(date) => display(date),
        Err(_) => raw.to_string(),
    }
}

/// Parse a date in the persisted `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the input does not parse.
pub fn parse_iso(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, ISO_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}
