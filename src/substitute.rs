//! Placeholder substitution over rendered markup.

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::error::{Error, Result};
use crate::template::{DATE_PLACEHOLDER, NAME_PLACEHOLDER};

/// Replace every placeholder occurrence in the rendered markup.
///
/// Substitution always starts from the markup passed in, so repeated calls
/// against the same original rendering are idempotent rather than
/// compounding. A blank (empty or whitespace-only) name is refused and the
/// input is returned untouched inside the error path.
///
/// The date is expected in ISO `YYYY-MM-DD` form and is reformatted to the
/// unpadded `M/D/YYYY` display form; a value that does not parse as a date
/// is inserted verbatim.
pub fn substitute(rendered: &str, name: &str, date: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::MissingField("name"));
    }

    let display_date = format_display_date(date);
    debug!(
        "substituting placeholders: name={:?} date={:?}",
        name, display_date
    );

    Ok(rendered
        .replace(NAME_PLACEHOLDER, name)
        .replace(DATE_PLACEHOLDER, &display_date))
}

/// Convert an ISO date string to unpadded `M/D/YYYY`, passing unparsable
/// input through unchanged.
fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}
