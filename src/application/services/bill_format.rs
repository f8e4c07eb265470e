//! Display formatting and ordering for bill lists.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Formats a `YYYY-MM-DD` date as `4 Avr. 04`.
///
/// Dates that do not parse are returned unchanged.
#[must_use]
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {}. {:02}",
            parsed.day(),
            MONTHS[parsed.month0() as usize],
            parsed.year().rem_euclid(100)
        ),
        Err(e) => {
            warn!(date, error = %e, "Unparsable bill date, showing raw value");
            date.to_string()
        }
    }
}

/// Sorts items by date string, most recent first. Ties keep their order.
pub fn sort_by_date_desc<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| date(b).cmp(date(a)));
}
