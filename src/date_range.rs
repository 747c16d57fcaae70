use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every calendar day from `start` to `end` inclusive, ascending, as
/// `YYYY-MM-DD` strings. A start after the end yields an empty range.
pub fn generate_date_range(start: &str, end: &str) -> Result<Vec<String>> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day.format(DATE_FORMAT).to_string());
        day = day + Duration::days(1);
    }
    Ok(dates)
}

/// Current day on the local clock, `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}
