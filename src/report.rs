use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::SummaryRow;

const HEADER: [&str; 11] = [
    "Username",
    "Total Time (s)",
    "Total Time (min)",
    "Median Time (s)",
    "Median Time (min)",
    "Avg Time (s)",
    "Avg Time (min)",
    "IQR (s)",
    "Participation Count",
    "Rank 1 Count",
    "Rank 1 Percentage",
];

/// Write the summary rows as CSV, one row per tracked username in input
/// order. Overwrites any existing file at `path`.
pub fn write_report(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed opening report at {}", path.display()))?;

    writer.write_record(HEADER).context("write header")?;
    for row in rows {
        writer
            .write_record(report_row(row))
            .with_context(|| format!("write row for {}", row.username))?;
    }
    writer.flush().context("flush report")?;
    Ok(())
}

// Time-derived values round to one decimal, the percentage to two.
fn report_row(row: &SummaryRow) -> Vec<String> {
    vec![
        row.username.clone(),
        row.total_seconds.to_string(),
        format!("{:.1}", row.total_seconds as f64 / 60.0),
        format!("{:.1}", row.median_seconds),
        format!("{:.1}", row.median_seconds / 60.0),
        format!("{:.1}", row.mean_seconds),
        format!("{:.1}", row.mean_seconds / 60.0),
        format!("{:.1}", row.iqr_seconds),
        row.participation_count.to_string(),
        row.first_place_count.to_string(),
        format!("{:.2}", row.first_place_pct),
    ]
}
