use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use mini_leaderboard::aggregate::{Aggregation, DateOutcome};
use mini_leaderboard::date_range;
use mini_leaderboard::leaderboard_fetch::{self, FetchOutcome};
use mini_leaderboard::report;

const DEFAULT_OUTPUT: &str = "leaderboard_stats.csv";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let start = flag_value(&args, "--start")
        .ok_or_else(|| anyhow!("--start YYYY-MM-DD is required"))?;
    let end = flag_value(&args, "--end").unwrap_or_else(date_range::today);
    let usernames = flag_value(&args, "--users")
        .map(|raw| parse_usernames(&raw))
        .ok_or_else(|| anyhow!("--users name,name is required"))?;
    if usernames.is_empty() {
        return Err(anyhow!("no usernames resolved from --users"));
    }
    let token = flag_value(&args, "--token")
        .or_else(token_from_env)
        .ok_or_else(|| anyhow!("auth token missing: pass --token or set NYT_S"))?;
    let output = flag_value(&args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let dates = date_range::generate_date_range(&start, &end)?;

    let mut agg = Aggregation::new(&usernames);
    let mut contributed = 0usize;
    let mut skipped = 0usize;
    for (idx, date) in dates.iter().enumerate() {
        println!("Processing date {}/{}: {date}", idx + 1, dates.len());
        match leaderboard_fetch::fetch_leaderboard_for_date(date, &token) {
            FetchOutcome::Present(record) => match agg.record_date(&record) {
                DateOutcome::Recorded => contributed += 1,
                DateOutcome::Skipped => skipped += 1,
            },
            FetchOutcome::Absent => skipped += 1,
        }
    }

    let rows = agg.finalize();
    report::write_report(&output, &rows)
        .with_context(|| format!("failed writing report to {}", output.display()))?;

    println!(
        "Dates processed: {} (contributed {}, skipped {})",
        dates.len(),
        contributed,
        skipped
    );
    println!("Aggregated stats saved to {}", output.display());
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

fn token_from_env() -> Option<String> {
    std::env::var("NYT_S")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|token| !token.is_empty())
}

// Comma-separated, order preserved, duplicates dropped.
fn parse_usernames(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for part in raw.split(',') {
        let name = part.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            out.push(name.to_string());
        }
    }
    out
}
