use anyhow::{Context, Result};
use reqwest::header::COOKIE;
use serde::Deserialize;

use crate::http_client::http_client;

const LEADERBOARD_URL: &str = "https://www.nytimes.com/svc/crosswords/v6/leaderboard/mini";

/// Per-date fetch result. Transport errors and non-success statuses collapse
/// to `Absent` so the caller can skip the day and keep going.
#[derive(Debug)]
pub enum FetchOutcome {
    Present(LeaderboardRecord),
    Absent,
}

/// One day's leaderboard as returned by the source. Entry order is whatever
/// the source sent; ascending rank is assumed but never verified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardRecord {
    #[serde(default, rename = "data")]
    pub entries: Vec<LeaderboardEntry>,
}

/// Raw leaderboard entry. Every field is optional on the wire; validity is
/// decided by `solve_time` when the entry is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, rename = "userID")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub score: Option<SolveScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveScore {
    #[serde(default, rename = "secondsSpentSolving")]
    pub seconds_spent_solving: Option<u32>,
}

impl LeaderboardEntry {
    /// Name and solving time when both are present. `None` marks the entry
    /// invalid for aggregation.
    pub fn solve_time(&self) -> Option<(&str, u32)> {
        let name = self.name.as_deref()?;
        let seconds = self.score.as_ref()?.seconds_spent_solving?;
        Some((name, seconds))
    }
}

/// One blocking GET for `date`, authenticated via the NYT-S session cookie.
/// Never retries and never fails upward: any error becomes `Absent` with a
/// diagnostic on stderr.
pub fn fetch_leaderboard_for_date(date: &str, token: &str) -> FetchOutcome {
    match try_fetch(date, token) {
        Ok(record) => FetchOutcome::Present(record),
        Err(err) => {
            eprintln!("error fetching leaderboard for {date}: {err:#}");
            FetchOutcome::Absent
        }
    }
}

fn try_fetch(date: &str, token: &str) -> Result<LeaderboardRecord> {
    let client = http_client()?;
    let url = format!("{LEADERBOARD_URL}/{date}.json");

    let resp = client
        .get(&url)
        .header(COOKIE, format!("NYT-S={token};"))
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }

    parse_leaderboard_json(&body)
}

pub fn parse_leaderboard_json(raw: &str) -> Result<LeaderboardRecord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(LeaderboardRecord::default());
    }
    serde_json::from_str(trimmed).context("invalid leaderboard json")
}
