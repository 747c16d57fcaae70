use crate::leaderboard_fetch::LeaderboardRecord;
use crate::stats;

/// Whether a date's record ended up in the accumulators or was skipped under
/// the all-or-nothing participation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    Recorded,
    Skipped,
}

/// Running state for one tracked username.
#[derive(Debug, Clone)]
pub struct UserAccumulator {
    pub name: String,
    pub times: Vec<u32>,
    pub first_place_count: u32,
}

/// Per-run accumulator over every tracked username, in caller-supplied
/// order. Owned by the caller and threaded through each date's record.
#[derive(Debug, Clone)]
pub struct Aggregation {
    users: Vec<UserAccumulator>,
}

/// Finalized per-user summary. Minute variants of the time columns are
/// derived at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub username: String,
    pub total_seconds: u64,
    pub mean_seconds: f64,
    pub median_seconds: f64,
    pub iqr_seconds: f64,
    pub participation_count: usize,
    pub first_place_count: u32,
    pub first_place_pct: f64,
}

impl Aggregation {
    pub fn new(usernames: &[String]) -> Self {
        Self {
            users: usernames
                .iter()
                .map(|name| UserAccumulator {
                    name: name.clone(),
                    times: Vec::new(),
                    first_place_count: 0,
                })
                .collect(),
        }
    }

    /// Fold one date's leaderboard into the accumulators.
    ///
    /// The date counts only when every tracked username appears with a valid
    /// solving time; partial participation skips the date for everyone. The
    /// smallest time among tracked users wins the day, ties going to the
    /// lexicographically smaller username.
    pub fn record_date(&mut self, record: &LeaderboardRecord) -> DateOutcome {
        let mut solved: Vec<(&str, u32)> = record
            .entries
            .iter()
            .filter_map(|entry| entry.solve_time())
            .filter(|(name, _)| self.users.iter().any(|user| user.name == *name))
            .collect();

        if solved.len() != self.users.len() {
            return DateOutcome::Skipped;
        }

        solved.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        if let Some(&(winner, _)) = solved.first() {
            if let Some(user) = self.user_mut(winner) {
                user.first_place_count += 1;
            }
        }
        for &(name, seconds) in &solved {
            if let Some(user) = self.user_mut(name) {
                user.times.push(seconds);
            }
        }
        DateOutcome::Recorded
    }

    /// Compute summary rows, one per tracked username in input order. Users
    /// with zero participation produce all-zero rows.
    pub fn finalize(self) -> Vec<SummaryRow> {
        self.users.into_iter().map(summarize).collect()
    }

    fn user_mut(&mut self, name: &str) -> Option<&mut UserAccumulator> {
        self.users.iter_mut().find(|user| user.name == name)
    }
}

fn summarize(user: UserAccumulator) -> SummaryRow {
    let count = user.times.len();
    let total: u64 = user.times.iter().map(|&t| u64::from(t)).sum();
    let seconds: Vec<f64> = user.times.iter().map(|&t| f64::from(t)).collect();

    let mean = if count > 0 {
        total as f64 / count as f64
    } else {
        0.0
    };
    let first_place_pct = if count > 0 {
        f64::from(user.first_place_count) / count as f64 * 100.0
    } else {
        0.0
    };

    SummaryRow {
        username: user.name,
        total_seconds: total,
        mean_seconds: mean,
        median_seconds: stats::median(&seconds),
        iqr_seconds: stats::iqr(&seconds),
        participation_count: count,
        first_place_count: user.first_place_count,
        first_place_pct,
    }
}
