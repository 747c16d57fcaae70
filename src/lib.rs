pub mod aggregate;
pub mod date_range;
pub mod http_client;
pub mod leaderboard_fetch;
pub mod report;
pub mod stats;
