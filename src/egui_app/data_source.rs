//! Intern Data Source
//!
//! The dashboard and leaderboard read their records through [`InternDataSource`].
//! [`MockDataSource`] serves embedded fixtures after a fixed delay to simulate
//! network latency; a real HTTP client can implement the same trait later.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::shared::error::{PortalError, Result};
use crate::shared::intern::{InternProfile, LeaderboardEntry};

pub const INTERN_PROFILE: &str = "intern-profile";
pub const LEADERBOARD: &str = "leaderboard";

const INTERN_PROFILE_JSON: &str = include_str!("../shared/fixtures/intern_profile.json");
const LEADERBOARD_JSON: &str = include_str!("../shared/fixtures/leaderboard.json");

/// Read operations backing the dashboard views
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InternDataSource: Send + Sync {
    /// Fetch the signed-in intern's profile.
    ///
    /// Returns `PortalError::Cancelled` if `cancel` fires first.
    async fn fetch_intern_profile(&self, cancel: CancellationToken) -> Result<InternProfile>;

    /// Fetch the leaderboard, highest donations first.
    ///
    /// The order is returned as-is; callers derive rank from position.
    async fn fetch_leaderboard(&self, cancel: CancellationToken) -> Result<Vec<LeaderboardEntry>>;
}

/// In-memory data source returning constant records after `delay`
#[derive(Debug, Clone)]
pub struct MockDataSource {
    delay: Duration,
}

impl MockDataSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_latency(&self, resource: &str, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("[MOCK] {} fetch cancelled during simulated delay", resource);
                Err(PortalError::cancelled(resource))
            }
            _ = tokio::time::sleep(self.delay) => Ok(()),
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(crate::shared::config::DEFAULT_FETCH_DELAY)
    }
}

fn decode<T: serde::de::DeserializeOwned>(resource: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| PortalError::fetch_failed(resource, e.to_string()))
}

#[async_trait]
impl InternDataSource for MockDataSource {
    async fn fetch_intern_profile(&self, cancel: CancellationToken) -> Result<InternProfile> {
        tracing::info!("[MOCK] Fetching intern data from mock backend...");
        self.simulate_latency(INTERN_PROFILE, &cancel).await?;

        let profile: InternProfile = decode(INTERN_PROFILE, INTERN_PROFILE_JSON)?;
        tracing::info!(
            "[MOCK] Data received: name={}, referral_code={}, total_donations={}",
            profile.name,
            profile.referral_code,
            profile.total_donations
        );
        Ok(profile)
    }

    async fn fetch_leaderboard(&self, cancel: CancellationToken) -> Result<Vec<LeaderboardEntry>> {
        tracing::info!("[MOCK] Fetching leaderboard data...");
        self.simulate_latency(LEADERBOARD, &cancel).await?;

        let entries: Vec<LeaderboardEntry> = decode(LEADERBOARD, LEADERBOARD_JSON)?;
        tracing::info!("[MOCK] Leaderboard data received: {} entries", entries.len());
        Ok(entries)
    }
}
