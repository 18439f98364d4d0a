//! Leaderboard State
//!
//! Mirrors the dashboard lifecycle: fetch on mount, poll each frame, drop on
//! unmount. Rows keep the order the data source returned; rank is position.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::data_source::{InternDataSource, LEADERBOARD};
use super::loader::{LoadStatus, Loadable, PendingFetch};
use crate::shared::currency::format_rupees;
use crate::shared::intern::LeaderboardEntry;

pub struct LeaderboardState {
    entries: Loadable<Vec<LeaderboardEntry>>,
    /// Name of the signed-in intern, whose row is highlighted
    highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardModel {
    Loading,
    Failed { message: String },
    Loaded(Vec<LeaderboardRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub id: u64,
    pub rank: usize,
    pub name: String,
    pub donations: String,
    pub highlighted: bool,
}

impl LeaderboardState {
    pub fn mount(source: Arc<dyn InternDataSource>, runtime: &Handle, highlight: Option<String>) -> Self {
        let pending = PendingFetch::spawn(runtime, move |cancel| async move {
            source.fetch_leaderboard(cancel).await
        });
        Self {
            entries: Loadable::start(LEADERBOARD, pending),
            highlight,
        }
    }

    pub fn poll(&mut self) -> bool {
        self.entries.poll()
    }

    pub fn wait(&mut self, timeout: std::time::Duration) -> bool {
        self.entries.wait(timeout)
    }

    pub fn status(&self) -> &LoadStatus<Vec<LeaderboardEntry>> {
        self.entries.status()
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    pub fn model(&self) -> LeaderboardModel {
        match self.entries.status() {
            LoadStatus::Loading => LeaderboardModel::Loading,
            LoadStatus::Failed(message) => LeaderboardModel::Failed {
                message: message.clone(),
            },
            LoadStatus::Loaded(entries) => {
                LeaderboardModel::Loaded(rank_rows(entries, self.highlight.as_deref()))
            }
        }
    }
}

/// Build table rows in received order, ranking by 1-based position.
pub fn rank_rows(entries: &[LeaderboardEntry], highlight: Option<&str>) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRow {
            id: entry.id,
            rank: index + 1,
            name: entry.name.clone(),
            donations: format_rupees(entry.donations),
            highlighted: highlight == Some(entry.name.as_str()),
        })
        .collect()
}
