//! Leaderboard ordering, ranking and highlighting

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use intern_portal::egui_app::leaderboard::{LeaderboardModel, LeaderboardRow};
use intern_portal::egui_app::{InternDataSource, MockDataSource, NavEvent};
use intern_portal::shared::error::Result;
use intern_portal::shared::intern::{InternProfile, LeaderboardEntry};
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

use crate::common::TestApp;

/// Serves a caller-chosen leaderboard, unsorted on purpose
struct FixedSource {
    entries: Vec<LeaderboardEntry>,
}

#[async_trait]
impl InternDataSource for FixedSource {
    async fn fetch_intern_profile(&self, cancel: CancellationToken) -> Result<InternProfile> {
        MockDataSource::new(Duration::ZERO).fetch_intern_profile(cancel).await
    }

    async fn fetch_leaderboard(&self, _cancel: CancellationToken) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.entries.clone())
    }
}

fn loaded_rows(app: &TestApp) -> Vec<LeaderboardRow> {
    match app.state.leaderboard.as_ref().map(|l| l.model()) {
        Some(LeaderboardModel::Loaded(rows)) => rows,
        other => panic!("Expected loaded leaderboard, got {:?}", other),
    }
}

fn open_leaderboard(app: &mut TestApp) {
    app.sign_in("raj@example.org", "pw");
    app.settle();
    assert!(app.state.dispatch(NavEvent::ShowLeaderboard));
    assert_eq!(
        app.state.leaderboard.as_ref().map(|l| l.model()),
        Some(LeaderboardModel::Loading)
    );
    app.settle();
}

#[test]
fn test_mock_leaderboard_table() {
    let mut app = TestApp::new();
    open_leaderboard(&mut app);

    let table: Vec<(usize, String, String, bool)> = loaded_rows(&app)
        .into_iter()
        .map(|r| (r.rank, r.name, r.donations, r.highlighted))
        .collect();
    assert_eq!(
        table,
        vec![
            (1, "Priya Sharma".to_string(), "₹21,000".to_string(), false),
            (2, "Amit Singh".to_string(), "₹18,500".to_string(), false),
            (3, "Sneha Patel".to_string(), "₹16,000".to_string(), false),
            (4, "Raj Kumar".to_string(), "₹12,500".to_string(), true),
            (5, "Anjali Gupta".to_string(), "₹9,800".to_string(), false),
        ]
    );
}

#[test]
fn test_rank_follows_received_order() {
    let entries = vec![
        LeaderboardEntry { id: 10, name: "Amit".to_string(), donations: 18_500 },
        LeaderboardEntry { id: 11, name: "Priya".to_string(), donations: 21_000 },
    ];
    let mut app = TestApp::with_source(Arc::new(FixedSource { entries }));
    open_leaderboard(&mut app);

    let rows = loaded_rows(&app);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].rank, rows[0].name.as_str()), (1, "Amit"));
    assert_eq!((rows[1].rank, rows[1].name.as_str()), (2, "Priya"));
    assert!(rows.iter().all(|r| !r.highlighted));
}

#[test]
fn test_empty_leaderboard() {
    let mut app = TestApp::with_source(Arc::new(FixedSource { entries: Vec::new() }));
    open_leaderboard(&mut app);
    assert!(loaded_rows(&app).is_empty());
}
