//! Dashboard loading and rendering decisions

use std::sync::Arc;

use async_trait::async_trait;
use intern_portal::egui_app::dashboard::DashboardModel;
use intern_portal::egui_app::InternDataSource;
use intern_portal::shared::error::{PortalError, Result};
use intern_portal::shared::intern::{InternProfile, LeaderboardEntry};
use tokio_util::sync::CancellationToken;

use crate::common::TestApp;

/// Backend that is always down
struct UnavailableSource;

#[async_trait]
impl InternDataSource for UnavailableSource {
    async fn fetch_intern_profile(&self, _cancel: CancellationToken) -> Result<InternProfile> {
        Err(PortalError::fetch_failed("intern-profile", "connection refused"))
    }

    async fn fetch_leaderboard(&self, _cancel: CancellationToken) -> Result<Vec<LeaderboardEntry>> {
        Err(PortalError::fetch_failed("leaderboard", "connection refused"))
    }
}

/// Backend that abandons its own requests
struct AbortingSource;

#[async_trait]
impl InternDataSource for AbortingSource {
    async fn fetch_intern_profile(&self, _cancel: CancellationToken) -> Result<InternProfile> {
        Err(PortalError::cancelled("intern-profile"))
    }

    async fn fetch_leaderboard(&self, _cancel: CancellationToken) -> Result<Vec<LeaderboardEntry>> {
        Err(PortalError::cancelled("leaderboard"))
    }
}

#[test]
fn test_loading_then_formatted_total() {
    let mut app = TestApp::new();
    app.sign_in("raj@example.org", "pw");

    let model = app.state.dashboard.as_ref().map(|d| d.model());
    assert_eq!(model, Some(DashboardModel::Loading));

    app.settle();
    let card = match app.state.dashboard.as_ref().map(|d| d.model()) {
        Some(DashboardModel::Loaded(card)) => card,
        other => panic!("Expected loaded dashboard, got {:?}", other),
    };
    assert_eq!(card.donations, "₹12,500");
    crate::assert_contains!(card.donations, "12,500");
    assert_eq!(card.referral_code, "rajkumar2025");
    assert_eq!(card.role, "Fundraising Intern");
}

#[test]
fn test_rewards_rendered_from_threshold() {
    let mut app = TestApp::new();
    app.sign_in("raj@example.org", "pw");
    app.settle();

    let card = match app.state.dashboard.as_ref().map(|d| d.model()) {
        Some(DashboardModel::Loaded(card)) => card,
        other => panic!("Expected loaded dashboard, got {:?}", other),
    };
    let status: Vec<(&str, bool)> = card
        .rewards
        .iter()
        .map(|r| (r.label.as_str(), r.unlocked))
        .collect();
    assert_eq!(
        status,
        vec![
            ("₹5,000: Certificate of Appreciation", true),
            ("₹10,000: Letter of Recommendation (LOR)", true),
            ("₹25,000: LinkedIn Endorsement", false),
            ("₹50,000: Bonus Swag Kit", false),
        ]
    );
}

#[test]
fn test_failed_fetch_shows_error_state() {
    let mut app = TestApp::with_source(Arc::new(UnavailableSource));
    app.sign_in("raj@example.org", "pw");
    app.settle();

    match app.state.dashboard.as_ref().map(|d| d.model()) {
        Some(DashboardModel::Failed { message }) => {
            crate::assert_contains!(message, "connection refused");
        }
        other => panic!("Expected failed dashboard, got {:?}", other),
    }
    // No profile, so the session never learns a name
    assert_eq!(app.state.session.as_ref().and_then(|s| s.intern_name.clone()), None);
}

#[test]
fn test_source_cancel_does_not_hang_loading() {
    let mut app = TestApp::with_source(Arc::new(AbortingSource));
    app.sign_in("raj@example.org", "pw");
    app.settle();

    match app.state.dashboard.as_ref().map(|d| d.model()) {
        Some(DashboardModel::Failed { message }) => {
            crate::assert_contains!(message, "cancelled");
        }
        other => panic!("Expected failed dashboard, got {:?}", other),
    }
}
