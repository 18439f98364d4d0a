//! Navigation state machine, exercised end to end with view mounting

use intern_portal::egui_app::{AppView, AuthMode, NavEvent};

use crate::common::TestApp;

#[test]
fn test_toggle_twice_returns_to_login() {
    let mut app = TestApp::new();
    app.state.auth_form.email = "typed@example.org".to_string();

    assert!(app.state.dispatch(NavEvent::Toggle));
    crate::assert_view!(app.state, AppView::Signup);
    assert_eq!(app.state.auth_form.mode, AuthMode::Signup);

    assert!(app.state.dispatch(NavEvent::Toggle));
    crate::assert_view!(app.state, AppView::Login);
    assert_eq!(app.state.auth_form.mode, AuthMode::Login);

    assert_eq!(app.state.auth_form.email, "typed@example.org");
    assert!(app.state.session.is_none());
    assert!(app.state.dashboard.is_none());
    assert!(app.state.leaderboard.is_none());
}

#[test]
fn test_signup_submit_reaches_dashboard() {
    let mut app = TestApp::new();
    app.state.dispatch(NavEvent::Toggle);

    assert!(app.sign_in("new@example.org", "pw"));
    crate::assert_view!(app.state, AppView::Dashboard);
}

#[test]
fn test_required_fields_block_silently() {
    let mut app = TestApp::new();

    assert!(!app.sign_in("", "pw"));
    crate::assert_view!(app.state, AppView::Login);

    assert!(!app.sign_in("a@b.c", ""));
    crate::assert_view!(app.state, AppView::Login);
    // Blocked submit leaves typed values alone
    assert_eq!(app.state.auth_form.email, "a@b.c");
}

#[test]
fn test_whitespace_password_still_signs_in() {
    let mut app = TestApp::new();

    assert!(app.sign_in("raj@example.org", "   "));
    crate::assert_view!(app.state, AppView::Dashboard);
}

#[test]
fn test_leaderboard_round_trip() {
    let mut app = TestApp::new();
    app.sign_in("raj@example.org", "pw");
    app.settle();

    assert!(app.state.dispatch(NavEvent::ShowLeaderboard));
    crate::assert_view!(app.state, AppView::Leaderboard);
    app.settle();

    assert!(app.state.dispatch(NavEvent::Back));
    crate::assert_view!(app.state, AppView::Dashboard);
    assert!(app.state.leaderboard.is_none());
    app.settle();

    let profile = app.state.dashboard.as_ref().and_then(|d| d.profile()).cloned();
    assert_eq!(profile.map(|p| p.name), Some("Raj Kumar".to_string()));
}

#[test]
fn test_logout_after_any_history() {
    let mut app = TestApp::new();
    app.sign_in("raj@example.org", "pw");
    app.state.dispatch(NavEvent::ShowLeaderboard);
    app.state.dispatch(NavEvent::Back);
    app.state.dispatch(NavEvent::ShowLeaderboard);
    app.state.dispatch(NavEvent::Back);

    assert!(app.state.dispatch(NavEvent::Logout));
    crate::assert_view!(app.state, AppView::Login);
    assert!(app.state.session.is_none());
    assert!(app.state.auth_form.email.is_empty());
}

#[test]
fn test_events_outside_their_view_are_ignored() {
    let mut app = TestApp::new();
    assert!(!app.state.dispatch(NavEvent::Logout));
    assert!(!app.state.dispatch(NavEvent::Back));
    assert!(!app.state.dispatch(NavEvent::ShowLeaderboard));
    crate::assert_view!(app.state, AppView::Login);

    app.sign_in("raj@example.org", "pw");
    assert!(!app.state.dispatch(NavEvent::Toggle));
    assert!(!app.state.dispatch(NavEvent::Back));
    crate::assert_view!(app.state, AppView::Dashboard);
}
