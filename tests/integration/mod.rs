//! Integration tests driving `AppState` through its public API

pub mod navigation_test;
pub mod dashboard_test;
pub mod leaderboard_test;
