//! Intern Portal - Main Library
//!
//! A native desktop dashboard for a fundraising intern program: a login/signup
//! screen, a dashboard showing the intern's referral code, donation total and
//! reward tiers, and a donation leaderboard.
//!
//! # Module Structure
//!
//! - **`shared`** - egui-independent types
//!   - Intern profile, leaderboard entry and reward tier records
//!   - en-IN rupee formatting
//!   - Error and configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Navigation state machine and per-view state
//!   - Mock data source with simulated latency
//!   - Views and theme
//!
//! # Data Flow
//!
//! Views never block. Entering the dashboard or leaderboard spawns a fetch on
//! a small tokio runtime; the result comes back over a channel that the view
//! polls each frame. Leaving a view drops its state and cancels its fetch.
//!
//! # Error Handling
//!
//! - `shared::error::PortalError` for data-source failures
//! - `shared::config::ConfigError` for configuration problems
//! - Failed fetches surface as an error state in the view, distinct from loading

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
