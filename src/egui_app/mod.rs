//! egui Native Desktop App Module
//!
//! The intern portal desktop application built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Environment-driven configuration (fetch delay)
//! - **`types`** - Navigation states (`AppView`) and user actions (`NavEvent`)
//! - **`auth`** - Login/signup form state
//! - **`data_source`** - `InternDataSource` trait and the delayed mock
//! - **`loader`** - Per-view load status and in-flight fetches
//! - **`dashboard`** / **`leaderboard`** - View state and view models
//! - **`state`** - `AppState`, the root navigator
//! - **`views`** - egui painting for each view
//! - **`theme`** - Palette and frame helpers
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── config.rs       - Configuration
//! ├── types.rs        - AppView / NavEvent
//! ├── auth.rs         - Auth form
//! ├── data_source.rs  - Data source trait + mock
//! ├── loader.rs       - LoadStatus / PendingFetch / Loadable
//! ├── dashboard.rs    - Dashboard state
//! ├── leaderboard.rs  - Leaderboard state
//! ├── state/          - AppState
//! ├── views/          - egui views
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin intern_portal
//! ```

pub mod config;
pub mod auth;
pub mod types;
pub mod data_source;
pub mod loader;
pub mod dashboard;
pub mod leaderboard;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::{AuthForm, AuthMode, AuthSubmission};
pub use types::{AppView, NavEvent};
pub use data_source::{InternDataSource, MockDataSource};
pub use loader::LoadStatus;
pub use state::{AppState, Session};
