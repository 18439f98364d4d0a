//! Shared Module
//!
//! Platform-agnostic types used by the desktop app: the intern program data
//! model, rupee formatting, error types and configuration. Nothing here depends
//! on egui, so these types can be reused by a future backend client.

/// Intern profile, leaderboard and reward tier records
pub mod intern;

/// en-IN currency formatting
pub mod currency;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use intern::{InternProfile, LeaderboardEntry, RewardTier, REWARD_TIERS};
pub use currency::{format_en_in, format_rupees};
pub use error::PortalError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
