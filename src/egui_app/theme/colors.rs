//! Color Constants for the Intern Portal
//!
//! A light dashboard palette: grey page background, white cards, blue primary
//! actions, green money figures.

use eframe::egui::Color32;

/// Page background - Light grey
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Card background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Pale grey
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Top bar background - Slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Headings
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Body text
pub const TEXT_BODY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Primary action - Blue
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

/// Logout - Red
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Leaderboard action - Amber
pub const BUTTON_ACCENT: Color32 = Color32::from_rgb(0xFA, 0xCC, 0x15);

/// Neutral button (back)
pub const BUTTON_NEUTRAL: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Donation amounts
pub const MONEY: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Referral code chip
pub const CODE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Signed-in intern's leaderboard row
pub const HIGHLIGHT_ROW: Color32 = Color32::from_rgb(0xEF, 0xF6, 0xFF);

/// Table header band
pub const TABLE_HEADER_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Unlocked reward marker
pub const UNLOCKED: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Locked reward marker
pub const LOCKED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Rewards heading icon
pub const REWARDS_ICON: Color32 = Color32::from_rgb(0xA8, 0x55, 0xF7);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Spinner and loading text
pub const SPINNER: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
