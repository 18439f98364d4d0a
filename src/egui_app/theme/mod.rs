//! Theme Module
//!
//! Palette and frame builders for the intern portal.
//!
//! - `colors` - color constants
//! - `styles` - global style and frame/button helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::MONEY, "₹12,500");
//! });
//! ```

pub mod colors;
pub mod styles;
