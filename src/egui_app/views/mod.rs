use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod dashboard_view;
pub mod leaderboard_view;

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("🎗 Intern Portal").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if let Some(ref session) = state.session {
                        let who = session.intern_name.as_deref().unwrap_or(session.email.as_str());
                        ui.colored_label(colors::TEXT_LIGHT, who);
                    }
                });
            });
        });
}

/// Render the mounted view and apply whatever action it reported.
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let event = egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Login | AppView::Signup => auth_view::render(ui, &mut state.auth_form),
            AppView::Dashboard => state
                .dashboard
                .as_ref()
                .and_then(|dashboard| dashboard_view::render(ui, dashboard)),
            AppView::Leaderboard => state
                .leaderboard
                .as_ref()
                .and_then(|leaderboard| leaderboard_view::render(ui, leaderboard)),
        })
        .inner;

    if let Some(event) = event {
        state.dispatch(event);
    }
}
