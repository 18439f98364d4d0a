use eframe::egui;

use crate::egui_app::dashboard::{DashboardCard, DashboardModel, DashboardState};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::NavEvent;

pub fn render(ui: &mut egui::Ui, dashboard: &DashboardState) -> Option<NavEvent> {
    match dashboard.model() {
        DashboardModel::Loading => {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new().size(96.0).color(colors::SPINNER));
            });
            None
        }
        DashboardModel::Failed { message } => render_failed(ui, &message),
        DashboardModel::Loaded(card) => render_loaded(ui, &card),
    }
}

fn render_header(ui: &mut egui::Ui) -> Option<NavEvent> {
    let mut event = None;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Intern Dashboard")
                .size(30.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::filled_button("Logout", colors::BUTTON_DANGER)).clicked() {
                event = Some(NavEvent::Logout);
            }
        });
    });
    event
}

fn render_failed(ui: &mut egui::Ui, message: &str) -> Option<NavEvent> {
    let event = render_header(ui);
    ui.add_space(24.0);
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(colors::ERROR, egui::RichText::new("Could not load your dashboard.").strong());
        ui.label(egui::RichText::new(message).color(colors::TEXT_SECONDARY));
    });
    event
}

fn render_loaded(ui: &mut egui::Ui, card: &DashboardCard) -> Option<NavEvent> {
    let mut event = render_header(ui);
    ui.add_space(24.0);

    ui.columns(3, |columns| {
        // Profile & referral
        styles::card_frame().show(&mut columns[0], |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").size(32.0).color(colors::BUTTON_PRIMARY));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&card.name).size(22.0).strong().color(colors::TEXT_BODY));
                    ui.label(egui::RichText::new(card.role).color(colors::TEXT_SECONDARY));
                });
            });
            ui.separator();
            ui.label(egui::RichText::new("Your Referral Code").size(16.0).strong().color(colors::TEXT_BODY));
            styles::code_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&card.referral_code).monospace().size(18.0).color(colors::TEXT_PRIMARY));
                });
            });
        });

        // Donations & leaderboard
        styles::card_frame().show(&mut columns[1], |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Total Donations Raised").size(16.0).strong().color(colors::TEXT_BODY));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(&card.donations).size(44.0).strong().color(colors::MONEY));
            ui.add_space(12.0);
            let button = styles::light_button("🏆 View Leaderboard", colors::BUTTON_ACCENT);
            if ui.add_sized([ui.available_width(), 40.0], button).clicked() {
                event = Some(NavEvent::ShowLeaderboard);
            }
        });

        // Rewards
        styles::card_frame().show(&mut columns[2], |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🎁").size(20.0).color(colors::REWARDS_ICON));
                ui.label(egui::RichText::new("Rewards & Unlockables").size(16.0).strong().color(colors::TEXT_BODY));
            });
            ui.add_space(8.0);
            for reward in &card.rewards {
                ui.horizontal(|ui| {
                    let (marker, color) = if reward.unlocked {
                        ("✅", colors::UNLOCKED)
                    } else {
                        ("🔒", colors::LOCKED)
                    };
                    ui.colored_label(color, marker);
                    ui.label(egui::RichText::new(&reward.label).color(colors::TEXT_BODY));
                });
            }
        });
    });

    event
}
