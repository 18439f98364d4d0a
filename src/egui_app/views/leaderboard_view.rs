use eframe::egui;

use crate::egui_app::leaderboard::{LeaderboardModel, LeaderboardRow, LeaderboardState};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::NavEvent;

const RANK_WIDTH: f32 = 80.0;
const DONATIONS_WIDTH: f32 = 180.0;

pub fn render(ui: &mut egui::Ui, leaderboard: &LeaderboardState) -> Option<NavEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        if ui.add(styles::light_button("←", colors::BUTTON_NEUTRAL)).clicked() {
            event = Some(NavEvent::Back);
        }
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Top Fundraisers")
                .size(30.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
    });
    ui.add_space(24.0);

    styles::card_frame()
        .inner_margin(egui::Margin::same(0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match leaderboard.model() {
                LeaderboardModel::Loading => {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| ui.label("Loading..."));
                    ui.add_space(32.0);
                }
                LeaderboardModel::Failed { message } => {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.colored_label(colors::ERROR, egui::RichText::new("Could not load the leaderboard.").strong());
                        ui.label(egui::RichText::new(message).color(colors::TEXT_SECONDARY));
                    });
                    ui.add_space(24.0);
                }
                LeaderboardModel::Loaded(rows) => render_table(ui, &rows),
            }
        });

    event
}

fn render_table(ui: &mut egui::Ui, rows: &[LeaderboardRow]) {
    egui::Frame::new()
        .fill(colors::TABLE_HEADER_BG)
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            row_layout(ui, |ui, column| {
                let text = ["RANK", "INTERN", "DONATIONS RAISED"][column];
                ui.label(egui::RichText::new(text).small().strong().color(colors::TEXT_SECONDARY));
            });
        });

    egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        for row in rows {
            ui.push_id(row.id, |ui| {
                ui.separator();
                styles::row_frame(row.highlighted).show(ui, |ui| {
                    row_layout(ui, |ui, column| match column {
                        0 => {
                            ui.label(egui::RichText::new(row.rank.to_string()).size(18.0).strong().color(colors::TEXT_BODY));
                        }
                        1 => {
                            ui.label(egui::RichText::new(&row.name).color(colors::TEXT_PRIMARY));
                        }
                        _ => {
                            ui.label(egui::RichText::new(&row.donations).strong().color(colors::MONEY));
                        }
                    });
                });
            });
        }
    });
}

/// Lay out the three table columns: rank, name (flexible), donations (right aligned).
fn row_layout(ui: &mut egui::Ui, mut cell: impl FnMut(&mut egui::Ui, usize)) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(RANK_WIDTH, 24.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| cell(ui, 0),
        );
        let name_width = (ui.available_width() - DONATIONS_WIDTH).max(0.0);
        ui.allocate_ui_with_layout(
            egui::vec2(name_width, 24.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.set_min_width(name_width);
                cell(ui, 1)
            },
        );
        ui.allocate_ui_with_layout(
            egui::vec2(DONATIONS_WIDTH, 24.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.set_min_width(DONATIONS_WIDTH);
                cell(ui, 2)
            },
        );
    });
}
