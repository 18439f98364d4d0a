use eframe::egui;

use crate::egui_app::auth::AuthForm;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::NavEvent;

const FORM_WIDTH: f32 = 360.0;

pub fn render(ui: &mut egui::Ui, form: &mut AuthForm) -> Option<NavEvent> {
    let mut event = None;
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        // Vertical centering
        let top_space = (available_rect.height() - 380.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.allocate_ui(egui::vec2(FORM_WIDTH + 40.0, 0.0), |ui| {
            styles::card_frame().show(ui, |ui| {
                ui.set_width(FORM_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(form.mode.title())
                            .size(28.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(egui::RichText::new(form.mode.subtitle()).color(colors::TEXT_SECONDARY));
                    ui.add_space(20.0);

                    ui.add_sized(
                        [FORM_WIDTH, 32.0],
                        egui::TextEdit::singleline(&mut form.email).hint_text("👤 Email Address"),
                    );
                    ui.add_space(8.0);

                    let password = ui.add_sized(
                        [FORM_WIDTH, 32.0],
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("🔒 Password"),
                    );
                    let enter_pressed =
                        password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.add_space(16.0);

                    let submit = ui.add_sized(
                        [FORM_WIDTH, 40.0],
                        styles::filled_button(form.mode.submit_label(), colors::BUTTON_PRIMARY),
                    );
                    if submit.clicked() || enter_pressed {
                        event = Some(NavEvent::Submit);
                    }
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(form.mode.toggle_prompt()).color(colors::TEXT_SECONDARY));
                        let toggle = ui.add(egui::Button::new(
                            egui::RichText::new(form.mode.toggle_label())
                                .strong()
                                .color(colors::BUTTON_PRIMARY),
                        ).frame(false));
                        if toggle.clicked() {
                            event = Some(NavEvent::Toggle);
                        }
                    });
                });
            });
        });
    });

    event
}
