/**
 * Intern Portal - Main Entry Point
 *
 * Native desktop window for the fundraising intern dashboard. Sets up tracing,
 * reads configuration from the environment and hands control to eframe.
 */
use std::time::Duration;

use eframe::egui;
use intern_portal::egui_app::theme::styles;
use intern_portal::egui_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env();
    tracing::info!(
        "[STARTUP] Intern Portal starting, fetch_delay={:?}",
        config.fetch_delay()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    let state = AppState::new(config)?;

    eframe::run_native(
        "Intern Portal",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(PortalApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct PortalApp {
    state: AppState,
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while a fetch is outstanding
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
