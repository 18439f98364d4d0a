use std::sync::Arc;

use tokio::runtime::{Handle, Runtime};

use crate::egui_app::auth::{AuthForm, AuthMode};
use crate::egui_app::dashboard::DashboardState;
use crate::egui_app::data_source::{InternDataSource, MockDataSource};
use crate::egui_app::leaderboard::LeaderboardState;
use crate::egui_app::{AppView, Config, NavEvent};

/// Who signed in. Created on auth submit, dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    /// Filled in once the dashboard profile has loaded
    pub intern_name: Option<String>,
}

/// Root navigator: owns the current view and the state of whichever view is mounted.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,
    pub auth_form: AuthForm,
    pub session: Option<Session>,
    pub dashboard: Option<DashboardState>,
    pub leaderboard: Option<LeaderboardState>,
    source: Arc<dyn InternDataSource>,
    handle: Handle,
    _runtime: Option<Runtime>,
}

impl AppState {
    /// Build the app state with its own fetch runtime and the mock data source.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("portal-fetch")
            .enable_time()
            .build()?;
        let source = Arc::new(MockDataSource::new(config.fetch_delay()));
        let handle = runtime.handle().clone();

        let mut state = Self::with_source(config, source, handle);
        state._runtime = Some(runtime);
        Ok(state)
    }

    /// Build the app state over an existing runtime and data source.
    pub fn with_source(config: Config, source: Arc<dyn InternDataSource>, handle: Handle) -> Self {
        tracing::info!("[NAV] AppState initialized, view={}", AppView::default());
        Self {
            config,
            current_view: AppView::default(),
            auth_form: AuthForm::default(),
            session: None,
            dashboard: None,
            leaderboard: None,
            source,
            handle,
            _runtime: None,
        }
    }

    /// Apply a user action. Returns true when the view changed.
    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        let next = self.current_view.transition(event);
        if next == self.current_view {
            tracing::debug!("[NAV] {:?} ignored in {}", event, self.current_view);
            return false;
        }

        match event {
            NavEvent::Submit => {
                let Some(submission) = self.auth_form.submit() else {
                    return false;
                };
                tracing::info!("[NAV] Authentication successful (dummy). Redirecting to dashboard.");
                self.session = Some(Session {
                    email: submission.email,
                    intern_name: None,
                });
            }
            NavEvent::Toggle => self.auth_form.toggle(),
            NavEvent::Logout => {
                tracing::info!("[NAV] User logged out.");
                self.session = None;
            }
            NavEvent::ShowLeaderboard | NavEvent::Back => {}
        }

        self.navigate(next);
        true
    }

    fn navigate(&mut self, next: AppView) {
        let previous = self.current_view;
        tracing::info!("[NAV] {} -> {}", previous, next);

        // Unmount
        match previous {
            AppView::Dashboard => self.dashboard = None,
            AppView::Leaderboard => self.leaderboard = None,
            AppView::Login | AppView::Signup if !next.is_auth() => {
                self.auth_form = AuthForm::default();
            }
            AppView::Login | AppView::Signup => {}
        }

        // Mount
        match next {
            AppView::Login if !previous.is_auth() => self.auth_form = AuthForm::new(AuthMode::Login),
            AppView::Signup if !previous.is_auth() => self.auth_form = AuthForm::new(AuthMode::Signup),
            AppView::Login | AppView::Signup => {}
            AppView::Dashboard => {
                self.dashboard = Some(DashboardState::mount(self.source.clone(), &self.handle));
            }
            AppView::Leaderboard => {
                let highlight = self.session.as_ref().and_then(|s| s.intern_name.clone());
                self.leaderboard = Some(LeaderboardState::mount(
                    self.source.clone(),
                    &self.handle,
                    highlight,
                ));
            }
        }

        self.current_view = next;
    }

    /// Apply any fetch results that arrived since the last frame.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if let Some(dashboard) = self.dashboard.as_mut() {
            if dashboard.poll() {
                changed = true;
                if let (Some(profile), Some(session)) = (dashboard.profile(), self.session.as_mut()) {
                    session.intern_name = Some(profile.name.clone());
                }
            }
        }

        if let Some(leaderboard) = self.leaderboard.as_mut() {
            changed |= leaderboard.poll();
        }

        changed
    }

    /// Whether the mounted view is still waiting on its data
    pub fn is_loading(&self) -> bool {
        match self.current_view {
            AppView::Dashboard => self.dashboard.as_ref().is_some_and(|d| d.status().is_loading()),
            AppView::Leaderboard => self.leaderboard.as_ref().is_some_and(|l| l.status().is_loading()),
            AppView::Login | AppView::Signup => false,
        }
    }
}
