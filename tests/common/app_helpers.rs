//! App fixtures
//!
//! Builds an `AppState` over a zero-delay mock on a private runtime and
//! drives it the way the UI would.

use std::sync::Arc;
use std::time::{Duration, Instant};

use intern_portal::egui_app::{AppState, AppView, Config, InternDataSource, MockDataSource, NavEvent};
use tokio::runtime::Runtime;

/// Upper bound on how long a test waits for a mock fetch
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// App state plus the runtime its fetches run on
pub struct TestApp {
    pub state: AppState,
    _runtime: Runtime,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_source(Arc::new(MockDataSource::new(Duration::ZERO)))
    }

    pub fn with_source(source: Arc<dyn InternDataSource>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("test runtime");
        let state = AppState::with_source(Config::new(), source, runtime.handle().clone());
        Self { state, _runtime: runtime }
    }

    /// Fill the auth form and submit it
    pub fn sign_in(&mut self, email: &str, password: &str) -> bool {
        self.state.auth_form.email = email.to_string();
        self.state.auth_form.password = password.to_string();
        self.state.dispatch(NavEvent::Submit)
    }

    /// Poll like the frame loop until the mounted view stops loading
    pub fn settle(&mut self) {
        let deadline = Instant::now() + SETTLE_TIMEOUT;
        while self.state.is_loading() && Instant::now() < deadline {
            self.state.poll();
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(!self.state.is_loading(), "fetch did not settle in {:?}", SETTLE_TIMEOUT);
    }

    pub fn view(&self) -> AppView {
        self.state.current_view
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
