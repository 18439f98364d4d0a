/**
 * Shared Types Module
 *
 * Defines the app's navigation states and the user actions that move between them.
 */

use std::fmt;

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppView {
    /// Login form
    #[default]
    Login,
    /// Signup form
    Signup,
    /// Profile, referral code, donations and rewards
    Dashboard,
    /// Ranked donor table
    Leaderboard,
}

/// User actions that drive navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    /// Auth form submitted with both fields filled
    Submit,
    /// Switch between login and signup
    Toggle,
    Logout,
    ShowLeaderboard,
    Back,
}

impl AppView {
    pub const ALL: [AppView; 4] = [
        AppView::Login,
        AppView::Signup,
        AppView::Dashboard,
        AppView::Leaderboard,
    ];

    /// Next view for `event`. Events that do not apply to the current view leave it unchanged.
    pub fn transition(self, event: NavEvent) -> AppView {
        match (self, event) {
            (AppView::Login, NavEvent::Submit) | (AppView::Signup, NavEvent::Submit) => {
                AppView::Dashboard
            }
            (AppView::Login, NavEvent::Toggle) => AppView::Signup,
            (AppView::Signup, NavEvent::Toggle) => AppView::Login,
            (AppView::Dashboard, NavEvent::Logout) => AppView::Login,
            (AppView::Dashboard, NavEvent::ShowLeaderboard) => AppView::Leaderboard,
            (AppView::Leaderboard, NavEvent::Back) => AppView::Dashboard,
            (view, _) => view,
        }
    }

    pub fn is_auth(self) -> bool {
        matches!(self, AppView::Login | AppView::Signup)
    }

    pub fn name(self) -> &'static str {
        match self {
            AppView::Login => "login",
            AppView::Signup => "signup",
            AppView::Dashboard => "dashboard",
            AppView::Leaderboard => "leaderboard",
        }
    }

    /// Parse a view name; anything unrecognised falls back to `Login`.
    pub fn from_name(name: &str) -> AppView {
        AppView::ALL
            .into_iter()
            .find(|view| view.name() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
