//! Authentication Form Module
//!
//! Holds the login/signup form state. There is no credential check: a submit with
//! both fields filled always succeeds and hands an `AuthSubmission` to the caller.

/// Which flavour of the form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Intern Login",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back!",
            AuthMode::Signup => "Join the mission!",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    /// Label of the toggle link, naming the other mode
    pub fn toggle_label(self) -> &'static str {
        self.toggled().submit_label()
    }

    fn verb(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }
}

/// What a successful submit reports to the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubmission {
    pub mode: AuthMode,
    pub email: String,
}

/// Login/signup form fields
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
        }
    }

    /// Both fields are required; nothing else is checked. The email is
    /// trimmed first, the password is taken as typed.
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Submit the form. Returns `None` when a required field is empty.
    pub fn submit(&self) -> Option<AuthSubmission> {
        if !self.can_submit() {
            tracing::debug!("[AUTH] Submit ignored, required field empty");
            return None;
        }

        let email = self.email.trim().to_string();
        tracing::info!("[AUTH] Attempting {} with email={}", self.mode.verb(), email);
        Some(AuthSubmission {
            mode: self.mode,
            email,
        })
    }

    /// Flip between login and signup. Field contents are kept.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}
