//! Mock admin login. One fixed credential pair, no real authentication.

use serde::Deserialize;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    NavigateToAdmin,
    Rejected,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(skip)]
    pub error: Option<&'static str>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), error: None }
    }

    /// Checks the typed credentials. Success clears the fields and any earlier
    /// error; failure never says which field was wrong.
    pub fn submit(&mut self) -> LoginOutcome {
        let accepted = self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD;
        if accepted {
            self.username.clear();
            self.password.clear();
            self.error = None;
            tracing::info!("admin login accepted");
            LoginOutcome::NavigateToAdmin
        } else {
            self.error = Some(INVALID_CREDENTIALS);
            tracing::info!("admin login rejected");
            LoginOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_admin_navigates_once() {
        let mut form = LoginForm::new("admin", "admin");
        form.error = Some(INVALID_CREDENTIALS);
        assert_eq!(form.submit(), LoginOutcome::NavigateToAdmin);
        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_everything_else_is_rejected() {
        for (user, pass) in [("", ""), ("admin", "wrong"), ("wrong", "admin"), ("wronguser", "wrongpass"), ("Admin", "admin")] {
            let mut form = LoginForm::new(user, pass);
            assert_eq!(form.submit(), LoginOutcome::Rejected, "{user}/{pass}");
            assert_eq!(form.error, Some(INVALID_CREDENTIALS));
            assert_eq!(form.username, user);
        }
    }
}
