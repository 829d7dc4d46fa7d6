//! Session manager.
//!
//! There is no credential store. Any non-empty password is accepted, so
//! `login` only establishes *who the UI thinks is using it*; it is not an
//! authentication mechanism and must not be treated as one.

use crate::enums::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Role code, see [`Role::code`]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub is_authenticated: bool,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,

    #[error("role is required")]
    MissingRole,

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

impl LoginRequest {
    /// Check the preconditions of a login and return the selected role.
    pub fn validate(&self) -> Result<Role, LoginError> {
        if self.username.trim().is_empty() {
            return Err(LoginError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        let code = self.role.trim();
        if code.is_empty() {
            return Err(LoginError::MissingRole);
        }
        Role::from_code(code).ok_or_else(|| LoginError::UnknownRole(code.to_string()))
    }
}

/// Holds at most one session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    session: Option<Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// `LoggedOut -> LoggedIn`. On error the previous state is untouched.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        role_code: &str,
    ) -> Result<&Session, LoginError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            role: role_code.to_string(),
        };
        let role = request.validate()?;

        if let Some(previous) = &self.session {
            log::warn!("replacing active session of '{}'", previous.username);
        }
        log::info!("login: '{}' as {}", request.username.trim(), role);

        let session = self.session.insert(Session {
            username: request.username.trim().to_string(),
            role,
            is_authenticated: true,
            logged_in_at: Utc::now(),
        });
        Ok(&*session)
    }

    /// `LoggedIn -> LoggedOut`. Returns the closed session, if any.
    pub fn logout(&mut self) -> Option<Session> {
        let closed = self.session.take();
        if let Some(session) = &closed {
            log::info!("logout: '{}'", session.username);
        }
        closed
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.is_authenticated)
            .unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_all_fields() {
        let mut manager = SessionManager::new();
        let session = manager.login("ahmed", "secret", "employee").unwrap();
        assert_eq!(session.username, "ahmed");
        assert_eq!(session.role, Role::Employee);
        assert!(session.is_authenticated);
        assert!(manager.is_authenticated());
    }

    #[test]
    fn test_login_requires_every_field() {
        let mut manager = SessionManager::new();
        assert_eq!(
            manager.login("", "pw", "admin").unwrap_err(),
            LoginError::MissingUsername
        );
        assert_eq!(
            manager.login("   ", "pw", "admin").unwrap_err(),
            LoginError::MissingUsername
        );
        assert_eq!(
            manager.login("user", "", "admin").unwrap_err(),
            LoginError::MissingPassword
        );
        assert_eq!(
            manager.login("user", "pw", "").unwrap_err(),
            LoginError::MissingRole
        );
        assert!(!manager.is_authenticated());
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let mut manager = SessionManager::new();
        assert_eq!(
            manager.login("user", "pw", "guest").unwrap_err(),
            LoginError::UnknownRole("guest".to_string())
        );
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_any_password_is_accepted() {
        let mut manager = SessionManager::new();
        assert!(manager.login("user", "x", "admin").is_ok());
        assert!(manager.login("user", "completely different", "admin").is_ok());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut manager = SessionManager::new();
        manager.login("sara", "pw", "gis_officer").unwrap();
        let closed = manager.logout().unwrap();
        assert_eq!(closed.username, "sara");
        assert!(manager.current().is_none());
        assert!(manager.role().is_none());
        assert!(manager.username().is_none());
        assert!(manager.logout().is_none());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut manager = SessionManager::new();
        manager.login("sara", "pw", "admin").unwrap();
        assert!(manager.login("", "pw", "admin").is_err());
        assert_eq!(manager.username(), Some("sara"));
    }
}
