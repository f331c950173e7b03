//! Alert delivery.
//!
//! Credentials are read from the environment once at startup into
//! [`MailCredentials`] and validated only where they are needed.

pub mod smtp;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::pipeline::AlertMessage;

pub use smtp::SmtpNotifier;

/// Account identity; also the default sender and recipient.
pub const ENV_USERNAME: &str = "GMAIL_USERNAME";
/// App-level password for mail submission.
pub const ENV_APP_PASSWORD: &str = "GMAIL_APP_PASSWORD";
/// Optional recipient override.
pub const ENV_NOTIFY_TO: &str = "NOTIFY_TO";

/// Secrets for mail submission.
#[derive(Clone, Default)]
pub struct MailCredentials {
    username: Option<String>,
    app_password: Option<String>,
    notify_to: Option<String>,
}

impl MailCredentials {
    /// Blank values are treated as missing.
    pub fn new(
        username: Option<String>,
        app_password: Option<String>,
        notify_to: Option<String>,
    ) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            username: present(username),
            app_password: present(app_password),
            notify_to: present(notify_to),
        }
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(ENV_USERNAME).ok(),
            std::env::var(ENV_APP_PASSWORD).ok(),
            std::env::var(ENV_NOTIFY_TO).ok(),
        )
    }

    /// Sender address (the account identity).
    pub fn sender(&self) -> Result<&str> {
        self.username
            .as_deref()
            .ok_or_else(|| AppError::missing_env(ENV_USERNAME))
    }

    /// Recipient address: the override if set, otherwise the sender.
    pub fn recipient(&self) -> Result<&str> {
        match self.notify_to.as_deref() {
            Some(to) => Ok(to),
            None => self.sender(),
        }
    }

    /// App password for authenticating the submission.
    pub fn app_password(&self) -> Result<&str> {
        self.app_password
            .as_deref()
            .ok_or_else(|| AppError::missing_env(ENV_APP_PASSWORD))
    }
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .field("app_password", &self.app_password.as_ref().map(|_| "***"))
            .field("notify_to", &self.notify_to)
            .finish()
    }
}

/// Delivers an alert message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &AlertMessage) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_missing() {
        let creds = MailCredentials::new(Some("  ".into()), Some(String::new()), None);
        assert!(creds.sender().is_err());
        assert!(creds.app_password().is_err());
    }

    #[test]
    fn test_recipient_falls_back_to_sender() {
        let creds = MailCredentials::new(Some("me@example.com".into()), None, None);
        assert_eq!(creds.recipient().unwrap(), "me@example.com");
    }

    #[test]
    fn test_missing_password_names_variable() {
        let creds = MailCredentials::new(Some("me@example.com".into()), None, None);
        let err = creds.app_password().unwrap_err();
        assert!(err.to_string().contains(ENV_APP_PASSWORD));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = MailCredentials::new(
            Some("me@example.com".into()),
            Some("hunter2".into()),
            None,
        );
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
