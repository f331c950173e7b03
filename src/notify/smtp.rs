//! SMTP delivery over implicit TLS.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::Result;
use crate::models::MailConfig;
use crate::notify::{MailCredentials, Notifier};
use crate::pipeline::AlertMessage;

/// Sends alerts through an authenticated SMTP submission server.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    config: MailConfig,
    credentials: MailCredentials,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig, credentials: MailCredentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Convert an alert into a MIME message.
    pub fn build_message(message: &AlertMessage) -> Result<Message> {
        let from: Mailbox = message.from.parse()?;
        let to: Mailbox = message.to.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;
        Ok(email)
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let username = self.credentials.sender()?.to_string();
        let password = self.credentials.app_password()?.to_string();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(username, password))
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &AlertMessage) -> Result<()> {
        let transport = self.transport()?;
        let email = Self::build_message(message)?;

        log::debug!(
            "Submitting alert to {}:{} for {}",
            self.config.smtp_host,
            self.config.smtp_port,
            message.to
        );
        transport.send(email).await?;
        Ok(())
    }
}
