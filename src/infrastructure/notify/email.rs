//! Publication emails over SMTP via the `lettre` async transport.
//! Configuration comes from the environment; without `SMTP_HOST` the
//! notifier runs log-only.

use crate::application::ports::notify::PublicationNotice;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("email build error: {0}")]
    Build(String),
}

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "newsdesk@localhost";

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Returns `None` when `SMTP_HOST` is unset, signalling that mail
    /// delivery is not configured.
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub async fn deliver(&self, notice: &PublicationNotice) -> Result<(), EmailError> {
        use lettre::{
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
            message::header::ContentType, transport::smtp::authentication::Credentials,
        };

        let body = format!(
            "Hi {},\n\nYour article '{}' has been published.\n\nCheck it out here: {}\n",
            notice.author_name, notice.title, notice.link
        );

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(notice.recipient.parse()?)
            .subject("Your article has been published!")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(password)) = (
            self.config.smtp_user.clone(),
            self.config.smtp_password.clone(),
        ) {
            builder = builder.credentials(Credentials::new(user, password));
        }

        builder.build().send(email).await?;
        Ok(())
    }
}
