//! Email service for forwarding enquiries to the shop inbox.
//!
//! Uses SMTP via lettre for delivery with Askama HTML and text templates.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use vino_crackers_core::Enquiry;

use crate::config::EmailConfig;

/// HTML template for the enquiry email.
#[derive(Template)]
#[template(path = "email/enquiry.html")]
struct EnquiryEmailHtml<'a> {
    enquiry: &'a Enquiry,
}

/// Plain text template for the enquiry email.
#[derive(Template)]
#[template(path = "email/enquiry.txt")]
struct EnquiryEmailText<'a> {
    enquiry: &'a Enquiry,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for enquiry notifications.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            to_address: config.to_address.clone(),
        })
    }

    /// Forward an enquiry to the shop inbox.
    ///
    /// # Errors
    ///
    /// Returns error if email fails to send or template fails to render.
    pub async fn send_enquiry(&self, enquiry: &Enquiry) -> Result<(), EmailError> {
        let html = EnquiryEmailHtml { enquiry }.render()?;
        let text = EnquiryEmailText { enquiry }.render()?;

        self.send_multipart_email(&subject(enquiry), &text, &html)
            .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .to_address
                .parse()
                .map_err(|_| EmailError::InvalidAddress(self.to_address.clone()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %self.to_address, subject = %subject, "Email sent successfully");
        Ok(())
    }
}

fn subject(enquiry: &Enquiry) -> String {
    format!(
        "New enquiry {} from {} ({})",
        enquiry.id.short(),
        enquiry.customer.name(),
        enquiry.total
    )
}
