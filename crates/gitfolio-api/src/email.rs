// Transactional email dispatch through an EmailJS-compatible send API.
// The service is opaque to us: we post a template id plus parameters and
// only look at the response status.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email API rejected the request with status {status}")]
    SendFailed { status: u16 },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EmailError>;

/// Identifiers the send API needs: a service, a template, and a public user key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    /// Address the template delivers to
    pub recipient: String,
}

/// A contact-form submission
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

pub struct EmailClient {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send one contact message. Any 2xx counts as delivered.
    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: TemplateParams {
                to_email: &self.config.recipient,
                from_name: &message.from_name,
                reply_to: &message.reply_to,
                message: &message.message,
            },
        };

        let response = self.client.post(EMAILJS_SEND_URL).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(EmailError::SendFailed {
                status: response.status().as_u16(),
            });
        }

        debug!("Contact message dispatched for {}", message.reply_to);
        Ok(())
    }
}
