//! Transactional email dispatcher — thin pass-through to the Resend API.
//!
//! Like the LLM client, this is the single point of entry for outbound mail.
//! Failures become typed errors; nothing is retried.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
/// Fixed sender for all outreach mail.
pub const FROM_ADDRESS: &str = "noreply@connectsphere.com";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_key: String,
}

impl Mailer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends one plain-text email. Non-2xx statuses become `MailError::Api`.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), MailError> {
        let request_body = SendRequest {
            from: FROM_ADDRESS,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response.json().await?;
        debug!(email_id = %sent.id, "email dispatched");
        Ok(())
    }
}
