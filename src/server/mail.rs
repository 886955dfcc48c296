use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

/// HTTP mail client.
///
/// Posts messages to a Postmark-style transactional mail API. The response to
/// `send_email` reflects the dispatch outcome only - delivery and bounces are
/// the provider's concern.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    /// Creates a new mail client with a request timeout.
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the mail API
    /// - `sender` - Email address messages are sent from
    /// - `authorization_token` - Server token for the mail API
    /// - `timeout` - Request timeout in seconds
    ///
    /// # Returns
    /// - `Ok(EmailClient)` - Configured client
    /// - `Err(reqwest::Error)` - Failed to build the underlying HTTP client
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        timeout: u64,
    ) -> Result<EmailClient, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    /// Sends an email and waits for the dispatch outcome.
    ///
    /// # Arguments
    /// - `recipient` - Email address to deliver to
    /// - `subject` - Message subject
    /// - `html_content` - HTML body
    /// - `text_content` - Plain-text body
    ///
    /// # Returns
    /// - `Ok(())` - The mail API accepted the message
    /// - `Err(reqwest::Error)` - Request failed, timed out, or the API
    ///   returned an error status
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: recipient,
            subject,
            html_body: html_content,
            text_body: text_content,
        };

        self.http_client
            .post(url)
            .json(&request_body)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
