use async_trait::async_trait;
use reqwest::Client;

use super::{NotificationStatus, Notifier, NotifyError};

const TWILIO_API_URL: &str = "https://api.twilio.com/2010-04-01";

/// Sends booking confirmations over Twilio's WhatsApp channel.
pub struct TwilioNotifier {
    client: Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_url: String,
}

impl TwilioNotifier {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            client: Client::new(),
            account_sid,
            auth_token,
            from_number,
            api_url: TWILIO_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, to: &str, body: &str) -> Result<NotificationStatus, NotifyError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        );
        let params = [
            ("Body", body.to_string()),
            ("From", format!("whatsapp:{}", self.from_number)),
            ("To", format!("whatsapp:{to}")),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(NotificationStatus::Sent)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(NotifyError::Rejected { status, body })
        }
    }
}
