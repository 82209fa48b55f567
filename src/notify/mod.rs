//! Outbound guest notifications.

mod message;
mod twilio;

pub use message::format_booking_message;
pub use twilio::TwilioNotifier;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("provider rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Outcome reported back to the booking client alongside the created record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Failed,
    Skipped,
}

/// Delivery channel for booking confirmations. Fire-and-forget: the workflow
/// records the outcome but never rolls back a persisted booking over it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<NotificationStatus, NotifyError>;
}

/// Stand-in used when messaging credentials are not configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to: &str, body: &str) -> Result<NotificationStatus, NotifyError> {
        log::info!("messaging disabled; confirmation for {to}:\n{body}");
        Ok(NotificationStatus::Skipped)
    }
}
