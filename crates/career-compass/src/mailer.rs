//! Report delivery. Only a simulated transport exists; nothing leaves the process.

use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
    pub recipient: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("'{0}' is not a valid e-mail address")]
    InvalidRecipient(String),
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}

/// Outbound hook for finished reports.
pub trait ReportMailer: Send + Sync {
    fn send(&self, email: &ReportEmail) -> Result<DeliveryReceipt, MailError>;
}

/// Records messages in memory instead of delivering them.
#[derive(Debug, Default)]
pub struct SimulatedMailer {
    outbox: Mutex<Vec<ReportEmail>>,
}

impl SimulatedMailer {
    pub fn outbox(&self) -> Vec<ReportEmail> {
        self.outbox
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ReportMailer for SimulatedMailer {
    fn send(&self, email: &ReportEmail) -> Result<DeliveryReceipt, MailError> {
        let recipient = email.recipient.trim();
        if !is_plausible_address(recipient) {
            return Err(MailError::InvalidRecipient(email.recipient.clone()));
        }

        let mut outbox = self
            .outbox
            .lock()
            .map_err(|err| MailError::Transport(err.to_string()))?;
        outbox.push(ReportEmail {
            recipient: recipient.to_string(),
            ..email.clone()
        });
        let message_id = format!("sim-{:06}", outbox.len());

        info!(%message_id, recipient, subject = %email.subject, "simulated report delivery");
        Ok(DeliveryReceipt {
            message_id,
            recipient: recipient.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_plausible_address(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> ReportEmail {
        ReportEmail {
            recipient: to.to_string(),
            subject: "Your career report".to_string(),
            body: "report body".to_string(),
        }
    }

    #[test]
    fn address_validation_requires_local_part_and_domain() {
        assert!(is_plausible_address("ada@example.com"));
        assert!(!is_plausible_address("ada@example"));
        assert!(!is_plausible_address("@example.com"));
        assert!(!is_plausible_address("ada@@example.com"));
        assert!(!is_plausible_address("ada @example.com"));
    }

    #[test]
    fn simulated_mailer_records_messages_with_sequential_ids() {
        let mailer = SimulatedMailer::default();

        let first = mailer.send(&email(" ada@example.com ")).expect("sent");
        let second = mailer.send(&email("grace@example.org")).expect("sent");

        assert_eq!(first.message_id, "sim-000001");
        assert_eq!(second.message_id, "sim-000002");
        let outbox = mailer.outbox();
        assert_eq!(outbox.len(), 2);
        assert_eq!(outbox[0].recipient, "ada@example.com");
    }

    #[test]
    fn invalid_recipient_is_not_queued() {
        let mailer = SimulatedMailer::default();

        let err = mailer.send(&email("not-an-address")).expect_err("rejected");

        assert!(matches!(err, MailError::InvalidRecipient(_)));
        assert!(mailer.outbox().is_empty());
    }
}
