pub mod errors;

use std::time::Duration;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;
use crate::config::MailParameters;
use crate::manager_mail::errors::MailError;

pub struct Mail {
    transport: SmtpTransport,
    from: Mailbox,
    to: Vec<Mailbox>,
}

impl Mail {
    /// Returns a new instance of the Mail struct.
    ///
    /// All addresses are parsed here so a bad address fails the run before anything is fetched.
    /// The transport connects with implicit TLS on port 465
    ///
    /// # Arguments
    ///
    /// * 'config' - smtp endpoint, credentials, sender and recipients
    pub fn new(config: &MailParameters) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;
        let to = parse_recipients(&config.recipients())?;

        let transport = SmtpTransport::relay(&config.smtp_endpoint)?
            .credentials(Credentials::new(config.smtp_user.to_string(), config.smtp_password.to_string()))
            .timeout(Some(Duration::from_secs(30)))
            .build();

        Ok(Self { transport, from, to })
    }

    /// Sends a plain text mail with the given subject and body to all recipients
    ///
    /// # Arguments
    ///
    /// * 'subject' - the subject of the mail
    /// * 'body' - the body of the mail
    pub fn send_mail(&self, subject: String, body: String) -> Result<(), MailError> {
        let message = build_message(&self.from, &self.to, subject, body)?;

        let _ = self.transport.send(&message)?;
        info!("mail sent to {} recipient(s)", self.to.len());

        Ok(())
    }
}

fn build_message(from: &Mailbox, to: &[Mailbox], subject: String, body: String) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .subject(subject)
        .header(ContentType::TEXT_PLAIN);

    for recipient in to {
        builder = builder.to(recipient.clone());
    }

    Ok(builder.body(body)?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.trim()
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidEmailAddress(format!("{}: {}", address, e)))
}

fn parse_recipients(recipients: &[String]) -> Result<Vec<Mailbox>, MailError> {
    if recipients.is_empty() {
        return Err(MailError::InvalidEmailAddress("no recipients".to_string()));
    }

    recipients.iter().map(|r| parse_mailbox(r)).collect()
}
