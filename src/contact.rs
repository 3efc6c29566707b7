// Contact and newsletter form handling. Submissions are only logged; there is no backend.
use crate::i18n::TranslationTable;
use crate::tour::Locale;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Delivery error: {0}")]
    DeliveryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn contact(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    pub fn newsletter(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: None,
            message: None,
        }
    }

    pub fn is_newsletter(&self) -> bool {
        self.subject.is_none() && self.message.is_none()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if let Some(message) = &self.message {
            if message.trim().is_empty() {
                return Err(ContactError::MissingField("message"));
            }
        }
        Ok(())
    }
}

// local@domain.tld, nothing stricter
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

// Where accepted submissions go
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

// Records the submission in the log and nothing else
#[derive(Debug, Default, Clone)]
pub struct LogOnlySink;

#[async_trait]
impl SubmissionSink for LogOnlySink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            newsletter = submission.is_newsletter(),
            "Form submitted"
        );
        Ok(())
    }
}

pub struct ContactForm<S: SubmissionSink> {
    sink: S,
    table: Arc<TranslationTable>,
}

impl<S: SubmissionSink> ContactForm<S> {
    pub fn new(sink: S, table: Arc<TranslationTable>) -> Self {
        Self { sink, table }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // Validate, hand off to the sink, and return the acknowledgement text
    pub async fn submit(
        &self,
        locale: Locale,
        submission: ContactSubmission,
    ) -> Result<String, ContactError> {
        submission.validate()?;
        self.sink.deliver(&submission).await?;

        let (key, fallback) = if submission.is_newsletter() {
            ("newsletter-success", newsletter_fallback(locale))
        } else {
            ("form-success", contact_fallback(locale))
        };
        Ok(self.table.text_or(locale, key, fallback).to_string())
    }
}

fn contact_fallback(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "¡Mensaje enviado con éxito!",
        Locale::En => "Message sent successfully!",
    }
}

fn newsletter_fallback(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "¡Gracias por suscribirte!",
        Locale::En => "Thanks for subscribing!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use test_case::test_case;

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<ContactSubmission>>,
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
            self.received.lock().push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl SubmissionSink for FailingSink {
        async fn deliver(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
            Err(ContactError::DeliveryError("offline".to_string()))
        }
    }

    fn table() -> Arc<TranslationTable> {
        Arc::new(TranslationTable::bundled().unwrap())
    }

    #[test_case("ana@example.com", true; "simple address")]
    #[test_case("ana.maria@delicias.gob.mx", true; "dotted local and domain")]
    #[test_case("ana@localhost", false; "no dot in domain")]
    #[test_case("@example.com", false; "empty local part")]
    #[test_case("ana example@x.com", false; "whitespace")]
    #[test_case("ana.example.com", false; "no at sign")]
    fn test_email_plausibility(email: &str, expected: bool) {
        assert_eq!(is_plausible_email(email), expected);
    }

    #[test]
    fn test_contact_submission_acknowledged() {
        let form = ContactForm::new(RecordingSink::default(), table());
        let submission = ContactSubmission::contact(
            "María González",
            "maria@example.com",
            "Reservación",
            "¿Hay lugares para el sábado?",
        );

        let ack = tokio_test::block_on(form.submit(Locale::Es, submission.clone())).unwrap();
        assert_eq!(ack, "¡Mensaje enviado con éxito!");
        assert_eq!(form.sink().received.lock().as_slice(), &[submission]);
    }

    #[test]
    fn test_newsletter_submission_acknowledged() {
        let form = ContactForm::new(LogOnlySink, table());
        let ack = tokio_test::block_on(form.submit(
            Locale::En,
            ContactSubmission::newsletter("John", "john@example.com"),
        ))
        .unwrap();
        assert_eq!(ack, "Thanks for subscribing to our newsletter!");
    }

    #[test]
    fn test_acknowledgement_falls_back_without_table_entry() {
        let form = ContactForm::new(LogOnlySink, Arc::new(TranslationTable::default()));
        let ack = tokio_test::block_on(form.submit(
            Locale::En,
            ContactSubmission::contact("Ana", "ana@example.com", "Hi", "Hello"),
        ))
        .unwrap();
        assert_eq!(ack, "Message sent successfully!");
    }

    #[test]
    fn test_invalid_submissions_never_reach_sink() {
        let form = ContactForm::new(RecordingSink::default(), table());

        let blank_name = ContactSubmission::newsletter("  ", "ana@example.com");
        assert_eq!(
            tokio_test::block_on(form.submit(Locale::Es, blank_name)),
            Err(ContactError::MissingField("name"))
        );

        let bad_email = ContactSubmission::newsletter("Ana", "ana@");
        assert!(matches!(
            tokio_test::block_on(form.submit(Locale::Es, bad_email)),
            Err(ContactError::InvalidEmail(_))
        ));

        let empty_message = ContactSubmission::contact("Ana", "ana@example.com", "Hola", "");
        assert_eq!(
            tokio_test::block_on(form.submit(Locale::Es, empty_message)),
            Err(ContactError::MissingField("message"))
        );

        assert!(form.sink().received.lock().is_empty());
    }

    #[test]
    fn test_delivery_failure_propagates() {
        let form = ContactForm::new(FailingSink, table());
        let result = tokio_test::block_on(form.submit(
            Locale::Es,
            ContactSubmission::newsletter("Ana", "ana@example.com"),
        ));
        assert_eq!(
            result,
            Err(ContactError::DeliveryError("offline".to_string()))
        );
    }
}
