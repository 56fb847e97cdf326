//! Lead Capture Forms
//!
//! Field state, validation and the submit lifecycle of the contact and quote
//! forms. Sending goes through [`FormRelay`] so the flow can be exercised
//! without a network.

use crate::services::{FormRelay, RelayError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Quote,
}

impl FormKind {
    /// Text fields in display order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "phone", "subject", "message"],
            FormKind::Quote => &["name", "company", "email", "phone", "budget", "timeline", "details"],
        }
    }

    pub fn required(&self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "phone", "subject", "message"],
            FormKind::Quote => &["name", "email", "phone", "details"],
        }
    }

    fn needs_services(&self) -> bool {
        matches!(self, FormKind::Quote)
    }

    /// Subject line for the relay's notification mail
    pub fn relay_subject(&self) -> &'static str {
        match self {
            FormKind::Contact => "New contact message",
            FormKind::Quote => "New quote request",
        }
    }
}

/// One validated submission, built fresh for every send
#[derive(Clone, Debug, PartialEq)]
pub struct FormSubmission {
    pub kind: FormKind,
    pub fields: Vec<(String, String)>,
    pub services: Vec<String>,
}

impl FormSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),

    #[error("Please select at least one service.")]
    NoServices,

    #[error("Already sending, please wait.")]
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Invalid(ValidationError),
    Failed(String),
    Sent,
}

impl FormStatus {
    /// Message to show under the form, if any
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Invalid(e) => Some(e.to_string()),
            FormStatus::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

pub const SEND_FAILED: &str = "Something went wrong sending your message. Please try again.";

#[derive(Clone, Debug)]
pub struct LeadForm {
    kind: FormKind,
    values: Vec<(&'static str, String)>,
    services: Vec<String>,
    newsletter: bool,
    status: FormStatus,
}

impl LeadForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind.fields().iter().map(|f| (*f, String::new())).collect(),
            services: Vec::new(),
            newsletter: false,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn value(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(n, _)| *n == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Unknown field names are ignored
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        if let Some((_, v)) = self.values.iter_mut().find(|(n, _)| *n == field) {
            *v = value.into();
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn newsletter(&self) -> bool {
        self.newsletter
    }

    pub fn set_newsletter(&mut self, on: bool) {
        self.newsletter = on;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for field in self.kind.required() {
            if self.value(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if self.kind.needs_services() && self.services.is_empty() {
            return Err(ValidationError::NoServices);
        }
        Ok(())
    }

    /// Validate and move to `Sending`. Refused while a send is in flight.
    pub fn begin_submit(&mut self) -> Result<FormSubmission, ValidationError> {
        if self.is_sending() {
            return Err(ValidationError::InFlight);
        }
        if let Err(e) = self.validate() {
            self.status = FormStatus::Invalid(e.clone());
            return Err(e);
        }
        self.status = FormStatus::Sending;

        let mut fields: Vec<(String, String)> = self
            .values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(n, v)| (n.to_string(), v.trim().to_string()))
            .collect();
        if self.kind == FormKind::Quote {
            fields.push(("newsletter".to_string(), if self.newsletter { "yes" } else { "no" }.to_string()));
        }
        Ok(FormSubmission {
            kind: self.kind,
            fields,
            services: self.services.clone(),
        })
    }

    /// Record the relay's answer. Success clears the form; failure keeps
    /// everything for a retry. Returns whether the message was delivered.
    pub fn finish(&mut self, result: Result<(), RelayError>) -> bool {
        match result {
            Ok(()) => {
                *self = Self::new(self.kind);
                self.status = FormStatus::Sent;
                true
            }
            Err(e) => {
                log::warn!("{:?} form failed: {}", self.kind, e);
                self.status = FormStatus::Failed(SEND_FAILED.to_string());
                false
            }
        }
    }
}

/// Send one submission through the relay
pub async fn dispatch<R: FormRelay + ?Sized>(relay: &R, submission: &FormSubmission) -> Result<(), RelayError> {
    log::info!(
        "submitting {:?} form ({} fields, {} services)",
        submission.kind,
        submission.fields.len(),
        submission.services.len()
    );
    relay.send(submission).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;

    use crate::config::StudioConfig;
    use crate::machines::Toast;
    use std::cell::{Cell, RefCell};

    /// Records every submission and answers with a fixed status
    struct MemoryRelay {
        status: u16,
        sent: RefCell<Vec<FormSubmission>>,
        calls: Cell<usize>,
    }

    impl MemoryRelay {
        fn answering(status: u16) -> Self {
            Self {
                status,
                sent: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for MemoryRelay {
        async fn send(&self, submission: &FormSubmission) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(submission.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(RelayError::Rejected { status: self.status })
            }
        }
    }

    fn filled_contact() -> LeadForm {
        let mut form = LeadForm::new(FormKind::Contact);
        form.set_field("name", "Asha");
        form.set_field("email", "asha@example.com");
        form.set_field("phone", "+91 90000 00000");
        form.set_field("subject", "Launch film");
        form.set_field("message", "Thirty seconds, two languages.");
        form
    }

    fn filled_quote() -> LeadForm {
        let mut form = LeadForm::new(FormKind::Quote);
        form.set_field("name", "Ravi");
        form.set_field("email", "ravi@example.com");
        form.set_field("phone", "12345");
        form.set_field("details", "Explainer video");
        form
    }

    /// What a component does on submit; returns whether it was delivered
    fn submit(form: &mut LeadForm, relay: &MemoryRelay) -> bool {
        match form.begin_submit() {
            Ok(submission) => {
                let result = block_on(dispatch(relay, &submission));
                form.finish(result)
            }
            Err(_) => false,
        }
    }

    #[test]
    fn test_contact_submit_posts_once_and_clears() {
        let relay = MemoryRelay::answering(200);
        let mut form = filled_contact();
        submit(&mut form, &relay);

        assert_eq!(relay.calls.get(), 1);
        let sent = &relay.sent.borrow()[0];
        assert_eq!(sent.field("subject"), Some("Launch film"));
        assert_eq!(*form.status(), FormStatus::Sent);
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("message"), "");
    }

    #[test]
    fn test_delivered_contact_shows_toast_for_configured_time() {
        let config = StudioConfig::default();
        let mut toast = Toast::new(config.toast_ms);
        let relay = MemoryRelay::answering(204);
        let mut form = filled_contact();

        assert!(submit(&mut form, &relay));
        let dismissal = toast.show();
        assert!(toast.is_visible());
        assert_eq!(dismissal.after_ms, config.toast_ms);
        assert_eq!(dismissal.after_ms, 5000);

        // The dismiss timer fires
        assert!(toast.dismiss(dismissal.generation));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_failed_contact_shows_no_toast() {
        let relay = MemoryRelay::answering(503);
        let mut form = filled_contact();
        assert!(!submit(&mut form, &relay));
    }

    #[test]
    fn test_rejected_submit_keeps_fields() {
        let relay = MemoryRelay::answering(500);
        let mut form = filled_contact();
        submit(&mut form, &relay);

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(*form.status(), FormStatus::Failed(SEND_FAILED.to_string()));
        assert_eq!(form.value("name"), "Asha");
        assert!(form.status().message().is_some());

        // And a retry is allowed
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_quote_without_services_never_posts() {
        let relay = MemoryRelay::answering(200);
        let mut form = filled_quote();
        submit(&mut form, &relay);

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(*form.status(), FormStatus::Invalid(ValidationError::NoServices));
        assert_eq!(form.value("details"), "Explainer video");
    }

    #[test]
    fn test_quote_with_services() {
        let relay = MemoryRelay::answering(201);
        let mut form = filled_quote();
        form.toggle_service("animation");
        form.toggle_service("music");
        form.toggle_service("music");
        form.set_newsletter(true);
        submit(&mut form, &relay);

        let sent = relay.sent.borrow();
        assert_eq!(sent[0].services, vec!["animation".to_string()]);
        assert_eq!(sent[0].field("newsletter"), Some("yes"));
        // Optional fields left blank are not sent
        assert_eq!(sent[0].field("company"), None);
        assert!(!form.has_service("animation"));
    }

    #[test]
    fn test_missing_required_field() {
        let mut form = filled_contact();
        form.set_field("email", "   ");
        assert_eq!(form.begin_submit(), Err(ValidationError::MissingField("email")));
        assert!(!form.is_sending());
    }

    #[test]
    fn test_second_submit_while_sending_is_refused() {
        let mut form = filled_contact();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(ValidationError::InFlight));
        // Status is still sending, not replaced by the refusal
        assert!(form.is_sending());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = LeadForm::new(FormKind::Contact);
        form.set_field("company", "Acme");
        assert_eq!(form.value("company"), "");
    }
}
