use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notification;

/// How long the simulated delivery takes before it resolves.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const CHECK_FIELDS_MESSAGE: &str = "Please check the form fields";
pub const SEND_FAILED_MESSAGE: &str = "Something went wrong while sending the form";

// local part: no leading dot, no "..", last char not '.' or '\''
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

pub fn is_valid_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What is this about?",
            Self::Message => "Your message...",
        }
    }

    fn min_len(&self) -> usize {
        match self {
            Self::Name => 2,
            Self::Email => 0,
            Self::Subject => 5,
            Self::Message => 10,
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Enter a valid email address",
            Self::Subject => "Subject must be at least 5 characters",
            Self::Message => "Message must be at least 10 characters",
        }
    }

    /// Checks one field in isolation.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Email => is_valid_email(value),
            _ => value.chars().count() >= self.min_len(),
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Field::ALL.into_iter().find(|f| f.id() == value).ok_or(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Every failing field with its message. Never empty when returned as an error.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks all four fields and collects every failure.
pub fn validate(submission: &ContactSubmission) -> Result<(), FieldErrors> {
    let errors = Field::ALL
        .into_iter()
        .filter(|f| !f.check(submission.get(*f)))
        .map(|f| (f, f.error_message().to_string()))
        .collect::<BTreeMap<_, _>>();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("delivery failed: {0}")]
    Transport(String),
}

/// Stand-in for a delivery endpoint. Always succeeds.
pub fn simulate_delivery(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let payload =
        serde_json::to_string(submission).map_err(|e| SubmitError::Transport(e.to_string()))?;
    log::debug!("simulated contact delivery: {payload}");
    Ok(())
}

/// The user-facing message for a settled delivery. Also used when the form
/// that started it is no longer mounted.
pub fn delivery_notification(result: &Result<(), SubmitError>) -> Notification {
    match result {
        Ok(()) => Notification::success(SENT_MESSAGE),
        Err(_) => Notification::error(SEND_FAILED_MESSAGE),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    Rejected(Notification),
    Accepted(ContactSubmission),
}

/// Contact form record plus its per-field errors and submission phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    submission: ContactSubmission,
    errors: FieldErrors,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn value(&self, field: Field) -> &str {
        self.submission.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Sending..."
        } else {
            "Send message"
        }
    }

    /// Updates one field and drops that field's error, leaving the others.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.submission.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Ignored;
        }
        match validate(&self.submission) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.phase = Phase::Submitting;
                SubmitOutcome::Accepted(self.submission.clone())
            }
            Err(errors) => {
                log::debug!("contact form rejected: {errors}");
                self.errors = errors;
                SubmitOutcome::Rejected(Notification::error(CHECK_FIELDS_MESSAGE))
            }
        }
    }

    /// Finishes an in-flight submission. Only the first call after `submit`
    /// has an effect.
    pub fn complete(&mut self) -> Option<Notification> {
        if !self.is_busy() {
            return None;
        }
        self.submission = ContactSubmission::default();
        self.errors = FieldErrors::default();
        self.phase = Phase::Idle;
        Some(delivery_notification(&Ok(())))
    }

    /// Abandons an in-flight submission; the record is kept as typed.
    pub fn fail(&mut self, err: SubmitError) -> Option<Notification> {
        if !self.is_busy() {
            return None;
        }
        log::warn!("contact submission failed: {err}");
        self.phase = Phase::Idle;
        Some(delivery_notification(&Err(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a test message.".to_string(),
        }
    }

    fn form_with(submission: &ContactSubmission) -> ContactForm {
        let mut form = ContactForm::new();
        for f in Field::ALL {
            form.edit(f, submission.get(f));
        }
        form
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_each_field_fails_alone() {
        let bad_values = [
            (Field::Name, "A"),
            (Field::Email, "not-an-email"),
            (Field::Subject, "Hey"),
            (Field::Message, "too short"),
        ];
        for (field, value) in bad_values {
            let mut submission = valid();
            submission.set(field, value);
            let errors = validate(&submission).expect_err("should fail");
            assert_eq!(errors.len(), 1, "only {field:?} should fail");
            assert_eq!(errors.get(field), Some(field.error_message()));
        }
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let submission = ContactSubmission {
            name: "A".to_string(),
            email: "bad".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
        };
        let errors = validate(&submission).expect_err("should fail");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
    }

    #[test]
    fn test_empty_record_fails_everywhere() {
        let errors = validate(&ContactSubmission::default()).expect_err("should fail");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.to_string(), "4 field(s) failed validation");
    }

    #[test]
    fn test_length_boundaries() {
        assert!(Field::Name.check("Al"));
        assert!(!Field::Name.check("A"));
        assert!(Field::Subject.check("Hello"));
        assert!(!Field::Subject.check("Hell"));
        assert!(Field::Message.check("0123456789"));
        assert!(!Field::Message.check("012345678"));
        // counted in characters, not bytes
        assert!(Field::Name.check("Иван"));
        assert!(!Field::Name.check("И"));
    }

    #[test]
    fn test_email_grammar() {
        for ok in [
            "ivan@example.com",
            "first.last+tag@mail.example.org",
            "o'neil_x@sub-domain.co",
            "A1@B2.io",
        ] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "bad",
            "@example.com",
            "ivan@",
            "ivan@example",
            "ivan@example.c",
            ".ivan@example.com",
            "iv..an@example.com",
            "ivan.@example.com",
            "ivan@-example.com",
            "ivan@example..com",
            "ivan example@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_field_ids_round_trip() {
        for f in Field::ALL {
            assert_eq!(Field::try_from(f.id()), Ok(f));
        }
        assert!(Field::try_from("phone").is_err());
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "A");
        form.edit(Field::Email, "bad");
        let outcome = form.submit();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(form.errors().len(), 4);

        form.edit(Field::Email, "b");
        assert!(form.error(Field::Email).is_none());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Subject).is_some());
        assert!(form.error(Field::Message).is_some());
        assert_eq!(form.value(Field::Email), "b");
    }

    #[test]
    fn test_rejected_submission_notifies_and_stays_idle() {
        let mut form = ContactForm::new();
        match form.submit() {
            SubmitOutcome::Rejected(n) => {
                assert_eq!(n.kind, NotificationKind::Error);
                assert_eq!(n.message, CHECK_FIELDS_MESSAGE);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.submit_label(), "Send message");
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let mut form = form_with(&valid());
        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::Accepted(valid()));
        assert!(form.is_busy());
        assert_eq!(form.submit_label(), "Sending...");
        // record untouched until the delay elapses
        assert_eq!(form.submission(), &valid());

        assert_eq!(simulate_delivery(form.submission()), Ok(()));
        let n = form.complete().expect("first completion should notify");
        assert_eq!(n, Notification::success(SENT_MESSAGE));
        assert!(form.submission().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn test_resubmit_while_in_flight_is_ignored() {
        let mut form = form_with(&valid());
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        assert!(form.complete().is_some());
        // completion is single-shot
        assert!(form.complete().is_none());
        assert!(form.submission().is_empty());
    }

    #[test]
    fn test_failure_keeps_record() {
        let mut form = form_with(&valid());
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
        let n = form
            .fail(SubmitError::Transport("offline".to_string()))
            .expect("in-flight failure should notify");
        assert_eq!(n.message, SEND_FAILED_MESSAGE);
        assert_eq!(form.submission(), &valid());
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.complete().is_none());
    }

    #[test]
    fn test_fail_when_idle_is_noop() {
        let mut form = ContactForm::new();
        assert!(form
            .fail(SubmitError::Transport("x".to_string()))
            .is_none());
    }

    #[test]
    fn test_detached_delivery_notifies_like_the_form() {
        let mut form = form_with(&valid());
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
        let delivered = simulate_delivery(form.submission());
        let detached = delivery_notification(&delivered);
        assert_eq!(form.complete(), Some(detached));
        assert_eq!(delivery_notification(&Ok(())).kind, NotificationKind::Success);

        let err = Err(SubmitError::Transport("offline".to_string()));
        let n = delivery_notification(&err);
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, SEND_FAILED_MESSAGE);
    }
}
