//! Contact form: field validation and the single-submission flow.
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──2xx──────▶ Succeeded
//!   ▲                         └────error────────▶ Failed(reason)
//!   └──────── next edit / next submit ◀──────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::api::ContentApi;
use crate::error::{SiteError, SiteResult};

/// Endpoint path for contact submissions.
pub const CONTACT_PATH: &str = "contact";

/// Message used when a rejected submission carries no server message.
pub const SUBMIT_FALLBACK: &str = "Failed to submit form";

/// Message used when a submission fails without any explanation.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// The five form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    EmailId,
    PhoneNumber,
    Message,
}

impl ContactField {
    /// Wire name, also used as the input `name`/`id`.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::EmailId => "email_id",
            ContactField::PhoneNumber => "phone_number",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::EmailId => "Email Address",
            ContactField::PhoneNumber => "Phone Number",
            ContactField::Message => "Your Message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ContactField::FirstName | ContactField::LastName | ContactField::PhoneNumber
        )
    }

    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::FirstName,
            ContactField::LastName,
            ContactField::EmailId,
            ContactField::PhoneNumber,
            ContactField::Message,
        ]
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field values, serialized as the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub phone_number: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::EmailId => &self.email_id,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::EmailId => &mut self.email_id,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field validation messages.
pub type FieldErrors = BTreeMap<ContactField, String>;

/// Check the required fields and the phone format.
///
/// `email_id` and `message` are accepted as-is.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.first_name.trim().is_empty() {
        errors.insert(ContactField::FirstName, "First name is required".to_string());
    }
    if fields.last_name.trim().is_empty() {
        errors.insert(ContactField::LastName, "Last name is required".to_string());
    }

    if fields.phone_number.trim().is_empty() {
        errors.insert(ContactField::PhoneNumber, "Phone number is required".to_string());
    } else if !is_valid_phone(&fields.phone_number) {
        errors.insert(
            ContactField::PhoneNumber,
            "Please enter a valid 10-digit phone number".to_string(),
        );
    }

    errors
}

/// Exactly ten ASCII digits once all whitespace is removed.
pub fn is_valid_phone(raw: &str) -> bool {
    let mut count = 0;
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        if !c.is_ascii_digit() {
            return false;
        }
        count += 1;
    }
    count == 10
}

/// Submission status of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl Submission {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Submission::Succeeded | Submission::Failed(_))
    }
}

/// Why [`ContactForm::begin_submit`] refused to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Validation failed; errors are now set on the form
    Invalid(FieldErrors),
    /// A submission is already outstanding
    InFlight,
}

/// Form state owned by one contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submission: Submission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Update one field. Clears that field's error and any finished
    /// submission status; other fields' errors are kept.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(&field);
        if self.submission.is_terminal() {
            self.submission = Submission::Idle;
        }
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the payload to POST, or why nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitRejected> {
        if self.submission.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            tracing::debug!("Contact form rejected: {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            self.submission = Submission::Idle;
            return Err(SubmitRejected::Invalid(errors));
        }

        self.errors.clear();
        self.submission = Submission::Submitting;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the POST started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: SiteResult<()>) {
        match result {
            Ok(()) => {
                tracing::info!("Contact form submitted");
                self.submission = Submission::Succeeded;
                self.fields = ContactFields::default();
                self.errors.clear();
            }
            Err(err) => {
                tracing::warn!("Contact form submission failed: {}", err);
                self.submission = Submission::Failed(submit_failure_message(&err));
            }
        }
    }

    /// Clear fields, errors and status.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// User-facing reason for a failed submission.
pub fn submit_failure_message(err: &SiteError) -> String {
    match err {
        SiteError::Status { .. } => err
            .server_message()
            .unwrap_or_else(|| SUBMIT_FALLBACK.to_string()),
        SiteError::Transport(message) if !message.is_empty() => message.clone(),
        SiteError::Transport(_) => GENERIC_FAILURE.to_string(),
        SiteError::Decode(_) | SiteError::Config(_) => SUBMIT_FALLBACK.to_string(),
    }
}

/// POST the fields to the contact endpoint. Any 2xx counts as success.
pub async fn post_contact(api: &dyn ContentApi, fields: &ContactFields) -> SiteResult<()> {
    let body = serde_json::to_value(fields)?;
    api.post_json(CONTACT_PATH, &body).await?.error_for_status()?;
    Ok(())
}

/// Validate, POST once and record the outcome.
///
/// Returns the resulting submission status. Invalid or in-flight forms
/// return without any network call.
pub async fn submit(form: &Mutex<ContactForm>, api: &dyn ContentApi) -> Submission {
    let begun = form.lock().begin_submit();
    let payload = match begun {
        Ok(payload) => payload,
        Err(_) => return form.lock().submission().clone(),
    };

    let result = post_contact(api, &payload).await;

    let mut form = form.lock();
    form.finish_submit(result);
    form.submission().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, phone: &str) -> ContactFields {
        ContactFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone_number: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_first_name_only() {
        let errors = validate(&fields("", "X", "1234567890"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&ContactField::FirstName).map(String::as_str),
            Some("First name is required")
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let errors = validate(&fields("  ", "\t", " "));
        assert_eq!(errors[&ContactField::FirstName], "First name is required");
        assert_eq!(errors[&ContactField::LastName], "Last name is required");
        assert_eq!(errors[&ContactField::PhoneNumber], "Phone number is required");
    }

    #[test]
    fn phone_format() {
        let short = validate(&fields("A", "B", "12345"));
        assert_eq!(
            short[&ContactField::PhoneNumber],
            "Please enter a valid 10-digit phone number"
        );
        assert!(validate(&fields("A", "B", "1234567890")).is_empty());
        assert!(validate(&fields("A", "B", "12345 67890")).is_empty());
        assert!(validate(&fields("A", "B", " 98 765 432 10 ")).is_empty());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(!is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("+911234567890"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn email_and_message_unchecked() {
        let mut f = fields("A", "B", "1234567890");
        f.email_id = "not an email".to_string();
        assert!(validate(&f).is_empty());
    }

    #[test]
    fn edit_clears_only_that_field() {
        let mut form = ContactForm::new();
        let rejected = form.begin_submit().unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(ref e) if e.len() == 3));

        form.edit(ContactField::FirstName, "Asha");
        assert_eq!(form.error(ContactField::FirstName), None);
        assert_eq!(form.error(ContactField::LastName), Some("Last name is required"));
        assert_eq!(form.error(ContactField::PhoneNumber), Some("Phone number is required"));
    }

    #[test]
    fn submit_success_resets_fields() {
        let mut form = ContactForm::new();
        form.edit(ContactField::FirstName, "Asha");
        form.edit(ContactField::LastName, "Rao");
        form.edit(ContactField::PhoneNumber, "9876543210");
        form.edit(ContactField::Message, "2BHK please");

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.first_name, "Asha");
        assert!(form.submission().is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

        form.finish_submit(Ok(()));
        assert_eq!(form.submission(), &Submission::Succeeded);
        assert!(form.fields().is_empty());
        assert!(form.errors().is_empty());

        form.edit(ContactField::Message, "again");
        assert_eq!(form.submission(), &Submission::Idle);
    }

    #[test]
    fn failure_messages() {
        let dup = SiteError::Status {
            status: 409,
            body: r#"{"message":"Duplicate"}"#.to_string(),
        };
        assert_eq!(submit_failure_message(&dup), "Duplicate");

        let bare = SiteError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(submit_failure_message(&bare), SUBMIT_FALLBACK);

        let transport = SiteError::Transport(String::new());
        assert_eq!(submit_failure_message(&transport), GENERIC_FAILURE);
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = ContactForm::new();
        form.edit(ContactField::FirstName, "Asha");
        form.edit(ContactField::LastName, "Rao");
        form.edit(ContactField::PhoneNumber, "9876543210");
        form.begin_submit().unwrap();

        form.finish_submit(Err(SiteError::Transport("connection reset".to_string())));
        assert_eq!(
            form.submission(),
            &Submission::Failed("connection reset".to_string())
        );
        assert_eq!(form.fields().first_name, "Asha");
    }

    #[test]
    fn payload_wire_shape() {
        let json = serde_json::to_value(fields("A", "B", "1234567890")).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["email_id", "first_name", "last_name", "message", "phone_number"]
        );
    }
}
