//! Contact form submission against a scripted API

mod common;

use common::MockApi;
use estate_core::contact::{self, ContactField, ContactForm, Submission, SUBMIT_FALLBACK};
use parking_lot::Mutex;
use serde_json::json;

fn filled_form() -> Mutex<ContactForm> {
    let mut form = ContactForm::new();
    form.edit(ContactField::FirstName, "Asha");
    form.edit(ContactField::LastName, "Rao");
    form.edit(ContactField::EmailId, "asha@example.com");
    form.edit(ContactField::PhoneNumber, "98765 43210");
    form.edit(ContactField::Message, "Interested in a 3 BHK");
    Mutex::new(form)
}

#[tokio::test]
async fn valid_submission_posts_once_and_resets() {
    let api = MockApi::new().respond("contact", 201, r#"{"status":"ok"}"#);
    let form = filled_form();

    let outcome = contact::submit(&form, &api).await;
    assert_eq!(outcome, Submission::Succeeded);

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "contact");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "first_name": "Asha",
            "last_name": "Rao",
            "email_id": "asha@example.com",
            "phone_number": "98765 43210",
            "message": "Interested in a 3 BHK",
        }))
    );

    let form = form.lock();
    assert!(form.fields().is_empty());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn server_message_is_surfaced() {
    let api = MockApi::new().respond("contact", 409, r#"{"message":"Duplicate"}"#);
    let form = filled_form();

    let outcome = contact::submit(&form, &api).await;
    assert_eq!(outcome, Submission::Failed("Duplicate".to_string()));
    assert_eq!(form.lock().fields().first_name, "Asha");
}

#[tokio::test]
async fn error_without_message_uses_fallback() {
    let api = MockApi::new().respond("contact", 500, "gateway exploded");
    let form = filled_form();

    let outcome = contact::submit(&form, &api).await;
    assert_eq!(outcome, Submission::Failed(SUBMIT_FALLBACK.to_string()));
}

#[tokio::test]
async fn transport_error_is_terminal() {
    let api = MockApi::new().fail("contact", "operation timed out");
    let form = filled_form();

    let outcome = contact::submit(&form, &api).await;
    assert_eq!(outcome, Submission::Failed("operation timed out".to_string()));
    assert!(!form.lock().submission().is_submitting());
}

#[tokio::test]
async fn invalid_form_makes_no_request() {
    let api = MockApi::new().respond("contact", 200, "{}");
    let form = Mutex::new(ContactForm::new());
    form.lock().edit(ContactField::FirstName, "Asha");
    form.lock().edit(ContactField::PhoneNumber, "12345");

    let outcome = contact::submit(&form, &api).await;
    assert_eq!(outcome, Submission::Idle);
    assert!(api.calls().is_empty());

    let form = form.lock();
    assert_eq!(form.error(ContactField::FirstName), None);
    assert_eq!(form.error(ContactField::LastName), Some("Last name is required"));
    assert_eq!(
        form.error(ContactField::PhoneNumber),
        Some("Please enter a valid 10-digit phone number")
    );
}

#[tokio::test]
async fn resubmit_after_failure() {
    let api = MockApi::new().respond("contact", 422, r#"{"message":"Try later"}"#);
    let form = filled_form();

    contact::submit(&form, &api).await;
    assert!(form.lock().submission().is_terminal());

    let api = MockApi::new().respond("contact", 200, "");
    assert_eq!(contact::submit(&form, &api).await, Submission::Succeeded);
}
