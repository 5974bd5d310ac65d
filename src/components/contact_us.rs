//! Contact form section.
//!
//! The form lives behind a shared mutex so the submission task can record
//! its outcome. A revision signal tells Dioxus when to re-render.

use std::sync::Arc;

use dioxus::prelude::*;
use estate_core::contact::{self, ContactField, ContactForm, Submission};
use estate_ui::{Button, ButtonVariant, Input, TextArea};
use parking_lot::Mutex;

use crate::context::use_site;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you shortly.";

/// Status line under the submit button.
pub fn status_line(submission: &Submission) -> Option<(&'static str, String)> {
    match submission {
        Submission::Idle => None,
        Submission::Submitting => Some(("form-status", "Sending...".to_string())),
        Submission::Succeeded => Some((
            "form-status form-status--success",
            SUCCESS_MESSAGE.to_string(),
        )),
        Submission::Failed(reason) => Some(("form-status form-status--error", reason.clone())),
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::EmailId => "email",
        ContactField::PhoneNumber => "tel",
        _ => "text",
    }
}

#[component]
pub fn ContactUs() -> Element {
    let site = use_site();
    let form = use_hook(|| Arc::new(Mutex::new(ContactForm::new())));
    let mut revision = use_signal(|| 0u64);

    // Re-render whenever the form is edited or a submission finishes.
    revision.read();
    let snapshot = form.lock().clone();
    let submitting = snapshot.submission().is_submitting();

    let on_submit = {
        let form = form.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let begun = form.lock().begin_submit();
            revision += 1;
            let payload = match begun {
                Ok(payload) => payload,
                Err(rejected) => {
                    tracing::debug!("Contact submit rejected: {:?}", rejected);
                    return;
                }
            };

            let form = form.clone();
            let api = site.api.clone();
            spawn(async move {
                let result = contact::post_contact(api.as_ref(), &payload).await;
                form.lock().finish_submit(result);
                revision += 1;
            });
        }
    };

    rsx! {
        section { class: "section contact", id: "contact",
            h2 { class: "section-title", "Get in Touch" }
            form { class: "contact-form", novalidate: true, onsubmit: on_submit,
                div { class: "form-row",
                    for field in [ContactField::FirstName, ContactField::LastName] {
                        FormInput { key: "{field.key()}", field, form: form.clone(), snapshot: snapshot.clone(), revision, disabled: submitting }
                    }
                }
                div { class: "form-row",
                    for field in [ContactField::EmailId, ContactField::PhoneNumber] {
                        FormInput { key: "{field.key()}", field, form: form.clone(), snapshot: snapshot.clone(), revision, disabled: submitting }
                    }
                }
                TextArea {
                    id: ContactField::Message.key().to_string(),
                    label: ContactField::Message.label().to_string(),
                    value: snapshot.fields().message.clone(),
                    error: snapshot.error(ContactField::Message).map(str::to_string),
                    disabled: submitting,
                    oninput: {
                        let form = form.clone();
                        move |value: String| {
                            form.lock().edit(ContactField::Message, value);
                            revision += 1;
                        }
                    },
                }

                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    disabled: submitting,
                    if submitting { "Sending..." } else { "Submit" }
                }

                if let Some((class, text)) = status_line(snapshot.submission()) {
                    p { class: "{class}", role: "status", "{text}" }
                }
            }
        }
    }
}

#[derive(Clone, Props)]
struct FormInputProps {
    field: ContactField,
    form: Arc<Mutex<ContactForm>>,
    snapshot: ContactForm,
    revision: Signal<u64>,
    disabled: bool,
}

impl PartialEq for FormInputProps {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && Arc::ptr_eq(&self.form, &other.form)
            && self.snapshot == other.snapshot
            && self.disabled == other.disabled
    }
}

#[component]
fn FormInput(props: FormInputProps) -> Element {
    let FormInputProps {
        field,
        form,
        snapshot,
        mut revision,
        disabled,
    } = props;
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    rsx! {
        Input {
            id: field.key().to_string(),
            label,
            input_type: input_type(field).to_string(),
            value: snapshot.fields().get(field).to_string(),
            error: snapshot.error(field).map(str::to_string),
            disabled,
            oninput: move |value: String| {
                form.lock().edit(field, value);
                revision += 1;
            },
        }
    }
}
