//! Input Field Components
//!
//! Labelled text inputs and textareas with an inline validation message.
//! A field with an error gets the `input-field--error` border.

use dioxus::prelude::*;

use super::button::join_class;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Field id, also used as the input `name`
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Label text
    pub label: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Text input with label and inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "first_name".to_string(),
///         label: "First Name".to_string(),
///         value: form.read().fields().first_name.clone(),
///         error: form.read().error(ContactField::FirstName).map(str::to_string),
///         oninput: move |v| form.write().edit(ContactField::FirstName, v),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = field_class(props.error.is_some());

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                FieldError { message: error.clone() }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = join_class(&field_class(props.error.is_some()), Some("textarea"));

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                FieldError { message: error.clone() }
            }
        }
    }
}

/// Inline validation message
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", role: "alert",
            span { class: "field-error__icon", "!" }
            "{message}"
        }
    }
}

fn field_class(has_error: bool) -> String {
    if has_error {
        "input-field input-field--error".to_string()
    } else {
        "input-field".to_string()
    }
}
