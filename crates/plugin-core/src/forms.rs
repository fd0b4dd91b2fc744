//! Statically declared forms and field validation
//!
//! Hosts render a [`FormSpec`] and hand the submitted raw values back to
//! [`FormSpec::clean`], which produces typed values or per-field errors.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Raw submitted form values keyed by field name
pub type FormData = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    /// Positive whole number
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
            placeholder: None,
            help_text: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn integer(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Text(String),
    Integer(u64),
}

/// Validated form values. Blank optional fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedForm {
    values: BTreeMap<String, FieldValue>,
}

impl CleanedForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Ordered list of form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSpec {
    pub fields: Vec<FormField>,
}

impl FormSpec {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Validate raw values against the declared fields.
    ///
    /// Values are trimmed; values for undeclared fields are ignored. All
    /// field errors are collected, in field order.
    pub fn clean(&self, data: &FormData) -> Result<CleanedForm, Vec<FieldError>> {
        let mut cleaned = CleanedForm::default();
        let mut errors = Vec::new();

        for field in &self.fields {
            let raw = data.get(&field.name).map(|v| v.trim()).unwrap_or("");

            if raw.is_empty() {
                if field.required {
                    errors.push(FieldError::new(&field.name, "This field is required."));
                }
                continue;
            }

            let value = match field.kind {
                FieldKind::Text | FieldKind::Textarea => FieldValue::Text(raw.to_string()),
                FieldKind::Integer => match raw.parse::<u64>() {
                    Ok(0) => {
                        errors.push(FieldError::new(
                            &field.name,
                            "Ensure this value is greater than or equal to 1.",
                        ));
                        continue;
                    }
                    Ok(n) => FieldValue::Integer(n),
                    Err(_) => {
                        errors.push(FieldError::new(&field.name, "Enter a whole number."));
                        continue;
                    }
                },
            };
            cleaned.values.insert(field.name.clone(), value);
        }

        if errors.is_empty() {
            Ok(cleaned)
        } else {
            Err(errors)
        }
    }
}
