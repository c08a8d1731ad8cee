//! Contact form values and per-field validation.
//!
//! Only the edited field is validated, so a field the user never touched has
//! no stored error. Submission is still blocked for it by the non-empty
//! check in [`ContactForm::can_submit`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::api::models::NewContact;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Character class and length only, ten '+' characters pass.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-+\s]{10,15}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// The message shown under an invalid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Invalid phone number (min 10 digits)")]
    InvalidPhone,
}

pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Name if value.trim().is_empty() => Some(FieldError::NameRequired),
        Field::Name => None,
        // Emptiness is checked untrimmed: blanks fall through to the pattern.
        Field::Email if value.is_empty() => Some(FieldError::EmailRequired),
        Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::InvalidEmail),
        Field::Email => None,
        Field::Phone if value.trim().is_empty() => Some(FieldError::PhoneRequired),
        Field::Phone if !PHONE_RE.is_match(value) => Some(FieldError::InvalidPhone),
        Field::Phone => None,
        Field::Message => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: NewContact,
    errors: HashMap<Field, FieldError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Phone => &self.values.phone,
            Field::Message => &self.values.message,
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Stores the value and re-validates that field alone.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match validate(field, &value) {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        let slot = match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Phone => &mut self.values.phone,
            Field::Message => &mut self.values.message,
        };
        *slot = value;
    }

    pub fn can_submit(&self) -> bool {
        [Field::Name, Field::Email, Field::Phone]
            .into_iter()
            .all(|f| !self.value(f).is_empty() && self.error(f).is_none())
    }

    pub fn payload(&self) -> NewContact {
        self.values.clone()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
