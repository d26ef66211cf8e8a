use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Message => "Please enter your message",
            Field::Phone => "Phone is required",
            Field::Company => "Company is required",
            Field::Service => "Service is required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", .0.required_message())]
    MissingRequiredField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

pub type FieldErrors = BTreeMap<Field, FormError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormRejected {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }
}

/// Loose `\S+@\S+\.\S+` check: some whitespace-free token has a non-empty
/// local part, an `@`, and a dot with characters on both sides after it.
pub fn looks_like_email(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        let Some(at) = chars.iter().skip(1).position(|c| *c == '@').map(|p| p + 1) else {
            return false;
        };
        let last = chars.len().saturating_sub(1);
        (at + 2..last).any(|i| chars[i] == '.')
    })
}

pub fn validate(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if data.name.trim().is_empty() {
        errors.insert(Field::Name, FormError::MissingRequiredField(Field::Name));
    }

    if data.email.is_empty() {
        errors.insert(Field::Email, FormError::MissingRequiredField(Field::Email));
    } else if !looks_like_email(&data.email) {
        errors.insert(Field::Email, FormError::InvalidEmailFormat);
    }

    if data.message.trim().is_empty() {
        errors.insert(Field::Message, FormError::MissingRequiredField(Field::Message));
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    data: FormData,
    errors: FieldErrors,
    phase: Phase,
}

impl ContactForm {
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self, field: Field) -> Option<&FormError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update one field; any error shown for it goes away.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.data.slot(field) = value.into();
        self.errors.remove(&field);
    }

    /// Validate and, when everything checks out, move to `Submitting` and hand
    /// back the payload to send. Entered values are never touched here.
    pub fn begin_submit(&mut self) -> Result<FormData, FormRejected> {
        if self.phase != Phase::Editing {
            return Err(FormRejected::Busy);
        }

        self.errors = validate(&self.data);
        if !self.errors.is_empty() {
            return Err(FormRejected::Invalid(self.errors.clone()));
        }

        self.phase = Phase::Submitting;
        Ok(self.data.clone())
    }

    pub fn finish_submit(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Submitted;
            self.data = FormData::default();
            self.errors.clear();
        }
    }

    pub fn send_another(&mut self) {
        if self.phase == Phase::Submitted {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        for good in ["jane@example.com", "a@b.c", "x y@z.io", "a@b@c.d", "name+tag@mail.co.ke"] {
            assert!(looks_like_email(good), "{good} should pass");
        }
        for bad in ["bad-email", "@example.com", "jane@example", "jane@.com", "jane@example.", "", "a @b.c"] {
            assert!(!looks_like_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn empty_name_and_bad_email_give_exactly_two_errors() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "bad-email");
        form.set(Field::Message, "Hi there");
        form.set(Field::Phone, "+254723463564");
        form.set(Field::Company, "Acme");

        let rejected = form.begin_submit().unwrap_err();
        let FormRejected::Invalid(errors) = rejected else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(&Field::Name),
            Some(&FormError::MissingRequiredField(Field::Name))
        );
        assert_eq!(errors.get(&Field::Email), Some(&FormError::InvalidEmailFormat));

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.data().message, "Hi there");
        assert_eq!(form.data().phone, "+254723463564");
        assert_eq!(form.data().company, "Acme");
        assert_eq!(form.data().email, "bad-email");
    }

    #[test]
    fn error_messages_match_copy() {
        assert_eq!(FormError::MissingRequiredField(Field::Name).to_string(), "Name is required");
        assert_eq!(FormError::MissingRequiredField(Field::Email).to_string(), "Email is required");
        assert_eq!(
            FormError::MissingRequiredField(Field::Message).to_string(),
            "Please enter your message"
        );
        assert_eq!(
            FormError::InvalidEmailFormat.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "   ");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Message, "\n\t");
        assert!(form.begin_submit().is_err());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Message).is_some());
        assert!(form.error(Field::Email).is_none());
    }

    #[test]
    fn field_feedback_carries_flag_and_text() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Jane");
        form.set(Field::Email, "jane@");
        form.set(Field::Message, "Hello");
        assert!(form.begin_submit().is_err());

        let shown: Vec<_> = [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .map(|field| form.error(field).map(ToString::to_string))
            .collect();
        assert_eq!(
            shown,
            vec![None, Some("Please enter a valid email address".to_string()), None]
        );
    }

    #[test]
    fn typing_clears_that_fields_error() {
        let mut form = ContactForm::default();
        let _ = form.begin_submit();
        assert_eq!(form.errors().len(), 3);

        form.set(Field::Name, "J");
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn valid_submission_runs_to_confirmation_and_clears() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Jane Doe");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Message, "Hello");
        form.set(Field::Service, "mentorship");

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.begin_submit(), Err(FormRejected::Busy));

        form.finish_submit();
        assert_eq!(form.phase(), Phase::Submitted);

        form.send_another();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.data(), &FormData::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn payload_serialises_every_field() {
        let data = FormData {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
            ..FormData::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        for key in ["name", "email", "phone", "company", "service", "message"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
