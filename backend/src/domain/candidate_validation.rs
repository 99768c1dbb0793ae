//! Validation of raw candidate submissions.
//!
//! Validation collects every violated constraint before returning, so callers
//! can report all problems with a submission in one response. A submission
//! that passes becomes a [`CandidateInput`] ready for the upsert service.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::{
    CandidateField, CandidateInput, Email, EmailValidationError, has_content, is_provided,
};

/// Which constraints apply to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every field is required and `CallIntervalTime` must be numeric.
    Full,
    /// Only the e-mail key is required; other fields are checked when present.
    Partial,
}

/// Unvalidated candidate fields as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSubmission {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub call_interval_time: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub comments: Option<String>,
}

impl CandidateSubmission {
    fn value(&self, field: CandidateField) -> Option<&str> {
        match field {
            CandidateField::Email => self.email.as_deref(),
            CandidateField::FirstName => self.first_name.as_deref(),
            CandidateField::LastName => self.last_name.as_deref(),
            CandidateField::PhoneNumber => self.phone_number.as_deref(),
            CandidateField::CallIntervalTime => self.call_interval_time.as_deref(),
            CandidateField::LinkedInUrl => self.linked_in_url.as_deref(),
            CandidateField::GitHubUrl => self.git_hub_url.as_deref(),
            CandidateField::Comments => self.comments.as_deref(),
        }
    }
}

/// Field-level validation report, ordered by [`CandidateField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateValidationErrors {
    fields: BTreeMap<CandidateField, Vec<String>>,
}

impl CandidateValidationErrors {
    fn push(&mut self, field: CandidateField, message: String) {
        self.fields.entry(field).or_default().push(message);
    }

    /// Whether no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Messages recorded against `field`, empty when the field passed.
    pub fn messages(&self, field: CandidateField) -> &[String] {
        self.fields.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Iterate over failing fields in report order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateField, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for CandidateValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CandidateValidationErrors {}

fn required_message(field: CandidateField) -> String {
    format!("The {field} field is required.")
}

fn number_message(field: CandidateField) -> String {
    format!("The field {field} must be a number.")
}

fn length_message(field: CandidateField, max: usize) -> String {
    format!("The field {field} must be a string with a maximum length of {max}.")
}

fn email_message() -> String {
    format!("The {} field is not a valid e-mail address.", CandidateField::Email)
}

fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

fn check_field(
    field: CandidateField,
    value: Option<&str>,
    mode: ValidationMode,
    errors: &mut CandidateValidationErrors,
) {
    let provided = is_provided(value);

    if field == CandidateField::CallIntervalTime {
        let must_check = provided || mode == ValidationMode::Full;
        if must_check && !value.is_some_and(is_numeric) {
            errors.push(field, number_message(field));
        }
        return;
    }

    let required = field == CandidateField::Email || mode == ValidationMode::Full;
    if required && !has_content(value) {
        errors.push(field, required_message(field));
        return;
    }
    if !provided {
        return;
    }

    if let (Some(max), Some(raw)) = (field.max_len(), value) {
        if raw.chars().count() > max {
            errors.push(field, length_message(field, max));
        }
    }
}

/// Validate a submission and convert it into a [`CandidateInput`].
///
/// Every violation of every field is recorded; the function never stops at the
/// first failure.
///
/// # Examples
/// ```
/// use candidate_backend::domain::{
///     CandidateField, CandidateSubmission, ValidationMode, validate_candidate,
/// };
///
/// let submission = CandidateSubmission {
///     email: Some("jane@example.com".to_owned()),
///     phone_number: Some("9876543210".to_owned()),
///     ..CandidateSubmission::default()
/// };
/// let input = validate_candidate(submission.clone(), ValidationMode::Partial)
///     .expect("partial submission is valid");
/// assert_eq!(input.phone_number.as_deref(), Some("9876543210"));
///
/// let errors = validate_candidate(submission, ValidationMode::Full)
///     .expect_err("full submission needs every field");
/// assert_eq!(
///     errors.messages(CandidateField::FirstName),
///     ["The FirstName field is required."]
/// );
/// ```
pub fn validate_candidate(
    submission: CandidateSubmission,
    mode: ValidationMode,
) -> Result<CandidateInput, CandidateValidationErrors> {
    let mut errors = CandidateValidationErrors::default();
    for field in CandidateField::ALL {
        check_field(field, submission.value(field), mode, &mut errors);
    }

    let email = submission.email.as_deref().map(Email::new);
    match email {
        Some(Err(EmailValidationError::Malformed)) => {
            errors.push(CandidateField::Email, email_message());
        }
        // Missing or blank addresses were already reported as required.
        Some(Err(EmailValidationError::Empty)) | None => {}
        Some(Ok(_)) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let Some(Ok(email)) = email else {
        return Err(errors);
    };

    Ok(CandidateInput {
        email,
        first_name: submission.first_name,
        last_name: submission.last_name,
        phone_number: submission.phone_number,
        call_interval_time: submission.call_interval_time,
        linked_in_url: submission.linked_in_url,
        git_hub_url: submission.git_hub_url,
        comments: submission.comments,
    })
}

#[cfg(test)]
#[path = "candidate_validation_tests.rs"]
mod tests;
