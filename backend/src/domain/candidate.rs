//! Candidate record and the partial-update merge rule.
//!
//! A candidate is keyed by e-mail address. Upserts carry a [`CandidateInput`]
//! whose non-key fields are optional; [`Candidate::merge`] folds the
//! provided values onto a stored record without touching the rest.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    Empty,
    Malformed,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::Malformed => write!(f, "email must be a valid e-mail address"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, something on each side, no whitespace anywhere.
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Natural key of a candidate record.
///
/// Matching is exact: the address is stored and compared as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Examples
    /// ```
    /// use candidate_backend::domain::Email;
    ///
    /// assert!(Email::new("jane@example.com").is_ok());
    /// assert!(Email::new("").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, EmailValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if !email_regex().is_match(&raw) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Fields of a candidate submission, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateField {
    Email,
    FirstName,
    LastName,
    PhoneNumber,
    CallIntervalTime,
    LinkedInUrl,
    GitHubUrl,
    Comments,
}

impl CandidateField {
    /// Every field in report order.
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::CallIntervalTime,
        Self::LinkedInUrl,
        Self::GitHubUrl,
        Self::Comments,
    ];

    /// JSON property name used on the wire and as the error report key.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::CallIntervalTime => "callIntervalTime",
            Self::LinkedInUrl => "linkedInUrl",
            Self::GitHubUrl => "gitHubUrl",
            Self::Comments => "comments",
        }
    }

    /// Name used inside human-readable validation messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::PhoneNumber => "PhoneNumber",
            Self::CallIntervalTime => "CallIntervalTime",
            Self::LinkedInUrl => "LinkedInURL",
            Self::GitHubUrl => "GitHubURL",
            Self::Comments => "Comments",
        }
    }

    /// Maximum length in characters, when the field is bounded.
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Self::FirstName | Self::LastName => Some(NAME_MAX),
            Self::LinkedInUrl | Self::GitHubUrl => Some(PROFILE_URL_MAX),
            Self::Comments => Some(COMMENTS_MAX),
            Self::Email | Self::PhoneNumber | Self::CallIntervalTime => None,
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maximum length of first and last names.
pub const NAME_MAX: usize = 50;
/// Maximum length of LinkedIn and GitHub profile URLs.
pub const PROFILE_URL_MAX: usize = 200;
/// Maximum length of free-text comments.
pub const COMMENTS_MAX: usize = 1000;

/// Incoming upsert payload.
///
/// `None` and empty strings both mean "not provided": the stored value is
/// kept. A caller therefore cannot clear a field through an upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub email: Email,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub call_interval_time: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub comments: Option<String>,
}

impl CandidateInput {
    /// Input that carries only the key.
    pub fn new(email: Email) -> Self {
        Self {
            email,
            first_name: None,
            last_name: None,
            phone_number: None,
            call_interval_time: None,
            linked_in_url: None,
            git_hub_url: None,
            comments: None,
        }
    }
}

/// Stored candidate record.
///
/// ## Invariants
/// - At most one record exists per [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub call_interval_time: String,
    pub linked_in_url: String,
    pub git_hub_url: String,
    pub comments: String,
}

/// Whether a submitted value counts as provided and overwrites on merge.
///
/// Only absence and the empty string mean "keep"; whitespace is a value.
pub fn is_provided(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !raw.is_empty())
}

/// Whether a submitted value satisfies a required-field check.
pub fn has_content(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !raw.trim().is_empty())
}

fn pick(incoming: Option<&String>, current: &str) -> String {
    match incoming {
        Some(value) if is_provided(Some(value)) => value.clone(),
        _ => current.to_owned(),
    }
}

impl Candidate {
    /// Build a first-time record from an input. Missing fields are stored empty.
    ///
    /// # Examples
    /// ```
    /// use candidate_backend::domain::{Candidate, CandidateInput, Email};
    ///
    /// let email = Email::new("jane@example.com").expect("valid email");
    /// let input = CandidateInput {
    ///     first_name: Some("Jane".to_owned()),
    ///     ..CandidateInput::new(email)
    /// };
    /// let candidate = Candidate::from_input(&input);
    /// assert_eq!(candidate.first_name, "Jane");
    /// assert!(candidate.last_name.is_empty());
    /// ```
    pub fn from_input(input: &CandidateInput) -> Self {
        let blank = Self {
            email: input.email.clone(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            call_interval_time: String::new(),
            linked_in_url: String::new(),
            git_hub_url: String::new(),
            comments: String::new(),
        };
        blank.merge(input)
    }

    /// Return a copy of `self` with every provided input field applied.
    ///
    /// The key is never changed. The receiver is left untouched so the caller
    /// can persist the merged value in a single write.
    ///
    /// # Examples
    /// ```
    /// use candidate_backend::domain::{Candidate, CandidateInput, Email};
    ///
    /// let email = Email::new("existing@example.com").expect("valid email");
    /// let stored = Candidate::from_input(&CandidateInput {
    ///     first_name: Some("Jane".to_owned()),
    ///     phone_number: Some("9876543210".to_owned()),
    ///     ..CandidateInput::new(email.clone())
    /// });
    /// let patch = CandidateInput {
    ///     first_name: Some(String::new()),
    ///     phone_number: Some("9999999999".to_owned()),
    ///     ..CandidateInput::new(email)
    /// };
    ///
    /// let merged = stored.merge(&patch);
    /// assert_eq!(merged.first_name, "Jane");
    /// assert_eq!(merged.phone_number, "9999999999");
    /// ```
    #[must_use]
    pub fn merge(&self, input: &CandidateInput) -> Self {
        Self {
            email: self.email.clone(),
            first_name: pick(input.first_name.as_ref(), &self.first_name),
            last_name: pick(input.last_name.as_ref(), &self.last_name),
            phone_number: pick(input.phone_number.as_ref(), &self.phone_number),
            call_interval_time: pick(input.call_interval_time.as_ref(), &self.call_interval_time),
            linked_in_url: pick(input.linked_in_url.as_ref(), &self.linked_in_url),
            git_hub_url: pick(input.git_hub_url.as_ref(), &self.git_hub_url),
            comments: pick(input.comments.as_ref(), &self.comments),
        }
    }
}

#[cfg(test)]
mod tests;
