//! Regression coverage for the candidate record and merge rule.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn email() -> Email {
    Email::new("existing@example.com").expect("fixture email is valid")
}

#[fixture]
fn stored(email: Email) -> Candidate {
    Candidate {
        email,
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        phone_number: "9876543210".to_owned(),
        call_interval_time: "30".to_owned(),
        linked_in_url: "https://linkedin.com/existing".to_owned(),
        git_hub_url: "https://github.com/existinguser".to_owned(),
        comments: "Existing candidate".to_owned(),
    }
}

fn full_input(email: Email) -> CandidateInput {
    CandidateInput {
        first_name: Some("UpdatedJane".to_owned()),
        last_name: Some("Smith".to_owned()),
        phone_number: Some("9999999999".to_owned()),
        call_interval_time: Some("45".to_owned()),
        linked_in_url: Some("https://linkedin.com/updated".to_owned()),
        git_hub_url: Some("https://github.com/updated".to_owned()),
        comments: Some("Updated candidate".to_owned()),
        ..CandidateInput::new(email)
    }
}

#[rstest]
#[case("jane@example.com")]
#[case("a@b")]
#[case("first.last+tag@sub.example.org")]
fn email_accepts_addresses(#[case] raw: &str) {
    let email = Email::new(raw).expect("address should be accepted");
    assert_eq!(email.as_ref(), raw);
}

#[rstest]
#[case("", EmailValidationError::Empty)]
#[case("   ", EmailValidationError::Empty)]
#[case("no-at-sign", EmailValidationError::Malformed)]
#[case("two@@example.com", EmailValidationError::Malformed)]
#[case(" jane@example.com", EmailValidationError::Malformed)]
#[case("@example.com", EmailValidationError::Malformed)]
fn email_rejects_invalid_input(#[case] raw: &str, #[case] expected: EmailValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_deserialisation_validates() {
    let ok: Result<Email, _> = serde_json::from_str("\"jane@example.com\"");
    assert!(ok.is_ok());
    let bad: Result<Email, _> = serde_json::from_str("\"\"");
    assert!(bad.is_err());
}

#[rstest]
fn from_input_stores_every_field_verbatim(email: Email) {
    let input = full_input(email.clone());
    let candidate = Candidate::from_input(&input);

    assert_eq!(candidate.email, email);
    assert_eq!(candidate.first_name, "UpdatedJane");
    assert_eq!(candidate.last_name, "Smith");
    assert_eq!(candidate.phone_number, "9999999999");
    assert_eq!(candidate.call_interval_time, "45");
    assert_eq!(candidate.linked_in_url, "https://linkedin.com/updated");
    assert_eq!(candidate.git_hub_url, "https://github.com/updated");
    assert_eq!(candidate.comments, "Updated candidate");
}

#[rstest]
fn from_input_leaves_missing_fields_empty(email: Email) {
    let candidate = Candidate::from_input(&CandidateInput::new(email));
    assert!(candidate.first_name.is_empty());
    assert!(candidate.comments.is_empty());
}

#[rstest]
fn merge_replaces_every_provided_field(stored: Candidate, email: Email) {
    let input = full_input(email);
    let merged = stored.merge(&input);
    assert_eq!(merged, Candidate::from_input(&input));
}

#[rstest]
fn merge_keeps_fields_that_are_empty_or_absent(stored: Candidate, email: Email) {
    let input = CandidateInput {
        first_name: Some(String::new()),
        last_name: None,
        phone_number: Some("9999999999".to_owned()),
        call_interval_time: None,
        linked_in_url: Some(String::new()),
        git_hub_url: None,
        comments: Some(String::new()),
        ..CandidateInput::new(email)
    };

    let merged = stored.merge(&input);

    assert_eq!(merged.first_name, "Jane");
    assert_eq!(merged.last_name, "Doe");
    assert_eq!(merged.phone_number, "9999999999");
    assert_eq!(merged.call_interval_time, "30");
    assert_eq!(merged.linked_in_url, "https://linkedin.com/existing");
    assert_eq!(merged.git_hub_url, "https://github.com/existinguser");
    assert_eq!(merged.comments, "Existing candidate");
}

#[rstest]
fn merge_applies_whitespace_values_verbatim(stored: Candidate, email: Email) {
    let input = CandidateInput {
        phone_number: Some("   ".to_owned()),
        comments: Some(" trailing ".to_owned()),
        ..CandidateInput::new(email)
    };

    let merged = stored.merge(&input);

    assert_eq!(merged.phone_number, "   ");
    assert_eq!(merged.comments, " trailing ");
    assert_eq!(merged.first_name, "Jane");
}

#[rstest]
#[case(None, false)]
#[case(Some(""), false)]
#[case(Some("   "), true)]
#[case(Some("x"), true)]
fn only_absent_or_empty_values_are_skipped(#[case] value: Option<&str>, #[case] expected: bool) {
    assert_eq!(is_provided(value), expected);
}

#[rstest]
fn merge_never_changes_the_key(stored: Candidate) {
    let other = Email::new("other@example.com").expect("valid email");
    let merged = stored.merge(&full_input(other));
    assert_eq!(merged.email, stored.email);
}

#[rstest]
fn merge_with_identical_input_is_stable(stored: Candidate, email: Email) {
    let input = full_input(email);
    let once = stored.merge(&input);
    let twice = once.merge(&input);
    assert_eq!(once, twice);
}

#[rstest]
fn field_metadata_matches_limits() {
    assert_eq!(CandidateField::FirstName.max_len(), Some(50));
    assert_eq!(CandidateField::LastName.max_len(), Some(50));
    assert_eq!(CandidateField::LinkedInUrl.max_len(), Some(200));
    assert_eq!(CandidateField::GitHubUrl.max_len(), Some(200));
    assert_eq!(CandidateField::Comments.max_len(), Some(1000));
    assert_eq!(CandidateField::PhoneNumber.max_len(), None);
    assert_eq!(CandidateField::LinkedInUrl.display_name(), "LinkedInURL");
    assert_eq!(CandidateField::LinkedInUrl.wire_name(), "linkedInUrl");
}
