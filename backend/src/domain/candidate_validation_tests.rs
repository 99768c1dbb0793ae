//! Coverage for required, numeric, length and address rules.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn complete() -> CandidateSubmission {
    CandidateSubmission {
        email: Some("john.doe@example.com".to_owned()),
        first_name: Some("John".to_owned()),
        last_name: Some("Doe".to_owned()),
        phone_number: Some("1234567890".to_owned()),
        call_interval_time: Some("30".to_owned()),
        linked_in_url: Some("https://linkedin.com/johndoe".to_owned()),
        git_hub_url: Some("https://github.com/johndoe".to_owned()),
        comments: Some("New candidate".to_owned()),
    }
}

fn empty_strings() -> CandidateSubmission {
    CandidateSubmission {
        email: Some(String::new()),
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        phone_number: Some(String::new()),
        call_interval_time: Some(String::new()),
        linked_in_url: Some(String::new()),
        git_hub_url: Some(String::new()),
        comments: Some(String::new()),
    }
}

#[rstest]
fn complete_submission_passes_full_validation(complete: CandidateSubmission) {
    let input = validate_candidate(complete, ValidationMode::Full).expect("valid");
    assert_eq!(input.email.as_ref(), "john.doe@example.com");
    assert_eq!(input.first_name.as_deref(), Some("John"));
    assert_eq!(input.call_interval_time.as_deref(), Some("30"));
    assert_eq!(input.comments.as_deref(), Some("New candidate"));
}

#[rstest]
#[case::empty_strings(empty_strings())]
#[case::absent(CandidateSubmission::default())]
fn blank_submission_reports_every_required_field(#[case] submission: CandidateSubmission) {
    let errors = validate_candidate(submission, ValidationMode::Full).expect_err("invalid");

    assert_eq!(errors.len(), 8);
    for (field, name) in [
        (CandidateField::Email, "Email"),
        (CandidateField::FirstName, "FirstName"),
        (CandidateField::LastName, "LastName"),
        (CandidateField::PhoneNumber, "PhoneNumber"),
        (CandidateField::LinkedInUrl, "LinkedInURL"),
        (CandidateField::GitHubUrl, "GitHubURL"),
        (CandidateField::Comments, "Comments"),
    ] {
        assert_eq!(
            errors.messages(field),
            [format!("The {name} field is required.")],
            "unexpected messages for {name}"
        );
    }
    assert_eq!(
        errors.messages(CandidateField::CallIntervalTime),
        ["The field CallIntervalTime must be a number."]
    );
}

#[rstest]
#[case("Anytime")]
#[case("12a")]
#[case("-5")]
#[case("1.5")]
fn non_numeric_call_interval_is_rejected_in_both_modes(
    complete: CandidateSubmission,
    #[case] raw: &str,
) {
    for mode in [ValidationMode::Full, ValidationMode::Partial] {
        let submission = CandidateSubmission {
            call_interval_time: Some(raw.to_owned()),
            ..complete.clone()
        };
        let errors = validate_candidate(submission, mode).expect_err("non-numeric");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.messages(CandidateField::CallIntervalTime),
            ["The field CallIntervalTime must be a number."]
        );
    }
}

#[rstest]
#[case(CandidateField::FirstName, 50)]
#[case(CandidateField::LastName, 50)]
#[case(CandidateField::LinkedInUrl, 200)]
#[case(CandidateField::GitHubUrl, 200)]
#[case(CandidateField::Comments, 1000)]
fn values_at_the_limit_pass_and_one_more_fails(
    complete: CandidateSubmission,
    #[case] field: CandidateField,
    #[case] max: usize,
) {
    let with_len = |len: usize| {
        let mut submission = complete.clone();
        let value = Some("a".repeat(len));
        match field {
            CandidateField::FirstName => submission.first_name = value,
            CandidateField::LastName => submission.last_name = value,
            CandidateField::LinkedInUrl => submission.linked_in_url = value,
            CandidateField::GitHubUrl => submission.git_hub_url = value,
            CandidateField::Comments => submission.comments = value,
            other => panic!("{other:?} has no length limit"),
        }
        submission
    };

    let accepted = validate_candidate(with_len(max), ValidationMode::Full);
    assert!(accepted.is_ok(), "{field:?} at {max} should pass");

    let errors =
        validate_candidate(with_len(max + 1), ValidationMode::Full).expect_err("too long");
    assert_eq!(
        errors.messages(field),
        [format!(
            "The field {} must be a string with a maximum length of {max}.",
            field.display_name()
        )]
    );
}

#[rstest]
fn lengths_count_characters_not_bytes(complete: CandidateSubmission) {
    let submission = CandidateSubmission {
        first_name: Some("é".repeat(50)),
        ..complete
    };
    assert!(validate_candidate(submission, ValidationMode::Full).is_ok());
}

#[rstest]
fn malformed_email_is_reported(complete: CandidateSubmission) {
    let submission = CandidateSubmission {
        email: Some("not-an-address".to_owned()),
        ..complete
    };
    let errors = validate_candidate(submission, ValidationMode::Full).expect_err("bad email");
    assert_eq!(
        errors.messages(CandidateField::Email),
        ["The Email field is not a valid e-mail address."]
    );
}

#[rstest]
fn partial_submission_only_requires_email() {
    let submission = CandidateSubmission {
        email: Some("existing@example.com".to_owned()),
        first_name: Some(String::new()),
        phone_number: Some("9999999999".to_owned()),
        ..CandidateSubmission::default()
    };

    let input = validate_candidate(submission, ValidationMode::Partial).expect("valid");
    assert_eq!(input.first_name.as_deref(), Some(""));
    assert_eq!(input.phone_number.as_deref(), Some("9999999999"));
    assert!(input.last_name.is_none());
}

#[rstest]
fn partial_submission_without_email_is_rejected() {
    let submission = CandidateSubmission {
        first_name: Some("Jane".to_owned()),
        ..CandidateSubmission::default()
    };
    let errors = validate_candidate(submission, ValidationMode::Partial).expect_err("no key");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.messages(CandidateField::Email),
        ["The Email field is required."]
    );
}

#[rstest]
fn partial_submission_still_enforces_lengths() {
    let submission = CandidateSubmission {
        email: Some("existing@example.com".to_owned()),
        comments: Some("x".repeat(1001)),
        ..CandidateSubmission::default()
    };
    let errors = validate_candidate(submission, ValidationMode::Partial).expect_err("too long");
    assert_eq!(errors.len(), 1);
    assert!(!errors.messages(CandidateField::Comments).is_empty());
}

#[rstest]
fn violations_across_fields_are_all_collected(complete: CandidateSubmission) {
    let submission = CandidateSubmission {
        email: Some("broken".to_owned()),
        last_name: None,
        call_interval_time: Some("soon".to_owned()),
        git_hub_url: Some("g".repeat(201)),
        ..complete
    };
    let errors = validate_candidate(submission, ValidationMode::Full).expect_err("invalid");

    let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        [
            CandidateField::Email,
            CandidateField::LastName,
            CandidateField::CallIntervalTime,
            CandidateField::GitHubUrl,
        ]
    );
}

#[rstest]
fn display_joins_messages_in_field_order() {
    let submission = CandidateSubmission {
        email: Some("jane@example.com".to_owned()),
        first_name: Some("f".repeat(51)),
        call_interval_time: Some("later".to_owned()),
        ..CandidateSubmission::default()
    };
    let errors = validate_candidate(submission, ValidationMode::Partial).expect_err("invalid");
    assert_eq!(
        errors.to_string(),
        "The field FirstName must be a string with a maximum length of 50. \
         The field CallIntervalTime must be a number."
    );
}

#[rstest]
fn whitespace_only_values_fail_required_checks(complete: CandidateSubmission) {
    let submission = CandidateSubmission {
        first_name: Some("   ".to_owned()),
        ..complete
    };
    let errors = validate_candidate(submission, ValidationMode::Full).expect_err("blank name");
    assert_eq!(
        errors.messages(CandidateField::FirstName),
        ["The FirstName field is required."]
    );
}

#[rstest]
fn partial_submission_passes_whitespace_through() {
    let submission = CandidateSubmission {
        email: Some("existing@example.com".to_owned()),
        phone_number: Some("   ".to_owned()),
        ..CandidateSubmission::default()
    };
    let input = validate_candidate(submission, ValidationMode::Partial).expect("valid");
    assert_eq!(input.phone_number.as_deref(), Some("   "));
}

#[rstest]
fn partial_whitespace_call_interval_is_not_a_number() {
    let submission = CandidateSubmission {
        email: Some("existing@example.com".to_owned()),
        call_interval_time: Some("  ".to_owned()),
        ..CandidateSubmission::default()
    };
    let errors = validate_candidate(submission, ValidationMode::Partial).expect_err("blank");
    assert_eq!(
        errors.messages(CandidateField::CallIntervalTime),
        ["The field CallIntervalTime must be a number."]
    );
}
