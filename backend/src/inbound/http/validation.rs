//! Shared validation helpers for inbound HTTP adapters.
//!
//! Turns domain validation reports and body parsing failures into the
//! standard `invalid_request` error envelope.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::{CandidateValidationErrors, Error};

/// Top-level message for a submission that failed field validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "candidate validation failed";

/// Detail codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    ValidationFailed,
    InvalidJson,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::InvalidJson => "invalid_json",
        }
    }
}

/// Map a field report to `invalid_request` with every message per field,
/// keyed by field name rather than the camelCase body name.
///
/// ```text
/// {"code":"validation_failed","fields":{"FirstName":["The FirstName field is required."]}}
/// ```
pub(crate) fn candidate_validation_error(errors: &CandidateValidationErrors) -> Error {
    let fields: Map<String, Value> = errors
        .iter()
        .map(|(field, messages)| (field.display_name().to_owned(), json!(messages)))
        .collect();

    Error::invalid_request(VALIDATION_FAILED_MESSAGE).with_details(json!({
        "code": ValidationCode::ValidationFailed.as_str(),
        "fields": fields,
    }))
}

fn invalid_json_error(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request("request body must be a JSON object").with_details(json!({
        "code": ValidationCode::InvalidJson.as_str(),
        "reason": err.to_string(),
    }))
}

/// JSON extractor configuration that reports body errors in the standard
/// error envelope instead of Actix's plain-text default.
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| invalid_json_error(&err).into())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for validation error envelopes.
    use super::*;
    use crate::domain::{
        CandidateField, CandidateSubmission, ErrorCode, ValidationMode, validate_candidate,
    };
    use rstest::rstest;

    #[rstest]
    fn report_is_keyed_by_field_name() {
        let errors = validate_candidate(CandidateSubmission::default(), ValidationMode::Full)
            .expect_err("blank submission is invalid");

        let error = candidate_validation_error(&errors);

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), VALIDATION_FAILED_MESSAGE);
        let details = error.details().expect("details present");
        assert_eq!(details["code"], "validation_failed");
        let fields = details["fields"].as_object().expect("fields object");
        assert_eq!(fields.len(), CandidateField::ALL.len());
        assert_eq!(
            fields["LinkedInURL"],
            json!(["The LinkedInURL field is required."])
        );
        assert_eq!(
            fields["CallIntervalTime"],
            json!(["The field CallIntervalTime must be a number."])
        );
        assert!(fields.contains_key("GitHubURL"));
        assert!(fields.contains_key("FirstName"));
        assert!(!fields.contains_key("linkedInUrl"));
    }

    #[rstest]
    fn invalid_json_is_an_invalid_request() {
        let error = invalid_json_error(&JsonPayloadError::ContentType);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details present");
        assert_eq!(details["code"], "invalid_json");
    }
}
