//! Signup request validation.
//!
//! Pure and synchronous; runs strictly before hashing or persistence so that
//! malformed input never costs a hash or a store round-trip. The rules
//! themselves are declared on [`SignupRequest`] with `validator` attributes;
//! this module turns a failed check into a `ChatError`.

use validator::Validate;

use crate::domain::SignupRequest;
use crate::errors::{ChatError, ChatResult};

/// Validate a signup request against the configured rules.
///
/// Any failing rule aborts the pipeline before any mutation occurs.
pub fn validate_signup(request: &SignupRequest) -> ChatResult<()> {
    request
        .validate()
        .map_err(|e| ChatError::validation(format_validation_errors(&e)))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str, name: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        assert!(validate_signup(&request("carol", "pw12345!", "Carol")).is_ok());
    }

    #[test]
    fn rejects_short_username() {
        let err = validate_signup(&request("ab", "pw12345!", "Carol")).unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[test]
    fn rejects_username_with_bad_charset() {
        let err = validate_signup(&request("carol!", "pw12345!", "Carol")).unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[test]
    fn uppercase_usernames_are_valid_input() {
        // Normalization happens at identity construction, not validation
        assert!(validate_signup(&request("Alice", "pw12345!", "Alice")).is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_signup(&request("carol", "short", "Carol")).unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = validate_signup(&request("carol", "pw12345!", "")).unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[test]
    fn reports_all_failing_fields() {
        let err = validate_signup(&request("", "", "")).unwrap_err();
        let ChatError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Username"));
        assert!(msg.contains("Password"));
        assert!(msg.contains("Name"));
    }
}
