//! Failures talking to the API and turning them into something a user can
//! read

use officehub_shared::const_config::error::ERROR_NETWORK_MESSAGE;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received (server unreachable, DNS, CORS, ...)
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status code: {status}")]
    Status { status: StatusCode, body: ApiErrorBody },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl ApiErrorBody {
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}

/// Best effort message for the user from a failed call
///
/// Checked in order: `detail`, `error` and `message` fields of the body, then
/// field validation errors (`{"field_name": ["msg"]}` becomes `Field Name:
/// msg`), then the fixed message for network failures, then `fallback`
pub fn error_message(error: Option<&ApiError>, fallback: &str) -> String {
    match error {
        Some(ApiError::Network(_)) => ERROR_NETWORK_MESSAGE.to_string(),
        Some(ApiError::Status { body, .. }) => {
            body_message(body).unwrap_or_else(|| fallback.to_string())
        }
        Some(ApiError::Decode(_)) | None => fallback.to_string(),
    }
}

/// Looks for an [`ApiError`] anywhere in the chain of `error`
pub fn user_message(error: &anyhow::Error, fallback: &str) -> String {
    error_message(find_api_error(error), fallback)
}

pub fn find_api_error(error: &anyhow::Error) -> Option<&ApiError> {
    error.chain().find_map(|e| e.downcast_ref::<ApiError>())
}

fn body_message(body: &ApiErrorBody) -> Option<String> {
    let value = match body {
        ApiErrorBody::Json(value) => value,
        ApiErrorBody::Empty | ApiErrorBody::Text(_) => return None,
    };
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => first_string(items),
        serde_json::Value::Object(map) => {
            for key in ["detail", "error", "message"] {
                if let Some(serde_json::Value::String(s)) = map.get(key) {
                    return Some(s.clone());
                }
            }
            let lines: Vec<String> = map
                .iter()
                .filter_map(|(field, value)| {
                    let msg = match value {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Array(items) => first_string(items),
                        _ => None,
                    }?;
                    Some(if field == "non_field_errors" {
                        msg
                    } else {
                        format!("{}: {msg}", field_label(field))
                    })
                })
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        _ => None,
    }
}

fn first_string(items: &[serde_json::Value]) -> Option<String> {
    items.iter().find_map(|x| x.as_str().map(str::to_string))
}

/// `first_name` -> `First Name`
fn field_label(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use officehub_shared::const_config::error::ERROR_GENERIC_MESSAGE;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn status_error(body: serde_json::Value) -> ApiError {
        ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Json(body),
        }
    }

    #[rstest]
    #[case::detail(json!({"detail": "X"}), "X")]
    #[case::error(json!({"error": "Quota exceeded"}), "Quota exceeded")]
    #[case::message(json!({"message": "Try later"}), "Try later")]
    #[case::detail_wins(json!({"message": "m", "detail": "d"}), "d")]
    #[case::field(json!({"field": ["err1"]}), "Field: err1")]
    #[case::field_first_message_only(json!({"field": ["err1", "err2"]}), "Field: err1")]
    #[case::snake_case_field(json!({"first_name": ["This field is required."]}), "First Name: This field is required.")]
    #[case::non_field(json!({"non_field_errors": ["Bad credentials"]}), "Bad credentials")]
    #[case::multiple_fields(json!({"email": ["taken"], "name": ["blank"]}), "Email: taken\nName: blank")]
    #[case::bare_string(json!("Nope"), "Nope")]
    #[case::bare_list(json!(["Nope"]), "Nope")]
    fn message_from_body(#[case] body: serde_json::Value, #[case] expected: &str) {
        // Arrange
        let error = status_error(body);

        // Act
        let actual = error_message(Some(&error), ERROR_GENERIC_MESSAGE);

        // Assert
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty_object(json!({}))]
    #[case::nested_only(json!({"address": {"city": ["required"]}}))]
    #[case::number(json!(500))]
    fn unusable_body_gives_fallback(#[case] body: serde_json::Value) {
        let actual = error_message(Some(&status_error(body)), "Could not save");
        assert_eq!(actual, "Could not save");
    }

    #[test]
    fn network_error_has_fixed_message() {
        let error = ApiError::Network("Network Error".to_string());
        assert_eq!(
            error_message(Some(&error), "ignored"),
            ERROR_NETWORK_MESSAGE
        );
    }

    #[test]
    fn no_error_gives_fallback() {
        assert_eq!(error_message(None, "Fallback"), "Fallback");
    }

    #[test]
    fn text_body_gives_fallback() {
        // Arrange
        let error = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: ApiErrorBody::from_text("<html>bad gateway</html>".to_string()),
        };

        // Act / Assert
        assert_eq!(error_message(Some(&error), "Fallback"), "Fallback");
    }

    #[test]
    fn found_through_anyhow_context() {
        // Arrange
        let error = anyhow::Error::new(status_error(json!({"detail": "Not found."})))
            .context("failed to load clients");

        // Act
        let actual = user_message(&error, "Fallback");

        // Assert
        assert_eq!(actual, "Not found.");
    }

    #[rstest]
    #[case::empty("", ApiErrorBody::Empty)]
    #[case::whitespace("  \n", ApiErrorBody::Empty)]
    #[case::json(r#"{"detail":"x"}"#, ApiErrorBody::Json(json!({"detail":"x"})))]
    #[case::text("Internal Server Error", ApiErrorBody::Text("Internal Server Error".into()))]
    fn body_classification(#[case] text: &str, #[case] expected: ApiErrorBody) {
        assert_eq!(ApiErrorBody::from_text(text.to_string()), expected);
    }

    #[test]
    fn unauthorized_detection() {
        let error = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: ApiErrorBody::Empty,
        };
        assert!(error.is_unauthorized());
        assert!(!ApiError::Network("x".into()).is_unauthorized());
    }
}
