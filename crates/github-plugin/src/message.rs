//! Error-message extraction for failed GitHub responses

use crate::models::GitHubErrorBody;

/// Whether a `Content-Type` header value declares JSON
fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("application/json")
}

/// Pick the message to surface for a non-2xx response.
///
/// A JSON body's `message` field wins. Anything else falls back to the raw
/// body, and an empty body to `HTTP <status>`.
pub fn extract_error_message(status: u16, content_type: Option<&str>, body: &str) -> String {
    if body.is_empty() {
        return format!("HTTP {}", status);
    }

    if !content_type.is_some_and(is_json_content_type) {
        return body.to_string();
    }

    match serde_json::from_str::<GitHubErrorBody>(body) {
        Ok(GitHubErrorBody {
            message: Some(message),
            ..
        }) => message,
        Ok(_) => body.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_message_field() {
        let msg = extract_error_message(
            422,
            Some("application/json; charset=utf-8"),
            r#"{"message": "Validation Failed", "documentation_url": "https://docs.github.com"}"#,
        );
        assert_eq!(msg, "Validation Failed");
    }

    #[test]
    fn test_non_json_body_is_returned_raw() {
        let msg = extract_error_message(500, Some("text/plain"), "Server Error");
        assert_eq!(msg, "Server Error");
    }

    #[test]
    fn test_missing_content_type_is_returned_raw() {
        let msg = extract_error_message(502, None, r#"{"message": "ignored"}"#);
        assert_eq!(msg, r#"{"message": "ignored"}"#);
    }

    #[test]
    fn test_unparseable_json_falls_back_to_body() {
        let msg = extract_error_message(500, Some("application/json"), "<html>oops</html>");
        assert_eq!(msg, "<html>oops</html>");
    }

    #[test]
    fn test_json_without_message_falls_back_to_body() {
        let body = r#"{"errors": ["bad"]}"#;
        assert_eq!(extract_error_message(400, Some("application/json"), body), body);
    }

    #[test]
    fn test_non_string_message_falls_back_to_body() {
        let body = r#"{"message": 42}"#;
        assert_eq!(extract_error_message(400, Some("Application/JSON"), body), body);
    }

    #[test]
    fn test_whitespace_body_is_returned_raw() {
        assert_eq!(extract_error_message(500, Some("text/plain"), "\n"), "\n");
    }

    #[test]
    fn test_empty_body_reports_status() {
        assert_eq!(extract_error_message(404, Some("application/json"), ""), "HTTP 404");
    }
}
