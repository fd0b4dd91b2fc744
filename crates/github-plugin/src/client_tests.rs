//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use crate::models::CreateGitHubIssue;
    use crate::plugin::USER_AGENT;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock GitHub issue response
    fn mock_github_issue(number: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 1000 + number,
            "number": number,
            "title": title,
            "body": "Test description",
            "state": "open",
            "html_url": format!("https://github.com/owner/repo/issues/{}", number),
            "user": {"login": "reporter", "id": 2}
        })
    }

    fn sample_issue() -> CreateGitHubIssue {
        CreateGitHubIssue {
            title: "ZeroDivisionError".to_string(),
            body: "Traceback (most recent call last)".to_string(),
        }
    }

    /// Base URL nothing listens on
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[tokio::test]
    async fn test_create_issue() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .and(header("Authorization", "token test-token"))
            .and(header("User-Agent", USER_AGENT))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "title": "ZeroDivisionError",
                "body": "Traceback (most recent call last)"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(mock_github_issue(42, "ZeroDivisionError")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let created = client.create_issue("owner/repo", &sample_issue()).unwrap();

        assert_eq!(created.number, 42);
        assert_eq!(
            created.html_url.as_deref(),
            Some("https://github.com/owner/repo/issues/42")
        );
    }

    #[tokio::test]
    async fn test_add_comment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues/7/comments"))
            .and(header("Authorization", "token test-token"))
            .and(header("User-Agent", USER_AGENT))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"body": "Seen again"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 555,
                "body": "Seen again"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let comment = client.add_comment("owner/repo", 7, "Seen again").unwrap();

        assert_eq!(comment["id"], 555);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(201).set_body_json(mock_github_issue(1, "x")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            GitHubClient::with_base_url(&format!("{}/", mock_server.uri()), "test-token");
        assert_eq!(client.create_issue("owner/repo", &sample_issue()).unwrap().number, 1);
    }

    #[tokio::test]
    async fn test_json_error_extracts_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Validation Failed",
                "documentation_url": "https://docs.github.com/rest/issues/issues#create-an-issue"
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Validation Failed");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_uses_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues/3/comments"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client.add_comment("owner/repo", 3, "body").unwrap_err();

        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_error_uses_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(
                ResponseTemplate::new(502).set_body_raw("upstream timeout", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        assert!(
            matches!(err, GitHubError::Api { status: 502, ref message } if message == "upstream timeout")
        );
    }

    #[tokio::test]
    async fn test_success_with_invalid_json_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(201).set_body_string("<html>created</html>"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        assert!(matches!(err, GitHubError::Parse(_)));
    }

    #[tokio::test]
    async fn test_success_with_non_utf8_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(
                ResponseTemplate::new(201).set_body_raw(vec![0xff, 0xfe, 0x7b], "application/json"),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        assert!(matches!(err, GitHubError::Parse(_)));
    }

    #[tokio::test]
    async fn test_success_without_number_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        match err {
            GitHubError::Parse(e) => assert!(e.to_string().contains("number")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_failure_is_http_error() {
        let client = GitHubClient::with_base_url(&closed_port_url(), "test-token");
        let err = client
            .create_issue("owner/repo", &sample_issue())
            .unwrap_err();

        assert!(matches!(err, GitHubError::Http(_)));
    }
}
