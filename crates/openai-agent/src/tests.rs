/// Client tests against a mockito server standing in for the
/// chat-completions endpoint.
#[cfg(test)]
mod unit {
    use std::time::Duration;

    use serde_json::json;

    use crate::client::{ClientConfig, OpenAiClient};
    use crate::error::OpenAiAgentError;

    fn client(base_url: String, api_key: Option<&str>) -> OpenAiClient {
        OpenAiClient::new(ClientConfig {
            api_key: api_key.map(Into::into),
            base_url,
            model: "gpt-4o".into(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": { "steps": { "type": "array" } },
            "required": ["steps"],
            "additionalProperties": false,
        })
    }

    fn completion_body(content: &serde_json::Value) -> String {
        json!({
            "choices": [{
                "message": { "content": content.to_string(), "refusal": null }
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn posts_once_and_returns_parsed_content() {
        let mut server = mockito::Server::new_async().await;
        let content = json!({"steps": [{"explanation": "x", "command": "y"}]});
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(&content))
            .expect(1)
            .create_async()
            .await;

        let client = client(server.url(), Some("test-key"));
        let value = client
            .structured("prompt", "Install a web server", "script", schema())
            .await
            .unwrap();

        assert_eq!(value, content);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn request_carries_strict_json_schema_format() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "prompt" },
                    { "role": "user", "content": "hello" }
                ],
                "response_format": {
                    "type": "json_schema",
                    "json_schema": { "name": "script", "strict": true }
                }
            })))
            .with_status(200)
            .with_body(completion_body(&json!({"steps": []})))
            .create_async()
            .await;

        let client = client(server.url(), Some("test-key"));
        client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_a_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let client = client(server.url(), None);
        let err = client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap_err();

        assert!(matches!(err, OpenAiAgentError::MissingApiKey));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_error_status_is_mapped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(json!({"error": {"message": "Incorrect API key provided"}}).to_string())
            .create_async()
            .await;

        let client = client(server.url(), Some("bad-key"));
        let err = client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap_err();

        let OpenAiAgentError::Api { status, message } = err else {
            panic!("expected Api error, got {err}");
        };
        assert_eq!(status, 401);
        assert_eq!(message, "Incorrect API key provided");
    }

    #[tokio::test]
    async fn refusal_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(
                json!({
                    "choices": [{
                        "message": { "content": null, "refusal": "I can't help with that." }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(server.url(), Some("test-key"));
        let err = client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiAgentError::Refusal(_)));
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(json!({"choices": []}).to_string())
            .create_async()
            .await;

        let client = client(server.url(), Some("test-key"));
        let err = client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiAgentError::NoChoices));
    }

    #[tokio::test]
    async fn non_json_content_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(
                json!({
                    "choices": [{
                        "message": { "content": "not json at all", "refusal": null }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(server.url(), Some("test-key"));
        let err = client
            .structured("prompt", "hello", "script", schema())
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiAgentError::Content { .. }));
    }
}
