//! Tests for the HTTP transport.

use super::*;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod fetch_request_tests {
    use super::*;

    #[test]
    fn test_get_request_defaults() {
        let request = FetchRequest::get("https://example.com/a");
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url(), "https://example.com/a");
        assert!(!request.follows_redirects());
    }

    #[test]
    fn test_post_request_with_body_and_headers() {
        let request = FetchRequest::post("https://example.com/b")
            .bearer("tok")
            .content_type("application/json")
            .body(Bytes::from_static(b"{}"));
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url(), "https://example.com/b");
    }

    #[test]
    fn test_follow_redirects_flag() {
        let request = FetchRequest::get("https://example.com").follow_redirects(true);
        assert!(request.follows_redirects());
    }
}

mod fetch_response_tests {
    use super::*;

    fn response_with_header(name: &str, value: &str) -> FetchResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        FetchResponse::new(200, headers, Bytes::new())
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with_header("Location", "https://cdn.example/f1");
        assert_eq!(response.header("location"), Some("https://cdn.example/f1"));
        assert_eq!(response.header("LOCATION"), Some("https://cdn.example/f1"));
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn test_text_is_lossy_for_invalid_utf8() {
        let response = FetchResponse::new(200, HashMap::new(), Bytes::from_static(&[0xff, 0xfe]));
        assert!(!response.text().is_empty());
    }

    #[test]
    fn test_json_decodes_body() {
        let response = FetchResponse::new(
            200,
            HashMap::new(),
            Bytes::from_static(b"{\"answer\":42}"),
        );
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["answer"], 42);
    }

    #[test]
    fn test_json_fails_on_invalid_body() {
        let response = FetchResponse::new(200, HashMap::new(), Bytes::from_static(b"nope"));
        let result: Result<serde_json::Value, _> = response.json();
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}

mod reqwest_transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_status_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Request-Id", "r1")
                    .set_body_string("hello"),
            )
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .fetch(FetchRequest::get(format!("{}/ok", server.uri())))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("x-request-id"), Some("r1"));
        assert_eq!(response.text(), "hello");
    }

    #[tokio::test]
    async fn test_fetch_sends_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("Authorization", "Bearer tok"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string("payload"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .fetch(
                FetchRequest::post(format!("{}/echo", server.uri()))
                    .bearer("tok")
                    .content_type("text/plain")
                    .body(Bytes::from_static(b"payload")),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
    }

    #[tokio::test]
    async fn test_fetch_fails_on_error_status_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let error = transport
            .fetch(FetchRequest::get(format!("{}/missing", server.uri())))
            .await
            .unwrap_err();

        match error {
            HttpError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_redirect_is_returned_when_not_following() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/redir"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", "https://cdn.example/f1"),
            )
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .fetch(FetchRequest::get(format!("{}/redir", server.uri())))
            .await
            .unwrap();

        assert_eq!(response.status(), 302);
        assert_eq!(response.header("location"), Some("https://cdn.example/f1"));
    }

    #[tokio::test]
    async fn test_redirect_is_followed_when_requested() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/start"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/target", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/target"))
            .respond_with(ResponseTemplate::new(200).set_body_string("final"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .fetch(FetchRequest::get(format!("{}/start", server.uri())).follow_redirects(true))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), "final");
    }

    #[tokio::test]
    async fn test_invalid_header_name_is_rejected_before_sending() {
        let transport = ReqwestTransport::new().unwrap();
        let error = transport
            .fetch(FetchRequest::get("http://localhost:9").header("bad header", "v"))
            .await
            .unwrap_err();
        assert!(matches!(error, HttpError::InvalidRequest { .. }));
    }
}
