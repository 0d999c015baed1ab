//! Mock club backend for testing
//!
//! Wraps a wiremock server answering with the backend's `{success, ...}`
//! envelopes.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer `http_method path` with `{"success": true, ...payload}`
    pub async fn mock_ok(&self, http_method: &str, endpoint: &str, payload: Value) {
        let mut body = json!({ "success": true });
        if let (Some(body), Value::Object(payload)) = (body.as_object_mut(), payload) {
            body.extend(payload);
        }

        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Like `mock_ok`, also setting `cookie` on the response
    pub async fn mock_ok_setting_cookie(
        &self,
        http_method: &str,
        endpoint: &str,
        cookie: &str,
        payload: Value,
    ) {
        let mut body = json!({ "success": true });
        if let (Some(body), Value::Object(payload)) = (body.as_object_mut(), payload) {
            body.extend(payload);
        }

        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", format!("{}; Path=/", cookie).as_str())
                    .set_body_json(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with `payload` only when the request carries `cookie`, otherwise 403
    pub async fn mock_ok_requiring_cookie(
        &self,
        http_method: &str,
        endpoint: &str,
        cookie: &str,
        payload: Value,
    ) {
        let mut body = json!({ "success": true });
        if let (Some(body), Value::Object(payload)) = (body.as_object_mut(), payload) {
            body.extend(payload);
        }

        Mock::given(method(http_method))
            .and(path(endpoint))
            .and(header("cookie", cookie))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .with_priority(1)
            .mount(&self.server)
            .await;

        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "success": false, "error": "Access denied" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with `{"success": false, "error": error}`
    pub async fn mock_failure(&self, http_method: &str, endpoint: &str, error: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "success": false, "error": error })),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with a body that is not JSON, like a proxy error page
    pub async fn mock_non_json(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&self.server)
            .await;
    }

    /// Requests received so far for `http_method path`
    pub async fn requests_to(&self, http_method: &str, endpoint: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == endpoint)
            .collect()
    }

    /// JSON body of the single request sent to `http_method path`
    pub async fn sent_body(&self, http_method: &str, endpoint: &str) -> Value {
        let requests = self.requests_to(http_method, endpoint).await;
        assert_eq!(requests.len(), 1, "expected one {} {}", http_method, endpoint);
        serde_json::from_slice(&requests[0].body).expect("request body is JSON")
    }

    /// Total number of requests the backend received
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.unwrap_or_default().len()
    }
}
