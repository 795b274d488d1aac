// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pass-through forwarding of `/api/*` requests to the booking backend.
//!
//! # Contract
//!
//! - Every response carries permissive CORS headers
//! - `OPTIONS` requests are answered locally with a bare `200`
//! - The `/api` prefix is stripped and the rest of the path and query is
//!   appended to the upstream origin
//! - `Authorization` is copied verbatim
//! - Form bodies keep their content type and are sent byte-for-byte;
//!   everything else is sent as `application/json`
//! - The upstream status is mirrored, with a JSON body when the upstream
//!   declared JSON and a JSON string of the raw text otherwise
//! - Transport failures become a `500` with a generic error payload

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
        },
    },
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::AppState;

/// Content types forwarded without re-serialization.
const FORM_CONTENT_TYPES: [&str; 2] = ["multipart/form-data", "application/x-www-form-urlencoded"];

/// Errors raised while talking to the upstream backend.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client bound to a single upstream origin.
pub struct Forwarder {
    client: reqwest::Client,
    upstream: String,
}

impl Forwarder {
    /// Creates a forwarder for `upstream` (e.g. `https://backend.example.com`).
    ///
    /// A trailing `/` on the origin is ignored.
    #[must_use]
    pub fn new(upstream: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the upstream origin.
    #[must_use]
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// Builds the upstream URL for an incoming `/api/...` URI.
    #[must_use]
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query: &str = uri
            .path_and_query()
            .map_or_else(|| uri.path(), |pq| pq.as_str());
        let rest: &str = path_and_query
            .strip_prefix("/api")
            .unwrap_or(path_and_query);
        format!("{}{rest}", self.upstream)
    }

    /// Sends the request upstream and mirrors the response.
    ///
    /// # Errors
    ///
    /// Returns `ForwardError::Request` if the upstream cannot be reached or
    /// its declared JSON body cannot be decoded.
    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ForwardError> {
        let url: String = self.target_url(uri);
        info!(method = %method, url = %url, "Forwarding request upstream");

        let incoming_type: Option<&HeaderValue> = headers.get(CONTENT_TYPE);
        let form_type: Option<&HeaderValue> = incoming_type.filter(|value| {
            value
                .to_str()
                .is_ok_and(|t| FORM_CONTENT_TYPES.iter().any(|form| t.contains(form)))
        });

        let mut builder: reqwest::RequestBuilder = self.client.request(method.clone(), &url);
        builder = match form_type {
            Some(value) => builder.header(CONTENT_TYPE, value.clone()),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };
        if let Some(authorization) = headers.get(AUTHORIZATION) {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }

        if method != Method::GET && method != Method::HEAD {
            if form_type.is_some() {
                builder = builder.body(body);
            } else if let Some(json) = reserialize_json(&body) {
                builder = builder.body(json);
            }
        }

        let upstream: reqwest::Response = builder.send().await?;
        let status: StatusCode = upstream.status();
        let upstream_json: bool = upstream
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|t| t.contains("application/json"));

        let payload: Value = if upstream_json {
            upstream.json::<Value>().await?
        } else {
            Value::String(upstream.text().await?)
        };

        debug!(status = status.as_u16(), json = upstream_json, "Upstream responded");

        Ok((status, Json(payload)).into_response())
    }
}

/// Re-serializes a JSON request body.
///
/// An empty body sends nothing. A body that is not JSON is sent as a JSON
/// string of its text.
fn reserialize_json(body: &Bytes) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let value: Value = serde_json::from_slice::<Value>(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));
    Some(value.to_string())
}

/// Sets the permissive CORS headers every forwarded response carries.
fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

/// Handler for any method on `/api` and `/api/{*path}`.
pub async fn handle_forward(
    AxumState(app_state): AxumState<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut response: Response = if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        match app_state
            .forwarder
            .forward(method, &uri, &headers, body)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, uri = %uri, "Forwarding failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "Internal server error",
                        "details": err.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    };

    apply_cors(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{get, post},
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Starts a local stand-in for the booking backend and returns its origin.
    async fn spawn_upstream() -> String {
        let app: Router = Router::new()
            .route(
                "/bookings/me",
                get(|headers: HeaderMap| async move {
                    let auth: String = headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({ "authorization": auth }))
                }),
            )
            .route(
                "/echo",
                post(|uri: Uri, headers: HeaderMap, body: Bytes| async move {
                    let content_type: String = headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({
                        "query": uri.query().unwrap_or_default(),
                        "content_type": content_type,
                        "body": String::from_utf8_lossy(&body),
                    }))
                }),
            )
            .route(
                "/text",
                get(|| async { (StatusCode::IM_A_TEAPOT, "plain words") }),
            )
            .route(
                "/missing",
                get(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "detail": "Booking not found" })),
                    )
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn app_for(upstream: &str) -> Router {
        build_router(AppState {
            forwarder: Arc::new(Forwarder::new(upstream)),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_target_url_strips_api_prefix() {
        let forwarder = Forwarder::new("https://backend.example.com/");
        let uri: Uri = "/api/admin/bookings?limit=5".parse().unwrap();
        assert_eq!(
            forwarder.target_url(&uri),
            "https://backend.example.com/admin/bookings?limit=5"
        );

        let bare: Uri = "/api".parse().unwrap();
        assert_eq!(forwarder.target_url(&bare), "https://backend.example.com");
    }

    #[test]
    fn test_reserialize_json() {
        assert_eq!(reserialize_json(&Bytes::new()), None);
        assert_eq!(
            reserialize_json(&Bytes::from_static(b"{ \"a\" : 1 }")),
            Some(String::from("{\"a\":1}"))
        );
        assert_eq!(
            reserialize_json(&Bytes::from_static(b"hello")),
            Some(String::from("\"hello\""))
        );
    }

    #[tokio::test]
    async fn test_options_short_circuits_with_cors() {
        // Unroutable upstream: the request must never leave the server.
        let app: Router = app_for("http://127.0.0.1:1");

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_authorization_is_forwarded() {
        let upstream: String = spawn_upstream().await;
        let app: Router = app_for(&upstream);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/bookings/me")
                    .header("authorization", "Bearer abc.def")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "authorization": "Bearer abc.def" })
        );
    }

    #[tokio::test]
    async fn test_json_body_is_reserialized() {
        let upstream: String = spawn_upstream().await;
        let app: Router = app_for(&upstream);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/echo?source=dashboard")
                    .header("content-type", "text/plain")
                    .body(Body::from("{ \"room_id\" : 3 }"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = body_json(response).await;
        assert_eq!(value["query"], "source=dashboard");
        assert_eq!(value["content_type"], "application/json");
        assert_eq!(value["body"], "{\"room_id\":3}");
    }

    #[tokio::test]
    async fn test_form_body_passes_through() {
        let upstream: String = spawn_upstream().await;
        let app: Router = app_for(&upstream);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/echo")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("username=a%40b.com&password=secret"))
                    .unwrap(),
            )
            .await
            .unwrap();

        let value: Value = body_json(response).await;
        assert_eq!(value["content_type"], "application/x-www-form-urlencoded");
        assert_eq!(value["body"], "username=a%40b.com&password=secret");
    }

    #[tokio::test]
    async fn test_text_response_becomes_json_string() {
        let upstream: String = spawn_upstream().await;
        let app: Router = app_for(&upstream);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/text")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(body_json(response).await, json!("plain words"));
    }

    #[tokio::test]
    async fn test_upstream_status_is_mirrored() {
        let upstream: String = spawn_upstream().await;
        let app: Router = app_for(&upstream);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Booking not found" })
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_500() {
        let app: Router = app_for("http://127.0.0.1:1");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/admin/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        let value: Value = body_json(response).await;
        assert_eq!(value["error"], "Internal server error");
        assert!(value["details"].is_string());
    }
}
