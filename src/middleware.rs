//! Per-request correlation ids.
//!
//! Every request gets a fresh UUID v4. It is visible to handlers as the
//! `RequestId` extension, tags the `request` span so all log lines for one
//! call share it, and is echoed to the caller in the `x-request-id` header.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn header_value(&self) -> HeaderValue {
        // A hyphenated UUID is always visible ASCII
        HeaderValue::from_str(&self.0.hyphenated().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

/// Assign a request id, run the rest of the stack inside its span, then
/// stamp the id on the response. Install as the outermost layer.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let id = RequestId(Uuid::new_v4());
    request.extensions_mut().insert(id);

    let span = tracing::info_span!(
        "request",
        request_id = %id.0,
        method = %request.method(),
        path = %request.uri().path(),
        elapsed_ms = tracing::field::Empty,
    );

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::Span::current().record("elapsed_ms", elapsed_ms);
        tracing::info!(status = response.status().as_u16(), elapsed_ms, "Handled request");

        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, id.header_value());
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(RequestId(id)): Extension<RequestId>| async move { id.to_string() }),
            )
            .layer(middleware::from_fn(request_id_layer))
    }

    fn request(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_header_matches_handler_extension() {
        let response = app().oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(header.as_bytes(), &body[..]);
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[tokio::test]
    async fn test_header_present_on_not_found() {
        let response = app().oneshot(request("/missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_each_request_gets_new_id() {
        let first = app().oneshot(request("/")).await.unwrap();
        let second = app().oneshot(request("/")).await.unwrap();
        assert_ne!(
            first.headers().get(REQUEST_ID_HEADER),
            second.headers().get(REQUEST_ID_HEADER)
        );
    }
}
