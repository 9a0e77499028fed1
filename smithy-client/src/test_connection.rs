/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! Module with client connectors useful for testing.

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request recorded by [`TestConnection`] alongside the request it was expected to be.
#[derive(Debug)]
pub struct ValidateRequest {
    /// The request the test expected
    pub expected: http::Request<SdkBody>,
    /// The request that was actually dispatched
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the dispatched request matches the expected one.
    ///
    /// Every expected header (except those in `ignore_headers`) must be present with the same
    /// value. Bodies are compared as JSON when the expected request declares a JSON content type.
    pub fn assert_matches(&self, ignore_headers: Vec<HeaderName>) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let actual_str = std::str::from_utf8(actual.body().bytes().unwrap_or(&[]));
        let expected_str = std::str::from_utf8(expected.body().bytes().unwrap_or(&[]));
        let media_type = match expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
        {
            Some(content_type) => MediaType::from(content_type),
            None => MediaType::Other,
        };
        match (actual_str, expected_str) {
            (Ok(actual), Ok(expected)) => assert_ok(validate_body(actual, expected, media_type)),
            _ => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        };
        assert_eq!(actual.uri(), expected.uri(), "URI did not match");
        assert_eq!(actual.method(), expected.method(), "method did not match");
    }
}

/// TestConnection for use with a [`Client`](crate::Client).
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// The connection is cloneable; clones share the same response queue and request log.
/// Usage example:
/// ```rust
/// use smithy_client::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = smithy_client::Client::new(conn.clone());
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    /// Create a connection that answers requests in order with the given responses.
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// Requests dispatched so far, paired with their expected counterparts.
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Assert that every dispatched request matches its expected request.
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers.to_vec())
        }
        let remaining = lock(&self.data).len();
        assert_eq!(remaining, 0, "{} responses were never requested", remaining);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock means another test thread already panicked
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    B: Into<SdkBody>,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use crate::Client;
    use http::header::CONTENT_TYPE;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service, ServiceExt};

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a Client
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = BoxError,
        > + Clone
               + Send
               + 'static {
            TestConnection::<String>::new(vec![])
        }
        let _ = Client::new(check());
    }

    #[tokio::test]
    async fn replays_responses_in_order() {
        let mut conn = TestConnection::new(vec![
            (
                http::Request::builder()
                    .uri("https://logs.us-east-1.amazonaws.com/")
                    .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                    .body(SdkBody::from(r#"{"a": 1, "b": 2}"#))
                    .unwrap(),
                http::Response::builder().status(200).body("first").unwrap(),
            ),
            (
                http::Request::builder()
                    .uri("https://logs.us-east-1.amazonaws.com/")
                    .body(SdkBody::empty())
                    .unwrap(),
                http::Response::builder().status(400).body("second").unwrap(),
            ),
        ]);
        let first = conn
            .ready()
            .await
            .unwrap()
            .call(
                http::Request::builder()
                    .uri("https://logs.us-east-1.amazonaws.com/")
                    .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                    .body(SdkBody::from(r#"{"b":2,"a":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), 200);
        assert_eq!(first.body().bytes(), Some("first".as_bytes()));
        let second = conn
            .call(
                http::Request::builder()
                    .uri("https://logs.us-east-1.amazonaws.com/")
                    .body(SdkBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(second.status(), 400);
        assert!(conn.call(http::Request::new(SdkBody::empty())).await.is_err());

        // the third request had no expectation and is not recorded
        assert_eq!(conn.requests().len(), 2);
        conn.assert_requests_match(&[]);
    }

    #[test]
    #[should_panic]
    fn mismatched_uri_panics() {
        let mut conn = TestConnection::new(vec![(
            http::Request::builder()
                .uri("https://logs.us-east-1.amazonaws.com/")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder().status(200).body("").unwrap(),
        )]);
        let _ = conn.call(
            http::Request::builder()
                .uri("https://logs.us-west-2.amazonaws.com/")
                .body(SdkBody::empty())
                .unwrap(),
        );
        conn.assert_requests_match(&[]);
    }
}
