/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response-side plumbing shared by every client: read the body, then hand it to the operation's
//! response handler.

use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Load a response using `handler` to parse the results.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed_response, response.map(|_| Bytes::new()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(e) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| Bytes::new()),
                err: e.into(),
            });
        }
    };
    tracing::trace!(body = ?body, "loaded response body");

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response)
}

async fn read_body<B: http_body::Body + Unpin>(body: &mut B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<Bytes>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct StatusHandler;

    impl ParseStrictResponse for StatusHandler {
        type Output = Result<String, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            let body = String::from_utf8_lossy(response.body()).to_string();
            if response.status().is_success() {
                Ok(body)
            } else {
                Err(body)
            }
        }
    }

    #[tokio::test]
    async fn success_keeps_raw_response() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from("{}"))
            .unwrap();
        let success = load_response(response, &StatusHandler).await.unwrap();
        assert_eq!(success.parsed, "{}");
        assert_eq!(success.raw.body().as_ref(), b"{}");
    }

    #[tokio::test]
    async fn failure_is_service_error() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("bad"))
            .unwrap();
        match load_response(response, &StatusHandler).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(err, "bad");
                assert_eq!(raw.status(), 400);
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }
}
