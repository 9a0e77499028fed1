/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A connector-agnostic Smithy service client.
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

#[cfg(feature = "test-util")]
pub mod test_connection;

use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use std::error::Error;
use tower::{Service, ServiceExt};
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;

/// Smithy service client.
///
/// The client owns a single connector: a [`tower::Service`] that turns an
/// [`http::Request<SdkBody>`] into an [`http::Response<SdkBody>`]. Requests handed to the client
/// are expected to be complete (endpoint, headers and body are filled in by the operation's
/// `make_operation`), so dispatching is just "send, load the body, parse".
#[derive(Debug, Clone)]
pub struct Client<Connector> {
    connector: Connector,
}

impl<C> Client<C> {
    /// Create a client that dispatches every request through `connector`.
    pub fn new(connector: C) -> Self {
        Client { connector }
    }

    /// The connector this client dispatches through.
    pub fn connector(&self) -> &C {
        &self.connector
    }
}

impl<C> Client<C>
where
    C: bounds::SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
    {
        let (request, parts) = input.into_request_response();
        let span = match &parts.metadata {
            Some(metadata) => tracing::debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => tracing::debug_span!("send_operation"),
        };
        let mut connector = self.connector.clone();
        let handler = parts.response_handler;
        async move {
            let request = request.into_parts();
            tracing::debug!(method = %request.method(), uri = %request.uri(), "dispatching request");
            tracing::trace!(request = ?request);
            let response = connector
                .ready()
                .await
                .map_err(|e| SdkError::DispatchFailure(e.into()))?
                .call(request)
                .await
                .map_err(|e| SdkError::DispatchFailure(e.into()))?;
            tracing::debug!(status = %response.status(), "response received");
            load_response(response, &handler).await
        }
        .instrument(span)
        .await
    }
}

/// Short-hands for the trait bounds required by `call` and friends.
pub mod bounds {
    use super::*;

    /// A low-level Smithy connector that maps from [`http::Request`] to [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = <Self as SmithyConnector>::Error,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        type Error: Into<BoxError> + Send + Sync + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
    {
        type Error = T::Error;
    }
}

#[cfg(test)]
mod test {
    use crate::{Client, SdkError};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{Metadata, Operation, Request};
    use smithy_http::response::ParseStrictResponse;
    use std::convert::Infallible;

    #[derive(Clone)]
    struct EchoStatus;

    impl ParseStrictResponse for EchoStatus {
        type Output = Result<u16, u16>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            match response.status().as_u16() {
                200 => Ok(200),
                other => Err(other),
            }
        }
    }

    fn operation() -> Operation<EchoStatus> {
        Operation::new(
            Request::new(http::Request::new(SdkBody::from("{}"))),
            EchoStatus,
        )
        .with_metadata(Metadata::new("TestOperation", "test"))
    }

    #[tokio::test]
    async fn dispatches_through_connector() {
        let client = Client::new(tower::service_fn(|_req: http::Request<SdkBody>| async {
            Ok::<_, Infallible>(http::Response::new(SdkBody::empty()))
        }));
        assert_eq!(client.call(operation()).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn service_errors_keep_raw_response() {
        let client = Client::new(tower::service_fn(|_req: http::Request<SdkBody>| async {
            Ok::<_, Infallible>(
                http::Response::builder()
                    .status(404)
                    .body(SdkBody::from("missing"))
                    .unwrap(),
            )
        }));
        match client.call_raw(operation()).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.body().as_ref(), b"missing");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn connector_failures_are_dispatch_failures() {
        let client = Client::new(tower::service_fn(|_req: http::Request<SdkBody>| async {
            Err::<http::Response<SdkBody>, _>("connection refused")
        }));
        match client.call(operation()).await {
            Err(SdkError::DispatchFailure(err)) => {
                assert_eq!(err.to_string(), "connection refused")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
