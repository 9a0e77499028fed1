/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::borrow::Cow;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Operation and service name, used for logging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A serialized request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request { inner: base }
    }

    /// Transform the underlying `http::Request`, propagating any failure.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        Ok(Request {
            inner: f(self.inner)?,
        })
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn into_parts(self) -> http::Request<SdkBody> {
        self.inner
    }
}

/// Failure to turn an input into an HTTP request.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{field} was missing or empty")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("failed to serialize request body: {0}")]
    SerializationError(#[source] BoxError),
    #[error("invalid HTTP request: {0}")]
    InvalidRequest(#[source] BoxError),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::InvalidRequest(err.into())
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};

    #[test]
    fn augment_replaces_request() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let request = request
            .augment(|mut req| {
                req.headers_mut()
                    .insert("x-test", http::HeaderValue::from_static("1"));
                Ok::<_, std::convert::Infallible>(req)
            })
            .unwrap();
        assert_eq!(request.http().headers()["x-test"], "1");
    }

    #[test]
    fn metadata_is_attached() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("PutLogEvents", "logs"));
        let metadata = op.metadata().unwrap();
        assert_eq!(metadata.name(), "PutLogEvents");
        assert_eq!(metadata.service(), "logs");
    }
}
