/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests.
/// For handling responses, the type of the body will be controlled
/// by the HTTP stack.
///
/// Every body produced by the generated crates is fully buffered, which keeps requests
/// cloneable for replay in tests.
#[derive(Clone)]
pub struct SdkBody {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Once(Some(bytes)) => f.debug_tuple("SdkBody").field(bytes).finish(),
            Inner::Once(None) => f.write_str("SdkBody(empty)"),
            Inner::Taken => f.write_str("SdkBody(taken)"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody {
            inner: Inner::Once(None),
        }
    }

    /// The complete contents of the body, if it has not already been consumed.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(bytes)) => Some(bytes),
            Inner::Once(None) => Some(&[]),
            Inner::Taken => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|b| b.len() as u64)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match std::mem::replace(&mut self.inner, Inner::Taken) {
            Inner::Once(Some(bytes)) => Poll::Ready(Some(Ok(bytes))),
            Inner::Once(None) | Inner::Taken => Poll::Ready(None),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        SdkBody::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        !matches!(self.inner, Inner::Once(Some(_)))
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn body_is_consumed_once() {
        let mut body = SdkBody::from("hello world!");
        assert_eq!(body.bytes(), Some("hello world!".as_bytes()));
        let data = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(data.as_ref(), b"hello world!");
        assert!(body.data().await.is_none());
        assert_eq!(body.bytes(), None);
    }

    #[test]
    fn empty_body_has_no_bytes() {
        let body = SdkBody::empty();
        assert_eq!(body.bytes(), Some(&[][..]));
        assert!(body.is_end_stream());
        assert_eq!(body.content_length(), Some(0));
    }
}
