/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for parsing information from headers

use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse header `{0}`")]
pub struct ParseError(pub &'static str);

/// Read a single header value, failing when it is present but not parseable as `T`
pub fn one_or_none<T>(headers: &http::HeaderMap, key: &'static str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
{
    let value = match headers.get(key) {
        Some(value) => value,
        None => return Ok(None),
    };
    let value = value.to_str().map_err(|_| ParseError(key))?;
    T::from_str(value.trim())
        .map(Some)
        .map_err(|_| ParseError(key))
}

/// `Retry-After` as an integer number of seconds
pub fn retry_after_seconds(headers: &http::HeaderMap) -> Result<Option<i32>, ParseError> {
    one_or_none(headers, "retry-after")
}

pub fn request_id(headers: &http::HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::header::{one_or_none, request_id, retry_after_seconds, ParseError};

    #[test]
    fn parse_retry_after() {
        let response = http::Response::builder()
            .header("Retry-After", "30")
            .header("x-amzn-requestid", "abc-123")
            .body(())
            .unwrap();
        assert_eq!(retry_after_seconds(response.headers()), Ok(Some(30)));
        assert_eq!(request_id(response.headers()), Some("abc-123"));
    }

    #[test]
    fn missing_header_is_none() {
        let headers = http::HeaderMap::new();
        assert_eq!(retry_after_seconds(&headers), Ok(None));
        assert_eq!(request_id(&headers), None);
    }

    #[test]
    fn invalid_header_fails() {
        let response = http::Response::builder()
            .header("Retry-After", "soon")
            .body(())
            .unwrap();
        assert_eq!(
            one_or_none::<i32>(response.headers(), "retry-after"),
            Err(ParseError("retry-after"))
        );
    }
}
