/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, Response};
use serde_json::Value;
use smithy_types::Error as SmithyError;

/// Strips the namespace and any trailing metadata from an error code.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_type_from_header(headers: &HeaderMap) -> Result<Option<&str>, ToStrError> {
    headers
        .get("x-amzn-errortype")
        .map(|v| v.to_str())
        .transpose()
}

fn string_member<'a>(body: &'a Value, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| body.get(name).and_then(Value::as_str))
}

/// Reads code, message and request ID from an error response.
///
/// The code is taken from the `x-amzn-errortype` header when present, otherwise from the `code`
/// or `__type` member of the body.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<SmithyError, serde_json::Error> {
    let body: Value = if response.body().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(response.body())?
    };
    let mut err_builder = SmithyError::builder();
    let code = error_type_from_header(response.headers())
        .unwrap_or(None)
        .or_else(|| string_member(&body, &["code", "__type"]));
    if let Some(code) = code {
        err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = string_member(&body, &["message", "Message", "errorMessage"]) {
        err_builder.message(message);
    }
    if let Some(request_id) = smithy_http::header::request_id(response.headers()) {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::Error;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn header_takes_precedence() {
        let response = http::Response::builder()
            .header("x-amzn-errortype", "ThrottlingException:http://internal.amazon.com/coral/")
            .body(Bytes::from_static(br#"{ "code": "Other" }"#))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap().code(),
            Some("ThrottlingException")
        );
    }

    #[test]
    fn empty_body_has_no_code() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(parse_generic_error(&response).unwrap(), Error::default());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
