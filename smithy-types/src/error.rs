/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors for Smithy codegen

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;
use thiserror::Error as ThisError;

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// A string did not name any value of a closed enum.
///
/// Returned by the strict `FromStr` implementations of generated enums. The lenient `From<&str>`
/// conversions never fail and store unrecognized values as `Unknown` instead.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("`{value}` is not a valid {enum_name}")]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.into(),
        }
    }

    /// Name of the enum the lookup was performed against.
    pub fn enum_name(&self) -> &str {
        self.enum_name
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A map entry was added for a key that is already present.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("duplicated keys ({key}) are provided for {member}")]
pub struct DuplicateKeyError {
    member: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub fn new(member: &'static str, key: impl Into<String>) -> Self {
        DuplicateKeyError {
            member,
            key: key.into(),
        }
    }

    /// Name of the map member the entry was added to.
    pub fn member(&self) -> &str {
        self.member
    }

    /// The duplicated key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod test {
    use super::{DuplicateKeyError, Error, UnknownVariantError};

    #[test]
    fn error_display_includes_populated_fields() {
        let err = Error::builder()
            .code("ThrottlingException")
            .message("slow down")
            .request_id("abc-123")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"ThrottlingException\", message: \"slow down\", request_id: \"abc-123\" }"
        );
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.request_id(), Some("abc-123"));
    }

    #[test]
    fn into_builder_preserves_fields() {
        let err = Error::builder().code("Foo").build();
        let err = err.into_builder().message("bar").build();
        assert_eq!(err.code(), Some("Foo"));
        assert_eq!(err.message(), Some("bar"));
    }

    #[test]
    fn lookup_errors_render() {
        assert_eq!(
            UnknownVariantError::new("Type", "bogus").to_string(),
            "`bogus` is not a valid Type"
        );
        assert_eq!(
            DuplicateKeyError::new("tags", "env").to_string(),
            "duplicated keys (env) are provided for tags"
        );
    }
}
