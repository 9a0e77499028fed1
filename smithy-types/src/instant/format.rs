/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use thiserror::Error;

/// Failure to parse a timestamp in one of the supported [`Format`](super::Format)s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("invalid date `{input}`: {reason}")]
    Invalid { input: String, reason: String },
}

/// An [`Instant`](crate::Instant) that has no representation in the requested
/// [`Format`](super::Format), e.g. a year beyond 9999 as a `DateTime`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{seconds} seconds since the epoch cannot be formatted as {format:?}")]
pub struct DateTimeFormatError {
    pub(super) seconds: i64,
    pub(super) format: super::Format,
}

impl DateParseError {
    fn invalid(input: &str, reason: impl ToString) -> Self {
        DateParseError::Invalid {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub mod date_time {
    use super::DateParseError;
    use crate::Instant;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T23:48:18+01:00"
    pub fn parse(s: &str) -> Result<Instant, DateParseError> {
        let date =
            chrono::DateTime::parse_from_rfc3339(s).map_err(|e| DateParseError::invalid(s, e))?;
        Ok(Instant::from_secs_and_nanos(
            date.timestamp(),
            date.timestamp_subsec_nanos(),
        ))
    }
}

pub mod http_date {
    use super::DateParseError;
    use crate::Instant;

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    pub fn parse(s: &str) -> Result<Instant, DateParseError> {
        let date =
            chrono::DateTime::parse_from_rfc2822(s).map_err(|e| DateParseError::invalid(s, e))?;
        Ok(Instant::from_secs_and_nanos(
            date.timestamp(),
            date.timestamp_subsec_nanos(),
        ))
    }
}

pub mod epoch_seconds {
    use super::DateParseError;
    use crate::Instant;

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Not Ok: "1576540098.1234567891" (more than nanosecond precision)
    pub fn parse(s: &str) -> Result<Instant, DateParseError> {
        if s.starts_with('-') {
            let value: f64 = s.parse().map_err(|e| DateParseError::invalid(s, e))?;
            return Ok(Instant::from_f64(value));
        }
        let mut parts = s.splitn(2, '.');
        let seconds: i64 = parts
            .next()
            .unwrap_or_default()
            .parse()
            .map_err(|e| DateParseError::invalid(s, e))?;
        let nanos = match parts.next() {
            None => 0,
            Some(fraction) if fraction.is_empty() || fraction.len() > 9 => {
                return Err(DateParseError::invalid(s, "unsupported fractional precision"))
            }
            Some(fraction) => {
                let digits: u32 = fraction.parse().map_err(|e| DateParseError::invalid(s, e))?;
                digits * 10_u32.pow(9 - fraction.len() as u32)
            }
        };
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}
