/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps as they appear in Smithy models.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

pub use format::{DateParseError, DateTimeFormatError};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and subsecond nanoseconds since the Unix epoch.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .expect("SystemTime can never represent a time before the Unix Epoch");
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    /// Parses `s` according to `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self, format: Format) -> Result<DateTime<Utc>, DateTimeFormatError> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
            .ok_or(DateTimeFormatError {
                seconds: self.seconds,
                format,
            })
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats this instant, failing when `format` cannot express it.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        Ok(match format {
            Format::DateTime => {
                let date = self.to_chrono(format)?;
                if self.subsecond_nanos == 0 {
                    date.to_rfc3339_opts(SecondsFormat::Secs, true)
                } else {
                    let rfc3339 = date.to_rfc3339_opts(SecondsFormat::Nanos, true);
                    let mut rfc3339 = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    rfc3339.push('Z');
                    rfc3339
                }
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
            Format::HttpDate => self
                .to_chrono(format)?
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string(),
        })
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Wire formats for [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18Z`
    DateTime,
    /// RFC 7231 IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds since the epoch with an optional fraction, e.g. `1576540098.52`
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        Instant::from_str("not a date", Format::DateTime).expect_err("invalid date");
    }

    #[test]
    fn parse_http_date() {
        let instant = Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate).unwrap();
        assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        Instant::from_str("1576540098.1234567891", Format::EpochSeconds)
            .expect_err("more than nanosecond precision");
        Instant::from_str("12a", Format::EpochSeconds).expect_err("not a number");
    }

    #[test]
    fn date_time_keeps_trailing_zero_in_seconds() {
        let instant = Instant::from_epoch_seconds(1576540080);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:00Z");
    }

    #[test]
    fn unrepresentable_instants_fail_to_format() {
        let far_future = Instant::from_epoch_seconds(i64::MAX);
        let err = far_future
            .fmt(Format::DateTime)
            .expect_err("beyond the range of a calendar date");
        assert_eq!(
            err.to_string(),
            "9223372036854775807 seconds since the epoch cannot be formatted as DateTime"
        );
        far_future
            .fmt(Format::HttpDate)
            .expect_err("beyond the range of a calendar date");
        assert_eq!(
            far_future.fmt(Format::EpochSeconds).unwrap(),
            "9223372036854775807"
        );
    }

    proptest! {
        #[test]
        fn date_time_round_trip(secs in 0i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let parsed = Instant::from_str(&instant.fmt(Format::DateTime).unwrap(), Format::DateTime).unwrap();
            prop_assert_eq!(parsed, instant);
        }

        #[test]
        fn epoch_seconds_round_trip(secs in 0i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let parsed = Instant::from_str(&instant.fmt(Format::EpochSeconds).unwrap(), Format::EpochSeconds).unwrap();
            prop_assert_eq!(parsed, instant);
        }
    }
}
