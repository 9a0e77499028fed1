/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by the generated service crates.

#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod error;
pub mod instant;
pub mod retry;

pub use crate::error::{DuplicateKeyError, Error, UnknownVariantError};
pub use crate::instant::Instant;

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
    }
}
