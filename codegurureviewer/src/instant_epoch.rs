/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::instant::Format;
use smithy_types::Instant;

pub struct InstantEpoch(pub Instant);

impl Serialize for InstantEpoch {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        if self.0.has_nanos() {
            serializer.serialize_f64(self.0.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.0.epoch_seconds())
        }
    }
}

impl<'de> Deserialize<'de> for InstantEpoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        // Parse the number's text so fractions keep their decimal digits.
        let ts = serde_json::Number::deserialize(deserializer)?.to_string();
        Ok(InstantEpoch(Instant::from_str(&ts, Format::EpochSeconds).map_err(
            |_| D::Error::invalid_value(Unexpected::Str(&ts), &"epoch seconds"),
        )?))
    }
}

pub fn ser_opt<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.map(InstantEpoch).serialize(serializer)
}

pub fn de_opt<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<InstantEpoch>::deserialize(deserializer)?.map(|instant| instant.0))
}

#[cfg(test)]
mod test {
    use super::{de_opt, ser_opt};
    use serde::{Deserialize, Serialize};
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Timestamped {
        #[serde(
            default,
            serialize_with = "ser_opt",
            deserialize_with = "de_opt",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<Instant>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let value = Timestamped {
            at: Some(Instant::from_epoch_seconds(1576540098)),
        };
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"at":1576540098}"#);
    }

    #[test]
    fn fractional_seconds_parse() {
        let parsed: Timestamped = serde_json::from_str(r#"{"at":1576540098.5}"#).unwrap();
        let at = parsed.at.expect("timestamp present");
        assert_eq!(at.epoch_seconds(), 1576540098);
        assert_eq!(at.subsecond_nanos(), 500_000_000);
        let parsed: Timestamped = serde_json::from_str(r#"{"at":1576540098}"#).unwrap();
        assert_eq!(parsed.at, Some(Instant::from_epoch_seconds(1576540098)));
    }

    #[test]
    fn decimal_fractions_are_exact() {
        let parsed: Timestamped = serde_json::from_str(r#"{"at":1576540098.52}"#).unwrap();
        let at = parsed.at.expect("timestamp present");
        assert_eq!(at, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        assert_eq!(at.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"at":1576540098.52}"#);
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert!(serde_json::from_str::<Timestamped>(r#"{"at":"1576540098"}"#).is_err());
    }
}
