/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::instant::Format;
use smithy_types::Instant;

pub struct InstantIso8601(pub Instant);

impl Serialize for InstantIso8601 {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        let formatted = self
            .0
            .fmt(Format::DateTime)
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for InstantIso8601 {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let ts = String::deserialize(deserializer)?;
        Ok(InstantIso8601(Instant::from_str(&ts, Format::DateTime).map_err(
            |_| D::Error::invalid_value(Unexpected::Str(&ts), &"valid iso8601 date"),
        )?))
    }
}

pub fn ser_opt<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.map(InstantIso8601).serialize(serializer)
}

pub fn de_opt<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<InstantIso8601>::deserialize(deserializer)?.map(|instant| instant.0))
}

#[cfg(test)]
mod test {
    use super::{de_opt, ser_opt};
    use serde::{Deserialize, Serialize};
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
    fn date_time_round_trip() {
        let value = Timestamped {
            at: Some(Instant::from_epoch_seconds(1576540098)),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"at":"2019-12-16T23:48:18Z"}"#);
        assert_eq!(serde_json::from_str::<Timestamped>(&json).unwrap(), value);
    }

    #[test]
    fn missing_and_invalid() {
        assert_eq!(
            serde_json::from_str::<Timestamped>("{}").unwrap(),
            Timestamped { at: None }
        );
        assert!(serde_json::from_str::<Timestamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn unrepresentable_dates_fail_to_serialize() {
        let value = Timestamped {
            at: Some(Instant::from_epoch_seconds(i64::MAX)),
        };
        let err = serde_json::to_string(&value).expect_err("no calendar date for i64::MAX");
        assert!(
            err.to_string().contains("cannot be formatted as DateTime"),
            "{}",
            err
        );
    }
}
