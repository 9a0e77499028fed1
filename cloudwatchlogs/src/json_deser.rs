/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::DeserializeOwned;

/// Deserializes a JSON document, treating an empty body as a structure with no members set.
pub fn deser_structure<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        Ok(T::default())
    } else {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod test {
    use super::deser_structure;

    #[derive(serde::Deserialize, Default, Debug, PartialEq)]
    #[serde(default)]
    struct Shape {
        #[serde(rename = "nextToken")]
        next_token: Option<String>,
    }

    #[test]
    fn empty_body_is_default() {
        assert_eq!(deser_structure::<Shape>(b"").unwrap(), Shape::default());
    }

    #[test]
    fn unknown_members_are_ignored() {
        let shape: Shape = deser_structure(br#"{"nextToken":"abc","other":1}"#).unwrap();
        assert_eq!(shape.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn malformed_body_fails() {
        assert!(deser_structure::<Shape>(b"{").is_err());
    }
}
