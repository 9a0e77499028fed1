/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as HTTP URI labels

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// base set of characters that must be URL encoded
const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    // RFC-3986 §3.3 allows sub-delims in the path component. AWS services expect `:` and `,`
    // to be percent encoded regardless.
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

/// Greedy labels (`{key+}`) keep their `/` separators.
const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn arns_are_escaped() {
        assert_eq!(
            fmt_string("arn:aws:s3:::bucket/key", false),
            "arn%3Aaws%3As3%3A%3A%3Abucket%2Fkey"
        );
    }

    #[test]
    fn greedy_labels_keep_slashes() {
        assert_eq!(fmt_string("a/b c", true), "a/b%20c");
        assert_eq!(fmt_string("a/b c", false), "a%2Fb%20c");
    }

    #[test]
    fn unreserved_are_untouched() {
        assert_eq!(fmt_string("my-analyzer_1.0~", false), "my-analyzer_1.0~");
    }
}
