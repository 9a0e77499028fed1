/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;

/// Everything except the RFC 3986 unreserved characters is encoded.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), QUERY_SET).to_string()
}

/// Appends `key=value` pairs to a URI, starting the query string on first write.
#[derive(Debug)]
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        // Writing to a `String` cannot fail
        let _ = write!(self.out, "{}{}={}", self.prefix, fmt_string(k), fmt_string(v));
        self.prefix = '&';
    }

    /// Lists repeat their key once per item.
    pub fn push_list<T: AsRef<str>>(&mut self, k: &str, values: &[T]) {
        for v in values {
            self.push_kv(k, v.as_ref());
        }
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;+").as_str(), "%26%3D%3B%2B");
    }

    #[test]
    fn writer_starts_and_continues_query() {
        let mut uri = String::from("/analyzer");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("maxResults", "10");
        writer.push_list("type", &["ACCOUNT", "ORGANIZATION"]);
        assert_eq!(uri, "/analyzer?maxResults=10&type=ACCOUNT&type=ORGANIZATION");

        let mut uri = String::from("/tags/x?a=b");
        Writer::new(&mut uri).push_kv("tagKeys", "k 1");
        assert_eq!(uri, "/tags/x?a=b&tagKeys=k%201");
    }
}
