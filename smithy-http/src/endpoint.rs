/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, Uri};
use std::borrow::Cow;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum InvalidEndpoint {
    #[error("endpoint must contain a scheme and an authority: `{0}`")]
    EndpointMustHaveAuthority(Uri),
    #[error("could not apply endpoint: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("could not apply endpoint: {0}")]
    InvalidParts(#[from] http::Error),
}

/// API Endpoint
///
/// The scheme, authority and base path that requests are sent to. Operations build their
/// request URI relative to `/`; [`Endpoint::set_endpoint`] rewrites it against the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::new(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, keeping the request's path and query.
    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .map(|auth| auth.as_str())
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveAuthority(self.uri.clone()))?;
        let authority = Authority::from_str(authority)?;
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveAuthority(self.uri.clone()))?;
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
        if endpoint_path.is_empty() {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn set_endpoint_keeps_path_and_query() {
        let ep = Endpoint::new(Uri::from_static("https://access-analyzer.us-east-1.amazonaws.com"));
        let mut uri = Uri::from_static("/analyzer?maxResults=5");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://access-analyzer.us-east-1.amazonaws.com/analyzer?maxResults=5")
        );
    }

    #[test]
    fn endpoint_with_port() {
        let ep = Endpoint::new(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn endpoint_with_path() {
        for uri in &[
            // check that trailing slashes are properly normalized
            "https://us-east-1.logs.amazonaws.com/private",
            "https://us-east-1.logs.amazonaws.com/private/",
        ] {
            let ep = Endpoint::new(Uri::from_static(uri));
            let mut uri = Uri::from_static("/associations?k=v");
            ep.set_endpoint(&mut uri).expect("valid endpoint");
            assert_eq!(
                uri,
                Uri::from_static("https://us-east-1.logs.amazonaws.com/private/associations?k=v")
            );
        }
    }

    #[test]
    fn endpoint_without_authority_fails() {
        let ep = Endpoint::new(Uri::from_static("/relative"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri)
            .expect_err("an endpoint needs a host");
    }
}
