/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::operation::Request;
use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint resolved for a region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint) -> Self {
        AwsEndpoint { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the endpoint a service should be called at for a given region
///
/// Any [`Endpoint`] is itself a resolver that always returns that endpoint, which is how
/// endpoint overrides (local test servers, proxies) are configured.
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::new(self.clone()))
    }
}

/// The standard `https://{service}.{region}.amazonaws.com` endpoint pattern
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        DefaultAwsEndpointResolver { service }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = format!("https://{}.{}.amazonaws.com", self.service, region.as_ref());
        Ok(AwsEndpoint::new(Endpoint::new(uri.parse()?)))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

#[derive(Debug, thiserror::Error)]
pub enum AwsEndpointStageError {
    #[error("no region was configured")]
    NoRegion,
    #[error("failed to resolve endpoint: {0}")]
    EndpointResolutionError(#[source] BoxError),
    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),
}

/// Resolve an endpoint for `region` and apply it to the URI of `request`.
pub fn set_endpoint(
    request: Request,
    resolver: &dyn ResolveAwsEndpoint,
    region: Option<&Region>,
) -> Result<Request, AwsEndpointStageError> {
    request.augment(|mut http_req| {
        let region = region.ok_or(AwsEndpointStageError::NoRegion)?;
        let endpoint = resolver
            .endpoint(region)
            .map_err(AwsEndpointStageError::EndpointResolutionError)?;
        tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
        endpoint.set_endpoint(http_req.uri_mut())?;
        Ok(http_req)
    })
}

#[cfg(test)]
mod test {
    use crate::{
        set_endpoint, AwsEndpointStageError, DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::operation;

    fn request() -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri("/analyzer")
                .body(SdkBody::empty())
                .unwrap(),
        )
    }

    #[test]
    fn default_endpoint_updates_request() {
        let resolver = DefaultAwsEndpointResolver::for_service("access-analyzer");
        let region = Region::new("us-east-1");
        let req = set_endpoint(request(), &resolver, Some(&region)).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://access-analyzer.us-east-1.amazonaws.com/analyzer")
        );
    }

    #[test]
    fn static_endpoint_overrides_region() {
        let resolver = Endpoint::new(Uri::from_static("http://localhost:4566"));
        let endpoint = resolver
            .endpoint(&Region::from_static("eu-west-1"))
            .expect("static endpoints always resolve");
        assert_eq!(endpoint.endpoint().uri(), &Uri::from_static("http://localhost:4566"));
        let req = set_endpoint(request(), &resolver, Some(&Region::new("eu-west-1"))).unwrap();
        assert_eq!(req.http().uri(), &Uri::from_static("http://localhost:4566/analyzer"));
    }

    #[test]
    fn missing_region_fails() {
        let resolver = DefaultAwsEndpointResolver::for_service("logs");
        match set_endpoint(request(), &resolver, None) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected NoRegion, got {:?}", other),
        }
    }
}
