/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::input::{
    CreateAnalyzerInput, CreateArchiveRuleInput, DeleteAnalyzerInput, GetAnalyzerInput,
    GetFindingInput, ListAnalyzersInput, ListFindingsInput, UntagResourceInput,
    UpdateFindingsInput,
};
use accessanalyzer::model::{
    Criterion, FindingStatusUpdate, InlineArchiveRule, OrderBy, SortCriteria, Type,
};
use accessanalyzer::{Config, Endpoint, Region};
use http::Uri;
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, require_query_params, validate_body,
    validate_headers, validate_query_string, MediaType,
};
use smithy_http::operation::BuildError;

const TOKEN: &str = "00000000-0000-4000-8000-000000000000";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .make_token(TOKEN)
        .build()
}

fn body(request: &http::Request<smithy_http::body::SdkBody>) -> &[u8] {
    request.body().bytes().expect("body is in memory")
}

#[test]
fn create_analyzer_request() {
    let op = CreateAnalyzerInput::builder()
        .analyzer_name("my-analyzer")
        .r#type(Type::Account)
        .archive_rules(
            InlineArchiveRule::builder()
                .rule_name("archive-buckets")
                .filter(
                    "resourceType",
                    Criterion::builder().eq("AWS::S3::Bucket").build(),
                )
                .build(),
        )
        .tags("env", "prod")
        .build()
        .make_operation(&config())
        .expect("valid input");
    assert_eq!(op.metadata().map(|m| m.name()), Some("CreateAnalyzer"));
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "PUT");
    assert_eq!(
        request.uri().to_string(),
        "https://access-analyzer.us-east-1.amazonaws.com/analyzer"
    );
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/json")],
    ));
    assert_ok(validate_body(
        body(request),
        r#"{
            "analyzerName": "my-analyzer",
            "type": "ACCOUNT",
            "archiveRules": [
                { "ruleName": "archive-buckets", "filter": { "resourceType": { "eq": ["AWS::S3::Bucket"] } } }
            ],
            "tags": { "env": "prod" },
            "clientToken": "00000000-0000-4000-8000-000000000000"
        }"#,
        MediaType::Json,
    ));
    assert_eq!(
        request.headers().get("content-length").unwrap(),
        &body(request).len().to_string()
    );
}

#[test]
fn labels_are_percent_encoded_and_not_in_body() {
    let op = CreateArchiveRuleInput::builder()
        .analyzer_name("my analyzer/1")
        .rule_name("rule")
        .filter("status", Criterion::builder().eq("ACTIVE").build())
        .client_token("explicit-token")
        .build()
        .make_operation(&config())
        .expect("valid input");
    let request = op.request().http();
    assert_eq!(
        request.uri().path(),
        "/analyzer/my%20analyzer%2F1/archive-rule"
    );
    assert_ok(validate_body(
        body(request),
        r#"{"ruleName":"rule","filter":{"status":{"eq":["ACTIVE"]}},"clientToken":"explicit-token"}"#,
        MediaType::Json,
    ));
}

#[test]
fn missing_or_empty_labels_fail() {
    let err = GetAnalyzerInput::builder()
        .build()
        .make_operation(&config())
        .expect_err("analyzer name is required");
    assert!(
        matches!(err, BuildError::MissingField { field: "analyzer_name", .. }),
        "{:?}",
        err
    );
    let err = GetAnalyzerInput::builder()
        .analyzer_name("")
        .build()
        .make_operation(&config())
        .expect_err("empty labels are rejected");
    assert!(matches!(err, BuildError::MissingField { .. }));
}

#[test]
fn query_members() {
    let op = GetFindingInput::builder()
        .id("finding-1")
        .analyzer_arn("arn:aws:access-analyzer:us-east-1:111122223333:analyzer/test")
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "GET");
    assert_eq!(request.uri().path(), "/finding/finding-1");
    assert_ok(validate_query_string(
        request,
        &["analyzerArn=arn%3Aaws%3Aaccess-analyzer%3Aus-east-1%3A111122223333%3Aanalyzer%2Ftest"],
    ));
    assert_ok(forbid_headers(request, &["content-type"]));
    assert!(body(request).is_empty());

    let op = ListAnalyzersInput::builder()
        .max_results(10)
        .r#type(Type::Organization)
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_ok(validate_query_string(
        request,
        &["maxResults=10", "type=ORGANIZATION"],
    ));
    assert_ok(forbid_query_params(request, &["nextToken"]));
}

#[test]
fn query_lists_repeat_the_key() {
    let op = UntagResourceInput::builder()
        .resource_arn("arn:aws:access-analyzer:us-east-1:111122223333:analyzer/test")
        .tag_keys("env")
        .tag_keys("team")
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "DELETE");
    assert_eq!(
        request.uri().path(),
        "/tags/arn%3Aaws%3Aaccess-analyzer%3Aus-east-1%3A111122223333%3Aanalyzer%2Ftest"
    );
    assert_eq!(request.uri().query(), Some("tagKeys=env&tagKeys=team"));
}

#[test]
fn idempotency_token_is_generated_when_unset() {
    let config = Config::builder().region(Region::new("eu-west-1")).build();
    let op = DeleteAnalyzerInput::builder()
        .analyzer_name("my-analyzer")
        .build()
        .make_operation(&config)
        .unwrap();
    let request = op.request().http();
    assert_ok(require_query_params(request, &["clientToken"]));
    let token = request
        .uri()
        .query()
        .and_then(|q| q.strip_prefix("clientToken="))
        .expect("token is the only query param");
    assert_eq!(token.len(), 36);
    assert_eq!(&token[14..15], "4");

    let op = DeleteAnalyzerInput::builder()
        .analyzer_name("my-analyzer")
        .client_token("mine")
        .build()
        .make_operation(&config)
        .unwrap();
    assert_eq!(op.request().http().uri().query(), Some("clientToken=mine"));
}

#[test]
fn post_and_put_bodies() {
    let op = ListFindingsInput::builder()
        .analyzer_arn("arn")
        .filter("isPublic", Criterion::builder().eq("true").build())
        .sort(
            SortCriteria::builder()
                .attribute_name("updatedAt")
                .order_by(OrderBy::Desc)
                .build(),
        )
        .max_results(25)
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "POST");
    assert_eq!(request.uri().path(), "/finding");
    assert_ok(validate_body(
        body(request),
        r#"{"analyzerArn":"arn","filter":{"isPublic":{"eq":["true"]}},"sort":{"attributeName":"updatedAt","orderBy":"DESC"},"maxResults":25}"#,
        MediaType::Json,
    ));

    let op = UpdateFindingsInput::builder()
        .analyzer_arn("arn")
        .status(FindingStatusUpdate::Archived)
        .ids("f-1")
        .ids("f-2")
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "PUT");
    assert_ok(validate_body(
        body(request),
        r#"{"analyzerArn":"arn","status":"ARCHIVED","ids":["f-1","f-2"],"clientToken":"00000000-0000-4000-8000-000000000000"}"#,
        MediaType::Json,
    ));
}

#[test]
fn endpoint_resolution() {
    let config = Config::builder()
        .region(Region::new("us-west-2"))
        .endpoint_resolver(Endpoint::new(Uri::from_static("http://localhost:8000")))
        .build();
    let op = GetAnalyzerInput::builder()
        .analyzer_name("a")
        .build()
        .make_operation(&config)
        .unwrap();
    assert_eq!(
        op.request().http().uri().to_string(),
        "http://localhost:8000/analyzer/a"
    );

    let no_region = Config::builder().build();
    let err = GetAnalyzerInput::builder()
        .analyzer_name("a")
        .build()
        .make_operation(&no_region)
        .expect_err("a region is required to resolve the endpoint");
    assert!(matches!(err, BuildError::InvalidRequest(_)), "{:?}", err);
}
