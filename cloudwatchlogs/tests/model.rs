/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudwatchlogs::input::{CreateLogGroupInput, DescribeLogGroupsInput};
use cloudwatchlogs::model::{InputLogEvent, LogGroup, OrderBy};
use cloudwatchlogs::operation::{CreateLogGroup, DeleteLogStream};
use cloudwatchlogs::{Config, Endpoint, Region};
use http::Uri;
use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::str::FromStr;

#[test]
fn empty_input_serializes_to_an_empty_object() {
    let config = Config::builder().region(Region::new("ap-southeast-2")).build();
    let op = DescribeLogGroupsInput::builder()
        .build()
        .make_operation(&config)
        .unwrap();
    let request = op.request().http();
    assert_eq!(
        request.uri().to_string(),
        "https://logs.ap-southeast-2.amazonaws.com/"
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "Logs_20140328.DescribeLogGroups"),
            ("content-length", "2"),
        ],
    ));
    assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
}

#[test]
fn create_log_group_with_tags() {
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .endpoint_resolver(Endpoint::new(Uri::from_static("http://localhost:4566")))
        .build();
    let op = CreateLogGroupInput::builder()
        .log_group_name("/aws/lambda/fn")
        .tags("team", "observability")
        .build()
        .make_operation(&config)
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.uri().to_string(), "http://localhost:4566/");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"logGroupName":"/aws/lambda/fn","tags":{"team":"observability"}}"#,
        MediaType::Json,
    ));
}

#[test]
fn error_codes_from_the_body() {
    let raw = http::Response::builder()
        .status(400)
        .body(bytes::Bytes::from_static(
            br#"{"__type":"com.amazonaws.logs#ResourceAlreadyExistsException","message":"The specified log group already exists"}"#,
        ))
        .unwrap();
    let err = CreateLogGroup::new().parse(&raw).unwrap_err();
    assert!(err.is_resource_already_exists_exception());
    assert_eq!(err.code(), Some("ResourceAlreadyExistsException"));

    let raw = http::Response::builder()
        .status(503)
        .body(bytes::Bytes::from_static(
            br#"{"__type":"ServiceUnavailableException"}"#,
        ))
        .unwrap();
    let err = DeleteLogStream::new().parse(&raw).unwrap_err();
    assert!(err.is_service_unavailable_exception());
    assert_eq!(err.message(), None);
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.to_string(), "ServiceUnavailableException");
}

#[test]
fn log_group_shape() {
    let group: LogGroup = serde_json::from_str(
        r#"{"logGroupName":"g","creationTime":1605825115000,"retentionInDays":14,"metricFilterCount":0,"arn":"arn:aws:logs:us-east-1:111122223333:log-group:g:*","storedBytes":1024}"#,
    )
    .unwrap();
    assert_eq!(group.retention_in_days(), Some(14));
    assert_eq!(group.metric_filter_count(), Some(0));
    assert_eq!(group.kms_key_id(), None);
    let rebuilt = LogGroup::builder()
        .log_group_name("g")
        .creation_time(1605825115000)
        .retention_in_days(14)
        .metric_filter_count(0)
        .arn("arn:aws:logs:us-east-1:111122223333:log-group:g:*")
        .stored_bytes(1024)
        .build();
    assert_eq!(group, rebuilt);
}

#[test]
fn order_by_values() {
    assert_eq!(OrderBy::values(), &["LastEventTime", "LogStreamName"]);
    assert_eq!(OrderBy::from_str("LogStreamName"), Ok(OrderBy::LogStreamName));
    assert!(OrderBy::from_str("logStreamName").is_err());
}

proptest! {
    #[test]
    fn input_log_event_round_trip(timestamp in any::<i64>(), message in ".*") {
        let event = InputLogEvent::builder()
            .timestamp(timestamp)
            .message(message.clone())
            .build();
        prop_assert_eq!(event.timestamp(), Some(timestamp));
        prop_assert_eq!(event.message(), Some(message.as_str()));
        let json = serde_json::to_string(&event).unwrap();
        let parsed: InputLogEvent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, event);
    }
}
