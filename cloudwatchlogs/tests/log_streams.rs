/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudwatchlogs::model::{InputLogEvent, OrderBy};
use cloudwatchlogs::{Client, Config, Region};
use http::header::CONTENT_LENGTH;
use http::Uri;
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;
use smithy_http::result::SdkError;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn expected_request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://logs.us-east-1.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .body(SdkBody::from(body))
        .unwrap()
}

#[tokio::test]
async fn create_log_stream() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "Logs_20140328.CreateLogStream",
            r#"{"logGroupName":"test-group","logStreamName":"test-stream"}"#,
        ),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    client
        .create_log_stream()
        .log_group_name("test-group")
        .log_stream_name("test-stream")
        .send()
        .await
        .expect("log stream created");
    conn.assert_requests_match(&[CONTENT_LENGTH]);
}

#[tokio::test]
async fn put_log_events_then_read_them_back() {
    let conn = TestConnection::new(vec![
        (
            expected_request(
                "Logs_20140328.PutLogEvents",
                r#"{
                    "logGroupName": "test-group",
                    "logStreamName": "test-stream",
                    "logEvents": [
                        { "timestamp": 1605825115000, "message": "hello" },
                        { "timestamp": 1605825116000, "message": "world" }
                    ]
                }"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"nextSequenceToken":"49590302811","rejectedLogEventsInfo":{"tooOldLogEventEndIndex":0}}"#)
                .unwrap(),
        ),
        (
            expected_request(
                "Logs_20140328.GetLogEvents",
                r#"{"logGroupName":"test-group","logStreamName":"test-stream","startFromHead":true}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(
                    r#"{
                        "events": [
                            { "timestamp": 1605825116000, "message": "world", "ingestionTime": 1605825116123 }
                        ],
                        "nextForwardToken": "f/1",
                        "nextBackwardToken": "b/1"
                    }"#,
                )
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let put = client
        .put_log_events()
        .log_group_name("test-group")
        .log_stream_name("test-stream")
        .log_events(
            InputLogEvent::builder()
                .timestamp(1605825115000)
                .message("hello")
                .build(),
        )
        .log_events(
            InputLogEvent::builder()
                .timestamp(1605825116000)
                .message("world")
                .build(),
        )
        .send()
        .await
        .expect("events accepted");
    assert_eq!(put.next_sequence_token(), Some("49590302811"));
    let rejected = put.rejected_log_events_info().expect("rejection info");
    assert_eq!(rejected.too_old_log_event_end_index(), Some(0));
    assert_eq!(rejected.too_new_log_event_start_index(), None);

    let events = client
        .get_log_events()
        .log_group_name("test-group")
        .log_stream_name("test-stream")
        .start_from_head(true)
        .send()
        .await
        .expect("events read");
    let event = &events.events().expect("events")[0];
    assert_eq!(event.message(), Some("world"));
    assert_eq!(event.ingestion_time(), Some(1605825116123));
    assert_eq!(events.next_forward_token(), Some("f/1"));
    conn.assert_requests_match(&[CONTENT_LENGTH]);
}

#[tokio::test]
async fn invalid_sequence_token() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "Logs_20140328.PutLogEvents",
            r#"{"logGroupName":"g","logStreamName":"s","logEvents":[{"timestamp":1,"message":"m"}],"sequenceToken":"stale"}"#,
        ),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "7d4b2b2a")
            .body(r#"{"__type":"InvalidSequenceTokenException","expectedSequenceToken":"49590302812","message":"The given sequenceToken is invalid."}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .put_log_events()
        .log_group_name("g")
        .log_stream_name("s")
        .log_events(InputLogEvent::builder().timestamp(1).message("m").build())
        .sequence_token("stale")
        .send()
        .await
        .expect_err("stale token");
    conn.assert_requests_match(&[CONTENT_LENGTH]);
    assert_eq!(err.raw_response().map(|raw| raw.status().as_u16()), Some(400));
    assert!(err
        .service_error()
        .map(|err| err.is_invalid_sequence_token_exception())
        .unwrap_or(false));
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error: {:?}", other),
    };
    assert!(err.is_invalid_sequence_token_exception());
    assert_eq!(err.request_id(), Some("7d4b2b2a"));
    match cloudwatchlogs::Error::from(SdkError::ServiceError {
        raw: http::Response::new(bytes::Bytes::new()),
        err,
    }) {
        cloudwatchlogs::Error::InvalidSequenceTokenException(inner) => {
            assert_eq!(inner.expected_sequence_token(), Some("49590302812"));
            assert_eq!(
                inner.to_string(),
                "InvalidSequenceTokenException: The given sequenceToken is invalid."
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn describe_log_streams() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "Logs_20140328.DescribeLogStreams",
            r#"{"logGroupName":"g","orderBy":"LastEventTime","descending":true,"limit":1}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(r#"{"logStreams":[{"logStreamName":"s","creationTime":1605825115000,"storedBytes":0,"uploadSequenceToken":"4959"}],"nextToken":"n"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .describe_log_streams()
        .log_group_name("g")
        .order_by(OrderBy::LastEventTime)
        .descending(true)
        .limit(1)
        .send()
        .await
        .unwrap();
    let stream = &output.log_streams().unwrap()[0];
    assert_eq!(stream.log_stream_name(), Some("s"));
    assert_eq!(stream.creation_time(), Some(1605825115000));
    assert_eq!(stream.stored_bytes(), Some(0));
    assert_eq!(stream.upload_sequence_token(), Some("4959"));
    assert_eq!(output.next_token(), Some("n"));
    conn.assert_requests_match(&[CONTENT_LENGTH]);
}

#[tokio::test]
async fn missing_region_fails_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(Config::builder().build(), conn.clone());
    let err = client
        .delete_log_group()
        .log_group_name("g")
        .send()
        .await
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}
