/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::model::{FindingStatusUpdate, Type};
use accessanalyzer::{Client, Config, Region};
use http::header::{HeaderName, CONTENT_LENGTH};
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;
use smithy_http::result::SdkError;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .make_token("00000000-0000-4000-8000-000000000000")
        .build()
}

#[tokio::test]
async fn create_analyzer_through_the_client() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("PUT")
            .uri("https://access-analyzer.us-east-1.amazonaws.com/analyzer")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerName":"my-analyzer","type":"ACCOUNT","clientToken":"00000000-0000-4000-8000-000000000000"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"arn":"arn:aws:access-analyzer:us-east-1:111122223333:analyzer/my-analyzer"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .create_analyzer()
        .analyzer_name("my-analyzer")
        .r#type(Type::Account)
        .send()
        .await
        .expect("success");
    assert_eq!(
        output.arn(),
        Some("arn:aws:access-analyzer:us-east-1:111122223333:analyzer/my-analyzer")
    );
    conn.assert_requests_match(&[CONTENT_LENGTH]);
}

#[tokio::test]
async fn modeled_errors_are_service_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("PUT")
            .uri("https://access-analyzer.us-east-1.amazonaws.com/finding")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerArn":"arn","status":"ACTIVE","ids":["f-1"],"clientToken":"00000000-0000-4000-8000-000000000000"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException")
            .body(r#"{"message":"Finding not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .update_findings()
        .analyzer_arn("arn")
        .status(FindingStatusUpdate::Active)
        .ids("f-1")
        .send()
        .await
        .expect_err("404");
    match &err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(raw.status().as_u16(), 404);
            assert!(err.is_resource_not_found_exception());
            assert_eq!(err.message(), Some("Finding not found"));
        }
        other => panic!("expected a service error: {:?}", other),
    }
    conn.assert_requests_match(&[HeaderName::from_static("content-length")]);
    assert!(matches!(
        accessanalyzer::Error::from(err),
        accessanalyzer::Error::ResourceNotFoundException(_)
    ));
}

#[tokio::test]
async fn construction_failures_are_not_dispatched() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client.get_analyzer().send().await.expect_err("missing label");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}
