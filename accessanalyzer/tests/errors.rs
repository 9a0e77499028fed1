/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::error::{GetAnalyzerErrorKind, ListFindingsErrorKind};
use accessanalyzer::model::{
    AnalyzerStatus, FindingSourceType, ReasonCode, ResourceType, ValidationExceptionReason,
};
use accessanalyzer::operation::{GetAnalyzer, ListFindings, StartResourceScan};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn response(status: u16, error_type: Option<&str>, body: &'static str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "5f0b3c6a-request");
    if let Some(error_type) = error_type {
        builder = builder.header("x-amzn-errortype", error_type);
    }
    builder.body(Bytes::from_static(body.as_bytes())).unwrap()
}

#[test]
fn throttling_reads_retry_after() {
    let mut raw = response(
        429,
        Some("ThrottlingException:http://internal.amazon.com/coral/com.amazon.coral.service/"),
        r#"{"message":"Rate exceeded"}"#,
    );
    raw.headers_mut()
        .insert("Retry-After", http::HeaderValue::from_static("5"));
    let err = GetAnalyzer::new().parse(&raw).expect_err("429 is an error");
    assert!(err.is_throttling_exception());
    assert!(!err.is_resource_not_found_exception());
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("5f0b3c6a-request"));
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
    match &err.kind {
        GetAnalyzerErrorKind::ThrottlingException(inner) => {
            assert_eq!(inner.retry_after_seconds(), Some(5));
            assert_eq!(inner.message(), Some("Rate exceeded"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert_eq!(err.to_string(), "ThrottlingException: Rate exceeded");
}

#[test]
fn internal_server_error_is_retryable() {
    let raw = response(
        500,
        None,
        r#"{"__type":"InternalServerException","message":"oops"}"#,
    );
    let err = StartResourceScan::new().parse(&raw).unwrap_err();
    assert!(err.is_internal_server_exception());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
}

#[test]
fn validation_exception_members() {
    let raw = response(
        400,
        Some("ValidationException"),
        r#"{
            "message": "1 validation error detected",
            "reason": "fieldValidationFailed",
            "fieldList": [{ "name": "maxResults", "message": "must be at most 100" }]
        }"#,
    );
    let err = ListFindings::new().parse(&raw).unwrap_err();
    assert_eq!(err.retryable_error_kind(), None);
    match err.kind {
        ListFindingsErrorKind::ValidationException(inner) => {
            assert_eq!(
                inner.reason(),
                Some(&ValidationExceptionReason::FieldValidationFailed)
            );
            let fields = inner.field_list().expect("field list");
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name(), Some("maxResults"));
            assert_eq!(fields[0].message(), Some("must be at most 100"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unmodeled_errors_are_unhandled() {
    let raw = response(
        403,
        Some("UnrecognizedClientException"),
        r#"{"message":"The security token included in the request is invalid."}"#,
    );
    let err = GetAnalyzer::new().parse(&raw).unwrap_err();
    assert!(matches!(err.kind, GetAnalyzerErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("UnrecognizedClientException"));
    assert_eq!(
        err.message(),
        Some("The security token included in the request is invalid.")
    );

    let raw = response(502, None, "");
    let err = GetAnalyzer::new().parse(&raw).unwrap_err();
    assert!(matches!(err.kind, GetAnalyzerErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);

    let raw = response(500, None, "<html>gateway</html>");
    let err = GetAnalyzer::new().parse(&raw).unwrap_err();
    assert!(matches!(err.kind, GetAnalyzerErrorKind::Unhandled(_)));
}

#[test]
fn service_errors_convert_to_the_service_error() {
    let raw = response(
        404,
        Some("ResourceNotFoundException"),
        r#"{"message":"Analyzer not found","resourceId":"a","resourceType":"AWS::AccessAnalyzer::Analyzer"}"#,
    );
    let err = GetAnalyzer::new().parse(&raw).unwrap_err();
    let sdk_err = SdkError::ServiceError { raw, err };
    match accessanalyzer::Error::from(sdk_err) {
        accessanalyzer::Error::ResourceNotFoundException(inner) => {
            assert_eq!(inner.resource_id(), Some("a"));
            assert_eq!(inner.resource_type(), Some("AWS::AccessAnalyzer::Analyzer"));
            assert_eq!(inner.to_string(), "ResourceNotFoundException: Analyzer not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let sdk_err: SdkError<accessanalyzer::error::GetAnalyzerError> =
        SdkError::DispatchFailure("connection reset".into());
    let err = accessanalyzer::Error::from(sdk_err);
    assert!(matches!(err, accessanalyzer::Error::Unhandled(_)));
    assert_eq!(err.to_string(), "dispatch failure: connection reset");
}

#[test]
fn get_analyzer_output() {
    let raw = response(
        200,
        None,
        r#"{
            "analyzer": {
                "arn": "arn:aws:access-analyzer:us-east-1:111122223333:analyzer/a",
                "name": "a",
                "type": "ACCOUNT",
                "createdAt": "2020-11-19T22:31:55Z",
                "status": "DISABLED",
                "statusReason": { "code": "ORGANIZATION_DELETED" },
                "tags": { "env": "prod" }
            }
        }"#,
    );
    let output = GetAnalyzer::new().parse(&raw).expect("valid response");
    let analyzer = output.analyzer().expect("analyzer is set");
    assert_eq!(analyzer.name(), Some("a"));
    assert_eq!(analyzer.status(), Some(&AnalyzerStatus::Disabled));
    assert_eq!(
        analyzer.status_reason().and_then(|r| r.code()),
        Some(&ReasonCode::OrganizationDeleted)
    );
    assert_eq!(
        analyzer.created_at().map(|t| t.epoch_seconds()),
        Some(1605825115)
    );
    assert_eq!(
        analyzer.tags().and_then(|t| t.get("env")).map(String::as_str),
        Some("prod")
    );
    assert_eq!(analyzer.last_resource_analyzed_at(), None);
}

#[test]
fn list_findings_output() {
    let raw = response(
        200,
        None,
        r#"{
            "findings": [{
                "id": "f-1",
                "principal": { "AWS": "444455556666" },
                "action": ["s3:GetObject"],
                "resource": "arn:aws:s3:::bucket",
                "isPublic": false,
                "resourceType": "AWS::S3::Bucket",
                "condition": {},
                "createdAt": "2020-11-19T22:31:55.5Z",
                "analyzedAt": "2020-11-19T22:31:55Z",
                "updatedAt": "2020-11-19T22:31:55Z",
                "status": "ACTIVE",
                "resourceOwnerAccount": "111122223333",
                "sources": [{ "type": "S3_ACCESS_POINT", "detail": { "accessPointArn": "arn:aws:s3:us-east-1:111122223333:accesspoint/ap" } }]
            }, {
                "id": "f-2",
                "resourceType": "AWS::EC2::Snapshot",
                "status": "ACTIVE"
            }],
            "nextToken": "page-2"
        }"#,
    );
    let output = ListFindings::new().parse(&raw).expect("valid response");
    assert_eq!(output.next_token(), Some("page-2"));
    let findings = output.findings().expect("findings");
    assert_eq!(findings.len(), 2);
    let first = &findings[0];
    assert_eq!(first.is_public(), Some(false));
    assert_eq!(first.resource_type(), Some(&ResourceType::AwsS3Bucket));
    assert_eq!(first.created_at().map(|t| t.subsecond_nanos()), Some(500_000_000));
    let source = &first.sources().expect("sources")[0];
    assert_eq!(source.r#type(), Some(&FindingSourceType::S3AccessPoint));
    assert_eq!(
        source.detail().and_then(|d| d.access_point_arn()),
        Some("arn:aws:s3:us-east-1:111122223333:accesspoint/ap")
    );
    assert_eq!(
        findings[1].resource_type(),
        Some(&ResourceType::Unknown("AWS::EC2::Snapshot".to_string()))
    );
}
