/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use codegurureviewer::error::DescribeRepositoryAssociationErrorKind;
use codegurureviewer::input::{
    AssociateRepositoryInput, DescribeRepositoryAssociationInput, ListRepositoryAssociationsInput,
};
use codegurureviewer::model::{
    CodeCommitRepository, ProviderType, Repository, RepositoryAssociationState,
    RepositoryAssociationSummary, ThirdPartySourceRepository,
};
use codegurureviewer::operation::{DescribeRepositoryAssociation, DisassociateRepository};
use codegurureviewer::{Client, Config, Region};
use http::header::CONTENT_LENGTH;
use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_query_string, MediaType};
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::str::FromStr;

const ASSOCIATION_ARN: &str =
    "arn:aws:codeguru-reviewer:us-west-2:111122223333:association:a1b2c3d4-5678-90ab-cdef-EXAMPLE11111";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .make_token("00000000-0000-4000-8000-000000000000")
        .build()
}

#[test]
fn associate_repository_uses_pascal_case_members() {
    let op = AssociateRepositoryInput::builder()
        .repository(
            Repository::builder()
                .code_commit(CodeCommitRepository::builder().name("my-repo").build())
                .build(),
        )
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "POST");
    assert_eq!(
        request.uri().to_string(),
        "https://codeguru-reviewer.us-west-2.amazonaws.com/associations"
    );
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{
            "Repository": { "CodeCommit": { "Name": "my-repo" } },
            "ClientRequestToken": "00000000-0000-4000-8000-000000000000"
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn association_arn_is_a_label() {
    let op = DescribeRepositoryAssociationInput::builder()
        .association_arn(ASSOCIATION_ARN)
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method().as_str(), "GET");
    assert_eq!(
        request.uri().path(),
        "/associations/arn%3Aaws%3Acodeguru-reviewer%3Aus-west-2%3A111122223333%3Aassociation%3Aa1b2c3d4-5678-90ab-cdef-EXAMPLE11111"
    );
}

#[test]
fn list_filters_repeat_query_keys() {
    let op = ListRepositoryAssociationsInput::builder()
        .provider_types(ProviderType::CodeCommit)
        .provider_types("GitHub")
        .states(RepositoryAssociationState::Associated)
        .owners("octocat")
        .max_results(5)
        .build()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.uri().path(), "/associations");
    assert_ok(validate_query_string(
        request,
        &[
            "ProviderType=CodeCommit",
            "ProviderType=GitHub",
            "State=Associated",
            "Owner=octocat",
            "MaxResults=5",
        ],
    ));
    assert!(request.body().bytes().unwrap().is_empty());
}

#[test]
fn epoch_second_timestamps() {
    let raw = http::Response::builder()
        .status(200)
        .body(Bytes::from_static(
            br#"{
                "RepositoryAssociation": {
                    "AssociationId": "a1b2c3d4-5678-90ab-cdef-EXAMPLE11111",
                    "AssociationArn": "arn:aws:codeguru-reviewer:us-west-2:111122223333:association:a1b2c3d4-5678-90ab-cdef-EXAMPLE11111",
                    "Name": "my-repo",
                    "Owner": "111122223333",
                    "ProviderType": "CodeCommit",
                    "State": "Associated",
                    "StateReason": "Pull Request Notification configuration successful",
                    "LastUpdatedTimeStamp": 1585293312.5,
                    "CreatedTimeStamp": 1585293312
                }
            }"#,
        ))
        .unwrap();
    let output = DescribeRepositoryAssociation::new()
        .parse(&raw)
        .expect("valid response");
    let association = output.repository_association().expect("association");
    assert_eq!(association.provider_type(), Some(&ProviderType::CodeCommit));
    assert_eq!(
        association.state(),
        Some(&RepositoryAssociationState::Associated)
    );
    let created = association.created_time_stamp().expect("created");
    assert_eq!(created.epoch_seconds(), 1585293312);
    assert_eq!(created.subsecond_nanos(), 0);
    let updated = association.last_updated_time_stamp().expect("updated");
    assert_eq!(updated.epoch_seconds(), 1585293312);
    assert_eq!(updated.subsecond_nanos(), 500_000_000);
}

#[test]
fn not_found_exception() {
    let raw = http::Response::builder()
        .status(404)
        .header("x-amzn-errortype", "NotFoundException")
        .header("x-amzn-requestid", "req-42")
        .body(Bytes::from_static(
            br#"{"Message":"Association not found"}"#,
        ))
        .unwrap();
    let err = DescribeRepositoryAssociation::new()
        .parse(&raw)
        .unwrap_err();
    assert!(err.is_not_found_exception());
    assert_eq!(err.message(), Some("Association not found"));
    assert_eq!(err.request_id(), Some("req-42"));
    match &err.kind {
        DescribeRepositoryAssociationErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.to_string(), "NotFoundException: Association not found")
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    let raw = http::Response::builder()
        .status(409)
        .body(Bytes::from_static(
            br#"{"__type":"ConflictException","Message":"Association is in progress"}"#,
        ))
        .unwrap();
    let err = DisassociateRepository::new().parse(&raw).unwrap_err();
    assert!(err.is_conflict_exception());
    assert_eq!(err.retryable_error_kind(), None);

    let raw = http::Response::builder()
        .status(429)
        .header("x-amzn-errortype", "ThrottlingException")
        .body(Bytes::from_static(br#"{"Message":"Slow down"}"#))
        .unwrap();
    let err = DisassociateRepository::new().parse(&raw).unwrap_err();
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
}

#[tokio::test]
async fn list_through_the_client() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://codeguru-reviewer.us-west-2.amazonaws.com/associations?State=Failed&NextToken=abc")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{
                    "RepositoryAssociationSummaries": [
                        { "Name": "repo-1", "ProviderType": "Bitbucket", "State": "Failed", "LastUpdatedTimeStamp": 1585293312 }
                    ]
                }"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .list_repository_associations()
        .states(RepositoryAssociationState::Failed)
        .next_token("abc")
        .send()
        .await
        .expect("success");
    let summaries = output.repository_association_summaries().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].provider_type(), Some(&ProviderType::Bitbucket));
    assert_eq!(output.next_token(), None);
    conn.assert_requests_match(&[CONTENT_LENGTH]);
}

#[test]
fn third_party_repositories() {
    let repository = Repository::builder()
        .bitbucket(
            ThirdPartySourceRepository::builder()
                .name("repo")
                .owner("team")
                .connection_arn("arn:aws:codestar-connections:us-west-2:111122223333:connection/c")
                .build(),
        )
        .build();
    assert_eq!(repository.code_commit(), None);
    assert_eq!(repository.bitbucket().and_then(|b| b.owner()), Some("team"));
    let debug = format!("{:?}", repository);
    assert!(debug.contains("bitbucket: Some(ThirdPartySourceRepository"), "{}", debug);
}

proptest! {
    #[test]
    fn provider_type_paths_agree(value in proptest::sample::select(ProviderType::values())) {
        let typed = ProviderType::from_str(value).unwrap();
        let from_string = RepositoryAssociationSummary::builder().provider_type(value).build();
        let from_enum = RepositoryAssociationSummary::builder().provider_type(typed).build();
        prop_assert_eq!(from_string, from_enum);
    }

    #[test]
    fn summary_set_get(name in proptest::option::of(".*"), owner in proptest::option::of(".*")) {
        let builder = RepositoryAssociationSummary::builder()
            .set_name(name.clone())
            .set_owner(owner.clone());
        prop_assert_eq!(builder.get_name(), &name);
        prop_assert_eq!(builder.get_owner(), &owner);
        let summary = builder.build();
        prop_assert_eq!(summary.name(), name.as_deref());
        prop_assert_eq!(summary.owner(), owner.as_deref());
    }

    #[test]
    fn lowercase_provider_types_are_rejected(value in "[a-z]{1,10}") {
        prop_assert!(ProviderType::from_str(&value).is_err());
    }
}
