/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::model::{
    AnalyzerStatus, AnalyzerSummary, ArchiveRuleSummary, Criterion, FindingStatus, ReasonCode,
    ResourceType, StatusReason, Type, ValidationExceptionReason,
};
use proptest::prelude::*;
use std::collections::HashMap;
use std::str::FromStr;

#[test]
fn criterion_with_equals_and_exists() {
    let criterion = Criterion::builder().eq("a").eq("b").exists(true).build();
    assert_eq!(
        criterion.eq(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(criterion.exists(), Some(true));
    assert_eq!(criterion.neq(), None);
    assert_eq!(criterion.contains(), None);

    let debug = format!("{:?}", criterion);
    assert!(debug.starts_with("Criterion"), "{}", debug);
    assert!(debug.contains("\"a\""), "{}", debug);
    assert!(debug.contains("\"b\""), "{}", debug);
    assert!(debug.contains("exists: Some(true)"), "{}", debug);
}

#[test]
fn analyzer_summary_with_account_type() {
    let summary = AnalyzerSummary::builder()
        .arn("arn:aws:access-analyzer:us-east-1:111122223333:analyzer/my-analyzer")
        .name("my-analyzer")
        .r#type(Type::Account)
        .status(AnalyzerStatus::Active)
        .build();
    assert_eq!(summary.r#type(), Some(&Type::Account));
    assert_eq!(summary.r#type().map(|t| t.as_str()), Some("ACCOUNT"));
    assert_eq!(summary.name(), Some("my-analyzer"));
    assert_eq!(summary.status_reason(), None);

    let via_string = AnalyzerSummary::builder()
        .arn("arn:aws:access-analyzer:us-east-1:111122223333:analyzer/my-analyzer")
        .name("my-analyzer")
        .r#type("ACCOUNT")
        .status("ACTIVE")
        .build();
    assert_eq!(summary, via_string);
}

#[test]
fn list_setters_append_and_set_replaces() {
    let builder = Criterion::builder().neq("x").neq("y");
    assert_eq!(
        builder.get_neq(),
        &Some(vec!["x".to_string(), "y".to_string()])
    );
    let builder = builder.set_neq(Some(vec!["z".to_string()]));
    assert_eq!(builder.get_neq(), &Some(vec!["z".to_string()]));
    let builder = builder.set_neq(None);
    assert_eq!(builder.get_neq(), &None);
}

#[test]
fn map_setter_overwrites_and_try_add_rejects_duplicates() {
    let active = Criterion::builder().eq("ACTIVE").build();
    let archived = Criterion::builder().eq("ARCHIVED").build();

    let rule = ArchiveRuleSummary::builder()
        .rule_name("archive-public")
        .filter("status", active.clone())
        .filter("status", archived.clone())
        .build();
    let filter = rule.filter().expect("filter is set");
    assert_eq!(filter.len(), 1);
    assert_eq!(filter.get("status"), Some(&archived));

    let mut builder = ArchiveRuleSummary::builder().rule_name("archive-public");
    builder
        .try_add_filter_entry("status", active.clone())
        .expect("first insertion succeeds")
        .try_add_filter_entry("resourceType", archived.clone())
        .expect("distinct key");
    let err = builder
        .try_add_filter_entry("status", archived)
        .expect_err("duplicate key");
    assert_eq!(err.member(), "filter");
    assert_eq!(err.key(), "status");
    assert_eq!(
        err.to_string(),
        "duplicated keys (status) are provided for filter"
    );

    // the rejected entry leaves earlier state in place
    let rule = builder.build();
    assert_eq!(rule.rule_name(), Some("archive-public"));
    let filter = rule.filter().expect("filter is set");
    assert_eq!(filter.len(), 2);
    assert_eq!(filter.get("status"), Some(&active));
}

#[test]
fn collections_are_owned_by_the_shape() {
    let mut tags = HashMap::new();
    tags.insert("env".to_string(), "prod".to_string());
    let summary = AnalyzerSummary::builder().set_tags(Some(tags.clone())).build();
    tags.insert("team".to_string(), "security".to_string());
    assert_eq!(summary.tags().map(|t| t.len()), Some(1));
}

#[test]
fn nested_shapes_compare_deeply() {
    let a = AnalyzerSummary::builder()
        .status_reason(
            StatusReason::builder()
                .code(ReasonCode::OrganizationDeleted)
                .build(),
        )
        .build();
    let b = AnalyzerSummary::builder()
        .status_reason(
            StatusReason::builder()
                .code("ORGANIZATION_DELETED")
                .build(),
        )
        .build();
    let c = AnalyzerSummary::builder()
        .status_reason(
            StatusReason::builder()
                .code(ReasonCode::AwsServiceAccessDisabled)
                .build(),
        )
        .build();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
}

#[test]
fn strict_enum_lookup() {
    assert_eq!(Type::from_str("ORGANIZATION"), Ok(Type::Organization));
    assert_eq!(
        ResourceType::from_str("AWS::S3::Bucket"),
        Ok(ResourceType::AwsS3Bucket)
    );
    assert_eq!(
        ValidationExceptionReason::from_str("fieldValidationFailed"),
        Ok(ValidationExceptionReason::FieldValidationFailed)
    );
    let err = "account".parse::<Type>().expect_err("lookup is case sensitive");
    assert_eq!(err.enum_name(), "Type");
    assert_eq!(err.value(), "account");
    assert_eq!(err.to_string(), "`account` is not a valid Type");
}

#[test]
fn lenient_conversion_keeps_unknown_values() {
    let status = FindingStatus::from("PENDING");
    assert_eq!(status, FindingStatus::Unknown("PENDING".to_string()));
    assert_eq!(status.as_str(), "PENDING");
    assert_eq!(FindingStatus::values(), &["ACTIVE", "ARCHIVED", "RESOLVED"]);
    assert_eq!(ResourceType::AwsLambdaLayerversion.to_string(), "AWS::Lambda::LayerVersion");
}

#[test]
fn shapes_serialize_with_wire_names() {
    let criterion = Criterion::builder().eq("a").exists(false).build();
    assert_eq!(
        serde_json::to_value(&criterion).unwrap(),
        serde_json::json!({ "eq": ["a"], "exists": false })
    );
    let summary: AnalyzerSummary = serde_json::from_str(
        r#"{"name":"a","type":"ORGANIZATION","createdAt":"2020-11-19T22:31:55Z","status":"CREATING"}"#,
    )
    .unwrap();
    assert_eq!(summary.r#type(), Some(&Type::Organization));
    assert_eq!(summary.status(), Some(&AnalyzerStatus::Creating));
    assert_eq!(
        summary.created_at().map(|ts| ts.epoch_seconds()),
        Some(1605825115)
    );
}

fn criterion_strategy() -> impl Strategy<Value = Criterion> {
    (
        proptest::option::of(proptest::collection::vec(".*", 0..4)),
        proptest::option::of(proptest::collection::vec(".*", 0..4)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(eq, contains, exists)| {
            Criterion::builder()
                .set_eq(eq)
                .set_contains(contains)
                .set_exists(exists)
                .build()
        })
}

proptest! {
    #[test]
    fn set_then_get_returns_the_value(
        eq in proptest::option::of(proptest::collection::vec(".*", 0..4)),
        exists in proptest::option::of(any::<bool>()),
    ) {
        let builder = Criterion::builder().set_eq(eq.clone()).set_exists(exists);
        prop_assert_eq!(builder.get_eq(), &eq);
        prop_assert_eq!(builder.get_exists(), &exists);
        let criterion = builder.build();
        prop_assert_eq!(criterion.eq(), eq.as_deref());
        prop_assert_eq!(criterion.exists(), exists);
    }

    #[test]
    fn equality_is_structural(criterion in criterion_strategy()) {
        let rebuilt = Criterion::builder()
            .set_eq(criterion.eq.clone())
            .set_contains(criterion.contains.clone())
            .set_exists(criterion.exists)
            .build();
        prop_assert_eq!(&rebuilt, &criterion);
        let changed = Criterion::builder()
            .set_eq(criterion.eq.clone())
            .set_contains(criterion.contains.clone())
            .set_exists(Some(!criterion.exists.unwrap_or(false)))
            .build();
        prop_assert_ne!(&changed, &criterion);
    }

    #[test]
    fn string_and_enum_paths_agree(value in proptest::sample::select(Type::values())) {
        let typed = Type::from_str(value).unwrap();
        prop_assert_eq!(typed.as_str(), value);
        let from_string = AnalyzerSummary::builder().r#type(value).build();
        let from_enum = AnalyzerSummary::builder().r#type(typed).build();
        prop_assert_eq!(&from_string, &from_enum);
        prop_assert_eq!(
            serde_json::to_value(&from_string).unwrap(),
            serde_json::to_value(&from_enum).unwrap()
        );
    }

    #[test]
    fn unknown_strings_fail_strict_lookup(value in "[a-z]{1,12}") {
        prop_assert!(Type::from_str(&value).is_err());
        prop_assert_eq!(Type::from(value.as_str()), Type::Unknown(value.clone()));
    }
}
