//! End-to-end resolution against configuration trees on disk.

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use common::ConfigTree;
use serde::{Deserialize, Serialize};
use stackcfg::prelude::*;
use stackcfg::{DefaultsPlacement, SourceKind, ValueType};

#[test]
fn test_ecs_values_fall_back_to_defaults() {
    let tree = ConfigTree::new()
        .with_file("prod/ks123.yaml", "")
        .with_file("defaults.yaml", "ecs:cpu: \"2\"\necs:memory: \"4096\"\n");

    let ecs = tree.open("ecs", "prod-ks123").unwrap();

    assert_eq!(ecs.get_int("cpu").unwrap(), Some(2));
    assert_eq!(ecs.get_int("memory").unwrap(), Some(4096));
    assert_eq!(ecs.source_of("cpu"), Some(SourceKind::Defaults));
}

#[test]
fn test_require_bool_from_stack_document() {
    let tree = ConfigTree::new().with_file("prod/ks123.yaml", "vpc:is-public-facing: \"false\"\n");

    let vpc = tree.open("vpc", "prod-ks123").unwrap();
    assert!(!vpc.require_bool("is-public-facing").unwrap());

    let empty = ConfigTree::new().with_file("prod/ks123.yaml", "");
    let vpc = empty.open("vpc", "prod-ks123").unwrap();
    match vpc.require_bool("is-public-facing").unwrap_err() {
        ConfigError::MissingKey(key) => assert_eq!(key, "vpc:is-public-facing"),
        other => panic!("Expected MissingKey, got {other:?}"),
    }
}

#[test]
fn test_precedence_stack_then_defaults_then_ambient() {
    let tree = ConfigTree::new()
        .with_file("prod/ks123.yaml", "ec2:instance-type: t3.large\n")
        .with_file(
            "defaults.yaml",
            "ec2:instance-type: t3.micro\nec2:ami-id: ami-0abc\n",
        );
    let context = StaticContext::new("web", "prod-ks123")
        .with_value("ec2:instance-type", "m5.xlarge")
        .with_value("ec2:ami-id", "ami-cli")
        .with_value("ec2:region", "us-east-1");

    let ec2 = tree.open_with("ec2", context).unwrap();

    assert_eq!(ec2.require_string("instance-type").unwrap(), "t3.large");
    assert_eq!(ec2.require_string("ami-id").unwrap(), "ami-0abc");
    assert_eq!(ec2.require_string("region").unwrap(), "us-east-1");
    assert_eq!(ec2.source_of("region"), Some(SourceKind::Ambient));
    assert_eq!(ec2.get_string("zone").unwrap(), None);
}

#[test]
fn test_config_wrapper_in_both_documents() {
    let tree = ConfigTree::new()
        .with_file("prod/ks123.yaml", "config:\n  vpc:vpcids: vpc-1\n")
        .with_file("defaults.yaml", "config:\n  vpc:is-public-facing: 'True'\n");

    let vpc = tree.open("vpc", "prod-ks123").unwrap();

    assert_eq!(vpc.require_string("vpcids").unwrap(), "vpc-1");
    assert!(vpc.require_bool("is-public-facing").unwrap());
}

#[test]
fn test_bool_coercion_failure_reports_key_value_and_type() {
    let tree = ConfigTree::new().with_file("prod/ks123.yaml", "vpc:is-public-facing: 'yes'\n");
    let vpc = tree.open("vpc", "prod-ks123").unwrap();

    match vpc.get_bool("is-public-facing").unwrap_err() {
        ConfigError::TypeCoercion { key, value, target } => {
            assert_eq!(key, "vpc:is-public-facing");
            assert_eq!(value, "yes");
            assert_eq!(target, ValueType::Bool);
        }
        other => panic!("Expected TypeCoercion, got {other:?}"),
    }
}

#[test]
fn test_unquoted_yaml_scalars_coerce() {
    let tree = ConfigTree::new().with_file(
        "prod/ks123.yaml",
        "ecs:cpu: 2\necs:ratio: 0.5\necs:spot: false\n",
    );
    let ecs = tree.open("ecs", "prod-ks123").unwrap();

    assert_eq!(ecs.require_int("cpu").unwrap(), 2);
    assert!((ecs.require_float("ratio").unwrap() - 0.5).abs() < f64::EPSILON);
    assert!(!ecs.require_bool("spot").unwrap());
    assert_eq!(ecs.require_string("cpu").unwrap(), "2");
}

#[test]
fn test_special_yaml_floats_coerce() {
    let tree = ConfigTree::new().with_file(
        "prod/ks123.yaml",
        "ecs:ratio: .inf
ecs:floor: -.inf
ecs:spread: .nan
",
    );
    let ecs = tree.open("ecs", "prod-ks123").unwrap();

    let value = ecs.require_float("ratio").unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());
    let value = ecs.require_float("floor").unwrap();
    assert!(value.is_infinite() && value.is_sign_negative());
    assert!(ecs.require_float("spread").unwrap().is_nan());
    assert_eq!(ecs.require_string("ratio").unwrap(), "inf");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct InstanceTags {
    name: String,
    team: String,
    cost_center: u32,
}

#[test]
fn test_structured_value_round_trip() {
    let tags = InstanceTags {
        name: "web-1".to_string(),
        team: "platform".to_string(),
        cost_center: 42,
    };
    let mut document = BTreeMap::new();
    document.insert("ec2:tags", &tags);
    let yaml = serde_yaml::to_string(&document).unwrap();

    let tree = ConfigTree::new().with_file("prod/ks123.yaml", &yaml);
    let ec2 = tree.open("ec2", "prod-ks123").unwrap();

    let read: InstanceTags = ec2.require_object("tags").unwrap();
    assert_eq!(read, tags);
}

#[test]
fn test_object_from_json_text() {
    let tree = ConfigTree::new()
        .with_file("prod/ks123.yaml", "")
        .with_file(
            "defaults.yaml",
            "vpc:subnet-ids: '[\"subnet-a\", \"subnet-b\"]'\n",
        );
    let vpc = tree.open("vpc", "prod-ks123").unwrap();

    let ids: Vec<String> = vpc.require_object("subnet-ids").unwrap();
    assert_eq!(ids, vec!["subnet-a", "subnet-b"]);
    assert!(matches!(
        vpc.require_object::<Vec<u32>>("subnet-ids").unwrap_err(),
        ConfigError::TypeCoercion { target: ValueType::Object, .. }
    ));
}

#[test]
fn test_malformed_stack_name_fails_construction() {
    let tree = ConfigTree::new().with_file("prod/ks123.yaml", "");

    for stack in ["prod", "prod-ks-123", "prodks123"] {
        let err = tree.open("ec2", stack).err().unwrap();
        assert!(
            matches!(err, ConfigError::MalformedIdentity { .. }),
            "{stack} should be malformed, got {err:?}"
        );
    }
}

#[test]
fn test_missing_root_directory() {
    let tree = ConfigTree::new();
    let mut settings = tree.settings();
    settings.root = tree.root().join("customer_config");

    let err = StackConfig::new(
        Some("ec2"),
        Arc::new(StaticContext::new("web", "prod-ks123")),
        &settings,
    )
    .err()
    .unwrap();
    assert!(matches!(err, ConfigError::MissingRootPath(_)));
    assert!(err.to_string().contains("customer_config"));
}

#[test]
fn test_missing_stack_document_names_expected_path() {
    let tree = ConfigTree::new().with_file("defaults.yaml", "ecs:cpu: 2\n");

    let err = tree.open("ecs", "prod-ks123").err().unwrap();
    match err {
        ConfigError::MissingMandatoryDocument(path) => {
            assert_eq!(path, tree.root().join("prod").join("ks123.yaml"));
        }
        other => panic!("Expected MissingMandatoryDocument, got {other:?}"),
    }
}

#[test]
fn test_unreadable_stack_document_names_path() {
    let tree = ConfigTree::new().with_dir("prod/ks123.yaml");

    let err = tree.open("ecs", "prod-ks123").err().unwrap();
    match &err {
        ConfigError::DocumentRead { path, .. } => {
            assert_eq!(path, &tree.root().join("prod").join("ks123.yaml"));
        }
        other => panic!("Expected DocumentRead, got {other:?}"),
    }
    assert!(err.to_string().contains("ks123.yaml"));
}

#[test]
fn test_parse_error_names_file() {
    let tree = ConfigTree::new().with_file("prod/ks123.yaml", "ec2:tags: {unclosed\n");

    let err = tree.open("ec2", "prod-ks123").err().unwrap();
    assert!(matches!(err, ConfigError::DocumentParse { .. }));
    assert!(err.to_string().contains("ks123.yaml"));
}

#[test]
fn test_stage_scoped_defaults_with_optional_stack_document() {
    let tree = ConfigTree::new()
        .with_file("prod/defaults.yaml", "ecs:cpu: 4\n")
        .with_file("defaults.yaml", "ecs:cpu: 1\n");
    let mut settings = tree.settings();
    settings.layout.defaults = DefaultsPlacement::Stage;
    settings.layout.require_stack_document = false;

    let ecs = StackConfig::new(
        Some("ecs"),
        Arc::new(StaticContext::new("web", "prod-newcustomer")),
        &settings,
    )
    .unwrap();

    assert_eq!(ecs.require_int("cpu").unwrap(), 4);
    assert_eq!(ecs.document_paths(), &[tree.root().join("prod").join("defaults.yaml")]);
}

#[test]
fn test_from_env() {
    let tree = ConfigTree::new()
        .with_file("staging/acme.yaml", "ec2:instance-type: t3.small\n")
        .with_file("defaults.yaml", "web:owner: platform\n");
    let root = tree.root().to_string_lossy().into_owned();

    temp_env::with_vars(
        [
            ("STACKCFG_ROOT", Some(root.as_str())),
            ("PULUMI_PROJECT", Some("web")),
            ("PULUMI_STACK", Some("staging-acme")),
            ("PULUMI_CONFIG", Some(r#"{"ec2:region": "eu-central-1"}"#)),
        ],
        || {
            let ec2 = StackConfig::from_env(Some("ec2")).unwrap();
            assert_eq!(ec2.require_string("instance-type").unwrap(), "t3.small");
            assert_eq!(ec2.require_string("region").unwrap(), "eu-central-1");

            let project = StackConfig::from_env(None).unwrap();
            assert_eq!(project.bag(), "web");
            assert_eq!(project.require_string("owner").unwrap(), "platform");
        },
    );
}
