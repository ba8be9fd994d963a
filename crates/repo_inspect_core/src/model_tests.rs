use super::*;
use crate::test_support::sample_record;

#[test]
fn test_json_round_trip_preserves_every_field() {
    let record = sample_record();

    let json = serde_json::to_string_pretty(&record).expect("serialize");
    let parsed: GovernanceRecord = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(parsed, record);
}

#[test]
fn test_yaml_round_trip_preserves_every_field() {
    let record = sample_record();

    let yaml = serde_yaml::to_string(&record).expect("serialize");
    let parsed: GovernanceRecord = serde_yaml::from_str(&yaml).expect("deserialize");

    assert_eq!(parsed, record);
}

#[test]
fn test_empty_sequences_are_omitted_from_json() {
    let record = GovernanceRecord::new(RepositoryIdentity {
        owner: "octocat".to_string(),
        name: "hello-world".to_string(),
    });

    let value = serde_json::to_value(&record).expect("serialize");
    let object = value.as_object().expect("object");

    for key in [
        "rulesets",
        "required_checks",
        "collaborators",
        "teams",
        "issue_labels",
        "milestones",
    ] {
        assert!(!object.contains_key(key), "{key} should be omitted");
    }
    assert!(object.contains_key("repository"));
    assert!(object.contains_key("security_settings"));
    assert!(object.contains_key("repository_settings"));
}

#[test]
fn test_empty_sequences_are_omitted_from_yaml() {
    let record = GovernanceRecord::new(RepositoryIdentity {
        owner: "octocat".to_string(),
        name: "hello-world".to_string(),
    });

    let yaml = serde_yaml::to_string(&record).expect("serialize");

    assert!(!yaml.contains("rulesets"));
    assert!(!yaml.contains("collaborators"));
    assert!(!yaml.contains("[]"));
    assert!(yaml.contains("owner: octocat"));
}

#[test]
fn test_minimal_document_deserializes_with_defaults() {
    let parsed: GovernanceRecord =
        serde_json::from_str(r#"{ "repository": { "owner": "o", "name": "r" } }"#)
            .expect("deserialize");

    assert_eq!(parsed.repository.owner, "o");
    assert!(parsed.rulesets.is_empty());
    assert_eq!(parsed.security_settings, SecuritySettings::default());
    assert_eq!(parsed.repository_settings, RepositorySettings::default());
}

#[test]
fn test_field_names_match_output_contract() {
    let record = sample_record();
    let value = serde_json::to_value(&record).expect("serialize");

    let collaborator = &value["collaborators"][0];
    assert!(collaborator.get("type").is_some());
    assert!(collaborator.get("account_type").is_none());

    let label_without_description = &value["issue_labels"][1];
    assert!(label_without_description.get("description").is_none());

    let closed_milestone = &value["milestones"][1];
    assert!(closed_milestone.get("due_on").is_none());

    let ruleset_without_checks = &value["rulesets"][1];
    assert!(ruleset_without_checks.get("required_status_checks").is_none());
}

#[test]
fn test_json_field_order_is_stable() {
    let json = serde_json::to_string(&sample_record()).expect("serialize");

    let positions: Vec<usize> = [
        "\"repository\"",
        "\"rulesets\"",
        "\"required_checks\"",
        "\"collaborators\"",
        "\"teams\"",
        "\"security_settings\"",
        "\"repository_settings\"",
        "\"issue_labels\"",
        "\"milestones\"",
    ]
    .iter()
    .map(|key| json.find(key).expect("key present"))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_set_rulesets_derives_unique_required_checks() {
    let mut record = GovernanceRecord::new(RepositoryIdentity {
        owner: "o".to_string(),
        name: "r".to_string(),
    });

    record.set_rulesets(vec![
        Ruleset {
            name: "main".to_string(),
            required_status_checks: vec!["build".to_string(), "test".to_string()],
            ..Default::default()
        },
        Ruleset {
            name: "release".to_string(),
            required_status_checks: vec!["test".to_string(), "lint".to_string()],
            ..Default::default()
        },
    ]);

    assert_eq!(record.rulesets.len(), 2);
    assert_eq!(record.required_checks, vec!["build", "test", "lint"]);
}

#[test]
fn test_milestone_is_closed() {
    let milestone = Milestone {
        title: "v1".to_string(),
        state: "closed".to_string(),
        ..Default::default()
    };
    assert!(milestone.is_closed());

    let open = Milestone {
        state: "open".to_string(),
        ..milestone
    };
    assert!(!open.is_closed());
}
