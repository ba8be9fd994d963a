use super::*;
use serde_json::from_str;

#[test]
fn test_milestone_deserialization() {
    let json = r#"{
        "number": 1,
        "state": "open",
        "title": "v1.0",
        "description": "Tracking milestone for version 1.0",
        "open_issues": 4,
        "closed_issues": 8,
        "created_at": "2011-04-10T20:09:31Z",
        "due_on": "2012-10-09T23:39:01Z"
    }"#;

    let milestone: Milestone = from_str(json).expect("Failed to deserialize");

    assert_eq!(milestone.title, "v1.0");
    assert_eq!(milestone.state, "open");
    assert_eq!(
        milestone.description.as_deref(),
        Some("Tracking milestone for version 1.0")
    );
    assert_eq!(milestone.due_date().as_deref(), Some("2012-10-09"));
}

#[test]
fn test_milestone_without_due_date() {
    let milestone: Milestone = from_str(
        r#"{ "title": "Backlog", "state": "closed", "description": null, "due_on": null }"#,
    )
    .expect("Failed to deserialize");

    assert_eq!(milestone.state, "closed");
    assert!(milestone.description.is_none());
    assert!(milestone.due_date().is_none());
}
