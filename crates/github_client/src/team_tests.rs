use super::*;
use serde_json::from_str;

#[test]
fn test_team_deserialization() {
    let json = r#"[
        {
            "id": 1,
            "node_id": "MDQ6VGVhbTE=",
            "name": "Justice League",
            "slug": "justice-league",
            "description": "A great team.",
            "privacy": "closed",
            "permission": "admin"
        },
        { "id": 2, "name": "Readers", "slug": "readers", "permission": "pull" }
    ]"#;

    let teams: Vec<Team> = from_str(json).expect("Failed to deserialize");

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Justice League");
    assert_eq!(teams[0].slug, "justice-league");
    assert_eq!(teams[0].permission_level(), "admin");
    assert_eq!(teams[1].permission_level(), "read");
}

#[test]
fn test_team_permission_level_mapping() {
    let team = |permission: &str| Team {
        name: "Team".to_string(),
        slug: "team".to_string(),
        permission: permission.to_string(),
    };

    assert_eq!(team("push").permission_level(), "write");
    assert_eq!(team("pull").permission_level(), "read");
    assert_eq!(team("triage").permission_level(), "triage");
    assert_eq!(team("maintain").permission_level(), "maintain");
}
