use super::*;
use tempfile::TempDir;

fn init_repo_with_origin(url: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo = Repository::init(temp_dir.path()).expect("Failed to init repository");
    if let Some(url) = url {
        repo.remote(ORIGIN_REMOTE, url).expect("Failed to add remote");
    }
    temp_dir
}

#[test]
fn test_resolves_https_origin() {
    let temp_dir = init_repo_with_origin(Some("https://github.com/octocat/hello-world.git"));

    let reference = repository_from_path(temp_dir.path()).expect("Failed to resolve");

    assert_eq!(reference.owner(), "octocat");
    assert_eq!(reference.name(), "hello-world");
}

#[test]
fn test_resolves_ssh_origin_from_subdirectory() {
    let temp_dir = init_repo_with_origin(Some("git@github.com:rust-lang/cargo.git"));
    let nested = temp_dir.path().join("src").join("bin");
    std::fs::create_dir_all(&nested).expect("Failed to create subdirectory");

    let reference = repository_from_path(&nested).expect("Failed to resolve");

    assert_eq!(reference.to_string(), "rust-lang/cargo");
}

#[test]
fn test_missing_origin_is_resolution_error() {
    let temp_dir = init_repo_with_origin(None);

    let result = repository_from_path(temp_dir.path());

    match result {
        Err(Error::Resolution(msg)) => assert!(msg.contains("origin")),
        other => panic!("Expected Resolution error, got {:?}", other),
    }
}

#[test]
fn test_non_github_origin_is_resolution_error() {
    let temp_dir = init_repo_with_origin(Some("/srv/git/project.git"));

    let result = repository_from_path(temp_dir.path());

    assert!(matches!(result, Err(Error::Resolution(_))));
}
