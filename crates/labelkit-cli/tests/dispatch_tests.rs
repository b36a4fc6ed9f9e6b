mod common;

use common::*;
use labelkit_cli::cors::cors_policy;
use labelkit_cli::{Actions, CliError, Dispatcher, LabelingCall, ProjectSelector, StorageCall};
use rstest::rstest;

fn only(flag: &str) -> Actions {
    Actions {
        cors: flag == "cors",
        metadata: flag == "metadata",
        projects: flag == "projects",
        tasks: flag == "tasks",
    }
}

#[rstest]
#[case::cors("cors", vec![StorageCall::PutBucketCors], vec![])]
#[case::metadata(
    "metadata",
    vec![
        StorageCall::HeadBucket,
        StorageCall::GetBucketLocation,
        StorageCall::GetBucketPolicy,
        StorageCall::GetBucketCors,
        StorageCall::GetBucketVersioning,
    ],
    vec![]
)]
#[case::projects(
    "projects",
    vec![],
    vec!["check_connection", "list_projects", "get_project"]
)]
#[case::tasks(
    "tasks",
    vec![],
    vec!["check_connection", "list_projects", "get_project", "list_tasks", "labeled_tasks"]
)]
#[tokio::test]
async fn test_single_flag_runs_one_component(
    #[case] flag: &str,
    #[case] storage_calls: Vec<StorageCall>,
    #[case] labeling_calls: Vec<&'static str>,
) {
    let config = config("token");
    let store = FakeBucketStore::new();
    let labeling = FakeLabeling::with_projects(&[1, 2]);
    let mut out = Vec::new();

    Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .run(only(flag), &mut out)
        .await
        .unwrap();

    assert_eq!(store.calls(), storage_calls);
    assert_eq!(labeling.calls(), labeling_calls);
}

#[tokio::test]
async fn test_missing_key_makes_no_calls() {
    let config = config("");
    let store = FakeBucketStore::new();
    let labeling = FakeLabeling::with_projects(&[1]);
    let mut out = Vec::new();

    let actions = Actions {
        cors: true,
        metadata: true,
        projects: true,
        tasks: true,
    };
    let err = Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .run(actions, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::MissingKey));
    assert!(store.calls().is_empty());
    assert!(labeling.calls().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_cors_submits_fixed_policy() {
    let config = config("");
    let store = FakeBucketStore::new();
    let mut out = Vec::new();

    Dispatcher::new(&config, &store)
        .run(only("cors"), &mut out)
        .await
        .unwrap();

    let submitted = store.submitted_cors.lock().clone();
    assert_eq!(submitted, vec![cors_policy()]);
    assert!(output(&out).contains(&format!("Set CORS policies for bucket {}", BUCKET)));
}

#[tokio::test]
async fn test_cors_failure_aborts_run() {
    let config = config("token");
    let store = FakeBucketStore::failing_on(StorageCall::PutBucketCors);
    let labeling = FakeLabeling::with_projects(&[1]);
    let mut out = Vec::new();

    let actions = Actions {
        cors: true,
        projects: true,
        ..Actions::default()
    };
    let err = Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .run(actions, &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.storage_call(), Some(StorageCall::PutBucketCors));
    assert!(labeling.calls().is_empty());
}

#[tokio::test]
async fn test_metadata_failure_continues_with_projects() {
    let config = config("token");
    let store = FakeBucketStore::failing_on(StorageCall::GetBucketVersioning);
    let labeling = FakeLabeling::with_projects(&[1]);
    let mut out = Vec::new();

    let actions = Actions {
        metadata: true,
        projects: true,
        ..Actions::default()
    };
    Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .run(actions, &mut out)
        .await
        .unwrap();

    let text = output(&out);
    // Lines printed before the failure stay
    assert!(text.contains("Location: None"));
    assert!(text.contains(&format!(
        "Error getting metadata for bucket {}: GetBucketVersioning failed",
        BUCKET
    )));
    assert!(!text.contains("Creation Date:"));
    assert_eq!(labeling.calls(), vec!["check_connection", "list_projects", "get_project"]);
}

#[tokio::test]
async fn test_projects_without_fixed_id_fails() {
    let config = config("token");
    let store = FakeBucketStore::new();
    let labeling = FakeLabeling::with_projects(&[4, 7]);
    let mut out = Vec::new();

    let err = Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .run(only("projects"), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ProjectNotFound(1)));
    // The listing itself was printed before the lookup
    assert!(output(&out).contains("4 Project 4 description 4"));
}

#[tokio::test]
async fn test_selector_override() {
    let config = config("token");
    let store = FakeBucketStore::new();
    let labeling = FakeLabeling::with_projects(&[4, 7]);
    let mut out = Vec::new();

    Dispatcher::new(&config, &store)
        .with_labeling(&labeling)
        .with_project_selector(ProjectSelector::ById(7))
        .with_task_selector(ProjectSelector::ById(4))
        .run(only("projects"), &mut out)
        .await
        .unwrap();

    assert!(output(&out).contains(r#"<Project id=7 title="Project 7">"#));
}

#[tokio::test]
async fn test_labeling_not_configured() {
    let config = config("token");
    let store = FakeBucketStore::new();
    let mut out = Vec::new();

    let err = Dispatcher::new(&config, &store)
        .run(only("tasks"), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.labeling_call(), None::<LabelingCall>);
}
