//! Store behaviour tests against the in-memory parameter client.
//!
//! Covers create/get/list for each entity kind, duplicate rejection and
//! reads through a simulated propagation window.

// Test code is allowed to use expect/unwrap for assertions
#![allow(clippy::unwrap_used, clippy::expect_used)]

use common::types::{Application, Environment};
use config_store::StoreError;
use config_store_test_utils::*;
use std::collections::HashSet;
use std::time::Duration;

const PROPAGATION_DELAY: Duration = Duration::from_millis(200);

fn as_set<T: std::hash::Hash + Eq>(items: Vec<T>) -> HashSet<T> {
    items.into_iter().collect()
}

// ============================================================================
// Projects
// ============================================================================

#[tokio::test]
async fn test_create_get_and_list_projects() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().build();

    store.create_project(&project).await.unwrap();

    let err = store.create_project(&project).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        StoreError::ProjectAlreadyExists {
            project_name: project.name.clone()
        }
        .to_string()
    );

    let fetched = store.get_project(&project.name).await.unwrap();
    assert_eq!(fetched, project);

    let projects = store.list_projects().await.unwrap();
    assert!(!projects.is_empty());
    assert!(projects.contains(&project));
}

#[tokio::test]
async fn test_duplicate_project_does_not_overwrite() {
    let TestStore { store, .. } = TestStore::new();
    let original = TestProjectBuilder::new().build();
    let replacement = TestProjectBuilder::new()
        .named(&original.name)
        .version("2.0")
        .build();

    store.create_project(&original).await.unwrap();
    let err = store.create_project(&replacement).await.unwrap_err();

    assert!(matches!(err, StoreError::ProjectAlreadyExists { ref project_name } if *project_name == original.name));
    assert_eq!(store.get_project(&original.name).await.unwrap(), original);
}

#[tokio::test]
async fn test_get_missing_project_is_not_found() {
    let TestStore { store, .. } = TestStore::new();

    let err = store.get_project("nosuchproject").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, StoreError::ProjectNotFound { ref project_name } if project_name == "nosuchproject"));
}

#[tokio::test]
async fn test_list_projects_excludes_children() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().build();

    store.create_project(&project).await.unwrap();
    store
        .create_environment(&TestEnvironmentBuilder::new(&project.name).build())
        .await
        .unwrap();
    store
        .create_application(&TestApplicationBuilder::new(&project.name).build())
        .await
        .unwrap();

    assert_eq!(store.list_projects().await.unwrap(), vec![project]);
}

// ============================================================================
// Environments
// ============================================================================

#[tokio::test]
async fn test_create_get_and_list_environments() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().build();
    let test_env = TestEnvironmentBuilder::new(&project.name)
        .named(TEST_ENV_TEST)
        .build();
    let prod_env = TestEnvironmentBuilder::new(&project.name)
        .named(TEST_ENV_PROD)
        .build();

    store.create_project(&project).await.unwrap();

    let envs = store.list_environments(&project.name).await.unwrap();
    assert!(envs.is_empty());

    store.create_environment(&test_env).await.unwrap();
    store.create_environment(&prod_env).await.unwrap();

    let err = store.create_environment(&prod_env).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        StoreError::EnvironmentAlreadyExists {
            project_name: project.name.clone(),
            environment_name: prod_env.name.clone(),
        }
        .to_string()
    );

    let envs = store.list_environments(&project.name).await.unwrap();
    assert_eq!(
        as_set(envs),
        as_set(vec![test_env.clone(), prod_env.clone()])
    );

    let env = store
        .get_environment(&project.name, &test_env.name)
        .await
        .unwrap();
    assert_eq!(env, test_env);

    let env = store
        .get_environment(&project.name, &prod_env.name)
        .await
        .unwrap();
    assert_eq!(env, prod_env);
}

#[tokio::test]
async fn test_environments_are_scoped_to_their_project() {
    let TestStore { store, .. } = TestStore::new();
    let first = TestProjectBuilder::new().build();
    let second = TestProjectBuilder::new().build();

    store.create_project(&first).await.unwrap();
    store.create_project(&second).await.unwrap();
    store
        .create_environment(&TestEnvironmentBuilder::new(&first.name).build())
        .await
        .unwrap();

    // Same environment name under a different project is not a duplicate
    store
        .create_environment(&TestEnvironmentBuilder::new(&second.name).build())
        .await
        .unwrap();

    assert_eq!(store.list_environments(&first.name).await.unwrap().len(), 1);
    assert_eq!(store.list_environments(&second.name).await.unwrap().len(), 1);

    let err = store
        .get_environment(&first.name, TEST_ENV_PROD)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EnvironmentNotFound { .. }));
}

#[tokio::test]
async fn test_account_id_stored_verbatim() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().named("abcde12345").build();
    let env = TestEnvironmentBuilder::new(&project.name)
        .in_account(" 1234")
        .build();

    store.create_project(&project).await.unwrap();
    store.create_environment(&env).await.unwrap();

    let fetched = store.get_environment("abcde12345", "test").await.unwrap();
    assert_eq!(fetched.account_id, " 1234");
}

// ============================================================================
// Applications
// ============================================================================

#[tokio::test]
async fn test_create_get_and_list_applications() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().build();
    let api_app = TestApplicationBuilder::new(&project.name)
        .named(TEST_APP_API)
        .build();
    let fe_app = TestApplicationBuilder::new(&project.name)
        .named(TEST_APP_FRONT_END)
        .build();

    store.create_project(&project).await.unwrap();

    let apps = store.list_applications(&project.name).await.unwrap();
    assert!(apps.is_empty());

    store.create_application(&api_app).await.unwrap();
    store.create_application(&fe_app).await.unwrap();

    let err = store.create_application(&api_app).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        StoreError::ApplicationAlreadyExists {
            project_name: project.name.clone(),
            application_name: api_app.name.clone(),
        }
        .to_string()
    );

    let apps = store.list_applications(&project.name).await.unwrap();
    assert_eq!(as_set(apps), as_set(vec![api_app.clone(), fe_app.clone()]));

    let app = store
        .get_application(&project.name, &api_app.name)
        .await
        .unwrap();
    assert_eq!(app, api_app);

    let app = store
        .get_application(&project.name, &fe_app.name)
        .await
        .unwrap();
    assert_eq!(app, fe_app);
}

#[tokio::test]
async fn test_get_missing_application_is_not_found() {
    let TestStore { store, .. } = TestStore::new();
    let project = TestProjectBuilder::new().build();
    store.create_project(&project).await.unwrap();

    let err = store
        .get_application(&project.name, "worker")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!("application worker not found in project {}", project.name)
    );
}

#[tokio::test]
async fn test_rejected_duplicate_application_is_single_write() {
    let TestStore { store, client } = TestStore::new();
    let project = TestProjectBuilder::new().build();
    let app = TestApplicationBuilder::new(&project.name).build();

    store.create_application(&app).await.unwrap();
    let err = store.create_application(&app).await.unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(client.put_count(), 2);
    assert_eq!(client.len().await, 1);
}

// ============================================================================
// Propagation window
// ============================================================================

#[tokio::test]
async fn test_listing_catches_up_after_propagation() {
    let TestStore { store, .. } = TestStore::with_visibility_delay(PROPAGATION_DELAY);
    let project = TestProjectBuilder::new().build();
    let test_env = TestEnvironmentBuilder::new(&project.name)
        .named(TEST_ENV_TEST)
        .build();
    let prod_env = TestEnvironmentBuilder::new(&project.name)
        .named(TEST_ENV_PROD)
        .build();

    store.create_project(&project).await.unwrap();
    store.create_environment(&test_env).await.unwrap();
    store.create_environment(&prod_env).await.unwrap();

    // Duplicate detection does not wait for propagation
    let err = store.create_environment(&prod_env).await.unwrap_err();
    assert!(matches!(err, StoreError::EnvironmentAlreadyExists { .. }));

    let expected = as_set(vec![test_env.clone(), prod_env.clone()]);
    let listed: HashSet<Environment> = eventually(
        ConsistencyCategory::Custom(Duration::from_secs(2)),
        || async {
            let envs = as_set(store.list_environments(&project.name).await.ok()?);
            (envs == expected).then_some(envs)
        },
    )
    .await
    .expect("environments should be listed after propagation");
    assert_eq!(listed.len(), 2);

    let env = store
        .get_environment(&project.name, &test_env.name)
        .await
        .unwrap();
    assert_eq!(env, test_env);
}

#[tokio::test]
async fn test_reads_inside_propagation_window_miss_recent_writes() {
    let TestStore { store, .. } = TestStore::with_visibility_delay(Duration::from_secs(30));
    let project = TestProjectBuilder::new().build();
    let app = TestApplicationBuilder::new(&project.name).build();

    store.create_project(&project).await.unwrap();
    store.create_application(&app).await.unwrap();

    assert!(store.get_project(&project.name).await.unwrap_err().is_not_found());
    assert!(store.list_applications(&project.name).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_application_get_eventually_visible() {
    let TestStore { store, .. } = TestStore::with_visibility_delay(PROPAGATION_DELAY);
    let project = TestProjectBuilder::new().build();
    let app = TestApplicationBuilder::new(&project.name)
        .named(TEST_APP_FRONT_END)
        .build();

    store.create_application(&app).await.unwrap();

    let fetched: Application = eventually(
        ConsistencyCategory::Custom(Duration::from_secs(2)),
        || async { store.get_application(&project.name, &app.name).await.ok() },
    )
    .await
    .expect("application should become readable");
    assert_eq!(fetched, app);
}
