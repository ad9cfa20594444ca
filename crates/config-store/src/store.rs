//! Hierarchical config store.
//!
//! Create operations are put-if-absent: the write is rejected atomically by
//! the parameter service when the path is occupied, and the rejection is
//! reported as the matching `*AlreadyExists` error.
//!
//! Environment and application writes do not check that the owning project
//! exists. Callers create the project first.

use crate::client::{ParameterClient, PutOutcome, SsmParameterClient};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::observability::metrics;
use crate::paths::StorePaths;
use common::names::validate_name;
use common::types::{Application, Environment, Project};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

const PROJECT_DESCRIPTION: &str = "Archer project";
const ENVIRONMENT_DESCRIPTION: &str = "Archer environment";
const APPLICATION_DESCRIPTION: &str = "Archer application";

/// Create/get/list over projects, environments and applications.
#[derive(Clone)]
pub struct HierarchicalConfigStore {
    client: Arc<dyn ParameterClient>,
    paths: StorePaths,
}

impl std::fmt::Debug for HierarchicalConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchicalConfigStore")
            .field("root", &self.paths.root())
            .finish_non_exhaustive()
    }
}

impl HierarchicalConfigStore {
    /// Create a store over `client`, rooted at `/<root>/`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `root` is not a valid path segment.
    pub fn new(client: Arc<dyn ParameterClient>, root: &str) -> Result<Self, StoreError> {
        check_name("root", root)?;
        Ok(Self {
            client,
            paths: StorePaths::new(root),
        })
    }

    /// Create a store backed by Parameter Store.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = SsmParameterClient::from_config(config).await;
        Self::new(Arc::new(client), &config.root)
    }

    /// Create a store backed by Parameter Store, configured from the environment.
    pub async fn from_env() -> Result<Self, StoreError> {
        let config =
            StoreConfig::from_env().map_err(|e| StoreError::Configuration(e.to_string()))?;
        info!(target: "config_store", root = %config.root, "Config store configuration loaded");
        Self::from_config(&config).await
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Store `project` at `/<root>/<name>`.
    ///
    /// # Errors
    ///
    /// `ProjectAlreadyExists` if a project with this name is already stored.
    #[instrument(skip_all, name = "config_store.create_project", fields(project = %project.name))]
    pub async fn create_project(&self, project: &Project) -> Result<(), StoreError> {
        observe("create_project", async {
            check_name("project", &project.name)?;

            let path = self.paths.project(&project.name);
            match self.put(&path, project, PROJECT_DESCRIPTION).await? {
                PutOutcome::Created => Ok(()),
                PutOutcome::AlreadyExists => Err(StoreError::ProjectAlreadyExists {
                    project_name: project.name.clone(),
                }),
            }
        })
        .await
    }

    /// Fetch the project called `name`.
    ///
    /// # Errors
    ///
    /// `ProjectNotFound` if nothing is stored for `name`.
    #[instrument(skip_all, name = "config_store.get_project", fields(project = %name))]
    pub async fn get_project(&self, name: &str) -> Result<Project, StoreError> {
        observe("get_project", async {
            check_name("project", name)?;

            self.fetch(&self.paths.project(name))
                .await?
                .ok_or_else(|| StoreError::ProjectNotFound {
                    project_name: name.to_string(),
                })
        })
        .await
    }

    /// List every project under the root. Order is unspecified.
    #[instrument(skip_all, name = "config_store.list_projects")]
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        observe("list_projects", self.list(&self.paths.projects_root())).await
    }

    // ------------------------------------------------------------------
    // Environments
    // ------------------------------------------------------------------

    /// Store `environment` under its owning project.
    ///
    /// # Errors
    ///
    /// `EnvironmentAlreadyExists` if the project already has an environment
    /// with this name.
    #[instrument(
        skip_all,
        name = "config_store.create_environment",
        fields(project = %environment.project, environment = %environment.name)
    )]
    pub async fn create_environment(&self, environment: &Environment) -> Result<(), StoreError> {
        observe("create_environment", async {
            check_name("project", &environment.project)?;
            check_name("environment", &environment.name)?;

            let path = self
                .paths
                .environment(&environment.project, &environment.name);
            match self.put(&path, environment, ENVIRONMENT_DESCRIPTION).await? {
                PutOutcome::Created => Ok(()),
                PutOutcome::AlreadyExists => Err(StoreError::EnvironmentAlreadyExists {
                    project_name: environment.project.clone(),
                    environment_name: environment.name.clone(),
                }),
            }
        })
        .await
    }

    /// Fetch environment `environment_name` of project `project_name`.
    ///
    /// # Errors
    ///
    /// `EnvironmentNotFound` if the project has no such environment.
    #[instrument(
        skip_all,
        name = "config_store.get_environment",
        fields(project = %project_name, environment = %environment_name)
    )]
    pub async fn get_environment(
        &self,
        project_name: &str,
        environment_name: &str,
    ) -> Result<Environment, StoreError> {
        observe("get_environment", async {
            check_name("project", project_name)?;
            check_name("environment", environment_name)?;

            self.fetch(&self.paths.environment(project_name, environment_name))
                .await?
                .ok_or_else(|| StoreError::EnvironmentNotFound {
                    project_name: project_name.to_string(),
                    environment_name: environment_name.to_string(),
                })
        })
        .await
    }

    /// List the environments of `project_name`.
    ///
    /// Returns an empty list when the project has none.
    #[instrument(skip_all, name = "config_store.list_environments", fields(project = %project_name))]
    pub async fn list_environments(
        &self,
        project_name: &str,
    ) -> Result<Vec<Environment>, StoreError> {
        observe("list_environments", async {
            check_name("project", project_name)?;
            self.list(&self.paths.environments_root(project_name)).await
        })
        .await
    }

    // ------------------------------------------------------------------
    // Applications
    // ------------------------------------------------------------------

    /// Store `application` under its owning project.
    ///
    /// # Errors
    ///
    /// `ApplicationAlreadyExists` if the project already has an application
    /// with this name.
    #[instrument(
        skip_all,
        name = "config_store.create_application",
        fields(project = %application.project, application = %application.name)
    )]
    pub async fn create_application(&self, application: &Application) -> Result<(), StoreError> {
        observe("create_application", async {
            check_name("project", &application.project)?;
            check_name("application", &application.name)?;

            let path = self
                .paths
                .application(&application.project, &application.name);
            match self.put(&path, application, APPLICATION_DESCRIPTION).await? {
                PutOutcome::Created => Ok(()),
                PutOutcome::AlreadyExists => Err(StoreError::ApplicationAlreadyExists {
                    project_name: application.project.clone(),
                    application_name: application.name.clone(),
                }),
            }
        })
        .await
    }

    /// Fetch application `application_name` of project `project_name`.
    ///
    /// # Errors
    ///
    /// `ApplicationNotFound` if the project has no such application.
    #[instrument(
        skip_all,
        name = "config_store.get_application",
        fields(project = %project_name, application = %application_name)
    )]
    pub async fn get_application(
        &self,
        project_name: &str,
        application_name: &str,
    ) -> Result<Application, StoreError> {
        observe("get_application", async {
            check_name("project", project_name)?;
            check_name("application", application_name)?;

            self.fetch(&self.paths.application(project_name, application_name))
                .await?
                .ok_or_else(|| StoreError::ApplicationNotFound {
                    project_name: project_name.to_string(),
                    application_name: application_name.to_string(),
                })
        })
        .await
    }

    /// List the applications of `project_name`.
    ///
    /// Returns an empty list when the project has none.
    #[instrument(skip_all, name = "config_store.list_applications", fields(project = %project_name))]
    pub async fn list_applications(
        &self,
        project_name: &str,
    ) -> Result<Vec<Application>, StoreError> {
        observe("list_applications", async {
            check_name("project", project_name)?;
            self.list(&self.paths.applications_root(project_name)).await
        })
        .await
    }

    // ------------------------------------------------------------------
    // Serialization helpers
    // ------------------------------------------------------------------

    async fn put<T: Serialize>(
        &self,
        path: &str,
        entity: &T,
        description: &str,
    ) -> Result<PutOutcome, StoreError> {
        let document =
            serde_json::to_string(entity).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let outcome = self.client.put_if_absent(path, &document, description).await?;
        debug!(target: "config_store", path = %path, outcome = ?outcome, "Put parameter");
        Ok(outcome)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, StoreError> {
        match self.client.get(path).await? {
            Some(document) => decode(path, &document).map(Some),
            None => Ok(None),
        }
    }

    async fn list<T: DeserializeOwned>(&self, root: &str) -> Result<Vec<T>, StoreError> {
        let parameters = self.client.list_children(root).await?;
        debug!(target: "config_store", root = %root, count = parameters.len(), "Listed parameters");
        parameters
            .iter()
            .map(|p| decode(&p.name, &p.value))
            .collect()
    }
}

fn decode<T: DeserializeOwned>(path: &str, document: &str) -> Result<T, StoreError> {
    serde_json::from_str(document)
        .map_err(|e| StoreError::Serialization(format!("parameter {path}: {e}")))
}

fn check_name(kind: &'static str, name: &str) -> Result<(), StoreError> {
    validate_name(name).map_err(|e| StoreError::InvalidName {
        kind,
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Run `operation`, recording its outcome and latency.
async fn observe<T, F>(operation: &'static str, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    let start = Instant::now();
    let result = fut.await;
    let status = match &result {
        Ok(_) => "success",
        Err(e) => e.status_label(),
    };
    metrics::record_store_operation(operation, status, start.elapsed());
    result
}
