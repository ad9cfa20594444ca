//! Builder patterns for test entities
//!
//! Defaults match the fixture values in [`crate::test_ids`].

use crate::test_ids::{
    IdGenerator, TEST_ACCOUNT_ID, TEST_APPLICATION_TYPE, TEST_APP_API, TEST_ENV_TEST,
    TEST_PROJECT_VERSION, TEST_REGION,
};
use common::types::{Application, Environment, Project};

/// Builder for test projects
///
/// # Example
/// ```rust,ignore
/// let project = TestProjectBuilder::new().build();          // unique name
/// let fixed = TestProjectBuilder::new().named("abcde12345").build();
/// ```
pub struct TestProjectBuilder {
    name: String,
    version: String,
}

impl TestProjectBuilder {
    /// Defaults to a fresh name from the run's `IdGenerator`.
    pub fn new() -> Self {
        Self {
            name: IdGenerator::for_run().project_name(),
            version: TEST_PROJECT_VERSION.to_string(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn build(self) -> Project {
        Project::new(self.name, self.version)
    }
}

impl Default for TestProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for test environments
pub struct TestEnvironmentBuilder {
    project: String,
    name: String,
    region: String,
    account_id: String,
}

impl TestEnvironmentBuilder {
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            name: TEST_ENV_TEST.to_string(),
            region: TEST_REGION.to_string(),
            account_id: TEST_ACCOUNT_ID.to_string(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn in_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn in_account(mut self, account_id: &str) -> Self {
        self.account_id = account_id.to_string();
        self
    }

    pub fn build(self) -> Environment {
        Environment {
            project: self.project,
            name: self.name,
            region: self.region,
            account_id: self.account_id,
        }
    }
}

/// Builder for test applications
pub struct TestApplicationBuilder {
    project: String,
    name: String,
    kind: String,
}

impl TestApplicationBuilder {
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            name: TEST_APP_API.to_string(),
            kind: TEST_APPLICATION_TYPE.to_string(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn of_type(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn build(self) -> Application {
        Application {
            project: self.project,
            name: self.name,
            kind: self.kind,
        }
    }
}
