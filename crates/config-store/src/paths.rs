//! Parameter path layout.
//!
//! Roots end with `/` and are used for non-recursive listing. Entity
//! paths never end with `/`.

const ENVIRONMENTS: &str = "environments";
const APPLICATIONS: &str = "applications";

/// Builds parameter paths under a fixed root segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    root: String,
}

impl StorePaths {
    /// `root` must already be a valid name segment.
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `/<root>/`
    pub fn projects_root(&self) -> String {
        format!("/{}/", self.root)
    }

    /// `/<root>/<project>`
    pub fn project(&self, project: &str) -> String {
        format!("/{}/{}", self.root, project)
    }

    /// `/<root>/<project>/environments/`
    pub fn environments_root(&self, project: &str) -> String {
        format!("/{}/{}/{}/", self.root, project, ENVIRONMENTS)
    }

    /// `/<root>/<project>/environments/<environment>`
    pub fn environment(&self, project: &str, environment: &str) -> String {
        format!("/{}/{}/{}/{}", self.root, project, ENVIRONMENTS, environment)
    }

    /// `/<root>/<project>/applications/`
    pub fn applications_root(&self, project: &str) -> String {
        format!("/{}/{}/{}/", self.root, project, APPLICATIONS)
    }

    /// `/<root>/<project>/applications/<application>`
    pub fn application(&self, project: &str, application: &str) -> String {
        format!("/{}/{}/{}/{}", self.root, project, APPLICATIONS, application)
    }
}
