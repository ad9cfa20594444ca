//! Config store error types.

use crate::client::ClientError;
use thiserror::Error;

/// Errors returned by [`HierarchicalConfigStore`](crate::HierarchicalConfigStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project {project_name} already exists")]
    ProjectAlreadyExists { project_name: String },

    #[error("environment {environment_name} already exists in project {project_name}")]
    EnvironmentAlreadyExists {
        project_name: String,
        environment_name: String,
    },

    #[error("application {application_name} already exists in project {project_name}")]
    ApplicationAlreadyExists {
        project_name: String,
        application_name: String,
    },

    #[error("project {project_name} not found")]
    ProjectNotFound { project_name: String },

    #[error("environment {environment_name} not found in project {project_name}")]
    EnvironmentNotFound {
        project_name: String,
        environment_name: String,
    },

    #[error("application {application_name} not found in project {project_name}")]
    ApplicationNotFound {
        project_name: String,
        application_name: String,
    },

    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Whether a create was rejected because the target path is occupied.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            StoreError::ProjectAlreadyExists { .. }
                | StoreError::EnvironmentAlreadyExists { .. }
                | StoreError::ApplicationAlreadyExists { .. }
        )
    }

    /// Whether a read found nothing at the requested path.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ProjectNotFound { .. }
                | StoreError::EnvironmentNotFound { .. }
                | StoreError::ApplicationNotFound { .. }
        )
    }

    /// Bounded label for metrics.
    pub(crate) fn status_label(&self) -> &'static str {
        if self.is_already_exists() {
            "conflict"
        } else if self.is_not_found() {
            "not_found"
        } else {
            "error"
        }
    }
}

impl From<ClientError> for StoreError {
    fn from(err: ClientError) -> Self {
        StoreError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StoreError::ProjectAlreadyExists {
            project_name: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "project abc already exists");

        let err = StoreError::EnvironmentAlreadyExists {
            project_name: "abc".to_string(),
            environment_name: "prod".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment prod already exists in project abc"
        );

        let err = StoreError::ApplicationNotFound {
            project_name: "abc".to_string(),
            application_name: "api".to_string(),
        };
        assert_eq!(err.to_string(), "application api not found in project abc");
    }

    #[test]
    fn test_classification() {
        let conflict = StoreError::ApplicationAlreadyExists {
            project_name: "abc".to_string(),
            application_name: "api".to_string(),
        };
        assert!(conflict.is_already_exists());
        assert!(!conflict.is_not_found());
        assert_eq!(conflict.status_label(), "conflict");

        let missing = StoreError::ProjectNotFound {
            project_name: "abc".to_string(),
        };
        assert!(missing.is_not_found());
        assert_eq!(missing.status_label(), "not_found");

        let transport = StoreError::from(ClientError::Request("timeout".to_string()));
        assert!(!transport.is_already_exists());
        assert!(!transport.is_not_found());
        assert_eq!(transport.status_label(), "error");
    }
}
