//! Entity types persisted by the config store.
//!
//! Each entity is stored as a JSON document. Field names follow the
//! document layout already present in existing parameter stores, so
//! `account_id` serializes as `accountID` and `kind` as `type`.

use serde::{Deserialize, Serialize};

/// Top-level namespace grouping environments and applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Globally unique, immutable project name.
    pub name: String,
    /// Schema version of the project document.
    pub version: String,
}

impl Project {
    /// Create a new project.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A deployment target (region and account) under a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    /// Owning project's name.
    pub project: String,
    /// Environment name, unique within the project.
    pub name: String,
    /// Region the environment deploys to (e.g., "us-west-2").
    pub region: String,
    /// Account the environment deploys to. Stored verbatim.
    #[serde(rename = "accountID")]
    pub account_id: String,
}

/// A deployable workload under a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Application {
    /// Owning project's name.
    pub project: String,
    /// Application name, unique within the project.
    pub name: String,
    /// Workload type (e.g., "LBFargateService").
    #[serde(rename = "type")]
    pub kind: String,
}
