//! Backend health report and the rule that classifies it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "ok";
pub const DEPENDENCY_UP: &str = "up";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyStatus {
    pub status: String,
}

/// Body of the backend's `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub info: BTreeMap<String, DependencyStatus>,
    #[serde(default)]
    pub details: BTreeMap<String, DependencyStatus>,
    #[serde(default)]
    pub error: BTreeMap<String, DependencyStatus>,
}

impl HealthReport {
    /// `Ok` when the overall status is `ok` and every reported dependency is
    /// `up`; otherwise the reason the backend is considered unhealthy.
    ///
    /// `required` lists dependencies that must appear in the report at all.
    pub fn evaluate(&self, required: &[String]) -> Result<(), String> {
        if self.status != STATUS_OK {
            return Err(format!("backend status is '{}'", self.status));
        }

        let reported = self.info.iter().chain(&self.details).chain(&self.error);
        for (name, dependency) in reported {
            if dependency.status != DEPENDENCY_UP {
                return Err(format!("dependency '{}' is {}", name, dependency.status));
            }
        }

        for name in required {
            if !self.info.contains_key(name) && !self.details.contains_key(name) {
                return Err(format!("dependency '{}' not reported", name));
            }
        }

        Ok(())
    }
}
