//! Declared capabilities of a built package

use serde::{Deserialize, Serialize};

/// Permissions and hardware features declared in a platform manifest
///
/// Both lists keep manifest document order. Duplicates are kept as found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub features: Vec<String>,
    pub permissions: Vec<String>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_feature(&mut self, name: impl Into<String>) {
        self.features.push(name.into());
    }

    pub fn push_permission(&mut self, name: impl Into<String>) {
        self.permissions.push(name.into());
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.permissions.is_empty()
    }
}
