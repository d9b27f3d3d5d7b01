use serde::{Deserialize, Serialize};

use super::defaults;

/// Diversified selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Also reject articles whose title equals the reference article's title.
    pub exclude_reference_title: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            exclude_reference_title: defaults::DEFAULT_EXCLUDE_REFERENCE_TITLE,
        }
    }
}
