//! Environment variable data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::circle::traits::CircleResource;

/// Environment variable stored in a context
///
/// The API never returns the value; it is write-only.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub variable: String,
    #[serde(default)]
    pub context_id: String,
    pub created_at: DateTime<Utc>,
}

/// A variable is identified by its name within a context
impl CircleResource for EnvironmentVariable {
    const KIND: &'static str = "environment variable";

    fn id(&self) -> &str {
        &self.variable
    }

    fn name(&self) -> &str {
        &self.variable
    }
}

/// Request body for storing a variable value
#[derive(Serialize, Debug)]
pub(crate) struct StoreValueRequest<'a> {
    pub value: &'a str,
}
