//! Context data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::circle::traits::CircleResource;

/// Context data from the CircleCI API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CircleResource for Context {
    const KIND: &'static str = "context";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Owner of a newly created context
#[derive(Serialize, Debug)]
pub(crate) struct ContextOwner<'a> {
    pub slug: &'a str,
    #[serde(rename = "type")]
    pub owner_type: &'a str,
}

/// Request body for creating a context
#[derive(Serialize, Debug)]
pub(crate) struct CreateContextRequest<'a> {
    pub name: &'a str,
    pub owner: ContextOwner<'a>,
}
