//! Environment variable API operations

use log::debug;
use reqwest::Method;

use crate::circle::client::resource_path;
use crate::circle::pagination::ListingParams;
use crate::circle::response::{decode_empty, decode_json};
use crate::circle::CircleClient;
use crate::config::api;
use crate::error::Result;

use super::models::{EnvironmentVariable, StoreValueRequest};

impl CircleClient {
    /// List every environment variable in a context, across all pages
    pub async fn list_environment_variables(
        &self,
        context_id: &str,
    ) -> Result<Vec<EnvironmentVariable>> {
        debug!("Listing environment variables for context: {}", context_id);
        let path = resource_path(&[api::CONTEXT, context_id, api::ENVIRONMENT_VARIABLE])?;
        self.pages(&path, ListingParams::default())
            .collect_all()
            .await
    }

    /// Create (or overwrite) an environment variable in a context
    pub async fn create_environment_variable(
        &self,
        context_id: &str,
        variable: &str,
        value: &str,
    ) -> Result<EnvironmentVariable> {
        debug!(
            "Storing environment variable '{}' in context: {}",
            variable, context_id
        );
        let path = resource_path(&[
            api::CONTEXT,
            context_id,
            api::ENVIRONMENT_VARIABLE,
            variable,
        ])?;
        let body = serde_json::to_value(StoreValueRequest { value })?;
        let request = self.build_json_request(Method::PUT, &path, body)?;
        decode_json(self.execute(request).await?)
    }

    /// Delete an environment variable from a context
    pub async fn delete_environment_variable(&self, context_id: &str, variable: &str) -> Result<()> {
        debug!(
            "Deleting environment variable '{}' from context: {}",
            variable, context_id
        );
        let path = resource_path(&[
            api::CONTEXT,
            context_id,
            api::ENVIRONMENT_VARIABLE,
            variable,
        ])?;
        let request = self.build_request(Method::DELETE, &path, &[])?;
        decode_empty(self.execute(request).await?)
    }
}
