//! Context API operations

use log::debug;
use reqwest::Method;

use crate::circle::client::resource_path;
use crate::circle::pagination::{owner_slug, ListingParams};
use crate::circle::response::{decode_empty, decode_json};
use crate::circle::CircleClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Context, ContextOwner, CreateContextRequest};

impl CircleClient {
    /// List every context owned by an organization, across all pages
    pub async fn list_contexts(&self, org: &str, vcs: &str) -> Result<Vec<Context>> {
        let slug = owner_slug(org, vcs);
        debug!("Listing contexts for owner '{}'", slug);
        self.list_contexts_with_params(ListingParams::for_slug(slug))
            .await
    }

    /// List contexts with caller-supplied listing parameters (owner id/type/slug)
    pub async fn list_contexts_with_params(&self, params: ListingParams) -> Result<Vec<Context>> {
        self.pages(api::CONTEXT, params).collect_all().await
    }

    /// Find a context by name, stopping at the first page that contains it
    pub async fn get_context_by_name(&self, org: &str, vcs: &str, name: &str) -> Result<Context> {
        let slug = owner_slug(org, vcs);
        debug!("Looking up context '{}' for owner '{}'", name, slug);
        self.pages(api::CONTEXT, ListingParams::for_slug(slug))
            .find_by_name(name)
            .await
    }

    /// Create a context owned by an organization
    pub async fn create_context(&self, org: &str, vcs: &str, name: &str) -> Result<Context> {
        let slug = owner_slug(org, vcs);
        let body = CreateContextRequest {
            name,
            owner: ContextOwner {
                slug: &slug,
                owner_type: api::ORGANIZATION_OWNER_TYPE,
            },
        };

        debug!("Creating context '{}' for owner '{}'", name, slug);
        let request = self.build_json_request(
            Method::POST,
            api::CONTEXT,
            serde_json::to_value(&body)?,
        )?;
        decode_json(self.execute(request).await?)
    }

    /// Delete a context by ID
    pub async fn delete_context(&self, context_id: &str) -> Result<()> {
        debug!("Deleting context: {}", context_id);
        let path = resource_path(&[api::CONTEXT, context_id])?;
        let request = self.build_request(Method::DELETE, &path, &[])?;
        decode_empty(self.execute(request).await?)
    }
}
