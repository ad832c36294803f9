//! Cursor-based pagination
//!
//! Listing endpoints return a page of `items` plus an optional
//! `next_page_token`. A [`Pager`] owns the listing parameters for one
//! traversal and advances the token after each fetch; it offers two ways to
//! consume the pages: [`Pager::collect_all`] and [`Pager::find_first`].
//!
//! Traversals are iterative and have no client-side page limit. A server that
//! never stops handing out tokens makes them run forever.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::marker::PhantomData;

use crate::config::api::params;
use crate::error::{CircleError, Result};

use super::client::CircleClient;
use super::traits::CircleResource;

/// Query parameters shaping a listing request
///
/// Absent fields are omitted from the query entirely; an empty string is sent
/// as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    pub owner_id: Option<String>,
    pub owner_slug: Option<String>,
    pub owner_type: Option<String>,
    pub page_token: Option<String>,
}

impl ListingParams {
    /// Params scoping a listing to one organization by slug
    pub fn for_slug(slug: impl Into<String>) -> Self {
        Self {
            owner_slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Present fields as query pairs, in the fixed order id, slug, type, token
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (params::OWNER_ID, &self.owner_id),
            (params::OWNER_SLUG, &self.owner_slug),
            (params::OWNER_TYPE, &self.owner_type),
            (params::PAGE_TOKEN, &self.page_token),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Compose an owner slug (`<vcs>/<org>`)
pub fn owner_slug(org: &str, vcs: &str) -> String {
    format!("{}/{}", vcs, org)
}

/// One page of a listing response
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Token for the following page; only an absent or null token ends the listing
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.next_token().is_some()
    }
}

/// Sequential walk over the pages of one listing endpoint
///
/// Each pager carries its own copy of the listing parameters, so concurrent
/// traversals never share cursor state.
pub struct Pager<'a, T> {
    client: &'a CircleClient,
    path: String,
    params: ListingParams,
    finished: bool,
    pages_fetched: usize,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T> Pager<'a, T>
where
    T: DeserializeOwned,
{
    pub(crate) fn new(client: &'a CircleClient, path: &str, params: ListingParams) -> Self {
        Self {
            client,
            path: path.to_string(),
            params,
            finished: false,
            pages_fetched: 0,
            _item: PhantomData,
        }
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page, or `None` once the token chain is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        if self.finished {
            return Ok(None);
        }

        let page: Page<T> = self.client.fetch_page(&self.path, &self.params).await?;
        self.pages_fetched += 1;

        match page.next_token() {
            Some(token) => self.params.page_token = Some(token.to_string()),
            None => self.finished = true,
        }
        Ok(Some(page))
    }

    /// Fetch every page and concatenate the items in server order
    ///
    /// Any failure aborts the whole traversal; no partial result is returned.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while let Some(page) = self.next_page().await? {
            all_items.extend(page.items);
        }

        debug!(
            "Collected {} items from '{}' over {} page(s)",
            all_items.len(),
            self.path,
            self.pages_fetched
        );
        Ok(all_items)
    }

    /// Return the first item matching `predicate`, stopping as soon as it is found
    ///
    /// Pages are scanned in order and items in page order, so the earliest
    /// match wins and later pages are never requested.
    pub async fn find_first<P>(mut self, mut predicate: P) -> Result<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(page) = self.next_page().await? {
            if let Some(found) = page.items.into_iter().find(|item| predicate(item)) {
                debug!(
                    "Found match in '{}' on page {}",
                    self.path, self.pages_fetched
                );
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl<'a, T> Pager<'a, T>
where
    T: DeserializeOwned + CircleResource,
{
    /// Find the first item whose name equals `name`, failing with `NotFound`
    pub async fn find_by_name(self, name: &str) -> Result<T> {
        let found = self
            .find_first(|item| item.name() == name)
            .await?
            .ok_or_else(|| CircleError::NotFound {
                resource: T::KIND,
                name: name.to_string(),
            })?;

        debug!("Resolved {} '{}' to id {}", T::KIND, name, found.id());
        Ok(found)
    }
}
