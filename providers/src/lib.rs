//! # Profile Providers
//!
//! Remote search calls, one per supported platform.
//!
//! Search itself runs nowhere in this repository. Each platform has an
//! external search endpoint that takes the full criteria as a JSON body and
//! answers a [`models::SearchResult`]; this crate owns the criteria and wire
//! types plus the dispatcher that picks exactly one endpoint per explicit
//! search.
//!
//! ## Contract
//!
//! - Input: [`criteria::SearchCriteria`], serialized camelCase.
//! - Output: [`models::SearchResult`], item order exactly as the endpoint
//!   returned it.
//! - Failure: [`ProviderError`] on connect errors and non-2xx statuses. No
//!   retries here; a failed query costs the user a new explicit search.
//!
//! Dispatch is an exhaustive match on [`criteria::Platform`], so wiring up a
//! fifth platform is a compile-time checklist rather than a string lookup.

use reqwest::{Client, StatusCode};
use thiserror::Error;

pub mod criteria;
pub mod models;

use criteria::{Platform, SearchCriteria};
use models::SearchResult;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search endpoint answered {0}")]
    Status(StatusCode),
}

/// Base URLs for the per-platform search endpoints.
#[derive(Clone, Debug)]
pub struct ProviderEndpoints {
    pub linkedin: String,
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
}

impl ProviderEndpoints {
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Linkedin => &self.linkedin,
            Platform::Instagram => &self.instagram,
            Platform::Facebook => &self.facebook,
            Platform::Twitter => &self.twitter,
        }
    }
}

/// Runs one search against the endpoint selected by the criteria's
/// platform. Exactly one remote call per invocation.
pub async fn dispatch(
    client: &Client,
    endpoints: &ProviderEndpoints,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    match criteria.platform {
        Platform::Linkedin => search_linkedin(client, endpoints, api_key, criteria).await,
        Platform::Instagram => search_instagram(client, endpoints, api_key, criteria).await,
        Platform::Facebook => search_facebook(client, endpoints, api_key, criteria).await,
        Platform::Twitter => search_twitter(client, endpoints, api_key, criteria).await,
    }
}

pub async fn search_linkedin(
    client: &Client,
    endpoints: &ProviderEndpoints,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    fetch_profiles(client, &endpoints.linkedin, api_key, criteria).await
}

pub async fn search_instagram(
    client: &Client,
    endpoints: &ProviderEndpoints,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    fetch_profiles(client, &endpoints.instagram, api_key, criteria).await
}

pub async fn search_facebook(
    client: &Client,
    endpoints: &ProviderEndpoints,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    fetch_profiles(client, &endpoints.facebook, api_key, criteria).await
}

pub async fn search_twitter(
    client: &Client,
    endpoints: &ProviderEndpoints,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    fetch_profiles(client, &endpoints.twitter, api_key, criteria).await
}

async fn fetch_profiles(
    client: &Client,
    base_url: &str,
    api_key: &str,
    criteria: &SearchCriteria,
) -> Result<SearchResult, ProviderError> {
    let response = client
        .post(format!("{base_url}/search"))
        .bearer_auth(api_key)
        .json(criteria)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status()));
    }

    Ok(response.json().await?)
}
