//! # Wire Models
//!
//! Shapes shared with the remote search endpoints.
//!
//! Every platform answers the same envelope: an ordered `items` list plus a
//! `totalResults` count that can exceed what one page carries. Profiles are
//! immutable once received; a new query replaces the whole result set rather
//! than merging into it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
}

/// One public profile as returned by a search endpoint. Field availability
/// varies per platform, so everything beyond the link is defaulted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub current_position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub followers: u64,
    pub link: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub connection_degree: Option<String>,
}

/// One query's result set. Created fresh per dispatched query and
/// superseded, never merged, by the next one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub items: Vec<ProfileRecord>,
    #[serde(default)]
    pub total_results: u64,
}
