//! Upstream record shapes and their compact projections.
//!
//! Upstream structs decode leniently: absent or `null` fields become zero
//! values instead of failing the whole response. Only a body that is not
//! JSON, or whose containers have the wrong type, is rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::common::null_as_default;

// ============================================================================
// Listing
// ============================================================================

/// `GET /prototypes` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ListingItem>,
}

/// One entry of the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: ListingRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, rename = "urlPath", deserialize_with = "null_as_default")]
    pub url_path: String,
}

/// Compact listing row returned by `list_prototypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrototypeSummary {
    pub id: String,
    pub name: String,
    pub method: String,
    #[serde(rename = "urlPath")]
    pub url_path: String,
}

impl From<&ListingItem> for PrototypeSummary {
    fn from(item: &ListingItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            method: item.request.method.clone(),
            url_path: item.request.url_path.clone(),
        }
    }
}

/// Project a listing, keeping its order.
pub fn summarize(items: &[ListingItem]) -> Vec<PrototypeSummary> {
    items.iter().map(PrototypeSummary::from).collect()
}

// ============================================================================
// Detail
// ============================================================================

/// `GET /prototypes/<id>` body. `status_code`, `success` and `trace_id`
/// siblings of `data` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: DetailItem,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: DetailRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: DetailResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delay: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, rename = "path_params", deserialize_with = "null_as_default")]
    pub path_params: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub body_schema: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: DetailResponseBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailResponseBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Compact detail returned by `get_prototype_detail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrototypeDetail {
    pub id: String,
    pub name: String,
    pub method: String,
    #[serde(rename = "urlPath")]
    pub url_path: String,
    pub delay: i64,
    #[serde(rename = "response_status_code")]
    pub response_status: i64,
    pub response_success: bool,
    pub response_data: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl From<DetailItem> for PrototypeDetail {
    fn from(item: DetailItem) -> Self {
        let DetailItem {
            id,
            name,
            created_at,
            updated_at,
            request,
            response,
        } = item;

        Self {
            id,
            name,
            method: request.method,
            url_path: request.url_path,
            delay: request.delay,
            response_status: response.body.status_code,
            response_success: response.body.success,
            response_data: response.body.data,
            created_at,
            updated_at,
            headers: request.headers,
        }
    }
}
