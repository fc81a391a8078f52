//! Prototype tools.
//!
//! Read-only views over a mock-API service's prototype catalog:
//! - `list`: every prototype as `{id, name, method, urlPath}`
//! - `detail`: one prototype by id, or by name resolved against the listing
//!
//! `client` holds the HTTP seam, `model` the upstream shapes and projections,
//! `resolve` the name matching.

pub mod client;
pub mod detail;
pub mod list;
pub mod model;
pub mod resolve;

pub use client::{HttpFetch, PrototypeApi, RawResponse, ReqwestFetcher};
pub use detail::{PrototypeDetailParams, PrototypeDetailTool};
pub use list::{ListPrototypesParams, ListPrototypesTool};
pub use model::{PrototypeDetail, PrototypeSummary};
