//! Resource definitions module.
//!
//! Each resource lives in its own file and implements [`ResourceDefinition`].
//! Register new ones in `registry.rs`.

mod server_info;
mod usage_guide;

pub use server_info::ServerInfoResource;
pub use usage_guide::UsageGuideResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
