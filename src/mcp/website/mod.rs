//! Website generation - business logic behind the `build_website` tool.
//!
//! - `slug` - business name to web id normalization
//! - `availability` - suffix search for a free web id
//! - `builder` - the plugin selection / build request chain
//! - `validation` - tool argument checks

pub mod availability;
pub mod builder;
pub mod slug;
pub mod validation;

pub use availability::resolve_available_web_id;
pub use builder::{BuildOutcome, WebsiteBuilder, INSTRUCTIONS};
pub use slug::generate_web_id;
pub use validation::{BuildWebsiteArgs, ValidBuildArgs};

use thiserror::Error;

use crate::upstream::ApiError;

pub const NO_PLUGINS_MESSAGE: &str = "Failed to analyze requirements - no plugins returned";
pub const BUILD_FAILED_MESSAGE: &str = "Failed to build website";

#[derive(Debug, Error)]
pub enum WebsiteError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Upstream(#[from] ApiError),
    #[error("{0}")]
    NoPlugins(String),
    #[error("{0}")]
    BuildFailed(String),
}
