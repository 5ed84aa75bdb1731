//! knitwork core library — discovery pattern, input resolution, config, errors.
//!
//! - [`types`] — [`DiscoveryPattern`] and [`InputList`]
//! - [`discovery`] — explicit arguments or pattern discovery
//! - [`config`] — optional `knitwork.yaml`
//! - [`error`] — [`DiscoveryError`], [`ConfigError`]

pub mod config;
pub mod discovery;
pub mod error;
pub mod types;

pub use config::{Config, RendererSettings};
pub use error::{ConfigError, DiscoveryError};
pub use types::{DiscoveryPattern, InputList, InputSource, DEFAULT_PATTERN};
