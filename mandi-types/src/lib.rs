//! Mandi-specific error type, configuration primitives and fetch outcomes shared by
//! every crate in the workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod outcome;

pub use capability::Capability;
pub use config::{FetchStrategy, Granularity, MandiConfig};
pub use connector::ConnectorKey;
pub use error::MandiError;
pub use outcome::Fetched;
