//! Shared types for the target record generator
//!
//! Holds the data model passed between the generation stages, the static
//! locale/brand registry and the logging helpers used by every component.

pub mod errors;
pub mod logging;
pub mod registry;
pub mod types;

pub use errors::*;
pub use logging::Stage;
pub use registry::{Registry, AVG_BRAND, EN_COUNTRIES};
pub use types::*;
