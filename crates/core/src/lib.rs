//! assetbook Core - fixed asset register and depreciation engine.
//!
//! This crate holds the asset store, the depreciation calculator and the
//! service front-ends call into. Everything is kept in memory; callers own
//! the single store instance and share it through the service.

pub mod constants;
pub mod errors;
pub mod fixed_assets;
pub mod utils;

// Re-export the fixed asset API at the crate root
pub use fixed_assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
