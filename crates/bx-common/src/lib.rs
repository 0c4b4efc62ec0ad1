//! Build expiry common types and errors.
//!
//! This crate provides the vocabulary shared by the loader and by host code:
//! - Software type and build type tags
//! - Legacy bitmask flags for those tags
//! - The unified error type
//! - Snapshot schema versioning

pub mod error;
pub mod flags;
pub mod schema;
pub mod tags;

pub use error::{Error, Result};
pub use flags::BuildFlags;
pub use schema::SCHEMA_VERSION;
pub use tags::{BuildType, ParseTagError, SoftwareType};
