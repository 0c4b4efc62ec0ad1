//! Build expiry configuration.
//!
//! This crate provides:
//! - Raw configuration sources (in-memory, JSON resource bundle, environment)
//! - Expiry date parsing for the `"Jul 1, 2012"` style
//! - A loader with an explicit strict or lenient parse policy
//! - The immutable [`ConfigState`] with expiry checks and dispatch helpers
//! - A process-wide registry for boundary call sites
//! - Serializable snapshots and subscriber setup
//!
//! ```
//! use bx_config::{ConfigLoader, StaticSource};
//! use chrono::{TimeZone, Utc};
//!
//! let source = StaticSource::with_values("Release", "Master", "Jul 1, 2012");
//! let config = ConfigLoader::strict().load(&source)?;
//!
//! let august = Utc.with_ymd_and_hms(2012, 8, 1, 0, 0, 0).unwrap();
//! assert!(config.is_expired(august));
//! assert_eq!(config.select_by_expiry(august, "welcome", "please update"), "please update");
//! # Ok::<(), bx_common::Error>(())
//! ```

pub mod expiry;
pub mod loader;
pub mod logging;
pub mod registry;
pub mod snapshot;
pub mod source;
pub mod state;

pub use bx_common::{BuildFlags, BuildType, Error, Result, SoftwareType};
pub use expiry::{parse_expiry, ExpiryParseError, EXPIRY_FORMAT, NEVER_EXPIRES};
pub use loader::{ConfigLoader, LoaderOptions, ParsePolicy};
pub use logging::{init_logging, LogFormat, LoggingError};
pub use registry::{current, initialize, initialize_with, is_initialized, reset};
pub use snapshot::ConfigSnapshot;
pub use source::{ConfigKey, ConfigSource, EnvSource, JsonSource, StaticSource};
pub use state::ConfigState;
