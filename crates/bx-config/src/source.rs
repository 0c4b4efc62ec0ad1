//! Raw configuration sources.
//!
//! A [`ConfigSource`] answers three string lookups and nothing else. How the
//! values got there (build templating, packaging, environment) is the host's
//! business; the loader only reads them.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use bx_common::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// The fixed set of keys a source must answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    SoftwareType,
    BuildType,
    Expiry,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::SoftwareType,
        ConfigKey::BuildType,
        ConfigKey::Expiry,
    ];

    /// Resource name of this key.
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::SoftwareType => "software_type",
            ConfigKey::BuildType => "build_type",
            ConfigKey::Expiry => "expiry",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Provider of the raw build metadata strings.
///
/// `None` means the key is absent; the loader's parse policy decides what
/// absence means.
pub trait ConfigSource {
    fn lookup(&self, key: ConfigKey) -> Option<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn lookup(&self, key: ConfigKey) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn lookup(&self, key: ConfigKey) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Values held in memory, typically baked in at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    values: HashMap<ConfigKey, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source with all three keys set.
    pub fn with_values(
        software_type: impl Into<String>,
        build_type: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self::new()
            .with(ConfigKey::SoftwareType, software_type)
            .with(ConfigKey::BuildType, build_type)
            .with(ConfigKey::Expiry, expiry)
    }

    /// Set one key.
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Remove one key, making it absent.
    pub fn without(mut self, key: ConfigKey) -> Self {
        self.values.remove(&key);
        self
    }
}

impl ConfigSource for StaticSource {
    fn lookup(&self, key: ConfigKey) -> Option<String> {
        self.values.get(&key).cloned()
    }
}

/// A flat JSON object resource bundle:
///
/// ```json
/// { "software_type": "Release", "build_type": "Master", "expiry": "Jul 1, 2012" }
/// ```
///
/// Unknown keys are ignored. Known keys must hold strings (or `null`, which
/// counts as absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonSource {
    inner: StaticSource,
}

impl JsonSource {
    /// Parse a bundle from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: HashMap<String, Value> = serde_json::from_str(json)?;
        let mut inner = StaticSource::new();

        for (name, value) in root {
            let Some(key) = ConfigKey::from_name(&name) else {
                debug!(key = %name, "ignoring unrecognized resource key");
                continue;
            };
            match value {
                Value::String(s) => inner = inner.with(key, s),
                Value::Null => {}
                other => {
                    return Err(Error::invalid(
                        key.name(),
                        other.to_string(),
                        "resource value must be a string",
                    ))
                }
            }
        }

        Ok(Self { inner })
    }

    /// Load a bundle from a file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading resource bundle");
        Self::from_json(&content)
    }
}

impl ConfigSource for JsonSource {
    fn lookup(&self, key: ConfigKey) -> Option<String> {
        self.inner.lookup(key)
    }
}

/// Default variable prefix for [`EnvSource`].
pub const DEFAULT_ENV_PREFIX: &str = "BX_";

/// Reads `<PREFIX>SOFTWARE_TYPE`, `<PREFIX>BUILD_TYPE` and `<PREFIX>EXPIRY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name consulted for `key`.
    pub fn var_name(&self, key: ConfigKey) -> String {
        format!("{}{}", self.prefix, key.name().to_ascii_uppercase())
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvSource {
    fn lookup(&self, key: ConfigKey) -> Option<String> {
        std::env::var(self.var_name(key)).ok()
    }
}
