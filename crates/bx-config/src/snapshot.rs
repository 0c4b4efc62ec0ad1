//! Serializable view of the loaded configuration, for display and debugging.

use bx_common::schema::is_compatible;
use bx_common::{BuildFlags, BuildType, Error, Result, SoftwareType, SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::ConfigState;

/// Point-in-time copy of a [`ConfigState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigSnapshot {
    pub schema_version: String,
    pub software_type: SoftwareType,
    pub build_type: BuildType,

    /// Expiry text as supplied by the source.
    pub expiry_date: String,

    /// Parsed expiry; `None` when the build never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    pub flags: BuildFlags,
}

impl ConfigSnapshot {
    pub fn from_state(state: &ConfigState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            software_type: state.software_type(),
            build_type: state.build_type(),
            expiry_date: state.expiry_date_text().to_string(),
            expires_at: state.expires_at(),
            flags: state.flags(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, rejecting one written under another major schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        if !is_compatible(&snapshot.schema_version) {
            return Err(Error::invalid(
                "schema_version",
                snapshot.schema_version,
                format!("incompatible with snapshot schema {SCHEMA_VERSION}"),
            ));
        }
        Ok(snapshot)
    }

    /// JSON Schema describing the snapshot document.
    pub fn json_schema() -> Result<serde_json::Value> {
        Ok(serde_json::to_value(schemars::schema_for!(ConfigSnapshot))?)
    }
}

impl From<&ConfigState> for ConfigSnapshot {
    fn from(state: &ConfigState) -> Self {
        Self::from_state(state)
    }
}
