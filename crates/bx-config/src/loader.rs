//! Build a [`ConfigState`] from a [`ConfigSource`].
//!
//! # Parse policy
//!
//! A loader applies one [`ParsePolicy`] to every field:
//!
//! | input                      | `Strict`                | `Lenient`                        |
//! |----------------------------|-------------------------|----------------------------------|
//! | tag names a member         | member                  | member                           |
//! | tag absent or blank        | `InvalidConfiguration`  | `Unknown`                        |
//! | tag is any other string    | `InvalidConfiguration`  | `InvalidConfiguration`           |
//! | expiry unparseable/absent  | `InvalidConfiguration`  | warn, never expires              |

use std::str::FromStr;

use bx_common::{BuildType, Error, ParseTagError, Result, SoftwareType};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::expiry::{parse_expiry, NEVER_EXPIRES};
use crate::source::{ConfigKey, ConfigSource};
use crate::state::ConfigState;

/// How malformed configuration input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Any malformed or missing value fails initialization.
    #[default]
    Strict,
    /// Missing tags become `Unknown`; a bad expiry never expires.
    Lenient,
}

impl std::fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePolicy::Strict => write!(f, "strict"),
            ParsePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Loader options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub policy: ParsePolicy,

    /// Offset whose midnight marks the start of the expiry day.
    pub utc_offset: FixedOffset,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            policy: ParsePolicy::default(),
            utc_offset: Utc.fix(),
        }
    }
}

impl LoaderOptions {
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }
}

/// Maps raw source strings to a [`ConfigState`]. Holds no global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn strict() -> Self {
        Self::new(LoaderOptions::default().with_policy(ParsePolicy::Strict))
    }

    pub fn lenient() -> Self {
        Self::new(LoaderOptions::default().with_policy(ParsePolicy::Lenient))
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    pub fn policy(&self) -> ParsePolicy {
        self.options.policy
    }

    /// Read all three keys from `source` and build the state.
    pub fn load(&self, source: &dyn ConfigSource) -> Result<ConfigState> {
        let software_type: SoftwareType = self.parse_tag(source, ConfigKey::SoftwareType)?;
        let build_type: BuildType = self.parse_tag(source, ConfigKey::BuildType)?;

        let expiry_text = source.lookup(ConfigKey::Expiry).unwrap_or_default();
        let expiry_millis = self.parse_expiry(&expiry_text)?;

        debug!(
            %software_type,
            %build_type,
            expiry = %expiry_text,
            policy = %self.options.policy,
            "configuration loaded"
        );

        Ok(ConfigState::new(
            software_type,
            build_type,
            expiry_text,
            expiry_millis,
        ))
    }

    /// Parse a type tag under this loader's policy.
    pub fn parse_tag<T>(&self, source: &dyn ConfigSource, key: ConfigKey) -> Result<T>
    where
        T: FromStr<Err = ParseTagError> + Default,
    {
        let raw = source.lookup(key);
        let text = raw.as_deref().unwrap_or("");

        if self.options.policy == ParsePolicy::Lenient && text.trim().is_empty() {
            return Ok(T::default());
        }

        text.parse::<T>()
            .map_err(|e| Error::invalid(key.name(), text, e.to_string()))
    }

    /// Parse an expiry string under this loader's policy.
    pub fn parse_expiry(&self, text: &str) -> Result<i64> {
        match parse_expiry(text, self.options.utc_offset) {
            Ok(millis) => Ok(millis),
            Err(e) => match self.options.policy {
                ParsePolicy::Strict => Err(Error::invalid(
                    ConfigKey::Expiry.name(),
                    text,
                    e.to_string(),
                )),
                ParsePolicy::Lenient => {
                    warn!(
                        expiry = %text,
                        error = %e,
                        "expiry date invalid, build will never expire"
                    );
                    Ok(NEVER_EXPIRES)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use chrono::{DateTime, TimeZone};

    fn release_source() -> StaticSource {
        StaticSource::with_values("Release", "Master", "Jul 1, 2012")
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn default_policy_is_strict() {
        assert_eq!(ConfigLoader::default().policy(), ParsePolicy::Strict);
        assert_eq!(LoaderOptions::default().utc_offset, Utc.fix());
    }

    #[test]
    fn loads_release_build() {
        for loader in [ConfigLoader::strict(), ConfigLoader::lenient()] {
            let state = loader.load(&release_source()).unwrap();
            assert_eq!(state.software_type(), SoftwareType::Release);
            assert_eq!(state.build_type(), BuildType::Master);
            assert_eq!(state.expiry_date_text(), "Jul 1, 2012");
            assert!(state.is_expired(at(2012, 8, 1)));
            assert!(!state.is_expired(at(2012, 6, 1)));
        }
    }

    #[test]
    fn strict_rejects_unknown_tag() {
        let src = release_source().with(ConfigKey::BuildType, "Jenkins");
        let err = ConfigLoader::strict().load(&src).unwrap_err();
        match err {
            Error::InvalidConfiguration { key, value, .. } => {
                assert_eq!(key, "build_type");
                assert_eq!(value, "Jenkins");
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_missing_tag() {
        let src = release_source().without(ConfigKey::SoftwareType);
        assert_eq!(ConfigLoader::strict().load(&src).unwrap_err().code(), 11);
    }

    #[test]
    fn lenient_defaults_blank_tags_to_unknown() {
        let src = release_source()
            .with(ConfigKey::SoftwareType, "  ")
            .without(ConfigKey::BuildType);
        let state = ConfigLoader::lenient().load(&src).unwrap();
        assert_eq!(state.software_type(), SoftwareType::Unknown);
        assert_eq!(state.build_type(), BuildType::Unknown);
    }

    #[test]
    fn lenient_still_rejects_non_member_tag() {
        let src = release_source().with(ConfigKey::SoftwareType, "Beta");
        assert!(matches!(
            ConfigLoader::lenient().load(&src),
            Err(Error::InvalidConfiguration { key: "software_type", .. })
        ));
    }

    #[test]
    fn explicit_unknown_tag_parses_under_both_policies() {
        let src = release_source().with(ConfigKey::SoftwareType, "Unknown");
        for loader in [ConfigLoader::strict(), ConfigLoader::lenient()] {
            assert_eq!(loader.load(&src).unwrap().software_type(), SoftwareType::Unknown);
        }
    }

    #[test]
    fn strict_rejects_bad_date() {
        let src = release_source().with(ConfigKey::Expiry, "not-a-date");
        match ConfigLoader::strict().load(&src) {
            Err(Error::InvalidConfiguration { key, value, .. }) => {
                assert_eq!(key, "expiry");
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn lenient_bad_date_never_expires() {
        let src = release_source().with(ConfigKey::Expiry, "not-a-date");
        let state = ConfigLoader::lenient().load(&src).unwrap();
        assert!(state.never_expires());
        assert_eq!(state.expiry_date_text(), "not-a-date");
        assert!(!state.is_expired(at(9999, 12, 31)));
    }

    #[test]
    fn lenient_missing_date_never_expires() {
        let src = release_source().without(ConfigKey::Expiry);
        let state = ConfigLoader::lenient().load(&src).unwrap();
        assert!(state.never_expires());
        assert_eq!(state.expiry_date_text(), "");
    }

    #[test]
    fn offset_option_moves_expiry() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let loader = ConfigLoader::new(LoaderOptions::default().with_utc_offset(tokyo));
        let state = loader.load(&release_source()).unwrap();
        // Midnight in Tokyo is 15:00 UTC the previous day.
        assert!(state.is_expired(Utc.with_ymd_and_hms(2012, 6, 30, 15, 0, 1).unwrap()));
        assert!(!state.is_expired(Utc.with_ymd_and_hms(2012, 6, 30, 15, 0, 0).unwrap()));
    }

    #[test]
    fn policy_serde_and_display() {
        assert_eq!(ParsePolicy::Lenient.to_string(), "lenient");
        let json = serde_json::to_string(&ParsePolicy::Strict).unwrap();
        assert_eq!(json, "\"strict\"");
        let back: ParsePolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(back, ParsePolicy::Lenient);
    }
}
