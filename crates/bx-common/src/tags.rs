//! Release-maturity and build-pipeline tags.
//!
//! Both enumerations parse from, and display as, their exact member names
//! (`"PreRelease"`, `"Gerrit"`, ...). Matching is case-sensitive.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::flags::BuildFlags;

/// A tag string that names no member of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:?} is not a known {kind}")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

/// Release maturity tier of the running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SoftwareType {
    #[default]
    Unknown,
    /// Never to be released.
    Experimental,
    /// Not a formal tracked build.
    Development,
    /// Released with a fixed lifetime.
    Trial,
    /// Beta or release candidate.
    PreRelease,
    Release,
}

impl SoftwareType {
    /// Every member, in declaration order.
    pub const ALL: [SoftwareType; 6] = [
        SoftwareType::Unknown,
        SoftwareType::Experimental,
        SoftwareType::Development,
        SoftwareType::Trial,
        SoftwareType::PreRelease,
        SoftwareType::Release,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoftwareType::Unknown => "Unknown",
            SoftwareType::Experimental => "Experimental",
            SoftwareType::Development => "Development",
            SoftwareType::Trial => "Trial",
            SoftwareType::PreRelease => "PreRelease",
            SoftwareType::Release => "Release",
        }
    }

    /// Legacy integer tag for this tier. `Unknown` carries no bits.
    pub fn flag(self) -> BuildFlags {
        match self {
            SoftwareType::Unknown => BuildFlags::NONE,
            SoftwareType::Development => BuildFlags::DEVELOPMENT,
            SoftwareType::Experimental => BuildFlags::EXPERIMENTAL,
            SoftwareType::Trial => BuildFlags::TRIAL,
            SoftwareType::PreRelease => BuildFlags::PRE_RELEASE,
            SoftwareType::Release => BuildFlags::RELEASE,
        }
    }
}

impl fmt::Display for SoftwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoftwareType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "software type",
                value: s.to_string(),
            })
    }
}

/// Build pipeline that produced the binary. Metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum BuildType {
    #[default]
    Unknown,
    Eclipse,
    Ant,
    /// Triggered from code review.
    Gerrit,
    Auto,
    Master,
}

impl BuildType {
    /// Every member, in declaration order.
    pub const ALL: [BuildType; 6] = [
        BuildType::Unknown,
        BuildType::Eclipse,
        BuildType::Ant,
        BuildType::Gerrit,
        BuildType::Auto,
        BuildType::Master,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Unknown => "Unknown",
            BuildType::Eclipse => "Eclipse",
            BuildType::Ant => "Ant",
            BuildType::Gerrit => "Gerrit",
            BuildType::Auto => "Auto",
            BuildType::Master => "Master",
        }
    }

    /// Legacy integer tag for this pipeline. `Unknown` carries no bits.
    pub fn flag(self) -> BuildFlags {
        match self {
            BuildType::Unknown => BuildFlags::NONE,
            BuildType::Eclipse => BuildFlags::ECLIPSE,
            BuildType::Ant => BuildFlags::ANT,
            BuildType::Gerrit => BuildFlags::GERRIT,
            BuildType::Auto => BuildFlags::AUTO,
            BuildType::Master => BuildFlags::MASTER,
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "build type",
                value: s.to_string(),
            })
    }
}
