//! Legacy integer tags for software and build types.
//!
//! Each tier and pipeline owns one bit, so a host can test membership in a
//! group of tiers with a single mask check:
//!
//! ```
//! use bx_common::{BuildFlags, SoftwareType};
//!
//! let shippable = BuildFlags::PRE_RELEASE | BuildFlags::RELEASE;
//! assert!(shippable.intersects(SoftwareType::Release.flag()));
//! assert!(!shippable.intersects(SoftwareType::Trial.flag()));
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask over software and build type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BuildFlags(pub u32);

impl BuildFlags {
    pub const NONE: BuildFlags = BuildFlags(0);

    pub const DEVELOPMENT: BuildFlags = BuildFlags(1);
    pub const EXPERIMENTAL: BuildFlags = BuildFlags(1 << 1);
    pub const TRIAL: BuildFlags = BuildFlags(1 << 2);
    pub const PRE_RELEASE: BuildFlags = BuildFlags(1 << 3);
    pub const RELEASE: BuildFlags = BuildFlags(1 << 4);

    pub const ECLIPSE: BuildFlags = BuildFlags(1 << 5);
    pub const ANT: BuildFlags = BuildFlags(1 << 6);
    pub const GERRIT: BuildFlags = BuildFlags(1 << 7);
    pub const AUTO: BuildFlags = BuildFlags(1 << 8);
    pub const MASTER: BuildFlags = BuildFlags(1 << 9);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: BuildFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when `self` and `other` share at least one bit.
    pub fn intersects(self, other: BuildFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for BuildFlags {
    type Output = BuildFlags;

    fn bitor(self, rhs: BuildFlags) -> BuildFlags {
        BuildFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for BuildFlags {
    fn bitor_assign(&mut self, rhs: BuildFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for BuildFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
