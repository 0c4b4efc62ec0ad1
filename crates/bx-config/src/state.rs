//! The loaded, immutable build configuration.
//!
//! Every expiry-dependent operation takes `now` explicitly. Hosts pass
//! `Utc::now()`; tests pass fixed instants.

use bx_common::{BuildFlags, BuildType, Error, Result, SoftwareType};
use chrono::{DateTime, Utc};

use crate::expiry::NEVER_EXPIRES;

/// Build metadata fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    software_type: SoftwareType,
    build_type: BuildType,
    expiry_date_text: String,
    expiry_millis: i64,
}

impl ConfigState {
    pub fn new(
        software_type: SoftwareType,
        build_type: BuildType,
        expiry_date_text: impl Into<String>,
        expiry_millis: i64,
    ) -> Self {
        Self {
            software_type,
            build_type,
            expiry_date_text: expiry_date_text.into(),
            expiry_millis,
        }
    }

    pub fn software_type(&self) -> SoftwareType {
        self.software_type
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    /// The expiry date exactly as the source supplied it.
    pub fn expiry_date_text(&self) -> &str {
        &self.expiry_date_text
    }

    /// Expiry as epoch milliseconds; [`NEVER_EXPIRES`] when unbounded.
    pub fn expiry_millis(&self) -> i64 {
        self.expiry_millis
    }

    pub fn never_expires(&self) -> bool {
        self.expiry_millis == NEVER_EXPIRES
    }

    /// Expiry instant, or `None` when the build never expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.never_expires() {
            return None;
        }
        DateTime::from_timestamp_millis(self.expiry_millis)
    }

    /// Union of the software and build type flags.
    pub fn flags(&self) -> BuildFlags {
        self.software_type.flag() | self.build_type.flag()
    }

    /// True once `now` is strictly past the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.expiry_millis
    }

    /// Fail with [`Error::Expired`] if the build has expired at `now`.
    pub fn check_expired(&self, now: DateTime<Utc>) -> Result<()> {
        if self.is_expired(now) {
            return Err(Error::Expired {
                expiry: self.expiry_date_text.clone(),
            });
        }
        Ok(())
    }

    /// Pick `expired` if expired at `now`, else `valid`.
    pub fn select_by_expiry<T>(&self, now: DateTime<Utc>, valid: T, expired: T) -> T {
        if self.is_expired(now) {
            expired
        } else {
            valid
        }
    }

    /// Lazy form of [`select_by_expiry`](Self::select_by_expiry); only the
    /// chosen producer runs.
    pub fn select_by_expiry_with<T>(
        &self,
        now: DateTime<Utc>,
        valid: impl FnOnce() -> T,
        expired: impl FnOnce() -> T,
    ) -> T {
        self.dispatch_by_expiry(now, valid, expired)
    }

    /// Run exactly one of `on_valid` / `on_expired` on the calling thread and
    /// return its result.
    ///
    /// Actions return `()`; producers return a value. A producer returning
    /// `Result` hands its error back untouched:
    ///
    /// ```
    /// # use bx_common::{BuildType, SoftwareType};
    /// # use bx_config::ConfigState;
    /// # use chrono::Utc;
    /// let state = ConfigState::new(
    ///     SoftwareType::Trial,
    ///     BuildType::Auto,
    ///     "Jan 1, 2000",
    ///     946_684_800_000,
    /// );
    /// let out: Result<&str, String> = state.dispatch_by_expiry(
    ///     Utc::now(),
    ///     || Ok("running"),
    ///     || Err("trial over".to_string()),
    /// );
    /// assert_eq!(out, Err("trial over".to_string()));
    /// ```
    pub fn dispatch_by_expiry<T>(
        &self,
        now: DateTime<Utc>,
        on_valid: impl FnOnce() -> T,
        on_expired: impl FnOnce() -> T,
    ) -> T {
        if self.is_expired(now) {
            on_expired()
        } else {
            on_valid()
        }
    }
}
