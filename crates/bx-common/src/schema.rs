//! Snapshot schema version.

/// Version stamped into every serialized snapshot. Readers accept any
/// snapshot with the same major version.
pub const SCHEMA_VERSION: &str = "1.0.0";

fn major(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}

/// True when a snapshot written with `version` can be read by this build.
/// Unparseable versions are never compatible.
pub fn is_compatible(version: &str) -> bool {
    matches!((major(SCHEMA_VERSION), major(version)), (Some(ours), Some(theirs)) if ours == theirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_and_patch_bumps_are_readable() {
        assert!(is_compatible(SCHEMA_VERSION));
        assert!(is_compatible("1.4.2"));
    }

    #[test]
    fn other_majors_are_rejected() {
        assert!(!is_compatible("0.9.0"));
        assert!(!is_compatible("2.0.0"));
    }

    #[test]
    fn malformed_versions_are_rejected() {
        assert!(!is_compatible(""));
        assert!(!is_compatible("v1"));
    }
}
