//! Version information for the dashboard, populated at build time.
//!
//! Environment display format:
//! - Prod (stable): `stable:{version}`
//! - Nightly: `nightly:{date}`
//! - Test/Staging: `staging:{commit}`

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the environment label and version/info string based on build features.
///
/// Format: `(env_name, info_string)`
pub fn env_version_info() -> (&'static str, &'static str) {
    if cfg!(feature = "env_nightly") {
        ("nightly", build_date())
    } else if cfg!(feature = "env_test") {
        ("staging", build_commit())
    } else {
        ("stable", build_version())
    }
}

/// Format the environment and version info as a display string.
pub fn format_env_version() -> String {
    let (env_name, info) = env_version_info();
    // Nightly builds only show the date portion of the RFC3339 stamp.
    if env_name == "nightly" && info.len() >= 10 {
        format!("{}:{}", env_name, &info[..10])
    } else {
        format!("{env_name}:{info}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_metadata_is_present() {
        assert!(!build_date().is_empty());
        assert!(!build_commit().is_empty());
        assert!(!build_version().is_empty());
    }

    #[test]
    fn test_format_env_version_has_separator() {
        let formatted = format_env_version();
        let (env_name, _) = env_version_info();
        assert!(formatted.starts_with(env_name));
        assert!(formatted.contains(':'));
    }

    #[test]
    fn test_default_build_is_stable() {
        if !cfg!(any(feature = "env_nightly", feature = "env_test")) {
            assert_eq!(env_version_info(), ("stable", build_version()));
        }
    }
}
