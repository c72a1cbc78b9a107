//! Compile-time build information, shown by `tooth-guard --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: package version, build date and commit.
pub fn version_line() -> String {
    format!(
        "tooth-guard {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD unless overridden
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_line_mentions_commit() {
        let line = version_line();
        assert!(line.starts_with("tooth-guard "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
