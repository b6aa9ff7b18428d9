//! Version information for chartnote

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get short version string (version only)
///
/// # Example
///
/// ```
/// use chartnote::version::short_version;
///
/// assert!(short_version().starts_with('v'));
/// ```
pub fn short_version() -> String {
    format!("v{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_version() {
        assert_eq!(short_version(), format!("v{}", env!("CARGO_PKG_VERSION")));
    }
}
