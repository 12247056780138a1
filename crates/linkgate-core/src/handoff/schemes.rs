//! Classify URL schemes into browser-renderable vs external.

/// Schemes the browser renders itself. Anything else is handed to the OS
/// or another application (possibly after confirmation).
pub const INTERNAL_SCHEMES: [&str; 7] =
    ["http", "https", "ftp", "file", "about", "javascript", "data"];

/// High-level classification of a URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeClass {
    /// The browser loads and renders this scheme on its own.
    Internal,
    /// Requires handoff to the OS or a companion application.
    External,
}

/// Classify a scheme. Expects lower case, which `url::Url` guarantees.
pub fn classify(scheme: &str) -> SchemeClass {
    if INTERNAL_SCHEMES.contains(&scheme) {
        SchemeClass::Internal
    } else {
        SchemeClass::External
    }
}

/// Whether the scheme is plain web content (the only internal schemes whose
/// hosts are checked against the known-host table).
pub fn is_web(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_schemes_classified() {
        for scheme in INTERNAL_SCHEMES {
            assert_eq!(classify(scheme), SchemeClass::Internal, "{scheme}");
        }
    }

    #[test]
    fn external_schemes_classified() {
        assert_eq!(classify("tel"), SchemeClass::External);
        assert_eq!(classify("mailto"), SchemeClass::External);
        assert_eq!(classify("facetime"), SchemeClass::External);
        assert_eq!(classify("spotify"), SchemeClass::External);
    }

    #[test]
    fn web_schemes() {
        assert!(is_web("http"));
        assert!(is_web("https"));
        assert!(!is_web("ftp"));
        assert!(!is_web("file"));
        assert!(!is_web("mailto"));
    }
}
