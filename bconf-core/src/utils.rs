//! Shared utility functions for code generation.

use std::path::PathBuf;

/// Convert a dotted package name to a relative directory path
/// (e.g., "com.example.app" -> "com/example/app").
///
/// An empty package maps to an empty path (the default package).
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Check whether a name is UPPER_SNAKE_CASE (e.g., "VERSION_CODE").
pub fn is_upper_snake_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }

    let mut prev_underscore = false;
    for c in chars {
        if c == '_' {
            if prev_underscore {
                return false;
            }
            prev_underscore = true;
        } else if c.is_ascii_uppercase() || c.is_ascii_digit() {
            prev_underscore = false;
        } else {
            return false;
        }
    }
    !prev_underscore
}

/// Convert a name to UPPER_SNAKE_CASE (e.g., "versionCode" -> "VERSION_CODE")
pub fn to_upper_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '-' || c == '_' || c == ' ' {
            if !result.ends_with('_') && !result.is_empty() {
                result.push('_');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        result.extend(c.to_uppercase());
    }
    result.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_package_path() {
        assert_eq!(package_path("com.example.app"), Path::new("com/example/app"));
        assert_eq!(package_path("single"), Path::new("single"));
        assert_eq!(package_path(""), Path::new(""));
    }

    #[test]
    fn test_is_upper_snake_case() {
        assert!(is_upper_snake_case("VERSION"));
        assert!(is_upper_snake_case("VERSION_CODE"));
        assert!(is_upper_snake_case("API_V2"));
        assert!(!is_upper_snake_case("versionCode"));
        assert!(!is_upper_snake_case("Version"));
        assert!(!is_upper_snake_case("VERSION__CODE"));
        assert!(!is_upper_snake_case("VERSION_"));
        assert!(!is_upper_snake_case("_VERSION"));
        assert!(!is_upper_snake_case(""));
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("versionCode"), "VERSION_CODE");
        assert_eq!(to_upper_snake_case("api-url"), "API_URL");
        assert_eq!(to_upper_snake_case("debug"), "DEBUG");
        assert_eq!(to_upper_snake_case("ALREADY_OK"), "ALREADY_OK");
        assert_eq!(to_upper_snake_case("build2Number"), "BUILD2_NUMBER");
    }
}
