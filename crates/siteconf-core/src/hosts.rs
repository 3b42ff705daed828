//! Host and origin list parsing.
//!
//! Allow-list settings such as `ALLOWED_HOSTS` and `CSRF_TRUSTED_ORIGINS` are
//! supplied as a single delimiter-joined string. This module turns that string
//! into a clean, ordered list:
//!
//! - every fragment is trimmed of surrounding whitespace
//! - fragments that are empty after trimming are dropped, so an empty input,
//!   a trailing separator, or consecutive separators never produce `""`
//! - the relative order of surviving fragments is kept and duplicates are not
//!   removed
//!
//! # Example
//!
//! ```
//! use siteconf_core::hosts::{parse_csv, parse_host_list};
//!
//! assert_eq!(parse_csv(" a , b ,, c "), vec!["a", "b", "c"]);
//! assert_eq!(parse_host_list("a;b", ";").unwrap(), vec!["a", "b"]);
//! assert!(parse_host_list("a,b", "").is_err());
//! ```

use crate::errors::ConfigError;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Splits `hosts` on every occurrence of `separator` into trimmed, non-empty
/// tokens.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedListInput`] if `separator` is empty.
pub fn parse_host_list(hosts: &str, separator: &str) -> Result<Vec<String>, ConfigError> {
    if separator.is_empty() {
        return Err(ConfigError::malformed("separator must not be empty"));
    }

    Ok(split_trimmed(hosts, separator))
}

/// [`parse_host_list`] with the default `","` separator. Never fails.
pub fn parse_csv(hosts: &str) -> Vec<String> {
    split_trimmed(hosts, DEFAULT_SEPARATOR)
}

fn split_trimmed(hosts: &str, separator: &str) -> Vec<String> {
    hosts
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn test_default_hosts() {
        assert_eq!(parse_csv("localhost,127.0.0.1"), vec!["localhost", "127.0.0.1"]);
    }

    #[test]
    fn test_whitespace_and_empty_fragments_dropped() {
        assert_eq!(parse_csv(" a , b ,, c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(parse_csv("single"), vec!["single"]);
    }

    #[test]
    fn test_only_separators_and_spaces() {
        assert!(parse_csv(" , ,,   ,").is_empty());
        assert!(parse_csv("   ").is_empty());
    }

    #[test]
    fn test_trailing_and_leading_separators() {
        assert_eq!(parse_csv(",example.com,"), vec!["example.com"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        assert_eq!(parse_csv("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_tabs_and_newlines_are_trimmed() {
        assert_eq!(
            parse_csv("\thttps://a.example\n,\r\nhttps://b.example "),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_custom_separator() {
        let hosts = parse_host_list("a.com; b.com;;c.com", ";").unwrap();
        assert_eq!(hosts, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_multi_char_separator() {
        let hosts = parse_host_list("a.com || b.com||", "||").unwrap();
        assert_eq!(hosts, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_custom_separator_leaves_commas_alone() {
        let hosts = parse_host_list("a,b|c", "|").unwrap();
        assert_eq!(hosts, vec!["a,b", "c"]);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = parse_host_list("a,b", "").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedListInput { .. }));
    }

    #[test]
    fn test_empty_separator_rejected_for_empty_input() {
        assert!(parse_host_list("", "").is_err());
    }

    #[test]
    fn test_rejoin_and_reparse_is_stable() {
        for _ in 0..50 {
            let words: Vec<String> = Words(0..8).fake();
            let first = parse_csv(&words.join(" , "));
            let second = parse_csv(&first.join(DEFAULT_SEPARATOR));
            assert_eq!(first, second);
            assert_eq!(first, words);
        }
    }

    #[test]
    fn test_elements_are_non_empty_and_trimmed() {
        let separators = [",", ";", " ", "::"];
        for _ in 0..50 {
            let words: Vec<String> = Words(0..6).fake();
            let padding = " ".repeat((0..3).fake::<usize>());
            for separator in separators {
                let raw = words
                    .iter()
                    .map(|w| format!("{padding}{w}{padding}"))
                    .collect::<Vec<_>>()
                    .join(&format!("{separator}{separator}"));

                for host in parse_host_list(&raw, separator).unwrap() {
                    assert!(!host.is_empty());
                    assert_eq!(host, host.trim());
                }
            }
        }
    }
}
