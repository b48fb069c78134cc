//! Map-literal deserialization.
//!
//! Marker literals use the whole-block quoted-pair grammar:
//!
//! ```text
//! {'pattern':'response', 'pattern2':'response2'}
//! ```
//!
//! Either quote kind is accepted and whitespace around the separators is
//! tolerated. Keys and values are taken literally with no escape processing,
//! so a pattern or response must not itself contain a quote-colon-quote or
//! quote-comma-quote sequence; a bare `:` or `,` inside a value is fine.

use std::sync::LazyLock;

use regex::Regex;

use super::PatternMap;
use crate::error::ParseError;

/// Outer `{'` / `'}` punctuation, with optional quotes so `{}` parses too.
static OUTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*\{\s*['"]?|['"]?\s*\}\s*$"#).unwrap());

/// Separator between pairs: quote, comma, quote.
static PAIR_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]\s*,\s*['"]"#).unwrap());

/// Separator between a pattern and its response: quote, colon, quote.
static KV_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]\s*:\s*['"]"#).unwrap());

/// Deserialize one `{...}` literal into an ordered map.
///
/// Duplicate patterns follow the [`PatternMap`] overwrite policy. A fragment
/// that does not split into exactly one pattern and one response fails with
/// [`ParseError::MalformedLiteral`]; no partial result is returned.
pub fn deserialize_pairs(block: &str) -> Result<PatternMap, ParseError> {
    let inner = OUTER_PUNCT.replace_all(block, "");
    let mut map = PatternMap::new();
    if inner.trim().is_empty() {
        return Ok(map);
    }
    for fragment in PAIR_SEP.split(&inner) {
        let parts: Vec<&str> = KV_SEP.split(fragment).collect();
        match parts[..] {
            [pattern, response] => map.insert(pattern, response),
            _ => {
                return Err(ParseError::MalformedLiteral {
                    fragment: fragment.trim().to_string(),
                });
            }
        }
    }
    Ok(map)
}

/// Render a map back into the canonical `{'k':'v','k2':'v2'}` form.
///
/// `deserialize_pairs` over this output reproduces the map exactly.
pub fn serialize_pairs(map: &PatternMap) -> String {
    let pairs: Vec<String> = map
        .iter()
        .map(|(pattern, response)| format!("'{pattern}':'{response}'"))
        .collect();
    format!("{{{}}}", pairs.join(","))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_pair() {
        let map = deserialize_pairs("{'More':'y'}").unwrap();
        assert_eq!(map.get("More"), Some("y"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn multiple_pairs_keep_order() {
        let map = deserialize_pairs("{'a':'1','b':'2','c':'3'}").unwrap();
        let keys: Vec<&str> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn whitespace_and_double_quotes() {
        let map = deserialize_pairs(r#"{ "confirm" : "yes" , "abort" : "no" }"#).unwrap();
        assert_eq!(map.get("confirm"), Some("yes"));
        assert_eq!(map.get("abort"), Some("no"));
    }

    #[test]
    fn bare_colon_inside_value_is_fine() {
        let map = deserialize_pairs("{'prompt':'host: port 22'}").unwrap();
        assert_eq!(map.get("prompt"), Some("host: port 22"));
    }

    #[test]
    fn empty_literal_is_empty_map() {
        assert!(deserialize_pairs("{}").unwrap().is_empty());
        assert!(deserialize_pairs("{ }").unwrap().is_empty());
    }

    #[test]
    fn missing_value_is_malformed() {
        let err = deserialize_pairs("{'a'}").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLiteral {
                fragment: "a".to_string()
            }
        );
    }

    #[test]
    fn extra_separator_is_malformed() {
        let err = deserialize_pairs("{'a':'b':'c'}").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLiteral { .. }));
    }

    #[test]
    fn duplicate_pattern_last_value_wins() {
        let map = deserialize_pairs("{'a':'1','b':'2','a':'9'}").unwrap();
        let pairs: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "9"), ("b", "2")]);
    }

    #[test]
    fn round_trips_own_output() {
        let map = deserialize_pairs("{'[yes/no]':'yes','More':'y'}").unwrap();
        let reparsed = deserialize_pairs(&serialize_pairs(&map)).unwrap();
        assert_eq!(reparsed, map);
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_pairs(
            pairs in proptest::collection::vec(
                ("[a-zA-Z0-9][a-zA-Z0-9 _./-]{0,14}[a-zA-Z0-9]", "[a-zA-Z0-9][a-zA-Z0-9 _./-]{0,14}[a-zA-Z0-9]"),
                0..6,
            )
        ) {
            let mut map = PatternMap::new();
            for (pattern, response) in &pairs {
                map.insert(pattern, response);
            }
            let reparsed = deserialize_pairs(&serialize_pairs(&map)).unwrap();
            prop_assert_eq!(reparsed, map);
        }
    }
}
