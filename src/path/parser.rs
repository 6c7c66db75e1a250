//! Slash-separated path strings.
//!
//! `"array/0/foo"` becomes three key segments. The token `*` becomes a
//! wildcard, and the empty string is the empty path. There is no escaping:
//! a key can contain neither `/` nor be exactly `*`.

use std::convert::Infallible;
use std::str::FromStr;

use super::ast::{Path, Segment};

/// Splits `path` on `/`.
///
/// Every part is kept as a string key, numeric or not; containers that need an
/// integer parse it during resolution. Empty parts (`"a//b"`) are kept as empty
/// keys.
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Path::default();
    }
    Path::new(
        path.split('/')
            .map(|part| match part {
                "*" => Segment::Wildcard,
                key => Segment::Key(key.to_string()),
            })
            .collect(),
    )
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_path(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_empty_path() {
        assert!(parse_path("").is_empty());
    }

    #[test]
    fn test_split_on_slash() {
        let path = parse_path("a/b/3");
        assert_eq!(
            path.segments,
            vec![Segment::from("a"), Segment::from("b"), Segment::from("3")]
        );
    }

    #[test]
    fn test_star_is_wildcard() {
        let path = parse_path("array/*/foo");
        assert_eq!(path.segments[1], Segment::Wildcard);
        // only an exact "*" part counts
        assert_eq!(parse_path("a*").segments, vec![Segment::from("a*")]);
    }

    #[test]
    fn test_empty_parts_are_kept() {
        assert_eq!(
            parse_path("/a/").segments,
            vec![Segment::from(""), Segment::from("a"), Segment::from("")]
        );
        assert_eq!(parse_path(" ").segments, vec![Segment::from(" ")]);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        let path: Path = "x/*/0".parse().unwrap();
        assert_eq!(path.to_string(), "x/*/0");
    }
}
