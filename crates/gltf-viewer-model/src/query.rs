// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! URL fragment / query string decoding

/// Parsed query parameters, in source order
///
/// A bare key (`#kiosk`) decodes to an empty value, the same as `#kiosk=`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a fragment or search string
    ///
    /// A single leading `#` or `?` is ignored; the rest is decoded as
    /// `application/x-www-form-urlencoded` (`&` separators, `+` as space,
    /// `%XX` escapes).
    pub fn parse(input: &str) -> Self {
        let trimmed = input
            .strip_prefix('#')
            .or_else(|| input.strip_prefix('?'))
            .unwrap_or(input);

        let pairs = form_urlencoded::parse(trimmed.as_bytes())
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self { pairs }
    }

    /// Whether the key appears at all
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Value of the first occurrence of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Truthiness of a flag parameter: set only with a non-empty value
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_marker() {
        let hash = QueryParams::parse("#preset=studio");
        let search = QueryParams::parse("?preset=studio");
        assert_eq!(hash.get("preset"), Some("studio"));
        assert_eq!(search.get("preset"), Some("studio"));
    }

    #[test]
    fn test_empty_input() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("#").is_empty());
        assert!(QueryParams::parse("#&&").is_empty());
        assert!(QueryParams::parse("#=orphan").is_empty());
    }

    #[test]
    fn test_bare_and_empty_values_are_unset() {
        let params = QueryParams::parse("#kiosk&preset=");
        assert!(params.contains("kiosk"));
        assert_eq!(params.get("kiosk"), Some(""));
        assert_eq!(params.get("preset"), Some(""));
        assert!(!params.flag("kiosk"));
        assert!(!params.flag("preset"));
        assert!(!params.flag("missing"));
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let params = QueryParams::parse("#model=models%2Fmy+dress.glb&cameraPosition=1%2C2%2C3");
        assert_eq!(params.get("model"), Some("models/my dress.glb"));
        assert_eq!(params.get("cameraPosition"), Some("1,2,3"));
    }

    #[test]
    fn test_invalid_escape_kept() {
        let params = QueryParams::parse("#preset=100%&model=%zz");
        assert_eq!(params.get("preset"), Some("100%"));
        assert_eq!(params.get("model"), Some("%zz"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse("#preset=a&preset=b");
        assert_eq!(params.get("preset"), Some("a"));
        assert_eq!(params.len(), 2);
    }
}
