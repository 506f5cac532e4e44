//! Ordered header collection and the exclusion/masking walk over it.

use http::HeaderMap;
use std::collections::HashSet;

/// Header name that suppresses the declared content type fallback.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Value reported in place of a masked header's values.
pub const MASKED_PLACEHOLDER: &str = "[masked]";

/// Ordered mapping from header name to its values.
///
/// Names are kept exactly as provided. Appending to a name that is already
/// present adds the value to the existing entry, so an entry keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for a header name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Replace all values of a header name, keeping its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => *values = vec![value],
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Get the values of a header name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Check whether a header name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check whether a header name is present, ignoring ASCII case.
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Build a collection from an `http` header map.
    ///
    /// `http` stores names lowercased, so names are converted back to
    /// `Title-Case` (`content-type` becomes `Content-Type`). Values that are
    /// not valid UTF-8 are decoded lossily.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map {
            headers.append(
                canonical_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

impl From<&HeaderMap> for Headers {
    fn from(map: &HeaderMap) -> Self {
        Self::from_header_map(map)
    }
}

/// Convert a header name to `Title-Case`, segment by segment.
///
/// ```
/// assert_eq!(curlify_core::canonical_name("x-request-id"), "X-Request-Id");
/// ```
pub fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Receives the headers that survive exclusion.
pub trait HeaderVisitor {
    /// Called once per rendered header, in collection order.
    fn header(&mut self, name: &str, values: &[String]);

    /// Called once when no `Content-Type` header was rendered.
    fn missing_content_type(&mut self);
}

/// Walk a header collection applying exclusion and masking.
///
/// Excluded names are skipped and do not count as a `Content-Type` header.
/// Masked names are reported with the single value [`MASKED_PLACEHOLDER`].
/// When no header named exactly `Content-Type` was reported, including for
/// an empty collection, [`HeaderVisitor::missing_content_type`] runs once.
pub fn visit_headers<V>(
    headers: &Headers,
    excluded: &HashSet<String>,
    masked: &HashSet<String>,
    visitor: &mut V,
) where
    V: HeaderVisitor + ?Sized,
{
    let placeholder = [MASKED_PLACEHOLDER.to_string()];
    let mut has_content_type = false;

    for (name, values) in headers.iter().filter(|(name, _)| !excluded.contains(*name)) {
        if masked.contains(name) {
            visitor.header(name, &placeholder);
        } else {
            visitor.header(name, values);
        }
        if name == CONTENT_TYPE {
            has_content_type = true;
        }
    }

    if !has_content_type {
        visitor.missing_content_type();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        headers: Vec<(String, Vec<String>)>,
        missing_content_type: usize,
    }

    impl HeaderVisitor for Recorder {
        fn header(&mut self, name: &str, values: &[String]) {
            self.headers.push((name.to_string(), values.to_vec()));
        }

        fn missing_content_type(&mut self) {
            self.missing_content_type += 1;
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Headers {
        let mut headers = Headers::new();
        headers.append("Authorization", "Bearer token");
        headers.append("Content-Type", "application/json");
        headers.append("User-Agent", "curlify");
        headers
    }

    #[test]
    fn test_visits_all_but_excluded() {
        let mut recorder = Recorder::default();
        visit_headers(&sample(), &set(&["Authorization"]), &set(&[]), &mut recorder);

        assert_eq!(recorder.headers.len(), 2);
        assert_eq!(recorder.headers[0].0, "Content-Type");
        assert_eq!(recorder.headers[0].1, vec!["application/json"]);
        assert_eq!(recorder.headers[1].0, "User-Agent");
        assert_eq!(recorder.headers[1].1, vec!["curlify"]);
        assert_eq!(recorder.missing_content_type, 0);
    }

    #[test]
    fn test_missing_content_type_reported() {
        let headers: Headers = [("Authorization", "Bearer token"), ("User-Agent", "curlify")]
            .into_iter()
            .collect();

        let mut recorder = Recorder::default();
        visit_headers(&headers, &set(&[]), &set(&[]), &mut recorder);

        assert_eq!(recorder.missing_content_type, 1);
    }

    #[test]
    fn test_excluded_content_type_counts_as_missing() {
        let mut recorder = Recorder::default();
        visit_headers(&sample(), &set(&["Content-Type"]), &set(&[]), &mut recorder);

        assert_eq!(recorder.missing_content_type, 1);
        assert!(recorder.headers.iter().all(|(name, _)| name != "Content-Type"));
    }

    #[test]
    fn test_multiple_exclusions() {
        let mut recorder = Recorder::default();
        visit_headers(
            &sample(),
            &set(&["User-Agent", "Authorization"]),
            &set(&[]),
            &mut recorder,
        );

        assert_eq!(recorder.headers.len(), 1);
        assert_eq!(recorder.headers[0].0, "Content-Type");
    }

    #[test]
    fn test_empty_headers_report_missing_once() {
        let mut recorder = Recorder::default();
        visit_headers(&Headers::new(), &set(&[]), &set(&[]), &mut recorder);

        assert!(recorder.headers.is_empty());
        assert_eq!(recorder.missing_content_type, 1);
    }

    #[test]
    fn test_masked_header_single_placeholder() {
        let mut headers = Headers::new();
        headers.append("Cookie", "a=1");
        headers.append("Cookie", "b=2");

        let mut recorder = Recorder::default();
        visit_headers(&headers, &set(&[]), &set(&["Cookie"]), &mut recorder);

        assert_eq!(recorder.headers, vec![("Cookie".to_string(), vec!["[masked]".to_string()])]);
    }

    #[test]
    fn test_lowercase_content_type_is_not_literal_match() {
        let headers: Headers = [("content-type", "text/plain")].into_iter().collect();

        let mut recorder = Recorder::default();
        visit_headers(&headers, &set(&[]), &set(&[]), &mut recorder);

        assert_eq!(recorder.missing_content_type, 1);
    }

    #[test]
    fn test_append_merges_in_first_position() {
        let mut headers = Headers::new();
        headers.append("Accept", "application/json");
        headers.append("User-Agent", "curlify");
        headers.append("Accept", "text/html");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Accept");
        assert_eq!(entries[0].1, ["application/json", "text/html"]);
    }

    #[test]
    fn test_set_replaces_values() {
        let mut headers = sample();
        headers.set("Authorization", "Bearer other");
        assert_eq!(headers.get("Authorization"), Some(&["Bearer other".to_string()][..]));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_from_header_map_canonicalizes_names() {
        let mut map = HeaderMap::new();
        map.append(http::header::CONTENT_TYPE, "application/json".parse().unwrap());
        map.append("x-request-id", "abc".parse().unwrap());
        map.append(http::header::ACCEPT, "text/html".parse().unwrap());
        map.append(http::header::ACCEPT, "text/plain".parse().unwrap());

        let headers = Headers::from(&map);
        assert!(headers.contains("Content-Type"));
        assert!(headers.contains("X-Request-Id"));
        assert_eq!(headers.get("Accept").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("content-type"), "Content-Type");
        assert_eq!(canonical_name("www-authenticate"), "Www-Authenticate");
        assert_eq!(canonical_name("accept"), "Accept");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(sample().contains_ignore_case("content-type"));
        assert!(!sample().contains("content-type"));
    }
}
