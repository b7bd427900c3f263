//! Query-string parsing for the registration page URL.
//!
//! Follows the browser `URLSearchParams` rules: `+` is a space, percent
//! escapes are decoded, a key without `=` has an empty value and repeated
//! keys keep every value in order.

use super::INVITE_QUERY_KEY;

/// Ordered key/value pairs parsed from a `location.search` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);

        let pairs = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();

        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Invite code carried by the page URL under `c`, if any.
pub fn invite_from_query(search: &str) -> Option<String> {
    QueryParams::parse(search)
        .get(INVITE_QUERY_KEY)
        .map(str::to_owned)
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
