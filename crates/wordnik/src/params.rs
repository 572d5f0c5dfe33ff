//! Query-string construction.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Collects query parameters and renders them as a percent-encoded string.
///
/// Keys iterate in sorted order so the same inputs always render the same
/// query string.
#[derive(Debug, Default)]
pub(crate) struct ParamList {
    params: BTreeMap<&'static str, String>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &'static str, value: impl Into<String>) {
        self.params.insert(key, value.into());
    }

    pub fn put_bool(&mut self, key: &'static str, value: bool) {
        self.params.insert(key, value.to_string());
    }

    /// Adds the parameter only when the value is positive.
    pub fn put_positive(&mut self, key: &'static str, value: i32) {
        if value > 0 {
            self.params.insert(key, value.to_string());
        }
    }

    /// Adds the parameter only when the value is non-empty after trimming.
    pub fn put_nonempty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() {
                self.params.insert(key, value.to_string());
            }
        }
    }

    /// Joins the wire names of the values with commas, in caller order.
    /// An empty set contributes nothing.
    pub fn put_set<T: Display>(&mut self, key: &'static str, values: &[T]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.params.insert(key, joined);
        }
    }

    /// Percent-encodes each key and value as UTF-8 and joins the pairs with
    /// `&`. An empty list encodes to the empty string.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.params {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(key));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }

    /// `?`-prefixed encoded form, or the empty string when there are no
    /// parameters, so it can be appended to a URL unconditionally.
    pub fn query_suffix(&self) -> String {
        if self.params.is_empty() {
            String::new()
        } else {
            format!("?{}", self.encode())
        }
    }
}
