//! Request description handed to a [`Sender`](crate::sender::Sender).

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// HTTP verb for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Request body, for the endpoints that take one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Json(Value),
    Text(String),
}

/// Query parameters of a request.
///
/// Every inserter skips values that are absent or empty, so a parameter is
/// either sent with a value or not sent at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` when `value` is present and non-empty.
    #[must_use]
    pub fn with(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.0.insert(name.to_string(), v.to_string());
        }
        self
    }

    /// Add `name` rendered through `Display` when `value` is present.
    #[must_use]
    pub fn with_display<T: Display>(self, name: &str, value: Option<T>) -> Self {
        let rendered = value.map(|v| v.to_string());
        self.with(name, rendered.as_deref())
    }

    /// Add `name` as the `;`-joined list of `values`, skipping empty entries.
    #[must_use]
    pub fn with_list(self, name: &str, values: &[String]) -> Self {
        let joined = values
            .iter()
            .filter(|v| !v.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");
        self.with(name, Some(joined.as_str()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything a sender needs to execute one call.
///
/// `path` is relative to the sender's base URL; an empty path addresses the
/// base URL itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub parameters: Parameters,
    pub body: Option<Body>,
}
