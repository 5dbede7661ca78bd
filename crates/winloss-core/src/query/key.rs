//! Canonical identity of a logical request.

use std::collections::BTreeMap;
use std::fmt;

/// Endpoint path plus a sorted, normalized parameter set.
///
/// Parameters are stored in a `BTreeMap`, so insertion order never affects
/// equality, hashing, or the rendered form. Absent and empty values are
/// dropped on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    path: String,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    /// Create a key for `path` with no parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter. Empty values are ignored.
    pub fn param(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.params.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Add a parameter only when a value is present.
    pub fn opt_param<V: AsRef<str>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Add every `(name, value)` pair from a map-like iterator.
    pub fn params<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .fold(self, |key, (k, v)| key.param(k.as_ref(), v))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a single parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_order_is_irrelevant() {
        let a = QueryKey::new("/deals")
            .param("stage", "closedwon")
            .param("industry", "Fintech");
        let b = QueryKey::new("/deals")
            .param("industry", "Fintech")
            .param("stage", "closedwon");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_absent_and_empty_values_dropped() {
        let a = QueryKey::new("/deals").param("stage", "closedwon");
        let b = QueryKey::new("/deals")
            .param("stage", "closedwon")
            .opt_param::<&str>("industry", None)
            .param("source", "");
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "/deals?stage=closedwon");
    }

    #[test]
    fn test_differing_values_differ() {
        let won = QueryKey::new("/deals").param("stage", "closedwon");
        let lost = QueryKey::new("/deals").param("stage", "closedlost");
        assert_ne!(won, lost);
    }

    #[test]
    fn test_values_are_encoded() {
        let key = QueryKey::new("/transcripts").param("participant_email", "a b@x.io");
        assert_eq!(key.to_string(), "/transcripts?participant_email=a%20b%40x.io");
        assert_eq!(key.get("participant_email"), Some("a b@x.io"));
    }

    #[test]
    fn test_params_from_map() {
        let key = QueryKey::new("/insights/icp").params([("segment", "smb"), ("empty", "")]);
        assert_eq!(key.to_string(), "/insights/icp?segment=smb");
    }
}
