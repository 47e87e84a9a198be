//! Query parameters for Civic Information API requests.

use std::collections::BTreeMap;

/// Extra query parameters forwarded to the API untouched.
///
/// Parameters are held in name order, so two option sets with the same
/// pairs are equal regardless of insertion order. Method-fixed fields
/// (`electionId`, `address`, `key`) override same-named entries when the
/// request is built; the caller's set is never mutated.
///
/// # Example
///
/// ```rust,ignore
/// use civic_sdk::api::QueryOptions;
///
/// let options = QueryOptions::new()
///     .param("officialOnly", true)
///     .param("levels", "country");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value under the same name.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `fixed` pairs onto a copy of these options.
    ///
    /// Fixed pairs win on name collision. `self` is left untouched.
    pub(crate) fn merged<I, K, V>(&self, fixed: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let mut params = self.params.clone();
        for (name, value) in fixed {
            params.insert(name.into(), value.to_string());
        }
        Self { params }
    }

    /// Serialize to a `name=value&…` query string, percent-encoding every
    /// name and value.
    pub(crate) fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
