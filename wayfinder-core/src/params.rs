//! Ordered route parameters.

/// Named parameter values, kept in insertion order.
///
/// Captures are inserted in template order, followed by any defaults in the
/// order they were declared on the route. Route parameter sets are small, so
/// lookups are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert or replace a value, keeping its position on replace.
    ///
    /// Returns the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Insert a value only if `name` is absent. Returns `true` if inserted.
    pub fn insert_if_absent(&mut self, name: &str, value: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name.to_owned(), value.to_owned()));
        true
    }

    /// Remove a value by name.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterate over parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new();
        params.insert("controller", "blog");
        params.insert("action", "show");
        assert_eq!(params.insert("controller", "news"), Some("blog".to_string()));

        let names: Vec<_> = params.names().collect();
        assert_eq!(names, ["controller", "action"]);
        assert_eq!(params.get("controller"), Some("news"));
    }

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let mut params: Params = [("action", "show")].into_iter().collect();
        assert!(!params.insert_if_absent("action", "index"));
        assert!(params.insert_if_absent("format", "html"));

        assert_eq!(params.get("action"), Some("show"));
        assert_eq!(params.get("format"), Some("html"));
    }

    #[test]
    fn test_remove() {
        let mut params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);
        assert!(!params.contains("a"));
    }
}
