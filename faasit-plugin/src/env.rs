use std::collections::HashMap;

/// Environment variables passed to provider plugins.
///
/// A key mapped to `None` is explicitly unset: commands run through the
/// plugin runtime will not inherit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVars {
    vars: HashMap<String, Option<String>>,
}

impl EnvironmentVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().map(|(k, v)| (k, Some(v))).collect()
    }

    /// The value of a variable, if it is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), Some(value.into()));
    }

    /// Mark a variable as explicitly unset.
    pub fn unset(&mut self, key: impl Into<String>) {
        self.vars.insert(key.into(), None);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for EnvironmentVars {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
