use std::collections::HashMap;

use crate::error::RouteTableError;
use crate::routes::{DEFAULT_KEY, ROUTES};

/// Immutable mapping from an identifier to the file path served for it
///
/// Construction guarantees the default entry exists, so lookups never fail.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<String, String>,
    default_path: String,
}

impl RouteTable {
    /// Build a table from `(key, path)` pairs, rejecting duplicate keys and
    /// tables without a default entry.
    pub fn new<I, K, V>(entries: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, path) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(RouteTableError::DuplicateKey(key));
            }
            map.insert(key, path.into());
        }

        let default_path = map
            .get(DEFAULT_KEY)
            .cloned()
            .ok_or(RouteTableError::MissingDefault)?;

        Ok(RouteTable {
            entries: map,
            default_path,
        })
    }

    /// The built-in table from [`ROUTES`].
    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(ROUTES.iter().copied())
    }

    /// Look up `key`, falling back to the default path when it is not present.
    /// Matching is exact and case-sensitive.
    pub fn resolve(&self, key: &str) -> &str {
        match self.entries.get(key) {
            Some(path) => path,
            None => {
                tracing::debug!("No route for key '{}', using default", key);
                &self.default_path
            }
        }
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    pub fn route_count(&self) -> usize {
        self.entries.len()
    }
}

/// Resolve `key` against `table`.
pub fn resolve<'a>(key: &str, table: &'a RouteTable) -> &'a str {
    table.resolve(key)
}
