//! Loaded `config.plist` document.

use crate::layout::Collection;
use ocprobe_common::{Error, Result};
use plist::Value;
use std::path::Path;
use tracing::debug;

/// Read-only view of a parsed config property list.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Parse a binary or XML property list from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let root = Value::from_file(path)
            .map_err(|e| Error::MalformedDocument(format!("{}: {}", path.display(), e)))?;
        debug!("Parsed config document {:?}", path);
        Self::from_value(root)
    }

    /// Wrap an in-memory value. The root must be a dictionary.
    pub fn from_value(root: Value) -> Result<Self> {
        if root.as_dictionary().is_none() {
            return Err(Error::MalformedDocument(
                "root element is not a dictionary".to_string(),
            ));
        }
        Ok(Self { root })
    }

    /// Follow `keys` through nested dictionaries.
    pub fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .try_fold(&self.root, |node, key| node.as_dictionary()?.get(key))
    }

    /// Entries of `collection`, in stored order.
    ///
    /// A missing key anywhere along the path yields an empty slice; a key
    /// holding the wrong kind of value is a malformed document.
    pub fn collection(&self, collection: Collection) -> Result<&[Value]> {
        let keys = collection.key_path();
        let mut node = &self.root;

        for (depth, key) in keys.iter().enumerate() {
            let dict = node.as_dictionary().ok_or_else(|| {
                Error::MalformedDocument(format!("{} must be a dictionary", keys[..depth].join(".")))
            })?;
            match dict.get(key) {
                Some(child) => node = child,
                None => return Ok(&[]),
            }
        }

        node.as_array().map(Vec::as_slice).ok_or_else(|| {
            Error::MalformedDocument(format!("{} must be an array", keys.join(".")))
        })
    }
}
