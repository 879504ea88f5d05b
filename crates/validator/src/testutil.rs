//! Bundle fixtures for unit tests.

use crate::ValidatorConfig;
use ocprobe_config_schema::Collection;
use plist::{Dictionary, Value};
use std::path::Path;
use tempfile::TempDir;

/// A temporary bundle root with `EFI/OC` already created.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("EFI/OC")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ValidatorConfig {
        ValidatorConfig::new(self.root())
    }

    /// Write `config.plist` declaring the given collections.
    pub fn write_config(&self, collections: &[(Collection, Vec<Value>)]) {
        let mut root = Dictionary::new();
        for (collection, entries) in collections {
            let [section, key] = collection.key_path();
            let mut inner = Dictionary::new();
            inner.insert(key.to_string(), Value::Array(entries.clone()));
            root.insert(section.to_string(), Value::Dictionary(inner));
        }
        Value::Dictionary(root)
            .to_file_xml(self.root().join("EFI/OC/config.plist"))
            .unwrap();
    }

    pub fn write(&self, relative: &str, content: &[u8]) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn touch(&self, relative: &str) {
        self.write(relative, b"");
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.root().join(relative)).unwrap();
    }
}

pub fn file_entry(enabled: bool, comment: &str, path: &str) -> Value {
    let mut d = Dictionary::new();
    d.insert("Enabled".to_string(), Value::from(enabled));
    d.insert("Comment".to_string(), Value::from(comment));
    d.insert("Path".to_string(), Value::from(path));
    Value::Dictionary(d)
}

pub fn kext_entry(
    enabled: bool,
    comment: &str,
    bundle: &str,
    executable: &str,
    plist_path: &str,
) -> Value {
    let mut d = Dictionary::new();
    d.insert("Enabled".to_string(), Value::from(enabled));
    d.insert("Comment".to_string(), Value::from(comment));
    d.insert("BundlePath".to_string(), Value::from(bundle));
    d.insert("ExecutablePath".to_string(), Value::from(executable));
    d.insert("PlistPath".to_string(), Value::from(plist_path));
    Value::Dictionary(d)
}
