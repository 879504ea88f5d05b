//! Entries declared in the config collections.

use crate::layout::Collection;
use ocprobe_common::{Error, Result};
use plist::{Dictionary, Value};
use std::path::{Path, PathBuf};

/// An ACPI table, UEFI driver or tool: one file under the collection's base dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub enabled: bool,
    pub comment: String,
    pub path: String,
}

/// A kernel extension bundle with optional inner paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KextEntry {
    pub enabled: bool,
    pub comment: String,
    pub bundle_path: String,
    /// `None` when the key is absent or empty.
    pub executable_path: Option<String>,
    /// `None` when the key is absent or empty.
    pub plist_path: Option<String>,
}

/// A parsed entry of any collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(Collection, FileEntry),
    Kext(KextEntry),
}

/// A path an enabled entry expects to find on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedPath {
    /// What the report shows for this path.
    pub display: String,
    /// Location relative to the bundle root.
    pub relative: PathBuf,
    /// True for paths inside a kext bundle.
    pub nested: bool,
}

impl Entry {
    /// Extract entry `index` of `collection` from its plist value.
    pub fn parse(collection: Collection, index: usize, value: &Value) -> Result<Self> {
        let fields = Fields::new(collection, index, value)?;
        let enabled = fields.required_bool("Enabled")?;
        let comment = fields.required_string("Comment")?;

        match collection {
            Collection::Kexts => Ok(Entry::Kext(KextEntry {
                enabled,
                comment,
                bundle_path: fields.required_string("BundlePath")?,
                executable_path: fields.optional_string("ExecutablePath")?,
                plist_path: fields.optional_string("PlistPath")?,
            })),
            _ => Ok(Entry::File(
                collection,
                FileEntry {
                    enabled,
                    comment,
                    path: fields.required_string("Path")?,
                },
            )),
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Entry::File(_, e) => e.enabled,
            Entry::Kext(e) => e.enabled,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            Entry::File(_, e) => &e.comment,
            Entry::Kext(e) => &e.comment,
        }
    }

    /// The `Path` or `BundlePath` value identifying the entry in reports.
    pub fn label(&self) -> &str {
        match self {
            Entry::File(_, e) => &e.path,
            Entry::Kext(e) => &e.bundle_path,
        }
    }

    /// Paths to check for this entry, in report order.
    ///
    /// File entries yield exactly one path. Kexts yield the bundle directory
    /// followed by whichever inner paths are declared.
    pub fn expected_paths(&self) -> Vec<ExpectedPath> {
        match self {
            Entry::File(collection, e) => {
                vec![ExpectedPath {
                    display: e.path.clone(),
                    relative: join_relative(Path::new(collection.base_dir()), &e.path),
                    nested: false,
                }]
            }
            Entry::Kext(e) => {
                let bundle = join_relative(Path::new(Collection::Kexts.base_dir()), &e.bundle_path);
                let mut paths = vec![ExpectedPath {
                    display: bundle.display().to_string(),
                    relative: bundle.clone(),
                    nested: false,
                }];
                for inner in [&e.executable_path, &e.plist_path].into_iter().flatten() {
                    paths.push(ExpectedPath {
                        display: inner.clone(),
                        relative: join_relative(&bundle, inner),
                        nested: true,
                    });
                }
                paths
            }
        }
    }
}

/// Join a config path under `base`, never escaping it through a leading slash.
fn join_relative(base: &Path, relative: &str) -> PathBuf {
    base.join(relative.trim_start_matches('/'))
}

struct Fields<'a> {
    collection: Collection,
    index: usize,
    dict: &'a Dictionary,
}

impl<'a> Fields<'a> {
    fn new(collection: Collection, index: usize, value: &'a Value) -> Result<Self> {
        let dict = value.as_dictionary().ok_or_else(|| {
            Error::MalformedDocument(format!(
                "{collection} entry #{index} must be a dictionary"
            ))
        })?;
        Ok(Self {
            collection,
            index,
            dict,
        })
    }

    fn missing(&self, field: &str) -> Error {
        Error::MissingField {
            collection: self.collection.label().to_string(),
            index: self.index,
            field: field.to_string(),
        }
    }

    fn required_bool(&self, field: &str) -> Result<bool> {
        let value = self.dict.get(field).ok_or_else(|| self.missing(field))?;
        value
            .as_boolean()
            .ok_or_else(|| Error::field_type(self.collection.label(), self.index, field, "boolean"))
    }

    fn required_string(&self, field: &str) -> Result<String> {
        let value = self.dict.get(field).ok_or_else(|| self.missing(field))?;
        value
            .as_string()
            .map(str::to_string)
            .ok_or_else(|| Error::field_type(self.collection.label(), self.index, field, "string"))
    }

    fn optional_string(&self, field: &str) -> Result<Option<String>> {
        match self.dict.get(field) {
            None => Ok(None),
            Some(value) => {
                let s = value.as_string().ok_or_else(|| {
                    Error::field_type(self.collection.label(), self.index, field, "string")
                })?;
                Ok((!s.is_empty()).then(|| s.to_string()))
            }
        }
    }
}
