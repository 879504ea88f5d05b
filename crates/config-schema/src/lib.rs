//! Config document model for ocprobe.
//!
//! This crate defines the fixed layout of an OpenCore EFI bundle,
//! the loaded `config.plist` document, and the entries declared in it.

pub mod document;
pub mod entry;
pub mod layout;

pub use document::ConfigDocument;
pub use entry::{Entry, ExpectedPath, FileEntry, KextEntry};
pub use layout::{Collection, CONFIG_FILE, OC_DIR, PREREQUISITES};
