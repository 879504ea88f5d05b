//! Fixed directory layout of an EFI bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level EFI directory.
pub const EFI_DIR: &str = "EFI";

/// OpenCore directory holding the config and asset folders.
pub const OC_DIR: &str = "EFI/OC";

/// The configuration property list.
pub const CONFIG_FILE: &str = "EFI/OC/config.plist";

/// Markers that must exist, in the order they are checked.
pub const PREREQUISITES: [&str; 3] = [EFI_DIR, OC_DIR, CONFIG_FILE];

/// One of the four entry collections declared in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Acpi,
    Drivers,
    Kexts,
    Tools,
}

impl Collection {
    /// All collections, in pass order.
    pub const ALL: [Collection; 4] = [
        Collection::Acpi,
        Collection::Drivers,
        Collection::Kexts,
        Collection::Tools,
    ];

    /// Key path of the collection array inside the document.
    pub fn key_path(&self) -> [&'static str; 2] {
        match self {
            Collection::Acpi => ["ACPI", "Add"],
            Collection::Drivers => ["UEFI", "Drivers"],
            Collection::Kexts => ["Kernel", "Add"],
            Collection::Tools => ["Misc", "Tools"],
        }
    }

    /// Directory, relative to the bundle root, that entry paths resolve against.
    pub fn base_dir(&self) -> &'static str {
        match self {
            Collection::Acpi => "EFI/OC/ACPI",
            Collection::Drivers => "EFI/OC/Drivers",
            Collection::Kexts => "EFI/OC/Kexts",
            Collection::Tools => "EFI/OC/Tools",
        }
    }

    /// Section label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Acpi => "ACPI",
            Collection::Drivers => "Drivers",
            Collection::Kexts => "Kexts",
            Collection::Tools => "Tools",
        }
    }

    /// Plural noun for the "no entries" notice.
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Acpi => "ACPI",
            Collection::Drivers => "drivers",
            Collection::Kexts => "kexts",
            Collection::Tools => "tools",
        }
    }

    /// Name of the field holding the entry's primary path.
    pub fn path_field(&self) -> &'static str {
        match self {
            Collection::Kexts => "BundlePath",
            _ => "Path",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
