//! Load phase: bundle prerequisites and config parsing.

use ocprobe_common::{Error, Result};
use ocprobe_config_schema::{ConfigDocument, CONFIG_FILE, PREREQUISITES};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Directory containing the `EFI` folder.
    pub root: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ValidatorConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute or root-relative location of `config.plist`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// Fail with the first required marker missing under `root`.
pub fn check_prerequisites(root: &Path) -> Result<()> {
    for marker in PREREQUISITES {
        let path = root.join(marker);
        if !path.exists() {
            return Err(Error::MissingPrerequisite(marker.to_string()));
        }
        debug!("Found prerequisite {:?}", path);
    }
    Ok(())
}

/// Check prerequisites, then parse the bundle's config document.
pub fn load_bundle(config: &ValidatorConfig) -> Result<ConfigDocument> {
    check_prerequisites(&config.root)?;

    let path = config.config_path();
    info!("Loading config document {:?}", path);
    ConfigDocument::load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Fixture;

    #[test]
    fn test_missing_efi_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_bundle(&ValidatorConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, Error::MissingPrerequisite(ref m) if m == "EFI"));
    }

    #[test]
    fn test_missing_oc_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("EFI")).unwrap();
        let err = check_prerequisites(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "EFI/OC not found");
    }

    #[test]
    fn test_missing_config_file() {
        let fixture = Fixture::new();
        let err = load_bundle(&fixture.config()).unwrap_err();
        assert_eq!(err.to_string(), "EFI/OC/config.plist not found");
    }

    #[test]
    fn test_unparseable_config() {
        let fixture = Fixture::new();
        fixture.write("EFI/OC/config.plist", b"<plist><dict><key>");
        let err = load_bundle(&fixture.config()).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_loads_valid_bundle() {
        let fixture = Fixture::new();
        fixture.write_config(&[]);
        let document = load_bundle(&fixture.config()).unwrap();
        assert!(document.lookup(&["ACPI"]).is_none());
    }
}
