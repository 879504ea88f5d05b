//! Structured results of a validation run.

use ocprobe_common::Timestamp;
use ocprobe_config_schema::Collection;
use serde::Serialize;
use std::path::PathBuf;

/// Whether a checked path was found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Exists,
    Missing,
}

/// One existence check performed for an enabled entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCheck {
    /// Text shown in the report for this path.
    pub display: String,
    /// Location relative to the bundle root.
    pub path: PathBuf,
    pub outcome: Outcome,
    /// True for paths inside a kext bundle.
    pub nested: bool,
}

impl PathCheck {
    pub fn is_missing(&self) -> bool {
        self.outcome == Outcome::Missing
    }
}

/// What happened to a single config entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Finding {
    /// Entry is disabled; nothing was checked.
    Skipped { label: String, comment: String },
    /// Entry is enabled and each of its paths was checked.
    Checked {
        label: String,
        comment: String,
        checks: Vec<PathCheck>,
    },
}

impl Finding {
    /// Number of missing paths recorded by this finding.
    pub fn issues(&self) -> usize {
        match self {
            Finding::Skipped { .. } => 0,
            Finding::Checked { checks, .. } => checks.iter().filter(|c| c.is_missing()).count(),
        }
    }
}

/// Findings and issue count for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub collection: Collection,
    pub findings: Vec<Finding>,
    pub issues: usize,
}

impl PassReport {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            findings: Vec::new(),
            issues: 0,
        }
    }

    pub fn record(&mut self, finding: Finding) {
        self.issues += finding.issues();
        self.findings.push(finding);
    }

    /// True when the collection declared no entries at all.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// How the final issue count should be phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Clean,
    Single,
    Multiple(usize),
}

/// Outcome of a complete run over all four collections.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub checked_at: Timestamp,
    pub passes: Vec<PassReport>,
    pub issues: usize,
}

impl ValidationReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            checked_at: Timestamp::now(),
            passes: Vec::new(),
            issues: 0,
        }
    }

    /// Fold a finished pass into the run total.
    pub fn merge(&mut self, pass: PassReport) {
        self.issues += pass.issues;
        self.passes.push(pass);
    }

    pub fn pass(&self, collection: Collection) -> Option<&PassReport> {
        self.passes.iter().find(|p| p.collection == collection)
    }

    pub fn summary(&self) -> Summary {
        match self.issues {
            0 => Summary::Clean,
            1 => Summary::Single,
            n => Summary::Multiple(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(outcome: Outcome) -> PathCheck {
        PathCheck {
            display: "x".to_string(),
            path: PathBuf::from("EFI/OC/x"),
            outcome,
            nested: false,
        }
    }

    #[test]
    fn test_skipped_finding_has_no_issues() {
        let finding = Finding::Skipped {
            label: "SSDT-X.aml".to_string(),
            comment: "x".to_string(),
        };
        assert_eq!(finding.issues(), 0);
    }

    #[test]
    fn test_pass_counts_missing_checks() {
        let mut pass = PassReport::new(Collection::Kexts);
        assert!(pass.is_empty());

        pass.record(Finding::Checked {
            label: "Lilu.kext".to_string(),
            comment: String::new(),
            checks: vec![check(Outcome::Exists), check(Outcome::Missing), check(Outcome::Missing)],
        });
        assert_eq!(pass.issues, 2);
        assert!(!pass.is_empty());
    }

    #[test]
    fn test_summary_phrasing() {
        let mut report = ValidationReport::new(PathBuf::from("."));
        assert_eq!(report.summary(), Summary::Clean);

        let mut pass = PassReport::new(Collection::Acpi);
        pass.issues = 1;
        report.merge(pass);
        assert_eq!(report.summary(), Summary::Single);

        let mut pass = PassReport::new(Collection::Tools);
        pass.issues = 2;
        report.merge(pass);
        assert_eq!(report.summary(), Summary::Multiple(3));
        assert!(report.pass(Collection::Tools).is_some());
        assert!(report.pass(Collection::Drivers).is_none());
    }

    #[test]
    fn test_finding_json_shape() {
        let finding = Finding::Skipped {
            label: "a.efi".to_string(),
            comment: "c".to_string(),
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["label"], "a.efi");
    }
}
