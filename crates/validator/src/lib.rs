//! OCProbe Validator - cross-check an EFI bundle's config against its files.

pub mod finding;
pub mod load;
pub mod passes;
pub mod render;

#[cfg(test)]
mod testutil;

pub use finding::{Finding, Outcome, PassReport, PathCheck, Summary, ValidationReport};
pub use load::{check_prerequisites, load_bundle, ValidatorConfig};
pub use passes::{validate, validate_pass, ReportSink};
pub use render::{render_json, Palette, TextRenderer};

/// Process exit status for a finished run: 0 only when nothing is missing.
pub fn exit_code(report: &ValidationReport) -> i32 {
    if report.issues == 0 {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_tracks_issue_count() {
        let mut report = ValidationReport::new(PathBuf::from("."));
        assert_eq!(exit_code(&report), 0);
        report.issues = 4;
        assert_eq!(exit_code(&report), 1);
    }
}
