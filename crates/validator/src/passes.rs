//! The four validation passes.

use crate::finding::{Finding, Outcome, PassReport, PathCheck, ValidationReport};
use crate::load::ValidatorConfig;
use ocprobe_common::Result;
use ocprobe_config_schema::{Collection, ConfigDocument, Entry};
use std::path::Path;
use tracing::{debug, info};

/// Receives findings as they are produced.
///
/// Findings stream through the sink before the next entry is parsed, so a
/// malformed entry aborts the run after everything ahead of it was reported.
pub trait ReportSink {
    fn begin_pass(&mut self, _collection: Collection) -> Result<()> {
        Ok(())
    }

    fn finding(&mut self, _finding: &Finding) -> Result<()> {
        Ok(())
    }

    fn end_pass(&mut self, _pass: &PassReport) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, _report: &ValidationReport) -> Result<()> {
        Ok(())
    }
}

/// Discards everything.
impl ReportSink for () {}

/// Run one pass over `collection`, returning its own findings and count.
pub fn validate_pass<S: ReportSink + ?Sized>(
    document: &ConfigDocument,
    root: &Path,
    collection: Collection,
    sink: &mut S,
) -> Result<PassReport> {
    sink.begin_pass(collection)?;

    let mut pass = PassReport::new(collection);
    for (index, value) in document.collection(collection)?.iter().enumerate() {
        let entry = Entry::parse(collection, index, value)?;
        let finding = check_entry(root, &entry);
        sink.finding(&finding)?;
        pass.record(finding);
    }

    debug!(
        "{} pass: {} entries, {} issues",
        collection,
        pass.findings.len(),
        pass.issues
    );
    sink.end_pass(&pass)?;
    Ok(pass)
}

/// Run all passes in order and total their issues.
pub fn validate<S: ReportSink + ?Sized>(
    document: &ConfigDocument,
    config: &ValidatorConfig,
    sink: &mut S,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(config.root.clone());

    for collection in Collection::ALL {
        let pass = validate_pass(document, &config.root, collection, sink)?;
        report.merge(pass);
    }

    info!("Validation finished with {} issue(s)", report.issues);
    sink.finish(&report)?;
    Ok(report)
}

fn check_entry(root: &Path, entry: &Entry) -> Finding {
    if !entry.enabled() {
        return Finding::Skipped {
            label: entry.label().to_string(),
            comment: entry.comment().to_string(),
        };
    }

    let checks = entry
        .expected_paths()
        .into_iter()
        .map(|expected| {
            let outcome = if root.join(&expected.relative).exists() {
                Outcome::Exists
            } else {
                Outcome::Missing
            };
            debug!("{:?}: {:?}", expected.relative, outcome);
            PathCheck {
                display: expected.display,
                path: expected.relative,
                outcome,
                nested: expected.nested,
            }
        })
        .collect();

    Finding::Checked {
        label: entry.label().to_string(),
        comment: entry.comment().to_string(),
        checks,
    }
}
