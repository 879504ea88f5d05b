//! Report rendering.

use crate::finding::{Finding, Outcome, PassReport, PathCheck, Summary, ValidationReport};
use crate::passes::ReportSink;
use ocprobe_common::Result;
use ocprobe_config_schema::Collection;
use std::io::Write;

const HEADER: &str = "\x1b[95m";
const CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[92m";
const WARNING: &str = "\x1b[93m";
const FAIL: &str = "\x1b[91m";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// ANSI styling that can be switched off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.enabled {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Startup banner.
pub fn banner() -> &'static str {
    r#"
  ___   ___ ___          _
 / _ \ / __| _ \_ _ ___| |__  ___
| (_) | (__|  _/ '_/ _ \ '_ \/ -_)
 \___/ \___|_| |_| \___/_.__/\___|

  OpenCore EFI bundle validator
"#
}

/// Line-oriented human report, written as findings arrive.
pub struct TextRenderer<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the banner in header colour.
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.palette.paint(HEADER, banner()))?;
        Ok(())
    }

    fn entry_line(&mut self, verb: &str, style: &str, label: &str, comment: &str) -> Result<()> {
        write!(
            self.out,
            "{} {} {}",
            verb,
            self.palette.paint(style, label),
            self.palette.paint(UNDERLINE, &format!("({comment})"))
        )?;
        Ok(())
    }

    fn check_line(&mut self, check: &PathCheck) -> Result<()> {
        let indent = if check.nested { "\t\t" } else { "\t" };
        let (style, verdict) = match check.outcome {
            Outcome::Exists => (GREEN, "exists"),
            Outcome::Missing => (FAIL, "does not exist"),
        };
        writeln!(
            self.out,
            "{indent}- {} {verdict}",
            self.palette.paint(style, &check.display)
        )?;
        Ok(())
    }
}

impl<W: Write> ReportSink for TextRenderer<W> {
    fn begin_pass(&mut self, collection: Collection) -> Result<()> {
        let title = format!("---CHECK {}---", collection.label());
        writeln!(self.out, "\n{}", self.palette.paint(HEADER, &title))?;
        Ok(())
    }

    fn finding(&mut self, finding: &Finding) -> Result<()> {
        match finding {
            Finding::Skipped { label, comment } => {
                self.entry_line("Skipping", WARNING, label, comment)?;
                writeln!(self.out, " as it's disabled")?;
            }
            Finding::Checked {
                label,
                comment,
                checks,
            } => {
                self.entry_line("Checking", CYAN, label, comment)?;
                writeln!(self.out)?;
                for check in checks {
                    self.check_line(check)?;
                }
            }
        }
        Ok(())
    }

    fn end_pass(&mut self, pass: &PassReport) -> Result<()> {
        if pass.is_empty() {
            let notice = format!("There are no {}", pass.collection.noun());
            writeln!(self.out, "\t{}", self.palette.paint(WARNING, &notice))?;
        }
        Ok(())
    }

    fn finish(&mut self, report: &ValidationReport) -> Result<()> {
        let line = match report.summary() {
            Summary::Clean => self.palette.paint(GREEN, "No issues found"),
            Summary::Single => self.palette.paint(FAIL, "Found 1 issue requiring attention."),
            Summary::Multiple(n) => self
                .palette
                .paint(FAIL, &format!("Found {n} issues requiring attention.")),
        };
        writeln!(self.out, "\n{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable report.
pub fn render_json(report: &ValidationReport) -> Result<String> {
    let document = serde_json::json!({
        "summary": {
            "issues": report.issues,
            "passed": report.issues == 0,
            "checked_at": report.checked_at,
            "root": report.root,
        },
        "passes": report.passes,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
