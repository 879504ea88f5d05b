//! OCProbe - check that every file an OpenCore config references is in the bundle.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ocprobe_validator::{
    exit_code, load_bundle, render_json, validate, Palette, TextRenderer, ValidationReport,
    ValidatorConfig,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ocprobe")]
#[command(
    author,
    version,
    about = "Validate that an OpenCore EFI bundle contains every file its config.plist references"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Bundle root (the directory containing EFI/)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable ANSI colours in the text report
    #[arg(long)]
    no_color: bool,

    /// Do not print the startup banner
    #[arg(long)]
    no_banner: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match run(&cli) {
        Ok(report) => {
            let code = exit_code(&report);
            debug!("Exiting with status {}", code);
            ExitCode::from(code as u8)
        }
        Err(e) => {
            let prefix = match e.downcast_ref::<ocprobe_common::Error>() {
                Some(inner) if inner.is_bundle_error() => "error",
                _ => "internal error",
            };
            eprintln!("{prefix}: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ValidationReport> {
    let config = ValidatorConfig::new(&cli.root);
    info!("Validating bundle at {:?}", config.root);

    match cli.format {
        Format::Text => {
            let mut renderer = TextRenderer::new(io::stdout().lock(), Palette::new(!cli.no_color));
            if !cli.no_banner {
                renderer.banner()?;
            }
            let document = load_bundle(&config)?;
            Ok(validate(&document, &config, &mut renderer)?)
        }
        Format::Json => {
            let document = load_bundle(&config)?;
            let report = validate(&document, &config, &mut ())?;
            println!(
                "{}",
                render_json(&report).context("Failed to serialize report")?
            );
            Ok(report)
        }
    }
}
