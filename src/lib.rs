//! Core library entry for the `mark-step` CLI.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ports;
pub mod report;

#[cfg(test)]
mod testing;

use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::error::ReportError;
use crate::ports::RpcTransport;
use crate::report::StepReport;

/// Run the CLI with the provided arguments.
///
/// `resolve_config` runs only after the arguments are accepted, so a usage
/// error wins over missing configuration. Results go to `out` and all
/// failure messages to `err`, so a caller only needs to map the result to
/// an exit code.
///
/// # Errors
///
/// Returns an error for missing arguments, missing configuration, a
/// non-success response, or a failed call. No call is made for the first two.
pub async fn run<I, T, F>(
    args: I,
    resolve_config: F,
    transport: &dyn RpcTransport,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), ReportError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    F: FnOnce() -> Result<Config, ReportError>,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{e}");
            return Ok(());
        }
        Err(e) => {
            let _ = write!(err, "{e}");
            return Err(ReportError::Usage(e.to_string()));
        }
    };

    let report = StepReport::new(cli.phase, cli.title, cli.notes).inspect_err(|e| {
        let _ = writeln!(err, "{e}");
    })?;

    let config = resolve_config().inspect_err(|e| {
        let _ = writeln!(err, "Error: {e}");
    })?;

    run_with_config(&config, &report, transport, out, err).await
}

/// Records `report` using an already resolved configuration.
///
/// # Errors
///
/// See [`report::report_step`].
pub async fn run_with_config(
    config: &Config,
    report: &StepReport,
    transport: &dyn RpcTransport,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), ReportError> {
    report::report_step(config, report, transport, out, err).await
}
