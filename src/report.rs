//! Step reports and the single RPC call that records them.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::ReportError;
use crate::ports::rpc::{RpcRequest, RpcResponse, RpcTransport};

/// Stored procedure that records a completed step.
pub const PROCEDURE: &str = "mark_step_completed";

/// A completed step, serialized with the procedure's parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Phase the step belongs to.
    #[serde(rename = "p_phase")]
    pub phase: String,
    /// Title of the step.
    #[serde(rename = "p_step_name")]
    pub step_name: String,
    /// Free-text notes; empty when none were given.
    #[serde(rename = "p_notes")]
    pub notes: String,
}

impl StepReport {
    /// Builds a report, rejecting a missing or empty phase or step name.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Usage`] when `phase` or `step_name` is absent or empty.
    pub fn new(
        phase: Option<String>,
        step_name: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ReportError> {
        let usage = || ReportError::Usage(crate::cli::USAGE.to_string());
        let phase = phase.filter(|p| !p.is_empty()).ok_or_else(usage)?;
        let step_name = step_name.filter(|s| !s.is_empty()).ok_or_else(usage)?;
        Ok(Self { phase, step_name, notes: notes.unwrap_or_default() })
    }

    /// JSON request body for the procedure.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Request that records this step against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Encode`] if the body cannot be serialized.
    pub fn to_request(&self, config: &Config) -> Result<RpcRequest, ReportError> {
        Ok(RpcRequest {
            url: config.rpc_url(PROCEDURE),
            secret_key: config.secret_key.clone(),
            body: self.to_json()?,
        })
    }
}

/// How the backend answered a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// 2xx status.
    Completed(RpcResponse),
    /// Any other status.
    Rejected(RpcResponse),
}

impl CallOutcome {
    /// The underlying response.
    #[must_use]
    pub fn response(&self) -> &RpcResponse {
        match self {
            Self::Completed(response) | Self::Rejected(response) => response,
        }
    }
}

/// Sends `report` once and classifies the response.
///
/// # Errors
///
/// Returns [`ReportError::Transport`] if the call does not complete, or
/// [`ReportError::Encode`] if the body cannot be serialized.
pub async fn send(
    config: &Config,
    report: &StepReport,
    transport: &dyn RpcTransport,
) -> Result<CallOutcome, ReportError> {
    let request = report.to_request(config)?;
    debug!(url = %request.url, phase = %report.phase, step = %report.step_name, "calling rpc");

    let response =
        transport.call(&request).await.map_err(|e| ReportError::Transport(e.to_string()))?;
    debug!(status = response.status, "rpc answered");

    if response.is_success() {
        Ok(CallOutcome::Completed(response))
    } else {
        Ok(CallOutcome::Rejected(response))
    }
}

/// Sends `report` and prints the outcome.
///
/// Status and body go to `out`; failure messages go to `err`.
///
/// # Errors
///
/// Returns [`ReportError::Rejected`] for a non-success status and
/// [`ReportError::Transport`] when the call does not complete. Both have
/// already been printed to `err` when returned.
pub async fn report_step(
    config: &Config,
    report: &StepReport,
    transport: &dyn RpcTransport,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), ReportError> {
    let outcome = match send(config, report, transport).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            return Err(e);
        }
    };

    let response = outcome.response();
    let _ = writeln!(out, "Status: {} {}", response.status, response.status_text);
    if !response.body.is_empty() {
        let _ = writeln!(out, "Response: {}", response.body);
    }

    match outcome {
        CallOutcome::Completed(_) => {
            let _ = writeln!(out, "\u{2705} Step marked as completed!");
            Ok(())
        }
        CallOutcome::Rejected(response) => {
            let _ = writeln!(err, "\u{274C} Failed to mark step");
            Err(ReportError::Rejected {
                status: response.status,
                status_text: response.status_text,
            })
        }
    }
}
