//! `dgt companies` / `dgt agencies` — catalog listings.

use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle_companies(svc: &GateService, format: OutputFormat) -> anyhow::Result<()> {
    let companies = svc.list_companies().await?;
    output::output(&companies, format)
}

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle_agencies(svc: &GateService, format: OutputFormat) -> anyhow::Result<()> {
    let agencies = svc.list_agencies().await?;
    output::output(&agencies, format)
}
