//! `dgt dashboard` — opportunity counts per rank plus ledger size.

use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(svc: &GateService, format: OutputFormat) -> anyhow::Result<()> {
    let counts = svc.dashboard_counts().await?;
    output::output(&counts, format)
}
