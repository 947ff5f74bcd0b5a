//! `dgt seed` — load the bundled sample dataset.

use serde::Serialize;

use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::output;

#[derive(Serialize)]
struct SeedSummary {
    companies: usize,
    agencies: usize,
    opportunities: usize,
}

/// Insert the sample catalog. Re-running is a no-op for rows that
/// already exist.
///
/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(svc: &GateService, format: OutputFormat) -> anyhow::Result<()> {
    let (companies, agencies, opportunities) = svc.seed_sample_data().await?;
    output::output(
        &SeedSummary {
            companies,
            agencies,
            opportunities,
        },
        format,
    )
}
