//! `dgt connections` — list ledger entries, newest first.

use gate_db::repos::connection::ConnectionFilter;
use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::cli::root_commands::ConnectionsArgs;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(
    args: &ConnectionsArgs,
    svc: &GateService,
    format: OutputFormat,
    default_limit: u32,
) -> anyhow::Result<()> {
    let filter = ConnectionFilter {
        agency_id: args.agency.clone(),
        opportunity_id: args.opportunity.clone(),
        status: args.status.map(Into::into),
        // 0 means unlimited.
        limit: match args.limit.unwrap_or(default_limit) {
            0 => None,
            n => Some(n),
        },
    };

    let views = svc.list_connections_for(&filter, args.role.into()).await?;
    output::output(&views, format)
}
