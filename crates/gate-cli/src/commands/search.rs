//! `dgt search` — the catalog query with role-based redaction.

use gate_db::repos::search::SearchCriteria;
use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::cli::root_commands::SearchArgs;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(
    args: &SearchArgs,
    svc: &GateService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let criteria = SearchCriteria {
        region: args.region.clone(),
        industry: args.industry.clone(),
        rank: args.rank.map(Into::into),
        min_headcount: args.min_headcount,
        keyword: args.keyword.clone(),
    };

    let views = svc.search(&criteria, args.role.into()).await?;
    output::output(&views, format)
}
