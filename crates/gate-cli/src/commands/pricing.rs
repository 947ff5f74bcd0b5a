//! `dgt pricing` — inspect and update the rank pricing table.

use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::cli::root_commands::PricingCommands;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(
    action: &PricingCommands,
    svc: &GateService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        PricingCommands::List => {
            let entries = svc.list_pricing().await?;
            output::output(&entries, format)
        }
        PricingCommands::Get { rank } => {
            let entry = svc.get_pricing((*rank).into()).await?;
            output::output(&entry, format)
        }
        PricingCommands::Set {
            rank,
            fee,
            incentive,
            role,
        } => {
            let entry = svc
                .set_pricing((*rank).into(), *fee, *incentive, (*role).into())
                .await?;
            output::output(&entry, format)
        }
    }
}
