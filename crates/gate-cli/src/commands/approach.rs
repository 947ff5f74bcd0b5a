//! `dgt approach` — record a connection request.
//!
//! Always acts in the agency role: the approach operation is agency-only
//! and the service enforces it.

use gate_core::entities::ConnectionView;
use gate_core::enums::Role;
use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::cli::root_commands::ApproachArgs;
use crate::output;

/// # Errors
///
/// Propagates service and serialization errors.
pub async fn handle(
    args: &ApproachArgs,
    svc: &GateService,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let connection = svc
        .approach(&args.opportunity_id, &args.agency, Role::Agency)
        .await?;
    // Agency-facing output: the incentive amount stays internal.
    let view = ConnectionView::from_connection(connection, false);
    output::output(&view, format)
}
