//! Dashboard aggregation — derived, read-only counts.

use gate_core::entities::DashboardCounts;
use gate_core::enums::RankLabel;

use crate::error::StoreError;
use crate::service::GateService;

impl GateService {
    /// Count opportunities per rank and total recorded connections.
    ///
    /// Ranks with zero opportunities report 0, not absence. Pure function
    /// over the two stores; holds no state of its own.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn dashboard_counts(&self) -> Result<DashboardCounts, StoreError> {
        let mut by_rank = [0_i64; RankLabel::ALL.len()];

        let mut rows = self
            .db()
            .query(
                "SELECT need_level, COUNT(*) FROM opportunities GROUP BY need_level",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let label = row.get::<String>(0)?;
            let count = row.get::<i64>(1)?;
            if let Some(pos) = RankLabel::ALL.iter().position(|r| r.as_str() == label) {
                by_rank[pos] = count;
            }
        }

        let mut rows = self
            .db()
            .query("SELECT COUNT(*) FROM connections", ())
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let total_connections = row.get::<i64>(0)?;

        Ok(DashboardCounts {
            rank_a: by_rank[0],
            rank_b: by_rank[1],
            rank_c: by_rank[2],
            total_connections,
        })
    }
}
