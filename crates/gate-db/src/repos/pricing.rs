//! Pricing repository — the rank → (fee, incentive) table.
//!
//! Pricing lives in the database and persists across restarts; the migration
//! seeds the documented defaults on first run. Connections copy amounts at
//! creation time, so later edits never rewrite history.

use gate_core::entities::PricingEntry;
use gate_core::enums::{RankLabel, Role};

use crate::error::StoreError;
use crate::helpers::parse_enum;
use crate::service::GateService;

fn row_to_pricing(row: &libsql::Row) -> Result<PricingEntry, StoreError> {
    Ok(PricingEntry {
        rank: parse_enum(&row.get::<String>(0)?)?,
        fee_amount: row.get::<i64>(1)?,
        incentive_amount: row.get::<i64>(2)?,
    })
}

impl GateService {
    /// Look up the fee and incentive for a rank.
    ///
    /// A single SELECT reads both amounts, so a concurrent `set_pricing`
    /// can never tear the pair mid-read.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the rank has no pricing entry.
    pub async fn get_pricing(&self, rank: RankLabel) -> Result<PricingEntry, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT need_level, fee_amount, incentive_amount FROM pricing WHERE need_level = ?1",
                [rank.as_str()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| StoreError::Configuration(rank.as_str().to_string()))?;
        row_to_pricing(&row)
    }

    /// List all pricing entries, ordered by rank.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn list_pricing(&self) -> Result<Vec<PricingEntry>, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT need_level, fee_amount, incentive_amount FROM pricing ORDER BY need_level",
                (),
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_pricing(&row)?);
        }
        Ok(entries)
    }

    /// Set the fee and incentive for a rank. Admin only.
    ///
    /// Validation happens before any write: on failure the table is left
    /// unchanged. The write itself is a single atomic upsert.
    ///
    /// # Errors
    ///
    /// Returns `Permission` for non-Admin callers, `Validation` for negative
    /// amounts, `StoreError` on storage failure.
    pub async fn set_pricing(
        &self,
        rank: RankLabel,
        fee_amount: i64,
        incentive_amount: i64,
        role: Role,
    ) -> Result<PricingEntry, StoreError> {
        if role != Role::Admin {
            return Err(StoreError::Permission(format!(
                "set_pricing requires the admin role, got {role}"
            )));
        }
        if fee_amount < 0 {
            return Err(StoreError::Validation(format!(
                "fee_amount must be non-negative, got {fee_amount}"
            )));
        }
        if incentive_amount < 0 {
            return Err(StoreError::Validation(format!(
                "incentive_amount must be non-negative, got {incentive_amount}"
            )));
        }

        self.db()
            .execute(
                "INSERT INTO pricing (need_level, fee_amount, incentive_amount)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(need_level) DO UPDATE SET
                     fee_amount = excluded.fee_amount,
                     incentive_amount = excluded.incentive_amount",
                libsql::params![rank.as_str(), fee_amount, incentive_amount],
            )
            .await?;

        tracing::info!(rank = %rank, fee_amount, incentive_amount, "pricing updated");

        Ok(PricingEntry {
            rank,
            fee_amount,
            incentive_amount,
        })
    }
}
