//! Connection repository — the append-only ledger of approaches.
//!
//! `approach` is the one stateful operation in the system: it copies the
//! current pricing for the opportunity's rank into a new `requested` row.
//! Rows are never updated or deleted here; the approval/rejection/billing
//! transitions documented on `ConnectionStatus` are not implemented yet.

use chrono::Utc;

use gate_core::entities::{Connection, ConnectionView};
use gate_core::enums::{ConnectionStatus, Role};
use gate_core::ids::PREFIX_CONNECTION;

use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::GateService;

/// Optional filters for ledger listings. All given filters apply
/// conjunctively.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFilter {
    pub agency_id: Option<String>,
    pub opportunity_id: Option<String>,
    pub status: Option<ConnectionStatus>,
    /// Maximum number of rows returned; `None` means unlimited.
    pub limit: Option<u32>,
}

fn row_to_connection(row: &libsql::Row) -> Result<Connection, StoreError> {
    Ok(Connection {
        connection_id: row.get::<String>(0)?,
        created_at: parse_datetime(&row.get::<String>(1)?)?,
        agency_id: row.get::<String>(2)?,
        opportunity_id: row.get::<String>(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        fee_amount: row.get::<i64>(5)?,
        incentive_amount: row.get::<i64>(6)?,
        notes: row.get::<String>(7)?,
    })
}

impl GateService {
    /// Record an agency's approach toward an opportunity.
    ///
    /// Copies `(fee, incentive)` for the opportunity's rank from the pricing
    /// table as of this moment and appends exactly one `requested` row to
    /// the ledger. The pricing lookup happens before any write, so a failed
    /// lookup never leaves a half-written record. The append itself is a
    /// single transactional INSERT with a random ID, so concurrent calls
    /// neither collide nor overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns `Permission` for non-Agency callers, `Validation` if the
    /// acting agency is unset, `NotFound` for an unresolvable opportunity or
    /// agency, `Configuration` if the rank has no pricing entry, and
    /// `StoreError` if the write fails (in which case nothing is persisted).
    pub async fn approach(
        &self,
        opportunity_id: &str,
        agency_id: &str,
        role: Role,
    ) -> Result<Connection, StoreError> {
        if role != Role::Agency {
            return Err(StoreError::Permission(format!(
                "approach requires the agency role, got {role}"
            )));
        }
        if agency_id.trim().is_empty() {
            return Err(StoreError::Validation(
                "acting agency is not set".to_string(),
            ));
        }

        let opportunity = self.get_opportunity(opportunity_id).await?;
        let agency = self.get_agency(agency_id).await?;
        let pricing = self.get_pricing(opportunity.rank).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CONNECTION).await?;

        self.db()
            .execute(
                "INSERT INTO connections
                 (connection_id, created_at, agency_id, opportunity_id, status, fee_amount, incentive_amount, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    now.to_rfc3339(),
                    agency.agency_id.as_str(),
                    opportunity.opportunity_id.as_str(),
                    ConnectionStatus::Requested.as_str(),
                    pricing.fee_amount,
                    pricing.incentive_amount,
                    ""
                ],
            )
            .await?;

        tracing::info!(
            connection_id = %id,
            opportunity_id = %opportunity.opportunity_id,
            agency_id = %agency.agency_id,
            rank = %opportunity.rank,
            fee_amount = pricing.fee_amount,
            "connection requested"
        );

        Ok(Connection {
            connection_id: id,
            created_at: now,
            agency_id: agency.agency_id,
            opportunity_id: opportunity.opportunity_id,
            status: ConnectionStatus::Requested,
            fee_amount: pricing.fee_amount,
            incentive_amount: pricing.incentive_amount,
            notes: String::new(),
        })
    }

    /// Fetch one connection by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such connection exists.
    pub async fn get_connection(&self, connection_id: &str) -> Result<Connection, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT connection_id, created_at, agency_id, opportunity_id, status, fee_amount, incentive_amount, notes
                 FROM connections WHERE connection_id = ?1",
                [connection_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::NotFound {
            entity: "connection",
            id: connection_id.to_string(),
        })?;
        row_to_connection(&row)
    }

    /// List ledger rows matching the filter, newest first.
    ///
    /// An empty ledger is a valid, expected state and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn list_connections(
        &self,
        filter: &ConnectionFilter,
    ) -> Result<Vec<Connection>, StoreError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref agency_id) = filter.agency_id {
            clauses.push(format!("agency_id = ?{idx}"));
            params.push(agency_id.as_str().into());
            idx += 1;
        }
        if let Some(ref opportunity_id) = filter.opportunity_id {
            clauses.push(format!("opportunity_id = ?{idx}"));
            params.push(opportunity_id.as_str().into());
            idx += 1;
        }
        if let Some(status) = filter.status {
            clauses.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let limit_clause = if let Some(limit) = filter.limit {
            params.push(i64::from(limit).into());
            format!(" LIMIT ?{idx}")
        } else {
            String::new()
        };
        let sql = format!(
            "SELECT connection_id, created_at, agency_id, opportunity_id, status, fee_amount, incentive_amount, notes
             FROM connections {where_clause} ORDER BY created_at DESC{limit_clause}"
        );

        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut connections = Vec::new();
        while let Some(row) = rows.next().await? {
            connections.push(row_to_connection(&row)?);
        }
        Ok(connections)
    }

    /// List ledger rows for a caller, with role-based disclosure applied.
    ///
    /// Agency callers never see incentive amounts; Admin callers do.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn list_connections_for(
        &self,
        filter: &ConnectionFilter,
        role: Role,
    ) -> Result<Vec<ConnectionView>, StoreError> {
        let disclose_incentive = role == Role::Admin;
        let connections = self.list_connections(filter).await?;
        Ok(connections
            .into_iter()
            .map(|c| ConnectionView::from_connection(c, disclose_incentive))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate_core::enums::RankLabel;

    use crate::test_support::helpers::{seed_test_catalog, test_service};

    #[tokio::test]
    async fn approach_records_requested_connection_with_current_pricing() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        // OP002 is rank B: seeded pricing is (50000, 15000).
        let connection = svc.approach("OP002", "A002", Role::Agency).await.unwrap();

        assert!(connection.connection_id.starts_with("con-"));
        assert_eq!(connection.status, ConnectionStatus::Requested);
        assert_eq!(connection.fee_amount, 50_000);
        assert_eq!(connection.incentive_amount, 15_000);
        assert_eq!(connection.notes, "");

        let fetched = svc.get_connection(&connection.connection_id).await.unwrap();
        assert_eq!(fetched, connection);
    }

    #[tokio::test]
    async fn approach_copies_pricing_as_of_creation_time() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let before = svc.approach("OP001", "A001", Role::Agency).await.unwrap();
        svc.set_pricing(RankLabel::A, 90_000, 20_000, Role::Admin)
            .await
            .unwrap();
        let after = svc.approach("OP001", "A001", Role::Agency).await.unwrap();

        // Historical row keeps the amounts captured at creation.
        let historical = svc.get_connection(&before.connection_id).await.unwrap();
        assert_eq!(historical.fee_amount, 100_000);
        assert_eq!(after.fee_amount, 90_000);
    }

    #[tokio::test]
    async fn approach_requires_agency_role() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let result = svc.approach("OP001", "A001", Role::Admin).await;
        assert!(matches!(result, Err(StoreError::Permission(_))));

        let ledger = svc.list_connections(&ConnectionFilter::default()).await.unwrap();
        assert!(ledger.is_empty(), "denied approach must not write");
    }

    #[tokio::test]
    async fn approach_with_unset_agency_is_validation_error() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let result = svc.approach("OP001", "  ", Role::Agency).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn approach_unknown_opportunity_leaves_ledger_unchanged() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let result = svc.approach("OP999", "A001", Role::Agency).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "opportunity", .. })
        ));

        let ledger = svc.list_connections(&ConnectionFilter::default()).await.unwrap();
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn approach_unknown_agency_is_not_found() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let result = svc.approach("OP001", "A999", Role::Agency).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "agency", .. })
        ));
    }

    #[tokio::test]
    async fn approach_aborts_before_write_when_pricing_is_missing() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;
        svc.db()
            .execute("DELETE FROM pricing WHERE need_level = 'A'", ())
            .await
            .unwrap();

        let result = svc.approach("OP001", "A001", Role::Agency).await;
        assert!(matches!(result, Err(StoreError::Configuration(_))));

        let ledger = svc.list_connections(&ConnectionFilter::default()).await.unwrap();
        assert!(ledger.is_empty(), "no partial connection may be persisted");
    }

    #[tokio::test]
    async fn concurrent_approaches_produce_two_distinct_rows() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let (first, second) = tokio::join!(
            svc.approach("OP001", "A001", Role::Agency),
            svc.approach("OP001", "A002", Role::Agency),
        );
        let first = first.unwrap();
        let second = second.unwrap();

        assert_ne!(first.connection_id, second.connection_id);

        let ledger = svc.list_connections(&ConnectionFilter::default()).await.unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[tokio::test]
    async fn list_connections_filters_by_agency_and_status() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        svc.approach("OP001", "A001", Role::Agency).await.unwrap();
        svc.approach("OP002", "A002", Role::Agency).await.unwrap();

        let filter = ConnectionFilter {
            agency_id: Some("A001".into()),
            ..Default::default()
        };
        let rows = svc.list_connections(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].opportunity_id, "OP001");

        let filter = ConnectionFilter {
            status: Some(ConnectionStatus::Approved),
            ..Default::default()
        };
        let rows = svc.list_connections(&filter).await.unwrap();
        assert!(rows.is_empty(), "nothing is ever approved in this scope");
    }

    #[tokio::test]
    async fn list_connections_respects_limit() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        svc.approach("OP001", "A001", Role::Agency).await.unwrap();
        svc.approach("OP001", "A002", Role::Agency).await.unwrap();
        svc.approach("OP002", "A001", Role::Agency).await.unwrap();

        let filter = ConnectionFilter {
            limit: Some(2),
            ..Default::default()
        };
        let rows = svc.list_connections(&filter).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn agency_facing_listing_withholds_incentive() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;
        svc.approach("OP001", "A001", Role::Agency).await.unwrap();

        let agency_rows = svc
            .list_connections_for(&ConnectionFilter::default(), Role::Agency)
            .await
            .unwrap();
        assert_eq!(agency_rows.len(), 1);
        assert_eq!(agency_rows[0].incentive_amount, None);

        let admin_rows = svc
            .list_connections_for(&ConnectionFilter::default(), Role::Admin)
            .await
            .unwrap();
        assert_eq!(admin_rows[0].incentive_amount, Some(30_000));
    }

    #[tokio::test]
    async fn empty_ledger_lists_empty() {
        let svc = test_service().await;
        let rows = svc.list_connections(&ConnectionFilter::default()).await.unwrap();
        assert!(rows.is_empty());
    }
}
