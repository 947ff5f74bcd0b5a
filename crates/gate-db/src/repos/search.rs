//! Catalog search — the opportunity/company matching query.
//!
//! Pure read: joins opportunities to companies and current pricing, applies
//! the caller's filters conjunctively, and redacts company identity for
//! Agency callers before the row leaves the service. Redaction is removal,
//! not a cosmetic overlay: the true name is simply never placed in an
//! Agency-facing view.

use gate_core::entities::{OpportunityView, REDACTED_COMPANY};
use gate_core::enums::{RankLabel, Role};

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::GateService;

/// Search criteria. All given filters apply conjunctively; `None` means
/// "no filter". Unknown region/industry values simply match nothing.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Exact-match region filter.
    pub region: Option<String>,
    /// Exact-match industry filter.
    pub industry: Option<String>,
    /// Exact-match rank filter.
    pub rank: Option<RankLabel>,
    /// Minimum headcount (inclusive). Zero matches everything.
    pub min_headcount: i64,
    /// Case-insensitive substring match against role title OR requirements.
    pub keyword: Option<String>,
}

fn row_to_view(row: &libsql::Row, role: Role) -> Result<OpportunityView, StoreError> {
    let opportunity_id = row.get::<String>(0)?;
    let company_name = get_opt_string(row, 1)?;
    let fee_amount = row.get::<Option<i64>>(8)?;
    let incentive_amount = row.get::<Option<i64>>(9)?;

    if fee_amount.is_none() {
        tracing::warn!(
            opportunity_id = %opportunity_id,
            need_level = %row.get::<String>(4)?,
            "no pricing entry for this rank; fee omitted from result row"
        );
    }

    Ok(OpportunityView {
        opportunity_id,
        company_name: match role {
            // An opportunity whose company row is missing still appears,
            // with an empty company field.
            Role::Admin => company_name.unwrap_or_default(),
            Role::Agency => REDACTED_COMPANY.to_string(),
        },
        region: row.get::<String>(2)?,
        industry: row.get::<String>(3)?,
        rank: parse_enum(&row.get::<String>(4)?)?,
        role_title: row.get::<String>(5)?,
        headcount_needed: row.get::<i64>(6)?,
        requirements: row.get::<String>(7)?,
        fee_amount,
        incentive_amount: match role {
            Role::Admin => incentive_amount,
            Role::Agency => None,
        },
    })
}

impl GateService {
    /// Search the catalog for the given caller.
    ///
    /// Result order is the opportunity table's insertion order; no implicit
    /// sort is applied. A rank with no pricing entry surfaces per-row as
    /// `fee_amount = None` (with a warning log) instead of aborting the
    /// whole query.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        role: Role,
    ) -> Result<Vec<OpportunityView>, StoreError> {
        let mut clauses = vec!["o.headcount_needed >= ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![criteria.min_headcount.into()];
        let mut idx = 2;

        if let Some(ref region) = criteria.region {
            clauses.push(format!("o.region = ?{idx}"));
            params.push(region.as_str().into());
            idx += 1;
        }
        if let Some(ref industry) = criteria.industry {
            clauses.push(format!("o.industry = ?{idx}"));
            params.push(industry.as_str().into());
            idx += 1;
        }
        if let Some(rank) = criteria.rank {
            clauses.push(format!("o.need_level = ?{idx}"));
            params.push(rank.as_str().into());
            idx += 1;
        }
        if let Some(ref keyword) = criteria.keyword {
            // instr instead of LIKE: substring semantics without wildcard
            // escaping for '%' and '_' in user input.
            clauses.push(format!(
                "(instr(lower(o.role), lower(?{idx})) > 0 OR instr(lower(o.requirements), lower(?{idx})) > 0)"
            ));
            params.push(keyword.as_str().into());
        }

        let sql = format!(
            "SELECT o.opportunity_id, c.company_name, o.region, o.industry, o.need_level,
                    o.role, o.headcount_needed, o.requirements, p.fee_amount, p.incentive_amount
             FROM opportunities o
             LEFT JOIN companies c ON c.company_id = o.company_id
             LEFT JOIN pricing p ON p.need_level = o.need_level
             WHERE {}
             ORDER BY o.rowid",
            clauses.join(" AND ")
        );

        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut views = Vec::new();
        while let Some(row) = rows.next().await? {
            views.push(row_to_view(&row, role)?);
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::helpers::{seed_test_catalog, test_service};

    #[tokio::test]
    async fn unfiltered_search_returns_all_in_insertion_order() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let views = svc.search(&SearchCriteria::default(), Role::Admin).await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].opportunity_id, "OP001");
        assert_eq!(views[1].opportunity_id, "OP002");
    }

    #[rstest]
    #[case(SearchCriteria { region: Some("Tokyo".into()), ..Default::default() }, &["OP001"])]
    #[case(SearchCriteria { industry: Some("Manufacturing".into()), ..Default::default() }, &["OP002"])]
    #[case(SearchCriteria { rank: Some(RankLabel::A), ..Default::default() }, &["OP001"])]
    #[case(SearchCriteria { min_headcount: 4, ..Default::default() }, &["OP002"])]
    #[case(SearchCriteria { region: Some("Tokyo".into()), rank: Some(RankLabel::B), ..Default::default() }, &[])]
    #[case(SearchCriteria { region: Some("Nagoya".into()), ..Default::default() }, &[])]
    #[tokio::test]
    async fn filters_apply_conjunctively(
        #[case] criteria: SearchCriteria,
        #[case] expected_ids: &[&str],
    ) {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let views = svc.search(&criteria, Role::Admin).await.unwrap();
        let ids: Vec<&str> = views.iter().map(|v| v.opportunity_id.as_str()).collect();
        assert_eq!(ids, expected_ids);
    }

    #[tokio::test]
    async fn keyword_matches_role_title_case_insensitively() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let criteria = SearchCriteria {
            keyword: Some("engineer".into()),
            ..Default::default()
        };
        let views = svc.search(&criteria, Role::Admin).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].role_title, "Senior Engineer");
    }

    #[tokio::test]
    async fn keyword_matches_requirements_text() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let criteria = SearchCriteria {
            keyword: Some("PYTHON".into()),
            ..Default::default()
        };
        let views = svc.search(&criteria, Role::Admin).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].opportunity_id, "OP001");
    }

    #[tokio::test]
    async fn keyword_wildcards_are_literal() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let criteria = SearchCriteria {
            keyword: Some("%".into()),
            ..Default::default()
        };
        let views = svc.search(&criteria, Role::Admin).await.unwrap();
        assert!(views.is_empty(), "'%' must match literally, not as a wildcard");
    }

    #[tokio::test]
    async fn agency_results_are_redacted() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let views = svc.search(&SearchCriteria::default(), Role::Agency).await.unwrap();
        for view in &views {
            assert_eq!(view.company_name, REDACTED_COMPANY);
            assert_eq!(view.incentive_amount, None);
            assert!(view.fee_amount.is_some());
        }

        // No serialized field carries the original name either.
        let json = serde_json::to_string(&views).unwrap();
        assert!(!json.contains("Acme Systems"));
        assert!(!json.contains("Osaka Manufacturing"));
    }

    #[tokio::test]
    async fn admin_results_include_company_and_incentive() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let views = svc.search(&SearchCriteria::default(), Role::Admin).await.unwrap();
        assert_eq!(views[0].company_name, "Acme Systems");
        assert_eq!(views[0].incentive_amount, Some(30_000));
        assert_eq!(views[0].fee_amount, Some(100_000));
    }

    #[tokio::test]
    async fn opportunity_with_missing_company_still_appears() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;
        // Orphan row: references a company that was never created.
        svc.db()
            .execute(
                "INSERT INTO opportunities (opportunity_id, company_id, region, industry, need_level, role, headcount_needed, requirements)
                 VALUES ('OP003', 'C404', 'Tokyo', 'IT', 'C', 'Tester', 1, '')",
                (),
            )
            .await
            .unwrap();

        let views = svc.search(&SearchCriteria::default(), Role::Admin).await.unwrap();
        let orphan = views.iter().find(|v| v.opportunity_id == "OP003").unwrap();
        assert_eq!(orphan.company_name, "");
    }

    #[tokio::test]
    async fn missing_pricing_surfaces_per_row_without_aborting() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;
        svc.db()
            .execute("DELETE FROM pricing WHERE need_level = 'A'", ())
            .await
            .unwrap();

        let views = svc.search(&SearchCriteria::default(), Role::Admin).await.unwrap();
        assert_eq!(views.len(), 2, "query must not abort on a pricing gap");

        let gapped = views.iter().find(|v| v.opportunity_id == "OP001").unwrap();
        assert_eq!(gapped.fee_amount, None);
        let priced = views.iter().find(|v| v.opportunity_id == "OP002").unwrap();
        assert_eq!(priced.fee_amount, Some(50_000));
    }

    #[tokio::test]
    async fn search_reports_fee_to_agencies() {
        let svc = test_service().await;
        seed_test_catalog(&svc).await;

        let criteria = SearchCriteria {
            rank: Some(RankLabel::B),
            ..Default::default()
        };
        let views = svc.search(&criteria, Role::Agency).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].fee_amount, Some(50_000));
    }
}
