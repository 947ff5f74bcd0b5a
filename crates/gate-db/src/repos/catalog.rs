//! Catalog repository — companies, agencies, opportunities.
//!
//! The catalog is read-mostly reference data. Rows are immutable once
//! created; editing is a future extension.

use gate_core::entities::{Agency, Company, Opportunity};

use crate::error::StoreError;
use crate::helpers::parse_enum;
use crate::service::GateService;

fn row_to_company(row: &libsql::Row) -> Result<Company, StoreError> {
    Ok(Company {
        company_id: row.get::<String>(0)?,
        company_name: row.get::<String>(1)?,
    })
}

fn row_to_agency(row: &libsql::Row) -> Result<Agency, StoreError> {
    Ok(Agency {
        agency_id: row.get::<String>(0)?,
        agency_name: row.get::<String>(1)?,
    })
}

pub(crate) fn row_to_opportunity(row: &libsql::Row) -> Result<Opportunity, StoreError> {
    Ok(Opportunity {
        opportunity_id: row.get::<String>(0)?,
        company_id: row.get::<String>(1)?,
        region: row.get::<String>(2)?,
        industry: row.get::<String>(3)?,
        rank: parse_enum(&row.get::<String>(4)?)?,
        role_title: row.get::<String>(5)?,
        headcount_needed: row.get::<i64>(6)?,
        requirements: row.get::<String>(7)?,
    })
}

impl GateService {
    /// Insert a company into the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails (duplicate ID included).
    pub async fn create_company(
        &self,
        company_id: &str,
        company_name: &str,
    ) -> Result<Company, StoreError> {
        self.db()
            .execute(
                "INSERT INTO companies (company_id, company_name) VALUES (?1, ?2)",
                libsql::params![company_id, company_name],
            )
            .await?;
        Ok(Company {
            company_id: company_id.to_string(),
            company_name: company_name.to_string(),
        })
    }

    /// Insert an agency into the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn create_agency(
        &self,
        agency_id: &str,
        agency_name: &str,
    ) -> Result<Agency, StoreError> {
        self.db()
            .execute(
                "INSERT INTO agencies (agency_id, agency_name) VALUES (?1, ?2)",
                libsql::params![agency_id, agency_name],
            )
            .await?;
        Ok(Agency {
            agency_id: agency_id.to_string(),
            agency_name: agency_name.to_string(),
        })
    }

    /// Insert an opportunity into the catalog.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a negative headcount, `NotFound` if the
    /// referenced company does not exist, `StoreError` on storage failure.
    pub async fn create_opportunity(&self, opportunity: &Opportunity) -> Result<(), StoreError> {
        if opportunity.headcount_needed < 0 {
            return Err(StoreError::Validation(format!(
                "headcount_needed must be non-negative, got {}",
                opportunity.headcount_needed
            )));
        }
        self.get_company(&opportunity.company_id).await?;

        self.db()
            .execute(
                "INSERT INTO opportunities
                 (opportunity_id, company_id, region, industry, need_level, role, headcount_needed, requirements)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    opportunity.opportunity_id.as_str(),
                    opportunity.company_id.as_str(),
                    opportunity.region.as_str(),
                    opportunity.industry.as_str(),
                    opportunity.rank.as_str(),
                    opportunity.role_title.as_str(),
                    opportunity.headcount_needed,
                    opportunity.requirements.as_str()
                ],
            )
            .await?;
        Ok(())
    }

    /// List all companies, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT company_id, company_name FROM companies ORDER BY company_id",
                (),
            )
            .await?;

        let mut companies = Vec::new();
        while let Some(row) = rows.next().await? {
            companies.push(row_to_company(&row)?);
        }
        Ok(companies)
    }

    /// List all agencies, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn list_agencies(&self) -> Result<Vec<Agency>, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT agency_id, agency_name FROM agencies ORDER BY agency_id",
                (),
            )
            .await?;

        let mut agencies = Vec::new();
        while let Some(row) = rows.next().await? {
            agencies.push(row_to_agency(&row)?);
        }
        Ok(agencies)
    }

    /// Fetch one company by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such company exists.
    pub async fn get_company(&self, company_id: &str) -> Result<Company, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT company_id, company_name FROM companies WHERE company_id = ?1",
                [company_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::NotFound {
            entity: "company",
            id: company_id.to_string(),
        })?;
        row_to_company(&row)
    }

    /// Fetch one agency by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such agency exists.
    pub async fn get_agency(&self, agency_id: &str) -> Result<Agency, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT agency_id, agency_name FROM agencies WHERE agency_id = ?1",
                [agency_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::NotFound {
            entity: "agency",
            id: agency_id.to_string(),
        })?;
        row_to_agency(&row)
    }

    /// Fetch one opportunity by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such opportunity exists.
    pub async fn get_opportunity(&self, opportunity_id: &str) -> Result<Opportunity, StoreError> {
        let mut rows = self
            .db()
            .query(
                "SELECT opportunity_id, company_id, region, industry, need_level, role, headcount_needed, requirements
                 FROM opportunities WHERE opportunity_id = ?1",
                [opportunity_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::NotFound {
            entity: "opportunity",
            id: opportunity_id.to_string(),
        })?;
        row_to_opportunity(&row)
    }
}
