//! Sample data seeding for demos and first-run setups.

use crate::error::StoreError;
use crate::service::GateService;

/// Sample rows: (id, name) for companies and agencies, full tuples for
/// opportunities. Matches the demo dataset the pilot launched with.
const SAMPLE_COMPANIES: &[(&str, &str)] = &[("C001", "株式会社テック"), ("C002", "大阪製造株式会社")];

const SAMPLE_AGENCIES: &[(&str, &str)] = &[("A001", "東京派遣サービス"), ("A002", "大阪人材社")];

const SAMPLE_OPPORTUNITIES: &[(&str, &str, &str, &str, &str, &str, i64, &str)] = &[
    ("OP001", "C001", "東京", "IT", "A", "エンジニア", 3, "Python経験必須"),
    ("OP002", "C002", "大阪", "製造", "B", "検査員", 5, "未経験OK"),
];

impl GateService {
    /// Insert the sample dataset and return how many companies, agencies,
    /// and opportunities it contains. Idempotent: re-running never
    /// duplicates rows or overwrites existing ones.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn seed_sample_data(&self) -> Result<(usize, usize, usize), StoreError> {
        for (company_id, company_name) in SAMPLE_COMPANIES {
            self.db()
                .execute(
                    "INSERT OR IGNORE INTO companies (company_id, company_name) VALUES (?1, ?2)",
                    libsql::params![*company_id, *company_name],
                )
                .await?;
        }
        for (agency_id, agency_name) in SAMPLE_AGENCIES {
            self.db()
                .execute(
                    "INSERT OR IGNORE INTO agencies (agency_id, agency_name) VALUES (?1, ?2)",
                    libsql::params![*agency_id, *agency_name],
                )
                .await?;
        }
        for (id, company_id, region, industry, need_level, role, headcount, requirements) in
            SAMPLE_OPPORTUNITIES
        {
            self.db()
                .execute(
                    "INSERT OR IGNORE INTO opportunities
                     (opportunity_id, company_id, region, industry, need_level, role, headcount_needed, requirements)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    libsql::params![
                        *id,
                        *company_id,
                        *region,
                        *industry,
                        *need_level,
                        *role,
                        *headcount,
                        *requirements
                    ],
                )
                .await?;
        }

        tracing::info!(
            companies = SAMPLE_COMPANIES.len(),
            agencies = SAMPLE_AGENCIES.len(),
            opportunities = SAMPLE_OPPORTUNITIES.len(),
            "sample data seeded"
        );
        Ok((
            SAMPLE_COMPANIES.len(),
            SAMPLE_AGENCIES.len(),
            SAMPLE_OPPORTUNITIES.len(),
        ))
    }
}
