//! Shared test utilities for gate-db tests.

pub(crate) mod helpers {
    use gate_core::entities::Opportunity;
    use gate_core::enums::RankLabel;

    use crate::GateDb;
    use crate::service::GateService;

    /// Create an in-memory `GateService` (pricing defaults already seeded).
    pub async fn test_service() -> GateService {
        let db = GateDb::open_local(":memory:").await.unwrap();
        GateService::from_db(db)
    }

    /// Populate a small catalog: two companies, two agencies, two
    /// opportunities (OP001 rank A / Tokyo / IT, OP002 rank B / Osaka /
    /// manufacturing).
    pub async fn seed_test_catalog(svc: &GateService) {
        svc.create_company("C001", "Acme Systems").await.unwrap();
        svc.create_company("C002", "Osaka Manufacturing")
            .await
            .unwrap();
        svc.create_agency("A001", "North Staffing").await.unwrap();
        svc.create_agency("A002", "West Talent").await.unwrap();
        svc.create_opportunity(&Opportunity {
            opportunity_id: "OP001".into(),
            company_id: "C001".into(),
            region: "Tokyo".into(),
            industry: "IT".into(),
            rank: RankLabel::A,
            role_title: "Senior Engineer".into(),
            headcount_needed: 3,
            requirements: "Python experience required".into(),
        })
        .await
        .unwrap();
        svc.create_opportunity(&Opportunity {
            opportunity_id: "OP002".into(),
            company_id: "C002".into(),
            region: "Osaka".into(),
            industry: "Manufacturing".into(),
            rank: RankLabel::B,
            role_title: "Inspector".into(),
            headcount_needed: 5,
            requirements: "No experience needed".into(),
        })
        .await
        .unwrap();
    }
}
