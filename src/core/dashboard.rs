//! Role-scoped dashboard selection.
//!
//! The session layer upstream has already authenticated the caller and
//! enforced role access; here the role is just the discriminant picking
//! which slice of the snapshot gets aggregated.

use crate::core::business::{self, BusinessSummary, MonthlyTrend, OpportunityMetrics};
use crate::core::model::Role;
use crate::core::platform::{self, PlatformMetrics};
use crate::core::portfolio::{
    self, MonthlyPerformance, PortfolioMetrics, SectorAllocation, DEFAULT_SERIES_MONTHS,
};
use crate::core::snapshot::MarketSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the marketplace's session layer hands to a request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardOptions {
    /// Horizon of the investor performance series, in whole months.
    pub months: usize,
    pub include_returns: bool,
    /// Anchor for time-relative metrics, so results are reproducible.
    pub as_of: DateTime<Utc>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            months: DEFAULT_SERIES_MONTHS,
            include_returns: false,
            as_of: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDashboard {
    pub metrics: PortfolioMetrics,
    pub sectors: Vec<SectorAllocation>,
    pub series: Vec<MonthlyPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerDashboard {
    pub opportunities: Vec<OpportunityMetrics>,
    pub summary: BusinessSummary,
    pub trend: Vec<MonthlyTrend>,
}

/// One dashboard per role; a closed set, matching the marketplace's roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", content = "view")]
pub enum Dashboard {
    #[serde(rename = "INVESTOR")]
    Investor(InvestorDashboard),
    #[serde(rename = "BUSINESS_OWNER")]
    BusinessOwner(OwnerDashboard),
    #[serde(rename = "ADMINISTRATOR")]
    Administrator(PlatformMetrics),
}

impl Dashboard {
    /// Builds the dashboard matching the session's role from snapshot rows.
    pub fn build(
        session: &Session,
        snapshot: &MarketSnapshot,
        options: &DashboardOptions,
    ) -> Dashboard {
        match session.role {
            Role::Investor => {
                let investments = snapshot.investments_of(&session.user_id);
                Dashboard::Investor(InvestorDashboard {
                    metrics: portfolio::portfolio_metrics(&investments),
                    sectors: portfolio::sector_allocation(&investments),
                    series: portfolio::performance_series(
                        &investments,
                        options.months,
                        options.include_returns,
                        options.as_of,
                    ),
                })
            }
            Role::BusinessOwner => {
                let opportunities = snapshot.opportunities_of(&session.user_id);
                Dashboard::BusinessOwner(OwnerDashboard {
                    opportunities: opportunities
                        .iter()
                        .map(business::opportunity_metrics)
                        .collect(),
                    summary: business::business_summary(&opportunities),
                    trend: business::monthly_trend(&opportunities),
                })
            }
            Role::Administrator => Dashboard::Administrator(platform::platform_metrics(
                &snapshot.users,
                &snapshot.businesses,
                &snapshot.investments,
                options.as_of,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{
        BusinessRecord, BusinessStatus, InvestmentRecord, InvestmentStatus, UserRecord,
    };
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn snapshot() -> MarketSnapshot {
        let mut snapshot = MarketSnapshot {
            users: vec![
                UserRecord {
                    id: "usr-ada".to_string(),
                    name: "Ada Obi".to_string(),
                    role: Role::Investor,
                    created_at: ts("2025-11-02T09:00:00Z"),
                },
                UserRecord {
                    id: "usr-bayo".to_string(),
                    name: "Bayo Adewale".to_string(),
                    role: Role::BusinessOwner,
                    created_at: ts("2025-10-15T09:00:00Z"),
                },
            ],
            businesses: vec![BusinessRecord {
                id: "biz-rice".to_string(),
                owner_id: "usr-bayo".to_string(),
                title: "Kano Rice Mill".to_string(),
                industry: Some("Agriculture".to_string()),
                target_capital: dec!(250000),
                current_raised: dec!(20000),
                status: BusinessStatus::Open,
                created_at: ts("2025-12-01T08:00:00Z"),
            }],
            investments: vec![
                InvestmentRecord {
                    id: "inv-1".to_string(),
                    investor_id: "usr-ada".to_string(),
                    business_id: "biz-rice".to_string(),
                    amount: dec!(20000),
                    current_value: None,
                    status: InvestmentStatus::Active,
                    invested_at: ts("2026-02-03T10:00:00Z"),
                    business: None,
                    returns: Vec::new(),
                },
                InvestmentRecord {
                    id: "inv-2".to_string(),
                    investor_id: "usr-other".to_string(),
                    business_id: "biz-rice".to_string(),
                    amount: dec!(7000),
                    current_value: None,
                    status: InvestmentStatus::Pending,
                    invested_at: ts("2026-03-03T10:00:00Z"),
                    business: None,
                    returns: Vec::new(),
                },
            ],
            default_months: 12,
        };
        snapshot.hydrate();
        snapshot
    }

    fn options() -> DashboardOptions {
        DashboardOptions {
            months: 6,
            include_returns: false,
            as_of: ts("2026-06-15T00:00:00Z"),
        }
    }

    #[test]
    fn investor_session_sees_only_their_holdings() {
        let session = Session {
            user_id: "usr-ada".to_string(),
            role: Role::Investor,
        };
        match Dashboard::build(&session, &snapshot(), &options()) {
            Dashboard::Investor(view) => {
                assert_eq!(view.metrics.total_invested, dec!(20000));
                assert_eq!(view.sectors.len(), 1);
                assert_eq!(view.sectors[0].sector, "Agriculture");
                assert_eq!(view.series.len(), 6);
            }
            other => panic!("expected investor dashboard, got {other:?}"),
        }
    }

    #[test]
    fn owner_session_sees_the_full_raise() {
        let session = Session {
            user_id: "usr-bayo".to_string(),
            role: Role::BusinessOwner,
        };
        match Dashboard::build(&session, &snapshot(), &options()) {
            Dashboard::BusinessOwner(view) => {
                assert_eq!(view.opportunities.len(), 1);
                assert_eq!(view.opportunities[0].investor_count, 2);
                assert_eq!(view.summary.pending_investments, 1);
                assert_eq!(view.trend.len(), 2);
            }
            other => panic!("expected owner dashboard, got {other:?}"),
        }
    }

    #[test]
    fn administrator_session_sees_the_platform() {
        let session = Session {
            user_id: "usr-admin".to_string(),
            role: Role::Administrator,
        };
        match Dashboard::build(&session, &snapshot(), &options()) {
            Dashboard::Administrator(metrics) => {
                assert_eq!(metrics.total_users, 2);
                assert_eq!(metrics.total_volume, dec!(27000));
            }
            other => panic!("expected platform dashboard, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_serializes_with_role_tag() {
        let session = Session {
            user_id: "usr-ada".to_string(),
            role: Role::Investor,
        };
        let dashboard = Dashboard::build(&session, &snapshot(), &options());
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["role"], "INVESTOR");
        assert!(json["view"]["metrics"]["total_invested"].is_string());
    }
}
