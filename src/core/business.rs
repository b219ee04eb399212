//! Business-owner capital-raise aggregation.
//!
//! The snapshot layer hands these functions an owner's opportunities with
//! their investments already nested; everything below is a pure pass over
//! those rows.

use crate::core::group::{self, CategoryCount};
use crate::core::model::{BusinessRecord, BusinessStatus, InvestmentRecord, InvestmentStatus};
use crate::core::month::MonthKey;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One fundraising listing together with the investments made into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub business: BusinessRecord,
    pub investments: Vec<InvestmentRecord>,
}

/// Raise progress for a single opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityMetrics {
    pub business_id: String,
    pub title: String,
    pub status: BusinessStatus,
    pub target_capital: Decimal,
    pub current_raised: Decimal,
    /// current_raised / target_capital, in percent. Zero when the target is
    /// zero; deliberately not clamped at 100.
    pub funding_progress_pct: Decimal,
    /// Distinct investors in this opportunity.
    pub investor_count: usize,
    /// Investment counts by status (PENDING/ACTIVE/...).
    pub status_breakdown: Vec<CategoryCount>,
}

/// Owner-wide rollup across all opportunities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub total_raised: Decimal,
    pub total_target: Decimal,
    /// Union of investor ids across opportunities; an investor backing two
    /// listings counts once.
    pub total_investors: usize,
    /// Opportunities still OPEN for funding.
    pub open_opportunities: usize,
    pub pending_investments: usize,
}

/// One month of fundraising activity. Unlike the investor performance
/// series these are per-month observations, not running sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: MonthKey,
    pub new_investments: usize,
    pub total_amount: Decimal,
    /// Distinct investors active within this month alone.
    pub new_investors: usize,
}

/// Derives raise metrics for one opportunity.
pub fn opportunity_metrics(opportunity: &Opportunity) -> OpportunityMetrics {
    let business = &opportunity.business;

    let funding_progress_pct = if business.target_capital.is_zero() {
        Decimal::ZERO
    } else {
        business.current_raised / business.target_capital * dec!(100)
    };

    let investors: HashSet<&str> = opportunity
        .investments
        .iter()
        .map(|inv| inv.investor_id.as_str())
        .collect();

    OpportunityMetrics {
        business_id: business.id.clone(),
        title: business.title.clone(),
        status: business.status,
        target_capital: business.target_capital,
        current_raised: business.current_raised,
        funding_progress_pct,
        investor_count: investors.len(),
        status_breakdown: group::count_by(&opportunity.investments, |inv| {
            inv.status.as_str().to_string()
        }),
    }
}

/// Rolls all of an owner's opportunities into one summary.
pub fn business_summary(opportunities: &[Opportunity]) -> BusinessSummary {
    let mut total_raised = Decimal::ZERO;
    let mut total_target = Decimal::ZERO;
    let mut investors: HashSet<&str> = HashSet::new();
    let mut open_opportunities = 0;
    let mut pending_investments = 0;

    for opportunity in opportunities {
        total_raised += opportunity.business.current_raised;
        total_target += opportunity.business.target_capital;
        if opportunity.business.status == BusinessStatus::Open {
            open_opportunities += 1;
        }
        for investment in &opportunity.investments {
            investors.insert(investment.investor_id.as_str());
            if investment.status == InvestmentStatus::Pending {
                pending_investments += 1;
            }
        }
    }

    BusinessSummary {
        total_raised,
        total_target,
        total_investors: investors.len(),
        open_opportunities,
        pending_investments,
    }
}

/// Buckets the owner's incoming investments by calendar month of creation,
/// ascending. Months without activity are not reported.
pub fn monthly_trend(opportunities: &[Opportunity]) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<MonthKey, (usize, Decimal, HashSet<&str>)> = BTreeMap::new();

    for opportunity in opportunities {
        for investment in &opportunity.investments {
            let entry = months
                .entry(MonthKey::of(investment.invested_at))
                .or_insert_with(|| (0, Decimal::ZERO, HashSet::new()));
            entry.0 += 1;
            entry.1 += investment.amount;
            entry.2.insert(investment.investor_id.as_str());
        }
    }

    months
        .into_iter()
        .map(|(month, (new_investments, total_amount, investors))| MonthlyTrend {
            month,
            new_investments,
            total_amount,
            new_investors: investors.len(),
        })
        .collect()
}
