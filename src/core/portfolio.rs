//! Investor-facing portfolio aggregation.
//!
//! Pure functions over already-fetched investment rows: headline totals and
//! ROI, a per-sector breakdown, and a trailing monthly performance series.
//! Missing optional fields are substituted with the engine's sentinels so a
//! dashboard can always be rendered; none of these functions fail.

use crate::core::model::InvestmentRecord;
use crate::core::month::MonthKey;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default horizon for the performance series, in whole months.
pub const DEFAULT_SERIES_MONTHS: usize = 12;

/// Headline totals for one investor's holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    pub total_returns: Decimal,
    /// (current value - invested) / invested, in percent. Zero when nothing
    /// has been invested.
    pub overall_return_pct: Decimal,
}

/// One sector bucket of the investor's capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    pub sector: String,
    pub invested: Decimal,
    pub current_value: Decimal,
    pub investments: usize,
    /// This sector's share of total invested capital, in percent.
    pub share_pct: Decimal,
}

/// One calendar-month bucket of the trailing performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: MonthKey,
    /// Running sum of capital committed up to this month's end.
    pub invested_to_date: Decimal,
    /// Running sum of current (or estimated) value of those commitments.
    pub value_to_date: Decimal,
    /// Investments created within this month alone.
    pub new_investments: usize,
    /// Running sum of returns received up to this month's end. Only present
    /// when the series was requested with returns included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns_to_date: Option<Decimal>,
}

/// Sums an investor's rows into headline totals.
///
/// Empty input yields all-zero metrics rather than an error.
pub fn portfolio_metrics(investments: &[InvestmentRecord]) -> PortfolioMetrics {
    let mut total_invested = Decimal::ZERO;
    let mut total_current_value = Decimal::ZERO;
    let mut total_returns = Decimal::ZERO;

    for investment in investments {
        total_invested += investment.amount;
        total_current_value += investment.current_or_estimated();
        for ret in &investment.returns {
            total_returns += ret.amount;
        }
    }

    let overall_return_pct = if total_invested.is_zero() {
        Decimal::ZERO
    } else {
        (total_current_value - total_invested) / total_invested * dec!(100)
    };

    PortfolioMetrics {
        total_invested,
        total_current_value,
        total_returns,
        overall_return_pct,
    }
}

/// Groups investments by business sector.
///
/// Sectors appear in first-encountered order; every investment lands in
/// exactly one bucket (missing labels go to the sentinel bucket), so the
/// per-sector invested amounts partition the portfolio total.
pub fn sector_allocation(investments: &[InvestmentRecord]) -> Vec<SectorAllocation> {
    let mut buckets: Vec<SectorAllocation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total_invested = Decimal::ZERO;

    for investment in investments {
        let sector = investment.sector();
        let i = *index.entry(sector.to_string()).or_insert_with(|| {
            buckets.push(SectorAllocation {
                sector: sector.to_string(),
                invested: Decimal::ZERO,
                current_value: Decimal::ZERO,
                investments: 0,
                share_pct: Decimal::ZERO,
            });
            buckets.len() - 1
        });

        buckets[i].invested += investment.amount;
        buckets[i].current_value += investment.current_or_estimated();
        buckets[i].investments += 1;
        total_invested += investment.amount;
    }

    if !total_invested.is_zero() {
        for bucket in &mut buckets {
            bucket.share_pct = bucket.invested / total_invested * dec!(100);
        }
    }

    buckets
}

/// Builds the trailing monthly performance series.
///
/// Produces exactly `months` buckets ending at `as_of`'s calendar month,
/// zero-activity months included. Cumulative fields are running sums over
/// everything invested up to each month's end, so they never decrease from
/// one bucket to the next; commitments older than the window feed every
/// bucket's cumulative values.
pub fn performance_series(
    investments: &[InvestmentRecord],
    months: usize,
    include_returns: bool,
    as_of: DateTime<Utc>,
) -> Vec<MonthlyPerformance> {
    let window = MonthKey::trailing(MonthKey::of(as_of), months);

    window
        .into_iter()
        .map(|month| {
            let cutoff = month.end_exclusive();
            let mut invested_to_date = Decimal::ZERO;
            let mut value_to_date = Decimal::ZERO;
            let mut returns_to_date = Decimal::ZERO;
            let mut new_investments = 0;

            for investment in investments {
                if investment.invested_at < cutoff {
                    invested_to_date += investment.amount;
                    value_to_date += investment.current_or_estimated();
                }
                if month.contains(investment.invested_at) {
                    new_investments += 1;
                }
                if include_returns {
                    for ret in &investment.returns {
                        if ret.paid_at < cutoff {
                            returns_to_date += ret.amount;
                        }
                    }
                }
            }

            MonthlyPerformance {
                month,
                invested_to_date,
                value_to_date,
                new_investments,
                returns_to_date: include_returns.then_some(returns_to_date),
            }
        })
        .collect()
}
