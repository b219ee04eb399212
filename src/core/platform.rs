//! Platform-wide aggregation for the administrator dashboard.

use crate::core::group::{self, CategoryCount};
use crate::core::model::{BusinessRecord, InvestmentRecord, UserRecord, UNSPECIFIED_SECTOR};
use crate::core::month::MonthKey;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How many records of each entity type the recent-activity feed carries.
pub const RECENT_LIMIT: usize = 10;

/// New-record counts over the two reporting windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthWindow {
    /// Records created since the first day of the previous calendar month.
    pub since_last_month: usize,
    /// Records created since the first day of the same month one year prior.
    pub since_last_year: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub users: GrowthWindow,
    pub businesses: GrowthWindow,
    pub investments: GrowthWindow,
}

/// The most recently created records of each entity type, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub users: Vec<UserRecord>,
    pub businesses: Vec<BusinessRecord>,
    pub investments: Vec<InvestmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub total_users: usize,
    pub total_businesses: usize,
    pub total_investments: usize,
    pub users_by_role: Vec<CategoryCount>,
    pub businesses_by_industry: Vec<CategoryCount>,
    pub investments_by_status: Vec<CategoryCount>,
    pub growth: GrowthMetrics,
    pub recent: RecentActivity,
    /// Sum of all investment amounts regardless of status. Pending capital
    /// counts here; this is platform volume, not realized capital.
    pub total_volume: Decimal,
}

/// Aggregates the full platform into the administrator view.
///
/// `as_of` anchors the growth windows so the computation stays a
/// deterministic function of its inputs.
pub fn platform_metrics(
    users: &[UserRecord],
    businesses: &[BusinessRecord],
    investments: &[InvestmentRecord],
    as_of: DateTime<Utc>,
) -> PlatformMetrics {
    let this_month = MonthKey::of(as_of);
    let month_cutoff = this_month.previous().start();
    let year_cutoff = MonthKey {
        year: this_month.year - 1,
        month: this_month.month,
    }
    .start();

    let growth = GrowthMetrics {
        users: growth_window(users, |u| u.created_at, month_cutoff, year_cutoff),
        businesses: growth_window(businesses, |b| b.created_at, month_cutoff, year_cutoff),
        investments: growth_window(investments, |i| i.invested_at, month_cutoff, year_cutoff),
    };

    let recent = RecentActivity {
        users: most_recent(users, |u| u.created_at),
        businesses: most_recent(businesses, |b| b.created_at),
        investments: most_recent(investments, |i| i.invested_at),
    };

    PlatformMetrics {
        total_users: users.len(),
        total_businesses: businesses.len(),
        total_investments: investments.len(),
        users_by_role: group::count_by(users, |u| u.role.as_str().to_string()),
        businesses_by_industry: group::count_by(businesses, |b| {
            b.industry
                .clone()
                .unwrap_or_else(|| UNSPECIFIED_SECTOR.to_string())
        }),
        investments_by_status: group::count_by(investments, |i| i.status.as_str().to_string()),
        growth,
        recent,
        total_volume: investments.iter().map(|i| i.amount).sum(),
    }
}

fn growth_window<T>(
    records: &[T],
    created_at: impl Fn(&T) -> DateTime<Utc>,
    month_cutoff: DateTime<Utc>,
    year_cutoff: DateTime<Utc>,
) -> GrowthWindow {
    let mut since_last_month = 0;
    let mut since_last_year = 0;
    for record in records {
        let created = created_at(record);
        if created >= month_cutoff {
            since_last_month += 1;
        }
        if created >= year_cutoff {
            since_last_year += 1;
        }
    }
    GrowthWindow {
        since_last_month,
        since_last_year,
    }
}

fn most_recent<T: Clone>(records: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by_key(|r| std::cmp::Reverse(created_at(r)));
    ordered.into_iter().take(RECENT_LIMIT).cloned().collect()
}
