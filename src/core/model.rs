//! Domain records as fetched by the external data layer.
//!
//! Everything here is a read-only value object for the duration of one
//! aggregation call: the engine never mutates or persists these.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Sector/industry label substituted when a business carries none.
pub const UNSPECIFIED_SECTOR: &str = "Unspecified";

/// Estimation factor applied to `amount` when an investment has no measured
/// current value. A known approximation inherited from the marketplace;
/// kept as-is for compatibility.
pub fn estimated_current_value(amount: Decimal) -> Decimal {
    amount * dec!(1.15)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Investor,
    BusinessOwner,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "INVESTOR",
            Role::BusinessOwner => "BUSINESS_OWNER",
            Role::Administrator => "ADMINISTRATOR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Pending => "PENDING",
            InvestmentStatus::Active => "ACTIVE",
            InvestmentStatus::Completed => "COMPLETED",
            InvestmentStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Open,
    Funded,
    Closed,
}

impl BusinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Open => "OPEN",
            BusinessStatus::Funded => "FUNDED",
            BusinessStatus::Closed => "CLOSED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// A fundraising listing ("opportunity") seeking capital from investors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub industry: Option<String>,
    pub target_capital: Decimal,
    pub current_raised: Decimal,
    pub status: BusinessStatus,
    pub created_at: DateTime<Utc>,
}

/// The eager-loaded slice of a business that an investment row carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRef {
    pub title: String,
    pub industry: Option<String>,
}

/// A cash distribution paid back against a specific investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub id: String,
    pub amount: Decimal,
    /// Free-text label describing the kind of distribution.
    pub description: Option<String>,
    pub paid_at: DateTime<Utc>,
}

/// A capital commitment by one investor into one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub id: String,
    pub investor_id: String,
    pub business_id: String,
    pub amount: Decimal,
    /// Measured current value. Absent on rows the marketplace has not
    /// revalued yet; the engine falls back to `estimated_current_value`.
    pub current_value: Option<Decimal>,
    pub status: InvestmentStatus,
    pub invested_at: DateTime<Utc>,
    /// Joined business data, when the data layer included it.
    pub business: Option<BusinessRef>,
    #[serde(default)]
    pub returns: Vec<ReturnRecord>,
}

impl InvestmentRecord {
    /// Current value under the engine's estimation policy.
    pub fn current_or_estimated(&self) -> Decimal {
        self.current_value
            .unwrap_or_else(|| estimated_current_value(self.amount))
    }

    /// Sector label, substituting the sentinel when the join is missing or
    /// the business carries no industry.
    pub fn sector(&self) -> &str {
        self.business
            .as_ref()
            .and_then(|b| b.industry.as_deref())
            .unwrap_or(UNSPECIFIED_SECTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_current_value_uses_fifteen_percent_uplift() {
        let investment = InvestmentRecord {
            id: "inv-1".to_string(),
            investor_id: "usr-1".to_string(),
            business_id: "biz-1".to_string(),
            amount: dec!(1000),
            current_value: None,
            status: InvestmentStatus::Active,
            invested_at: Utc::now(),
            business: None,
            returns: Vec::new(),
        };
        assert_eq!(investment.current_or_estimated(), dec!(1150.00));

        let measured = InvestmentRecord {
            current_value: Some(dec!(980)),
            ..investment
        };
        assert_eq!(measured.current_or_estimated(), dec!(980));
    }

    #[test]
    fn sector_falls_back_to_sentinel() {
        let mut investment = InvestmentRecord {
            id: "inv-1".to_string(),
            investor_id: "usr-1".to_string(),
            business_id: "biz-1".to_string(),
            amount: dec!(500),
            current_value: None,
            status: InvestmentStatus::Pending,
            invested_at: Utc::now(),
            business: None,
            returns: Vec::new(),
        };
        assert_eq!(investment.sector(), UNSPECIFIED_SECTOR);

        investment.business = Some(BusinessRef {
            title: "Lagos Cold Chain".to_string(),
            industry: None,
        });
        assert_eq!(investment.sector(), UNSPECIFIED_SECTOR);

        investment.business = Some(BusinessRef {
            title: "Lagos Cold Chain".to_string(),
            industry: Some("Logistics".to_string()),
        });
        assert_eq!(investment.sector(), "Logistics");
    }

    #[test]
    fn enums_use_marketplace_wire_labels() {
        assert_eq!(
            serde_yaml::to_string(&Role::BusinessOwner).unwrap().trim(),
            "BUSINESS_OWNER"
        );
        let status: InvestmentStatus = serde_yaml::from_str("PENDING").unwrap();
        assert_eq!(status, InvestmentStatus::Pending);
        assert_eq!(BusinessStatus::Open.as_str(), "OPEN");
    }
}
