//! Snapshot file: the rows the marketplace's data layer would have fetched.
//!
//! The engine itself never touches storage; this module is the thin stand-in
//! for the external persistence/query layer. It loads a YAML snapshot,
//! re-attaches the eager-loaded business join where the file left it out,
//! and selects per-user row sets for the dashboards.

use crate::core::business::Opportunity;
use crate::core::model::{BusinessRecord, BusinessRef, InvestmentRecord, UserRecord};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_months() -> usize {
    crate::core::portfolio::DEFAULT_SERIES_MONTHS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub businesses: Vec<BusinessRecord>,
    #[serde(default)]
    pub investments: Vec<InvestmentRecord>,
    /// Horizon for the investor performance series when the caller does not
    /// ask for one.
    #[serde(default = "default_months")]
    pub default_months: usize,
}

impl MarketSnapshot {
    pub fn load() -> Result<Self> {
        debug!("Loading snapshot from default path");
        let path = Self::default_snapshot_path()?;
        Self::load_from_path(&path)
    }

    pub fn default_snapshot_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "nvest", "nvest")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("snapshot.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read snapshot file: {}", path.as_ref().display()))?;

        let mut snapshot: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.as_ref().display()))?;
        snapshot.hydrate();
        debug!(
            users = snapshot.users.len(),
            businesses = snapshot.businesses.len(),
            investments = snapshot.investments.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Fills each investment's business join from the businesses table.
    /// Investments referencing an unknown business stay un-hydrated and the
    /// engine's sentinels apply.
    pub fn hydrate(&mut self) {
        let by_id: HashMap<&str, &BusinessRecord> = self
            .businesses
            .iter()
            .map(|b| (b.id.as_str(), b))
            .collect();

        for investment in &mut self.investments {
            if investment.business.is_none() {
                investment.business =
                    by_id.get(investment.business_id.as_str()).map(|b| BusinessRef {
                        title: b.title.clone(),
                        industry: b.industry.clone(),
                    });
            }
        }
    }

    pub fn user(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The investments one investor holds.
    pub fn investments_of(&self, investor_id: &str) -> Vec<InvestmentRecord> {
        self.investments
            .iter()
            .filter(|inv| inv.investor_id == investor_id)
            .cloned()
            .collect()
    }

    /// One owner's listings, each with its investments nested.
    pub fn opportunities_of(&self, owner_id: &str) -> Vec<Opportunity> {
        self.businesses
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .map(|business| Opportunity {
                business: business.clone(),
                investments: self
                    .investments
                    .iter()
                    .filter(|inv| inv.business_id == business.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SNAPSHOT_YAML: &str = r#"
users:
  - id: "usr-ada"
    name: "Ada Obi"
    role: INVESTOR
    created_at: "2025-11-02T09:00:00Z"
  - id: "usr-bayo"
    name: "Bayo Adewale"
    role: BUSINESS_OWNER
    created_at: "2025-10-15T09:00:00Z"
businesses:
  - id: "biz-rice"
    owner_id: "usr-bayo"
    title: "Kano Rice Mill"
    industry: "Agriculture"
    target_capital: 250000
    current_raised: 90000
    status: OPEN
    created_at: "2025-12-01T08:00:00Z"
  - id: "biz-fin"
    owner_id: "usr-bayo"
    title: "Remit Rails"
    target_capital: 100000
    current_raised: 100000
    status: FUNDED
    created_at: "2026-01-10T08:00:00Z"
investments:
  - id: "inv-1"
    investor_id: "usr-ada"
    business_id: "biz-rice"
    amount: 20000
    status: ACTIVE
    invested_at: "2026-02-03T10:00:00Z"
    returns:
      - id: "ret-1"
        amount: 800
        description: "Quarterly payout"
        paid_at: "2026-05-01T00:00:00Z"
  - id: "inv-2"
    investor_id: "usr-ada"
    business_id: "biz-fin"
    amount: 5000
    current_value: 5600
    status: COMPLETED
    invested_at: "2026-01-20T10:00:00Z"
  - id: "inv-3"
    investor_id: "usr-chi"
    business_id: "biz-gone"
    amount: 1000
    status: PENDING
    invested_at: "2026-03-01T10:00:00Z"
"#;

    fn snapshot() -> MarketSnapshot {
        let mut snapshot: MarketSnapshot = serde_yaml::from_str(SNAPSHOT_YAML).unwrap();
        snapshot.hydrate();
        snapshot
    }

    #[test]
    fn deserializes_and_defaults() {
        let snapshot = snapshot();
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.businesses.len(), 2);
        assert_eq!(snapshot.investments.len(), 3);
        assert_eq!(snapshot.default_months, 12);
        assert_eq!(snapshot.investments[1].current_value, Some(dec!(5600)));
        assert!(snapshot.businesses[1].industry.is_none());
        assert_eq!(snapshot.investments[0].returns.len(), 1);
        assert!(snapshot.investments[1].returns.is_empty());
    }

    #[test]
    fn hydration_attaches_known_joins_only() {
        let snapshot = snapshot();
        let joined = snapshot.investments[0].business.as_ref().unwrap();
        assert_eq!(joined.title, "Kano Rice Mill");
        assert_eq!(joined.industry.as_deref(), Some("Agriculture"));
        // biz-gone does not exist; the row stays bare and sector falls back.
        assert!(snapshot.investments[2].business.is_none());
        assert_eq!(snapshot.investments[2].sector(), "Unspecified");
    }

    #[test]
    fn selects_rows_per_user() {
        let snapshot = snapshot();
        let ada = snapshot.investments_of("usr-ada");
        assert_eq!(ada.len(), 2);

        let opportunities = snapshot.opportunities_of("usr-bayo");
        assert_eq!(opportunities.len(), 2);
        assert_eq!(opportunities[0].investments.len(), 1);
        assert_eq!(opportunities[0].investments[0].id, "inv-1");

        assert!(snapshot.user("usr-ada").is_some());
        assert!(snapshot.user("usr-nobody").is_none());
    }

    #[test]
    fn load_from_path_reports_missing_file() {
        let err = MarketSnapshot::load_from_path("/nonexistent/snapshot.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read snapshot file"));
    }
}
