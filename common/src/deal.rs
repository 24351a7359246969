use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique deal identifier.
pub type DealId = u32;

/// Region marker meaning "every division".
pub const NATIONWIDE: &str = "All Bangladesh";

/// Author-assigned lifecycle of a deal. Not derived from the validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Active,
    Upcoming,
    Expired,
}

impl DealStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DealStatus::Active => "active",
            DealStatus::Upcoming => "upcoming",
            DealStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A brand's special offer to shopkeepers and customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub brand_name: String,
    pub product_name: String,
    /// Prices in whole taka.
    pub original_price: u32,
    pub discounted_price: u32,
    pub discount_percent: u8,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub regions: Vec<String>,
    pub status: DealStatus,
    pub description: String,
    #[serde(default)]
    pub terms_conditions: Vec<String>,
}

/// The author-set status disagrees with the validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDiscrepancy {
    pub recorded: DealStatus,
    pub by_window: DealStatus,
}

/// The discounted price does not match original price and discount percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceDiscrepancy {
    pub recorded: u32,
    pub expected: u32,
}

impl Deal {
    /// Calendar days from `today` until the deal's last valid day.
    /// Zero or negative means the deal ends today or already ended.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.valid_until - today).num_days()
    }

    /// Whether the deal is offered in `division` (directly or nationwide).
    pub fn available_in(&self, division: &str) -> bool {
        self.regions
            .iter()
            .any(|r| r == NATIONWIDE || r == division)
    }

    /// Status implied by the validity window alone.
    pub fn window_status(&self, today: NaiveDate) -> DealStatus {
        if today < self.valid_from {
            DealStatus::Upcoming
        } else if today > self.valid_until {
            DealStatus::Expired
        } else {
            DealStatus::Active
        }
    }

    /// Reports, without correcting, a disagreement between the recorded status
    /// and the validity window.
    pub fn status_discrepancy(&self, today: NaiveDate) -> Option<StatusDiscrepancy> {
        let by_window = self.window_status(today);
        (by_window != self.status).then_some(StatusDiscrepancy {
            recorded: self.status,
            by_window,
        })
    }

    /// `original_price × (1 − discount_percent / 100)`, rounded to whole taka.
    pub fn expected_discounted_price(&self) -> u32 {
        let keep = 100u64.saturating_sub(u64::from(self.discount_percent));
        ((u64::from(self.original_price) * keep + 50) / 100) as u32
    }

    pub fn price_discrepancy(&self) -> Option<PriceDiscrepancy> {
        let expected = self.expected_discounted_price();
        (expected != self.discounted_price).then_some(PriceDiscrepancy {
            recorded: self.discounted_price,
            expected,
        })
    }

    /// Taka saved per unit.
    pub fn savings(&self) -> u32 {
        self.original_price.saturating_sub(self.discounted_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rice_deal() -> Deal {
        Deal {
            id: 1,
            brand_name: "PRAN-RFL".into(),
            product_name: "PRAN Aromatic Rice 5kg".into(),
            original_price: 385,
            discounted_price: 345,
            discount_percent: 10,
            valid_from: date("2024-01-20"),
            valid_until: date("2024-02-20"),
            min_quantity: 5,
            max_quantity: 100,
            regions: vec!["Dhaka".into(), "Chittagong".into(), "Sylhet".into()],
            status: DealStatus::Active,
            description: "Special winter discount on premium aromatic rice".into(),
            terms_conditions: vec![],
        }
    }

    #[test]
    fn test_days_remaining() {
        let deal = rice_deal();
        assert_eq!(deal.days_remaining(date("2024-02-10")), 10);
        assert_eq!(deal.days_remaining(date("2024-02-20")), 0);
        assert_eq!(deal.days_remaining(date("2024-03-01")), -10);
    }

    #[test]
    fn test_region_availability() {
        let mut deal = rice_deal();
        assert!(deal.available_in("Sylhet"));
        assert!(!deal.available_in("Khulna"));
        deal.regions = vec![NATIONWIDE.into()];
        assert!(deal.available_in("Khulna"));
    }

    #[test]
    fn test_status_discrepancy_is_reported_not_fixed() {
        let deal = rice_deal();
        assert_eq!(deal.status_discrepancy(date("2024-02-01")), None);

        let lapsed = deal.status_discrepancy(date("2025-01-01")).unwrap();
        assert_eq!(lapsed.recorded, DealStatus::Active);
        assert_eq!(lapsed.by_window, DealStatus::Expired);
        assert_eq!(deal.status, DealStatus::Active);
    }

    #[test]
    fn test_window_status_boundaries() {
        let deal = rice_deal();
        assert_eq!(deal.window_status(date("2024-01-19")), DealStatus::Upcoming);
        assert_eq!(deal.window_status(date("2024-01-20")), DealStatus::Active);
        assert_eq!(deal.window_status(date("2024-02-20")), DealStatus::Active);
        assert_eq!(deal.window_status(date("2024-02-21")), DealStatus::Expired);
    }

    #[test]
    fn test_price_discrepancy() {
        let deal = rice_deal();
        // 385 * 0.9 = 346.5 -> 347, recorded 345
        assert_eq!(deal.expected_discounted_price(), 347);
        assert_eq!(
            deal.price_discrepancy(),
            Some(PriceDiscrepancy {
                recorded: 345,
                expected: 347
            })
        );
        assert_eq!(deal.discounted_price, 345);
        assert_eq!(deal.savings(), 40);
    }

    #[test]
    fn test_deal_json_field_names() {
        let json = serde_json::to_value(rice_deal()).unwrap();
        assert_eq!(json["validUntil"], "2024-02-20");
        assert_eq!(json["status"], "active");
        assert_eq!(json["discountPercent"], 10);
    }
}
