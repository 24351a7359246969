//! Nationwide records shown on the brand and company dashboards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::location::GeoLocation;

/// One of the eight administrative divisions of Bangladesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub name: String,
    pub name_bn: String,
    pub lat: f64,
    pub lng: f64,
    pub shops: u32,
    /// Monthly sales in taka.
    pub sales: u64,
    /// Growth in percent.
    pub growth: u32,
    pub women_led: u32,
}

impl Division {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WomenEntrepreneur {
    pub id: u32,
    pub name: String,
    pub division: String,
    pub business: String,
    pub employees: u32,
    pub revenue: u64,
    pub lat: f64,
    pub lng: f64,
}

impl WomenEntrepreneur {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceComparison {
    Lower,
    Similar,
    Higher,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProduct {
    pub name: String,
    pub their_price: u32,
    pub our_price: u32,
    /// Percent difference as entered; not recomputed from the prices.
    pub price_diff: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub market_share: f32,
    pub price_comparison: PriceComparison,
    pub products: Vec<CompetitorProduct>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Growth,
    Demand,
    Competitor,
    Seasonal,
    Expansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub title: String,
    pub description: String,
    pub region: String,
    pub potential: String,
    pub urgency: Urgency,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub status: CampaignStatus,
    pub budget: u64,
    pub spent: u64,
    pub reach: u64,
    pub conversions: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_regions: Vec<String>,
    pub target_audience: String,
}

impl Campaign {
    /// Share of the budget already spent, in percent.
    pub fn budget_progress(&self) -> f64 {
        if self.budget == 0 {
            return 0.0;
        }
        self.spent as f64 / self.budget as f64 * 100.0
    }
}
