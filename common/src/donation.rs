use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::location::GeoLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    Food,
    Cloth,
    Event,
    Education,
    Medical,
}

impl DonationType {
    pub fn as_str(self) -> &'static str {
        match self {
            DonationType::Food => "food",
            DonationType::Cloth => "cloth",
            DonationType::Event => "event",
            DonationType::Education => "education",
            DonationType::Medical => "medical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DonationType::Food => "Food Sharing",
            DonationType::Cloth => "Cloth Sharing",
            DonationType::Event => "Local Events",
            DonationType::Education => "Education",
            DonationType::Medical => "Medical",
        }
    }
}

/// A community offer listed next to the shop map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: DonationType,
    pub title: String,
    pub description: String,
    pub donor_name: String,
    pub donor_phone: String,
    pub donor_address: String,
    pub lat: f64,
    pub lng: f64,
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    pub is_available: bool,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Donation {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}
