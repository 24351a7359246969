use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::location::GeoLocation;

/// Unique shop identifier.
pub type ShopId = u32;

/// What a shop mainly sells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShopCategory {
    Grocery,
    Medicine,
    Cosmetics,
    Clothing,
    Handmade,
    Other(String),
}

impl ShopCategory {
    pub fn all() -> &'static [ShopCategory] {
        &[
            ShopCategory::Grocery,
            ShopCategory::Medicine,
            ShopCategory::Cosmetics,
            ShopCategory::Clothing,
            ShopCategory::Handmade,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            ShopCategory::Grocery => "grocery",
            ShopCategory::Medicine => "medicine",
            ShopCategory::Cosmetics => "cosmetics",
            ShopCategory::Clothing => "clothing",
            ShopCategory::Handmade => "handmade",
            ShopCategory::Other(s) => s,
        }
    }

    /// Translation key for the category label.
    pub fn label_key(&self) -> String {
        format!("category.{}", self.as_str())
    }
}

impl FromStr for ShopCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "grocery" => ShopCategory::Grocery,
            "medicine" => ShopCategory::Medicine,
            "cosmetics" => ShopCategory::Cosmetics,
            "clothing" => ShopCategory::Clothing,
            "handmade" => ShopCategory::Handmade,
            other => ShopCategory::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored as the bare lowercase string, same as the seed data.
impl Serialize for ShopCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShopCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_else(|never| match never {}))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Medium,
    High,
}

/// Where an imported product comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrigin {
    pub product: String,
    pub origin: String,
    pub supplier: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDetails {
    pub trade_license: bool,
    pub tax_registration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_certificate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_inspection: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceItem {
    pub item: String,
    pub price: u32,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WomenEntrepreneurDetails {
    pub business_start_date: String,
    pub skills: Vec<String>,
    pub production_capacity: String,
    pub custom_order_available: bool,
    pub price_list: Vec<PriceItem>,
    #[serde(default)]
    pub training_received: Vec<String>,
    #[serde(default)]
    pub support_programs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicineSupplierType {
    Pharmaceutical,
    Local,
    Government,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineSupplier {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MedicineSupplierType,
    pub is_authorized: bool,
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineDetails {
    pub pharmacy_license: String,
    pub pharmacist_name: String,
    pub pharmacist_registration: String,
    pub suppliers: Vec<MedicineSupplier>,
    pub cold_storage_available: bool,
    pub emergency_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub user_name: String,
    pub rating: f32,
    pub comment: String,
    pub date: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyTeacher {
    pub id: u32,
    pub name: String,
    pub school: String,
    pub subject: String,
    pub distance: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
}

/// Last snapshot reported by the in-shop sensor board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeData {
    pub last_update: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_count: Option<u32>,
    #[serde(default)]
    pub stock_alerts: Vec<String>,
    pub device_status: DeviceStatus,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateField {
    Number(f64),
    Other(serde::de::IgnoredAny),
}

// A non-numeric coordinate only keeps the shop off the map.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CoordinateField>::deserialize(deserializer)? {
        Some(CoordinateField::Number(value)) => Some(value),
        Some(CoordinateField::Other(_)) | None => None,
    })
}

/// A shop in the discovery catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub category: ShopCategory,
    /// Latitude; absent for shops that never reported a location.
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lng: Option<f64>,
    pub rating: f32,
    pub is_open: bool,
    pub is_women_led: bool,
    pub products: Vec<String>,
    pub availability: String,

    pub phone: String,
    pub address: String,
    pub owner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_photo: Option<String>,

    pub price_range: PriceRange,
    #[serde(default)]
    pub import_origins: Vec<ImportOrigin>,

    pub is_verified: bool,
    /// 0-100.
    pub authenticity_score: u8,
    #[serde(default)]
    pub verification_details: VerificationDetails,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_entrepreneur_details: Option<WomenEntrepreneurDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine_details: Option<MedicineDetails>,

    #[serde(default)]
    pub reviews: Vec<Review>,
    pub total_reviews: u32,

    #[serde(default)]
    pub nearby_teachers: Vec<NearbyTeacher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_data: Option<RealtimeData>,
}

impl Shop {
    /// The shop's coordinate, if both components were provided.
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoLocation::new(lat, lng)),
            _ => None,
        }
    }

    /// Average of the attached reviews, falling back to the listed rating.
    pub fn review_average(&self) -> f32 {
        if self.reviews.is_empty() {
            return self.rating;
        }
        self.reviews.iter().map(|r| r.rating).sum::<f32>() / self.reviews.len() as f32
    }
}
