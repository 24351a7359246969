//! Map marker descriptors for the shop map and the brand map.
//!
//! Marker identity depends only on the shops; the radius overlay depends only
//! on the center and radius. [`MapProjection::with_radius`] swaps the overlay
//! without touching the markers.

use serde::Serialize;

use crate::brand::{Division, WomenEntrepreneur};
use crate::location::{valid_coordinate, GeoLocation, DHAKA};
use crate::shop::{Shop, ShopCategory, ShopId};

/// Selectable search radii in kilometers.
pub const RADIUS_OPTIONS_KM: [f64; 4] = [1.0, 3.0, 5.0, 10.0];
pub const DEFAULT_RADIUS_KM: f64 = 3.0;

/// Marker fill for women-led shops.
pub const WOMEN_LED_COLOR: &str = "hsl(16, 85%, 60%)";
/// Marker fill for every other shop, also used for the radius circle.
pub const REGULAR_COLOR: &str = "hsl(152, 55%, 42%)";

const POPUP_PRODUCTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Store,
    Pill,
    Sparkles,
    Shirt,
    Heart,
}

impl MarkerIcon {
    pub fn for_category(category: &ShopCategory) -> Self {
        match category {
            ShopCategory::Grocery => MarkerIcon::Store,
            ShopCategory::Medicine => MarkerIcon::Pill,
            ShopCategory::Cosmetics => MarkerIcon::Sparkles,
            ShopCategory::Clothing => MarkerIcon::Shirt,
            ShopCategory::Handmade => MarkerIcon::Heart,
            ShopCategory::Other(_) => MarkerIcon::Store,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerIcon::Store => "store",
            MarkerIcon::Pill => "pill",
            MarkerIcon::Sparkles => "sparkles",
            MarkerIcon::Shirt => "shirt",
            MarkerIcon::Heart => "heart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerColor {
    WomenLed,
    Regular,
}

impl MarkerColor {
    pub fn for_shop(is_women_led: bool) -> Self {
        if is_women_led {
            MarkerColor::WomenLed
        } else {
            MarkerColor::Regular
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            MarkerColor::WomenLed => WOMEN_LED_COLOR,
            MarkerColor::Regular => REGULAR_COLOR,
        }
    }
}

/// What the marker popup shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupSummary {
    pub name: String,
    pub women_led: bool,
    pub rating: f32,
    pub is_open: bool,
    pub products: Vec<String>,
    pub availability: String,
}

impl PopupSummary {
    pub fn for_shop(shop: &Shop) -> Self {
        Self {
            name: shop.name.clone(),
            women_led: shop.is_women_led,
            rating: shop.rating,
            is_open: shop.is_open,
            products: shop.products.iter().take(POPUP_PRODUCTS).cloned().collect(),
            availability: shop.availability.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopMarker {
    pub shop_id: ShopId,
    pub coordinate: GeoLocation,
    pub icon: MarkerIcon,
    pub color: MarkerColor,
    pub popup: PopupSummary,
}

impl ShopMarker {
    /// `None` when the shop has no usable coordinate.
    pub fn for_shop(shop: &Shop) -> Option<Self> {
        let coordinate = valid_coordinate(shop.location().as_ref())?;
        Some(Self {
            shop_id: shop.id,
            coordinate,
            icon: MarkerIcon::for_category(&shop.category),
            color: MarkerColor::for_shop(shop.is_women_led),
            popup: PopupSummary::for_shop(shop),
        })
    }
}

/// The dashed circle showing the search radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOverlay {
    pub center: GeoLocation,
    pub radius_km: f64,
}

impl CircleOverlay {
    pub fn new(center: GeoLocation, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Radius in meters, the unit map widgets expect.
    pub fn radius_m(&self) -> f64 {
        self.radius_km * 1000.0
    }

    pub fn color(&self) -> &'static str {
        REGULAR_COLOR
    }
}

impl Default for CircleOverlay {
    fn default() -> Self {
        Self::new(DHAKA, DEFAULT_RADIUS_KM)
    }
}

/// One marker per shop with a valid coordinate, in input order.
pub fn project_markers<'a, I>(shops: I) -> Vec<ShopMarker>
where
    I: IntoIterator<Item = &'a Shop>,
{
    shops.into_iter().filter_map(ShopMarker::for_shop).collect()
}

/// Everything the shop map draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapProjection {
    pub markers: Vec<ShopMarker>,
    pub overlay: CircleOverlay,
}

impl MapProjection {
    pub fn new<'a, I>(shops: I, center: GeoLocation, radius_km: f64) -> Self
    where
        I: IntoIterator<Item = &'a Shop>,
    {
        Self {
            markers: project_markers(shops),
            overlay: CircleOverlay::new(center, radius_km),
        }
    }

    /// Same markers, new overlay.
    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.overlay.radius_km = radius_km;
        self
    }
}

// ─── Brand map ──────────────────────────────────────────────────────────────

/// Circle marker for a division, sized by its shop count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionMarker {
    pub name: String,
    pub coordinate: GeoLocation,
    pub size_px: f64,
    pub label: String,
}

impl DivisionMarker {
    pub fn for_division(division: &Division) -> Option<Self> {
        let coordinate = valid_coordinate(Some(&division.location()))?;
        Some(Self {
            name: division.name.clone(),
            coordinate,
            size_px: (f64::from(division.shops) / 50.0).clamp(30.0, 60.0),
            label: format!("{:.1}k", f64::from(division.shops) / 1000.0),
        })
    }
}

pub fn project_divisions(divisions: &[Division]) -> Vec<DivisionMarker> {
    divisions
        .iter()
        .filter_map(DivisionMarker::for_division)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurMarker {
    pub id: u32,
    pub coordinate: GeoLocation,
    pub color: MarkerColor,
    pub name: String,
    pub business: String,
}

pub fn project_entrepreneurs(women: &[WomenEntrepreneur]) -> Vec<EntrepreneurMarker> {
    women
        .iter()
        .filter_map(|w| {
            let coordinate = valid_coordinate(Some(&w.location()))?;
            Some(EntrepreneurMarker {
                id: w.id,
                coordinate,
                color: MarkerColor::WomenLed,
                name: w.name.clone(),
                business: w.business.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_icon_and_color_mapping() {
        assert_eq!(MarkerIcon::for_category(&ShopCategory::Medicine), MarkerIcon::Pill);
        assert_eq!(
            MarkerIcon::for_category(&ShopCategory::Other("bakery".into())),
            MarkerIcon::Store
        );
        assert_eq!(MarkerColor::for_shop(true).css(), WOMEN_LED_COLOR);
        assert_eq!(MarkerColor::for_shop(false).css(), REGULAR_COLOR);
    }

    #[test]
    fn test_popup_takes_three_products() {
        let catalog = Catalog::seed();
        let shop = catalog
            .shops()
            .iter()
            .find(|s| s.products.len() > POPUP_PRODUCTS)
            .unwrap();
        let popup = PopupSummary::for_shop(shop);
        assert_eq!(popup.products, shop.products[..POPUP_PRODUCTS].to_vec());
    }

    #[test]
    fn test_shops_without_coordinates_are_skipped() {
        let catalog = Catalog::seed();
        let shops = catalog.shops();
        let markers = project_markers(shops);
        let located = shops.iter().filter(|s| s.location().is_some()).count();
        assert_eq!(markers.len(), located);
        assert!(markers.len() < shops.len());
    }

    #[test]
    fn test_radius_change_keeps_markers() {
        let catalog = Catalog::seed();
        let projection = MapProjection::new(catalog.shops(), DHAKA, 3.0);
        let markers = projection.markers.clone();
        let wider = projection.with_radius(10.0);
        assert_eq!(wider.markers, markers);
        assert_eq!(wider.overlay.radius_km, 10.0);
        assert_eq!(wider.overlay.radius_m(), 10_000.0);
    }

    #[test]
    fn test_division_marker_size() {
        let catalog = Catalog::seed();
        let markers = project_divisions(catalog.divisions());
        let dhaka = markers.iter().find(|m| m.name == "Dhaka").unwrap();
        // 2450 / 50 = 49
        assert_eq!(dhaka.size_px, 49.0);
        assert_eq!(dhaka.label, "2.5k");
        let barisal = markers.iter().find(|m| m.name == "Barisal").unwrap();
        // 560 / 50 = 11.2, clamped up
        assert_eq!(barisal.size_px, 30.0);
    }

    #[test]
    fn test_entrepreneur_markers() {
        let catalog = Catalog::seed();
        let markers = project_entrepreneurs(catalog.women_entrepreneurs());
        assert_eq!(markers.len(), catalog.women_entrepreneurs().len());
        assert!(markers.iter().all(|m| m.color == MarkerColor::WomenLed));
    }
}
