//! End-to-end discovery pipeline: catalog → filter → markers / deal sellers.

use serde_json::json;
use shopsync_common::aggregator::{DealAggregator, DealSeller};
use shopsync_common::catalog::{Catalog, CatalogBuilder, CatalogSource, JsonCatalog};
use shopsync_common::filter::{apply, FilterSpec, Filterable, ALL};
use shopsync_common::location::DHAKA;
use shopsync_common::marker::{project_markers, MapProjection};
use shopsync_common::shop::Shop;

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn shop(id: u32, name: &str, category: &str, coordinate: Option<(f64, f64)>) -> Shop {
    let mut value = json!({
        "id": id,
        "name": name,
        "category": category,
        "rating": 4.2,
        "isOpen": true,
        "isWomenLed": id % 2 == 0,
        "products": ["Rice", "Oil", "Sugar", "Salt"],
        "availability": "In Stock",
        "phone": "+880 1700-000000",
        "address": "Dhaka",
        "ownerName": "Owner",
        "priceRange": "medium",
        "isVerified": true,
        "authenticityScore": 80,
        "totalReviews": 0,
    });
    if let Some((lat, lng)) = coordinate {
        value["lat"] = json!(lat);
        value["lng"] = json!(lng);
    }
    serde_json::from_value(value).unwrap()
}

/// 12 shops, 3 of them medicine, 2 of those without coordinates.
fn twelve_shop_catalog() -> Catalog {
    let shops = vec![
        shop(1, "Karim Store", "grocery", Some((23.81, 90.41))),
        shop(2, "Green Pharmacy", "medicine", Some((23.75, 90.37))),
        shop(3, "Lalbagh Pharmacy", "medicine", None),
        shop(4, "Old Town Medicine", "medicine", None),
        shop(5, "Glow Cosmetics", "cosmetics", Some((23.79, 90.40))),
        shop(6, "Saree Ghar", "clothing", Some((23.79, 90.41))),
        shop(7, "Jute Crafts", "handmade", Some((23.76, 90.36))),
        shop(8, "Mirpur Mudi", "grocery", Some((23.80, 90.36))),
        shop(9, "Banani Bazaar", "grocery", Some((23.79, 90.40))),
        shop(10, "Uttara Daily", "grocery", None),
        shop(11, "Nakshi House", "handmade", Some((23.77, 90.35))),
        shop(12, "Lipstick Lane", "cosmetics", Some((23.74, 90.39))),
    ];
    CatalogBuilder::new().shops(shops).build()
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

/// Filtering keeps shops without coordinates; the map drops them.
#[test]
fn medicine_filter_then_project() {
    let catalog = twelve_shop_catalog();
    assert_eq!(catalog.shops().len(), 12);

    let medicine = apply(catalog.shops(), &FilterSpec::new().with_category("medicine"));
    assert_eq!(medicine.len(), 3);

    let markers = project_markers(medicine.iter().copied());
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].shop_id, 2);
}

/// Seeded deal 1 has three sellers; an unknown deal gets the generic fallback.
#[test]
fn deal_seller_lookup() {
    let aggregator = DealAggregator::from_catalog(Catalog::seed());
    assert_eq!(aggregator.sellers_for(1).len(), 3);

    let unknown = aggregator.sellers_for(999);
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0], DealSeller::fallback());
}

/// A catalog file with a non-numeric latitude still loads. The shop stays in
/// the filtered list but gets no marker.
#[test]
fn non_numeric_coordinate_only_drops_the_marker() {
    let good =
        serde_json::to_value(shop(1, "Green Pharmacy", "medicine", Some((23.75, 90.37)))).unwrap();
    let mut bad =
        serde_json::to_value(shop(2, "Lalbagh Pharmacy", "medicine", Some((23.72, 90.39)))).unwrap();
    bad["lat"] = json!("unknown");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json!({ "shops": [good, bad] }).to_string()).unwrap();

    let catalog = JsonCatalog::new(&path).load().unwrap();
    assert_eq!(catalog.shops().len(), 2);
    let lalbagh = catalog.shop(2).unwrap();
    assert_eq!(lalbagh.lat, None);
    assert_eq!(lalbagh.lng, Some(90.39));

    let medicine = apply(catalog.shops(), &FilterSpec::new().with_category("medicine"));
    assert_eq!(medicine.len(), 2);
    let markers = project_markers(medicine.iter().copied());
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].shop_id, 1);
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn sample_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::new(),
        FilterSpec::new().with_category("grocery"),
        FilterSpec::new().with_search("pharm"),
        FilterSpec::new().with_category("medicine").with_search("fatima"),
        FilterSpec::new().with_category("jewellery"),
        FilterSpec::new().within(DHAKA, 5.0),
        FilterSpec::new().with_statuses(["open"]),
    ]
}

#[test]
fn filtering_is_idempotent() {
    for catalog in [Catalog::seed().clone(), twelve_shop_catalog()] {
        for spec in sample_specs() {
            let once: Vec<Shop> = apply(catalog.shops(), &spec).into_iter().cloned().collect();
            let twice = apply(&once, &spec);
            assert_eq!(twice.len(), once.len(), "spec {spec:?}");
            assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
        }
    }
}

#[test]
fn all_category_returns_catalog_in_order() {
    let catalog = Catalog::seed();
    for spec in [FilterSpec::new(), FilterSpec::new().with_category(ALL)] {
        let ids: Vec<_> = apply(catalog.shops(), &spec).iter().map(|s| s.id).collect();
        let expected: Vec<_> = catalog.shops().iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn search_results_are_exactly_the_substring_matches() {
    let catalog = Catalog::seed();
    for needle in ["", "store", "MEDICINE", "1", "zz-no-match", "'s"] {
        let result = apply(catalog.shops(), &FilterSpec::new().with_search(needle));
        let lowered = needle.to_lowercase();
        let hit = |s: &Shop| {
            s.search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&lowered))
        };
        assert!(result.iter().all(|&s| hit(s)), "needle {needle:?}");
        let expected = catalog.shops().iter().filter(|&s| hit(s)).count();
        assert_eq!(result.len(), expected, "needle {needle:?}");
    }
}

#[test]
fn marker_count_excludes_invalid_coordinates() {
    let mut shops = twelve_shop_catalog().shops().to_vec();
    shops[0].lat = Some(f64::NAN);
    shops[1].lng = Some(250.0);
    let invalid = shops
        .iter()
        .filter(|s| !s.location().is_some_and(|l| l.is_valid()))
        .count();
    assert_eq!(invalid, 5);

    let projection = MapProjection::new(&shops, DHAKA, 3.0);
    assert_eq!(projection.markers.len(), shops.len() - invalid);
}

#[test]
fn every_known_deal_resolves_to_real_sellers() {
    let catalog = Catalog::seed();
    let aggregator = DealAggregator::from_catalog(catalog);
    for id in catalog.deal_sellers().keys() {
        let sellers = aggregator.sellers_for(*id);
        assert!(!sellers.is_empty());
        assert!(sellers
            .iter()
            .all(|s| !s.shop_name.is_empty() && !s.phone.is_empty() && s.rating > 0.0));
        assert!(sellers.iter().all(|s| *s != DealSeller::fallback()));
    }
}
