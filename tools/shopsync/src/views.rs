//! Plain-text renderers for each dashboard. Every renderer writes into any
//! [`fmt::Write`], so the CLI prints them and tests read them back as strings.

use std::fmt::{self, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use shopsync_common::aggregator::{DealListing, DealSeller};
use shopsync_common::cart::Cart;
use shopsync_common::catalog::Catalog;
use shopsync_common::currency::{format_amount, format_taka, TakaUnit};
use shopsync_common::customer::{total_dues, Customer};
use shopsync_common::deal::Deal;
use shopsync_common::i18n::{t, t_with, Language};
use shopsync_common::marker::{project_entrepreneurs, DivisionMarker, MapProjection};
use shopsync_common::preferences::{Preferences, Theme};
use shopsync_common::shop::{Shop, ShopCategory};
use shopsync_common::stats;
use shopsync_common::supplier::Supplier;

use crate::sync::{SyncStatus, Totals};

fn category_label(lang: Language, category: &ShopCategory) -> String {
    let key = category.label_key();
    match t(lang, &key) {
        label if label == key => category.as_str().to_string(),
        label => label.to_string(),
    }
}

fn open_label(lang: Language, is_open: bool) -> &'static str {
    t(lang, if is_open { "common.open" } else { "common.closed" })
}

fn km(radius_km: f64) -> String {
    format!("{radius_km}")
}

/// "N days left" while time remains, "Last day!" otherwise.
pub fn days_left_label(lang: Language, deal: &Deal, today: NaiveDate) -> String {
    let days = deal.days_remaining(today);
    if days > 0 {
        t_with(lang, "deals.daysLeft", &[("days", &days.to_string())])
    } else {
        t(lang, "deals.lastDay").to_string()
    }
}

// ─── Shops ──────────────────────────────────────────────────────────────────

pub fn shop_list(
    w: &mut impl Write,
    lang: Language,
    shops: &[&Shop],
    radius_km: f64,
) -> fmt::Result {
    writeln!(
        w,
        "{}",
        t_with(
            lang,
            "dashboard.shopsFoundCount",
            &[("count", &shops.len().to_string()), ("radius", &km(radius_km))],
        )
    )?;
    for shop in shops {
        write!(
            w,
            "  #{:<3} {} [{}] ★{:.1} {}",
            shop.id,
            shop.name,
            category_label(lang, &shop.category),
            shop.rating,
            open_label(lang, shop.is_open),
        )?;
        if shop.is_women_led {
            write!(w, " ({})", t(lang, "dashboard.womenLed"))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn shop_card(w: &mut impl Write, lang: Language, shop: &Shop) -> fmt::Result {
    writeln!(w, "{} (#{})", shop.name, shop.id)?;
    writeln!(
        w,
        "  {}: {}  ★{:.1} ({} reviews)  {}",
        t(lang, "common.category"),
        category_label(lang, &shop.category),
        shop.review_average(),
        shop.total_reviews,
        open_label(lang, shop.is_open),
    )?;
    writeln!(w, "  Owner: {}", shop.owner_name)?;
    writeln!(w, "  Phone: {}", shop.phone)?;
    writeln!(w, "  Address: {}", shop.address)?;
    match shop.location() {
        Some(loc) if loc.is_valid() => writeln!(w, "  Location: {:.4}, {:.4}", loc.lat, loc.lng)?,
        _ => writeln!(w, "  Location: unknown")?,
    }
    if shop.is_women_led {
        writeln!(w, "  {}", t(lang, "dashboard.womenLed"))?;
    }
    writeln!(w, "  Products: {}", shop.products.join(", "))?;
    writeln!(w, "  Availability: {}", shop.availability)?;
    writeln!(
        w,
        "  {}: {}%{}",
        t(lang, "company.authenticity"),
        shop.authenticity_score,
        if shop.is_verified { " (verified)" } else { "" }
    )?;

    if let Some(details) = &shop.women_entrepreneur_details {
        writeln!(w, "  Skills: {}", details.skills.join(", "))?;
        writeln!(w, "  Capacity: {}", details.production_capacity)?;
        for item in &details.price_list {
            writeln!(w, "    {} {}/{}", item.item, format_taka(u64::from(item.price)), item.unit)?;
        }
    }
    if let Some(medicine) = &shop.medicine_details {
        writeln!(
            w,
            "  Pharmacist: {} ({})",
            medicine.pharmacist_name, medicine.pharmacist_registration
        )?;
        writeln!(w, "  License: {}", medicine.pharmacy_license)?;
        if medicine.emergency_available {
            writeln!(w, "  Emergency service available")?;
        }
    }
    if let Some(realtime) = &shop.realtime_data {
        writeln!(w, "  Live: updated {}", realtime.last_update)?;
        for alert in &realtime.stock_alerts {
            writeln!(w, "    ! {alert}")?;
        }
    }
    Ok(())
}

// ─── Map ────────────────────────────────────────────────────────────────────

pub fn map_table(w: &mut impl Write, lang: Language, projection: &MapProjection) -> fmt::Result {
    let overlay = &projection.overlay;
    writeln!(
        w,
        "{}: {:.4}, {:.4}  {} {}km ({}m, {})",
        t(lang, "dashboard.yourLocation"),
        overlay.center.lat,
        overlay.center.lng,
        t(lang, "common.radius"),
        km(overlay.radius_km),
        overlay.radius_m(),
        overlay.color(),
    )?;
    for marker in &projection.markers {
        writeln!(
            w,
            "  #{:<3} {:<9} {:>8.4} {:>8.4}  {}  {}",
            marker.shop_id,
            marker.icon.as_str(),
            marker.coordinate.lat,
            marker.coordinate.lng,
            marker.color.css(),
            marker.popup.name,
        )?;
    }
    writeln!(
        w,
        "{}: {} | {}",
        t(lang, "dashboard.legend"),
        t(lang, "dashboard.regularShop"),
        t(lang, "dashboard.womenLed"),
    )
}

// ─── Deals ──────────────────────────────────────────────────────────────────

pub fn deal_list(
    w: &mut impl Write,
    lang: Language,
    listings: &[DealListing<'_>],
    today: NaiveDate,
) -> fmt::Result {
    for listing in listings {
        let deal = listing.deal;
        writeln!(
            w,
            "[{}] {} {}: {} -> {} (-{}%)  {}",
            deal.id,
            deal.brand_name,
            deal.product_name,
            format_taka(u64::from(deal.original_price)),
            format_taka(u64::from(deal.discounted_price)),
            deal.discount_percent,
            days_left_label(lang, deal, today),
        )?;
        if let Some(d) = deal.price_discrepancy() {
            writeln!(
                w,
                "  note: listed price {} but {}% off gives {}",
                d.recorded, deal.discount_percent, d.expected
            )?;
        }
        if let Some(d) = deal.status_discrepancy(today) {
            writeln!(
                w,
                "  note: marked {} but validity window says {}",
                d.recorded.as_str(),
                d.by_window.as_str()
            )?;
        }
        seller_list(w, lang, &listing.sellers)?;
    }
    Ok(())
}

pub fn seller_list(w: &mut impl Write, lang: Language, sellers: &[DealSeller]) -> fmt::Result {
    writeln!(w, "  {}:", t(lang, "deals.availableAt"))?;
    for seller in sellers {
        write!(
            w,
            "    - {} ({}) {} | {} | {} ★{:.1}",
            seller.shop_name,
            seller.owner_name,
            seller.phone,
            seller.address,
            seller.distance,
            seller.rating,
        )?;
        if seller.is_women_led {
            write!(w, " ({})", t(lang, "dashboard.womenLed"))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

// ─── Shopkeeper tools ───────────────────────────────────────────────────────

pub fn dues(w: &mut impl Write, lang: Language, customers: &[&Customer]) -> fmt::Result {
    writeln!(
        w,
        "{}: {}",
        t(lang, "shopkeeper.dueAmount"),
        format_taka(total_dues(customers.iter().copied()))
    )?;
    for customer in customers {
        writeln!(
            w,
            "  {} {} ({}): {}",
            customer.id,
            customer.name,
            customer.phone,
            t_with(lang, "dues.pending", &[("amount", &format_taka(customer.due_amount))]),
        )?;
        for purchase in customer.unpaid_purchases() {
            writeln!(
                w,
                "    {} {} {}",
                purchase.date,
                purchase.items.join(", "),
                format_taka(purchase.amount)
            )?;
        }
    }
    Ok(())
}

pub fn supplier_list(w: &mut impl Write, suppliers: &[&Supplier]) -> fmt::Result {
    for supplier in suppliers {
        writeln!(
            w,
            "{} ★{:.1}  min order {}  delivery {}  {}",
            supplier.name,
            supplier.rating,
            format_taka(supplier.min_order),
            supplier.delivery_time,
            supplier.contact,
        )?;
        for product in &supplier.price_list {
            writeln!(
                w,
                "    {} {}/{} (min {}){}",
                product.name,
                format_taka(product.price),
                product.unit,
                product.min_qty,
                if product.in_stock { "" } else { " out of stock" },
            )?;
        }
    }
    Ok(())
}

pub fn cart(w: &mut impl Write, lang: Language, cart: &Cart) -> fmt::Result {
    writeln!(w, "{} ({})", t(lang, "shopkeeper.orderProducts"), cart.len())?;
    for item in cart.items() {
        writeln!(
            w,
            "  {} x{} {} = {}",
            item.product.name,
            item.quantity,
            item.supplier,
            format_taka(item.line_total())
        )?;
    }
    writeln!(w, "  Total: {}", format_taka(cart.total()))
}

// ─── Brand ──────────────────────────────────────────────────────────────────

pub fn brand_overview(w: &mut impl Write, lang: Language, catalog: &Catalog) -> fmt::Result {
    let network = stats::network_totals(catalog.divisions());
    writeln!(w, "{}", t(lang, "brand.title"))?;
    writeln!(
        w,
        "  {}: {} shops, {} sales, {} women-led, {:.1}% avg growth",
        t(lang, "company.shopNetwork"),
        network.shops,
        format_amount(network.sales, TakaUnit::Lakh),
        network.women_led,
        network.avg_growth,
    )?;

    writeln!(w, "{}", t(lang, "brand.salesHeatmap"))?;
    for division in catalog.divisions() {
        let name = match lang {
            Language::En => &division.name,
            Language::Bn => &division.name_bn,
        };
        let label = DivisionMarker::for_division(division)
            .map(|m| m.label)
            .unwrap_or_default();
        writeln!(
            w,
            "  {:<12} {:>5} shops ({})  {}  +{}%",
            name,
            division.shops,
            label,
            format_amount(division.sales, TakaUnit::Lakh),
            division.growth,
        )?;
    }

    writeln!(w, "{}", t(lang, "company.womenEmpowerment"))?;
    for marker in project_entrepreneurs(catalog.women_entrepreneurs()) {
        writeln!(w, "  {} - {}", marker.name, marker.business)?;
    }

    let campaigns = stats::campaign_totals(catalog.campaigns());
    writeln!(
        w,
        "Campaigns: {} active, {} of {} spent, reach {}, {} conversions",
        campaigns.active,
        format_amount(campaigns.spent, TakaUnit::Thousand),
        format_amount(campaigns.budget, TakaUnit::Thousand),
        campaigns.reach,
        campaigns.conversions,
    )?;
    writeln!(
        w,
        "Competitors: {:.1}% combined share",
        stats::competitor_share(catalog.competitors())
    )?;
    writeln!(
        w,
        "Opportunities: {} high urgency of {}",
        stats::high_urgency_count(catalog.opportunities()),
        catalog.opportunities().len()
    )?;
    let counts = stats::deal_counts(catalog.deals());
    let counts: Vec<String> = counts
        .iter()
        .map(|(status, n)| format!("{} {n}", status.as_str()))
        .collect();
    writeln!(w, "Deals: {}", counts.join(", "))?;

    let insights = stats::customer_insights(catalog.customers());
    writeln!(
        w,
        "{}: {} customers, {} revenue, {} dues",
        t(lang, "brand.customerInsights"),
        insights.customers,
        format_amount(insights.revenue, TakaUnit::Thousand),
        format_taka(insights.dues),
    )
}

// ─── Sync & settings ────────────────────────────────────────────────────────

pub fn sync_panel(
    w: &mut impl Write,
    lang: Language,
    status: SyncStatus,
    totals: Totals,
    last_synced: Option<DateTime<Utc>>,
) -> fmt::Result {
    writeln!(w, "API: {}", status.as_str())?;
    writeln!(w, "  {}: {}", t(lang, "sync.totalSells"), format_taka(totals.sells))?;
    writeln!(w, "  {}: {}", t(lang, "sync.totalBuys"), format_taka(totals.buys))?;
    match last_synced {
        Some(at) => writeln!(
            w,
            "  {}: {}",
            t(lang, "sync.lastSynced"),
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => writeln!(w, "  {}: -", t(lang, "sync.lastSynced")),
    }
}

pub fn settings(w: &mut impl Write, prefs: &Preferences, path: &Path) -> fmt::Result {
    let lang = prefs.language;
    let language = match lang {
        Language::En => t(lang, "common.english"),
        Language::Bn => t(lang, "common.bangla"),
    };
    let theme = match prefs.theme {
        Theme::Light => t(lang, "common.light"),
        Theme::Dark => t(lang, "common.dark"),
    };
    writeln!(w, "{}", t(lang, "common.settings"))?;
    writeln!(w, "  {}: {} ({})", t(lang, "common.language"), language, lang.code())?;
    writeln!(w, "  {}: {} ({})", t(lang, "common.theme"), theme, prefs.theme.as_str())?;
    writeln!(w, "  file: {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsync_common::aggregator::DealAggregator;
    use shopsync_common::filter::{apply, customers_with_dues, FilterSpec};
    use shopsync_common::location::DHAKA;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shop_list_header() {
        let catalog = Catalog::seed();
        let shops: Vec<&Shop> = catalog.shops().iter().collect();
        let mut out = String::new();
        shop_list(&mut out, Language::En, &shops, 3.0).unwrap();
        assert_eq!(out.lines().next(), Some("11 shops found (3km)"));
        assert_eq!(out.lines().count(), 12);

        let medicine = apply(catalog.shops(), &FilterSpec::new().with_category("medicine"));
        let mut out = String::new();
        shop_list(&mut out, Language::Bn, &medicine, 5.0).unwrap();
        assert_eq!(out.lines().next(), Some("3 দোকান পাওয়া গেছে (5km)"));
        assert!(out.contains("ওষুধ"));
    }

    #[test]
    fn test_shop_card() {
        let shop = Catalog::seed().shop(1).unwrap();
        let mut out = String::new();
        shop_card(&mut out, Language::En, shop).unwrap();
        assert!(out.starts_with("Rahman Grocery Store (#1)"));
        assert!(out.contains("Owner: Mohammad Rahman"));
    }

    #[test]
    fn test_days_left_label() {
        let deal = Catalog::seed().deal(1).unwrap();
        assert_eq!(days_left_label(Language::En, deal, ymd(2024, 2, 15)), "5 days left");
        assert_eq!(days_left_label(Language::En, deal, ymd(2024, 2, 20)), "Last day!");
        assert_eq!(days_left_label(Language::En, deal, ymd(2024, 3, 1)), "Last day!");
        assert_eq!(days_left_label(Language::Bn, deal, ymd(2024, 2, 15)), "5 দিন বাকি");
    }

    #[test]
    fn test_deal_list_shows_sellers_and_notes() {
        let catalog = Catalog::seed();
        let aggregator = DealAggregator::from_catalog(catalog);
        let listings = aggregator.listings(catalog.deals().iter().filter(|d| d.id == 1));
        let mut out = String::new();
        deal_list(&mut out, Language::En, &listings, ymd(2024, 2, 1)).unwrap();
        assert!(out.starts_with("[1] PRAN-RFL PRAN Aromatic Rice 5kg: ৳385 -> ৳345 (-10%)  19 days left"));
        assert!(out.contains("note: listed price 345 but 10% off gives 347"));
        assert!(out.contains("Available at:"));
        assert!(out.contains("Rahman Grocery Store"));
        assert!(!out.contains("validity window"));
    }

    #[test]
    fn test_dues() {
        let with_dues = customers_with_dues(Catalog::seed().customers(), "");
        let mut out = String::new();
        dues(&mut out, Language::En, &with_dues).unwrap();
        assert_eq!(out.lines().next(), Some("Due Amount: ৳12,800"));
        assert!(out.contains("CUST003 Fatima Khatun (+880 1912-567890): ৳5,800 pending"));
        assert!(!out.contains("Mohammad Ali"));
    }

    #[test]
    fn test_cart() {
        let supplier = &Catalog::seed().suppliers()[0];
        let mut order = Cart::new();
        order.add(supplier, "PRAN Aromatic Rice 5kg").unwrap();
        let mut out = String::new();
        cart(&mut out, Language::En, &order).unwrap();
        assert!(out.contains("PRAN Aromatic Rice 5kg x20 PRAN-RFL Group = ৳7,300"));
        assert!(out.ends_with("Total: ৳7,300\n"));
    }

    #[test]
    fn test_map_table() {
        let catalog = Catalog::seed();
        let projection = MapProjection::new(catalog.shops(), DHAKA, 5.0);
        let mut out = String::new();
        map_table(&mut out, Language::En, &projection).unwrap();
        assert!(out.starts_with(
            "Your Location: 23.8103, 90.4125  Radius 5km (5000m, hsl(152, 55%, 42%))"
        ));
        assert_eq!(out.lines().count(), projection.markers.len() + 2);
    }

    #[test]
    fn test_brand_overview() {
        let mut out = String::new();
        brand_overview(&mut out, Language::En, Catalog::seed()).unwrap();
        assert!(out.contains("9320 shops"));
        assert!(out.contains("Deals: active 5, upcoming 1"));
        assert!(out.contains("Dhaka"));
    }

    #[test]
    fn test_sync_panel_and_settings() {
        let mut out = String::new();
        sync_panel(&mut out, Language::En, SyncStatus::Idle, Totals::default(), None).unwrap();
        assert!(out.contains("Total Sells: ৳7,250"));
        assert!(out.contains("Total Buys: ৳4,500"));

        let prefs = Preferences {
            language: Language::Bn,
            theme: Theme::Dark,
        };
        let mut out = String::new();
        settings(&mut out, &prefs, Path::new("/tmp/p.json")).unwrap();
        assert!(out.contains("(bn)"));
        assert!(out.contains("(dark)"));
    }
}
