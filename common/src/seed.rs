//! Built-in Bangladesh catalog used when no catalog file is given.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregator::DealSeller;
use crate::brand::{
    Campaign, CampaignStatus, Competitor, CompetitorProduct, Division, Opportunity,
    OpportunityKind, PriceComparison, Urgency, WomenEntrepreneur,
};
use crate::catalog::{Catalog, CatalogBuilder};
use crate::customer::{Customer, PurchaseRecord};
use crate::deal::{Deal, DealId, DealStatus, NATIONWIDE};
use crate::donation::{Donation, DonationType};
use crate::shop::{
    DeviceStatus, ImportOrigin, MedicineDetails, MedicineSupplier, MedicineSupplierType,
    PriceItem, PriceRange, RealtimeData, Review, Shop, ShopCategory, VerificationDetails,
    WomenEntrepreneurDetails,
};
use crate::supplier::{Supplier, SupplierProduct, SupplierType};

const FATIMA_PHOTO: &str =
    "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=100&h=100&fit=crop";

pub(crate) fn build() -> Catalog {
    CatalogBuilder::new()
        .shops(shops())
        .deals(deals())
        .deal_sellers(deal_sellers())
        .customers(customers())
        .suppliers(suppliers())
        .divisions(divisions())
        .women_entrepreneurs(women_entrepreneurs())
        .competitors(competitors())
        .campaigns(campaigns())
        .opportunities(opportunities())
        .donations(donations())
        .build()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ─── Shops ──────────────────────────────────────────────────────────────────

fn base_shop(id: u32, name: &str, category: ShopCategory, owner: &str) -> Shop {
    Shop {
        id,
        name: name.into(),
        category,
        lat: None,
        lng: None,
        rating: 4.0,
        is_open: true,
        is_women_led: false,
        products: Vec::new(),
        availability: "In Stock".into(),
        phone: String::new(),
        address: String::new(),
        owner_name: owner.into(),
        owner_photo: None,
        price_range: PriceRange::Medium,
        import_origins: Vec::new(),
        is_verified: true,
        authenticity_score: 85,
        verification_details: VerificationDetails {
            trade_license: true,
            tax_registration: true,
            ..VerificationDetails::default()
        },
        women_entrepreneur_details: None,
        medicine_details: None,
        reviews: Vec::new(),
        total_reviews: 0,
        nearby_teachers: Vec::new(),
        realtime_data: None,
    }
}

fn review(id: u32, user: &str, rating: f32, comment: &str, date: &str) -> Review {
    Review {
        id,
        user_name: user.into(),
        rating,
        comment: comment.into(),
        date: date.into(),
        verified: true,
    }
}

fn price_item(item: &str, price: u32, unit: &str, production_time: Option<&str>) -> PriceItem {
    PriceItem {
        item: item.into(),
        price,
        unit: unit.into(),
        production_time: production_time.map(Into::into),
    }
}

fn shops() -> Vec<Shop> {
    vec![
        Shop {
            lat: Some(23.8223),
            lng: Some(90.3654),
            rating: 4.5,
            products: strings(&["Rice", "Lentils", "Cooking Oil", "Sugar", "Spices"]),
            availability: "Fresh stock daily".into(),
            phone: "+880 1712-345678".into(),
            address: "Uttara, Dhaka".into(),
            price_range: PriceRange::Low,
            import_origins: vec![ImportOrigin {
                product: "Lentils".into(),
                origin: "India".into(),
                supplier: "Meghna Group".into(),
                is_verified: true,
            }],
            authenticity_score: 92,
            reviews: vec![
                review(1, "Karim Ahmed", 5.0, "Always fresh rice and fair prices.", "2024-01-18"),
                review(2, "Sultana Parvin", 4.0, "Good stock, a bit crowded in the evening.", "2024-01-12"),
            ],
            total_reviews: 128,
            realtime_data: Some(RealtimeData {
                last_update: "2024-01-25T10:30:00Z".into(),
                temperature: Some(27.5),
                humidity: Some(62.0),
                customer_count: Some(14),
                stock_alerts: strings(&["Sugar running low"]),
                device_status: DeviceStatus::Online,
            }),
            ..base_shop(1, "Rahman Grocery Store", ShopCategory::Grocery, "Mohammad Rahman")
        },
        Shop {
            lat: Some(23.8759),
            lng: Some(90.3795),
            rating: 4.8,
            is_women_led: true,
            products: strings(&["Paracetamol", "Antibiotics", "Vitamins", "Baby Care"]),
            availability: "Open until 11 PM".into(),
            phone: "+880 1912-567890".into(),
            address: "Uttara, Dhaka".into(),
            owner_photo: Some(FATIMA_PHOTO.into()),
            authenticity_score: 98,
            verification_details: VerificationDetails {
                trade_license: true,
                tax_registration: true,
                health_certificate: Some(true),
                last_inspection: Some("2024-01-10".into()),
                certifications: strings(&["DGDA Licensed", "Model Pharmacy"]),
            },
            medicine_details: Some(MedicineDetails {
                pharmacy_license: "DGDA-DH-2019-04512".into(),
                pharmacist_name: "Fatima Khatun".into(),
                pharmacist_registration: "BPC-A-10234".into(),
                suppliers: vec![
                    MedicineSupplier {
                        name: "Square Pharmaceuticals".into(),
                        kind: MedicineSupplierType::Pharmaceutical,
                        is_authorized: true,
                        products: strings(&["Ace", "Seclo", "Neuro-B"]),
                    },
                    MedicineSupplier {
                        name: "Beximco Pharma".into(),
                        kind: MedicineSupplierType::Pharmaceutical,
                        is_authorized: true,
                        products: strings(&["Napa", "Napa Extra"]),
                    },
                ],
                cold_storage_available: true,
                emergency_available: true,
            }),
            reviews: vec![review(
                3,
                "Nusrat Jahan",
                5.0,
                "Genuine medicines and helpful advice.",
                "2024-01-20",
            )],
            total_reviews: 96,
            ..base_shop(2, "Fatima's Medicine Shop", ShopCategory::Medicine, "Fatima Khatun")
        },
        Shop {
            lat: Some(23.7461),
            lng: Some(90.3742),
            rating: 4.7,
            products: strings(&["Prescription Drugs", "Diabetes Care", "First Aid"]),
            availability: "24 hours".into(),
            phone: "+880 1819-876543".into(),
            address: "Dhanmondi, Dhaka".into(),
            price_range: PriceRange::High,
            authenticity_score: 95,
            medicine_details: Some(MedicineDetails {
                pharmacy_license: "DGDA-DH-2015-01877".into(),
                pharmacist_name: "Dr. Rafiq Islam".into(),
                pharmacist_registration: "BPC-A-07761".into(),
                suppliers: vec![MedicineSupplier {
                    name: "Square Pharmaceuticals".into(),
                    kind: MedicineSupplierType::Pharmaceutical,
                    is_authorized: true,
                    products: strings(&["Ace", "Seclo"]),
                }],
                cold_storage_available: true,
                emergency_available: true,
            }),
            total_reviews: 210,
            ..base_shop(3, "Dhanmondi Pharmacy Plus", ShopCategory::Medicine, "Dr. Rafiq Islam")
        },
        Shop {
            lat: Some(23.8069),
            lng: Some(90.3687),
            rating: 4.4,
            products: strings(&["Vegetables", "Fish", "Rice", "Cooking Oil"]),
            phone: "+880 1715-123456".into(),
            address: "Mirpur-10, Dhaka".into(),
            price_range: PriceRange::Low,
            total_reviews: 74,
            ..base_shop(4, "Mirpur Fresh Market", ShopCategory::Grocery, "Jamal Hossain")
        },
        Shop {
            lat: Some(23.7937),
            lng: Some(90.4066),
            rating: 4.6,
            is_women_led: true,
            products: strings(&["Skincare", "Herbal Soap", "Face Cream"]),
            phone: "+880 1611-223344".into(),
            address: "Banani, Dhaka".into(),
            import_origins: vec![ImportOrigin {
                product: "Face Cream".into(),
                origin: "South Korea".into(),
                supplier: "Seoul Beauty Imports".into(),
                is_verified: true,
            }],
            total_reviews: 52,
            ..base_shop(5, "Nasreen's Beauty Corner", ShopCategory::Cosmetics, "Nasreen Akter")
        },
        Shop {
            lat: Some(23.7925),
            lng: Some(90.4078),
            rating: 4.9,
            is_women_led: true,
            products: strings(&["Saree", "Salwar Kameez", "Blouse Piece"]),
            availability: "Custom orders in 5 days".into(),
            phone: "+880 1512-789012".into(),
            address: "Gulshan-1, Dhaka".into(),
            price_range: PriceRange::High,
            women_entrepreneur_details: Some(WomenEntrepreneurDetails {
                business_start_date: "2019-03-08".into(),
                skills: strings(&["Tailoring", "Embroidery"]),
                production_capacity: "40 pieces per week".into(),
                custom_order_available: true,
                price_list: vec![
                    price_item("Cotton Saree", 1800, "piece", Some("3 days")),
                    price_item("Salwar Kameez stitching", 650, "set", Some("2 days")),
                ],
                training_received: strings(&["SME Foundation tailoring course"]),
                support_programs: strings(&["Joyeeta Foundation"]),
            }),
            total_reviews: 61,
            ..base_shop(6, "Ayesha Boutique", ShopCategory::Clothing, "Ayesha Siddika")
        },
        Shop {
            lat: Some(23.7662),
            lng: Some(90.3589),
            rating: 4.7,
            is_women_led: true,
            products: strings(&["Nakshi Kantha", "Jute Bags", "Clay Pottery", "Bamboo Baskets"]),
            availability: "Made to order".into(),
            phone: "+880 1911-556677".into(),
            address: "Mohammadpur, Dhaka".into(),
            price_range: PriceRange::Medium,
            women_entrepreneur_details: Some(WomenEntrepreneurDetails {
                business_start_date: "2017-06-15".into(),
                skills: strings(&["Nakshi Kantha embroidery", "Jute weaving"]),
                production_capacity: "25 items per week".into(),
                custom_order_available: true,
                price_list: vec![
                    price_item("Nakshi Kantha", 3500, "piece", Some("10 days")),
                    price_item("Jute Tote Bag", 450, "piece", Some("1 day")),
                ],
                training_received: Vec::new(),
                support_programs: strings(&["BSCIC Women Entrepreneur Loan"]),
            }),
            total_reviews: 38,
            ..base_shop(7, "Rokeya Handicrafts", ShopCategory::Handmade, "Rokeya Begum")
        },
        Shop {
            rating: 4.1,
            is_open: false,
            products: strings(&["Biscuits", "Tea", "Soft Drinks"]),
            phone: "+880 1811-998877".into(),
            address: "Sector 7, Uttara, Dhaka".into(),
            is_verified: false,
            authenticity_score: 70,
            total_reviews: 9,
            ..base_shop(8, "Uttara Family Store", ShopCategory::Grocery, "Kamal Uddin")
        },
        Shop {
            lat: Some(24.8990),
            lng: Some(91.8710),
            rating: 4.4,
            products: strings(&["Rice", "Tea Leaves", "Spices"]),
            phone: "+880 1721-234567".into(),
            address: "Zindabazar, Sylhet".into(),
            total_reviews: 44,
            ..base_shop(9, "Zindabazar Grocery", ShopCategory::Grocery, "Abdul Matin")
        },
        Shop {
            lat: Some(22.3260),
            lng: Some(91.8120),
            rating: 4.3,
            products: strings(&["Cooking Oil", "Dried Fish", "Flour"]),
            phone: "+880 1811-234567".into(),
            address: "Agrabad, Chittagong".into(),
            total_reviews: 57,
            ..base_shop(10, "Agrabad General Store", ShopCategory::Grocery, "Shamsul Alam")
        },
        Shop {
            lat: Some(24.9375),
            lng: Some(89.9372),
            rating: 4.4,
            is_open: false,
            products: strings(&["Napa Extra", "Oral Saline", "Antacids"]),
            availability: "Closed on Fridays".into(),
            phone: "+880 1781-901234".into(),
            address: "Jamalpur".into(),
            price_range: PriceRange::Low,
            total_reviews: 21,
            ..base_shop(11, "Jamalpur Medicine Point", ShopCategory::Medicine, "Md. Sirajul Islam")
        },
    ]
}

// ─── Deals ──────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn deal(
    id: DealId,
    brand: &str,
    product: &str,
    prices: (u32, u32, u8),
    window: (NaiveDate, NaiveDate),
    quantity: (u32, u32),
    regions: &[&str],
    status: DealStatus,
    description: &str,
    terms: &[&str],
) -> Deal {
    Deal {
        id,
        brand_name: brand.into(),
        product_name: product.into(),
        original_price: prices.0,
        discounted_price: prices.1,
        discount_percent: prices.2,
        valid_from: window.0,
        valid_until: window.1,
        min_quantity: quantity.0,
        max_quantity: quantity.1,
        regions: strings(regions),
        status,
        description: description.into(),
        terms_conditions: strings(terms),
    }
}

fn deals() -> Vec<Deal> {
    vec![
        deal(
            1,
            "PRAN-RFL",
            "PRAN Aromatic Rice 5kg",
            (385, 345, 10),
            (ymd(2024, 1, 20), ymd(2024, 2, 20)),
            (5, 100),
            &["Dhaka", "Chittagong", "Sylhet"],
            DealStatus::Active,
            "Special winter discount on premium aromatic rice",
            &["Valid for registered shopkeepers only", "Cannot combine with other offers"],
        ),
        deal(
            2,
            "Meghna Fresh",
            "Fresh Soyabean Oil 5L",
            (920, 780, 15),
            (ymd(2024, 1, 25), ymd(2024, 2, 10)),
            (10, 50),
            &[NATIONWIDE],
            DealStatus::Active,
            "Pre-Ramadan special offer on cooking oil",
            &["Limited stock available", "First come first served"],
        ),
        deal(
            3,
            "Square Pharma",
            "Ace 500mg (100 tabs)",
            (200, 165, 17),
            (ymd(2024, 1, 15), ymd(2024, 2, 28)),
            (20, 200),
            &["Dhaka", "Rajshahi", "Khulna"],
            DealStatus::Active,
            "Healthcare accessibility discount",
            &["For licensed pharmacies only", "Valid prescription required for resale"],
        ),
        deal(
            4,
            "Unilever",
            "Lux Soap 100g (6 pack)",
            (280, 220, 21),
            (ymd(2024, 2, 1), ymd(2024, 2, 28)),
            (15, 100),
            &[NATIONWIDE],
            DealStatus::Upcoming,
            "February beauty month special",
            &["Bulk purchase required", "Free display stand with 50+ units"],
        ),
        deal(
            5,
            "ACI",
            "ACI Pure Salt 1kg",
            (38, 28, 26),
            (ymd(2024, 1, 10), ymd(2024, 1, 30)),
            (50, 500),
            &["Rangpur", "Mymensingh", "Barisal"],
            DealStatus::Active,
            "Rural market expansion offer",
            &["Only for rural shopkeepers", "Free delivery above 200 units"],
        ),
        deal(
            6,
            "Beximco Pharma",
            "Napa Extra (100 tabs)",
            (150, 120, 20),
            (ymd(2024, 1, 22), ymd(2024, 2, 22)),
            (30, 150),
            &["Chittagong", "Sylhet"],
            DealStatus::Active,
            "Winter health campaign discount",
            &["DGDA licensed stores only"],
        ),
    ]
}

fn seller(
    shop_name: &str,
    owner_name: &str,
    rating: f32,
    phone: &str,
    address: &str,
    distance: &str,
) -> DealSeller {
    DealSeller {
        shop_name: shop_name.into(),
        owner_name: owner_name.into(),
        owner_photo: None,
        rating,
        phone: phone.into(),
        address: address.into(),
        is_verified: true,
        is_women_led: false,
        distance: distance.into(),
    }
}

fn fatima_seller() -> DealSeller {
    DealSeller {
        owner_photo: Some(FATIMA_PHOTO.into()),
        is_women_led: true,
        ..seller(
            "Fatima's Medicine Shop",
            "Fatima Khatun",
            4.8,
            "+880 1912-567890",
            "Uttara, Dhaka",
            "0.8 km",
        )
    }
}

fn deal_sellers() -> BTreeMap<DealId, Vec<DealSeller>> {
    let mirpur = seller(
        "Mirpur Fresh Market",
        "Jamal Hossain",
        4.4,
        "+880 1715-123456",
        "Mirpur-10, Dhaka",
        "2.8 km",
    );
    BTreeMap::from([
        (
            1,
            vec![
                seller(
                    "Rahman Grocery Store",
                    "Mohammad Rahman",
                    4.5,
                    "+880 1712-345678",
                    "Uttara, Dhaka",
                    "1.2 km",
                ),
                mirpur.clone(),
                seller(
                    "Zindabazar Grocery",
                    "Abdul Matin",
                    4.4,
                    "+880 1721-234567",
                    "Zindabazar, Sylhet",
                    "3.5 km",
                ),
            ],
        ),
        (
            2,
            vec![
                mirpur,
                seller(
                    "Agrabad General Store",
                    "Shamsul Alam",
                    4.3,
                    "+880 1811-234567",
                    "Agrabad, Chittagong",
                    "4.2 km",
                ),
            ],
        ),
        (
            3,
            vec![
                fatima_seller(),
                seller(
                    "Dhanmondi Pharmacy Plus",
                    "Dr. Rafiq Islam",
                    4.7,
                    "+880 1819-876543",
                    "Dhanmondi, Dhaka",
                    "5.1 km",
                ),
            ],
        ),
        (
            5,
            vec![
                seller(
                    "Rangpur Potato Mart",
                    "Sumon Chandra",
                    4.3,
                    "+880 1741-567890",
                    "Rangpur City",
                    "1.5 km",
                ),
                seller(
                    "Barisal Rice Traders",
                    "Habibur Rahman",
                    4.4,
                    "+880 1731-456789",
                    "Barisal",
                    "2.1 km",
                ),
            ],
        ),
        (
            6,
            vec![
                fatima_seller(),
                seller(
                    "Jamalpur Medicine Point",
                    "Md. Sirajul Islam",
                    4.4,
                    "+880 1781-901234",
                    "Jamalpur",
                    "3.2 km",
                ),
            ],
        ),
    ])
}

// ─── Shopkeeper data ────────────────────────────────────────────────────────

fn purchase(date: NaiveDate, items: &[&str], amount: u64, paid: bool) -> PurchaseRecord {
    PurchaseRecord {
        date,
        items: strings(items),
        amount,
        paid,
    }
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    phone: &str,
    location: &str,
    total_purchases: u64,
    last_purchase: NaiveDate,
    due_amount: u64,
    loyalty_points: u32,
    preferred: &[&str],
    history: Vec<PurchaseRecord>,
) -> Customer {
    Customer {
        id: id.into(),
        name: name.into(),
        phone: phone.into(),
        location: location.into(),
        total_purchases,
        last_purchase,
        due_amount,
        loyalty_points,
        preferred_products: strings(preferred),
        purchase_history: history,
    }
}

fn customers() -> Vec<Customer> {
    vec![
        customer(
            "CUST001",
            "Abdul Karim",
            "+880 1712-345678",
            "Mirpur, Dhaka",
            125_000,
            ymd(2024, 1, 25),
            3500,
            1250,
            &["Rice", "Oil", "Sugar"],
            vec![
                purchase(ymd(2024, 1, 25), &["Rice 5kg", "Oil 2L"], 1200, true),
                purchase(ymd(2024, 1, 20), &["Sugar 2kg", "Salt 1kg"], 350, false),
            ],
        ),
        customer(
            "CUST002",
            "Rahim Uddin",
            "+880 1812-456789",
            "Uttara, Dhaka",
            89_000,
            ymd(2024, 1, 24),
            1200,
            890,
            &["Medicines", "Vitamins"],
            vec![purchase(ymd(2024, 1, 24), &["Paracetamol", "Vitamin C"], 450, true)],
        ),
        customer(
            "CUST003",
            "Fatima Khatun",
            "+880 1912-567890",
            "Dhanmondi, Dhaka",
            156_000,
            ymd(2024, 1, 23),
            5800,
            1560,
            &["Cosmetics", "Skincare"],
            vec![purchase(ymd(2024, 1, 23), &["Face Cream", "Shampoo"], 850, false)],
        ),
        customer(
            "CUST004",
            "Mohammad Ali",
            "+880 1612-678901",
            "Gulshan, Dhaka",
            210_000,
            ymd(2024, 1, 22),
            0,
            2100,
            &["Groceries", "Dairy"],
            vec![purchase(ymd(2024, 1, 22), &["Milk 2L", "Bread", "Eggs"], 580, true)],
        ),
        customer(
            "CUST005",
            "Shirin Akter",
            "+880 1512-789012",
            "Banani, Dhaka",
            78_000,
            ymd(2024, 1, 21),
            2300,
            780,
            &["Clothing", "Fabrics"],
            vec![purchase(ymd(2024, 1, 21), &["Saree", "Blouse piece"], 2500, false)],
        ),
    ]
}

fn product(name: &str, price: u64, unit: &str, min_qty: u32, in_stock: bool) -> SupplierProduct {
    SupplierProduct {
        name: name.into(),
        price,
        unit: unit.into(),
        min_qty,
        in_stock,
    }
}

#[allow(clippy::too_many_arguments)]
fn supplier(
    id: u32,
    name: &str,
    kind: SupplierType,
    products: &[&str],
    min_order: u64,
    delivery_time: &str,
    rating: f32,
    contact: &str,
    price_list: Vec<SupplierProduct>,
) -> Supplier {
    Supplier {
        id,
        name: name.into(),
        kind,
        products: strings(products),
        min_order,
        delivery_time: delivery_time.into(),
        rating,
        verified: true,
        contact: contact.into(),
        price_list,
    }
}

fn suppliers() -> Vec<Supplier> {
    vec![
        supplier(
            1,
            "PRAN-RFL Group",
            SupplierType::Manufacturer,
            &["Rice", "Juices", "Snacks", "Dairy", "Spices"],
            5000,
            "2-3 days",
            4.8,
            "+880 1777-700700",
            vec![
                product("PRAN Aromatic Rice 5kg", 365, "pack", 20, true),
                product("PRAN Mango Juice 1L", 85, "bottle", 48, true),
                product("PRAN Chanachur 150g", 35, "pack", 100, true),
                product("PRAN UHT Milk 1L", 95, "pack", 24, false),
            ],
        ),
        supplier(
            2,
            "Square Pharmaceuticals",
            SupplierType::Manufacturer,
            &["Medicines", "Vitamins", "Healthcare"],
            10_000,
            "3-5 days",
            4.9,
            "+880 2-8432231",
            vec![
                product("Ace 500mg (100 tabs)", 180, "strip", 50, true),
                product("Seclo 20mg (14 caps)", 140, "strip", 50, true),
                product("Neuro-B (30 tabs)", 220, "pack", 30, true),
            ],
        ),
        supplier(
            3,
            "Meghna Group (Fresh)",
            SupplierType::Manufacturer,
            &["Cooking Oil", "Salt", "Flour", "Sugar"],
            8000,
            "2-4 days",
            4.7,
            "+880 2-9885566",
            vec![
                product("Fresh Soyabean Oil 5L", 890, "bottle", 12, true),
                product("Fresh Salt 1kg", 35, "pack", 50, true),
                product("Fresh Atta 2kg", 95, "pack", 30, true),
            ],
        ),
        supplier(
            4,
            "ACI Limited",
            SupplierType::Manufacturer,
            &["Salt", "Flour", "Spices", "Consumer goods"],
            6000,
            "3-4 days",
            4.6,
            "+880 2-8878787",
            vec![
                product("ACI Pure Salt 1kg", 32, "pack", 100, true),
                product("ACI Aerosol 300ml", 180, "can", 24, true),
            ],
        ),
        supplier(
            5,
            "Unilever Bangladesh",
            SupplierType::Distributor,
            &["Soap", "Shampoo", "Detergent", "Personal Care"],
            15_000,
            "4-5 days",
            4.8,
            "+880 2-8834567",
            vec![
                product("Lux Soap 100g (6 pack)", 240, "pack", 20, true),
                product("Sunsilk Shampoo 180ml", 145, "bottle", 24, true),
                product("Wheel Detergent 1kg", 85, "pack", 50, true),
            ],
        ),
    ]
}

// ─── Brand data ─────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn division(
    name: &str,
    name_bn: &str,
    lat: f64,
    lng: f64,
    shops: u32,
    sales: u64,
    growth: u32,
    women_led: u32,
) -> Division {
    Division {
        name: name.into(),
        name_bn: name_bn.into(),
        lat,
        lng,
        shops,
        sales,
        growth,
        women_led,
    }
}

fn divisions() -> Vec<Division> {
    vec![
        division("Dhaka", "ঢাকা", 23.8103, 90.4125, 2450, 4_500_000, 12, 320),
        division("Chittagong", "চট্টগ্রাম", 22.3569, 91.7832, 1890, 3_200_000, 15, 245),
        division("Sylhet", "সিলেট", 24.8949, 91.8687, 980, 1_800_000, 18, 156),
        division("Rajshahi", "রাজশাহী", 24.3745, 88.6042, 1120, 1_500_000, 10, 189),
        division("Khulna", "খুলনা", 22.8456, 89.5403, 890, 1_200_000, 8, 134),
        division("Barisal", "বরিশাল", 22.7010, 90.3535, 560, 800_000, 14, 98),
        division("Rangpur", "রংপুর", 25.7439, 89.2752, 780, 950_000, 11, 112),
        division("Mymensingh", "ময়মনসিংহ", 24.7471, 90.4203, 650, 720_000, 16, 87),
    ]
}

fn women_entrepreneurs() -> Vec<WomenEntrepreneur> {
    [
        (1, "Fatima Begum", "Dhaka", "Handicrafts", 12, 450_000, 23.7925, 90.4078),
        (2, "Rashida Khatun", "Chittagong", "Textiles", 8, 320_000, 22.3475, 91.8123),
        (3, "Amina Sultana", "Sylhet", "Food Processing", 15, 580_000, 24.9045, 91.8612),
        (4, "Nasreen Akter", "Rajshahi", "Boutique", 6, 280_000, 24.3636, 88.6241),
        (5, "Salma Rahman", "Khulna", "Cosmetics", 4, 180_000, 22.8200, 89.5500),
        (6, "Taslima Begum", "Barisal", "Grocery", 3, 150_000, 22.7100, 90.3700),
        (7, "Shirin Akter", "Rangpur", "Tailoring", 10, 350_000, 25.7500, 89.2600),
        (8, "Kulsum Begum", "Mymensingh", "Dairy", 5, 220_000, 24.7550, 90.4100),
    ]
    .into_iter()
    .map(
        |(id, name, division, business, employees, revenue, lat, lng)| WomenEntrepreneur {
            id,
            name: name.into(),
            division: division.into(),
            business: business.into(),
            employees,
            revenue,
            lat,
            lng,
        },
    )
    .collect()
}

fn compared(name: &str, their_price: u32, our_price: u32, price_diff: f32) -> CompetitorProduct {
    CompetitorProduct {
        name: name.into(),
        their_price,
        our_price,
        price_diff,
    }
}

fn competitors() -> Vec<Competitor> {
    vec![
        Competitor {
            id: 1,
            name: "MarketPro BD".into(),
            region: "Dhaka".into(),
            market_share: 18.5,
            price_comparison: PriceComparison::Similar,
            products: vec![
                compared("Rice 5kg", 380, 375, -1.3),
                compared("Cooking Oil 2L", 420, 415, -1.2),
                compared("Sugar 1kg", 120, 118, -1.7),
            ],
            strengths: strings(&["Strong delivery network", "Better app experience"]),
            weaknesses: strings(&["Higher prices", "Limited rural reach"]),
        },
        Competitor {
            id: 2,
            name: "ShopEasy".into(),
            region: "Chittagong".into(),
            market_share: 12.3,
            price_comparison: PriceComparison::Higher,
            products: vec![
                compared("Rice 5kg", 395, 375, -5.1),
                compared("Cooking Oil 2L", 440, 415, -5.7),
            ],
            strengths: strings(&["Premium branding", "Urban presence"]),
            weaknesses: strings(&["No women entrepreneur focus", "Expensive"]),
        },
        Competitor {
            id: 3,
            name: "LocalMart".into(),
            region: "Sylhet".into(),
            market_share: 8.7,
            price_comparison: PriceComparison::Lower,
            products: vec![
                compared("Rice 5kg", 360, 375, 4.2),
                compared("Sugar 1kg", 110, 118, 7.3),
            ],
            strengths: strings(&["Lowest prices", "Local trust"]),
            weaknesses: strings(&["Poor technology", "Limited products"]),
        },
    ]
}

fn opportunities() -> Vec<Opportunity> {
    [
        (
            1,
            OpportunityKind::Growth,
            "High Growth Potential in Sylhet",
            "Sylhet division shows 18% monthly growth. Consumer spending increased by 25% in Q4. Recommend increasing distribution partners.",
            "Sylhet",
            "৳2.5L additional monthly revenue",
            Urgency::High,
            ymd(2024, 1, 25),
        ),
        (
            2,
            OpportunityKind::Demand,
            "Rising Demand for Organic Products",
            "Search trends show 45% increase in organic product queries in Dhaka. Consider partnering with organic farmers.",
            "Dhaka",
            "12% market share increase",
            Urgency::Medium,
            ymd(2024, 1, 24),
        ),
        (
            3,
            OpportunityKind::Seasonal,
            "Ramadan Preparation Alert",
            "Ramadan starts in 45 days. Historical data shows 80% increase in grocery demand. Stock up on dates, cooking oil, and rice.",
            NATIONWIDE,
            "৳15L seasonal revenue",
            Urgency::High,
            ymd(2024, 1, 23),
        ),
        (
            4,
            OpportunityKind::Competitor,
            "Competitor Weakness in Rangpur",
            "LocalMart facing supply issues in Rangpur. This is an opportunity to capture their 8% market share.",
            "Rangpur",
            "800+ new customers",
            Urgency::High,
            ymd(2024, 1, 22),
        ),
        (
            5,
            OpportunityKind::Expansion,
            "Untapped Market in Barisal",
            "Only 560 shops in Barisal with growing population. Low competition makes it ideal for expansion.",
            "Barisal",
            "৳80K monthly",
            Urgency::Medium,
            ymd(2024, 1, 20),
        ),
    ]
    .into_iter()
    .map(
        |(id, kind, title, description, region, potential, urgency, created_at)| Opportunity {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            region: region.into(),
            potential: potential.into(),
            urgency,
            created_at,
        },
    )
    .collect()
}

fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Women Entrepreneur Spotlight".into(),
            status: CampaignStatus::Active,
            budget: 50_000,
            spent: 32_500,
            reach: 125_000,
            conversions: 3200,
            start_date: ymd(2024, 1, 15),
            end_date: ymd(2024, 2, 15),
            target_regions: strings(&["Dhaka", "Chittagong", "Sylhet"]),
            target_audience: "Urban consumers interested in handmade products".into(),
        },
        Campaign {
            id: 2,
            name: "Eid Special Offers".into(),
            status: CampaignStatus::Draft,
            budget: 100_000,
            spent: 0,
            reach: 0,
            conversions: 0,
            start_date: ymd(2024, 3, 1),
            end_date: ymd(2024, 4, 10),
            target_regions: strings(&[NATIONWIDE]),
            target_audience: "All demographics".into(),
        },
        Campaign {
            id: 3,
            name: "Medicine Authenticity Campaign".into(),
            status: CampaignStatus::Completed,
            budget: 30_000,
            spent: 28_500,
            reach: 89_000,
            conversions: 1850,
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 1, 20),
            target_regions: strings(&["Dhaka", "Rajshahi"]),
            target_audience: "Health-conscious consumers".into(),
        },
    ]
}

// ─── Community sharing ──────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn donation(
    id: u32,
    kind: DonationType,
    title: &str,
    description: &str,
    donor: (&str, &str, &str),
    coordinate: (f64, f64),
    quantity: &str,
    posted_date: NaiveDate,
) -> Donation {
    Donation {
        id,
        kind,
        title: title.into(),
        description: description.into(),
        donor_name: donor.0.into(),
        donor_phone: donor.1.into(),
        donor_address: donor.2.into(),
        lat: coordinate.0,
        lng: coordinate.1,
        quantity: quantity.into(),
        expiry_date: None,
        condition: None,
        event_date: None,
        event_time: None,
        is_available: true,
        posted_date,
        tags: Vec::new(),
    }
}

fn donations() -> Vec<Donation> {
    vec![
        Donation {
            expiry_date: Some(ymd(2024, 1, 27)),
            tags: strings(&["rice", "cooked", "halal"]),
            ..donation(
                1,
                DonationType::Food,
                "Leftover biryani from a wedding",
                "Fresh chicken biryani, packed in boxes. Please collect before evening.",
                ("Hasan Mahmud", "+880 1713-112233", "Dhanmondi 27, Dhaka"),
                (23.7550, 90.3760),
                "40 boxes",
                ymd(2024, 1, 26),
            )
        },
        Donation {
            expiry_date: Some(ymd(2024, 2, 15)),
            tags: strings(&["dry food", "family pack"]),
            ..donation(
                2,
                DonationType::Food,
                "Rice and lentil packs",
                "Monthly grocery packs for families in need.",
                ("Rahman Grocery Store", "+880 1712-345678", "Uttara, Dhaka"),
                (23.8223, 90.3654),
                "15 packs",
                ymd(2024, 1, 24),
            )
        },
        Donation {
            condition: Some("Gently used".into()),
            tags: strings(&["winter", "children"]),
            ..donation(
                3,
                DonationType::Cloth,
                "Winter clothes for children",
                "Sweaters and jackets for ages 5 to 12.",
                ("Ayesha Siddika", "+880 1512-789012", "Gulshan-1, Dhaka"),
                (23.7925, 90.4078),
                "25 pieces",
                ymd(2024, 1, 22),
            )
        },
        Donation {
            event_date: Some(ymd(2024, 2, 3)),
            event_time: Some("10:00 AM".into()),
            tags: strings(&["health", "free"]),
            ..donation(
                4,
                DonationType::Medical,
                "Free diabetes screening camp",
                "Blood sugar and blood pressure checks by volunteer doctors.",
                ("Dhanmondi Pharmacy Plus", "+880 1819-876543", "Dhanmondi, Dhaka"),
                (23.7461, 90.3742),
                "100 slots",
                ymd(2024, 1, 20),
            )
        },
        Donation {
            is_available: false,
            condition: Some("Like new".into()),
            tags: strings(&["books", "SSC"]),
            ..donation(
                5,
                DonationType::Education,
                "SSC textbooks set",
                "Complete science group textbooks from last year.",
                ("Nusrat Jahan", "+880 1911-445566", "Mirpur-2, Dhaka"),
                (23.8050, 90.3630),
                "1 set",
                ymd(2024, 1, 15),
            )
        },
        Donation {
            event_date: Some(ymd(2024, 2, 10)),
            event_time: Some("4:00 PM".into()),
            tags: strings(&["community", "women"]),
            ..donation(
                6,
                DonationType::Event,
                "Women entrepreneurs meetup",
                "Meet local women-led shops and share selling tips.",
                ("Rokeya Begum", "+880 1911-556677", "Mohammadpur, Dhaka"),
                (23.7662, 90.3589),
                "50 seats",
                ymd(2024, 1, 21),
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_ids_unique() {
        let shops = shops();
        let mut ids: Vec<_> = shops.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), shops.len());
    }

    #[test]
    fn test_seed_price_discrepancies_are_reported() {
        let off: Vec<_> = deals()
            .iter()
            .filter_map(|d| d.price_discrepancy().map(|_| d.id))
            .collect();
        assert_eq!(off, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_every_seller_list_non_empty() {
        assert!(deal_sellers().values().all(|v| !v.is_empty()));
    }
}
