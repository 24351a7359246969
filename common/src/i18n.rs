//! English and Bangla UI strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    /// The other language, for the toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "bn" => Ok(Language::Bn),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static EN: &[(&str, &str)] = &[
    ("common.search", "Search"),
    ("common.filter", "Filter"),
    ("common.radius", "Radius"),
    ("common.category", "Category"),
    ("common.all", "All"),
    ("common.open", "Open"),
    ("common.closed", "Closed"),
    ("common.logout", "Logout"),
    ("common.login", "Log in"),
    ("common.settings", "Settings"),
    ("common.language", "Language"),
    ("common.theme", "Theme"),
    ("common.light", "Light"),
    ("common.dark", "Dark"),
    ("common.english", "English"),
    ("common.bangla", "বাংলা"),
    ("common.home", "Home"),
    ("common.dashboard", "Dashboard"),
    ("common.back", "Back"),
    ("category.all", "All Shops"),
    ("category.grocery", "Grocery"),
    ("category.medicine", "Medicine"),
    ("category.cosmetics", "Cosmetics"),
    ("category.clothing", "Women Clothing"),
    ("category.handmade", "Handmade"),
    ("dashboard.shopsNearby", "Shops Nearby"),
    ("dashboard.withinRadius", "Within {radius}km radius"),
    ("dashboard.shopsFound", "{count} shops found within {radius}km"),
    ("dashboard.shopsFoundCount", "{count} shops found ({radius}km)"),
    ("dashboard.searchPlaceholder", "Search shops or products..."),
    ("dashboard.legend", "Legend"),
    ("dashboard.regularShop", "Regular Shop"),
    ("dashboard.womenLed", "Women-Led"),
    ("dashboard.yourLocation", "Your Location"),
    ("dashboard.inStock", "In Stock"),
    ("shopkeeper.title", "Shopkeeper Dashboard"),
    ("shopkeeper.todaySales", "Today's Sales"),
    ("shopkeeper.weeklySales", "Weekly Sales"),
    ("shopkeeper.monthlySales", "Monthly Sales"),
    ("shopkeeper.inventory", "Inventory"),
    ("shopkeeper.lowStock", "Low Stock Alerts"),
    ("shopkeeper.expiryAlerts", "Expiry Alerts"),
    ("shopkeeper.dueAmount", "Due Amount"),
    ("shopkeeper.profit", "Profit"),
    ("shopkeeper.bestSelling", "Best Selling Products"),
    ("shopkeeper.slowMoving", "Slow Moving Products"),
    ("shopkeeper.reorderSuggestions", "AI Reorder Suggestions"),
    ("shopkeeper.orderProducts", "Order Products"),
    ("shopkeeper.viewInventory", "View Inventory"),
    ("shopkeeper.cashSales", "Cash Sales"),
    ("shopkeeper.digitalSales", "Digital Sales"),
    ("brand.title", "Brand Dashboard"),
    ("brand.salesHeatmap", "Sales Heatmap"),
    ("brand.regionalPerformance", "Regional Performance"),
    ("brand.demandAnalysis", "Demand Analysis"),
    ("brand.productPerformance", "Product Performance"),
    ("brand.marketInsights", "Market Insights"),
    ("brand.shopReach", "Shop Reach"),
    ("brand.customerInsights", "Customer Insights"),
    ("brand.runCampaign", "Run Campaign"),
    ("brand.viewAnalytics", "View Analytics"),
    ("company.title", "Company Dashboard"),
    ("company.supplyChain", "Supply Chain"),
    ("company.productTracking", "Product Tracking"),
    ("company.authenticity", "Authenticity Score"),
    ("company.impactMetrics", "SDG Impact Metrics"),
    ("company.womenEmpowerment", "Women Empowerment"),
    ("company.ruralReach", "Rural Reach"),
    ("company.wasteReduction", "Waste Reduction"),
    ("company.shopNetwork", "Shop Network"),
    ("company.systemHealth", "System Health"),
    ("company.iotDevices", "IoT Devices"),
    ("deals.daysLeft", "{days} days left"),
    ("deals.lastDay", "Last day!"),
    ("deals.availableAt", "Available at"),
    ("dues.pending", "{amount} pending"),
    ("sync.totalSells", "Total Sells"),
    ("sync.totalBuys", "Total Buys"),
    ("sync.lastSynced", "Last synced"),
];

static BN: &[(&str, &str)] = &[
    ("common.search", "অনুসন্ধান"),
    ("common.filter", "ফিল্টার"),
    ("common.radius", "ব্যাসার্ধ"),
    ("common.category", "বিভাগ"),
    ("common.all", "সব"),
    ("common.open", "খোলা"),
    ("common.closed", "বন্ধ"),
    ("common.logout", "লগ আউট"),
    ("common.login", "লগ ইন"),
    ("common.settings", "সেটিংস"),
    ("common.language", "ভাষা"),
    ("common.theme", "থিম"),
    ("common.light", "লাইট"),
    ("common.dark", "ডার্ক"),
    ("common.english", "English"),
    ("common.bangla", "বাংলা"),
    ("common.home", "হোম"),
    ("common.dashboard", "ড্যাশবোর্ড"),
    ("common.back", "ফিরে যান"),
    ("category.all", "সব দোকান"),
    ("category.grocery", "মুদি"),
    ("category.medicine", "ওষুধ"),
    ("category.cosmetics", "প্রসাধনী"),
    ("category.clothing", "মহিলা পোশাক"),
    ("category.handmade", "হস্তনির্মিত"),
    ("dashboard.shopsNearby", "কাছের দোকান"),
    ("dashboard.withinRadius", "{radius} কিমি ব্যাসার্ধের মধ্যে"),
    ("dashboard.shopsFound", "{radius} কিমি এর মধ্যে {count}টি দোকান পাওয়া গেছে"),
    ("dashboard.shopsFoundCount", "{count} দোকান পাওয়া গেছে ({radius}km)"),
    ("dashboard.searchPlaceholder", "দোকান বা পণ্য খুঁজুন..."),
    ("dashboard.legend", "লেজেন্ড"),
    ("dashboard.regularShop", "সাধারণ দোকান"),
    ("dashboard.womenLed", "নারী-পরিচালিত"),
    ("dashboard.yourLocation", "আপনার অবস্থান"),
    ("dashboard.inStock", "স্টকে আছে"),
    ("shopkeeper.title", "দোকানদার ড্যাশবোর্ড"),
    ("shopkeeper.todaySales", "আজকের বিক্রয়"),
    ("shopkeeper.weeklySales", "সাপ্তাহিক বিক্রয়"),
    ("shopkeeper.monthlySales", "মাসিক বিক্রয়"),
    ("shopkeeper.inventory", "ইনভেন্টরি"),
    ("shopkeeper.lowStock", "কম স্টক সতর্কতা"),
    ("shopkeeper.expiryAlerts", "মেয়াদ শেষ সতর্কতা"),
    ("shopkeeper.dueAmount", "বকেয়া পরিমাণ"),
    ("shopkeeper.profit", "লাভ"),
    ("shopkeeper.bestSelling", "সেরা বিক্রিত পণ্য"),
    ("shopkeeper.slowMoving", "ধীর গতির পণ্য"),
    ("shopkeeper.reorderSuggestions", "AI রিঅর্ডার সাজেশন"),
    ("shopkeeper.orderProducts", "পণ্য অর্ডার করুন"),
    ("shopkeeper.viewInventory", "ইনভেন্টরি দেখুন"),
    ("shopkeeper.cashSales", "নগদ বিক্রয়"),
    ("shopkeeper.digitalSales", "ডিজিটাল বিক্রয়"),
    ("brand.title", "ব্র্যান্ড ড্যাশবোর্ড"),
    ("brand.salesHeatmap", "বিক্রয় হিটম্যাপ"),
    ("brand.regionalPerformance", "আঞ্চলিক পারফরম্যান্স"),
    ("brand.demandAnalysis", "চাহিদা বিশ্লেষণ"),
    ("brand.productPerformance", "পণ্যের পারফরম্যান্স"),
    ("brand.marketInsights", "বাজার অন্তর্দৃষ্টি"),
    ("brand.shopReach", "দোকান পৌঁছানো"),
    ("brand.customerInsights", "গ্রাহক অন্তর্দৃষ্টি"),
    ("brand.runCampaign", "ক্যাম্পেইন চালান"),
    ("brand.viewAnalytics", "বিশ্লেষণ দেখুন"),
    ("company.title", "কোম্পানি ড্যাশবোর্ড"),
    ("company.supplyChain", "সাপ্লাই চেইন"),
    ("company.productTracking", "পণ্য ট্র্যাকিং"),
    ("company.authenticity", "প্রামাণিকতা স্কোর"),
    ("company.impactMetrics", "SDG প্রভাব মেট্রিক্স"),
    ("company.womenEmpowerment", "নারী ক্ষমতায়ন"),
    ("company.ruralReach", "গ্রামীণ পৌঁছানো"),
    ("company.wasteReduction", "বর্জ্য হ্রাস"),
    ("company.shopNetwork", "দোকান নেটওয়ার্ক"),
    ("company.systemHealth", "সিস্টেম স্বাস্থ্য"),
    ("company.iotDevices", "IoT ডিভাইস"),
    ("deals.daysLeft", "{days} দিন বাকি"),
    ("deals.lastDay", "শেষ দিন!"),
    ("deals.availableAt", "পাওয়া যাবে"),
    ("dues.pending", "{amount} বকেয়া"),
    ("sync.totalSells", "মোট বিক্রয়"),
    ("sync.totalBuys", "মোট ক্রয়"),
    ("sync.lastSynced", "সর্বশেষ সিঙ্ক"),
];


fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Bn => BN,
    }
}

/// Looks up `key`, returning the key itself when there is no translation.
pub fn t(language: Language, key: &str) -> &str {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Like [`t`], then replaces each `{name}` placeholder with its value.
pub fn t_with(language: Language, key: &str, args: &[(&str, &str)]) -> String {
    let mut out = t(language, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(t(Language::En, "common.open"), "Open");
        assert_eq!(t(Language::Bn, "common.open"), "খোলা");
        assert_eq!(t(Language::Bn, "category.medicine"), "ওষুধ");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(t(Language::En, "nope.missing"), "nope.missing");
    }

    #[test]
    fn test_placeholders() {
        let s = t_with(
            Language::En,
            "dashboard.shopsFound",
            &[("count", "4"), ("radius", "3")],
        );
        assert_eq!(s, "4 shops found within 3km");
        let s = t_with(Language::Bn, "dashboard.withinRadius", &[("radius", "5")]);
        assert_eq!(s, "5 কিমি ব্যাসার্ধের মধ্যে");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let mut en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        let mut bn: Vec<_> = BN.iter().map(|(k, _)| *k).collect();
        en.sort_unstable();
        bn.sort_unstable();
        assert_eq!(en, bn);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("bn".parse::<Language>(), Ok(Language::Bn));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::En.toggled(), Language::Bn);
    }
}
