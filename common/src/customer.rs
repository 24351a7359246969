use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single visit to the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub date: NaiveDate,
    pub items: Vec<String>,
    /// Whole taka.
    pub amount: u64,
    pub paid: bool,
}

/// A shop's regular customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub total_purchases: u64,
    pub last_purchase: NaiveDate,
    pub due_amount: u64,
    pub loyalty_points: u32,
    pub preferred_products: Vec<String>,
    pub purchase_history: Vec<PurchaseRecord>,
}

impl Customer {
    pub fn has_dues(&self) -> bool {
        self.due_amount > 0
    }

    /// Purchases that were taken on credit and not yet settled.
    pub fn unpaid_purchases(&self) -> impl Iterator<Item = &PurchaseRecord> {
        self.purchase_history.iter().filter(|p| !p.paid)
    }
}

/// Sum of outstanding dues across the given customers.
pub fn total_dues<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> u64 {
    customers.into_iter().map(|c| c.due_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_purchases() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let customer = Customer {
            id: "CUST001".into(),
            name: "Abdul Karim".into(),
            phone: "+880 1712-345678".into(),
            location: "Mirpur, Dhaka".into(),
            total_purchases: 125_000,
            last_purchase: day,
            due_amount: 3500,
            loyalty_points: 1250,
            preferred_products: vec!["Rice".into()],
            purchase_history: vec![
                PurchaseRecord {
                    date: day,
                    items: vec!["Rice 5kg".into()],
                    amount: 1200,
                    paid: true,
                },
                PurchaseRecord {
                    date: day,
                    items: vec!["Sugar 2kg".into()],
                    amount: 350,
                    paid: false,
                },
            ],
        };
        assert!(customer.has_dues());
        let unpaid: Vec<_> = customer.unpaid_purchases().collect();
        assert_eq!(unpaid.len(), 1);
        assert_eq!(unpaid[0].amount, 350);
        assert_eq!(total_dues([&customer, &customer]), 7000);
    }
}
