use serde::{Deserialize, Serialize};

pub type SupplierId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierType {
    Manufacturer,
    Distributor,
    Wholesaler,
}

/// One line of a supplier's wholesale price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProduct {
    pub name: String,
    /// Whole taka per unit.
    pub price: u64,
    pub unit: String,
    pub min_qty: u32,
    pub in_stock: bool,
}

/// A large supplier shopkeepers can order stock from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SupplierType,
    pub products: Vec<String>,
    /// Minimum order value in taka.
    pub min_order: u64,
    pub delivery_time: String,
    pub rating: f32,
    pub verified: bool,
    pub contact: String,
    pub price_list: Vec<SupplierProduct>,
}

impl Supplier {
    pub fn product(&self, name: &str) -> Option<&SupplierProduct> {
        self.price_list.iter().find(|p| p.name == name)
    }
}
