use crate::supplier::{Supplier, SupplierProduct};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("supplier {supplier} has no product named {product}")]
    UnknownProduct { supplier: String, product: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub supplier: String,
    pub product: SupplierProduct,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// A shopkeeper's pending wholesale order, possibly across suppliers.
///
/// Quantities never drop below the product's minimum order quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, supplier: &str, product: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.supplier == supplier && i.product.name == product)
    }

    /// Adds one minimum-quantity batch of `product` from `supplier`.
    pub fn add(&mut self, supplier: &Supplier, product: &str) -> Result<&CartItem, CartError> {
        let product = supplier
            .product(product)
            .ok_or_else(|| CartError::UnknownProduct {
                supplier: supplier.name.clone(),
                product: product.to_string(),
            })?;
        let idx = match self.position(&supplier.name, &product.name) {
            Some(idx) => {
                self.items[idx].quantity += product.min_qty;
                idx
            }
            None => {
                self.items.push(CartItem {
                    supplier: supplier.name.clone(),
                    product: product.clone(),
                    quantity: product.min_qty,
                });
                self.items.len() - 1
            }
        };
        Ok(&self.items[idx])
    }

    /// Changes the quantity by `delta`, clamped to the minimum order quantity.
    /// Returns the new quantity, or `None` if the item is not in the cart.
    pub fn update_quantity(&mut self, supplier: &str, product: &str, delta: i64) -> Option<u32> {
        let idx = self.position(supplier, product)?;
        let item = &mut self.items[idx];
        let min = i64::from(item.product.min_qty);
        let next = (i64::from(item.quantity) + delta).max(min);
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    pub fn remove(&mut self, supplier: &str, product: &str) -> bool {
        let before = self.items.len();
        self.items
            .retain(|i| !(i.supplier == supplier && i.product.name == product));
        self.items.len() != before
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn pran() -> &'static Supplier {
        &Catalog::seed().suppliers()[0]
    }

    #[test]
    fn test_add_starts_at_min_and_steps_by_min() {
        let mut cart = Cart::new();
        let item = cart.add(pran(), "PRAN Aromatic Rice 5kg").unwrap();
        assert_eq!(item.quantity, 20);
        let item = cart.add(pran(), "PRAN Aromatic Rice 5kg").unwrap();
        assert_eq!(item.quantity, 40);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 40 * 365);
    }

    #[test]
    fn test_update_clamps_to_min() {
        let mut cart = Cart::new();
        cart.add(pran(), "PRAN Mango Juice 1L").unwrap();
        let supplier = pran().name.as_str();
        assert_eq!(cart.update_quantity(supplier, "PRAN Mango Juice 1L", 10), Some(58));
        assert_eq!(cart.update_quantity(supplier, "PRAN Mango Juice 1L", -100), Some(48));
        assert_eq!(cart.update_quantity(supplier, "Nothing", 1), None);
    }

    #[test]
    fn test_remove_and_unknown_product() {
        let mut cart = Cart::new();
        cart.add(pran(), "PRAN Chanachur 150g").unwrap();
        assert!(cart.remove(&pran().name, "PRAN Chanachur 150g"));
        assert!(!cart.remove(&pran().name, "PRAN Chanachur 150g"));
        assert!(cart.is_empty());
        assert!(matches!(
            cart.add(pran(), "Caviar"),
            Err(CartError::UnknownProduct { .. })
        ));
    }
}
