//! Resolves a deal to the shops known to fulfil it.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::deal::{Deal, DealId};

/// Where a deal can be bought, as shown on the deal card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSeller {
    pub shop_name: String,
    pub owner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_photo: Option<String>,
    pub rating: f32,
    pub phone: String,
    pub address: String,
    pub is_verified: bool,
    pub is_women_led: bool,
    /// Human-readable distance label, e.g. "1.2 km".
    pub distance: String,
}

impl DealSeller {
    /// The record shown for deals with no known sellers.
    pub fn fallback() -> Self {
        Self {
            shop_name: "Local Shop".into(),
            owner_name: "Shop Owner".into(),
            owner_photo: None,
            rating: 4.0,
            phone: "+880 1700-000000".into(),
            address: "Nearby".into(),
            is_verified: false,
            is_women_led: false,
            distance: "1 km".into(),
        }
    }
}

/// A deal joined with the shops that carry it.
#[derive(Debug, Clone)]
pub struct DealListing<'a> {
    pub deal: &'a Deal,
    pub sellers: Cow<'a, [DealSeller]>,
}

impl DealListing<'_> {
    /// True when the sellers are the generic fallback rather than known shops.
    pub fn is_fallback(&self) -> bool {
        matches!(self.sellers, Cow::Owned(_))
    }
}

/// Static deal id → seller list lookup.
#[derive(Debug, Clone, Copy)]
pub struct DealAggregator<'a> {
    sellers: &'a BTreeMap<DealId, Vec<DealSeller>>,
}

impl<'a> DealAggregator<'a> {
    pub fn new(sellers: &'a BTreeMap<DealId, Vec<DealSeller>>) -> Self {
        Self { sellers }
    }

    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::new(catalog.deal_sellers())
    }

    /// Sellers for `deal_id`. Never empty: ids with no (or an empty) entry
    /// resolve to a single [`DealSeller::fallback`].
    pub fn sellers_for(&self, deal_id: DealId) -> Cow<'a, [DealSeller]> {
        match self.sellers.get(&deal_id) {
            Some(list) if !list.is_empty() => Cow::Borrowed(list.as_slice()),
            _ => Cow::Owned(vec![DealSeller::fallback()]),
        }
    }

    /// Denormalized view of `deals` for the deal cards, in input order.
    pub fn listings<I>(&self, deals: I) -> Vec<DealListing<'a>>
    where
        I: IntoIterator<Item = &'a Deal>,
    {
        deals
            .into_iter()
            .map(|deal| DealListing {
                deal,
                sellers: self.sellers_for(deal.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_deal_sellers() {
        let aggregator = DealAggregator::from_catalog(Catalog::seed());
        let sellers = aggregator.sellers_for(1);
        assert_eq!(sellers.len(), 3);
        assert_eq!(sellers[0].shop_name, "Rahman Grocery Store");
        assert!(matches!(sellers, Cow::Borrowed(_)));
    }

    #[test]
    fn test_unknown_deal_falls_back() {
        let aggregator = DealAggregator::from_catalog(Catalog::seed());
        let sellers = aggregator.sellers_for(4);
        assert_eq!(sellers.as_ref(), &[DealSeller::fallback()]);
    }

    #[test]
    fn test_empty_entry_falls_back() {
        let mut table = BTreeMap::new();
        table.insert(7, Vec::new());
        let aggregator = DealAggregator::new(&table);
        assert_eq!(aggregator.sellers_for(7).len(), 1);
    }

    #[test]
    fn test_listings_keep_order_and_flag_fallback() {
        let catalog = Catalog::seed();
        let aggregator = DealAggregator::from_catalog(catalog);
        let listings = aggregator.listings(catalog.deals());
        let ids: Vec<_> = listings.iter().map(|l| l.deal.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(!listings[0].is_fallback());
        assert!(listings[3].is_fallback());
    }
}
