use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::aggregator::DealSeller;
use crate::brand::{Campaign, Competitor, Division, Opportunity, WomenEntrepreneur};
use crate::customer::Customer;
use crate::deal::{Deal, DealId};
use crate::donation::Donation;
use crate::seed;
use crate::shop::{Shop, ShopId};
use crate::supplier::Supplier;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Something that can produce a catalog once at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Every read-only collection the dashboards draw from.
///
/// Fields are private and there is no mutating API: once loaded, a catalog is
/// only ever read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    shops: Vec<Shop>,
    deals: Vec<Deal>,
    /// Shops known to carry each deal.
    deal_sellers: BTreeMap<DealId, Vec<DealSeller>>,
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    divisions: Vec<Division>,
    women_entrepreneurs: Vec<WomenEntrepreneur>,
    competitors: Vec<Competitor>,
    campaigns: Vec<Campaign>,
    opportunities: Vec<Opportunity>,
    donations: Vec<Donation>,
}

static SEED: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The built-in seed catalog, built on first use and shared thereafter.
    pub fn seed() -> &'static Catalog {
        SEED.get_or_init(seed::build)
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn deal(&self, id: DealId) -> Option<&Deal> {
        self.deals.iter().find(|d| d.id == id)
    }

    pub fn deal_sellers(&self) -> &BTreeMap<DealId, Vec<DealSeller>> {
        &self.deal_sellers
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Look up a division by its English name (case-insensitive).
    pub fn division(&self, name: &str) -> Option<&Division> {
        self.divisions
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn women_entrepreneurs(&self) -> &[WomenEntrepreneur] {
        &self.women_entrepreneurs
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }
}

/// Assembles a catalog from parts. Used by the seed data and by tests that
/// need a hand-built catalog.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shops(mut self, shops: Vec<Shop>) -> Self {
        self.catalog.shops = shops;
        self
    }

    pub fn deals(mut self, deals: Vec<Deal>) -> Self {
        self.catalog.deals = deals;
        self
    }

    pub fn deal_sellers(mut self, sellers: BTreeMap<DealId, Vec<DealSeller>>) -> Self {
        self.catalog.deal_sellers = sellers;
        self
    }

    pub fn customers(mut self, customers: Vec<Customer>) -> Self {
        self.catalog.customers = customers;
        self
    }

    pub fn suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.catalog.suppliers = suppliers;
        self
    }

    pub fn divisions(mut self, divisions: Vec<Division>) -> Self {
        self.catalog.divisions = divisions;
        self
    }

    pub fn women_entrepreneurs(mut self, women: Vec<WomenEntrepreneur>) -> Self {
        self.catalog.women_entrepreneurs = women;
        self
    }

    pub fn competitors(mut self, competitors: Vec<Competitor>) -> Self {
        self.catalog.competitors = competitors;
        self
    }

    pub fn campaigns(mut self, campaigns: Vec<Campaign>) -> Self {
        self.catalog.campaigns = campaigns;
        self
    }

    pub fn opportunities(mut self, opportunities: Vec<Opportunity>) -> Self {
        self.catalog.opportunities = opportunities;
        self
    }

    pub fn donations(mut self, donations: Vec<Donation>) -> Self {
        self.catalog.donations = donations;
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}

/// The built-in Bangladesh seed data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl CatalogSource for SeedCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::seed().clone())
    }
}

/// A catalog stored as a single JSON document with the same shape as
/// [`Catalog`]. Missing collections load as empty.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let data = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_shared() {
        assert!(std::ptr::eq(Catalog::seed(), Catalog::seed()));
        assert_eq!(Catalog::seed().divisions().len(), 8);
    }

    #[test]
    fn test_seed_source_loads() {
        let catalog = SeedCatalog.load().unwrap();
        assert_eq!(catalog.deals().len(), 6);
        assert_eq!(catalog.suppliers().len(), 5);
    }

    #[test]
    fn test_division_lookup() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.division("sylhet").unwrap().name_bn, "সিলেট");
        assert!(catalog.division("Narnia").is_none());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(Catalog::seed()).unwrap()).unwrap();

        let loaded = JsonCatalog::new(&path).load().unwrap();
        assert_eq!(loaded.shops(), Catalog::seed().shops());
        assert_eq!(loaded.deal_sellers(), Catalog::seed().deal_sellers());
    }

    #[test]
    fn test_json_partial_document() {
        let catalog: Catalog = serde_json::from_str(r#"{"shops": []}"#).unwrap();
        assert!(catalog.shops().is_empty());
        assert!(catalog.deals().is_empty());
    }

    #[test]
    fn test_json_missing_file() {
        let err = JsonCatalog::new("/definitely/not/here.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
