//! Catalog narrowing.
//!
//! Every filter is a predicate over a borrowed catalog slice. Predicates are
//! combined with AND; an absent filter (or the `"all"` category) is a no-op.
//! Results always keep the catalog's relative order and never touch the source.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::brand::{Campaign, Competitor, Opportunity};
use crate::customer::Customer;
use crate::deal::{Deal, DealStatus, NATIONWIDE};
use crate::donation::Donation;
use crate::location::{valid_coordinate, GeoLocation};
use crate::shop::Shop;
use crate::supplier::Supplier;

/// Category value that disables category filtering.
pub const ALL: &str = "all";

/// The attributes the filter engine can see on an entity.
///
/// Optional attributes default to `None`, meaning "this entity has no such
/// attribute": a filter on that attribute never matches it.
pub trait Filterable {
    /// Text fields searched by case-insensitive substring.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn regions(&self) -> Option<Vec<&str>> {
        None
    }

    fn status(&self) -> Option<&str> {
        None
    }

    fn coordinate(&self) -> Option<GeoLocation> {
        None
    }
}

/// Keep only entities within `radius_km` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFilter {
    pub center: GeoLocation,
    pub radius_km: f64,
}

/// A set of optional predicates applied conjunctively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub search_text: String,
    pub region: Option<String>,
    pub status_in: Option<BTreeSet<String>>,
    pub within: Option<RadiusFilter>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_in = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn within(mut self, center: GeoLocation, radius_km: f64) -> Self {
        self.within = Some(RadiusFilter { center, radius_km });
        self
    }

    /// Deals a customer in `division` can use: active and offered there.
    pub fn deals_for_customer(division: impl Into<String>) -> Self {
        Self::new()
            .with_statuses([DealStatus::Active.as_str()])
            .with_region(division)
    }

    /// Deals a shopkeeper can claim.
    pub fn active_deals() -> Self {
        Self::new().with_statuses([DealStatus::Active.as_str()])
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.matches_category(item)
            && self.matches_search(item)
            && self.matches_region(item)
            && self.matches_status(item)
            && self.matches_radius(item)
    }

    fn matches_category<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match self.category.as_deref() {
            None | Some(ALL) => true,
            Some(wanted) => item.category() == Some(wanted),
        }
    }

    fn matches_search<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_region<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let Some(wanted) = self.region.as_deref() else {
            return true;
        };
        item.regions()
            .is_some_and(|regions| regions.iter().any(|r| *r == wanted || *r == NATIONWIDE))
    }

    fn matches_status<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let Some(allowed) = &self.status_in else {
            return true;
        };
        item.status().is_some_and(|s| allowed.contains(s))
    }

    fn matches_radius<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let Some(radius) = &self.within else {
            return true;
        };
        valid_coordinate(item.coordinate().as_ref())
            .is_some_and(|loc| loc.distance_km(&radius.center) <= radius.radius_km)
    }
}

/// Collects the entities of `items` matching `spec`, in catalog order.
pub fn apply<'a, T: Filterable>(items: &'a [T], spec: &FilterSpec) -> Vec<&'a T> {
    items.iter().filter(|item| spec.matches(*item)).collect()
}

/// A memoized filtered view over a catalog slice.
///
/// Holds the indices of the matching entities and recomputes them only when
/// the spec actually changes.
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    source: &'a [T],
    spec: FilterSpec,
    indices: Vec<usize>,
}

impl<'a, T: Filterable> FilteredView<'a, T> {
    pub fn new(source: &'a [T], spec: FilterSpec) -> Self {
        let indices = Self::compute(source, &spec);
        Self {
            source,
            spec,
            indices,
        }
    }

    fn compute(source: &[T], spec: &FilterSpec) -> Vec<usize> {
        source
            .iter()
            .enumerate()
            .filter(|(_, item)| spec.matches(*item))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Replaces the spec. Returns `true` if the result had to be recomputed.
    pub fn set_spec(&mut self, spec: FilterSpec) -> bool {
        if spec == self.spec {
            return false;
        }
        self.indices = Self::compute(self.source, &spec);
        self.spec = spec;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        let source = self.source;
        self.indices.iter().map(move |&i| &source[i])
    }

    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Customers owing money, narrowed by name or id.
pub fn customers_with_dues<'a>(customers: &'a [Customer], search: &str) -> Vec<&'a Customer> {
    let spec = FilterSpec::new().with_search(search);
    customers
        .iter()
        .filter(|c| c.has_dues() && spec.matches(*c))
        .collect()
}

// ─── Filterable impls ───────────────────────────────────────────────────────

impl Filterable for Shop {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Owned(self.id.to_string())]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(if self.is_open { "open" } else { "closed" })
    }

    fn coordinate(&self) -> Option<GeoLocation> {
        self.location()
    }
}

impl Filterable for Deal {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(&self.brand_name),
            Cow::Borrowed(&self.product_name),
            Cow::Owned(self.id.to_string()),
        ]
    }

    fn regions(&self) -> Option<Vec<&str>> {
        Some(self.regions.iter().map(String::as_str).collect())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Filterable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(&self.id)]
    }
}

impl Filterable for Supplier {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        std::iter::once(Cow::Borrowed(self.name.as_str()))
            .chain(self.products.iter().map(|p| Cow::Borrowed(p.as_str())))
            .collect()
    }
}

impl Filterable for Donation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.title), Cow::Borrowed(&self.donor_name)]
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(if self.is_available {
            "available"
        } else {
            "unavailable"
        })
    }

    fn coordinate(&self) -> Option<GeoLocation> {
        Some(self.location())
    }
}

impl Filterable for Campaign {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name)]
    }

    fn regions(&self) -> Option<Vec<&str>> {
        Some(self.target_regions.iter().map(String::as_str).collect())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Filterable for Opportunity {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.title)]
    }

    fn regions(&self) -> Option<Vec<&str>> {
        Some(vec![self.region.as_str()])
    }
}

impl Filterable for Competitor {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name)]
    }

    fn regions(&self) -> Option<Vec<&str>> {
        Some(vec![self.region.as_str()])
    }
}
