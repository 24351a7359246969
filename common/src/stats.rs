//! Summary figures for the dashboard stat tiles.

use std::collections::BTreeMap;

use crate::brand::{Campaign, CampaignStatus, Competitor, Division, Opportunity, Urgency};
use crate::customer::Customer;
use crate::deal::{Deal, DealStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkTotals {
    pub shops: u64,
    pub sales: u64,
    pub women_led: u64,
    /// Mean growth percentage, 0 when there are no divisions.
    pub avg_growth: f64,
}

pub fn network_totals(divisions: &[Division]) -> NetworkTotals {
    let mut totals = divisions.iter().fold(NetworkTotals::default(), |mut acc, d| {
        acc.shops += u64::from(d.shops);
        acc.sales += d.sales;
        acc.women_led += u64::from(d.women_led);
        acc.avg_growth += f64::from(d.growth);
        acc
    });
    if !divisions.is_empty() {
        totals.avg_growth /= divisions.len() as f64;
    }
    totals
}

pub fn competitor_share(competitors: &[Competitor]) -> f32 {
    competitors.iter().map(|c| c.market_share).sum()
}

pub fn high_urgency_count(opportunities: &[Opportunity]) -> usize {
    opportunities
        .iter()
        .filter(|o| o.urgency == Urgency::High)
        .count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignTotals {
    pub active: usize,
    pub budget: u64,
    pub spent: u64,
    pub reach: u64,
    pub conversions: u64,
}

pub fn campaign_totals(campaigns: &[Campaign]) -> CampaignTotals {
    campaigns.iter().fold(CampaignTotals::default(), |mut acc, c| {
        if c.status == CampaignStatus::Active {
            acc.active += 1;
        }
        acc.budget += c.budget;
        acc.spent += c.spent;
        acc.reach += c.reach;
        acc.conversions += c.conversions;
        acc
    })
}

/// Deals per author-set status. Statuses with no deals are absent.
pub fn deal_counts(deals: &[Deal]) -> BTreeMap<DealStatus, usize> {
    let mut counts = BTreeMap::new();
    for deal in deals {
        *counts.entry(deal.status).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerInsights {
    pub customers: usize,
    pub revenue: u64,
    pub dues: u64,
}

pub fn customer_insights(customers: &[Customer]) -> CustomerInsights {
    CustomerInsights {
        customers: customers.len(),
        revenue: customers.iter().map(|c| c.total_purchases).sum(),
        dues: crate::customer::total_dues(customers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_network_totals() {
        let totals = network_totals(Catalog::seed().divisions());
        assert_eq!(totals.shops, 9320);
        assert_eq!(totals.sales, 14_670_000);
        assert_eq!(totals.women_led, 1341);
        assert!((totals.avg_growth - 13.0).abs() < 1e-9);
        assert_eq!(network_totals(&[]), NetworkTotals::default());
    }

    #[test]
    fn test_brand_reducers() {
        let catalog = Catalog::seed();
        assert!((competitor_share(catalog.competitors()) - 39.5).abs() < 1e-4);
        assert_eq!(high_urgency_count(catalog.opportunities()), 3);

        let campaigns = campaign_totals(catalog.campaigns());
        assert_eq!(campaigns.active, 1);
        assert_eq!(campaigns.budget, 180_000);
        assert_eq!(campaigns.spent, 61_000);
        assert_eq!(campaigns.conversions, 5050);

        let counts = deal_counts(catalog.deals());
        assert_eq!(counts.get(&DealStatus::Active), Some(&5));
        assert_eq!(counts.get(&DealStatus::Upcoming), Some(&1));
        assert_eq!(counts.get(&DealStatus::Expired), None);
    }

    #[test]
    fn test_customer_insights() {
        let insights = customer_insights(Catalog::seed().customers());
        assert_eq!(insights.customers, 5);
        assert_eq!(insights.revenue, 658_000);
        assert_eq!(insights.dues, 12_800);
    }
}
