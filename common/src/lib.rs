pub mod aggregator;
pub mod brand;
pub mod cart;
pub mod catalog;
pub mod currency;
pub mod customer;
pub mod deal;
pub mod donation;
pub mod filter;
pub mod i18n;
pub mod location;
pub mod marker;
pub mod preferences;
mod seed;
pub mod shop;
pub mod stats;
pub mod supplier;
pub mod transaction;
