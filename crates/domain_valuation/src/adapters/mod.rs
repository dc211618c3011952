//! Adapters for valuation domain ports

pub mod static_market;

pub use static_market::StaticMarketValueAdapter;
