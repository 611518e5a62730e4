//! Outbound adapters (driven side).

pub mod blockscout;
pub mod coingecko;
pub mod http;
pub mod memory;
pub mod oneinch;
