//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`Storage`] - Record store for the six dashboard entity kinds
//! - [`PriceOracle`] - USD spot prices
//! - [`BlockExplorer`] - Address balances, activity and chain statistics
//! - [`SwapAggregator`] - Swap quotes and signable swap transactions

mod explorer;
mod oracle;
mod store;
mod swap;

pub use explorer::{BlockExplorer, ChainStats, ExplorerTransaction, GasPricePoint, TokenBalance};
pub use oracle::PriceOracle;
pub use store::Storage;
pub use swap::{SwapAggregator, SwapQuote, SwapRequest, SwapTransaction};
