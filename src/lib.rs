//! Nexus Portfolio - backend for a crypto portfolio dashboard.
//!
//! Serves a JSON API over an in-memory record store and three upstream
//! services: a price oracle (CoinGecko), a block explorer (Blockscout) and a
//! swap aggregator (1inch).
//!
//! # Architecture
//!
//! - **`domain`** - Records, insert payloads, partial updates and amount math
//! - **`port`** - Traits the services depend on
//!   - `Storage` - keyed record store for six entity kinds
//!   - `PriceOracle`, `BlockExplorer`, `SwapAggregator` - upstream data
//! - **`adapter::outbound`** - `MemoryStore` and the HTTP clients
//! - **`adapter::inbound`** - the axum router and the CLI
//! - **`application`** - one service per dashboard operation
//! - **`infrastructure`** - configuration loading and wiring
//!
//! # Example
//!
//! ```no_run
//! use nexus_portfolio::adapter::outbound::memory::MemoryStore;
//! use nexus_portfolio::domain::NewWallet;
//! use nexus_portfolio::port::Storage;
//!
//! let store = MemoryStore::with_default_tokens();
//! let wallet = store.create_wallet(NewWallet::new("0xABC"));
//! assert_eq!(store.get_wallet_by_address("0xABC"), Some(wallet));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
