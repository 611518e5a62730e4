//! Application services (use cases).
//!
//! These services orchestrate the store and the outbound ports behind
//! [`AppState`] to implement each dashboard operation. They know nothing
//! about HTTP; handlers translate requests into calls here.

pub mod chain;
pub mod chart;
pub mod crm;
pub mod portfolio;
pub mod prices;
pub mod state;
pub mod swap;
pub mod transactions;
pub mod wallet;

pub use state::AppState;
