//! JSON-over-HTTP API consumed by the dashboard front end.

mod error;
mod handlers;
mod server;
pub mod types;

pub use server::{router, serve};
