//! Infrastructure configuration modules.

pub mod dashboard;
pub mod logging;
pub mod server;
pub mod settings;
pub mod upstream;
