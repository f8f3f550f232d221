//! Command implementations for the Faktum CLI.

mod config;
mod fact;
mod serve;

pub use config::run_config;
pub use fact::run_fact;
pub use serve::run_serve;
