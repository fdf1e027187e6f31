// broker/mod.rs

pub mod broker;
pub mod ledger;
pub mod session;

pub use broker::Broker;
pub use ledger::Ledger;
pub use session::Session;
