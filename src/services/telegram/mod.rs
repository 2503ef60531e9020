pub mod types;
pub mod client;
pub mod notifier;

pub use types::*;
pub use client::*;
pub use notifier::*;
