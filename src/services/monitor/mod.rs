pub mod types;
pub mod schedule;
pub mod engine;

pub use types::*;
pub use schedule::*;
pub use engine::MonitorEngine;
