pub mod config;
pub mod metrics;

pub use config::ClientConfig;
pub use metrics::{Attempt, SessionMetrics};
