// Domain types and value objects
mod message;
mod metrics;
mod settings;

// Re-export commonly used types to the world
pub use message::{Message, Role};
pub use metrics::{NetworkMetrics, NodeMetrics, NodeStatus};
pub use settings::TradingSettings;
