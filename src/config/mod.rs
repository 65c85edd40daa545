//! Configuration module for the Verbot terminal.

// Can all be private now because we have a public re-export.
mod chat;
mod debug;
mod links;
mod simulation;

// Re-export commonly used items
pub use chat::{CHAT, ChatConfig};
pub use debug::{DF, LogFlags};
pub use links::{LINKS, SocialLink, SocialLinks};
pub use simulation::{NetworkSimConfig, NodeSimConfig, SIMULATION, SimulationConfig};
