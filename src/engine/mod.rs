mod chat;
mod controls;
mod core;
mod messages;
mod metrics;
mod timers;

pub use chat::{ChatSession, ReplyTicket};
pub use controls::{ControlKind, Controls, Disclosure};
pub use core::TerminalEngine;
pub use messages::TerminalEvent;
pub use metrics::{MetricsGenerator, NodeTransition};
pub use timers::{Fired, TimerId, TimerQueue};
