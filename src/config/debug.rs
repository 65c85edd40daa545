//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Route changes, view mount/unmount.
    pub log_routing: bool,

    /// Every synthetic network/node sample. Noisy at short intervals.
    pub log_metrics_ticks: bool,

    /// Node Online <-> Degraded transitions.
    pub log_node_status: bool,

    /// Chat submissions and delivered replies.
    pub log_chat: bool,

    /// Dropdown / modal open, close and outside-click dismissal.
    pub log_controls: bool,

    /// Timer registration and cancellation.
    pub log_timers: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_routing: true,
    log_node_status: true,

    log_chat: false,
    log_controls: false,
    log_timers: false,
    log_metrics_ticks: false,
    log_performance: false,
};
