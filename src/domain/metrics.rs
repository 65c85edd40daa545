use {
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

/// Network Status sample. Regenerated wholesale on each tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NetworkMetrics {
    /// Only ever grows.
    pub block_height: u64,
    pub throughput_tps: u32,
    pub health_pct: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum NodeStatus {
    #[default]
    Online,
    Degraded,
}

/// System Status sample.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NodeMetrics {
    pub response_time_ms: u32,
    pub load_pct: u32,
    pub status: NodeStatus,
}

impl NodeMetrics {
    pub fn is_online(&self) -> bool {
        self.status == NodeStatus::Online
    }
}
