//! Bounds and cadence of the synthetic terminal metrics.
use std::ops::Range;
use std::time::Duration;

/// Network Status card: block height, throughput, health.
#[derive(Debug, Clone)]
pub struct NetworkSimConfig {
    pub interval: Duration,
    pub initial_block_height: u64,
    pub initial_throughput_tps: u32,
    pub initial_health_pct: f64,
    /// Added to the previous block height on every tick.
    pub block_step: Range<u64>,
    pub throughput_tps: Range<u32>,
    pub health_pct: Range<f64>,
}

/// System Status card: node response time, load and the Online/Degraded flag.
#[derive(Debug, Clone)]
pub struct NodeSimConfig {
    pub interval: Duration,
    pub initial_response_ms: u32,
    pub initial_load_pct: u32,
    pub response_ms: Range<u32>,
    pub load_pct: Range<u32>,
    /// Chance per tick that an Online node drops to Degraded.
    pub degrade_probability: f64,
    /// Degraded always lasts exactly this long.
    pub recovery_delay: Duration,
}

/// The Master Simulation Configuration
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub network: NetworkSimConfig,
    pub node: NodeSimConfig,
    /// UTC clock in the chat header.
    pub clock_interval: Duration,
    /// Header fade-in after the terminal mounts.
    pub reveal_delay: Duration,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    network: NetworkSimConfig {
        interval: Duration::from_secs(45),
        initial_block_height: 31_842_967,
        initial_throughput_tps: 4_298,
        initial_health_pct: 98.9,
        block_step: 5..15,
        throughput_tps: 3_800..4_500,
        health_pct: 97.5..99.9,
    },
    node: NodeSimConfig {
        interval: Duration::from_secs(30),
        initial_response_ms: 32,
        initial_load_pct: 47,
        response_ms: 25..60,
        load_pct: 30..70,
        degrade_probability: 0.001,
        recovery_delay: Duration::from_secs(5),
    },
    clock_interval: Duration::from_secs(1),
    reveal_delay: Duration::from_millis(100),
};
