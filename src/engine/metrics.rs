use rand::Rng;

use crate::{
    config::{DF, SimulationConfig},
    domain::{NetworkMetrics, NodeMetrics, NodeStatus},
};

/// Emitted when the node status flips, so the owner can arm (or note) the
/// recovery timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTransition {
    Degraded,
    Recovered,
}

/// Synthetic Network Status / System Status samples.
///
/// Pure generation: every sample is a fresh set of bounded draws, except the
/// block height which accumulates. Scheduling lives with the owning view.
#[derive(Debug, Clone)]
pub struct MetricsGenerator {
    config: SimulationConfig,
    network: NetworkMetrics,
    node: NodeMetrics,
}

impl MetricsGenerator {
    pub fn new(config: SimulationConfig) -> Self {
        let network = NetworkMetrics {
            block_height: config.network.initial_block_height,
            throughput_tps: config.network.initial_throughput_tps,
            health_pct: config.network.initial_health_pct,
        };
        let node = NodeMetrics {
            response_time_ms: config.node.initial_response_ms,
            load_pct: config.node.initial_load_pct,
            status: NodeStatus::Online,
        };
        Self {
            config,
            network,
            node,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn network(&self) -> &NetworkMetrics {
        &self.network
    }

    pub fn node(&self) -> &NodeMetrics {
        &self.node
    }

    pub fn sample_network<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &NetworkMetrics {
        let cfg = &self.config.network;
        let step = rng.random_range(cfg.block_step.clone());
        self.network = NetworkMetrics {
            block_height: self.network.block_height.saturating_add(step),
            throughput_tps: rng.random_range(cfg.throughput_tps.clone()),
            health_pct: rng.random_range(cfg.health_pct.clone()),
        };
        if DF.log_metrics_ticks {
            log::info!("network sample {:?}", self.network);
        }
        &self.network
    }

    /// Refreshes response time and load. An Online node may drop to Degraded;
    /// a node that is already Degraded ignores the draw and keeps waiting
    /// for its recovery.
    pub fn sample_node<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<NodeTransition> {
        let cfg = &self.config.node;
        self.node.response_time_ms = rng.random_range(cfg.response_ms.clone());
        self.node.load_pct = rng.random_range(cfg.load_pct.clone());

        let degrade = rng.random_bool(cfg.degrade_probability.clamp(0.0, 1.0));
        if DF.log_metrics_ticks {
            log::info!("node sample {:?}", self.node);
        }
        if degrade && self.node.status == NodeStatus::Online {
            self.node.status = NodeStatus::Degraded;
            if DF.log_node_status {
                log::warn!("node status Online -> Degraded");
            }
            return Some(NodeTransition::Degraded);
        }
        None
    }

    pub fn recover_node(&mut self) -> Option<NodeTransition> {
        if self.node.status == NodeStatus::Online {
            return None;
        }
        self.node.status = NodeStatus::Online;
        if DF.log_node_status {
            log::info!("node status Degraded -> Online");
        }
        Some(NodeTransition::Recovered)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::config::SIMULATION,
        proptest::prelude::*,
        rand::{SeedableRng, rngs::StdRng},
    };

    fn config_with_degrade(p: f64) -> SimulationConfig {
        let mut cfg = SIMULATION.clone();
        cfg.node.degrade_probability = p;
        cfg
    }

    #[test]
    fn starts_from_the_configured_samples() {
        let g = MetricsGenerator::new(SIMULATION.clone());
        assert_eq!(g.network().block_height, 31_842_967);
        assert_eq!(g.network().throughput_tps, 4_298);
        assert_eq!(g.node().response_time_ms, 32);
        assert_eq!(g.node().load_pct, 47);
        assert!(g.node().is_online());
    }

    #[test]
    fn degrade_sticks_until_recovered() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = MetricsGenerator::new(config_with_degrade(1.0));
        assert_eq!(g.sample_node(&mut rng), Some(NodeTransition::Degraded));
        // Further ticks while Degraded do not re-trigger.
        assert_eq!(g.sample_node(&mut rng), None);
        assert_eq!(g.node().status, NodeStatus::Degraded);
        assert_eq!(g.recover_node(), Some(NodeTransition::Recovered));
        assert_eq!(g.recover_node(), None);
        assert!(g.node().is_online());
    }

    #[test]
    fn zero_probability_never_degrades() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = MetricsGenerator::new(config_with_degrade(0.0));
        for _ in 0..10_000 {
            assert_eq!(g.sample_node(&mut rng), None);
        }
        assert!(g.node().is_online());
    }

    #[test]
    fn default_probability_is_rare_but_possible() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = MetricsGenerator::new(SIMULATION.clone());
        let mut degrades = 0;
        for _ in 0..100_000 {
            if g.sample_node(&mut rng) == Some(NodeTransition::Degraded) {
                degrades += 1;
                g.recover_node();
            }
        }
        // ~100 expected at p = 0.001.
        assert!((40..200).contains(&degrades), "degrades = {degrades}");
    }

    proptest! {
        #[test]
        fn samples_stay_in_bounds(seed in any::<u64>(), ticks in 1usize..200) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = MetricsGenerator::new(SIMULATION.clone());
            for _ in 0..ticks {
                let prev_height = g.network().block_height;
                let n = *g.sample_network(&mut rng);
                prop_assert!(n.block_height > prev_height);
                prop_assert!((5..15).contains(&(n.block_height - prev_height)));
                prop_assert!((3_800..4_500).contains(&n.throughput_tps));
                prop_assert!(n.health_pct >= 97.5 && n.health_pct <= 99.9);

                g.sample_node(&mut rng);
                let node = g.node();
                prop_assert!((25..60).contains(&node.response_time_ms));
                prop_assert!((30..70).contains(&node.load_pct));
            }
        }
    }
}
