use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{CHAT, DF, SIMULATION, SimulationConfig},
    domain::{NetworkMetrics, NodeMetrics, TradingSettings},
    utils::TimeUtils,
};

use super::{
    chat::ChatSession,
    controls::Controls,
    messages::TerminalEvent,
    metrics::{MetricsGenerator, NodeTransition},
    timers::{Fired, TimerQueue},
};

/// UI-free state of one terminal view: timers, random source, synthetic
/// metrics, chat log, dropdown/modal controls and the header clock.
///
/// Lifecycle: `mount` arms the intervals, `update(now)` dispatches whatever
/// came due, `unmount` cancels everything. After `unmount`, `update` is inert.
pub struct TerminalEngine<R = StdRng> {
    rng: R,
    timers: TimerQueue<TerminalEvent>,
    metrics: MetricsGenerator,
    chat: ChatSession,
    controls: Controls,
    settings: TradingSettings,
    clock_text: String,
    revealed: bool,
    mounted: bool,
}

impl TerminalEngine<StdRng> {
    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> TerminalEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(SIMULATION, rng)
    }

    pub fn with_config(config: SimulationConfig, mut rng: R) -> Self {
        let session_key = rng.random();
        Self {
            rng,
            timers: TimerQueue::new(),
            metrics: MetricsGenerator::new(config),
            chat: ChatSession::with_greeting(session_key),
            controls: Controls::default(),
            settings: TradingSettings::default(),
            clock_text: TimeUtils::now_http_date(),
            revealed: false,
            mounted: false,
        }
    }

    /// Arms the metric intervals, the clock and the header reveal.
    /// Calling it on a mounted engine does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let cfg = self.metrics.config();
        let (network, node) = (cfg.network.interval, cfg.node.interval);
        let (clock, reveal) = (cfg.clock_interval, cfg.reveal_delay);

        self.timers.every(network, TerminalEvent::NetworkTick);
        self.timers.every(node, TerminalEvent::NodeTick);
        self.timers.every(clock, TerminalEvent::ClockTick);
        self.timers.after(reveal, TerminalEvent::Reveal);
        self.mounted = true;
        if DF.log_routing {
            log::info!("terminal mounted ({} timers armed)", self.timers.len());
        }
    }

    /// Cancels every pending timer, including outstanding chat replies and
    /// node recovery.
    pub fn unmount(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.mounted = false;
        if DF.log_routing {
            log::info!("terminal unmounted ({} timers cancelled)", cancelled);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Dispatches every timer due by `now` (time since mount), in deadline
    /// order. Returns how many events were handled.
    pub fn update(&mut self, now: Duration) -> usize {
        let mut handled = 0;
        while let Some(fired) = self.timers.pop_due(now) {
            self.dispatch(fired);
            handled += 1;
        }
        self.timers.settle(now);
        handled
    }

    /// Time since mount of the next scheduled event, for repaint scheduling.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Submits `text`; an accepted message gets its reply armed one reply
    /// delay from now. Blank text is a no-op.
    pub fn submit(&mut self, text: &str) -> bool {
        let Some(ticket) = self.chat.submit(text) else {
            return false;
        };
        self.timers
            .after(CHAT.reply_delay, TerminalEvent::ChatReply(ticket));
        true
    }

    /// Submits the chat input buffer.
    pub fn submit_input(&mut self) -> bool {
        let Some(ticket) = self.chat.submit_input() else {
            return false;
        };
        self.timers
            .after(CHAT.reply_delay, TerminalEvent::ChatReply(ticket));
        true
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn input_mut(&mut self) -> &mut String {
        self.chat.input_mut()
    }

    pub fn network(&self) -> &NetworkMetrics {
        self.metrics.network()
    }

    pub fn node(&self) -> &NodeMetrics {
        self.metrics.node()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn settings(&self) -> &TradingSettings {
        &self.settings
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    fn dispatch(&mut self, fired: Fired<TerminalEvent>) {
        match fired.event {
            TerminalEvent::NetworkTick => {
                self.metrics.sample_network(&mut self.rng);
            }
            TerminalEvent::NodeTick => {
                if let Some(NodeTransition::Degraded) = self.metrics.sample_node(&mut self.rng) {
                    let delay = self.metrics.config().node.recovery_delay;
                    self.timers.after(delay, TerminalEvent::NodeRecovered);
                }
            }
            TerminalEvent::NodeRecovered => {
                self.metrics.recover_node();
            }
            TerminalEvent::ChatReply(ticket) => {
                self.chat.deliver_reply(ticket);
            }
            TerminalEvent::ClockTick => {
                self.clock_text = TimeUtils::now_http_date();
            }
            TerminalEvent::Reveal => {
                self.revealed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            domain::{NodeStatus, Role},
            engine::ControlKind,
        },
        eframe::egui::pos2,
        proptest::prelude::*,
    };

    fn secs(v: u64) -> Duration {
        Duration::from_secs(v)
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Bare log (no greeting) so scenarios read like the chat contract.
    fn engine(seed: u64) -> TerminalEngine<StdRng> {
        let mut e = TerminalEngine::new(StdRng::seed_from_u64(seed));
        e.chat = ChatSession::new(seed);
        e.mount();
        e
    }

    fn always_degrade() -> SimulationConfig {
        let mut cfg = SIMULATION;
        cfg.node.degrade_probability = 1.0;
        cfg
    }

    fn transcript(e: &TerminalEngine) -> Vec<(Role, String)> {
        e.chat()
            .messages()
            .iter()
            .map(|m| (m.role, m.text.clone()))
            .collect()
    }

    #[test]
    fn buy_scenario_replies_after_one_second() {
        let mut e = engine(1);
        assert!(e.submit("Buy 1 BNB"));
        assert_eq!(transcript(&e), vec![(Role::User, "Buy 1 BNB".to_string())]);
        assert!(e.chat().is_typing());

        e.update(ms(999));
        assert_eq!(e.chat().messages().len(), 1);

        e.update(ms(1000));
        assert_eq!(
            transcript(&e),
            vec![
                (Role::User, "Buy 1 BNB".to_string()),
                (Role::Assistant, CHAT.canned_reply.to_string()),
            ]
        );
        assert!(!e.chat().is_typing());
    }

    #[test]
    fn empty_scenario_changes_nothing() {
        let mut e = engine(1);
        assert!(!e.submit(""));
        e.update(secs(5));
        assert!(e.chat().messages().is_empty());
        assert!(!e.chat().is_typing());
    }

    #[test]
    fn reply_delay_is_measured_from_submission() {
        let mut e = engine(2);
        e.update(ms(2_500));
        e.input_mut().push_str("Long BNB x3 with 30 USDC");
        assert!(e.submit_input());
        assert!(e.input_mut().is_empty());
        e.update(ms(3_499));
        assert_eq!(e.chat().messages().len(), 1);
        e.update(ms(3_500));
        assert_eq!(e.chat().messages().len(), 2);
    }

    #[test]
    fn overlapping_submissions_interleave_in_order() {
        let mut e = engine(3);
        e.submit("first");
        e.update(ms(400));
        e.submit("second");
        e.update(ms(1_000));
        assert!(e.chat().is_typing());
        e.update(ms(1_400));
        let roles: Vec<Role> = e.chat().messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::User, Role::Assistant, Role::Assistant]
        );
        assert!(!e.chat().is_typing());
    }

    #[test]
    fn terminal_opens_with_greeting() {
        let e = TerminalEngine::new(StdRng::seed_from_u64(0));
        assert_eq!(e.chat().messages().len(), 1);
        assert_eq!(e.chat().messages()[0].text, CHAT.greeting);
    }

    #[test]
    fn block_height_grows_every_network_tick() {
        let mut e = engine(4);
        let interval = SIMULATION.network.interval;
        let mut prev = e.network().block_height;
        for n in 1..=50u32 {
            e.update(interval * n);
            let h = e.network().block_height;
            assert!(h > prev, "tick {n}: {h} <= {prev}");
            prev = h;
        }
    }

    #[test]
    fn metrics_do_not_move_before_first_interval() {
        let mut e = engine(5);
        let before = *e.network();
        e.update(SIMULATION.network.interval - ms(1));
        assert_eq!(*e.network(), before);
    }

    #[test]
    fn degraded_recovers_after_exactly_the_fixed_delay() {
        let mut e = TerminalEngine::with_config(always_degrade(), StdRng::seed_from_u64(6));
        e.mount();
        let tick = SIMULATION.node.interval;
        let recovery = SIMULATION.node.recovery_delay;

        e.update(tick);
        assert_eq!(e.node().status, NodeStatus::Degraded);
        e.update(tick + recovery - ms(1));
        assert_eq!(e.node().status, NodeStatus::Degraded);
        e.update(tick + recovery);
        assert_eq!(e.node().status, NodeStatus::Online);
    }

    #[test]
    fn recovery_is_timed_from_the_tick_even_after_a_long_frame() {
        let mut e = TerminalEngine::with_config(always_degrade(), StdRng::seed_from_u64(7));
        e.mount();
        // One late frame covering the tick and its recovery deadline.
        let tick = SIMULATION.node.interval;
        e.update(tick + SIMULATION.node.recovery_delay + ms(10));
        assert_eq!(e.node().status, NodeStatus::Online);
    }

    #[test]
    fn unmount_freezes_everything() {
        let mut e = engine(8);
        e.submit("hello");
        let network = *e.network();
        let node = *e.node();
        let clock = e.clock_text().to_string();
        e.unmount();

        assert_eq!(e.update(secs(3_600)), 0);
        assert_eq!(*e.network(), network);
        assert_eq!(*e.node(), node);
        assert_eq!(e.clock_text(), clock);
        assert_eq!(e.chat().messages().len(), 1);
        assert_eq!(e.next_due(), None);
        assert!(!e.is_revealed());
    }

    #[test]
    fn reveal_fires_once_after_mount() {
        let mut e = engine(9);
        assert!(!e.is_revealed());
        e.update(SIMULATION.reveal_delay);
        assert!(e.is_revealed());
    }

    #[test]
    fn mount_is_idempotent() {
        let mut e = engine(10);
        let armed = e.timers.len();
        e.mount();
        assert_eq!(e.timers.len(), armed);
    }

    #[test]
    fn outside_press_reaches_controls() {
        let mut e = engine(11);
        e.controls_mut().open(ControlKind::Whitelist);
        e.controls_mut()
            .get_mut(ControlKind::Whitelist)
            .set_anchor(eframe::egui::Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        e.controls_mut().dismiss_outside(pos2(50.0, 50.0));
        assert!(!e.controls().is_open(ControlKind::Whitelist));
    }

    proptest! {
        #[test]
        fn every_accepted_submission_gets_exactly_one_reply(
            texts in proptest::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..8),
            gaps in proptest::collection::vec(0u64..1500, 8),
        ) {
            let mut e = engine(12);
            let mut now = Duration::ZERO;
            let mut accepted = 0;
            for (text, gap) in texts.iter().zip(&gaps) {
                now += ms(*gap);
                e.update(now);
                if e.submit(text) {
                    accepted += 1;
                }
            }
            e.update(now + CHAT.reply_delay);

            let msgs = e.chat().messages();
            let users = msgs.iter().filter(|m| m.role == Role::User).count();
            let bots = msgs.iter().filter(|m| m.role == Role::Assistant).count();
            prop_assert_eq!(users, accepted);
            prop_assert_eq!(bots, accepted);
            prop_assert!(!e.chat().is_typing());

            // Every prefix holds at least as many user messages as replies.
            let mut balance = 0i64;
            for m in msgs {
                balance += if m.role == Role::User { 1 } else { -1 };
                prop_assert!(balance >= 0);
            }
        }
    }
}
