use super::chat::ReplyTicket;

/// Everything the terminal view schedules on its timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Network Status refresh (interval).
    NetworkTick,
    /// System Status refresh (interval).
    NodeTick,
    /// End of a Degraded episode (one-shot).
    NodeRecovered,
    /// Canned assistant answer for a submission (one-shot).
    ChatReply(ReplyTicket),
    /// Header UTC clock (interval).
    ClockTick,
    /// Header fade-in (one-shot, right after mount).
    Reveal,
}
