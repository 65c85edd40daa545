use std::time::Duration;

pub struct ChatConfig {
    /// Simulated "thinking" time before the assistant answers.
    pub reply_delay: Duration,
    pub greeting: &'static str,
    /// Returned for every submission, whatever was typed.
    pub canned_reply: &'static str,
    pub input_placeholder: &'static str,
    /// Max chars accepted by the input box.
    pub input_char_limit: usize,
}

pub const CHAT: ChatConfig = ChatConfig {
    reply_delay: Duration::from_secs(1),
    greeting: "Welcome to Verbot Terminal. I'm your AI trading assistant. How can I help you today?",
    canned_reply: "I'm sorry, but you need to connect your wallet first to use the terminal.",
    input_placeholder: "Connect your wallet to start trading",
    input_char_limit: 500,
};
