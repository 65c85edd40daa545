use std::sync::LazyLock;

// Glyphs below are all covered by egui's bundled fonts.
pub const ICON_HOME: &str = "🏠";
pub const ICON_BOOK: &str = "📖";
pub const ICON_GEAR: &str = "⚙";
pub const ICON_PALETTE: &str = "🎨";
pub const ICON_WALLET: &str = "👛";
pub const ICON_GLOBE: &str = "🌐";
pub const ICON_PULSE: &str = "⚡";
pub const ICON_BELL: &str = "🔔";
pub const ICON_CLOCK: &str = "⏰";
pub const ICON_CPU: &str = "🖥";
pub const ICON_DATABASE: &str = "🗄";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_USER: &str = "👤";
pub const ICON_BOT: &str = "◆";
pub const ICON_SEND: &str = "➡";
pub const ICON_COPY: &str = "📋";
pub const ICON_LOCK: &str = "🔒";
pub const ICON_CHEVRON_DOWN: &str = "⏷";
pub const ICON_BACK: &str = "⏴";
pub const ICON_ARROW_RIGHT: &str = "→";
pub const ICON_TREND_UP: &str = "↑";

/// One block of the Documentation page, rendered top to bottom.
#[derive(Debug, Clone, Copy)]
pub enum DocBlock {
    Title(&'static str),
    Heading(&'static str),
    Subheading(&'static str),
    Minor(&'static str),
    Paragraph(&'static str),
    /// Numbered steps: (bold lead, rest of the sentence)
    Steps(&'static [(&'static str, &'static str)]),
    Bullets(&'static [&'static str]),
    /// Bullets with a bold lead: (lead, rest)
    LabeledBullets(&'static [(&'static str, &'static str)]),
    /// Example chat command, highlighted.
    Command { text: &'static str, complex: bool },
    Closing(&'static str),
}

pub struct UiText {
    pub brand: String,
    pub tagline: String,

    // --- Navigation ---
    pub nav_home: String,
    pub nav_docs: String,
    pub nav_back_home: String,
    pub nav_explore: String,
    pub nav_launch_terminal: String,

    // --- Terminal top bar ---
    pub tb_theme: String,
    pub tb_settings: String,
    pub tb_settings_disabled: String,
    pub tb_connect_wallet: String,
    pub tb_wallet_menu: String,
    pub tb_wallet_disabled: String,
    pub tb_wallet_options: &'static [&'static str],

    // --- Trading settings (read-only) ---
    pub ts_quick_mode: String,
    pub ts_anti_mev: String,
    pub ts_quick_buy: String,
    pub ts_max_fee: String,

    // --- Status cards ---
    pub sc_system_status: String,
    pub sc_operational: String,
    pub sc_degraded: String,
    pub sc_node_status: String,
    pub sc_online: String,
    pub sc_offline: String,
    pub sc_response_time: String,
    pub sc_network_load: String,
    pub sc_network_status: String,
    pub sc_mainnet: String,
    pub sc_block_height: String,
    pub sc_tps: String,
    pub sc_network_health: String,
    pub sc_wallet_status: String,
    pub sc_disconnected: String,
    pub sc_connect_prompt: String,
    pub sc_recent_activity: String,
    pub sc_last_24h: String,
    pub sc_no_activity: String,

    // --- Chat pane ---
    pub chat_title: String,
    pub chat_copy_transcript: String,
    pub chat_copied: String,
    pub chat_send: String,

    // --- Whitelist modal ---
    pub wl_title: String,
    pub wl_body: String,
    pub wl_follow: String,
    pub wl_close: String,

    // --- Documentation page ---
    pub docs: &'static [DocBlock],
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    brand: "VERBOT AI".to_string(),
    tagline: "Execute complex BNB trades with simple commands. Powered by AI for lightning-fast, efficient crypto trading.".to_string(),

    nav_home: format!("{} Home", ICON_HOME),
    nav_docs: format!("{} Documentation", ICON_BOOK),
    nav_back_home: format!("{} Back to Home", ICON_BACK),
    nav_explore: format!("Explore Verbot {}", ICON_ARROW_RIGHT),
    nav_launch_terminal: "Launch App".to_string(),

    tb_theme: format!("{} Theme {}", ICON_PALETTE, ICON_CHEVRON_DOWN),
    tb_settings: format!("{} Trading Settings", ICON_GEAR),
    tb_settings_disabled: "Connect a whitelisted wallet to change trading settings".to_string(),
    tb_connect_wallet: "Connect Wallet".to_string(),
    tb_wallet_menu: format!("{} {}", ICON_WALLET, ICON_CHEVRON_DOWN),
    tb_wallet_disabled: "Wallet selection opens after whitelisting".to_string(),
    tb_wallet_options: &["MetaMask", "Trust Wallet", "WalletConnect"],

    ts_quick_mode: "Quick Mode".to_string(),
    ts_anti_mev: "Anti-MEV".to_string(),
    ts_quick_buy: "Quick Buy (BNB)".to_string(),
    ts_max_fee: "Max Fee (Gwei)".to_string(),

    sc_system_status: format!("{} System Status", ICON_PULSE),
    sc_operational: "Operational".to_string(),
    sc_degraded: "Degraded".to_string(),
    sc_node_status: format!("{} Node Status", ICON_CPU),
    sc_online: "Online".to_string(),
    sc_offline: "Offline".to_string(),
    sc_response_time: format!("{} Response Time", ICON_CLOCK),
    sc_network_load: format!("{} Network Load", ICON_DATABASE),
    sc_network_status: format!("{} Network Status", ICON_GLOBE),
    sc_mainnet: "Mainnet".to_string(),
    sc_block_height: "Block Height".to_string(),
    sc_tps: "TPS".to_string(),
    sc_network_health: "Network Health".to_string(),
    sc_wallet_status: format!("{} Wallet Status", ICON_WALLET),
    sc_disconnected: "● Disconnected".to_string(),
    sc_connect_prompt: "Connect wallet to start trading".to_string(),
    sc_recent_activity: format!("{} Recent Activity", ICON_BELL),
    sc_last_24h: "Last 24h".to_string(),
    sc_no_activity: "No recent activity".to_string(),

    chat_title: "Verbot Terminal".to_string(),
    chat_copy_transcript: format!("{} Copy transcript", ICON_COPY),
    chat_copied: "Transcript copied".to_string(),
    chat_send: ICON_SEND.to_string(),

    wl_title: format!("{} Whitelist Access", ICON_LOCK),
    wl_body: "Verbot is currently in closed Beta. Wallet connections are limited to whitelisted addresses while we refine and improve its features.".to_string(),
    wl_follow: "Follow us for whitelist announcements:".to_string(),
    wl_close: "Close".to_string(),

    docs: DOCS,
});

const DOCS: &[DocBlock] = &[
    DocBlock::Title("Documentation"),
    DocBlock::Heading("Introduction"),
    DocBlock::Paragraph(
        "Welcome to Verbot, your AI-driven trading companion on BNB Chain (BSC). Designed for seamless interaction, Verbot leverages cutting-edge natural language understanding to help you manage trades, receive personalized advice, and execute orders securely. By combining advanced AI technology with robust security protocols, Verbot offers a streamlined and safe trading experience. Currently, Verbot is in closed Beta, providing limited access while we refine and improve its features.",
    ),
    DocBlock::Heading("Getting Started"),
    DocBlock::Steps(&[
        ("Navigate to the Agent:", "Begin by clicking on \"Launch App\" from the Verbot dashboard."),
        ("Connect Your Wallet:", "Link your preferred wallet, such as MetaMask, Trust Wallet, or other compatible options on BNB Chain (BSC)."),
        ("Authenticate Your Session:", "Sign a secure message using your wallet to confirm your identity."),
        ("Sign Your BNB Agent:", "Approve the BNB Chain Agent for integration with the BNB Chain API."),
        ("Start Trading:", "Chat with Verbot to execute trades, analyze markets, and manage your portfolio."),
    ]),
    DocBlock::Heading("Key Features"),
    DocBlock::Subheading("Portfolio Management"),
    DocBlock::Bullets(&[
        "View Current Positions: Check your open positions across spot and perpetual markets",
        "View Open Orders (Limit): See all limit orders you have placed",
        "Cancel Orders (Limit): Effortlessly cancel any open limit orders",
    ]),
    DocBlock::Subheading("Order Execution"),
    DocBlock::Minor("Spot Trading"),
    DocBlock::Bullets(&[
        "Market Buy/Sell Orders: Execute instant trades at current market price",
        "Limit Buy/Sell Orders: Set specific price levels for trades",
        "Market Close Positions: Quickly close open positions",
    ]),
    DocBlock::Minor("Perpetual Trading"),
    DocBlock::Bullets(&[
        "Market Long/Short Orders: Open leveraged positions at market price",
        "Limit Long/Short Orders: Set specific price levels for leveraged positions",
        "Take Profit/Stop Loss (TP/SL): Set conditions for risk management",
        "Market Close Positions: Instantly close perpetual positions",
    ]),
    DocBlock::Subheading("Market Analysis"),
    DocBlock::Bullets(&[
        "Chart Display: View multi-token charts for market trends",
        "Chart Analysis: Get key levels analysis from our agent",
        "Token Prices: Instant access to current market prices",
        "Portfolio Analysis: Detailed performance breakdowns",
        "Market Data: Access to comprehensive market metrics",
    ]),
    DocBlock::Heading("Security"),
    DocBlock::LabeledBullets(&[
        ("Agent Signing:", "BNB Chain Agents cannot withdraw funds"),
        ("Wallet Signature:", "Secure session authentication"),
        ("Limited Access:", "Agent can only place/cancel orders"),
        ("Private Keys:", "Your keys remain secure and uncompromised"),
    ]),
    DocBlock::Heading("Example Usage"),
    DocBlock::Subheading("Simple Commands"),
    DocBlock::Command { text: "\"Buy X USDC of BNB\"", complex: false },
    DocBlock::Command { text: "\"Long BNB x3 with 30 USDC\"", complex: false },
    DocBlock::Command { text: "\"What's current X price?\"", complex: false },
    DocBlock::Subheading("Complex Commands"),
    DocBlock::Command {
        text: "\"Buy X USDC of BNB then set a sell limit order for all my BNB at +50% current price\"",
        complex: true,
    },
    DocBlock::Command {
        text: "\"Long BTC x2 with all my USDC then set a TP at +30% and SL at -20%\"",
        complex: true,
    },
    DocBlock::Closing(
        "Verbot is redefining trading with AI-driven solutions, robust security, and unparalleled simplicity. Together, let's create a new standard for seamless and intelligent trading. 🚀",
    ),
];
