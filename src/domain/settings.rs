use serde::{Deserialize, Serialize};

/// Trading preferences shown under the (disabled) Trading Settings control.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TradingSettings {
    pub quick_mode: bool,
    pub anti_mev: bool,
    pub quick_buy_amount: String,
    pub max_fee_gwei: u32,
}

impl Default for TradingSettings {
    fn default() -> Self {
        Self {
            quick_mode: false,
            anti_mev: true,
            quick_buy_amount: "0.1".to_string(),
            max_fee_gwei: 30,
        }
    }
}
