mod format_utils;
mod perf;
mod time_utils;

pub use format_utils::{format_percent, format_thousands};
pub use time_utils::{AppInstant, TimeUtils};
