mod backdrop;
mod screens;
mod styles;
mod theme;
mod ui_config;
mod ui_text;

pub(crate) use screens::{render_docs, render_home, render_terminal};

pub(crate) use styles::UiStyleExt;

pub use theme::{CHAT_THEMES, ChatTheme};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
