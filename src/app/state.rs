// src/app/state.rs

use {
    eframe::egui::{Id, Vec2},
    std::time::Duration,
};

use crate::{app::Route, engine::TerminalEngine, utils::AppInstant};

pub(crate) enum AppState {
    Home(HomeState),
    Docs(DocsState),
    Terminal(Box<TerminalState>),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home(HomeState::default())
    }
}

impl AppState {
    pub(crate) fn route(&self) -> Route {
        match self {
            AppState::Home(_) => Route::Home,
            AppState::Docs(_) => Route::Docs,
            AppState::Terminal(_) => Route::Terminal,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HomeState {
    pub(crate) entered_at: AppInstant,
    /// Last pointer offset from page centre, -1..=1 per axis. Held when the
    /// pointer leaves the window.
    pub(crate) pointer: Vec2,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            entered_at: AppInstant::now(),
            pointer: Vec2::ZERO,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DocsState {
    pub(crate) entered_at: AppInstant,
}

impl Default for DocsState {
    fn default() -> Self {
        Self {
            entered_at: AppInstant::now(),
        }
    }
}

/// A mounted terminal view. Dropping it unmounts the engine, so leaving the
/// page by any path releases every timer.
pub(crate) struct TerminalState {
    pub(crate) engine: TerminalEngine,
    pub(crate) mounted_at: AppInstant,
    /// Salts per-mount animation ids so a remount starts fresh.
    pub(crate) view_id: Id,
    pub(crate) theme_index: usize,
    pub(crate) copied_at: Option<AppInstant>,
}

impl TerminalState {
    pub(crate) fn mount(seed: Option<u64>, serial: u64) -> Self {
        let mut engine = TerminalEngine::from_seed(seed);
        engine.mount();
        Self {
            engine,
            mounted_at: AppInstant::now(),
            view_id: Id::new("terminal_view").with(serial),
            theme_index: 0,
            copied_at: None,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.mounted_at.elapsed()
    }
}

impl Drop for TerminalState {
    fn drop(&mut self) {
        if self.engine.is_mounted() {
            self.engine.unmount();
        }
    }
}
