use {
    eframe::{
        Frame,
        egui::{Context, Key, Visuals},
    },
    std::mem,
};

use crate::{
    Cli,
    app::{AppState, DocsState, HomeState, PageView, Route, TerminalState},
    config::DF,
    trace_time,
    ui::{UI_CONFIG, render_docs, render_home, render_terminal},
};

#[cfg(target_arch = "wasm32")]
use crate::app::location;

pub struct App {
    state: AppState,
    /// Seeds every terminal mount when set, so a session is reproducible.
    seed: Option<u64>,
    mounts: u64,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            state: AppState::default(),
            seed: args.seed,
            mounts: 0,
        };

        #[cfg(target_arch = "wasm32")]
        let initial = location::current().unwrap_or_else(|| Route::resolve(&args.route));
        #[cfg(not(target_arch = "wasm32"))]
        let initial = Route::resolve(&args.route);

        app.state = app.enter(initial);
        if DF.log_routing {
            log::info!("starting at {}", initial.path());
        }
        #[cfg(target_arch = "wasm32")]
        location::set(initial);
        app
    }

    pub fn route(&self) -> Route {
        self.state.route()
    }

    /// Swaps the page. The old page is dropped first, so a terminal being
    /// left has its timers cancelled before anything else mounts.
    pub(crate) fn navigate(&mut self, route: Route) {
        let from = self.state.route();
        if from == route {
            return;
        }
        self.state = AppState::default();
        self.state = self.enter(route);
        if DF.log_routing {
            log::info!("route {} -> {}", from.path(), route.path());
        }
        #[cfg(target_arch = "wasm32")]
        location::set(route);
    }

    fn enter(&mut self, route: Route) -> AppState {
        match route {
            Route::Home => AppState::Home(HomeState::default()),
            Route::Docs => AppState::Docs(DocsState::default()),
            Route::Terminal => {
                self.mounts += 1;
                AppState::Terminal(Box::new(TerminalState::mount(self.seed, self.mounts)))
            }
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if !ctx.input(|i| i.key_pressed(Key::Escape)) {
            return;
        }
        if let AppState::Terminal(t) = &mut self.state {
            let closed = t.engine.controls_mut().dismiss_all();
            if DF.log_controls && !closed.is_empty() {
                log::info!("escape closed {:?}", closed);
            }
        }
    }

    pub(crate) fn tick_home(&mut self, ctx: &Context, state: &mut HomeState) -> Option<Route> {
        render_home(ctx, state)
    }

    pub(crate) fn tick_docs(&mut self, ctx: &Context, state: &mut DocsState) -> Option<Route> {
        render_docs(ctx, state)
    }

    pub(crate) fn tick_terminal(
        &mut self,
        ctx: &Context,
        state: &mut TerminalState,
    ) -> Option<Route> {
        let handled = state.engine.update(state.elapsed());
        if DF.log_timers && handled > 0 {
            log::info!("{} timer event(s) dispatched", handled);
        }

        // Document-level press observer for the dropdowns and the modal.
        // Anchors are from the previous frame's layout.
        let press = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        if let Some(origin) = press {
            state.engine.controls_mut().dismiss_outside(origin);
        }

        let nav = render_terminal(ctx, state);

        if let Some(due) = state.engine.next_due() {
            ctx.request_repaint_after(due.saturating_sub(state.engine.now()));
        }
        nav
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        #[cfg(target_arch = "wasm32")]
        if let Some(route) = location::current() {
            // Back/forward buttons and hand-edited hashes.
            if route != self.state.route() {
                self.navigate(route);
            }
        }

        self.handle_global_shortcuts(ctx);

        let mut current = mem::take(&mut self.state);
        let next = trace_time!("page tick", 16_000, {
            match &mut current {
                AppState::Home(s) => s.tick(self, ctx),
                AppState::Docs(s) => s.tick(self, ctx),
                AppState::Terminal(s) => s.tick(self, ctx),
            }
        });
        self.state = current;

        if let Some(route) = next {
            self.navigate(route);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = UI_CONFIG.colors.page;
    visuals.panel_fill = UI_CONFIG.colors.page;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent;
    visuals.hyperlink_color = UI_CONFIG.colors.accent;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.noninteractive.bg_stroke.color = UI_CONFIG.colors.border;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
