mod chat_pane;
mod status_cards;
mod top_bar;
mod whitelist;

use eframe::egui::{CentralPanel, Context, SidePanel, TopBottomPanel};

use crate::{
    app::{Route, TerminalState},
    ui::{
        UI_CONFIG,
        backdrop::{STATIC_GRID, paint_grid},
    },
};

/// Top bar, status column, chat pane and (when open) the whitelist modal.
pub(crate) fn render_terminal(ctx: &Context, state: &mut TerminalState) -> Option<Route> {
    // Header slides in shortly after mount.
    let reveal = ctx.animate_bool_with_time(
        state.view_id.with("reveal"),
        state.engine.is_revealed(),
        0.7,
    );

    let nav = TopBottomPanel::top("terminal_top")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| top_bar::render(ui, state, reveal))
        .inner;

    SidePanel::left("terminal_status")
        .exact_width(UI_CONFIG.side_panel_width)
        .resizable(false)
        .show_separator_line(false)
        .frame(UI_CONFIG.side_panel_frame())
        .show(ctx, |ui| status_cards::render(ui, &state.engine));

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            paint_grid(ui.painter(), ui.max_rect(), Default::default(), &STATIC_GRID);
            chat_pane::render(ui, state);
        });

    whitelist::render(ctx, state.engine.controls_mut());

    nav
}
