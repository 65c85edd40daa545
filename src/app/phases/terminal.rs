// app/phases/terminal.rs

use eframe::egui::Context;

use crate::app::{App, Route, phases::PageView, state::TerminalState};

impl PageView for TerminalState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        app.tick_terminal(ctx, self)
    }
}
