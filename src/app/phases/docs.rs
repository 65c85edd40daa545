// app/phases/docs.rs

use eframe::egui::Context;

use crate::app::{App, Route, phases::PageView, state::DocsState};

impl PageView for DocsState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        app.tick_docs(ctx, self)
    }
}
