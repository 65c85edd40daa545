// app/phases/home.rs

use eframe::egui::Context;

use crate::app::{App, Route, phases::PageView, state::HomeState};

impl PageView for HomeState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        app.tick_home(ctx, self)
    }
}
