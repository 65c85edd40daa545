use eframe::egui::Context;

use crate::app::{App, Route};

/// One page of the site. `tick` draws a frame and may ask to navigate.
pub(crate) trait PageView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route>;
}
