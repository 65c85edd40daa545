use eframe::egui::{Align2, Button, Context, Id, RichText, Vec2, Window};

use crate::{
    config::LINKS,
    engine::{ControlKind, Controls},
    ui::{UI_CONFIG, UI_TEXT},
};

/// Centered window shown after "Connect Wallet". Its rect is the anchor, so
/// a press anywhere else closes it.
pub(super) fn render(ctx: &Context, controls: &mut Controls) {
    if !controls.is_open(ControlKind::Whitelist) {
        return;
    }

    let mut close = false;
    let shown = Window::new(UI_TEXT.wl_title.as_str())
        .id(Id::new("whitelist_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.label(RichText::new(&UI_TEXT.wl_body).color(UI_CONFIG.colors.text));
            ui.add_space(12.0);
            ui.label(RichText::new(&UI_TEXT.wl_follow).color(UI_CONFIG.colors.text_subdued));
            ui.horizontal(|ui| {
                for link in LINKS.all() {
                    ui.hyperlink_to(link.label, link.url);
                    ui.add_space(12.0);
                }
            });
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.add(Button::new(UI_TEXT.wl_close.as_str())).clicked() {
                    close = true;
                }
            });
        });

    if let Some(inner) = shown {
        controls
            .get_mut(ControlKind::Whitelist)
            .set_anchor(inner.response.rect);
    }
    if close {
        controls.close(ControlKind::Whitelist);
    }
}
