use {
    crate::{
        app::{HomeState, Route},
        config::LINKS,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            backdrop::{HOME_GRID, paint_grid, paint_spotlight},
            styles::fade_in,
        },
    },
    eframe::egui::{
        Align, Button, CentralPanel, Context, CornerRadius, FontId, Id, Layout, Rect, RichText,
        Vec2, vec2,
    },
};

/// Pointer position mapped to -1..=1 on both axes around the centre of `rect`.
pub(crate) fn normalized_pointer(rect: Rect, pointer: eframe::egui::Pos2) -> Vec2 {
    let half = rect.size() * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let d = pointer - rect.center();
    vec2(
        (d.x / half.x).clamp(-1.0, 1.0),
        (d.y / half.y).clamp(-1.0, 1.0),
    )
}

pub(crate) fn render_home(ctx: &Context, state: &mut HomeState) -> Option<Route> {
    let mut nav = None;
    let opacity = fade_in(ctx, state.entered_at, 0.8);

    CentralPanel::default()
        .frame(UI_CONFIG.page_frame())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                state.pointer = normalized_pointer(rect, pos);
            }
            // Ease towards the pointer instead of snapping.
            let eased = vec2(
                ctx.animate_value_with_time(Id::new("home_px"), state.pointer.x, 0.6),
                ctx.animate_value_with_time(Id::new("home_py"), state.pointer.y, 0.6),
            );
            let painter = ui.painter_at(rect);
            paint_grid(&painter, rect, eased, &HOME_GRID);
            paint_spotlight(
                &painter,
                rect.center() + eased * rect.size() * 0.5,
                rect.width().min(rect.height()) * 0.35,
            );

            ui.set_opacity(opacity);

            // Brand mark, top-left
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.brand)
                        .strong()
                        .size(18.0)
                        .color(UI_CONFIG.colors.accent),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .interactive_label(
                            &UI_TEXT.nav_launch_terminal,
                            false,
                            UI_CONFIG.colors.text,
                            FontId::proportional(15.0),
                        )
                        .clicked()
                    {
                        nav = Some(Route::Terminal);
                    }
                    if ui
                        .interactive_label(
                            &UI_TEXT.nav_docs,
                            false,
                            UI_CONFIG.colors.text,
                            FontId::proportional(15.0),
                        )
                        .clicked()
                    {
                        nav = Some(Route::Docs);
                    }
                });
            });

            ui.add_space((rect.height() * 0.25 - 40.0).max(24.0));

            ui.vertical_centered(|ui| {
                ui.set_max_width(720.0_f32.min(rect.width()));
                ui.label(
                    RichText::new(&UI_TEXT.brand)
                        .size(72.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                ui.add_space(16.0);
                ui.label(
                    RichText::new(&UI_TEXT.tagline)
                        .size(20.0)
                        .color(UI_CONFIG.colors.text_subdued),
                );
                ui.add_space(32.0);

                let explore = Button::new(
                    ui.button_text_primary(&UI_TEXT.nav_explore).size(18.0),
                )
                .fill(UI_CONFIG.colors.accent)
                .corner_radius(CornerRadius::same(8))
                .min_size(vec2(220.0, 48.0));
                if ui.add(explore).clicked() {
                    nav = Some(Route::Terminal);
                }

                ui.add_space(40.0);
                ui.horizontal(|ui| {
                    // Centre the row of links under the button.
                    let row_width = 220.0;
                    ui.add_space(((ui.available_width() - row_width) * 0.5).max(0.0));
                    for link in LINKS.all() {
                        ui.hyperlink_to(RichText::new(link.label).size(16.0), link.url);
                        ui.add_space(24.0);
                    }
                });
            });
        });

    nav
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        eframe::egui::{pos2, Rect},
    };

    #[test]
    fn pointer_maps_to_unit_square() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 100.0));
        assert_eq!(normalized_pointer(rect, pos2(100.0, 50.0)), Vec2::ZERO);
        assert_eq!(normalized_pointer(rect, pos2(200.0, 0.0)), vec2(1.0, -1.0));
        assert_eq!(normalized_pointer(rect, pos2(50.0, 75.0)), vec2(-0.5, 0.5));
        // Outside the page clamps.
        assert_eq!(normalized_pointer(rect, pos2(-500.0, 900.0)), vec2(-1.0, 1.0));
    }

    #[test]
    fn empty_rect_gives_centre() {
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(10.0, 10.0));
        assert_eq!(normalized_pointer(rect, pos2(50.0, 50.0)), Vec2::ZERO);
    }
}
