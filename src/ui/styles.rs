use {
    crate::{
        engine::{ControlKind, Controls},
        ui::UI_CONFIG,
        utils::AppInstant,
    },
    eframe::egui::{
        Align, Area, Color32, Context, CornerRadius, FontId, Frame, Id, Layout, Order, Response,
        RichText, Sense, Stroke, StrokeKind, Ui, Vec2, WidgetInfo, WidgetType, vec2,
    },
};

pub(crate) fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.colors.heading)
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// 0.0 -> 1.0 over `seconds` since `since`. Keeps repainting until done.
pub(crate) fn fade_in(ctx: &Context, since: AppInstant, seconds: f32) -> f32 {
    let t = (since.elapsed().as_secs_f32() / seconds.max(f32::EPSILON)).min(1.0);
    if t < 1.0 {
        ctx.request_repaint();
    }
    // Ease-out
    1.0 - (1.0 - t) * (1.0 - t)
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, soft bg on hover, accent bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    /// Label on the left, value pushed to the right edge.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn status_pill(&mut self, text: &str, fg: Color32, bg: Color32);
    /// Card title with an optional pill on the right.
    fn card_heading(&mut self, title: &str, pill: Option<(&str, Color32, Color32)>);
    /// Thin progress bar; the fill eases towards `fraction`.
    fn gauge(&mut self, id_salt: &str, fraction: f32, color: Color32);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
    /// Button plus popup whose open state lives in `controls`. Reports the
    /// button and popup rects as the control's anchor every frame it is laid
    /// out. A disabled control renders dimmed and never opens.
    fn anchored_dropdown(
        &mut self,
        controls: &mut Controls,
        kind: ControlKind,
        label_text: &str,
        disabled_hint: &str,
        content: impl FnOnce(&mut Ui) -> bool,
    );
}

impl UiStyleExt for Ui {
    fn anchored_dropdown(
        &mut self,
        controls: &mut Controls,
        kind: ControlKind,
        label_text: &str,
        disabled_hint: &str,
        content: impl FnOnce(&mut Ui) -> bool,
    ) {
        let enabled = controls.get(kind).is_enabled();
        let popup_id = self.make_persistent_id(("dropdown", kind));
        let btn_response = self
            .add_enabled_ui(enabled, |ui| {
                ui.interactive_label(
                    label_text,
                    controls.is_open(kind),
                    UI_CONFIG.colors.text,
                    FontId::proportional(14.0),
                )
            })
            .inner
            .on_disabled_hover_text(disabled_hint);

        if btn_response.clicked() {
            controls.toggle(kind);
        }
        controls.get_mut(kind).set_anchor(btn_response.rect);

        if !controls.is_open(kind) {
            return;
        }

        let area = Area::new(popup_id)
            .order(Order::Foreground)
            .fixed_pos(btn_response.rect.left_bottom() + vec2(0.0, 4.0));

        let area_response = area.show(self.ctx(), |ui| {
            Frame::popup(ui.style())
                .fill(UI_CONFIG.colors.page)
                .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.style_mut().interaction.selectable_labels = false; // No cursors in popup
                    content(ui)
                })
                .inner
        });

        controls.get_mut(kind).extend_anchor(area_response.response.rect);
        if area_response.inner {
            controls.close(kind);
        }
    }

    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(8.0, 6.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        let enabled = self.is_enabled();
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, enabled, is_selected, text));

        if self.is_rect_visible(rect) {
            let (bg_fill, text_color) = if is_selected {
                (UI_CONFIG.colors.accent_soft, UI_CONFIG.colors.accent)
            } else if response.hovered() || response.has_focus() {
                (UI_CONFIG.colors.hover, UI_CONFIG.colors.heading)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(6),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.text_subdued),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.label(RichText::new(label).color(UI_CONFIG.colors.text_subdued));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(value).strong().monospace().color(color));
            });
        });
    }

    fn status_pill(&mut self, text: &str, fg: Color32, bg: Color32) {
        UI_CONFIG.pill_frame(bg).show(self, |ui| {
            ui.label(RichText::new(text).small().strong().color(fg));
        });
    }

    fn card_heading(&mut self, title: &str, pill: Option<(&str, Color32, Color32)>) {
        self.horizontal(|ui| {
            ui.label(colored_heading(title));
            if let Some((text, fg, bg)) = pill {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.status_pill(text, fg, bg);
                });
            }
        });
    }

    fn gauge(&mut self, id_salt: &str, fraction: f32, color: Color32) {
        let id = Id::new(("gauge", id_salt));
        let shown = self
            .ctx()
            .animate_value_with_time(id, fraction.clamp(0.0, 1.0), 0.5);
        let height = 6.0;
        let (rect, _) =
            self.allocate_exact_size(vec2(self.available_width(), height), Sense::hover());
        if self.is_rect_visible(rect) {
            let radius = CornerRadius::same(3);
            self.painter()
                .rect_filled(rect, radius, UI_CONFIG.colors.border);
            let mut fill = rect;
            fill.set_width(rect.width() * shown);
            self.painter().rect_filled(fill, radius, color);
        }
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }
}
