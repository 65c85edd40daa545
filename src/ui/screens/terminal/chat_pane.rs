use eframe::egui::{
    Align, Align2, Button, Color32, CornerRadius, FontId, Frame, Key, Layout, Margin, RichText,
    ScrollArea, Sense, Stroke, TextEdit, Ui, vec2,
};

use crate::{
    app::TerminalState,
    config::CHAT,
    domain::Message,
    engine::ChatSession,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        styles::apply_opacity,
        theme::{ChatTheme, chat_theme},
        ui_text::{ICON_BOT, ICON_USER},
    },
    utils::{AppInstant, TimeUtils},
};

const AVATAR_SIZE: f32 = 28.0;
const INPUT_ROW_HEIGHT: f32 = 56.0;
const COPIED_NOTICE_SECS: f32 = 2.0;

pub(super) fn render(ui: &mut Ui, state: &mut TerminalState) {
    let theme = chat_theme(state.theme_index);
    Frame::new()
        .fill(theme.pane_bg)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            header(ui, state, theme);
            ui.separator();

            let log_height = (ui.available_height() - INPUT_ROW_HEIGHT).max(80.0);
            ScrollArea::vertical()
                .id_salt(state.view_id.with("chat_log"))
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .max_height(log_height)
                .show(ui, |ui| message_log(ui, state.engine.chat(), theme));

            ui.separator();
            input_row(ui, state, theme);
        });
}

fn header(ui: &mut Ui, state: &mut TerminalState, theme: &ChatTheme) {
    ui.horizontal(|ui| {
        avatar(ui, ICON_BOT, theme.avatar, Color32::WHITE);
        ui.label(
            RichText::new(&UI_TEXT.chat_title)
                .strong()
                .size(16.0)
                .color(theme.bot_text),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .interactive_label(
                    &UI_TEXT.chat_copy_transcript,
                    false,
                    theme.timestamp,
                    FontId::proportional(12.0),
                )
                .clicked()
            {
                match state.engine.chat().transcript_json() {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        state.copied_at = Some(AppInstant::now());
                    }
                    Err(e) => log::error!("transcript serialization failed: {}", e),
                }
            }

            let copied_recently = state
                .copied_at
                .is_some_and(|t| t.elapsed().as_secs_f32() < COPIED_NOTICE_SECS);
            if copied_recently {
                ui.label(
                    RichText::new(&UI_TEXT.chat_copied)
                        .small()
                        .color(UI_CONFIG.colors.success),
                );
                ui.ctx().request_repaint_after_secs(0.25);
            }

            ui.label(
                RichText::new(state.engine.clock_text())
                    .monospace()
                    .small()
                    .color(theme.timestamp),
            );
        });
    });
}

fn message_log(ui: &mut Ui, chat: &ChatSession, theme: &ChatTheme) {
    ui.add_space(8.0);
    for msg in chat.messages() {
        bubble(ui, msg, theme);
        ui.add_space(10.0);
    }
    if chat.is_typing() {
        typing_indicator(ui, theme);
    }
}

fn bubble(ui: &mut Ui, msg: &Message, theme: &ChatTheme) {
    let max_width = ui.available_width() * UI_CONFIG.chat_max_bubble_frac;
    let (layout, glyph, fill, fg) = if msg.is_user() {
        (
            Layout::right_to_left(Align::TOP),
            ICON_USER,
            theme.user_bubble,
            theme.user_text,
        )
    } else {
        (
            Layout::left_to_right(Align::TOP),
            ICON_BOT,
            theme.bot_bubble,
            theme.bot_text,
        )
    };

    ui.with_layout(layout, |ui| {
        avatar(ui, glyph, theme.avatar, Color32::WHITE);
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                    ui.label(RichText::new(&msg.text).color(fg));
                    ui.label(
                        RichText::new(TimeUtils::bubble_time(msg.created_at))
                            .small()
                            .color(apply_opacity(fg, 0.6)),
                    );
                });
            });
    });
}

/// Three dots pulsing in turn under the last message.
fn typing_indicator(ui: &mut Ui, theme: &ChatTheme) {
    let time = ui.input(|i| i.time) as f32;
    ui.horizontal(|ui| {
        avatar(ui, ICON_BOT, theme.avatar, Color32::WHITE);
        Frame::new()
            .fill(theme.bot_bubble)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(vec2(36.0, 8.0), Sense::hover());
                for k in 0..3 {
                    let phase = (time * 5.0 - k as f32 * 0.8).sin() * 0.5 + 0.5;
                    let center = rect.left_center() + vec2(4.0 + k as f32 * 14.0, 0.0);
                    ui.painter().circle_filled(
                        center,
                        3.5,
                        apply_opacity(theme.bot_text, 0.3 + 0.7 * phase),
                    );
                }
            });
    });
    ui.ctx().request_repaint();
}

fn input_row(ui: &mut Ui, state: &mut TerminalState, theme: &ChatTheme) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let send_width = 40.0;
        let edit_width = ui.available_width() - send_width - ui.spacing().item_spacing.x;
        let input_id = state.view_id.with("chat_input");

        let response = ui.add(
            TextEdit::singleline(state.engine.input_mut())
                .id(input_id)
                .hint_text(CHAT.input_placeholder)
                .char_limit(CHAT.input_char_limit)
                .desired_width(edit_width)
                .margin(Margin::symmetric(10, 8)),
        );
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        let has_text = !state.engine.chat().input().trim().is_empty();
        let send = ui
            .add_enabled(
                has_text,
                Button::new(RichText::new(&UI_TEXT.chat_send).color(Color32::WHITE))
                    .fill(theme.user_bubble)
                    .corner_radius(CornerRadius::same(8))
                    .min_size(vec2(send_width, 34.0)),
            )
            .clicked();

        if (enter || send) && state.engine.submit_input() {
            response.request_focus();
        }
    });
}

fn avatar(ui: &mut Ui, glyph: &str, bg: Color32, fg: Color32) {
    let (rect, _) = ui.allocate_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE * 0.5, bg);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(14.0),
            fg,
        );
    }
}
