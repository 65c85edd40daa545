use eframe::egui::{Align, Button, CornerRadius, FontId, Layout, RichText, Ui, vec2};

use crate::{
    app::{Route, TerminalState},
    engine::ControlKind,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        theme::CHAT_THEMES,
    },
};

pub(super) fn render(ui: &mut Ui, state: &mut TerminalState, reveal: f32) -> Option<Route> {
    let mut nav = None;
    ui.set_opacity(reveal);

    ui.horizontal(|ui| {
        if ui
            .interactive_label(
                &UI_TEXT.brand,
                false,
                UI_CONFIG.colors.accent,
                FontId::proportional(18.0),
            )
            .clicked()
        {
            nav = Some(Route::Home);
        }
        ui.add_space(16.0);
        for (route, label) in [(Route::Home, &UI_TEXT.nav_home), (Route::Docs, &UI_TEXT.nav_docs)] {
            if ui
                .interactive_label(label, false, UI_CONFIG.colors.text, FontId::proportional(14.0))
                .clicked()
            {
                nav = Some(route);
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let connect = Button::new(ui.button_text_primary(&UI_TEXT.tb_connect_wallet))
                .fill(UI_CONFIG.colors.accent)
                .corner_radius(CornerRadius::same(8))
                .min_size(vec2(140.0, 32.0));
            if ui.add(connect).clicked() {
                state.engine.controls_mut().open(ControlKind::Whitelist);
            }

            let settings = state.engine.settings().clone();
            let controls = state.engine.controls_mut();

            ui.anchored_dropdown(
                controls,
                ControlKind::Wallet,
                &UI_TEXT.tb_wallet_menu,
                &UI_TEXT.tb_wallet_disabled,
                |ui| {
                    for wallet in UI_TEXT.tb_wallet_options {
                        ui.label(*wallet);
                    }
                    false
                },
            );

            ui.anchored_dropdown(
                controls,
                ControlKind::Settings,
                &UI_TEXT.tb_settings,
                &UI_TEXT.tb_settings_disabled,
                |ui| {
                    let on_off = |b: bool| if b { "On" } else { "Off" };
                    ui.metric(&UI_TEXT.ts_quick_mode, on_off(settings.quick_mode), UI_CONFIG.colors.text);
                    ui.metric(&UI_TEXT.ts_anti_mev, on_off(settings.anti_mev), UI_CONFIG.colors.text);
                    ui.metric(&UI_TEXT.ts_quick_buy, &settings.quick_buy_amount, UI_CONFIG.colors.text);
                    ui.metric(
                        &UI_TEXT.ts_max_fee,
                        &settings.max_fee_gwei.to_string(),
                        UI_CONFIG.colors.text,
                    );
                    false
                },
            );

            let theme_index = &mut state.theme_index;
            ui.anchored_dropdown(controls, ControlKind::Theme, &UI_TEXT.tb_theme, "", |ui| {
                let mut picked = false;
                for (i, theme) in CHAT_THEMES.iter().enumerate() {
                    let selected = *theme_index == i;
                    if ui
                        .selectable_label(selected, RichText::new(theme.name).color(UI_CONFIG.colors.text))
                        .clicked()
                    {
                        *theme_index = i;
                        picked = true;
                    }
                }
                picked
            });
        });
    });

    nav
}
