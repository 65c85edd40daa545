use eframe::egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use crate::{
    domain::{NetworkMetrics, NodeMetrics},
    engine::TerminalEngine,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        ui_text::{ICON_TREND_UP, ICON_WARNING},
    },
    utils::{format_percent, format_thousands},
};

/// Response times above this read as slow.
const SLOW_RESPONSE_MS: u32 = 50;

pub(super) fn render(ui: &mut Ui, engine: &TerminalEngine) {
    ScrollArea::vertical()
        .id_salt("status_cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            system_status(ui, engine.node());
            ui.add_space(16.0);
            network_status(ui, engine.network());
            ui.add_space(16.0);
            wallet_status(ui);
            ui.add_space(16.0);
            recent_activity(ui);
        });
}

fn system_status(ui: &mut Ui, node: &NodeMetrics) {
    let c = UI_CONFIG.colors;
    let (pill, fg, bg) = if node.is_online() {
        (&UI_TEXT.sc_operational, c.success, c.success_soft)
    } else {
        (&UI_TEXT.sc_degraded, c.danger, c.danger_soft)
    };
    ui.card_heading(&UI_TEXT.sc_system_status, Some((pill.as_str(), fg, bg)));
    ui.add_space(6.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        let (status, color) = if node.is_online() {
            (&UI_TEXT.sc_online, c.success)
        } else {
            (&UI_TEXT.sc_offline, c.danger)
        };
        ui.metric(&UI_TEXT.sc_node_status, &format!("● {}", status), color);
        let response_color = if node.response_time_ms > SLOW_RESPONSE_MS {
            c.warning
        } else {
            c.text
        };
        ui.metric(
            &UI_TEXT.sc_response_time,
            &format!("{}ms", node.response_time_ms),
            response_color,
        );
    });
    ui.add_space(6.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.metric(
            &UI_TEXT.sc_network_load,
            &format!("{}%", node.load_pct),
            c.text,
        );
        ui.add_space(4.0);
        ui.gauge("network_load", node.load_pct as f32 / 100.0, c.accent);
    });
}

fn network_status(ui: &mut Ui, net: &NetworkMetrics) {
    let c = UI_CONFIG.colors;
    ui.card_heading(
        &UI_TEXT.sc_network_status,
        Some((UI_TEXT.sc_mainnet.as_str(), c.accent, c.accent_soft)),
    );
    ui.add_space(6.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.metric(
            &UI_TEXT.sc_block_height,
            &format_thousands(net.block_height),
            c.heading,
        );
        ui.metric(
            &UI_TEXT.sc_tps,
            &format!(
                "{} {}",
                format_thousands(u64::from(net.throughput_tps)),
                ICON_TREND_UP
            ),
            c.success,
        );
    });
    ui.add_space(6.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.metric(
            &UI_TEXT.sc_network_health,
            &format_percent(net.health_pct),
            c.text,
        );
        ui.add_space(4.0);
        ui.gauge("network_health", (net.health_pct / 100.0) as f32, c.success);
    });
}

fn wallet_status(ui: &mut Ui) {
    let c = UI_CONFIG.colors;
    ui.card_heading(
        &UI_TEXT.sc_wallet_status,
        Some((UI_TEXT.sc_disconnected.as_str(), c.danger, c.danger_soft)),
    );
    ui.add_space(6.0);
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(ICON_WARNING).size(20.0).color(c.warning));
            ui.label(RichText::new(&UI_TEXT.sc_connect_prompt).color(c.text_subdued));
        });
    });
}

fn recent_activity(ui: &mut Ui) {
    let c = UI_CONFIG.colors;
    ui.horizontal(|ui| {
        ui.label(RichText::new(&UI_TEXT.sc_recent_activity).strong().color(c.heading));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label_subdued(&UI_TEXT.sc_last_24h);
        });
    });
    ui.add_space(6.0);
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&UI_TEXT.sc_no_activity).color(Color32::GRAY));
        });
    });
}
