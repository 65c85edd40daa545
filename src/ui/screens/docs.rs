use {
    crate::{
        app::{DocsState, Route},
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            styles::{colored_heading, fade_in},
            ui_text::DocBlock,
        },
    },
    eframe::egui::{
        Align, CentralPanel, Context, CornerRadius, FontId, Frame, Layout, Margin, RichText,
        ScrollArea, Stroke, TopBottomPanel, Ui,
    },
};

pub(crate) fn render_docs(ctx: &Context, state: &mut DocsState) -> Option<Route> {
    let mut nav = None;
    let opacity = fade_in(ctx, state.entered_at, 0.4);

    TopBottomPanel::top("docs_header")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
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
                            &UI_TEXT.nav_back_home,
                            false,
                            UI_CONFIG.colors.text,
                            FontId::proportional(14.0),
                        )
                        .clicked()
                    {
                        nav = Some(Route::Home);
                    }
                });
            });
        });

    CentralPanel::default()
        .frame(UI_CONFIG.page_frame())
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = UI_CONFIG.docs_max_width.min(ui.available_width());
                    let side = ((ui.available_width() - width) * 0.5).max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(side);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            for block in UI_TEXT.docs {
                                render_block(ui, block);
                            }
                            ui.add_space(48.0);
                        });
                    });
                });
        });

    nav
}

fn render_block(ui: &mut Ui, block: &DocBlock) {
    let text = UI_CONFIG.colors.text;
    match *block {
        DocBlock::Title(t) => {
            ui.add_space(24.0);
            ui.label(colored_heading(t).size(36.0));
            ui.add_space(16.0);
        }
        DocBlock::Heading(t) => {
            ui.add_space(24.0);
            ui.label(colored_heading(t).size(26.0));
            ui.add_space(8.0);
        }
        DocBlock::Subheading(t) => {
            ui.add_space(12.0);
            ui.label(colored_heading(t).size(20.0));
            ui.add_space(4.0);
        }
        DocBlock::Minor(t) => {
            ui.add_space(6.0);
            ui.label(RichText::new(t).strong().size(16.0).color(text));
        }
        DocBlock::Paragraph(t) => {
            ui.label(RichText::new(t).size(16.0).color(text));
        }
        DocBlock::Steps(steps) => {
            for (i, (lead, rest)) in steps.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}.", i + 1)).size(16.0).color(text));
                    ui.label(RichText::new(*lead).strong().size(16.0).color(text));
                    ui.label(RichText::new(*rest).size(16.0).color(text));
                });
            }
        }
        DocBlock::Bullets(items) => {
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("•").color(UI_CONFIG.colors.accent));
                    ui.label(RichText::new(*item).size(16.0).color(text));
                });
            }
        }
        DocBlock::LabeledBullets(items) => {
            for (lead, rest) in items {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("•").color(UI_CONFIG.colors.accent));
                    ui.label(RichText::new(*lead).strong().size(16.0).color(text));
                    ui.label(RichText::new(*rest).size(16.0).color(text));
                });
            }
        }
        DocBlock::Command { text: cmd, complex } => {
            let (fill, stroke) = if complex {
                (UI_CONFIG.colors.card, UI_CONFIG.colors.border)
            } else {
                (UI_CONFIG.colors.accent_soft, UI_CONFIG.colors.accent)
            };
            ui.add_space(4.0);
            Frame::new()
                .fill(fill)
                .stroke(Stroke::new(1.0, stroke))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(cmd).monospace().color(text));
                });
        }
        DocBlock::Closing(t) => {
            ui.add_space(32.0);
            ui.separator();
            ui.add_space(16.0);
            ui.label(RichText::new(t).size(16.0).italics().color(text));
        }
    }
}
