use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming (light site palette)
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub page: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_subdued: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub success: Color32,
    pub success_soft: Color32,
    pub danger: Color32,
    pub danger_soft: Color32,
    pub warning: Color32,
    pub hover: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub chat_max_bubble_frac: f32,
    pub docs_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        page: Color32::WHITE,
        card: Color32::from_rgb(249, 250, 251),
        border: Color32::from_rgb(229, 231, 235),
        text: Color32::from_rgb(31, 41, 55),
        text_subdued: Color32::from_rgb(107, 114, 128),
        heading: Color32::from_rgb(17, 24, 39),
        accent: Color32::from_rgb(62, 125, 231), // Brand blue
        accent_soft: Color32::from_rgb(239, 246, 255),
        success: Color32::from_rgb(22, 163, 74),
        success_soft: Color32::from_rgb(240, 253, 244),
        danger: Color32::from_rgb(220, 38, 38),
        danger_soft: Color32::from_rgb(254, 242, 242),
        warning: Color32::from_rgb(245, 158, 11),
        hover: Color32::from_rgb(243, 244, 246),
    },
    side_panel_width: 300.0,
    chat_max_bubble_frac: 0.8,
    docs_max_width: 800.0,
};

impl UiConfig {
    /// Full-page frame for Home and Docs
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for the terminal's top bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    /// Frame for the status column
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin {
                left: 4,
                right: 12,
                top: 12,
                bottom: 12,
            },
            ..Default::default()
        }
    }

    /// Rounded, bordered box used for every status card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Small rounded tag ("Operational", "Mainnet", ...)
    pub fn pill_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 2),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }
}
