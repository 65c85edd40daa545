use eframe::egui::Color32;

/// Colour set for the chat pane. Purely cosmetic, picked from the theme
/// dropdown; the rest of the page keeps the site palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatTheme {
    pub name: &'static str,
    pub pane_bg: Color32,
    pub user_bubble: Color32,
    pub user_text: Color32,
    pub bot_bubble: Color32,
    pub bot_text: Color32,
    pub avatar: Color32,
    pub timestamp: Color32,
}

pub const CHAT_THEMES: &[ChatTheme] = &[
    ChatTheme {
        name: "Default",
        pane_bg: Color32::WHITE,
        user_bubble: Color32::from_rgb(62, 125, 231),
        user_text: Color32::WHITE,
        bot_bubble: Color32::from_rgb(243, 244, 246),
        bot_text: Color32::from_rgb(31, 41, 55),
        avatar: Color32::from_rgb(62, 125, 231),
        timestamp: Color32::from_rgb(156, 163, 175),
    },
    ChatTheme {
        name: "Midnight",
        pane_bg: Color32::from_rgb(17, 24, 39),
        user_bubble: Color32::from_rgb(79, 70, 229),
        user_text: Color32::WHITE,
        bot_bubble: Color32::from_rgb(31, 41, 55),
        bot_text: Color32::from_rgb(229, 231, 235),
        avatar: Color32::from_rgb(129, 140, 248),
        timestamp: Color32::from_rgb(107, 114, 128),
    },
    ChatTheme {
        name: "BNB Gold",
        pane_bg: Color32::from_rgb(255, 251, 235),
        user_bubble: Color32::from_rgb(240, 185, 11),
        user_text: Color32::from_rgb(24, 26, 32),
        bot_bubble: Color32::WHITE,
        bot_text: Color32::from_rgb(24, 26, 32),
        avatar: Color32::from_rgb(202, 138, 4),
        timestamp: Color32::from_rgb(161, 98, 7),
    },
    ChatTheme {
        name: "Terminal",
        pane_bg: Color32::from_rgb(10, 10, 10),
        user_bubble: Color32::from_rgb(20, 83, 45),
        user_text: Color32::from_rgb(134, 239, 172),
        bot_bubble: Color32::from_rgb(23, 23, 23),
        bot_text: Color32::from_rgb(74, 222, 128),
        avatar: Color32::from_rgb(34, 197, 94),
        timestamp: Color32::from_rgb(82, 82, 82),
    },
];

/// Out-of-range indices fall back to the first theme.
pub fn chat_theme(index: usize) -> &'static ChatTheme {
    CHAT_THEMES.get(index).unwrap_or(&CHAT_THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_lookup_falls_back_to_default() {
        assert_eq!(chat_theme(1).name, "Midnight");
        assert_eq!(chat_theme(usize::MAX).name, "Default");
    }

    #[test]
    fn theme_names_are_unique() {
        let mut names: Vec<&str> = CHAT_THEMES.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CHAT_THEMES.len());
    }
}
