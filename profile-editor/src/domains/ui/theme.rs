use iced::{Color, Theme, theme};

/// Dark palette with a teal accent
#[derive(Debug, Clone, Copy)]
pub struct ProfileTheme;

impl ProfileTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.06, 0.06, 0.07);
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.22, 0.22, 0.24);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.62, 0.58);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_SUBDUED: Color = Color::from_rgb(0.6, 0.6, 0.6);

    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2);
    pub const INFO: Color = Color::from_rgb(0.2, 0.6, 1.0);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Profile Dark".to_string(), palette)
    }
}
