use fltk::enums::Color;

/// Light or dark page appearance. The page always starts light; the mode is
/// flipped only by the footer toggle button and is never persisted or read
/// back from the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// The full set of colors for one appearance.
///
/// `chrome_bg` covers the header, nav and footer bands; it is applied
/// directly to those widgets so nothing else can override it. `section_bg`
/// and `section_text` cover the content sections (contact form, counter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page_bg: Color,
    pub page_text: Color,
    pub chrome_bg: Color,
    pub chrome_text: Color,
    pub link_text: Color,
    pub section_bg: Color,
    pub section_text: Color,
}

impl Palette {
    /// The page's original appearance.
    pub fn light() -> Self {
        Self {
            page_bg: Color::from_rgb(244, 244, 249),
            page_text: Color::from_rgb(51, 51, 51),
            chrome_bg: Color::from_rgb(76, 175, 80),
            chrome_text: Color::White,
            link_text: Color::from_rgb(33, 150, 243),
            section_bg: Color::White,
            section_text: Color::from_rgb(51, 51, 51),
        }
    }

    /// The dark variant: #222/#f4f4f9 page, #111 header/nav/footer,
    /// #4CAF50 links, #333/#eee sections.
    pub fn dark() -> Self {
        Self {
            page_bg: Color::from_rgb(0x22, 0x22, 0x22),
            page_text: Color::from_rgb(0xf4, 0xf4, 0xf9),
            chrome_bg: Color::from_rgb(0x11, 0x11, 0x11),
            chrome_text: Color::from_rgb(0xf4, 0xf4, 0xf9),
            link_text: Color::from_rgb(0x4c, 0xaf, 0x50),
            section_bg: Color::from_rgb(0x33, 0x33, 0x33),
            section_text: Color::from_rgb(0xee, 0xee, 0xee),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_and_double_toggle_restores() {
        let mode = ThemeMode::Light;
        assert_eq!(mode.toggled(), ThemeMode::Dark);
        assert_eq!(mode.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_dark_palette_matches_the_dark_mode_rules() {
        let dark = Palette::dark();
        assert_eq!(dark.page_bg, Color::from_rgb(34, 34, 34));
        assert_eq!(dark.page_text, Color::from_rgb(244, 244, 249));
        assert_eq!(dark.chrome_bg, Color::from_rgb(17, 17, 17));
        assert_eq!(dark.link_text, Color::from_rgb(76, 175, 80));
        assert_eq!(dark.section_bg, Color::from_rgb(51, 51, 51));
        assert_eq!(dark.section_text, Color::from_rgb(238, 238, 238));
    }

    #[test]
    fn test_for_mode_round_trip() {
        let mode = ThemeMode::Light;
        let original = Palette::for_mode(mode);
        let restored = Palette::for_mode(mode.toggled().toggled());
        assert_eq!(original, restored);
    }
}
