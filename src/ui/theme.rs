use ratatui::style::Color;

/// Theme color palette defining all colors used by the picker.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// A 24-bit RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Palette entries in field order, after the name.
type Palette = [ColorSpec; 11];

const THEMES: [(&str, Palette); 6] = [
    (
        "tokyo-night",
        [
            ColorSpec::rgb(125, 207, 255), // Blue
            ColorSpec::rgb(255, 159, 196), // Magenta
            ColorSpec::rgb(255, 159, 196), // Magenta
            ColorSpec::rgb(169, 177, 214), // Foreground
            ColorSpec::rgb(117, 121, 148), // Comment
            ColorSpec::rgb(26, 27, 38),    // Background
            ColorSpec::rgb(36, 40, 59),    // Selection
            ColorSpec::rgb(125, 207, 255), // Blue
            ColorSpec::rgb(117, 121, 148), // Comment
            ColorSpec::rgb(125, 207, 255), // Blue
            ColorSpec::rgb(26, 27, 38),    // Background
        ],
    ),
    (
        "rose-pine",
        [
            ColorSpec::rgb(196, 167, 231), // Iris
            ColorSpec::rgb(235, 111, 146), // Love
            ColorSpec::rgb(235, 111, 146), // Love
            ColorSpec::rgb(224, 222, 244), // Text
            ColorSpec::rgb(86, 82, 100),   // Muted
            ColorSpec::rgb(25, 23, 36),    // Base
            ColorSpec::rgb(31, 29, 43),    // Surface
            ColorSpec::rgb(196, 167, 231), // Iris
            ColorSpec::rgb(144, 140, 170), // Subtle
            ColorSpec::rgb(156, 207, 216), // Foam
            ColorSpec::rgb(25, 23, 36),    // Base
        ],
    ),
    (
        "rose-pine-dawn",
        [
            ColorSpec::rgb(161, 119, 255),
            ColorSpec::rgb(255, 109, 146),
            ColorSpec::rgb(255, 109, 146),
            ColorSpec::rgb(88, 82, 96),
            ColorSpec::rgb(152, 147, 165),
            ColorSpec::rgb(250, 244, 237),
            ColorSpec::rgb(255, 250, 243),
            ColorSpec::rgb(161, 119, 255),
            ColorSpec::rgb(88, 82, 96),
            ColorSpec::rgb(61, 174, 233),
            ColorSpec::rgb(0, 0, 0),
        ],
    ),
    (
        "dracula",
        [
            ColorSpec::rgb(189, 147, 249), // Purple
            ColorSpec::rgb(255, 121, 198), // Pink
            ColorSpec::rgb(255, 121, 198), // Pink
            ColorSpec::rgb(248, 248, 242), // Foreground
            ColorSpec::rgb(98, 114, 164),  // Comment
            ColorSpec::rgb(40, 42, 54),    // Background
            ColorSpec::rgb(68, 71, 90),    // Selection
            ColorSpec::rgb(189, 147, 249), // Purple
            ColorSpec::rgb(98, 114, 164),  // Comment
            ColorSpec::rgb(139, 233, 253), // Cyan
            ColorSpec::rgb(40, 42, 54),    // Background
        ],
    ),
    (
        "catppuccin-latte",
        [
            ColorSpec::rgb(136, 57, 239),
            ColorSpec::rgb(234, 118, 203),
            ColorSpec::rgb(234, 118, 203),
            ColorSpec::rgb(76, 79, 105),
            ColorSpec::rgb(108, 111, 133),
            ColorSpec::rgb(239, 241, 245),
            ColorSpec::rgb(230, 233, 239),
            ColorSpec::rgb(136, 57, 239),
            ColorSpec::rgb(108, 111, 133),
            ColorSpec::rgb(32, 159, 181),
            ColorSpec::rgb(239, 241, 245),
        ],
    ),
    (
        "catppuccin-mocha",
        [
            ColorSpec::rgb(203, 166, 247), // Mauve
            ColorSpec::rgb(250, 179, 135), // Peach
            ColorSpec::rgb(245, 189, 230), // Pink
            ColorSpec::rgb(205, 214, 244), // Text
            ColorSpec::rgb(166, 173, 200), // Subtext0
            ColorSpec::rgb(17, 17, 27),    // Base
            ColorSpec::rgb(24, 24, 37),    // Mantle
            ColorSpec::rgb(203, 166, 247), // Mauve
            ColorSpec::rgb(166, 173, 200), // Subtext0
            ColorSpec::rgb(137, 180, 250), // Blue
            ColorSpec::rgb(17, 17, 27),    // Base
        ],
    ),
];

impl Default for Theme {
    fn default() -> Self {
        Theme::from_palette(THEMES[0].0, &THEMES[0].1)
    }
}

impl Theme {
    fn from_palette(name: &str, palette: &Palette) -> Theme {
        let [primary, accent, banner, text, text_muted, background, surface, border_active, border_normal, highlight_bg, highlight_fg] =
            *palette;
        Theme {
            name: name.to_string(),
            primary,
            accent,
            banner,
            text,
            text_muted,
            background,
            surface,
            border_active,
            border_normal,
            highlight_bg,
            highlight_fg,
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        THEMES
            .iter()
            .find(|(theme_name, _)| *theme_name == name)
            .map(|(theme_name, palette)| Theme::from_palette(theme_name, palette))
    }

    /// Get a theme by name, falling back to the default theme.
    ///
    pub fn from_name_or_default(name: &str) -> Self {
        Theme::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default", name);
            Theme::default()
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        THEMES.iter().map(|(name, _)| name.to_string()).collect()
    }
}
