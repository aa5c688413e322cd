use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Ingredients and steps blocks on the detail view
    pub ingredients: ColorSpec,
    pub steps: ColorSpec,

    pub success: ColorSpec,
    pub warning: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),   // Iris
            accent: ColorSpec::rgb(180, 99, 122),     // Love
            banner: ColorSpec::rgb(215, 130, 126),    // Rose
            text: ColorSpec::rgb(87, 82, 121),        // Text
            text_muted: ColorSpec::rgb(152, 147, 165), // Muted
            ingredients: ColorSpec::rgb(40, 105, 131), // Pine
            steps: ColorSpec::rgb(86, 148, 159),      // Foam
            success: ColorSpec::rgb(40, 105, 131),    // Pine
            warning: ColorSpec::rgb(234, 157, 52),    // Gold
            border_active: ColorSpec::rgb(144, 122, 169),
            border_normal: ColorSpec::rgb(152, 147, 165),
            highlight_bg: ColorSpec::rgb(223, 218, 217), // Highlight Med
            highlight_fg: ColorSpec::rgb(87, 82, 121),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),   // Purple
            accent: ColorSpec::rgb(255, 121, 198),    // Pink
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),      // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164), // Comment
            ingredients: ColorSpec::rgb(80, 250, 123), // Green
            steps: ColorSpec::rgb(139, 233, 253),     // Cyan
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(241, 250, 140),   // Yellow
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(98, 114, 164),
            highlight_bg: ColorSpec::rgb(68, 71, 90), // Current Line
            highlight_fg: ColorSpec::rgb(248, 248, 242),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),   // Blue
            accent: ColorSpec::rgb(187, 154, 247),    // Magenta
            banner: ColorSpec::rgb(187, 154, 247),
            text: ColorSpec::rgb(192, 202, 245),      // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),  // Comment
            ingredients: ColorSpec::rgb(158, 206, 106), // Green
            steps: ColorSpec::rgb(125, 207, 255),     // Cyan
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(224, 175, 104),   // Yellow
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(59, 66, 97),
            highlight_bg: ColorSpec::rgb(41, 46, 66),
            highlight_fg: ColorSpec::rgb(192, 202, 245),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::rgb(203, 166, 247),   // Mauve
            accent: ColorSpec::rgb(245, 194, 231),    // Pink
            banner: ColorSpec::rgb(250, 179, 135),    // Peach
            text: ColorSpec::rgb(205, 214, 244),      // Text
            text_muted: ColorSpec::rgb(127, 132, 156), // Overlay 1
            ingredients: ColorSpec::rgb(166, 227, 161), // Green
            steps: ColorSpec::rgb(137, 180, 250),     // Blue
            success: ColorSpec::rgb(166, 227, 161),
            warning: ColorSpec::rgb(249, 226, 175),   // Yellow
            border_active: ColorSpec::rgb(203, 166, 247),
            border_normal: ColorSpec::rgb(88, 91, 112), // Surface 2
            highlight_bg: ColorSpec::rgb(49, 50, 68),   // Surface 0
            highlight_fg: ColorSpec::rgb(205, 214, 244),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "tokyo-night".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }
}
