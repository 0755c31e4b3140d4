use serde::{Deserialize, Serialize};

/// Color theme for the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub title: Color,
    pub subtitle: Color,
    pub selected: Color,
    pub selected_bg: Color,

    pub accent: Color,
    pub muted: Color,

    pub stars: Color,
    pub forks: Color,
    pub watchers: Color,
    pub language: Color,
    pub topic: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Get the dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x1e1e2e),
                foreground: Color::rgb(0xcdd6f4),
                border: Color::rgb(0x45475a),
                border_focused: Color::rgb(0x89b4fa),

                success: Color::rgb(0xa6e3a1),
                warning: Color::rgb(0xf9e2af),
                error: Color::rgb(0xf38ba8),

                title: Color::rgb(0xcba6f7),
                subtitle: Color::rgb(0xa6adc8),
                selected: Color::rgb(0x89b4fa),
                selected_bg: Color::rgb(0x313244),

                accent: Color::rgb(0xf9e2af),
                muted: Color::rgb(0x6c7086),

                stars: Color::rgb(0xf9e2af),
                forks: Color::rgb(0x94e2d5),
                watchers: Color::rgb(0x89dceb),
                language: Color::rgb(0xcba6f7),
                topic: Color::rgb(0xf5c2e7),
            },
        }
    }

    /// Get the light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xeff1f5),
                foreground: Color::rgb(0x4c4f69),
                border: Color::rgb(0xbcc0cc),
                border_focused: Color::rgb(0x1e66f5),

                success: Color::rgb(0x40a02b),
                warning: Color::rgb(0xdf8e1d),
                error: Color::rgb(0xd20f39),

                title: Color::rgb(0x8839ef),
                subtitle: Color::rgb(0x6c6f85),
                selected: Color::rgb(0x1e66f5),
                selected_bg: Color::rgb(0xdce0e8),

                accent: Color::rgb(0xdf8e1d),
                muted: Color::rgb(0x9ca0b0),

                stars: Color::rgb(0xdf8e1d),
                forks: Color::rgb(0x04a5e5),
                watchers: Color::rgb(0x209fb5),
                language: Color::rgb(0x8839ef),
                topic: Color::rgb(0xea76cb),
            },
        }
    }

    /// The theme for the persisted dark-mode flag
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Conventional GitHub language colors for the card badges.
/// Unknown languages fall back to the theme's muted color at render time.
pub fn language_color(language: &str) -> Option<Color> {
    let hex = match language {
        "JavaScript" => 0xf1e05a,
        "TypeScript" => 0x2b7489,
        "Python" => 0x3572a5,
        "Java" => 0xb07219,
        "HTML" => 0xe34c26,
        "CSS" => 0x563d7c,
        "C#" => 0x178600,
        "PHP" => 0x4f5d95,
        "C++" => 0xf34b7d,
        "Ruby" => 0x701516,
        "Swift" => 0xffac45,
        "Go" => 0x00add8,
        "Rust" => 0xdea584,
        "Kotlin" => 0xf18e33,
        "Dart" => 0x00b4ab,
        "Shell" => 0x89e051,
        "Vue" => 0x2c3e50,
        _ => return None,
    };
    Some(Color::rgb(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_matches_flag() {
        assert_eq!(Theme::for_mode(true).name, "Dark");
        assert_eq!(Theme::for_mode(false).name, "Light");
    }

    #[test]
    fn test_language_color_lookup() {
        assert_eq!(language_color("Rust"), Some(Color::rgb(0xdea584)));
        assert_eq!(language_color("Befunge"), None);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::rgb(0x89b4fa);
        assert_eq!((c.r, c.g, c.b), (0x89, 0xb4, 0xfa));
    }
}
