//! Theme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Colors shared by all screens.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Answer feedback
    pub correct: Color,
    pub incorrect: Color,
    pub warning: Color,

    pub bg_dark: Color,
    pub bg_card: Color,
    pub bg_highlight: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Default,
    Rose,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Default, ThemeName::Rose];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rose => "rose",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Tricolour",
            Self::Rose => "Rose Valley",
        }
    }

    /// Unknown names fall back to the default palette.
    pub fn parse(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .unwrap_or(Self::Default)
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|n| n == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// A palette plus the named styles every screen draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Default => Self::default_colors(),
            ThemeName::Rose => Self::rose_colors(),
        };
        Self { name, colors }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(ThemeName::parse(name))
    }

    // Bulgarian flag white, green and red on slate.
    fn default_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(37, 99, 235),
            secondary: Color::Rgb(0, 150, 110),
            accent: Color::Rgb(214, 38, 18),

            correct: Color::Rgb(5, 150, 105),
            incorrect: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(217, 119, 6),

            bg_dark: Color::Rgb(15, 23, 42),
            bg_card: Color::Rgb(30, 41, 59),
            bg_highlight: Color::Rgb(71, 85, 105),

            text: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            text_dim: Color::Rgb(100, 116, 139),
        }
    }

    // Rose oil and valley green on warm dark brown.
    fn rose_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(0xE0, 0x6C, 0x8F),
            secondary: Color::Rgb(0x7F, 0xA8, 0x6A),
            accent: Color::Rgb(0xF2, 0xB6, 0x6D),

            correct: Color::Rgb(0x8F, 0xC0, 0x7A),
            incorrect: Color::Rgb(0xE5, 0x48, 0x4D),
            warning: Color::Rgb(0xF0, 0xA0, 0x4B),

            bg_dark: Color::Rgb(0x1E, 0x17, 0x16),
            bg_card: Color::Rgb(0x2A, 0x21, 0x1F),
            bg_highlight: Color::Rgb(0x4A, 0x38, 0x35),

            text: Color::Rgb(0xF4, 0xEA, 0xE4),
            text_muted: Color::Rgb(0xC4, 0xAE, 0xA6),
            text_dim: Color::Rgb(0x7D, 0x68, 0x62),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Styles
    // ══════════════════════════════════════════════════════════════════════

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.colors.bg_highlight)
            .fg(self.colors.text)
    }

    pub fn prompt(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn verdict(&self, correct: bool) -> Style {
        let color = if correct {
            self.colors.correct
        } else {
            self.colors.incorrect
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Border for an input field.
    pub fn field(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.accent)
        } else {
            Style::default().fg(self.colors.text_muted)
        }
    }

    pub fn toggle(&self, on: bool) -> Style {
        if on {
            Style::default()
                .fg(self.colors.bg_dark)
                .bg(self.colors.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.text_muted)
        }
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.colors.text_dim)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}

pub mod icons {
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const SHUFFLE: &str = "⇄";
    pub const STAR: &str = "★";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ThemeName::ALL {
            assert_eq!(ThemeName::parse(name.as_str()), name);
            assert_eq!(name.next().next(), name);
        }
        assert_eq!(ThemeName::parse(" Rose "), ThemeName::Rose);
        assert_eq!(ThemeName::parse("nonsense"), ThemeName::Default);
    }
}
