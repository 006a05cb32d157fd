use std::collections::HashMap;
use std::sync::RwLock;

use colored::{Color, Colorize};
use lazy_static::lazy_static;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Category badges
    KindBerita,
    KindPengumuman,

    // UI colors
    Accent,
    Header,
    Border,
    Selection,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Secondary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    /// Emerald accents with blue news and orange announcement badges
    pub fn emerald() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::KindBerita, Color::Blue);
        colors.insert(SemanticColor::KindPengumuman, Color::TrueColor { r: 234, g: 88, b: 12 });

        colors.insert(SemanticColor::Accent, Color::TrueColor { r: 5, g: 150, b: 105 });
        colors.insert(SemanticColor::Header, Color::TrueColor { r: 4, g: 120, b: 87 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Selection, Color::BrightGreen);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 200, g: 200, b: 200 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 130, g: 130, b: 130 });

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::emerald()
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::default());
}

pub fn current_theme() -> ColorTheme {
    THEME.read().map(|t| t.clone()).unwrap_or_default()
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|t| t.get(semantic))
        .unwrap_or(Color::White)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.as_str().color(theme_color(semantic))
    }
}

pub mod helpers {
    use super::*;
    use crate::models::NewsKind;

    pub fn kind_color(kind: NewsKind) -> SemanticColor {
        match kind {
            NewsKind::Berita => SemanticColor::KindBerita,
            NewsKind::Pengumuman => SemanticColor::KindPengumuman,
        }
    }

    pub fn kind_symbol(kind: NewsKind) -> &'static str {
        match kind {
            NewsKind::Berita => "◆",
            NewsKind::Pengumuman => "▲",
        }
    }
}
