//! Style parameters consumed by the table widgets.
//!
//! Widgets read named parameters from a [`Theme`] and bake the resolved
//! colors into the elements they build. Names understood by the built-in
//! widgets:
//!
//! - `accents_1`: header background, menu item hover background
//! - `accents_3`: row menu trigger glyph
//! - `accents_5`: header text
//! - `border`: header outline
//! - `background`, `foreground`: overlay surface

use std::sync::Arc;

use tabledom::Color;

/// Trait for theme types that resolve named style parameters.
pub trait Theme: Send + Sync + 'static {
    /// Resolve a named color.
    ///
    /// Returns `None` if the color name is not defined in this theme.
    fn resolve(&self, name: &str) -> Option<Color>;

    /// Corner radius in cells; zero means square corners.
    fn radius(&self) -> u16;
}

/// A thread-safe reference to a theme.
pub type ThemeRef = Arc<dyn Theme>;

/// Neutral palette with the accent scale used by the table widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct GeistTheme {
    pub background: Color,
    pub foreground: Color,
    pub accents_1: Color,
    pub accents_2: Color,
    pub accents_3: Color,
    pub accents_5: Color,
    pub border: Color,
    pub radius: u16,
}

impl Default for GeistTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl GeistTheme {
    pub fn light() -> Self {
        Self {
            background: Color::hex(0xffffff),
            foreground: Color::hex(0x000000),
            accents_1: Color::hex(0xfafafa),
            accents_2: Color::hex(0xeaeaea),
            accents_3: Color::hex(0x999999),
            accents_5: Color::hex(0x666666),
            border: Color::hex(0xeaeaea),
            radius: 1,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::hex(0x000000),
            foreground: Color::hex(0xffffff),
            accents_1: Color::hex(0x111111),
            accents_2: Color::hex(0x333333),
            accents_3: Color::hex(0x444444),
            accents_5: Color::hex(0x888888),
            border: Color::hex(0x333333),
            radius: 1,
        }
    }
}

impl Theme for GeistTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "background" | "bg" => Some(self.background.clone()),
            "foreground" | "fg" => Some(self.foreground.clone()),
            "accents_1" => Some(self.accents_1.clone()),
            "accents_2" => Some(self.accents_2.clone()),
            "accents_3" => Some(self.accents_3.clone()),
            "accents_5" => Some(self.accents_5.clone()),
            "border" => Some(self.border.clone()),
            _ => None,
        }
    }

    fn radius(&self) -> u16 {
        self.radius
    }
}

// Lets the same theme resolve `Color::var(..)` references at render time.
impl tabledom::Theme for GeistTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        Theme::resolve(self, name)
    }
}

/// Resolve a named color, falling back to gray when the theme lacks it.
pub fn theme_color(theme: &dyn Theme, name: &str) -> Color {
    theme.resolve(name).unwrap_or_else(|| {
        log::warn!("Unknown theme color '{}', using default", name);
        Color::hex(0x888888)
    })
}
