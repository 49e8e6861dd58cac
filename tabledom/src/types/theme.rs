use super::{Color, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<Color> {
        None
    }
}

// Guards against themes whose variables point at each other.
const MAX_VAR_DEPTH: usize = 8;

/// Resolve a color to RGB, following theme variables.
///
/// Returns `None` for unknown variables.
pub fn resolve_color(color: &Color, theme: &dyn Theme) -> Option<Rgb> {
    let mut current = color.clone();
    for _ in 0..MAX_VAR_DEPTH {
        match current {
            Color::Var(ref name) => {
                current = theme.resolve(name)?;
            }
            ref concrete => return concrete.to_rgb(),
        }
    }
    log::warn!("Theme variable chain too deep starting at {:?}", color);
    None
}
