#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Named theme parameter, resolved at render time.
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Concrete RGB value. Variables need a theme, see [`crate::resolve_color`].
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) => None,
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(Color::hex(0xfafafa).to_rgb(), Some(Rgb::new(0xfa, 0xfa, 0xfa)));
        assert_eq!(Color::hex(0x123456).to_rgb(), Some(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Some(Rgb::new(0, 0, 0)));
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb().unwrap();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }

    #[test]
    fn test_var_needs_theme() {
        assert_eq!(Color::var("accents_1").to_rgb(), None);
    }
}
