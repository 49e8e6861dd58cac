#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    Flex(u16),
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    /// Positioned against the nearest positioned ancestor, outside normal flow.
    Absolute,
    /// Pinned to the viewport, outside normal flow.
    Fixed,
}

impl Position {
    /// Whether an element with this position reserves space in its parent.
    pub const fn in_flow(self) -> bool {
        matches!(self, Position::Static | Position::Relative)
    }
}

/// Whether an element is drawn and whether it occupies layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Occupies its natural space but draws nothing (zero opacity).
    Hidden,
    /// Takes no space and draws nothing.
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Cells consumed on each axis (both sides).
    pub const fn thickness(self) -> u16 {
        match self {
            Border::None => 0,
            Border::Single | Border::Rounded => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub uppercase: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            uppercase: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Combine with a child style; flags set on either side stay set.
    pub const fn union(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
            uppercase: self.uppercase || other.uppercase,
        }
    }
}
