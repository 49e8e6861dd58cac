use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.text_style.uppercase = true;
        self
    }

    /// Style a child inherits: colors fall through unless the child sets its own.
    /// Borders never inherit.
    pub fn inherit(&self, child: &Style) -> Style {
        Style {
            background: child.background.clone().or_else(|| self.background.clone()),
            foreground: child.foreground.clone().or_else(|| self.foreground.clone()),
            border: child.border,
            border_color: child.border_color.clone(),
            text_style: self.text_style.union(child.text_style),
        }
    }
}
