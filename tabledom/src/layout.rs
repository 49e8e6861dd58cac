//! Size measurement.
//!
//! Elements are measured by their natural (content-driven) size. A container
//! only counts children that take part in normal flow: collapsed children and
//! children positioned `Absolute` or `Fixed` reserve no space.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::{Direction, Size, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Whether an element reserves space inside its parent.
pub fn in_flow(element: &Element) -> bool {
    element.visibility != Visibility::Collapsed && element.position.in_flow()
}

/// Width of an element on its own, regardless of its visibility or position.
pub fn natural_width(element: &Element) -> u16 {
    measure(element, true)
}

/// Height of an element on its own, regardless of its visibility or position.
pub fn natural_height(element: &Element) -> u16 {
    measure(element, false)
}

pub fn natural_size(element: &Element) -> (u16, u16) {
    (natural_width(element), natural_height(element))
}

/// Height an element occupies in its parent's flow.
pub fn flow_height(element: &Element) -> u16 {
    if in_flow(element) {
        natural_height(element)
    } else {
        0
    }
}

/// Display width of a string in terminal cells, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    clamp(UnicodeWidthStr::width(text))
}

/// Narrow a cell count to `u16`, saturating instead of wrapping.
fn clamp(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn measure(element: &Element, is_width: bool) -> u16 {
    let size = if is_width {
        element.width
    } else {
        element.height
    };

    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) | Size::Auto => content_size(element, is_width),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, None)
    };

    let with_min = min.map_or(base, |m| base.max(m));
    max.map_or(with_min, |m| with_min.min(m))
}

fn content_size(element: &Element, is_width: bool) -> u16 {
    let border = element.style.border.thickness();
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let inner = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0)
            } else {
                clamp(text.lines().count().max(1))
            }
        }
        Content::Children(children) => {
            let flowing: Vec<&Element> = children.iter().filter(|c| in_flow(c)).collect();
            if flowing.is_empty() {
                0
            } else if element.direction == Direction::Row && is_width
                || element.direction == Direction::Column && !is_width
            {
                // Sum along main axis
                let gaps = usize::from(element.gap) * (flowing.len() - 1);
                let total = flowing
                    .iter()
                    .map(|c| usize::from(measure(c, is_width)))
                    .fold(gaps, usize::saturating_add);
                clamp(total)
            } else {
                // Max along cross axis
                flowing
                    .iter()
                    .map(|c| measure(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    inner.saturating_add(padding).saturating_add(border)
}
