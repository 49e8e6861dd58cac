//! Sticky header controller.
//!
//! The header is rendered twice from one [`HeaderSpec`]. The live copy is
//! pinned to the viewport while sticky; the spacer copy stays in normal flow,
//! invisible and inert, so the block keeps reserving the header's height
//! after the live copy leaves the flow.

use tabledom::{Border, Edges, Element, Position, Size, Style, TextStyle, Visibility};

use crate::theme::{Theme, theme_color};
use crate::value::TableRow;

use super::column::Column;

/// One header cell, derived from a column.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub width: Option<u16>,
    pub class_name: Option<String>,
    /// Custom header content shown instead of the label.
    pub content: Option<Element>,
}

impl HeaderCell {
    fn element(&self) -> Element {
        match &self.content {
            Some(content) => content.clone(),
            None => Element::text(&self.label),
        }
    }
}

/// Everything needed to render the header, derived from the columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderSpec {
    pub cells: Vec<HeaderCell>,
}

impl HeaderSpec {
    pub fn from_columns<R: TableRow>(columns: &[Column<R>]) -> Self {
        Self {
            cells: columns
                .iter()
                .map(|col| HeaderCell {
                    label: col.label.clone(),
                    width: col.width,
                    class_name: col.class_name.clone(),
                    content: col.header.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Natural content width of each cell, without padding.
    pub fn content_widths(&self) -> Vec<u16> {
        self.cells
            .iter()
            .map(|cell| tabledom::natural_width(&cell.element()))
            .collect()
    }
}

/// Header colors and frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderStyle {
    /// Applied to the header row; cells inherit colors from it.
    pub frame: Style,
    /// Applied to plain text labels only, never to custom header content.
    pub label: Style,
}

impl HeaderStyle {
    pub fn from_theme(theme: &dyn Theme) -> Self {
        let border = if theme.radius() > 0 {
            Border::Rounded
        } else {
            Border::Single
        };
        Self {
            frame: Style::new()
                .foreground(theme_color(theme, "accents_5"))
                .background(theme_color(theme, "accents_1"))
                .border(border)
                .border_color(theme_color(theme, "border")),
            label: Style::new().text_style(TextStyle::new().uppercase()),
        }
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            frame: Style::new().border(Border::Single),
            label: Style::new().text_style(TextStyle::new().uppercase()),
        }
    }
}

/// Builds the two header copies for a table.
pub struct TableHead<'a> {
    id: String,
    spec: &'a HeaderSpec,
    widths: Vec<u16>,
    is_sticky: bool,
    sticky_top: i16,
    style: HeaderStyle,
}

impl<'a> TableHead<'a> {
    pub fn new(id: impl Into<String>, spec: &'a HeaderSpec) -> Self {
        Self {
            id: id.into(),
            spec,
            widths: Vec::new(),
            is_sticky: false,
            sticky_top: 0,
            style: HeaderStyle::default(),
        }
    }

    /// Cell widths including padding; missing entries size to content.
    pub fn widths(mut self, widths: &[u16]) -> Self {
        self.widths = widths.to_vec();
        self
    }

    pub fn is_sticky(mut self, is_sticky: bool) -> Self {
        self.is_sticky = is_sticky;
        self
    }

    /// Viewport line the live copy is pinned to while sticky.
    pub fn sticky_top(mut self, top: i16) -> Self {
        self.sticky_top = top;
        self
    }

    pub fn style(mut self, style: HeaderStyle) -> Self {
        self.style = style;
        self
    }

    /// The header row both copies are cloned from.
    fn thead(&self) -> Element {
        let content_widths = self.spec.content_widths();
        let cells = self.spec.cells.iter().enumerate().map(|(i, cell)| {
            let width = self
                .widths
                .get(i)
                .copied()
                .or(cell.width)
                .unwrap_or(content_widths[i] + 2);
            let mut th = Element::box_()
                .id(format!("{}-head-{}", self.id, i))
                .width(Size::Fixed(width))
                .min_width(width)
                .max_width(width)
                .padding(Edges::horizontal(1))
                .child(match &cell.content {
                    Some(content) => content.clone(),
                    None => Element::text(&cell.label).style(self.style.label.clone()),
                });
            if let Some(class_name) = &cell.class_name {
                th = th.class_name(class_name);
            }
            th
        });

        Element::row()
            .id(format!("{}-head", self.id))
            .style(self.style.frame.clone())
            .children(cells)
    }

    /// Build the live and spacer copies, in that order.
    pub fn build_copies(&self) -> (Element, Element) {
        let thead = self.thead();

        let spacer = thead
            .clone()
            .with_id_suffix("-spacer")
            .position(Position::Static)
            .hit_testable(false)
            .visibility(if self.is_sticky {
                Visibility::Hidden
            } else {
                Visibility::Collapsed
            });

        let live = if self.is_sticky {
            thead
                .position(Position::Fixed)
                .top(self.sticky_top)
                .z_index(1)
        } else {
            thead.position(Position::Static)
        };

        (live, spacer)
    }

    /// Build the header block: live copy followed by the spacer copy.
    pub fn build(&self) -> Element {
        let (live, spacer) = self.build_copies();
        Element::col()
            .id(format!("{}-block", self.id))
            .data("sticky", self.is_sticky.to_string())
            .children(vec![live, spacer])
    }
}
