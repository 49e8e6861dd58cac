//! Table primitive - a grid of columns over rows with a sticky header.
//!
//! The table lays out whatever columns it is given; it knows nothing about
//! selection or menus. Cells are rendered through each column's renderer and
//! column widths are either fixed or sized to the widest cell.

mod column;
mod head;

pub use column::{CellRenderer, Column};
pub use head::{HeaderCell, HeaderSpec, HeaderStyle, TableHead};

use tabledom::{Edges, Element, Size};

use crate::theme::Theme;
use crate::value::TableRow;

/// A table widget builder.
pub struct Table<'a, R> {
    id: String,
    data: &'a [R],
    columns: &'a [Column<R>],
    theme: &'a dyn Theme,
    sticky: bool,
    is_sticky: bool,
    sticky_top: i16,
    class_name: Option<String>,
}

impl<'a, R: TableRow> Table<'a, R> {
    pub fn new(
        id: impl Into<String>,
        data: &'a [R],
        columns: &'a [Column<R>],
        theme: &'a dyn Theme,
    ) -> Self {
        Self {
            id: id.into(),
            data,
            columns,
            theme,
            sticky: false,
            is_sticky: false,
            sticky_top: 0,
            class_name: None,
        }
    }

    /// Enable the sticky header.
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Whether the header is currently pinned. Ignored unless sticky.
    pub fn is_sticky(mut self, is_sticky: bool) -> Self {
        self.is_sticky = is_sticky;
        self
    }

    pub fn sticky_top(mut self, top: i16) -> Self {
        self.sticky_top = top;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Build the table element.
    pub fn build(self) -> Element {
        let spec = HeaderSpec::from_columns(self.columns);

        let rows: Vec<Vec<Element>> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, row)| {
                self.columns
                    .iter()
                    .map(|col| col.render_cell(row, i))
                    .collect()
            })
            .collect();

        let header_widths = spec.content_widths();
        let widths: Vec<u16> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, col)| {
                col.width.unwrap_or_else(|| {
                    let body = rows
                        .iter()
                        .map(|cells| tabledom::natural_width(&cells[c]))
                        .max()
                        .unwrap_or(0);
                    header_widths[c].max(body) + 2
                })
            })
            .collect();

        let head = TableHead::new(&self.id, &spec)
            .widths(&widths)
            .is_sticky(self.sticky && self.is_sticky)
            .sticky_top(self.sticky_top)
            .style(HeaderStyle::from_theme(self.theme))
            .build();

        let body = rows.into_iter().enumerate().map(|(i, cells)| {
            let cells = cells.into_iter().enumerate().map(|(c, content)| {
                let mut td = Element::box_()
                    .id(format!("{}-cell-{}-{}", self.id, i, c))
                    .width(Size::Fixed(widths[c]))
                    .padding(Edges::horizontal(1))
                    .child(content);
                if let Some(class_name) = &self.columns[c].class_name {
                    td = td.class_name(class_name);
                }
                td
            });
            Element::row()
                .id(format!("{}-row-{}", self.id, i))
                .padding(Edges::horizontal(1))
                .children(cells)
        });

        let mut table = Element::col()
            .id(&self.id)
            .data("rows", self.data.len().to_string())
            .child(head)
            .child(Element::col().id(format!("{}-body", self.id)).children(body));
        if let Some(class_name) = self.class_name {
            table = table.class_name(class_name);
        }
        table
    }
}
