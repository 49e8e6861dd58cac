use std::fmt;
use std::sync::Arc;

use tabledom::Element;

use crate::value::{TableRow, Value};

/// Renders one cell from the row's value for the column, the row itself and
/// the row index.
pub type CellRenderer<R> = Arc<dyn Fn(&Value, &R, usize) -> Element + Send + Sync>;

/// A table column definition.
pub struct Column<R> {
    /// Field key looked up on each row.
    pub key: String,
    /// Header text displayed at the top.
    pub label: String,
    /// Fixed width in cells; `None` sizes the column to its content.
    pub width: Option<u16>,
    pub render: Option<CellRenderer<R>>,
    pub class_name: Option<String>,
    /// Header content replacing the label, e.g. a select-all checkbox.
    pub header: Option<Element>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            width: self.width,
            render: self.render.clone(),
            class_name: self.class_name.clone(),
            header: self.header.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .field("header", &self.header.is_some())
            .finish()
    }
}

impl<R: TableRow> Column<R> {
    /// Create a new column with the given key and label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            render: None,
            class_name: None,
            header: None,
        }
    }

    /// Set a fixed width for this column.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, render: CellRenderer<R>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn header(mut self, header: Element) -> Self {
        self.header = Some(header);
        self
    }

    /// Render this column's cell for `row`.
    ///
    /// Without a renderer the row's value is shown as text.
    pub fn render_cell(&self, row: &R, index: usize) -> Element {
        let value = row.value(&self.key);
        match &self.render {
            Some(render) => render(&value, row, index),
            None => Element::text(value.to_string()),
        }
    }
}
