//! The data table composer.
//!
//! [`DataTable`] wraps the [`Table`] primitive with two injected columns: a
//! leading selection column (one checkbox per row plus a select-all
//! checkbox in the header) and a trailing column with a context menu per
//! row. It owns the selection state and keeps it sized to the data set.

mod action;
mod config;
mod menu;
mod selection;

pub use action::{RowAction, RowActionOverride};
pub use config::TableConfig;
pub use menu::RowMenuItems;
pub use selection::SelectionState;

use std::sync::Arc;

use tabledom::Element;

use crate::error::TableError;
use crate::memo::Memo;
use crate::state::State;
use crate::theme::{GeistTheme, ThemeRef, theme_color};
use crate::value::{TableRow, Value};
use crate::widgets::{Checkbox, Column, Table};
use crate::{EventData, HandlerRegistry};

use menu::{MenuColumn, MenuKey};

/// Key of the injected selection column.
pub const OPERATION_KEY: &str = "operation";
/// Key of the injected menu column.
pub const MENU_KEY: &str = "menu";

/// A table with per-row selection and per-row context menus.
///
/// Interaction goes through the table's [`HandlerRegistry`]: every
/// [`compose`](Self::compose) registers handlers for the elements it builds,
/// and dispatching an event mutates the table's state. The next compose
/// reflects the change.
///
/// # Example
///
/// ```
/// use datatables::prelude::*;
/// use serde_json::json;
///
/// let rows: Vec<serde_json::Map<String, serde_json::Value>> = vec![
///     json!({"name": "web"}).as_object().cloned().unwrap_or_default(),
///     json!({"name": "api"}).as_object().cloned().unwrap_or_default(),
/// ];
/// let columns = vec![Column::new("name", "Name")];
///
/// let table = DataTable::new(TableConfig::default().id("projects"));
/// table.compose(&rows, &columns).unwrap();
///
/// table.dispatch("projects-row-1-checkbox", "on_activate");
/// assert_eq!(table.selection().as_slice(), &[false, true]);
/// ```
pub struct DataTable<R> {
    config: TableConfig,
    theme: ThemeRef,
    render_row_menu_items: Option<RowMenuItems<R>>,
    overwrite_row_action_items: Option<RowActionOverride<R>>,
    selection: State<SelectionState>,
    open_menu: State<Option<usize>>,
    is_sticky: State<bool>,
    registry: HandlerRegistry,
    menu_column: Memo<MenuKey, Column<R>>,
}

impl<R: TableRow> Default for DataTable<R> {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl<R: TableRow> DataTable<R> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            theme: Arc::new(GeistTheme::default()),
            render_row_menu_items: None,
            overwrite_row_action_items: None,
            selection: State::default(),
            open_menu: State::default(),
            is_sticky: State::default(),
            registry: HandlerRegistry::new(),
            menu_column: Memo::new(),
        }
    }

    pub fn with_theme(mut self, theme: ThemeRef) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_theme(&mut self, theme: ThemeRef) {
        self.theme = theme;
    }

    /// Supply the items shown in each row's context menu.
    pub fn render_row_menu_items(mut self, items: RowMenuItems<R>) -> Self {
        self.render_row_menu_items = Some(items);
        self
    }

    pub fn set_render_row_menu_items(&mut self, items: Option<RowMenuItems<R>>) {
        self.render_row_menu_items = items;
    }

    /// Supply per-row content that replaces the selection checkbox.
    pub fn overwrite_row_action_items(mut self, overwrite: RowActionOverride<R>) -> Self {
        self.overwrite_row_action_items = Some(overwrite);
        self
    }

    pub fn set_overwrite_row_action_items(&mut self, overwrite: Option<RowActionOverride<R>>) {
        self.overwrite_row_action_items = overwrite;
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Pin or release the header. Driven by the caller's scroll handling.
    pub fn set_sticky(&self, is_sticky: bool) {
        self.is_sticky.set(is_sticky);
    }

    pub fn is_sticky(&self) -> bool {
        self.is_sticky.get()
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> SelectionState {
        self.selection.get()
    }

    pub fn is_all_checked(&self) -> bool {
        self.selection.with(|s| s.is_all_checked())
    }

    /// Flip row `index`. Returns false if the row doesn't exist.
    pub fn toggle_one(&self, index: usize) -> bool {
        let mut toggled = false;
        self.selection.update(|s| toggled = s.toggle_one(index));
        toggled
    }

    /// Check every row, or uncheck all of them if all are checked.
    pub fn toggle_all(&self) {
        self.selection.update(|s| s.toggle_all());
    }

    /// Row whose context menu is open, if any.
    pub fn open_menu(&self) -> Option<usize> {
        self.open_menu.get()
    }

    /// Dispatch an event to an element built by the last compose.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        self.registry.dispatch(element_id, event)
    }

    pub fn dispatch_with(&self, element_id: &str, event: &str, data: EventData) -> bool {
        self.registry.dispatch_with(element_id, event, data)
    }

    /// Whether an event changed the table since the last compose.
    pub fn needs_compose(&self) -> bool {
        self.selection.is_dirty() || self.open_menu.is_dirty() || self.is_sticky.is_dirty()
    }

    /// How many times the menu column has been derived.
    pub fn menu_column_computations(&self) -> usize {
        self.menu_column.computations()
    }

    /// Build the table element for `data` shown through `columns`.
    ///
    /// The selection is resized to `data.len()` first; a size change clears
    /// every flag. Handlers from the previous compose are dropped.
    pub fn compose(&self, data: &[R], columns: &[Column<R>]) -> Result<Element, TableError> {
        validate_columns(columns)?;

        let len = data.len();
        let mut reset = false;
        self.selection.update(|s| reset = s.resize(len));
        if reset {
            log::debug!("Selection of '{}' reset to {} rows", self.config.id, len);
            self.open_menu.set(None);
        }

        self.registry.clear();

        let mut all = Vec::with_capacity(columns.len() + 2);
        all.push(self.operation_column(len == 0));
        all.extend(columns.iter().cloned());
        all.push(self.menu_column());

        let table = Table::new(&self.config.id, data, &all, self.theme.as_ref())
            .sticky(self.config.sticky)
            .is_sticky(self.is_sticky.get())
            .sticky_top(self.config.sticky_top)
            .class_name("data-table")
            .build();

        self.selection.clear_dirty();
        self.open_menu.clear_dirty();
        self.is_sticky.clear_dirty();
        Ok(table)
    }

    fn operation_column(&self, is_empty: bool) -> Column<R> {
        let id = self.config.id.clone();

        let select_all = {
            let selection = self.selection.clone();
            Checkbox::new()
                .id(format!("{}-select-all", id))
                .disabled(is_empty)
                .bind(
                    self.is_all_checked(),
                    Arc::new(move |_| selection.update(|s| s.toggle_all())),
                )
                .build(&self.registry)
        };

        let selection = self.selection.clone();
        let registry = self.registry.clone();
        let overwrite = self.overwrite_row_action_items.clone();

        Column::new(OPERATION_KEY, "")
            .width(self.config.operation_width)
            .header(select_all)
            .render(Arc::new(move |value: &Value, row: &R, index: usize| {
                let action = selection
                    .with(|s| RowAction::resolve(overwrite.as_ref(), value, row, index, s));
                match action {
                    RowAction::Override(content) => content,
                    RowAction::Checkbox { checked } => {
                        let selection = selection.clone();
                        Checkbox::new()
                            .id(format!("{}-row-{}-checkbox", id, index))
                            .bind(
                                checked,
                                Arc::new(move |_| {
                                    selection.update(|s| {
                                        s.toggle_one(index);
                                    })
                                }),
                            )
                            .build(&registry)
                    }
                }
            }))
    }

    fn menu_column(&self) -> Column<R> {
        let key = MenuKey::new(
            self.render_row_menu_items.as_ref(),
            theme_color(self.theme.as_ref(), "accents_1"),
            theme_color(self.theme.as_ref(), "accents_3"),
        );
        self.menu_column.get_or_compute(key.clone(), || {
            log::debug!("Deriving menu column for '{}'", self.config.id);
            MenuColumn {
                table_id: self.config.id.clone(),
                width: self.config.menu_width,
                items: self.render_row_menu_items.clone(),
                open_menu: self.open_menu.clone(),
                registry: self.registry.clone(),
            }
            .into_column(&key)
        })
    }
}

fn validate_columns<R>(columns: &[Column<R>]) -> Result<(), TableError> {
    for (index, col) in columns.iter().enumerate() {
        if col.key.is_empty() {
            return Err(TableError::EmptyColumnKey { index });
        }
        if col.key == OPERATION_KEY || col.key == MENU_KEY {
            return Err(TableError::ReservedColumnKey {
                key: col.key.clone(),
                index,
            });
        }
    }
    Ok(())
}
