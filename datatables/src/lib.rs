//! Generic data tables: typed columns over caller-defined rows, per-row
//! selection checkboxes, per-row context menus and a sticky header.

pub mod data_table;
pub mod error;
pub mod handler_context;
pub mod memo;
pub mod state;
pub mod theme;
pub mod value;
pub mod widgets;

pub use data_table::{DataTable, MENU_KEY, OPERATION_KEY, SelectionState, TableConfig};
pub use error::TableError;
pub use handler_context::{EventData, Handler, HandlerContext, HandlerRegistry};
pub use state::State;
pub use theme::{GeistTheme, Theme, ThemeRef};
pub use value::{TableRow, Value};

pub mod prelude {
    pub use crate::data_table::{
        DataTable, RowAction, RowActionOverride, RowMenuItems, SelectionState, TableConfig,
    };
    pub use crate::error::TableError;
    pub use crate::handler_context::{EventData, Handler, HandlerContext, HandlerRegistry};
    pub use crate::state::State;
    pub use crate::theme::{GeistTheme, Theme, ThemeRef};
    pub use crate::value::{TableRow, Value};
    pub use crate::widgets::{Checkbox, Column, Placement, Popover, Table};

    pub use tabledom::{Color, Element, Size, Style};
}
