//! Widgets the data table is assembled from.

mod checkbox;
mod popover;
pub mod table;

pub use checkbox::Checkbox;
pub use popover::{Placement, Popover, place_overlay};
pub use table::{CellRenderer, Column, HeaderCell, HeaderSpec, HeaderStyle, Table, TableHead};
