use std::sync::Arc;

use tabledom::Element;

use super::selection::SelectionState;
use crate::value::Value;

/// Replaces the selection checkbox of a row when it returns `Some`.
pub type RowActionOverride<R> = Arc<dyn Fn(&Value, &R, usize) -> Option<Element> + Send + Sync>;

/// What the action slot of one row shows.
#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    /// Caller content; the checkbox is suppressed for this row.
    Override(Element),
    /// The selection checkbox, showing the row's flag.
    Checkbox { checked: bool },
}

impl RowAction {
    /// Resolve the slot for row `index`. An override wins over the checkbox.
    pub fn resolve<R>(
        overwrite: Option<&RowActionOverride<R>>,
        value: &Value,
        row: &R,
        index: usize,
        selection: &SelectionState,
    ) -> Self {
        match overwrite.and_then(|f| f(value, row, index)) {
            Some(content) => RowAction::Override(content),
            None => RowAction::Checkbox {
                checked: selection.is_checked(index),
            },
        }
    }
}
