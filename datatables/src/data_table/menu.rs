use std::sync::Arc;

use tabledom::{Border, Color, Element, Style};

use crate::state::State;
use crate::value::{TableRow, Value};
use crate::widgets::{Column, Placement, Popover};
use crate::{Handler, HandlerRegistry};

use super::MENU_KEY;

/// Produces the items of a row's context menu. An empty list is fine.
pub type RowMenuItems<R> = Arc<dyn Fn(&Value, &R, usize) -> Vec<Element> + Send + Sync>;

const TRIGGER_GLYPH: &str = "⋮";

/// Inputs the menu column is derived from.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct MenuKey {
    callback: Option<usize>,
    hover: Color,
    glyph: Color,
}

impl MenuKey {
    pub(super) fn new<R>(callback: Option<&RowMenuItems<R>>, hover: Color, glyph: Color) -> Self {
        Self {
            callback: callback.map(|f| Arc::as_ptr(f) as *const () as usize),
            hover,
            glyph,
        }
    }
}

/// Everything the menu cells close over.
pub(super) struct MenuColumn<R> {
    pub table_id: String,
    pub width: u16,
    pub items: Option<RowMenuItems<R>>,
    pub open_menu: State<Option<usize>>,
    pub registry: HandlerRegistry,
}

impl<R: TableRow> MenuColumn<R> {
    pub(super) fn into_column(self, key: &MenuKey) -> Column<R> {
        let MenuColumn {
            table_id,
            width,
            items,
            open_menu,
            registry,
        } = self;
        let hover = key.hover.clone();
        let glyph = key.glyph.clone();

        Column::new(MENU_KEY, "")
            .width(width)
            .render(Arc::new(move |value: &Value, row: &R, index: usize| {
                let items = items
                    .as_ref()
                    .map(|f| f(value, row, index))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|item| {
                        item.focusable(true)
                            .clickable(true)
                            .style_focused(Style::new().background(hover.clone()))
                    })
                    .collect();

                let toggle: Handler = {
                    let open_menu = open_menu.clone();
                    Arc::new(move |_| {
                        open_menu.update(|open| {
                            *open = if *open == Some(index) { None } else { Some(index) };
                        })
                    })
                };
                let dismiss: Handler = {
                    let open_menu = open_menu.clone();
                    Arc::new(move |_| {
                        open_menu.update(|open| {
                            if *open == Some(index) {
                                *open = None;
                            }
                        })
                    })
                };

                Popover::new(
                    format!("{}-row-{}-menu", table_id, index),
                    Element::text(TRIGGER_GLYPH).style(Style::new().foreground(glyph.clone())),
                )
                .items(items)
                .open(open_menu.get() == Some(index))
                .placement(Placement::BottomEnd)
                .overlay_style(
                    Style::new()
                        .background(Color::var("background"))
                        .foreground(Color::var("foreground"))
                        .border(Border::Rounded)
                        .border_color(Color::var("border")),
                )
                .on_toggle(toggle)
                .on_dismiss(dismiss)
                .build(&registry)
            }))
    }
}
