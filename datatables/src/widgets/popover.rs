//! Popover widget - a trigger that opens an anchored overlay of items.

use std::sync::Arc;

use tabledom::{Border, Edges, Element, Position, Rect, Style};

use crate::{EventData, Handler, HandlerContext, HandlerRegistry};

/// Where an open popover sits relative to its trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Below the trigger, right edges aligned.
    #[default]
    BottomEnd,
    /// Below the trigger, left edges aligned.
    BottomStart,
    /// Above the trigger, right edges aligned.
    TopEnd,
    /// Above the trigger, left edges aligned.
    TopStart,
}

impl Placement {
    fn is_bottom(self) -> bool {
        matches!(self, Placement::BottomEnd | Placement::BottomStart)
    }

    fn is_end(self) -> bool {
        matches!(self, Placement::BottomEnd | Placement::TopEnd)
    }
}

/// Calculate the screen rectangle of an overlay anchored to `anchor`.
///
/// The preferred side is tried first and the opposite side is used when the
/// overlay doesn't fit. The result is always clamped inside `screen`.
pub fn place_overlay(
    screen: Rect,
    anchor: Rect,
    content_size: (u16, u16),
    placement: Placement,
) -> Rect {
    let (width, height) = content_size;

    // Constrain dimensions to screen
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let below = anchor.bottom();
    let fits_below = below + height <= screen.bottom();
    let fits_above = anchor.y >= screen.y + height;

    let y = match (placement.is_bottom(), fits_below, fits_above) {
        (true, true, _) | (false, true, false) => below,
        _ => anchor.y.saturating_sub(height).max(screen.y),
    };

    let x = if placement.is_end() {
        anchor.right().saturating_sub(width)
    } else {
        anchor.x
    };

    Rect::new(constrain_x(x, width, screen), y, width, height)
}

fn constrain_x(x: u16, width: u16, screen: Rect) -> u16 {
    let max_x = screen.x + screen.width.saturating_sub(width);
    x.min(max_x).max(screen.x)
}

/// A popover widget builder.
///
/// The popover does not own its open state; the owner passes `open` in and
/// flips it from `on_toggle` and `on_dismiss`.
pub struct Popover {
    id: String,
    trigger: Element,
    items: Vec<Element>,
    open: bool,
    placement: Placement,
    overlay_style: Style,
    on_toggle: Option<Handler>,
    on_dismiss: Option<Handler>,
}

impl Popover {
    pub fn new(id: impl Into<String>, trigger: Element) -> Self {
        Self {
            id: id.into(),
            trigger,
            items: Vec::new(),
            open: false,
            placement: Placement::default(),
            overlay_style: Style::new().border(Border::Single),
            on_toggle: None,
            on_dismiss: None,
        }
    }

    /// Items shown in the overlay.
    pub fn items(mut self, items: Vec<Element>) -> Self {
        self.items = items;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Style of the overlay surface.
    pub fn overlay_style(mut self, style: Style) -> Self {
        self.overlay_style = style;
        self
    }

    /// Called when the trigger is activated.
    pub fn on_toggle(mut self, handler: Handler) -> Self {
        self.on_toggle = Some(handler);
        self
    }

    /// Called on a pointer interaction outside the open overlay.
    pub fn on_dismiss(mut self, handler: Handler) -> Self {
        self.on_dismiss = Some(handler);
        self
    }

    /// Build the popover and register its handlers.
    ///
    /// The result is a box holding the trigger and, while open, an overlay
    /// child positioned `Absolute` so it reserves no space in the row.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let trigger_id = format!("{}-trigger", self.id);
        let trigger = Element::box_()
            .id(&trigger_id)
            .focusable(true)
            .clickable(true)
            .child(self.trigger);
        if let Some(handler) = self.on_toggle {
            registry.register(&trigger_id, "on_activate", handler);
        }

        let mut popover = Element::box_()
            .id(&self.id)
            .data("open", self.open.to_string())
            .child(trigger);

        if self.open {
            let overlay_id = format!("{}-overlay", self.id);
            let mut overlay = Element::col()
                .id(&overlay_id)
                .position(Position::Absolute)
                .z_index(10)
                .min_width(10)
                .padding(Edges::horizontal(1))
                .interaction_scope(true)
                .style(self.overlay_style)
                .children(self.items);

            overlay = if self.placement.is_bottom() {
                overlay.top(1)
            } else {
                overlay.top(-1)
            };
            overlay = if self.placement.is_end() {
                overlay.right(0)
            } else {
                overlay.left(0)
            };

            if let Some(handler) = self.on_dismiss {
                registry.register(
                    &overlay_id,
                    "on_outside_click",
                    Arc::new(move |hx: &HandlerContext| {
                        if let EventData::OutsideClick { target } = hx.event() {
                            log::debug!("Popover dismissed by click on {:?}", target);
                        }
                        handler(hx);
                    }),
                );
            }
            popover = popover.child(overlay);
        }

        popover
    }
}
