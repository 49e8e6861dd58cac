use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Edges, Position, Size, Style, Visibility};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub class_name: Option<String>,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub padding: Edges,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub right: Option<i16>,
    pub z_index: i16,

    // Flex container
    pub direction: Direction,
    pub gap: u16,

    // Visual
    pub style: Style,
    /// Applied on top of `style` while the element has focus or pointer hover.
    pub style_focused: Option<Style>,
    pub visibility: Visibility,

    // Interaction
    /// When false, neither this element nor its descendants receive pointer input.
    pub hit_testable: bool,
    pub focusable: bool,
    pub clickable: bool,
    pub disabled: bool,
    /// Clicks outside descendants are reported to this element (overlays).
    pub interaction_scope: bool,

    // Custom data storage (for handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            class_name: None,
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            max_width: None,
            min_height: None,
            padding: Edges::default(),
            position: Position::Static,
            top: None,
            left: None,
            right: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            style: Style::default(),
            style_focused: None,
            visibility: Visibility::Visible,
            hit_testable: true,
            focusable: false,
            clickable: false,
            disabled: false,
            interaction_scope: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// An element with no content, used where a slot renders nothing.
    pub fn empty() -> Self {
        Self {
            id: generate_id("empty"),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn min_height(mut self, min_height: u16) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: i16) -> Self {
        self.right = Some(right);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    // Interaction
    pub fn hit_testable(mut self, hit_testable: bool) -> Self {
        self.hit_testable = hit_testable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn interaction_scope(mut self, scope: bool) -> Self {
        self.interaction_scope = scope;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append `suffix` to this element's id and every descendant id.
    ///
    /// Used when the same subtree appears twice in one tree.
    pub fn with_id_suffix(mut self, suffix: &str) -> Self {
        self.id.push_str(suffix);
        if let Content::Children(children) = self.content {
            self.content = Content::Children(
                children
                    .into_iter()
                    .map(|child| child.with_id_suffix(suffix))
                    .collect(),
            );
        }
        self
    }

    /// All text in this subtree, depth first, joined by single spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        collect_text(self, &mut parts);
        parts.join(" ")
    }
}

fn collect_text<'a>(element: &'a Element, parts: &mut Vec<&'a str>) {
    match &element.content {
        Content::Text(text) => parts.push(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, parts);
            }
        }
        Content::None => {}
    }
}
