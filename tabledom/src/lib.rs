pub mod element;
pub mod hit;
pub mod layout;
pub mod render;
pub mod types;

pub use element::{find_element, Content, Element};
pub use hit::{clickable_ids, is_hit_testable};
pub use layout::{flow_height, natural_height, natural_size, natural_width, Rect};
pub use render::{render_lines, Line, Span};
pub use types::*;
