//! Plain-text rendering of an element tree into styled lines.
//!
//! Every element is drawn at its natural size. Rows place children left to
//! right, columns stack them. Collapsed elements and absolutely positioned
//! overlays are skipped, hidden elements leave blank space, and elements
//! positioned `Fixed` are painted over the flow output at their `top` line.

use unicode_width::UnicodeWidthChar;

use crate::element::{Content, Element};
use crate::layout::{display_width, natural_height, natural_width};
use crate::types::{
    resolve_color, Border, Direction, Edges, Position, Rgb, Style, TextStyle, Theme, Visibility,
};

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub text_style: TextStyle,
}

impl Span {
    fn blank(width: u16) -> Self {
        Self {
            text: " ".repeat(width as usize),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// The line's characters without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> u16 {
        self.spans
            .iter()
            .map(|s| display_width(&s.text))
            .fold(0, u16::saturating_add)
    }
}

struct Block {
    width: u16,
    lines: Vec<Line>,
}

impl Block {
    fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            lines: (0..height).map(|_| Line { spans: vec![Span::blank(width)] }).collect(),
        }
    }
}

/// Resolved colors for one element, ready to stamp onto spans.
struct Paint {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    border: Option<Rgb>,
    text_style: TextStyle,
}

impl Paint {
    fn new(style: &Style, theme: &dyn Theme) -> Self {
        Self {
            fg: style.foreground.as_ref().and_then(|c| resolve_color(c, theme)),
            bg: style.background.as_ref().and_then(|c| resolve_color(c, theme)),
            border: style.border_color.as_ref().and_then(|c| resolve_color(c, theme)),
            text_style: style.text_style,
        }
    }

    fn span(&self, text: String) -> Span {
        Span {
            text,
            fg: self.fg,
            bg: self.bg,
            text_style: self.text_style,
        }
    }

    fn fill(&self, width: u16) -> Span {
        Span {
            text: " ".repeat(width as usize),
            bg: self.bg,
            ..Default::default()
        }
    }

    fn border_span(&self, text: String) -> Span {
        Span {
            text,
            fg: self.border.or(self.fg),
            bg: self.bg,
            ..Default::default()
        }
    }
}

/// Render an element tree to lines.
///
/// `Fixed` subtrees are painted in tree order over the flow output, starting
/// at their `top` offset (line 0 when unset). A pinned line replaces the
/// whole viewport line it lands on.
pub fn render_lines(root: &Element, theme: &dyn Theme) -> Vec<Line> {
    let mut pinned = Vec::new();
    let flow = render_element(root, theme, &Style::default(), &mut pinned);

    let mut lines = flow.map(|block| block.lines).unwrap_or_default();
    for (top, block) in pinned {
        let end = top + block.lines.len();
        if lines.len() < end {
            lines.resize(end, Line::default());
        }
        for (offset, line) in block.lines.into_iter().enumerate() {
            lines[top + offset] = line;
        }
    }
    lines
}

fn render_element(
    element: &Element,
    theme: &dyn Theme,
    parent: &Style,
    pinned: &mut Vec<(usize, Block)>,
) -> Option<Block> {
    if element.visibility == Visibility::Collapsed || element.position == Position::Absolute {
        return None;
    }

    let style = parent.inherit(&element.style);
    let width = natural_width(element);
    let height = natural_height(element);

    if element.visibility == Visibility::Hidden {
        return Some(Block::blank(width, height));
    }

    let paint = Paint::new(&style, theme);
    let border = element.style.border.thickness();
    let inner_width =
        width.saturating_sub(border.saturating_add(element.padding.horizontal_total()));
    let inner_height =
        height.saturating_sub(border.saturating_add(element.padding.vertical_total()));

    let content = match &element.content {
        Content::Text(text) => {
            let text = if style.text_style.uppercase {
                text.to_uppercase()
            } else {
                text.clone()
            };
            let mut lines: Vec<Line> = text
                .lines()
                .map(|l| Line {
                    spans: vec![paint.span(l.to_string())],
                })
                .collect();
            if lines.is_empty() {
                lines.push(Line::default());
            }
            lines
        }
        Content::Children(children) => {
            let mut blocks = Vec::new();
            for child in children {
                if child.position == Position::Fixed {
                    let mut pinned_child = child.clone();
                    pinned_child.position = Position::Static;
                    if let Some(block) = render_element(&pinned_child, theme, &style, pinned) {
                        let top = child.top.unwrap_or(0).max(0) as usize;
                        pinned.push((top, block));
                    }
                    continue;
                }
                if let Some(block) = render_element(child, theme, &style, pinned) {
                    blocks.push(block);
                }
            }
            match element.direction {
                Direction::Row => join_row(blocks, element.gap, &paint),
                Direction::Column => join_col(blocks, element.gap),
            }
        }
        Content::None => Vec::new(),
    };

    let mut lines = fit(content, inner_width, inner_height, &paint);

    let pad = element.padding;
    if pad != Edges::default() {
        let padded_width = inner_width.saturating_add(pad.horizontal_total());
        let mut padded = Vec::with_capacity(lines.len() + pad.vertical_total() as usize);
        for _ in 0..pad.top {
            padded.push(Line { spans: vec![paint.fill(padded_width)] });
        }
        for line in lines {
            let mut spans = vec![paint.fill(pad.left)];
            spans.extend(line.spans);
            spans.push(paint.fill(pad.right));
            padded.push(Line { spans });
        }
        for _ in 0..pad.bottom {
            padded.push(Line { spans: vec![paint.fill(padded_width)] });
        }
        lines = padded;
    }

    if element.style.border != Border::None {
        lines = draw_border(lines, width.saturating_sub(2), element.style.border, &paint);
    }

    Some(Block { width, lines })
}

fn join_row(blocks: Vec<Block>, gap: u16, paint: &Paint) -> Vec<Line> {
    let height = blocks.iter().map(|b| b.lines.len()).max().unwrap_or(0);
    let mut lines = vec![Line::default(); height];

    for (i, block) in blocks.into_iter().enumerate() {
        let width = block.width;
        let mut block_lines = block.lines.into_iter();
        for line in lines.iter_mut() {
            if i > 0 && gap > 0 {
                line.spans.push(paint.fill(gap));
            }
            match block_lines.next() {
                Some(block_line) => line.spans.extend(block_line.spans),
                None => line.spans.push(paint.fill(width)),
            }
        }
    }

    lines
}

fn join_col(blocks: Vec<Block>, gap: u16) -> Vec<Line> {
    let mut lines = Vec::new();
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            lines.extend((0..gap).map(|_| Line::default()));
        }
        lines.extend(block.lines);
    }
    lines
}

/// Pad or truncate lines to exactly `width` x `height` cells.
fn fit(mut lines: Vec<Line>, width: u16, height: u16, paint: &Paint) -> Vec<Line> {
    lines.truncate(height as usize);
    while lines.len() < height as usize {
        lines.push(Line::default());
    }

    lines
        .into_iter()
        .map(|line| {
            let current = line.width();
            if current > width {
                truncate(line, width)
            } else if current < width {
                let mut line = line;
                line.spans.push(paint.fill(width - current));
                line
            } else {
                line
            }
        })
        .collect()
}

fn truncate(line: Line, width: u16) -> Line {
    let mut remaining = width as usize;
    let mut spans = Vec::new();

    for span in line.spans {
        if remaining == 0 {
            break;
        }
        let mut text = String::new();
        for ch in span.text.chars() {
            let w = ch.width().unwrap_or(0);
            if w > remaining {
                remaining = 0;
                break;
            }
            remaining -= w;
            text.push(ch);
        }
        spans.push(Span { text, ..span });
    }

    // A wide char cut at the edge leaves a hole; fill it.
    let used = spans
        .iter()
        .map(|s| display_width(&s.text))
        .fold(0, u16::saturating_add);
    if used < width {
        spans.push(Span::blank(width - used));
    }

    Line { spans }
}

fn draw_border(lines: Vec<Line>, inner_width: u16, border: Border, paint: &Paint) -> Vec<Line> {
    let (tl, tr, bl, br) = match border {
        Border::Rounded => ('╭', '╮', '╰', '╯'),
        _ => ('┌', '┐', '└', '┘'),
    };
    let horizontal = "─".repeat(inner_width as usize);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(Line {
        spans: vec![paint.border_span(format!("{tl}{horizontal}{tr}"))],
    });
    for line in lines {
        let mut spans = vec![paint.border_span("│".to_string())];
        spans.extend(line.spans);
        spans.push(paint.border_span("│".to_string()));
        out.push(Line { spans });
    }
    out.push(Line {
        spans: vec![paint.border_span(format!("{bl}{horizontal}{br}"))],
    });
    out
}
