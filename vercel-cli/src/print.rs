//! Writing rendered lines to the terminal.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use tabledom::{Line, Rgb, Span};

fn ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn write_span(out: &mut impl Write, span: &Span) -> io::Result<()> {
    if let Some(fg) = span.fg {
        queue!(out, SetForegroundColor(ct(fg)))?;
    }
    if let Some(bg) = span.bg {
        queue!(out, SetBackgroundColor(ct(bg)))?;
    }
    let style = span.text_style;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)
}

/// Write `lines` to `out`, styled unless `plain`.
pub fn write_lines(out: &mut impl Write, lines: &[Line], plain: bool) -> io::Result<()> {
    for line in lines {
        if plain {
            writeln!(out, "{}", line.text().trim_end())?;
            continue;
        }
        for span in &line.spans {
            write_span(out, span)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
