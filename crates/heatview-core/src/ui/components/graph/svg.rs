//! Minimal SVG element writers
//!
//! Elements are appended to a `String` as self-contained fragments. Numbers
//! are trimmed to three decimals so the output stays compact and stable.

use core::fmt::{self, Display, Write};

extern crate alloc;
use alloc::string::String;

use super::constants::COORDINATE_DECIMALS;
use super::series::DataPoint;

/// A plain coordinate in SVG user units
#[derive(Debug, Clone, Copy)]
pub(super) struct Units(pub f32);

/// A coordinate in percent of the canvas
#[derive(Debug, Clone, Copy)]
pub(super) struct Percent(pub f32);

impl Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tidy(self.0))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", tidy(self.0))
    }
}

/// Round to the printed precision, folding `-0` into `0`
pub(super) fn tidy(value: f32) -> f32 {
    libm::roundf(value * COORDINATE_DECIMALS) / COORDINATE_DECIMALS + 0.0
}

pub(super) fn line(
    out: &mut String,
    x1: impl Display,
    y1: impl Display,
    x2: impl Display,
    y2: impl Display,
    class: Option<&str>,
) {
    let _ = write!(out, r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}""#);
    close(out, class);
}

pub(super) fn rect(
    out: &mut String,
    x: impl Display,
    y: impl Display,
    width: impl Display,
    height: impl Display,
    class: Option<&str>,
) {
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{width}" height="{height}""#
    );
    close(out, class);
}

pub(super) fn circle(
    out: &mut String,
    cx: impl Display,
    cy: impl Display,
    r: impl Display,
    class: Option<&str>,
) {
    let _ = write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}""#);
    close(out, class);
}

pub(super) fn text(
    out: &mut String,
    x: impl Display,
    y: impl Display,
    body: &str,
    class: Option<&str>,
) {
    let _ = write!(out, r#"<text x="{x}" y="{y}""#);
    write_class(out, class);
    out.push('>');
    escape_into(out, body);
    out.push_str("</text>");
}

pub(super) fn polyline(out: &mut String, points: &[DataPoint], class: Option<&str>) {
    out.push_str(r#"<polyline points=""#);
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", Units(point.x), Units(point.y));
    }
    out.push('"');
    close(out, class);
}

fn close(out: &mut String, class: Option<&str>) {
    write_class(out, class);
    out.push_str("/>");
}

fn write_class(out: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        out.push_str(r#" class=""#);
        escape_into(out, class);
        out.push('"');
    }
}

/// Escape XML special characters
fn escape_into(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
