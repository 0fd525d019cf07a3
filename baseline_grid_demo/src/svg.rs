// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `baseline_grid_demo`.

use baseline_grid::{DynamicTypeMetrics, GridError, GridOverlay};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::label::GridLabel;

const PADDING: f64 = 16.0;
const LABEL_WIDTH: f64 = 288.0;

/// The debug grid's stroke color.
pub(crate) const GRID_STROKE: Color = Color::from_rgba8(255, 59, 48, 255);
/// Background behind the label.
pub(crate) const GRID_BACKGROUND: Color = Color::from_rgba8(229, 229, 234, 255);
/// Text color.
pub(crate) const TEXT_FILL: Color = Color::from_rgba8(0, 0, 0, 255);

/// Renders `label` over its debug grid.
pub(crate) fn label_svg(label: &GridLabel<'_>) -> Result<String, GridError> {
    let spec = label.spec();
    let frame = label.frame(Point::new(PADDING, PADDING), LABEL_WIDTH);
    let view_box = frame.inflate(PADDING, PADDING);
    let overlay = GridOverlay::new(spec.grid_unit)?;
    let font_size = DynamicTypeMetrics::point_size(spec.text_style, spec.size_category);

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');

    write_rect(&mut out, frame, GRID_BACKGROUND);
    for line in overlay.lines(frame) {
        out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y, overlay.line_width
        ));
        write_paint_attr(&mut out, "stroke", GRID_STROKE);
        out.push_str("/>\n");
    }

    for (text, baseline) in label.text().lines().zip(label.baselines()) {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" dominant-baseline="alphabetic""#,
            frame.x0,
            frame.y0 + baseline,
            font_size
        ));
        write_paint_attr(&mut out, "fill", TEXT_FILL);
        out.push('>');
        out.push_str(&escape_xml(text));
        out.push_str("</text>\n");
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn write_rect(out: &mut String, rect: Rect, fill: Color) {
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height(),
    ));
    write_paint_attr(out, "fill", fill);
    out.push_str("/>\n");
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
