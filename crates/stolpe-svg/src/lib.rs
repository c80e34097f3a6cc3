//! SVG drawing backend for `stolpe-chart`.
//!
//! Implements the chart's measure/draw seams by appending SVG elements to
//! an in-memory document. Text measurement is a deterministic per-glyph
//! advance table so layout needs no rasterizer; widths are approximate but
//! stable, which is what the chart contract requires.

use std::fmt::Write;

use stolpe_chart::{ChartDraw, Color, RenderTarget, TextMeasure};
use stolpe_geom::{Rect, Vec2};

pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            body: String::new(),
        }
    }

    /// Consumes the surface and returns the standalone SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
             viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"sans-serif\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

// Fractional em advance per glyph class; tuned for a generic sans face.
fn advance(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.30,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | ' ' => 0.40,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        'A'..='Z' => 0.70,
        '0'..='9' => 0.55,
        _ => 0.55,
    }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn fill_attrs(color: Color) -> String {
    if color.a == 255 {
        format!("fill=\"rgb({},{},{})\"", color.r, color.g, color.b)
    } else {
        format!(
            "fill=\"rgb({},{},{})\" fill-opacity=\"{:.3}\"",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0
        )
    }
}

impl TextMeasure for SvgSurface {
    fn measure_text(&self, text: &str, font_size: i32) -> f32 {
        let em = font_size.max(0) as f32;
        text.chars().map(|c| advance(c) * em).sum()
    }
}

impl RenderTarget for SvgSurface {
    fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl ChartDraw for SvgSurface {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" {}/>",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            fill_attrs(color),
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
             stroke=\"rgb({},{},{})\" stroke-width=\"1\"/>",
            from.x, from.y, to.x, to.y, color.r, color.g, color.b,
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: i32, color: Color) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" dominant-baseline=\"middle\" {}>{}</text>",
            pos.x,
            pos.y,
            font_size,
            fill_attrs(color),
            xml_escape(text),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_wraps_body_in_svg_document() {
        let mut svg = SvgSurface::new(320.0, 240.0);
        svg.draw_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::new(70, 130, 180, 255));
        let doc = svg.finish();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("width=\"320\" height=\"240\""));
        assert!(doc.contains("<rect x=\"10.0\" y=\"20.0\" width=\"30.0\" height=\"40.0\""));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_xml_escaped() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.draw_text("<dbo:Place> & co", Vec2::new(0.0, 0.0), 12, Color::BLACK);
        let doc = svg.finish();
        assert!(doc.contains("&lt;dbo:Place&gt; &amp; co"));
        assert!(!doc.contains("<dbo:Place>"));
    }

    #[test]
    fn translucent_fill_emits_opacity() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::new(0, 0, 0, 204));
        assert!(svg.finish().contains("fill-opacity=\"0.800\""));
    }

    #[test]
    fn measurement_grows_with_text_length() {
        let svg = SvgSurface::new(100.0, 100.0);
        let short = svg.measure_text("ab", 14);
        let long = svg.measure_text("abcdef", 14);
        assert!(long > short);
        assert_eq!(svg.measure_text("", 14), 0.0);
    }
}
