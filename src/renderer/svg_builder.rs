//! SVG builder: accumulates SVG elements and produces the final string.

use super::constants::*;

/// Stroke and fill for a shape.
#[derive(Clone, Copy, Debug)]
pub(super) struct ShapeStyle {
    pub(super) stroke: &'static str,
    pub(super) stroke_width: f64,
    pub(super) fill: &'static str,
}

/// Font size, CSS class and anchor for a text element.
#[derive(Clone, Copy, Debug)]
pub(super) struct TextStyle {
    pub(super) size: f64,
    pub(super) class: &'static str,
    pub(super) anchor: Option<&'static str>,
}

impl TextStyle {
    pub(super) const fn new(size: f64, class: &'static str) -> Self {
        Self { size, class, anchor: None }
    }

    pub(super) const fn centered(self) -> Self {
        Self { anchor: Some("middle"), ..self }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    depth: usize,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            depth: 0,
            width,
            height,
        }
    }

    /// A page in millimetres with the shared stylesheet.
    pub(super) fn page() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');
        svg.push_str("  <defs>\n    <style type=\"text/css\"><![CDATA[\n");
        svg.push_str(STYLES);
        svg.push_str("]]></style>\n  </defs>\n");
        for el in &self.elements {
            svg.push_str(el);
            svg.push('\n');
        }
        for _ in 0..self.depth {
            svg.push_str("  </g>\n");
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn push(&mut self, element: String) {
        let indent = "  ".repeat(self.depth + 1);
        self.elements.push(indent + &element);
    }

    pub(super) fn begin_group(&mut self, id: &str) {
        self.push(format!(r#"<g id="{}">"#, escape(id)));
        self.depth += 1;
    }

    pub(super) fn end_group(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            self.push("</g>".to_string());
        }
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &ShapeStyle, class: &str) {
        self.push(format!(
            r#"<line class="{}" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            class, x1, y1, x2, y2, style.stroke, style.stroke_width, style.fill
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &ShapeStyle, class: &str) {
        self.push(format!(
            r#"<rect class="{}" x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            class, x, y, w, h, style.stroke, style.stroke_width, style.fill
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            Some(anchor) => format!(r#" text-anchor="{anchor}""#),
            None => String::new(),
        };
        self.push(format!(
            r#"<text class="{}" x="{:.3}" y="{:.3}" font-size="{}"{}>{}</text>"#,
            style.class,
            x,
            y,
            style.size,
            anchor,
            escape(content)
        ));
    }

    #[cfg(test)]
    pub(super) fn elements(&self) -> &[String] {
        &self.elements
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
