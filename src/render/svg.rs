use std::fmt::Write as _;

use crate::core::Viewport;
use crate::error::{Scale2dError, Scale2dResult};
use crate::render::{LabelPrimitive, LinePrimitive, Renderer, StyleBag, TickFrame, TickPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub labels_drawn: usize,
}

/// SVG markup backend.
///
/// Each `render` call replaces the buffered fragment with one `<line>` or
/// `<text>` element per primitive, in frame order. Style bags become inline
/// CSS; camelCase keys are written in kebab-case (`strokeWidth` becomes
/// `stroke-width`).
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
    viewport: Option<Viewport>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Element fragment from the last render, without an `<svg>` root.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Wraps the last fragment in an `<svg>` root sized to the frame viewport.
    ///
    /// Returns an empty string when the last frame had no viewport.
    #[must_use]
    pub fn to_svg_document(&self) -> String {
        let Some(viewport) = self.viewport else {
            return String::new();
        };
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n{body}</svg>\n",
            w = viewport.width,
            h = viewport.height,
            body = self.markup,
        )
    }

    fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
        write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" class=\"{}\"",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            escape_xml(&line.class)
        )?;
        write_style_attr(out, line.style.as_ref())?;
        out.write_str("/>\n")
    }

    fn write_label(out: &mut String, label: &LabelPrimitive) -> std::fmt::Result {
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" class=\"{}\"",
            label.x,
            label.y,
            escape_xml(&label.class)
        )?;
        write_style_attr(out, label.style.as_ref())?;
        writeln!(out, ">{}</text>", escape_xml(&label.text))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &TickFrame) -> Scale2dResult<()> {
        frame.validate()?;

        let mut markup = String::new();
        let mut stats = SvgRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                TickPrimitive::Line(line) => {
                    Self::write_line(&mut markup, line).map_err(map_fmt_error)?;
                    stats.lines_drawn += 1;
                }
                TickPrimitive::Label(label) => {
                    Self::write_label(&mut markup, label).map_err(map_fmt_error)?;
                    stats.labels_drawn += 1;
                }
            }
        }

        self.markup = markup;
        self.viewport = frame.viewport;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_style_attr(out: &mut String, style: Option<&StyleBag>) -> std::fmt::Result {
    let Some(css) = style.map(style_to_css).filter(|css| !css.is_empty()) else {
        return Ok(());
    };
    write!(out, " style=\"{}\"", escape_xml(&css))
}

/// Renders a style bag as `key: value;` pairs. Null values are skipped.
#[must_use]
pub fn style_to_css(style: &StyleBag) -> String {
    let mut parts = Vec::with_capacity(style.len());
    for (key, value) in style {
        let value = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        parts.push(format!("{}: {value};", kebab_case(key)));
    }
    parts.join(" ")
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn map_fmt_error(err: std::fmt::Error) -> Scale2dError {
    Scale2dError::Render(format!("failed to write svg markup: {err}"))
}
