mod html;
mod json;
mod svg;

pub use html::HtmlOutput;
pub use json::JsonOutput;
pub use svg::SvgOutput;

use crate::diagram::Diagram;
use std::io::Write;

/// Writes a rendered [`Diagram`] in one output format.
pub trait OutputFormatter {
    fn format<W: Write>(&self, diagram: &Diagram, writer: &mut W) -> std::io::Result<()>;

    /// Format into a fresh `String`.
    fn format_to_string(&self, diagram: &Diagram) -> std::io::Result<String> {
        let mut buffer = Vec::new();
        self.format(diagram, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
