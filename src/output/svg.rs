use super::{OutputFormatter, escape_xml};
use crate::diagram::{Diagram, HighlightState};
use crate::graph::DIAGRAM_CSS;
use crate::layout::num;
use std::io::Write;

/// Writes the diagram as a standalone SVG document.
///
/// Links are drawn first, in highlight order when a [`HighlightState`] is
/// attached, and labels on top. Hover classes from the state are applied as
/// extra CSS classes.
#[derive(Default)]
pub struct SvgOutput<'a> {
    highlight: Option<&'a HighlightState>,
}

impl<'a> SvgOutput<'a> {
    pub fn new() -> Self {
        Self { highlight: None }
    }

    pub fn with_highlight(mut self, state: &'a HighlightState) -> Self {
        self.highlight = Some(state);
        self
    }

    fn link_order(&self, diagram: &Diagram) -> Vec<usize> {
        match self.highlight {
            Some(state) if state.order().len() == diagram.paths.len() => state.order().to_vec(),
            _ => (0..diagram.paths.len()).collect(),
        }
    }
}

impl OutputFormatter for SvgOutput<'_> {
    fn format<W: Write>(&self, diagram: &Diagram, writer: &mut W) -> std::io::Result<()> {
        let diameter = num(diagram.options.diameter);
        let radius = num(diagram.options.radius());

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            diameter
        )?;
        writeln!(writer, "<style>{}</style>", DIAGRAM_CSS)?;
        writeln!(writer, r#"<g transform="translate({0},{0})">"#, radius)?;

        writeln!(writer, r#"<g class="links">"#)?;
        for index in self.link_order(diagram) {
            let path = &diagram.paths[index];
            let mut class = String::from("link");
            if let Some(state) = self.highlight {
                for c in state.link(index).css() {
                    class.push(' ');
                    class.push_str(c);
                }
            }
            writeln!(
                writer,
                r#"<path class="{}" d="{}" data-source="{}" data-target="{}"/>"#,
                class,
                path.d,
                escape_xml(diagram.name(path.source())),
                escape_xml(diagram.name(path.target()))
            )?;
        }
        writeln!(writer, "</g>")?;

        writeln!(writer, r#"<g class="nodes">"#)?;
        for label in &diagram.labels {
            let mut class = String::from("node");
            if let Some(state) = self.highlight {
                for c in state.node(label.node).css() {
                    class.push(' ');
                    class.push_str(c);
                }
            }
            writeln!(
                writer,
                r#"<text class="{}" dy=".31em" transform="{}" text-anchor="{}" data-name="{}">{}</text>"#,
                class,
                label.transform,
                label.anchor.as_str(),
                escape_xml(diagram.name(label.node)),
                escape_xml(&label.text)
            )?;
        }
        writeln!(writer, "</g>")?;

        writeln!(writer, "</g>")?;
        writeln!(writer, "</svg>")
    }
}
