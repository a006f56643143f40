use super::{OutputFormatter, SvgOutput, escape_xml};
use crate::diagram::{Diagram, HighlightState};
use crate::graph::PAGE_TEMPLATE;
use std::io::Write;

/// Self-contained interactive page: the SVG plus a script that highlights
/// a hovered label's imports and importers.
pub struct HtmlOutput<'a> {
    title: String,
    highlight: Option<&'a HighlightState>,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, state: &'a HighlightState) -> Self {
        self.highlight = Some(state);
        self
    }
}

impl OutputFormatter for HtmlOutput<'_> {
    fn format<W: Write>(&self, diagram: &Diagram, writer: &mut W) -> std::io::Result<()> {
        let svg = match self.highlight {
            Some(state) => SvgOutput::new().with_highlight(state),
            None => SvgOutput::new(),
        }
        .format_to_string(diagram)?;

        let title = escape_xml(&self.title);
        let leaves = diagram.labels.len().to_string();
        let links = diagram.links.len().to_string();
        let unresolved = diagram.unresolved_links().count().to_string();

        let page = fill_template(
            PAGE_TEMPLATE,
            &[
                ("title", &title),
                ("leaves", &leaves),
                ("links", &links),
                ("unresolved", &unresolved),
                ("svg", &svg),
            ],
        );

        write!(writer, "{}", page)
    }
}

/// Replace `{{key}}` placeholders in one pass, so substituted text is never rescanned.
/// Unknown placeholders are left as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (end, *v))
        });

        match value {
            Some((end, v)) => {
                out.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{RenderOptions, Renderer};
    use crate::model::NamedRecord;

    #[test]
    fn test_page_embeds_svg_and_stats() {
        let diagram = Renderer::new(RenderOptions::default()).render(&[
            NamedRecord::new("a.b").with_imports(["a.c", "missing"]),
            NamedRecord::new("a.c"),
        ]);
        let html = HtmlOutput::new("flare & friends")
            .format_to_string(&diagram)
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>flare &amp; friends</title>"));
        assert!(html.contains("<svg xmlns"));
        assert!(html.contains(r#"<span class="stat-value">1</span>"#));
        assert!(html.contains("function mouseovered"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_placeholder_text_in_values_is_not_expanded() {
        let diagram = Renderer::new(RenderOptions::default())
            .render(&[NamedRecord::new("{{title}}"), NamedRecord::new("b")]);
        let html = HtmlOutput::new("{{svg}}").format_to_string(&diagram).unwrap();

        assert!(html.contains("<title>{{svg}}</title>"));
        assert_eq!(html.matches("<svg xmlns").count(), 1);
        assert!(html.contains(">{{title}}</text>"));
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed() {
        let filled = fill_template("{{a}} {{b}} {{c", &[("a", "1")]);

        assert_eq!(filled, "1 {{b}} {{c");
    }
}
