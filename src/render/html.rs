//! HTML renderer — single static page with a navigation rail.
//!
//! Descriptions, welcome text and examples are trusted markup and are
//! injected as-is. Identifiers and type names are escaped.

use crate::format::join_returns;
use crate::join::Entry;
use crate::model::{Catalog, DEFAULT_TITLE};
use crate::render::Renderer;
use anyhow::Result;

const PAGE_TITLE: &str = "GreyScript API";

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 0; }
nav { position: fixed; top: 0; left: 0; width: 200px; height: 100%; overflow-y: auto; background: #f7f7f7; padding: 20px; box-sizing: border-box; }
main { margin-left: 220px; padding: 20px; }
nav a { display: block; margin-bottom: 8px; color: #333; text-decoration: none; }
nav a:hover { text-decoration: underline; }
code { background: #eee; padding: 2px 4px; }
pre { background: #f0f0f0; padding: 10px; overflow-x: auto; }
h2 { border-bottom: 1px solid #ddd; padding-bottom: 4px; }
";

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let entries = catalog.entries();
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\" />\n");
        out.push_str(&format!("<title>{}</title>\n", PAGE_TITLE));
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        // Navigation
        out.push_str("<nav>\n<h2>Objects</h2>\n");
        for entry in entries.iter().filter(|e| e.is_object()) {
            let name = html_escape(entry.object);
            out.push_str(&format!("<a href=\"#{}\">{}</a>\n", name, name));
        }
        out.push_str("</nav>\n");

        out.push_str("<main>\n");
        out.push_str(&format!(
            "<h1>{}</h1>\n",
            html_escape(catalog.site.title_or(DEFAULT_TITLE))
        ));
        if let Some(welcome) = catalog.site.welcome_text() {
            out.push_str(&format!("<div>{}</div>\n", welcome));
        }

        let mut open = false;
        for entry in &entries {
            if entry.is_object() {
                if open {
                    out.push_str("</section>\n");
                }
                open = true;
                render_object_html(&mut out, entry);
            } else {
                render_method_html(&mut out, entry);
            }
        }
        if open {
            out.push_str("</section>\n");
        }

        out.push_str("</main>\n</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_object_html(out: &mut String, entry: &Entry<'_>) {
    let name = html_escape(entry.object);
    out.push_str(&format!("<section id=\"{}\"><h2>{}</h2>\n", name, name));
    if entry.has_description() {
        out.push_str(&format!("<p>{}</p>\n", entry.description));
    }
}

fn render_method_html(out: &mut String, entry: &Entry<'_>) {
    out.push_str(&format!(
        "<div><h3>{}</h3>\n",
        html_escape(entry.member.unwrap_or_default())
    ));

    if entry.has_description() {
        out.push_str(&format!("<p>{}</p>\n", entry.description));
    }

    if !entry.arguments.is_empty() {
        out.push_str("<p><strong>Arguments:</strong></p>\n<ul>\n");
        for arg in entry.arguments {
            out.push_str(&format!(
                "<li><code>{}</code>: {}</li>\n",
                html_escape(&arg.label),
                html_escape(&arg.ty)
            ));
        }
        out.push_str("</ul>\n");
    }

    if !entry.returns.is_empty() {
        out.push_str(&format!(
            "<p><strong>Returns:</strong> {}</p>\n",
            html_escape(&join_returns(entry.returns, ", "))
        ));
    }

    if !entry.example.is_empty() {
        out.push_str(&format!("<pre>{}</pre>\n", entry.example.join("\n")));
    }

    out.push_str("</div>\n");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(signatures: &[(&str, &str)], descriptions: &[(&str, &str)]) -> Catalog {
        Catalog {
            signatures: signatures
                .iter()
                .map(|(n, j)| (n.to_string(), serde_json::from_str(j).unwrap()))
                .collect(),
            descriptions: descriptions
                .iter()
                .map(|(n, j)| (n.to_string(), serde_json::from_str(j).unwrap()))
                .collect(),
            site: Default::default(),
        }
    }

    #[test]
    fn one_section_and_nav_link_per_object() {
        let catalog = catalog(
            &[
                ("list", r#"{"definitions":{"push":{},"pop":{}}}"#),
                ("map", r#"{"definitions":{}}"#),
                ("string", r#"{"definitions":{"len":{}}}"#),
            ],
            &[],
        );
        let out = HtmlRenderer.render(&catalog).unwrap();
        assert_eq!(out.matches("<section").count(), 3);
        assert_eq!(out.matches("</section>").count(), 3);
        for name in ["list", "map", "string"] {
            assert_eq!(out.matches(&format!("<a href=\"#{}\">", name)).count(), 1);
            assert_eq!(out.matches(&format!("<section id=\"{}\">", name)).count(), 1);
        }
        assert_eq!(out.matches("<div><h3>").count(), 3);
    }

    #[test]
    fn descriptions_are_raw_identifiers_escaped() {
        let catalog = catalog(
            &[(
                "list",
                r#"{"definitions":{"push":{"arguments":[{"label":"v","type":"list<any>"}],"returns":[{"type":"list"}]}}}"#,
            )],
            &[(
                "list",
                r#"{"$meta":{"description":"A <b>list</b>."},"push":{"description":"Adds <code>v</code>.","example":["l = []","l.push(1)"]}}"#,
            )],
        );
        let out = HtmlRenderer.render(&catalog).unwrap();
        assert!(out.contains("<p>A <b>list</b>.</p>"));
        assert!(out.contains("<p>Adds <code>v</code>.</p>"));
        assert!(out.contains("<li><code>v</code>: list&lt;any&gt;</li>"));
        assert!(out.contains("<p><strong>Returns:</strong> {&quot;type&quot;:&quot;list&quot;}</p>"));
        assert!(out.contains("<pre>l = []\nl.push(1)</pre>"));
    }

    #[test]
    fn default_title_and_no_welcome() {
        let out = HtmlRenderer.render(&catalog(&[], &[])).unwrap();
        assert!(out.contains("<title>GreyScript API</title>"));
        assert!(out.contains("<h1>GreyScript API Documentation</h1>"));
        assert!(!out.contains("<section"));
    }

    #[test]
    fn welcome_text_injected_raw() {
        let mut catalog = catalog(&[], &[]);
        catalog.site = serde_json::from_str(
            r#"{"WELCOME_TITLE":"Docs","WELCOME_TEXT":"<p>Start <em>here</em>.</p>"}"#,
        )
        .unwrap();
        let out = HtmlRenderer.render(&catalog).unwrap();
        assert!(out.contains("<h1>Docs</h1>"));
        assert!(out.contains("<div><p>Start <em>here</em>.</p></div>"));
    }
}
