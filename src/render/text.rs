//! Plain-text renderer — word-wrapped reference with markup stripped.

use crate::format::{join_returns, strip_tags, wrap_text};
use crate::join::Entry;
use crate::model::{Catalog, DEFAULT_TITLE};
use crate::render::Renderer;
use anyhow::Result;

const METHOD_INDENT: &str = "    ";

pub struct TextRenderer {
    pub width: usize,
}

impl Renderer for TextRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut out = String::new();

        out.push_str(catalog.site.title_or(DEFAULT_TITLE));
        out.push_str("\n\n");
        if let Some(welcome) = catalog.site.welcome_text() {
            out.push_str(&wrap_text(&strip_tags(welcome), self.width, ""));
            out.push_str("\n\n");
        }

        let mut first = true;
        for entry in catalog.entries() {
            if entry.is_object() {
                // Blank line closes the previous object
                if !first {
                    out.push('\n');
                }
                first = false;
                self.render_object(&mut out, &entry);
            } else {
                self.render_method(&mut out, &entry);
            }
        }
        if !first {
            out.push('\n');
        }

        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

impl TextRenderer {
    fn render_object(&self, out: &mut String, entry: &Entry<'_>) {
        out.push_str(entry.object);
        out.push('\n');
        out.push_str(&"-".repeat(entry.object.chars().count()));
        out.push('\n');
        if entry.has_description() {
            out.push_str(&wrap_text(&strip_tags(entry.description), self.width, ""));
            out.push('\n');
        }
    }

    fn render_method(&self, out: &mut String, entry: &Entry<'_>) {
        out.push_str(&format!("  - {}\n", entry.member.unwrap_or_default()));

        if entry.has_description() {
            let wrapped = wrap_text(&strip_tags(entry.description), self.width, METHOD_INDENT);
            if !wrapped.is_empty() {
                out.push_str(&wrapped);
                out.push('\n');
            }
        }

        if !entry.arguments.is_empty() {
            out.push_str("    Arguments:\n");
            for arg in entry.arguments {
                out.push_str(&format!("      {}: {}\n", arg.label, arg.ty));
            }
        }

        if !entry.returns.is_empty() {
            out.push_str(&format!("    Returns: {}\n", join_returns(entry.returns, ", ")));
        }

        if !entry.example.is_empty() {
            out.push_str("    Example:\n");
            for line in entry.example {
                out.push_str(&format!("      {}\n", line));
            }
        }

        out.push('\n');
    }
}
