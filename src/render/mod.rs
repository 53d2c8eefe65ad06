//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod jsonl;
pub mod text;

use crate::format::DEFAULT_WIDTH;
use crate::model::Catalog;
use anyhow::{anyhow, Result};

/// Trait for rendering a loaded catalog into a specific output format.
pub trait Renderer {
    fn render(&self, catalog: &Catalog) -> Result<String>;
    fn file_extension(&self) -> &str;

    /// Noun used in the confirmation line.
    fn artifact(&self) -> &str {
        "Documentation"
    }
}

/// Knobs that only some renderers read.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Plain-text wrap column.
    pub width: usize,
    /// Terminate the final flat record with a newline.
    pub trailing_newline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            trailing_newline: false,
        }
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: &RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "jsonl" | "chat" => Ok(Box::new(jsonl::ChatRenderer)),
        "jsonl-flat" | "records" => Ok(Box::new(jsonl::RecordRenderer {
            trailing_newline: options.trailing_newline,
        })),
        "text" | "txt" => Ok(Box::new(text::TextRenderer {
            width: options.width,
        })),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use jsonl, jsonl-flat, text, or html",
            format
        )),
    }
}
