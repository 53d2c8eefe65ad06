//! JSONL renderers — fine-tuning datasets, one JSON object per line.
//!
//! Both variants skip object-level entries without a description and keep
//! every method entry. They differ in framing and in how the file ends: the
//! chat variant always ends with a newline, the flat variant only when
//! `trailing_newline` is set.

use crate::format::format_signature;
use crate::join::Entry;
use crate::model::{Argument, Catalog, ReturnType};
use crate::render::Renderer;
use anyhow::Result;
use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for the GreyScript API.";

/// Chat-turn records: system prompt, question, answer.
pub struct ChatRenderer;

#[derive(Serialize)]
struct Conversation<'a> {
    messages: [Message<'a>; 3],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl Renderer for ChatRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut lines = Vec::new();

        for entry in catalog.entries() {
            let (question, answer) = match entry.member {
                None if !entry.has_description() => continue,
                None => (
                    format!("Explain the {} object.", entry.object),
                    entry.description.to_string(),
                ),
                Some(member) => (
                    format!("Explain {}.{}.", entry.object, member),
                    method_answer(&entry, member),
                ),
            };

            let record = Conversation {
                messages: [
                    Message {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    Message {
                        role: "user",
                        content: &question,
                    },
                    Message {
                        role: "assistant",
                        content: &answer,
                    },
                ],
            };
            lines.push(serde_json::to_string(&record)?);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "jsonl"
    }

    fn artifact(&self) -> &str {
        "Dataset"
    }
}

/// `Signature: ...`, then the description and example when present.
fn method_answer(entry: &Entry<'_>, member: &str) -> String {
    let mut answer = format!(
        "Signature: {}",
        format_signature(entry.object, member, entry.arguments, entry.returns)
    );
    if entry.has_description() {
        answer.push('\n');
        answer.push_str(entry.description);
    }
    if !entry.example.is_empty() {
        answer.push_str("\nExample:\n");
        answer.push_str(&entry.example.join("\n"));
    }
    answer
}

/// Flat records without chat framing.
pub struct RecordRenderer {
    pub trailing_newline: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    object: &'a str,
    member: Option<&'a str>,
    arguments: &'a [Argument],
    returns: &'a [ReturnType],
    description: &'a str,
    example: &'a [String],
}

impl<'a> From<&Entry<'a>> for Record<'a> {
    fn from(entry: &Entry<'a>) -> Self {
        Record {
            object: entry.object,
            member: entry.member,
            arguments: entry.arguments,
            returns: entry.returns,
            description: entry.description,
            example: entry.example,
        }
    }
}

impl Renderer for RecordRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut lines = Vec::new();
        for entry in catalog.entries() {
            if entry.is_object() && !entry.has_description() {
                continue;
            }
            lines.push(serde_json::to_string(&Record::from(&entry))?);
        }

        let mut out = lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "jsonl"
    }

    fn artifact(&self) -> &str {
        "Dataset"
    }
}
