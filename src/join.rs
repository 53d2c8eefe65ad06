//! Join signatures with descriptions into a flat, ordered entry list.
//!
//! One object-level entry is emitted per signature object, followed by one
//! entry per method in declaration order. Missing descriptions resolve to
//! empty strings and lists; nothing is dropped here. Renderers decide how to
//! treat undescribed entries.

use crate::model::{Argument, Catalog, DescriptionObject, ReturnType, SignatureObject};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub object: &'a str,
    /// `None` for the object-level entry.
    pub member: Option<&'a str>,
    pub arguments: &'a [Argument],
    pub returns: &'a [ReturnType],
    /// Empty when no description exists.
    pub description: &'a str,
    /// Empty when no example exists.
    pub example: &'a [String],
}

impl Entry<'_> {
    pub fn is_object(&self) -> bool {
        self.member.is_none()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

pub fn join<'a>(
    signatures: &'a IndexMap<String, SignatureObject>,
    descriptions: &'a IndexMap<String, DescriptionObject>,
) -> Vec<Entry<'a>> {
    let mut entries = Vec::new();

    for (name, sig) in signatures {
        let desc = descriptions.get(name);

        entries.push(Entry {
            object: name,
            member: None,
            arguments: &[],
            returns: &[],
            description: desc.map(DescriptionObject::object_description).unwrap_or(""),
            example: &[],
        });

        for (method, def) in &sig.definitions {
            let method_desc = desc.and_then(|d| d.methods.get(method));
            entries.push(Entry {
                object: name,
                member: Some(method),
                arguments: &def.arguments,
                returns: &def.returns,
                description: method_desc
                    .and_then(|m| m.description.as_deref())
                    .unwrap_or(""),
                example: method_desc
                    .and_then(|m| m.example.as_deref())
                    .unwrap_or(&[]),
            });
        }
    }

    entries
}

impl Catalog {
    pub fn entries(&self) -> Vec<Entry<'_>> {
        join(&self.signatures, &self.descriptions)
    }
}
