//! Symbol table built as a side effect of lexing.
//!
//! Each identifier gets one entry, created the first time the lexer sees it. The declared type comes from the type
//! keyword immediately preceding that first occurrence, if any. Later occurrences never overwrite an entry.
//!
//! The table is a `BTreeMap` so serialized snapshots are stable across runs.

use std::collections::BTreeMap;

use cstep_core::lang::types::{self, DeclTypeId};
use serde::{Serialize, Serializer};

/// First-declaration metadata for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    #[serde(serialize_with = "serialize_decl_type")]
    pub declared_type: Option<DeclTypeId>,
    pub size_in_bytes: Option<u8>,
    pub declared_line: usize,
}

impl SymbolEntry {
    pub fn new(declared_type: Option<DeclTypeId>, declared_line: usize) -> Self {
        Self {
            declared_type,
            size_in_bytes: declared_type.map(types::size_of),
            declared_line,
        }
    }
}

/// Mapping from identifier name to its [`SymbolEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: BTreeMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Record `name` if it has no entry yet. Returns `true` when an entry was created.
    pub(crate) fn declare(&mut self, name: &str, declared_type: Option<DeclTypeId>, line: usize) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries
            .insert(name.to_string(), SymbolEntry::new(declared_type, line));
        true
    }
}

fn serialize_decl_type<S: Serializer>(ty: &Option<DeclTypeId>, serializer: S) -> Result<S::Ok, S::Error> {
    match ty {
        Some(id) => serializer.serialize_some(types::as_str(*id)),
        None => serializer.serialize_none(),
    }
}
