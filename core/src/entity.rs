//! Entity definitions and the catalog patterns resolve against.
//!
//! List phrases are pre-tokenized and case-folded when the catalog is
//! built, so matching compares canonical forms only. Each stored phrase
//! carries the entry name it canonicalizes to; a synonym hit therefore
//! maps back to its entry.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::tokenizer::{tokenize, TextKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMode {
    /// The span's canonical form must equal one of the phrases.
    Strict,
    /// Any span is accepted; the phrase list only canonicalizes values.
    Fuzzy,
}

/// One acceptable phrase of a list entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Canonical tokenized form compared against utterance spans.
    pub phrase: String,
    /// Number of tokens in `phrase`; bounds the matcher's span search.
    pub token_len: usize,
    /// The entry name reported as the entity value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityDef {
    /// Matches any non-empty span under the matcher's greed rules.
    Any,
    List {
        mode: ListMode,
        entries: Vec<ListEntry>,
    },
    /// The span must parse as a locale integer.
    PrebuiltInteger,
}

static ANY_DEF: EntityDef = EntityDef::Any;

impl EntityDef {
    /// Build a list definition from `(entry, synonyms)` pairs, folding
    /// every phrase through the locale tokenizer.
    pub fn list(mode: ListMode, entries: &[(String, Vec<String>)], locale: &Locale) -> Self {
        let mut out = Vec::new();
        for (entry, synonyms) in entries {
            push_entry(&mut out, entry, entry, locale);
            for synonym in synonyms {
                push_entry(&mut out, synonym, entry, locale);
            }
        }
        EntityDef::List { mode, entries: out }
    }

    /// Longest stored phrase, in tokens. Zero for non-list definitions.
    pub fn max_phrase_tokens(&self) -> usize {
        match self {
            EntityDef::List { entries, .. } => {
                entries.iter().map(|e| e.token_len).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// First stored phrase equal to `canonical`, if any.
    pub fn find_phrase(&self, canonical: &str) -> Option<&ListEntry> {
        match self {
            EntityDef::List { entries, .. } => {
                entries.iter().find(|e| e.phrase == canonical)
            }
            _ => None,
        }
    }
}

fn push_entry(out: &mut Vec<ListEntry>, phrase: &str, value: &str, locale: &Locale) {
    let tokens = tokenize(phrase, locale, TextKind::Input);
    if tokens.is_empty() {
        return;
    }
    let canonical = crate::tokenizer::join_canonical(
        tokens.iter().map(|t| t.text.as_str()),
        locale.is_cjk(),
    );
    out.push(ListEntry {
        phrase: canonical,
        token_len: tokens.len(),
        value: value.to_string(),
    });
}

/// Name -> definition map. Undeclared names resolve to `Any`, which is
/// what makes a bare `{anything}` slot work without a declaration.
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    defs: AHashMap<String, EntityDef>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition; the last definition for a name wins.
    pub fn define<N: Into<String>>(&mut self, name: N, def: EntityDef) {
        self.defs.insert(name.into(), def);
    }

    pub fn lookup(&self, name: &str) -> &EntityDef {
        self.defs.get(name).unwrap_or(&ANY_DEF)
    }

    /// Whether any declared entity needs the locale integer tables.
    pub fn needs_integer_tables(&self) -> bool {
        self.defs
            .values()
            .any(|d| matches!(d, EntityDef::PrebuiltInteger))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &EntityDef)> {
        self.defs.iter()
    }
}
