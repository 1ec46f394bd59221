//! Model declarations: intents, entities and the JSON loader.
//!
//! A `PatternModel` is the mutable declaration side; applying models to a
//! recognizer compiles them into the immutable matching snapshot. The
//! JSON document shape:
//!
//! ```json
//! {
//!   "intents": [ { "phrases": ["Open {appName}"], "id": "open" } ],
//!   "entities": [
//!     { "name": "myList", "type": "List", "mode": "Strict",
//!       "entries": [ { "entry": "entry1", "synonyms": ["synonym1"] } ] },
//!     { "name": "number", "type": "PrebuiltInteger" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::entity::{EntityDef, ListMode};
use crate::error::IntentError;
use crate::locale::Locale;

/// One pattern phrase and the intent id it emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentDecl {
    pub phrase: String,
    pub intent_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Any,
    List,
    PrebuiltInteger,
}

/// Declared entity; `entries` pairs each entry with its synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDecl {
    pub name: String,
    pub kind: EntityKind,
    pub mode: ListMode,
    pub entries: Vec<(String, Vec<String>)>,
}

impl EntityDecl {
    /// Compile into the catalog definition under `locale`.
    pub fn build(&self, locale: &Locale) -> EntityDef {
        match self.kind {
            EntityKind::Any => EntityDef::Any,
            EntityKind::PrebuiltInteger => EntityDef::PrebuiltInteger,
            EntityKind::List => EntityDef::list(self.mode, &self.entries, locale),
        }
    }
}

/// A declared model: an id plus ordered intent and entity declarations.
#[derive(Debug, Clone, Default)]
pub struct PatternModel {
    model_id: String,
    intents: Vec<IntentDecl>,
    entities: Vec<EntityDecl>,
}

impl PatternModel {
    pub fn new<I: Into<String>>(model_id: I) -> Self {
        PatternModel {
            model_id: model_id.into(),
            intents: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn intents(&self) -> &[IntentDecl] {
        &self.intents
    }

    pub fn entities(&self) -> &[EntityDecl] {
        &self.entities
    }

    /// Append an intent pattern.
    pub fn add_intent<P: Into<String>, I: Into<String>>(&mut self, phrase: P, intent_id: I) {
        self.intents.push(IntentDecl {
            phrase: phrase.into(),
            intent_id: intent_id.into(),
        });
    }

    /// Append an intent whose id is the phrase itself.
    pub fn add_intent_phrase<P: Into<String>>(&mut self, phrase: P) {
        let phrase = phrase.into();
        self.intents.push(IntentDecl {
            intent_id: phrase.clone(),
            phrase,
        });
    }

    pub fn add_any_entity<N: Into<String>>(&mut self, name: N) {
        self.entities.push(EntityDecl {
            name: name.into(),
            kind: EntityKind::Any,
            mode: ListMode::Strict,
            entries: Vec::new(),
        });
    }

    /// Append a list entity from bare phrases (no synonyms).
    pub fn add_list_entity<N: Into<String>>(&mut self, name: N, mode: ListMode, phrases: &[&str]) {
        self.entities.push(EntityDecl {
            name: name.into(),
            kind: EntityKind::List,
            mode,
            entries: phrases
                .iter()
                .map(|p| (p.to_string(), Vec::new()))
                .collect(),
        });
    }

    /// Append a list entity from `(entry, synonyms)` pairs.
    pub fn add_entity_with_entries<N: Into<String>>(
        &mut self,
        name: N,
        mode: ListMode,
        entries: Vec<(String, Vec<String>)>,
    ) {
        self.entities.push(EntityDecl {
            name: name.into(),
            kind: EntityKind::List,
            mode,
            entries,
        });
    }

    pub fn add_prebuilt_integer_entity<N: Into<String>>(&mut self, name: N) {
        self.entities.push(EntityDecl {
            name: name.into(),
            kind: EntityKind::PrebuiltInteger,
            mode: ListMode::Strict,
            entries: Vec::new(),
        });
    }

    /// Load a model from its JSON document.
    pub fn from_json_str(model_id: &str, json: &str) -> Result<Self, IntentError> {
        let doc: ModelDoc = serde_json::from_str(json)
            .map_err(|e| IntentError::InvalidModel(e.to_string()))?;
        Self::from_doc(model_id, doc)
    }

    pub fn from_json_file<P: AsRef<Path>>(model_id: &str, path: P) -> Result<Self, IntentError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IntentError::InvalidModel(format!("read {}: {e}", path.as_ref().display()))
        })?;
        Self::from_json_str(model_id, &json)
    }

    fn from_doc(model_id: &str, doc: ModelDoc) -> Result<Self, IntentError> {
        let mut model = PatternModel::new(model_id);
        for intent in doc.intents {
            for phrase in intent.phrases {
                model.add_intent(phrase, intent.id.clone());
            }
        }
        for entity in doc.entities {
            let kind = match entity.kind.to_ascii_lowercase().as_str() {
                "any" => EntityKind::Any,
                "list" => EntityKind::List,
                "prebuiltinteger" | "prebuilt_integer" | "prebuilt.integer" => {
                    EntityKind::PrebuiltInteger
                }
                other => {
                    return Err(IntentError::InvalidModel(format!(
                        "entity `{}` has unknown type `{other}`",
                        entity.name
                    )));
                }
            };
            let mode = match entity.mode.as_deref() {
                None => ListMode::Strict,
                Some(m) => match m.to_ascii_lowercase().as_str() {
                    "strict" => ListMode::Strict,
                    "fuzzy" => ListMode::Fuzzy,
                    other => {
                        return Err(IntentError::InvalidModel(format!(
                            "entity `{}` has unknown mode `{other}`",
                            entity.name
                        )));
                    }
                },
            };
            // Bare phrases and entry/synonym objects merge into one list.
            let mut entries: Vec<(String, Vec<String>)> = entity
                .phrases
                .into_iter()
                .map(|p| (p, Vec::new()))
                .collect();
            entries.extend(
                entity
                    .entries
                    .into_iter()
                    .map(|e| (e.entry, e.synonyms)),
            );
            model.entities.push(EntityDecl {
                name: entity.name,
                kind,
                mode,
                entries,
            });
        }
        Ok(model)
    }
}

#[derive(Debug, Deserialize)]
struct ModelDoc {
    #[serde(default)]
    intents: Vec<IntentDoc>,
    #[serde(default)]
    entities: Vec<EntityDoc>,
}

#[derive(Debug, Deserialize)]
struct IntentDoc {
    #[serde(default)]
    phrases: Vec<String>,
    id: String,
}

#[derive(Debug, Deserialize)]
struct EntityDoc {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    phrases: Vec<String>,
    #[serde(default)]
    entries: Vec<EntryDoc>,
}

#[derive(Debug, Deserialize)]
struct EntryDoc {
    entry: String,
    #[serde(default)]
    synonyms: Vec<String>,
}
