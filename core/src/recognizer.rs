//! Recognizer facade.
//!
//! `apply_models` compiles the declared models into an immutable snapshot
//! (compiled patterns + entity catalog) swapped in whole-sale behind an
//! `RwLock<Arc<_>>`. Each `recognize_once` clones the current `Arc`, so
//! concurrent calls always observe one consistent snapshot, never a
//! partially applied one. Recognition itself is pure and never fails.

use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use crate::entity::EntityCatalog;
use crate::error::IntentError;
use crate::locale::Locale;
use crate::matcher::{MatchOutcome, Matcher};
use crate::model::PatternModel;
use crate::pattern::{compile, PatternAtom};
use crate::rank::{compare, MatchScore};
use crate::result::{IntentResult, RankedIntent};
use crate::tokenizer::{tokenize, TextKind};
use crate::Config;

#[derive(Debug)]
struct CompiledPattern {
    intent_id: String,
    atoms: Vec<PatternAtom>,
}

#[derive(Debug, Default)]
struct CompiledSet {
    patterns: Vec<CompiledPattern>,
    catalog: EntityCatalog,
}

pub struct IntentRecognizer {
    locale: Locale,
    config: Config,
    active: RwLock<Arc<CompiledSet>>,
}

impl IntentRecognizer {
    /// Create a recognizer for a locale tag ("en-us", "zh-cn", ...).
    pub fn new(locale_tag: &str) -> Self {
        Self::with_config(locale_tag, Config::default())
    }

    pub fn with_config(locale_tag: &str, config: Config) -> Self {
        IntentRecognizer {
            locale: Locale::parse(locale_tag),
            config,
            active: RwLock::new(Arc::new(CompiledSet::default())),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Compile and install the given models, replacing all prior state.
    ///
    /// Errors: `MalformedPattern` for any bad phrase, `InvalidLocale` when
    /// a `PrebuiltInteger` entity is declared but this locale has no
    /// numeral tables.
    pub fn apply_models(&self, models: &[PatternModel]) -> Result<(), IntentError> {
        let set = self.compile_models(models)?;
        debug!(
            patterns = set.patterns.len(),
            entities = set.catalog.len(),
            locale = %self.locale,
            "applied pattern models"
        );
        let mut guard = match self.active.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(set);
        Ok(())
    }

    fn compile_models(&self, models: &[PatternModel]) -> Result<CompiledSet, IntentError> {
        let mut catalog = EntityCatalog::new();
        for model in models {
            for decl in model.entities() {
                catalog.define(decl.name.clone(), decl.build(&self.locale));
            }
        }
        if catalog.needs_integer_tables() && self.locale.family().is_none() {
            return Err(IntentError::InvalidLocale(self.locale.to_string()));
        }
        let mut patterns = Vec::new();
        for model in models {
            for intent in model.intents() {
                patterns.push(CompiledPattern {
                    intent_id: intent.intent_id.clone(),
                    atoms: compile(&intent.phrase, &self.locale)?,
                });
            }
        }
        Ok(CompiledSet { patterns, catalog })
    }

    /// Match `text` against every applied pattern and return the ranked
    /// result. Pure: the same text against the same snapshot always
    /// produces the same result.
    pub fn recognize_once(&self, text: &str) -> IntentResult {
        let snapshot = {
            let guard = match self.active.read() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            Arc::clone(&guard)
        };

        let normalized = crate::utils::normalize(text);
        let tokens = tokenize(&normalized, &self.locale, TextKind::Input);
        if tokens.is_empty() || snapshot.patterns.is_empty() {
            return IntentResult::no_match();
        }

        let matcher = Matcher::new(&tokens, &snapshot.catalog, &self.locale, &self.config);
        let mut ranked: Vec<(MatchScore, &CompiledPattern, MatchOutcome)> = Vec::new();
        for (order, pattern) in snapshot.patterns.iter().enumerate() {
            if let Some(outcome) = matcher.match_pattern(&pattern.atoms) {
                trace!(intent = %pattern.intent_id, order, "candidate match");
                ranked.push((MatchScore::of(&outcome, order), pattern, outcome));
            }
        }
        if ranked.is_empty() {
            return IntentResult::no_match();
        }
        ranked.sort_by(|a, b| compare(&a.0, &b.0));

        let detailed: Vec<RankedIntent> = ranked
            .iter()
            .take(self.config.max_alternates)
            .map(|(_, pattern, outcome)| RankedIntent {
                intent_id: pattern.intent_id.clone(),
                entities: collect_entities(outcome),
            })
            .collect();

        let (_, best_pattern, best) = &ranked[0];
        debug!(intent = %best_pattern.intent_id, alternates = detailed.len(), "recognized");
        IntentResult::new(
            best_pattern.intent_id.clone(),
            collect_entities(best),
            detailed,
        )
    }
}

/// Bindings in match order; a duplicated key keeps the later binding.
fn collect_entities(outcome: &MatchOutcome) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::with_capacity(outcome.bindings.len());
    for binding in &outcome.bindings {
        if let Some(existing) = out.iter_mut().find(|(k, _)| *k == binding.key) {
            existing.1 = binding.value.clone();
        } else {
            out.push((binding.key.clone(), binding.value.clone()));
        }
    }
    out
}
