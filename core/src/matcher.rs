//! The backtracking matcher.
//!
//! A compiled pattern is matched against the token stream with a
//! recursion over `(atom, token)` positions, carrying an explicit
//! continuation so optional groups and slots can retry alternatives.
//! Patterns are anchored at both ends: the final continuation only
//! accepts when every utterance token is consumed. Slot spans are
//! enumerated minimal-first, which makes an inner `Any` stop at the first
//! span that lets the remainder match and makes a trailing `Any` or
//! integer slot swallow everything left.

use tracing::trace;

use libnumerals::parse_integer;

use crate::entity::{EntityCatalog, EntityDef, ListMode};
use crate::locale::Locale;
use crate::pattern::PatternAtom;
use crate::tokenizer::{join_canonical, Token};
use crate::Config;

/// One bound slot: key (`name` or `name:instance`), extracted value and
/// the token span it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotBinding {
    pub key: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
    /// PrebuiltInteger=3 > ListStrict=2 > ListFuzzy=1 > Any=0.
    pub specificity: u8,
}

/// A successful match with its ranking metadata.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub bindings: Vec<SlotBinding>,
    pub literal_tokens: usize,
    pub covered_bytes: usize,
}

#[derive(Default)]
struct MatchState {
    bindings: Vec<SlotBinding>,
    literal_tokens: usize,
}

impl MatchState {
    fn mark(&self) -> (usize, usize) {
        (self.bindings.len(), self.literal_tokens)
    }

    fn rollback(&mut self, mark: (usize, usize)) {
        self.bindings.truncate(mark.0);
        self.literal_tokens = mark.1;
    }
}

pub struct Matcher<'a> {
    tokens: &'a [Token],
    catalog: &'a EntityCatalog,
    locale: &'a Locale,
    config: &'a Config,
}

impl<'a> Matcher<'a> {
    pub fn new(
        tokens: &'a [Token],
        catalog: &'a EntityCatalog,
        locale: &'a Locale,
        config: &'a Config,
    ) -> Self {
        Matcher {
            tokens,
            catalog,
            locale,
            config,
        }
    }

    /// Match one compiled pattern against the whole token stream.
    pub fn match_pattern(&self, atoms: &[PatternAtom]) -> Option<MatchOutcome> {
        let n = self.tokens.len();
        let mut st = MatchState::default();
        let mut accept = |ti: usize, _: &mut MatchState| ti == n;
        if self.match_seq(atoms, 0, &mut st, &mut accept) {
            let outcome = MatchOutcome {
                bindings: st.bindings,
                literal_tokens: st.literal_tokens,
                covered_bytes: self.tokens.iter().map(|t| t.text.len()).sum(),
            };
            trace!(
                literals = outcome.literal_tokens,
                slots = outcome.bindings.len(),
                "pattern matched"
            );
            Some(outcome)
        } else {
            None
        }
    }

    fn match_seq(
        &self,
        atoms: &[PatternAtom],
        ti: usize,
        st: &mut MatchState,
        cont: &mut dyn FnMut(usize, &mut MatchState) -> bool,
    ) -> bool {
        let Some((atom, rest)) = atoms.split_first() else {
            return cont(ti, st);
        };
        match atom {
            PatternAtom::Literal(word) => {
                let hit = self.tokens.get(ti).map_or(false, |t| t.text == *word);
                if hit {
                    st.literal_tokens += 1;
                    if self.match_seq(rest, ti + 1, st, cont) {
                        return true;
                    }
                    st.literal_tokens -= 1;
                }
                false
            }
            PatternAtom::Optional(alternatives) => {
                // Consume an alternative first; an empty optional is only
                // tried when nothing else completes, so `[on] {name}` on
                // "on onedrive" binds the slot to "onedrive" alone.
                for alt in alternatives {
                    let mark = st.mark();
                    let mut chained = |next: usize, st2: &mut MatchState| {
                        self.match_seq(rest, next, st2, &mut *cont)
                    };
                    if self.match_seq(alt, ti, st, &mut chained) {
                        return true;
                    }
                    st.rollback(mark);
                }
                self.match_seq(rest, ti, st, cont)
            }
            PatternAtom::AltGroup(alternatives) => {
                for alt in alternatives {
                    let mark = st.mark();
                    let mut chained = |next: usize, st2: &mut MatchState| {
                        self.match_seq(rest, next, st2, &mut *cont)
                    };
                    if self.match_seq(alt, ti, st, &mut chained) {
                        return true;
                    }
                    st.rollback(mark);
                }
                false
            }
            PatternAtom::Slot { key, entity } => self.match_slot(key, entity, rest, ti, st, cont),
        }
    }

    fn match_slot(
        &self,
        key: &str,
        entity: &str,
        rest: &[PatternAtom],
        ti: usize,
        st: &mut MatchState,
        cont: &mut dyn FnMut(usize, &mut MatchState) -> bool,
    ) -> bool {
        let n = self.tokens.len();
        if ti >= n {
            return false;
        }
        let def = self.catalog.lookup(entity);
        let max_end = match def {
            EntityDef::List {
                mode: ListMode::Strict,
                ..
            } => (ti + def.max_phrase_tokens()).min(n),
            EntityDef::PrebuiltInteger => (ti + self.config.max_integer_span).min(n),
            _ => n,
        };
        for end in (ti + 1)..=max_end {
            let Some((value, specificity)) = self.evaluate_span(def, ti, end) else {
                continue;
            };
            st.bindings.push(SlotBinding {
                key: key.to_string(),
                value,
                start: ti,
                end,
                specificity,
            });
            if self.match_seq(rest, end, st, &mut *cont) {
                return true;
            }
            st.bindings.pop();
        }
        false
    }

    /// Value and specificity for binding `def` to `[start, end)`, or
    /// `None` when the span is not acceptable.
    fn evaluate_span(&self, def: &EntityDef, start: usize, end: usize) -> Option<(String, u8)> {
        match def {
            EntityDef::Any => Some((self.canonical(start, end), 0)),
            EntityDef::List {
                mode: ListMode::Fuzzy,
                ..
            } => {
                let canonical = self.canonical(start, end);
                let value = def
                    .find_phrase(&canonical)
                    .map(|e| e.value.clone())
                    .unwrap_or(canonical);
                Some((value, 1))
            }
            EntityDef::List {
                mode: ListMode::Strict,
                ..
            } => {
                let canonical = self.canonical(start, end);
                def.find_phrase(&canonical).map(|e| (e.value.clone(), 2))
            }
            EntityDef::PrebuiltInteger => {
                let family = self.locale.family()?;
                let texts: Vec<&str> =
                    self.tokens[start..end].iter().map(|t| t.text.as_str()).collect();
                parse_integer(&texts, family).map(|v| (v, 3))
            }
        }
    }

    fn canonical(&self, start: usize, end: usize) -> String {
        join_canonical(
            self.tokens[start..end].iter().map(|t| t.text.as_str()),
            self.locale.is_cjk(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;
    use crate::tokenizer::{tokenize, TextKind};

    fn run(
        pattern: &str,
        utterance: &str,
        catalog: &EntityCatalog,
        locale: &Locale,
    ) -> Option<MatchOutcome> {
        let config = Config::default();
        let atoms = compile(pattern, locale).unwrap();
        let tokens = tokenize(utterance, locale, TextKind::Input);
        Matcher::new(&tokens, catalog, locale, &config).match_pattern(&atoms)
    }

    fn en() -> Locale {
        Locale::parse("en-us")
    }

    fn binding<'m>(m: &'m MatchOutcome, key: &str) -> &'m str {
        &m.bindings.iter().find(|b| b.key == key).unwrap().value
    }

    #[test]
    fn trailing_any_is_greedy() {
        let m = run("Open {appName}", "Open microsoft word", &EntityCatalog::new(), &en()).unwrap();
        assert_eq!(binding(&m, "appName"), "microsoft word");
        assert_eq!(m.literal_tokens, 1);
    }

    #[test]
    fn any_before_literal_is_minimal() {
        let m = run(
            "send {what} now",
            "send the mail now",
            &EntityCatalog::new(),
            &en(),
        )
        .unwrap();
        assert_eq!(binding(&m, "what"), "the mail");
    }

    #[test]
    fn adjacent_any_slots_minimize_left() {
        let m = run("{a} {b}", "one two three", &EntityCatalog::new(), &en()).unwrap();
        assert_eq!(binding(&m, "a"), "one");
        assert_eq!(binding(&m, "b"), "two three");
    }

    #[test]
    fn optional_does_not_steal_from_any() {
        let catalog = EntityCatalog::new();
        let m = run("[on] {name}", "on onedrive", &catalog, &en()).unwrap();
        assert_eq!(binding(&m, "name"), "onedrive");
        let m = run("[on] {name}", "onedrive", &catalog, &en()).unwrap();
        assert_eq!(binding(&m, "name"), "onedrive");
    }

    #[test]
    fn required_alternation_rejects_unmatched() {
        let catalog = EntityCatalog::new();
        assert!(run("(open|start) {app}", "open word", &catalog, &en()).is_some());
        assert!(run("(open|start) {app}", "start word", &catalog, &en()).is_some());
        assert!(run("(open|start) {app}", "close word", &catalog, &en()).is_none());
    }

    #[test]
    fn strict_list_accepts_only_members() {
        let mut catalog = EntityCatalog::new();
        catalog.define(
            "item",
            EntityDef::list(
                ListMode::Strict,
                &[("two zero three".to_string(), vec![]), ("close".to_string(), vec![])],
                &en(),
            ),
        );
        let m = run("click {item}", "click two zero three", &catalog, &en()).unwrap();
        assert_eq!(binding(&m, "item"), "two zero three");
        assert!(run("click {item}", "click two zero", &catalog, &en()).is_none());
    }

    #[test]
    fn fuzzy_list_behaves_as_any_but_canonicalizes() {
        let mut catalog = EntityCatalog::new();
        catalog.define(
            "item",
            EntityDef::list(
                ListMode::Fuzzy,
                &[("lamp".to_string(), vec!["light".to_string()])],
                &en(),
            ),
        );
        let m = run("turn on the {item}", "turn on the light", &catalog, &en()).unwrap();
        assert_eq!(binding(&m, "item"), "lamp");
        let m = run("turn on the {item}", "turn on the fan", &catalog, &en()).unwrap();
        assert_eq!(binding(&m, "item"), "fan");
    }

    #[test]
    fn integer_slot_extends_across_the_spelled_number() {
        let mut catalog = EntityCatalog::new();
        catalog.define("number", EntityDef::PrebuiltInteger);
        let m = run(
            "open {number}",
            "Open One hundred and thirty eight.",
            &catalog,
            &en(),
        )
        .unwrap();
        assert_eq!(binding(&m, "number"), "138");
    }

    #[test]
    fn failed_integer_parse_rejects_the_pattern() {
        let mut catalog = EntityCatalog::new();
        catalog.define("number", EntityDef::PrebuiltInteger);
        assert!(run("open {number}", "open nine beside ten times", &catalog, &en()).is_none());
    }

    #[test]
    fn anchored_at_both_ends() {
        let catalog = EntityCatalog::new();
        assert!(run("listen up", "listen up now", &catalog, &en()).is_none());
        assert!(run("listen up", "please listen up", &catalog, &en()).is_none());
        assert!(run("listen up", "Listen up!", &catalog, &en()).is_some());
    }

    #[test]
    fn cjk_slot_values_concatenate() {
        let zh = Locale::parse("zh-cn");
        let m = run("打开{app}", "打开微信。", &EntityCatalog::new(), &zh).unwrap();
        assert_eq!(binding(&m, "app"), "微信");
        assert_eq!(m.literal_tokens, 2);
    }
}
