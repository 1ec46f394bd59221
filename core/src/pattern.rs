//! The pattern mini-language compiler.
//!
//! Grammar:
//!
//! ```text
//! Pattern  := Atom*
//! Atom     := Literal | "{" Name (":" Instance)? "}" | "[" Alts "]" | "(" Alts ")"
//! Alts     := Seq ("|" Seq)*
//! ```
//!
//! Literal text between structure characters is tokenized with the same
//! rules as input text, so `Open {appName}.` compiles to the folded
//! literal `open` plus a slot.

use crate::error::IntentError;
use crate::locale::Locale;
use crate::tokenizer::{tokenize, TextKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternAtom {
    /// Matches exactly one utterance token, case-folded equal.
    Literal(String),
    /// Binds a contiguous non-empty token span per the entity's rules.
    /// `key` carries the instance qualifier (`name` or `name:instance`);
    /// `entity` is the base name resolved against the catalog.
    Slot { key: String, entity: String },
    /// `[a|b]`: zero or one of the alternatives.
    Optional(Vec<Vec<PatternAtom>>),
    /// `(a|b)`: exactly one of the alternatives.
    AltGroup(Vec<Vec<PatternAtom>>),
}

/// Compile one pattern phrase into its atom sequence.
pub fn compile(phrase: &str, locale: &Locale) -> Result<Vec<PatternAtom>, IntentError> {
    let mut parser = Parser {
        phrase,
        chars: phrase.chars().collect(),
        pos: 0,
        locale,
    };
    parser.parse_seq(None)
}

struct Parser<'a> {
    phrase: &'a str,
    chars: Vec<char>,
    pos: usize,
    locale: &'a Locale,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Parse a sequence of atoms. With `term` set we are inside a group
    /// and stop (without consuming) at `|` or the closing character; at
    /// top level both are malformed.
    fn parse_seq(&mut self, term: Option<char>) -> Result<Vec<PatternAtom>, IntentError> {
        let mut atoms = Vec::new();
        let mut literal = String::new();

        loop {
            let Some(c) = self.peek() else {
                if term.is_some() {
                    return Err(IntentError::malformed(self.phrase, "unterminated group"));
                }
                break;
            };
            match c {
                '{' => {
                    self.flush_literal(&mut literal, &mut atoms);
                    self.pos += 1;
                    atoms.push(self.parse_slot()?);
                }
                '[' => {
                    self.flush_literal(&mut literal, &mut atoms);
                    self.pos += 1;
                    atoms.push(PatternAtom::Optional(self.parse_group(']')?));
                }
                '(' => {
                    self.flush_literal(&mut literal, &mut atoms);
                    self.pos += 1;
                    atoms.push(PatternAtom::AltGroup(self.parse_group(')')?));
                }
                '|' => {
                    if term.is_some() {
                        break;
                    }
                    return Err(IntentError::malformed(self.phrase, "`|` outside a group"));
                }
                ']' | ')' => {
                    if term == Some(c) {
                        break;
                    }
                    return Err(IntentError::malformed(
                        self.phrase,
                        format!("unbalanced `{c}`"),
                    ));
                }
                '}' => {
                    return Err(IntentError::malformed(self.phrase, "unbalanced `}`"));
                }
                _ => {
                    literal.push(c);
                    self.pos += 1;
                }
            }
        }
        self.flush_literal(&mut literal, &mut atoms);
        Ok(atoms)
    }

    /// Parse `|`-separated alternatives up to and including `close`.
    fn parse_group(&mut self, close: char) -> Result<Vec<Vec<PatternAtom>>, IntentError> {
        let mut alternatives = Vec::new();
        loop {
            let seq = self.parse_seq(Some(close))?;
            if seq.is_empty() {
                return Err(IntentError::malformed(self.phrase, "empty alternative"));
            }
            alternatives.push(seq);
            match self.peek() {
                Some('|') => self.pos += 1,
                Some(c) if c == close => {
                    self.pos += 1;
                    return Ok(alternatives);
                }
                _ => {
                    return Err(IntentError::malformed(self.phrase, "unterminated group"));
                }
            }
        }
    }

    /// Parse a slot body after the opening `{`.
    fn parse_slot(&mut self) -> Result<PatternAtom, IntentError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                '}' => {
                    let body: String = self.chars[start..self.pos].iter().collect();
                    self.pos += 1;
                    let (name, instance) = match body.split_once(':') {
                        Some((n, i)) => (n.trim(), i.trim()),
                        None => (body.trim(), ""),
                    };
                    if name.is_empty() {
                        return Err(IntentError::malformed(self.phrase, "empty slot name"));
                    }
                    let key = if instance.is_empty() {
                        name.to_string()
                    } else {
                        format!("{name}:{instance}")
                    };
                    return Ok(PatternAtom::Slot {
                        key,
                        entity: name.to_string(),
                    });
                }
                '{' | '[' | ']' | '(' | ')' | '|' => {
                    return Err(IntentError::malformed(
                        self.phrase,
                        format!("`{c}` inside a slot name"),
                    ));
                }
                _ => self.pos += 1,
            }
        }
        Err(IntentError::malformed(self.phrase, "unterminated slot name"))
    }

    /// Tokenize accumulated literal text, coalescing a literal that
    /// duplicates the previous atom's token.
    fn flush_literal(&mut self, literal: &mut String, atoms: &mut Vec<PatternAtom>) {
        if literal.is_empty() {
            return;
        }
        for token in tokenize(literal, self.locale, TextKind::Pattern) {
            if matches!(atoms.last(), Some(PatternAtom::Literal(prev)) if *prev == token.text) {
                continue;
            }
            atoms.push(PatternAtom::Literal(token.text));
        }
        literal.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Locale {
        Locale::parse("en-us")
    }

    #[test]
    fn literals_and_slot() {
        let atoms = compile("Open {appName}", &en()).unwrap();
        assert_eq!(
            atoms,
            vec![
                PatternAtom::Literal("open".into()),
                PatternAtom::Slot {
                    key: "appName".into(),
                    entity: "appName".into()
                },
            ]
        );
    }

    #[test]
    fn instance_qualified_slots() {
        let atoms = compile("{x:1} {x:2}", &en()).unwrap();
        assert_eq!(
            atoms,
            vec![
                PatternAtom::Slot {
                    key: "x:1".into(),
                    entity: "x".into()
                },
                PatternAtom::Slot {
                    key: "x:2".into(),
                    entity: "x".into()
                },
            ]
        );
    }

    #[test]
    fn slot_names_are_trimmed() {
        let atoms = compile("{ appName }", &en()).unwrap();
        assert_eq!(
            atoms,
            vec![PatternAtom::Slot {
                key: "appName".into(),
                entity: "appName".into()
            }]
        );
    }

    #[test]
    fn optional_and_required_groups() {
        let atoms = compile("[Computer] (listen|wake) up", &en()).unwrap();
        match &atoms[0] {
            PatternAtom::Optional(alts) => {
                assert_eq!(alts, &vec![vec![PatternAtom::Literal("computer".into())]]);
            }
            other => panic!("expected optional, got {other:?}"),
        }
        match &atoms[1] {
            PatternAtom::AltGroup(alts) => assert_eq!(alts.len(), 2),
            other => panic!("expected alternation, got {other:?}"),
        }
        assert_eq!(atoms[2], PatternAtom::Literal("up".into()));
    }

    #[test]
    fn nested_groups() {
        let atoms = compile("[turn (on|off)] {device}", &en()).unwrap();
        match &atoms[0] {
            PatternAtom::Optional(alts) => {
                assert_eq!(alts.len(), 1);
                assert!(matches!(alts[0][1], PatternAtom::AltGroup(_)));
            }
            other => panic!("expected optional, got {other:?}"),
        }
    }

    #[test]
    fn trailing_punctuation_is_stripped() {
        let atoms = compile("Turn on the {objectName}.", &en()).unwrap();
        assert_eq!(atoms.len(), 4);
        assert!(matches!(atoms[3], PatternAtom::Slot { .. }));
    }

    #[test]
    fn duplicate_adjacent_literals_coalesce() {
        let atoms = compile("the the lamp", &en()).unwrap();
        assert_eq!(
            atoms,
            vec![
                PatternAtom::Literal("the".into()),
                PatternAtom::Literal("lamp".into()),
            ]
        );
    }

    #[test]
    fn compile_is_idempotent() {
        let a = compile("Open (a|b) [c] {d:1}", &en()).unwrap();
        let b = compile("Open (a|b) [c] {d:1}", &en()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_patterns() {
        for bad in [
            "Open {appName",
            "Open appName}",
            "[on",
            "on]",
            "(a|b",
            "a|b",
            "(a||b)",
            "[]",
            "{}",
        ] {
            assert!(
                matches!(
                    compile(bad, &en()),
                    Err(IntentError::MalformedPattern { .. })
                ),
                "`{bad}` should be malformed"
            );
        }
    }
}
