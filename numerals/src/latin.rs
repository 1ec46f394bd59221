//! Shared cardinal-number engine for Latin-script locales.
//!
//! The per-locale crates-worth of knowledge lives in `en`, `es` and `fr` as
//! word tables; this module owns the composition grammar they share. A span
//! of tokens is folded into *groups* (maximal standard cardinals such as
//! "nineteen" or "two hundred five"), and the groups are then stacked left
//! to right the way dictated numbers are read out: digit concatenation,
//! except that a group small enough to fit into the trailing zeros of a
//! preceding magnitude-bearing group is added into them. That one rule
//! covers "twelve hundred 2" -> 1202 next to "one two three" -> 123.

use unicode_normalization::UnicodeNormalization;

/// Classification of a single number word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// 1..=9, including locale homophones ("to", "for").
    Unit(u64),
    /// An explicit zero word; always its own digit group.
    Zero,
    /// 10..=19 plus closed compounds that behave the same way
    /// (Spanish "veintiuno" = 21).
    Teen(u64),
    /// 20, 30, .. 90.
    Tens(u64),
    /// Direct hundreds words (Spanish "doscientos" = 200).
    Hundreds(u64),
    /// The multiplier word "hundred"/"cien(to)"/"cent".
    HundredMul,
    /// Thousand and larger multipliers.
    Magnitude(u64),
    /// Connective with no value ("and", "y", "et").
    Filler,
    /// Sign prefix ("negative", "minus", "menos", "moins").
    Negative,
    /// Ordinal word; only valid as the final token of a span.
    Ordinal(u64),
}

/// Per-locale hooks consumed by the shared engine.
pub struct LatinTable {
    /// Word lookup over a lowercased (and, when `fold_accents`, de-accented)
    /// token.
    pub classify: fn(&str) -> Option<WordClass>,
    /// Strip combining marks before lookup (es/fr accent tolerance).
    pub fold_accents: bool,
    /// Suffixes that turn a digit run into an ordinal ("1st", "23rd").
    pub digit_ordinal_suffixes: &'static [&'static str],
    /// Remainders (mod 100) after which a teen keeps composing
    /// (French soixante-dix, quatre-vingt-dix).
    pub teen_after: &'static [u64],
    /// "vingt" after a trailing 4 multiplies to 80 (quatre-vingt).
    pub four_score: bool,
    /// A unit may extend a composed teen ending in zero
    /// (French soixante-dix-sept = 77).
    pub compose_teen_unit: bool,
}

/// Remove combining marks so "dieciséis" and "dieciseis" share a table key.
pub(crate) fn fold_accents(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}')
}

/// A token after locale-independent preprocessing.
enum Tok {
    Word(WordClass),
    /// A literal digit run, grouping commas removed, leading zeros kept.
    Digits(String),
}

fn preprocess(token: &str, table: &LatinTable) -> Option<Vec<Tok>> {
    let folded = if table.fold_accents {
        fold_accents(&token.to_lowercase())
    } else {
        token.to_lowercase()
    };

    // Digit runs, with grouping commas tolerated ("1,234,567").
    let no_commas: String = folded.chars().filter(|c| *c != ',').collect();
    if !no_commas.is_empty() && no_commas.chars().all(|c| c.is_ascii_digit()) {
        return Some(vec![Tok::Digits(no_commas)]);
    }

    // Digit ordinals ("1st", "23rd").
    for suffix in table.digit_ordinal_suffixes {
        if let Some(head) = no_commas.strip_suffix(suffix) {
            if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) {
                let v = head.parse::<u64>().ok()?;
                return Some(vec![Tok::Word(WordClass::Ordinal(v))]);
            }
        }
    }

    // Whole-token word lookup first, so closed compounds like "dix-sept"
    // win over the hyphen split.
    if let Some(c) = (table.classify)(&folded) {
        return Some(vec![Tok::Word(c)]);
    }

    // Hyphenated compounds ("twenty-three", "quatre-vingt-dix-sept").
    if folded.contains('-') {
        let mut out = Vec::new();
        for part in folded.split('-') {
            if part.is_empty() {
                return None;
            }
            let c = (table.classify)(part)?;
            out.push(Tok::Word(c));
        }
        return Some(out);
    }

    None
}

/// The class of the last value word applied to the open group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Unit,
    Teen,
    Tens,
    Hundreds,
    HundredMul,
    Magnitude,
    Digits,
}

#[derive(Debug)]
struct Group {
    total: u64,
    current: u64,
    /// Raw digit-run groups keep their text so leading zeros survive.
    digits: Option<String>,
    has_magnitude: bool,
    /// Smallest big multiplier consumed so far; rejects ascending repeats.
    min_big: u64,
    last: Last,
}

impl Group {
    fn from_digits(s: String) -> Self {
        Group {
            total: 0,
            current: 0,
            digits: Some(s),
            has_magnitude: false,
            min_big: u64::MAX,
            last: Last::Digits,
        }
    }

    fn from_value(v: u64, last: Last, has_magnitude: bool) -> Self {
        Group {
            total: 0,
            current: v,
            digits: None,
            has_magnitude,
            min_big: u64::MAX,
            last,
        }
    }

    /// Fold a pending digit run into the numeric accumulator so a
    /// multiplier can scale it ("25 thousand").
    fn adopt_digits(&mut self) -> Option<()> {
        if let Some(s) = self.digits.take() {
            self.current = s.parse::<u64>().ok()?;
            self.last = Last::Digits;
        }
        Some(())
    }

    fn repr(&self) -> (String, bool) {
        match &self.digits {
            Some(s) => (s.clone(), false),
            None => (
                (self.total.saturating_add(self.current)).to_string(),
                self.has_magnitude,
            ),
        }
    }
}

fn start_group(cls: WordClass) -> Option<Group> {
    match cls {
        WordClass::Unit(v) => Some(Group::from_value(v, Last::Unit, false)),
        WordClass::Zero => Some(Group::from_digits("0".to_string())),
        WordClass::Teen(v) => Some(Group::from_value(v, Last::Teen, false)),
        WordClass::Tens(v) => Some(Group::from_value(v, Last::Tens, false)),
        WordClass::Hundreds(v) => Some(Group::from_value(v, Last::Hundreds, true)),
        WordClass::HundredMul => Some(Group::from_value(100, Last::HundredMul, true)),
        WordClass::Magnitude(m) => {
            // Implicit one: "mille deux" = 1002, bare "thousand" = 1000.
            let mut g = Group::from_value(0, Last::Magnitude, true);
            g.total = m;
            g.min_big = m;
            Some(g)
        }
        // Sign and filler cannot open a group; the caller rejects the span.
        WordClass::Filler | WordClass::Negative => None,
        WordClass::Ordinal(v) => Some(start_ordinal(v)),
    }
}

fn start_ordinal(v: u64) -> Group {
    let last = match v {
        0..=9 => Last::Unit,
        10..=19 => Last::Teen,
        _ if v < 100 && v % 10 == 0 => Last::Tens,
        _ => Last::Digits,
    };
    Group::from_value(v, last, false)
}

/// Try to extend the open group with `cls`. Returns `Ok(true)` when the
/// word composed, `Ok(false)` when it must start a new group, `Err` when
/// the span is invalid outright.
fn continue_group(g: &mut Group, cls: WordClass, table: &LatinTable) -> Result<bool, ()> {
    match cls {
        WordClass::Unit(v) => {
            let legal = match g.last {
                Last::Tens | Last::HundredMul | Last::Hundreds | Last::Magnitude => true,
                Last::Teen => table.compose_teen_unit && g.current % 10 == 0,
                _ => false,
            };
            if !legal {
                return Ok(false);
            }
            g.current = g.current.checked_add(v).ok_or(())?;
            g.last = Last::Unit;
            Ok(true)
        }
        WordClass::Teen(v) => {
            let legal = match g.last {
                Last::HundredMul | Last::Hundreds | Last::Magnitude => true,
                Last::Tens => table.teen_after.contains(&(g.current % 100)),
                _ => false,
            };
            if !legal {
                return Ok(false);
            }
            g.current = g.current.checked_add(v).ok_or(())?;
            g.last = Last::Teen;
            Ok(true)
        }
        WordClass::Tens(v) => {
            if table.four_score && v == 20 && g.last == Last::Unit && g.current % 10 == 4 {
                // quatre-vingt: the trailing 4 multiplies instead of adding.
                g.current = g.current - 4 + 80;
                g.last = Last::Tens;
                return Ok(true);
            }
            let legal = matches!(g.last, Last::HundredMul | Last::Hundreds | Last::Magnitude);
            if !legal {
                return Ok(false);
            }
            g.current = g.current.checked_add(v).ok_or(())?;
            g.last = Last::Tens;
            Ok(true)
        }
        WordClass::Hundreds(v) => {
            if g.last != Last::Magnitude {
                return Ok(false);
            }
            g.current = v;
            g.has_magnitude = true;
            g.last = Last::Hundreds;
            Ok(true)
        }
        WordClass::HundredMul => {
            let legal = matches!(
                g.last,
                Last::Unit | Last::Teen | Last::Tens | Last::Digits
            );
            if !legal {
                return Ok(false);
            }
            g.adopt_digits().ok_or(())?;
            g.current = g.current.max(1).checked_mul(100).ok_or(())?;
            g.has_magnitude = true;
            g.last = Last::HundredMul;
            Ok(true)
        }
        WordClass::Magnitude(m) => {
            if m >= g.min_big {
                return Ok(false);
            }
            let legal = matches!(
                g.last,
                Last::Unit
                    | Last::Teen
                    | Last::Tens
                    | Last::Hundreds
                    | Last::HundredMul
                    | Last::Digits
            );
            if !legal {
                return Ok(false);
            }
            g.adopt_digits().ok_or(())?;
            let section = g.current.max(1).checked_mul(m).ok_or(())?;
            g.total = g.total.checked_add(section).ok_or(())?;
            g.current = 0;
            g.min_big = m;
            g.has_magnitude = true;
            g.last = Last::Magnitude;
            Ok(true)
        }
        WordClass::Filler => {
            // "and"/"y"/"et" only connect inside a magnitude group or
            // between tens and units; anywhere else the span is not a
            // number at all.
            if g.has_magnitude || g.last == Last::Tens {
                Ok(true)
            } else {
                Err(())
            }
        }
        WordClass::Ordinal(v) => {
            let as_cardinal = match v {
                0..=9 => WordClass::Unit(v),
                10..=19 => WordClass::Teen(v),
                _ if v < 100 && v % 10 == 0 => WordClass::Tens(v),
                _ => return Ok(false),
            };
            continue_group(g, as_cardinal, table)
        }
        WordClass::Zero | WordClass::Negative => Ok(false),
    }
}

/// Stack closed groups left to right.
fn stack(groups: Vec<(String, bool)>) -> Option<String> {
    let mut s = String::new();
    let mut prev_mag = false;
    for (g, mag) in groups {
        if s.is_empty() {
            s = g;
            prev_mag = mag;
            continue;
        }
        let tz = s.chars().rev().take_while(|c| *c == '0').count();
        if prev_mag && g.len() <= tz {
            // "twelve hundred 2" -> 1202, "nineteen hundred 85" -> 1985.
            if let (Ok(a), Ok(b)) = (s.parse::<u128>(), g.parse::<u128>()) {
                s = (a + b).to_string();
                continue;
            }
        }
        s.push_str(&g);
        prev_mag = mag;
    }
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse a span of tokens as a spelled or dictated integer.
pub fn parse(tokens: &[&str], table: &LatinTable) -> Option<String> {
    let mut toks: Vec<Tok> = Vec::new();
    for t in tokens {
        toks.extend(preprocess(t, table)?);
    }

    let mut negative = false;
    let mut start = 0;
    if let Some(Tok::Word(WordClass::Negative)) = toks.first() {
        negative = true;
        start = 1;
    }
    if start >= toks.len() {
        return None;
    }

    let mut groups: Vec<(String, bool)> = Vec::new();
    let mut open: Option<Group> = None;
    let count = toks.len();

    for (i, tok) in toks.into_iter().enumerate().skip(start) {
        match tok {
            Tok::Digits(s) => {
                if let Some(g) = open.take() {
                    groups.push(g.repr());
                }
                open = Some(Group::from_digits(s));
            }
            Tok::Word(cls) => {
                if matches!(cls, WordClass::Negative) {
                    // Sign is only meaningful as the very first token.
                    return None;
                }
                if matches!(cls, WordClass::Ordinal(_)) && i + 1 != count {
                    return None;
                }
                let composed = match open.as_mut() {
                    Some(g) => continue_group(g, cls, table),
                    None => Ok(false),
                };
                match composed {
                    Ok(true) => {}
                    Ok(false) => {
                        if let Some(g) = open.take() {
                            groups.push(g.repr());
                        }
                        open = Some(start_group(cls)?);
                    }
                    Err(()) => return None,
                }
            }
        }
    }
    if let Some(g) = open {
        groups.push(g.repr());
    }

    let value = stack(groups)?;
    if negative && value.chars().any(|c| c != '0') {
        Some(format!("-{value}"))
    } else {
        Some(value)
    }
}
