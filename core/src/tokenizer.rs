//! Tokenization of utterances and pattern text.
//!
//! Patterns and utterances go through the same pipeline so a literal
//! pattern token `microsoft` case-folds equal to the utterance token
//! `Microsoft`. Latin-spaced locales split on Unicode whitespace and strip
//! the input punctuation set; CJK locales emit one token per Han/kana
//! codepoint, grouping embedded Latin or digit runs.

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    DigitRun,
    Punct,
}

/// A single token. `start`/`end` are byte offsets into the normalized
/// input; `text` is the case-folded, punctuation-stripped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

/// Whether the text is recognized input or pattern text. Pattern structure
/// (`{} [] () | :`) is consumed by the compiler before literal segments
/// reach the tokenizer; in input text a stray `|` is plain punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Input,
    Pattern,
}

const BASE_PUNCT: &str = ".,;:!?\"'()[]{}@*/&#%$+=<>\\~";

fn is_stripped_punct(c: char, locale: &Locale, kind: TextKind) -> bool {
    if BASE_PUNCT.contains(c) {
        return true;
    }
    if kind == TextKind::Input && c == '|' {
        return true;
    }
    match locale.lang() {
        "es" => matches!(c, '¿' | '¡' | '«' | '»'),
        "fr" => matches!(c, '«' | '»'),
        "zh" => matches!(
            c,
            '。' | '．'
                | '！'
                | '？'
                | '；'
                | '，'
                | '、'
                | '：'
                | '“'
                | '”'
                | '‘'
                | '’'
                | '《'
                | '》'
                | '·'
                | '（'
                | '）'
                | '「'
                | '」'
                | '『'
                | '』'
        ),
        "ja" => matches!(
            c,
            '。' | '、' | '！' | '？' | '；' | '：' | '・' | '「' | '」' | '（' | '）'
        ),
        _ => false,
    }
}

fn is_cjk_script(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'   // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified
        | '\u{F900}'..='\u{FAFF}' // compatibility ideographs
        | '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
    )
}

fn is_any_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '\u{FF10}'..='\u{FF19}')
}

fn classify_run(text: &str) -> TokenKind {
    if !text.is_empty() && text.chars().all(is_any_digit) {
        TokenKind::DigitRun
    } else {
        TokenKind::Word
    }
}

/// Tokenize, dropping punctuation-only tokens. This is the form both the
/// matcher and the pattern compiler consume; a trailing "lamp." and a
/// greedy entity at the end of a pattern never see the period.
pub fn tokenize(text: &str, locale: &Locale, kind: TextKind) -> Vec<Token> {
    tokenize_raw(text, locale, kind)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Punct)
        .collect()
}

/// Full token stream including punctuation tokens.
pub fn tokenize_raw(text: &str, locale: &Locale, kind: TextKind) -> Vec<Token> {
    if locale.is_cjk() {
        tokenize_cjk(text, locale, kind)
    } else {
        tokenize_spaced(text, locale, kind)
    }
}

fn tokenize_spaced(text: &str, locale: &Locale, kind: TextKind) -> Vec<Token> {
    fn flush(
        out: &mut Vec<Token>,
        kept: &mut String,
        punct: &mut String,
        start: &mut Option<usize>,
        end: usize,
    ) {
        if let Some(s) = start.take() {
            if !kept.is_empty() {
                out.push(Token {
                    text: kept.to_lowercase(),
                    start: s,
                    end,
                    kind: classify_run(kept),
                });
            } else if !punct.is_empty() {
                out.push(Token {
                    text: punct.clone(),
                    start: s,
                    end,
                    kind: TokenKind::Punct,
                });
            }
        }
        kept.clear();
        punct.clear();
    }

    let mut out = Vec::new();
    let mut kept = String::new();
    let mut punct = String::new();
    let mut start = None;
    let mut end = 0;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            flush(&mut out, &mut kept, &mut punct, &mut start, end);
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        end = i + c.len_utf8();
        if is_stripped_punct(c, locale, kind) {
            // Punctuation does not split a token: "1,234" and "word." keep
            // a single run with the marks removed.
            punct.push(c);
        } else {
            kept.push(c);
        }
    }
    flush(&mut out, &mut kept, &mut punct, &mut start, end);
    out
}

fn tokenize_cjk(text: &str, locale: &Locale, kind: TextKind) -> Vec<Token> {
    fn flush_run(out: &mut Vec<Token>, run: &mut String, end: usize) {
        if !run.is_empty() {
            out.push(Token {
                text: run.to_lowercase(),
                start: end - run.len(),
                end,
                kind: classify_run(run),
            });
            run.clear();
        }
    }

    let mut out = Vec::new();
    let mut run = String::new();
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let next_end = i + c.len_utf8();
        if c.is_whitespace() {
            flush_run(&mut out, &mut run, end);
        } else if is_stripped_punct(c, locale, kind) {
            flush_run(&mut out, &mut run, end);
            out.push(Token {
                text: c.to_string(),
                start: i,
                end: next_end,
                kind: TokenKind::Punct,
            });
        } else if is_cjk_script(c) {
            flush_run(&mut out, &mut run, end);
            out.push(Token {
                text: c.to_string(),
                start: i,
                end: next_end,
                kind: TokenKind::Word,
            });
        } else {
            run.push(c);
        }
        end = next_end;
    }
    flush_run(&mut out, &mut run, end);
    out
}

/// Join span texts into the canonical comparison form: space separated for
/// spaced scripts, concatenated for CJK.
pub(crate) fn join_canonical<'a, I>(texts: I, cjk: bool) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for (i, t) in texts.into_iter().enumerate() {
        if i > 0 && !cjk {
            out.push(' ');
        }
        out.push_str(t);
    }
    out
}
