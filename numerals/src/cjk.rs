//! Han numeral parsing shared by the zh and ja locales.
//!
//! The matcher hands over the *concatenated* text of a token span (CJK
//! tokenization is one codepoint per token), so multi-character readings
//! such as 十五 or ジュウゴ are reassembled here rather than per token.

/// Katakana digit readings, longest form first so シチ wins over シ.
static KATAKANA: &[(&str, &str)] = &[
    ("ジュウ", "十"),
    ("キュウ", "9"),
    ("イチ", "1"),
    ("サン", "3"),
    ("ヨン", "4"),
    ("シチ", "7"),
    ("ナナ", "7"),
    ("ロク", "6"),
    ("ハチ", "8"),
    ("ゼロ", "0"),
    ("レイ", "0"),
    ("マル", "0"),
    ("ニ", "2"),
    ("シ", "4"),
    ("ゴ", "5"),
    ("ク", "9"),
];

/// Fold fullwidth Arabic digits to ASCII.
fn fold_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' => {
                char::from_u32(c as u32 - 0xFF10 + 0x30).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Rewrite katakana-spelled digits into Han/ASCII numerals.
fn fold_katakana(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'outer: while !rest.is_empty() {
        for (kana, repl) in KATAKANA {
            if let Some(tail) = rest.strip_prefix(kana) {
                out.push_str(repl);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        // Unmatched characters pass through; the Han pass rejects them.
        out.push(chars.next().unwrap_or_default());
        rest = chars.as_str();
    }
    out
}

fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' | '两' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

fn small_unit(c: char) -> Option<u64> {
    match c {
        '十' | '拾' => Some(10),
        '百' | '佰' => Some(100),
        '千' | '仟' => Some(1_000),
        _ => None,
    }
}

fn big_unit(c: char) -> Option<u64> {
    match c {
        '万' | '萬' => Some(10_000),
        '亿' | '億' => Some(100_000_000),
        _ => None,
    }
}

/// Positional Han parse: digits accumulate, 十/百/千 scale into the open
/// section, 万/亿 close it.
fn parse_han(text: &str) -> Option<String> {
    let mut result: u64 = 0;
    let mut section: u64 = 0;
    let mut number: u64 = 0;
    let mut seen = false;

    for c in text.chars() {
        if let Some(d) = digit_value(c) {
            number = number.checked_mul(10)?.checked_add(d)?;
            seen = true;
        } else if let Some(u) = small_unit(c) {
            let n = if number == 0 { 1 } else { number };
            section = section.checked_add(n.checked_mul(u)?)?;
            number = 0;
            seen = true;
        } else if let Some(b) = big_unit(c) {
            let mut sec = section.checked_add(number)?;
            if sec == 0 {
                sec = 1;
            }
            result = result.checked_add(sec.checked_mul(b)?)?;
            section = 0;
            number = 0;
            seen = true;
        } else {
            return None;
        }
    }

    if !seen {
        return None;
    }
    let total = result.checked_add(section)?.checked_add(number)?;
    Some(total.to_string())
}

/// Chinese (simplified or traditional) numeral text.
pub fn parse_zh(text: &str) -> Option<String> {
    parse_han(&fold_width(text))
}

/// Japanese numeral text: Han numerals plus katakana-spelled digits.
pub fn parse_ja(text: &str) -> Option<String> {
    parse_han(&fold_katakana(&fold_width(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn han_cardinals() {
        assert_eq!(parse_zh("一百三十八").as_deref(), Some("138"));
        assert_eq!(parse_zh("五十").as_deref(), Some("50"));
        assert_eq!(parse_zh("十五").as_deref(), Some("15"));
        assert_eq!(parse_zh("两千零一十五").as_deref(), Some("2015"));
        assert_eq!(parse_zh("一亿二千三百万").as_deref(), Some("123000000"));
    }

    #[test]
    fn traditional_units() {
        assert_eq!(parse_zh("一萬二仟").as_deref(), Some("12000"));
        assert_eq!(parse_zh("拾伍"), None);
    }

    #[test]
    fn digit_sequences() {
        assert_eq!(parse_zh("二零零三").as_deref(), Some("2003"));
        assert_eq!(parse_zh("１９９８").as_deref(), Some("1998"));
        assert_eq!(parse_zh("123").as_deref(), Some("123"));
    }

    #[test]
    fn mixed_arabic_and_han() {
        assert_eq!(parse_zh("3百").as_deref(), Some("300"));
        assert_eq!(parse_zh("１百０５").as_deref(), Some("105"));
    }

    #[test]
    fn japanese_katakana() {
        assert_eq!(parse_ja("ゼロ").as_deref(), Some("0"));
        assert_eq!(parse_ja("ジュウゴ").as_deref(), Some("15"));
        assert_eq!(parse_ja("ナナジュウ").as_deref(), Some("70"));
        assert_eq!(parse_ja("一九九八").as_deref(), Some("1998"));
    }

    #[test]
    fn rejects_non_numerals() {
        assert_eq!(parse_zh("打开"), None);
        assert_eq!(parse_zh(""), None);
        assert_eq!(parse_ja("ネコ"), None);
    }
}
