//! English number words.

use crate::latin::{LatinTable, WordClass};
use phf::phf_map;

static WORDS: phf::Map<&'static str, WordClass> = phf_map! {
    "zero" => WordClass::Zero,
    "oh" => WordClass::Zero,
    "one" => WordClass::Unit(1),
    "two" => WordClass::Unit(2),
    // Recognized speech frequently lands on the homophones.
    "to" => WordClass::Unit(2),
    "too" => WordClass::Unit(2),
    "three" => WordClass::Unit(3),
    "four" => WordClass::Unit(4),
    "for" => WordClass::Unit(4),
    "fore" => WordClass::Unit(4),
    "five" => WordClass::Unit(5),
    "six" => WordClass::Unit(6),
    "seven" => WordClass::Unit(7),
    "eight" => WordClass::Unit(8),
    "nine" => WordClass::Unit(9),
    "ten" => WordClass::Teen(10),
    "eleven" => WordClass::Teen(11),
    "twelve" => WordClass::Teen(12),
    "thirteen" => WordClass::Teen(13),
    "fourteen" => WordClass::Teen(14),
    "fifteen" => WordClass::Teen(15),
    "sixteen" => WordClass::Teen(16),
    "seventeen" => WordClass::Teen(17),
    "eighteen" => WordClass::Teen(18),
    "nineteen" => WordClass::Teen(19),
    "twenty" => WordClass::Tens(20),
    "thirty" => WordClass::Tens(30),
    "forty" => WordClass::Tens(40),
    "fourty" => WordClass::Tens(40),
    "fifty" => WordClass::Tens(50),
    "sixty" => WordClass::Tens(60),
    "seventy" => WordClass::Tens(70),
    "eighty" => WordClass::Tens(80),
    "ninety" => WordClass::Tens(90),
    "hundred" => WordClass::HundredMul,
    "hundreds" => WordClass::HundredMul,
    "thousand" => WordClass::Magnitude(1_000),
    "million" => WordClass::Magnitude(1_000_000),
    "billion" => WordClass::Magnitude(1_000_000_000),
    "trillion" => WordClass::Magnitude(1_000_000_000_000),
    "and" => WordClass::Filler,
    "negative" => WordClass::Negative,
    "minus" => WordClass::Negative,
    "first" => WordClass::Ordinal(1),
    "second" => WordClass::Ordinal(2),
    "third" => WordClass::Ordinal(3),
    "fourth" => WordClass::Ordinal(4),
    "fifth" => WordClass::Ordinal(5),
    "sixth" => WordClass::Ordinal(6),
    "seventh" => WordClass::Ordinal(7),
    "eighth" => WordClass::Ordinal(8),
    "ninth" => WordClass::Ordinal(9),
    "tenth" => WordClass::Ordinal(10),
    "eleventh" => WordClass::Ordinal(11),
    "twelfth" => WordClass::Ordinal(12),
    "thirteenth" => WordClass::Ordinal(13),
    "fourteenth" => WordClass::Ordinal(14),
    "fifteenth" => WordClass::Ordinal(15),
    "sixteenth" => WordClass::Ordinal(16),
    "seventeenth" => WordClass::Ordinal(17),
    "eighteenth" => WordClass::Ordinal(18),
    "nineteenth" => WordClass::Ordinal(19),
    "twentieth" => WordClass::Ordinal(20),
    "thirtieth" => WordClass::Ordinal(30),
    "fortieth" => WordClass::Ordinal(40),
    "fiftieth" => WordClass::Ordinal(50),
    "sixtieth" => WordClass::Ordinal(60),
    "seventieth" => WordClass::Ordinal(70),
    "eightieth" => WordClass::Ordinal(80),
    "ninetieth" => WordClass::Ordinal(90),
};

fn classify(word: &str) -> Option<WordClass> {
    WORDS.get(word).copied()
}

pub static TABLE: LatinTable = LatinTable {
    classify,
    fold_accents: false,
    digit_ordinal_suffixes: &["st", "nd", "rd", "th"],
    teen_after: &[],
    four_score: false,
    compose_teen_unit: false,
};
