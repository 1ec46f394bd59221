//! French number words.
//!
//! Keys are stored unaccented (the engine folds accents first). Closed
//! hyphenated compounds ("dix-sept", "quatre-vingt-dix") are table entries
//! so whole-token lookup wins before the hyphen split; everything else
//! composes through the split path with the vigesimal rules enabled.

use crate::latin::{LatinTable, WordClass};
use phf::phf_map;

static WORDS: phf::Map<&'static str, WordClass> = phf_map! {
    "zero" => WordClass::Zero,
    "un" => WordClass::Unit(1),
    "une" => WordClass::Unit(1),
    "deux" => WordClass::Unit(2),
    "trois" => WordClass::Unit(3),
    "quatre" => WordClass::Unit(4),
    "cinq" => WordClass::Unit(5),
    "six" => WordClass::Unit(6),
    "sept" => WordClass::Unit(7),
    "huit" => WordClass::Unit(8),
    "neuf" => WordClass::Unit(9),
    "dix" => WordClass::Teen(10),
    "onze" => WordClass::Teen(11),
    "douze" => WordClass::Teen(12),
    "treize" => WordClass::Teen(13),
    "quatorze" => WordClass::Teen(14),
    "quinze" => WordClass::Teen(15),
    "seize" => WordClass::Teen(16),
    "dix-sept" => WordClass::Teen(17),
    "dix-huit" => WordClass::Teen(18),
    "dix-neuf" => WordClass::Teen(19),
    "vingt" => WordClass::Tens(20),
    "vingts" => WordClass::Tens(20),
    "trente" => WordClass::Tens(30),
    "quarante" => WordClass::Tens(40),
    "cinquante" => WordClass::Tens(50),
    "soixante" => WordClass::Tens(60),
    "soixante-dix" => WordClass::Tens(70),
    "quatre-vingt" => WordClass::Tens(80),
    "quatre-vingts" => WordClass::Tens(80),
    "quatre-vingt-dix" => WordClass::Tens(90),
    "cent" => WordClass::HundredMul,
    "cents" => WordClass::HundredMul,
    "mille" => WordClass::Magnitude(1_000),
    "million" => WordClass::Magnitude(1_000_000),
    "millions" => WordClass::Magnitude(1_000_000),
    "milliard" => WordClass::Magnitude(1_000_000_000),
    "milliards" => WordClass::Magnitude(1_000_000_000),
    "et" => WordClass::Filler,
    "moins" => WordClass::Negative,
    "negatif" => WordClass::Negative,
};

fn classify(word: &str) -> Option<WordClass> {
    WORDS.get(word).copied()
}

pub static TABLE: LatinTable = LatinTable {
    classify,
    fold_accents: true,
    digit_ordinal_suffixes: &[],
    // soixante-dix / quatre-vingt-dix keep composing after 60 and 80.
    teen_after: &[60, 80],
    four_score: true,
    compose_teen_unit: true,
};
