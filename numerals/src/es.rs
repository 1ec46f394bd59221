//! Spanish number words.
//!
//! Table keys are stored without combining marks; the engine folds accents
//! off the incoming token first, so "dieciséis" and "dieciseis" both hit
//! the same entry.

use crate::latin::{LatinTable, WordClass};
use phf::phf_map;

static WORDS: phf::Map<&'static str, WordClass> = phf_map! {
    "cero" => WordClass::Zero,
    "uno" => WordClass::Unit(1),
    "una" => WordClass::Unit(1),
    "un" => WordClass::Unit(1),
    "dos" => WordClass::Unit(2),
    "tres" => WordClass::Unit(3),
    "cuatro" => WordClass::Unit(4),
    "cinco" => WordClass::Unit(5),
    "seis" => WordClass::Unit(6),
    "siete" => WordClass::Unit(7),
    "ocho" => WordClass::Unit(8),
    "nueve" => WordClass::Unit(9),
    "diez" => WordClass::Teen(10),
    "once" => WordClass::Teen(11),
    "doce" => WordClass::Teen(12),
    "trece" => WordClass::Teen(13),
    "catorce" => WordClass::Teen(14),
    "quince" => WordClass::Teen(15),
    "dieciseis" => WordClass::Teen(16),
    "diecisiete" => WordClass::Teen(17),
    "dieciocho" => WordClass::Teen(18),
    "diecinueve" => WordClass::Teen(19),
    "veinte" => WordClass::Tens(20),
    // The closed veinti- compounds behave like teens: complete two-digit
    // values that only follow a magnitude word.
    "veintiuno" => WordClass::Teen(21),
    "veintiun" => WordClass::Teen(21),
    "veintidos" => WordClass::Teen(22),
    "veintitres" => WordClass::Teen(23),
    "veinticuatro" => WordClass::Teen(24),
    "veinticinco" => WordClass::Teen(25),
    "veintiseis" => WordClass::Teen(26),
    "veintisiete" => WordClass::Teen(27),
    "veintiocho" => WordClass::Teen(28),
    "veintinueve" => WordClass::Teen(29),
    "treinta" => WordClass::Tens(30),
    "cuarenta" => WordClass::Tens(40),
    "cincuenta" => WordClass::Tens(50),
    "sesenta" => WordClass::Tens(60),
    "setenta" => WordClass::Tens(70),
    "ochenta" => WordClass::Tens(80),
    "noventa" => WordClass::Tens(90),
    "cien" => WordClass::HundredMul,
    "ciento" => WordClass::HundredMul,
    "doscientos" => WordClass::Hundreds(200),
    "doscientas" => WordClass::Hundreds(200),
    "trescientos" => WordClass::Hundreds(300),
    "trescientas" => WordClass::Hundreds(300),
    "cuatrocientos" => WordClass::Hundreds(400),
    "cuatrocientas" => WordClass::Hundreds(400),
    "quinientos" => WordClass::Hundreds(500),
    "quinientas" => WordClass::Hundreds(500),
    "seiscientos" => WordClass::Hundreds(600),
    "seiscientas" => WordClass::Hundreds(600),
    "setecientos" => WordClass::Hundreds(700),
    "setecientas" => WordClass::Hundreds(700),
    "ochocientos" => WordClass::Hundreds(800),
    "ochocientas" => WordClass::Hundreds(800),
    "novecientos" => WordClass::Hundreds(900),
    "novecientas" => WordClass::Hundreds(900),
    "mil" => WordClass::Magnitude(1_000),
    "millon" => WordClass::Magnitude(1_000_000),
    "millones" => WordClass::Magnitude(1_000_000),
    "billon" => WordClass::Magnitude(1_000_000_000_000),
    "billones" => WordClass::Magnitude(1_000_000_000_000),
    "y" => WordClass::Filler,
    "menos" => WordClass::Negative,
    "negativo" => WordClass::Negative,
};

fn classify(word: &str) -> Option<WordClass> {
    WORDS.get(word).copied()
}

pub static TABLE: LatinTable = LatinTable {
    classify,
    fold_accents: true,
    digit_ordinal_suffixes: &[],
    teen_after: &[],
    four_score: false,
    compose_teen_unit: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latin::parse;

    #[test]
    fn spelled_cardinals() {
        assert_eq!(parse(&["cinco", "mil", "doscientos"], &TABLE).as_deref(), Some("5200"));
        assert_eq!(parse(&["treinta", "y", "dos"], &TABLE).as_deref(), Some("32"));
        assert_eq!(parse(&["ciento", "veintiuno"], &TABLE).as_deref(), Some("121"));
        assert_eq!(parse(&["quinientos", "seis"], &TABLE).as_deref(), Some("506"));
    }

    #[test]
    fn accent_tolerance() {
        assert_eq!(parse(&["dieciséis"], &TABLE).as_deref(), Some("16"));
        assert_eq!(parse(&["dieciseis"], &TABLE).as_deref(), Some("16"));
        assert_eq!(parse(&["veintidós"], &TABLE).as_deref(), Some("22"));
        assert_eq!(parse(&["millón"], &TABLE).as_deref(), Some("1000000"));
    }

    #[test]
    fn dictated_digits() {
        assert_eq!(parse(&["uno", "dos", "tres"], &TABLE).as_deref(), Some("123"));
        assert_eq!(parse(&["dos", "cero", "tres"], &TABLE).as_deref(), Some("203"));
    }

    #[test]
    fn negatives_and_rejects() {
        assert_eq!(parse(&["menos", "quince"], &TABLE).as_deref(), Some("-15"));
        assert_eq!(parse(&["cinco", "lado", "diez"], &TABLE), None);
    }
}
