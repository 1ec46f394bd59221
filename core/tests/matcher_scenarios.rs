//! End-to-end recognition scenarios through the public facade.

use libintent_core::{IntentRecognizer, PatternModel};

fn recognizer_with(patterns: &[(&str, &str)]) -> IntentRecognizer {
    let recognizer = IntentRecognizer::new("en-us");
    let mut model = PatternModel::new("test");
    for (phrase, id) in patterns {
        model.add_intent(*phrase, *id);
    }
    recognizer.apply_models(&[model]).unwrap();
    recognizer
}

#[test]
fn slot_at_end_takes_the_rest() {
    let recognizer = recognizer_with(&[("Open {appName}", "open")]);
    let result = recognizer.recognize_once("Open microsoft word");
    assert_eq!(result.intent_id(), "open");
    assert_eq!(result.entity("appName"), Some("microsoft word"));
}

#[test]
fn inner_slot_with_trailing_punctuation() {
    let recognizer = recognizer_with(&[("Turn on the {objectName}.", "HomeAutomation.TurnOn")]);
    let result = recognizer.recognize_once("Turn on the lamp.");
    assert_eq!(result.intent_id(), "HomeAutomation.TurnOn");
    assert_eq!(result.entity("objectName"), Some("lamp"));
}

#[test]
fn optional_prefix_matches_either_way() {
    let recognizer = recognizer_with(&[("[Computer] listen up", "KeywordTest")]);
    assert_eq!(recognizer.recognize_once("Computer listen up").intent_id(), "KeywordTest");
    assert_eq!(recognizer.recognize_once("listen up").intent_id(), "KeywordTest");
    assert!(!recognizer.recognize_once("computer").is_match());
}

#[test]
fn required_alternation() {
    let recognizer = recognizer_with(&[("(Open|Start) {appName}", "open")]);
    let result = recognizer.recognize_once("Open Microsoft Word.");
    assert_eq!(result.entity("appName"), Some("microsoft word"));
    let result = recognizer.recognize_once("Start Microsoft Word.");
    assert_eq!(result.entity("appName"), Some("microsoft word"));
    assert!(!recognizer.recognize_once("Close Microsoft Word.").is_match());
}

#[test]
fn optional_word_does_not_steal_the_slot_value() {
    let recognizer = recognizer_with(&[("[on] {name}", "go")]);
    assert_eq!(recognizer.recognize_once("on onedrive").entity("name"), Some("onedrive"));
    assert_eq!(recognizer.recognize_once("onedrive").entity("name"), Some("onedrive"));
}

#[test]
fn unmatched_utterance_is_an_empty_result_not_an_error() {
    let recognizer = recognizer_with(&[("Open {appName}", "open")]);
    let result = recognizer.recognize_once("good morning");
    assert!(!result.is_match());
    assert_eq!(result.intent_id(), "");
    assert!(result.entities().is_empty());
    assert_eq!(result.detailed_json(), "[]");
}

#[test]
fn instance_qualified_slots_produce_qualified_keys() {
    let recognizer = recognizer_with(&[("{x:1} {x:2}", "pair")]);
    let result = recognizer.recognize_once("alpha beta gamma");
    assert_eq!(result.intent_id(), "pair");
    assert_eq!(result.entity("x:1"), Some("alpha"));
    assert_eq!(result.entity("x:2"), Some("beta gamma"));
    assert_eq!(result.entity("x"), None);
}

#[test]
fn recognition_is_idempotent() {
    let recognizer = recognizer_with(&[
        ("Open {appName}", "open"),
        ("open microsoft word", "openWord"),
    ]);
    let a = recognizer.recognize_once("Open microsoft word");
    let b = recognizer.recognize_once("Open microsoft word");
    assert_eq!(a.intent_id(), b.intent_id());
    assert_eq!(a.entities(), b.entities());
    assert_eq!(a.detailed_json(), b.detailed_json());
}

#[test]
fn concurrent_recognizes_see_consistent_snapshots() {
    let recognizer = recognizer_with(&[("Open {appName}", "open")]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let result = recognizer.recognize_once("Open word");
                    assert_eq!(result.intent_id(), "open");
                }
            });
        }
    });
}
