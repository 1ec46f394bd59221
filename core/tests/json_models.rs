//! Loading models from JSON documents.

use libintent_core::{IntentError, IntentRecognizer, PatternModel};

const COFFEE_MAKER: &str = r#"{
    "intents": [
        { "phrases": ["[Please] turn on the {applianceName}"], "id": "Turn on" },
        { "phrases": ["Brew {number} cups [of coffee]"], "id": "Brew" }
    ],
    "entities": [
        { "name": "applianceName", "type": "List", "mode": "Strict",
          "entries": [
              { "entry": "coffee maker", "synonyms": ["coffee machine", "pot"] },
              { "entry": "kettle" }
          ] },
        { "name": "number", "type": "PrebuiltInteger" }
    ]
}"#;

fn coffee_recognizer() -> IntentRecognizer {
    let recognizer = IntentRecognizer::new("en-us");
    let model = PatternModel::from_json_str("coffee", COFFEE_MAKER).unwrap();
    recognizer.apply_models(&[model]).unwrap();
    recognizer
}

#[test]
fn loads_intents_and_entities() {
    let model = PatternModel::from_json_str("coffee", COFFEE_MAKER).unwrap();
    assert_eq!(model.model_id(), "coffee");
    assert_eq!(model.intents().len(), 2);
    assert_eq!(model.entities().len(), 2);
}

#[test]
fn recognizes_with_list_entity() {
    let recognizer = coffee_recognizer();
    let result = recognizer.recognize_once("Please turn on the kettle.");
    assert_eq!(result.intent_id(), "Turn on");
    assert_eq!(result.entity("applianceName"), Some("kettle"));
}

#[test]
fn synonym_maps_to_canonical_entry() {
    let recognizer = coffee_recognizer();
    let result = recognizer.recognize_once("turn on the coffee machine");
    assert_eq!(result.intent_id(), "Turn on");
    assert_eq!(result.entity("applianceName"), Some("coffee maker"));
    let result = recognizer.recognize_once("turn on the pot");
    assert_eq!(result.entity("applianceName"), Some("coffee maker"));
}

#[test]
fn prebuilt_number_entity_from_json() {
    let recognizer = coffee_recognizer();
    let result = recognizer.recognize_once("Brew two cups of coffee");
    assert_eq!(result.intent_id(), "Brew");
    assert_eq!(result.entity("number"), Some("2"));
    let result = recognizer.recognize_once("Brew twelve cups");
    assert_eq!(result.entity("number"), Some("12"));
}

#[test]
fn strict_list_rejects_unknown_appliances() {
    let recognizer = coffee_recognizer();
    assert!(!recognizer.recognize_once("turn on the toaster").is_match());
}

#[test]
fn bare_phrase_lists_are_accepted() {
    let json = r#"{
        "intents": [ { "phrases": ["feed the {animal}"], "id": "feed" } ],
        "entities": [ { "name": "animal", "type": "List", "mode": "Strict",
                        "phrases": ["cat", "dog"] } ]
    }"#;
    let recognizer = IntentRecognizer::new("en-us");
    let model = PatternModel::from_json_str("zoo", json).unwrap();
    recognizer.apply_models(&[model]).unwrap();
    assert_eq!(recognizer.recognize_once("feed the cat").entity("animal"), Some("cat"));
    assert!(!recognizer.recognize_once("feed the bird").is_match());
}

#[test]
fn unknown_type_and_bad_json_are_invalid_model() {
    let bad_type = r#"{ "entities": [ { "name": "x", "type": "Datetime" } ] }"#;
    assert!(matches!(
        PatternModel::from_json_str("m", bad_type),
        Err(IntentError::InvalidModel(_))
    ));
    assert!(matches!(
        PatternModel::from_json_str("m", "not json at all"),
        Err(IntentError::InvalidModel(_))
    ));
    let bad_mode = r#"{ "entities": [ { "name": "x", "type": "List", "mode": "Loose" } ] }"#;
    assert!(matches!(
        PatternModel::from_json_str("m", bad_mode),
        Err(IntentError::InvalidModel(_))
    ));
}

#[test]
fn missing_file_is_invalid_model() {
    assert!(matches!(
        PatternModel::from_json_file("m", "/nonexistent/model.json"),
        Err(IntentError::InvalidModel(_))
    ));
}
