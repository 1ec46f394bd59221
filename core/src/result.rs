//! Recognition results.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One ranked alternate: intent id plus its extracted entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedIntent {
    #[serde(rename = "intentId")]
    pub intent_id: String,
    #[serde(serialize_with = "entities_as_map")]
    pub entities: Vec<(String, String)>,
}

fn entities_as_map<S: Serializer>(
    entities: &Vec<(String, String)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entities.len()))?;
    for (key, value) in entities {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// The outcome of one recognize call. `intent_id` is empty when nothing
/// matched; `detailed` holds the ranked alternates (best first, the
/// winner included).
#[derive(Debug, Clone, Default)]
pub struct IntentResult {
    intent_id: String,
    entities: Vec<(String, String)>,
    detailed: Vec<RankedIntent>,
}

impl IntentResult {
    pub(crate) fn no_match() -> Self {
        IntentResult::default()
    }

    pub(crate) fn new(
        intent_id: String,
        entities: Vec<(String, String)>,
        detailed: Vec<RankedIntent>,
    ) -> Self {
        IntentResult {
            intent_id,
            entities,
            detailed,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.intent_id.is_empty()
    }

    pub fn intent_id(&self) -> &str {
        &self.intent_id
    }

    /// Extracted entities in binding order, keyed `name` or
    /// `name:instance`.
    pub fn entities(&self) -> &[(String, String)] {
        &self.entities
    }

    pub fn entity(&self, key: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn detailed(&self) -> &[RankedIntent] {
        &self.detailed
    }

    /// The alternates as a JSON array of `{intentId, entities}` objects.
    pub fn detailed_json(&self) -> String {
        serde_json::to_string(&self.detailed).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_is_empty() {
        let r = IntentResult::no_match();
        assert!(!r.is_match());
        assert_eq!(r.intent_id(), "");
        assert!(r.entities().is_empty());
        assert_eq!(r.detailed_json(), "[]");
    }

    #[test]
    fn detailed_json_shape() {
        let r = IntentResult::new(
            "open".into(),
            vec![("appName".into(), "word".into())],
            vec![RankedIntent {
                intent_id: "open".into(),
                entities: vec![("appName".into(), "word".into())],
            }],
        );
        assert_eq!(
            r.detailed_json(),
            r#"[{"intentId":"open","entities":{"appName":"word"}}]"#
        );
        assert_eq!(r.entity("appName"), Some("word"));
        assert_eq!(r.entity("missing"), None);
    }
}
