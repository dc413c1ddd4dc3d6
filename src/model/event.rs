use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    SpeciesAdded,
    RelationAdded,
    Death,
    Birth,
}

string_enum!(EventKind {
    SpeciesAdded => "species_added",
    RelationAdded => "relation_added",
    Death => "death",
    Birth => "birth",
});

/// One accepted intent, recorded in the ledger in the order it was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: u64,
    pub kind: EventKind,
    /// The species name the intent was addressed to (the predator for relations).
    pub subject: String,
    /// Individuals involved, for deaths and births.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_expected_shape() {
        let event = Event {
            id: 4,
            kind: EventKind::Death,
            subject: "Rabbit".to_string(),
            count: Some(10),
            description: "10 Rabbit died".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["kind"], "death");
        assert_eq!(json["subject"], "Rabbit");
        assert_eq!(json["count"], 10);
    }

    #[test]
    fn count_omitted_when_absent() {
        let event = Event {
            id: 1,
            kind: EventKind::RelationAdded,
            subject: "Fox".to_string(),
            count: None,
            description: "Fox preys on Rabbit".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("count").is_none());
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(EventKind::try_from("extinction".to_string()).is_err());
        assert_eq!(
            EventKind::try_from("birth".to_string()),
            Ok(EventKind::Birth)
        );
    }
}
