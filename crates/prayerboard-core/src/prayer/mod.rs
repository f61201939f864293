//! Prayer request data model.

pub mod confirm;
mod store;

pub use confirm::DeleteConfirmation;
pub use store::PrayerStore;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single prayer request.
///
/// Serialized with the board's historical wire names (`isMain`,
/// `prayedCount`); entries written before the counter existed
/// deserialize with `prayed_count` 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    /// Opaque unique identifier, assigned at creation, never reassigned.
    pub id: String,
    pub text: String,
    /// Featured tag. Not exclusive: any number of prayers may carry it.
    #[serde(default)]
    pub is_main: bool,
    /// How many times the community has prayed for this request.
    /// Never decremented.
    #[serde(default)]
    pub prayed_count: u32,
}

impl PrayerRequest {
    /// Construct a fresh request: unfeatured, count zero, new id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_main: false,
            prayed_count: 0,
        }
    }
}

/// The hard-coded seed list used when storage is absent or unreadable.
pub fn seed_prayers() -> Vec<PrayerRequest> {
    let seeds: [(&str, bool, u32); 4] = [
        ("A great gospel movement in our city, Halifax.", true, 15),
        ("For our sister Jane, who is battling sickness.", false, 27),
        (
            "Guidance and favor for John's visa application process.",
            false,
            8,
        ),
        (
            "Strength and unity for a new marriage in our community.",
            false,
            12,
        ),
    ];
    seeds
        .iter()
        .enumerate()
        .map(|(i, (text, is_main, prayed_count))| PrayerRequest {
            id: format!("initial-{i}"),
            text: (*text).to_string(),
            is_main: *is_main,
            prayed_count: *prayed_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_list_has_4_entries() {
        let seeds = seed_prayers();
        assert_eq!(seeds.len(), 4);
        assert!(seeds[0].is_main);
        assert_eq!(seeds[1].prayed_count, 27);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let p = PrayerRequest {
            id: "x".into(),
            text: "t".into(),
            is_main: true,
            prayed_count: 3,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["isMain"], serde_json::Value::Bool(true));
        assert_eq!(json["prayedCount"], serde_json::json!(3));
    }

    #[test]
    fn missing_prayed_count_defaults_to_zero() {
        let p: PrayerRequest =
            serde_json::from_str(r#"{"id":"a","text":"t","isMain":false}"#).unwrap();
        assert_eq!(p.prayed_count, 0);
    }

    #[test]
    fn new_requests_are_unfeatured() {
        let p = PrayerRequest::new("For the church in Berlin.");
        assert!(!p.is_main);
        assert_eq!(p.prayed_count, 0);
        assert!(!p.id.is_empty());
    }
}
