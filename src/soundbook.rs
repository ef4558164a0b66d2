//! Optional JSON soundbook: a list of `{ "name", "duration" }` entries
//! that overrides the shipped batch. Names must match shipped presets;
//! durations are validated at render time like any other request.

use serde::{Deserialize, Serialize};

use crate::presets::{self, SoundSpec};

#[derive(Debug, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub duration: f32,
}

pub fn load(path: &str) -> Result<Vec<SoundSpec>, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<Vec<SoundSpec>, String> {
    let entries: Vec<Entry> = serde_json::from_str(text).map_err(|e| e.to_string())?;
    entries
        .iter()
        .map(|entry| match presets::resolve(&entry.name) {
            Some(known) => Ok(SoundSpec { duration: entry.duration, ..*known }),
            None => Err(format!("unknown sound '{}'", entry.name)),
        })
        .collect()
}

#[cfg(test)]
mod test_unit {
    use super::*;

    #[test]
    fn test_parse_overrides_durations() {
        let text = r#"[
            { "name": "bell", "duration": 2.0 },
            { "name": "click", "duration": 0.5 }
        ]"#;
        let specs = parse(text).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "bell");
        assert_eq!(specs[0].duration, 2.0);
        assert_eq!(specs[1].name, "click");
        assert_eq!(specs[1].duration, 0.5);
    }

    #[test]
    fn test_parse_rejects_unknown_sounds() {
        let text = r#"[{ "name": "kazoo", "duration": 1.0 }]"#;
        let err = parse(text).unwrap_err();
        assert!(err.contains("kazoo"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse("not a soundbook").is_err());
        assert!(parse(r#"{ "name": "bell" }"#).is_err(), "must be a list");
    }
}
