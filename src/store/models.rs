// ABOUTME: Data models for persisted avatar and companion selections
// Field names match the stored JSON so existing selection files load unchanged

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A church or community avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// "church" or "community"
    #[serde(default)]
    pub role: String,

    /// Display name chosen for the persona
    #[serde(default)]
    pub avatar_name: String,

    /// First-person description of how the persona sees things
    #[serde(default)]
    pub avatar_point_of_view: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_structured_data: Option<String>,
}

impl Avatar {
    /// Name to show in lists and summaries
    pub fn display_name(&self) -> &str {
        if self.avatar_name.is_empty() {
            &self.name
        } else {
            &self.avatar_name
        }
    }
}

/// A conversation companion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    #[serde(rename = "UUID")]
    pub uuid: i64,

    /// Companion name
    pub companion: String,

    #[serde(default)]
    pub companion_type: String,

    #[serde(default)]
    pub traits: String,

    #[serde(default)]
    pub speech_pattern: String,

    #[serde(default)]
    pub knowledge_domains: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Companion {
    /// Interpret a stored companion entry.
    ///
    /// Accepts the current `{UUID, companion}` shape and the older
    /// `{id, name}` shape (converted on the fly). Anything else is dropped.
    pub fn from_stored(value: &Value) -> Option<Self> {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let legacy_id = value.get("id").and_then(Value::as_i64);
        let legacy_name = value.get("name").and_then(Value::as_str);
        let has_current_keys = value.get("UUID").is_some() || value.get("companion").is_some();

        if let (Some(id), Some(name), false) = (legacy_id, legacy_name, has_current_keys) {
            debug!("Converting legacy companion entry '{}'", name);
            return Some(Self {
                uuid: id,
                companion: name.to_string(),
                companion_type: text("companion_type"),
                traits: text("traits"),
                speech_pattern: text("speech_pattern"),
                knowledge_domains: text("knowledge_domains"),
                avatar_url: value
                    .get("avatar_url")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        let is_current = value.get("UUID").is_some_and(Value::is_i64)
            && value.get("companion").is_some_and(Value::is_string);
        if is_current {
            if let Ok(companion) = serde_json::from_value(value.clone()) {
                return Some(companion);
            }
        }

        warn!("Discarding companion entry with unexpected format: {}", value);
        None
    }
}

/// Which selection tasks the user has finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTasks {
    #[serde(default)]
    pub church: bool,
    #[serde(default)]
    pub community: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_companion_format() {
        let value = json!({
            "UUID": 7,
            "companion": "Brother Lawrence",
            "companion_type": "mystic",
            "traits": "gentle",
            "speech_pattern": "plain",
            "knowledge_domains": "prayer"
        });
        let companion = Companion::from_stored(&value).expect("current format should load");
        assert_eq!(companion.uuid, 7);
        assert_eq!(companion.companion, "Brother Lawrence");
        assert_eq!(companion.avatar_url, None);
    }

    #[test]
    fn test_legacy_companion_format_is_converted() {
        let value = json!({ "id": 3, "name": "Hildegard", "traits": "visionary" });
        let companion = Companion::from_stored(&value).expect("legacy format should convert");
        assert_eq!(companion.uuid, 3);
        assert_eq!(companion.companion, "Hildegard");
        assert_eq!(companion.traits, "visionary");
        assert_eq!(companion.companion_type, "");
    }

    #[test]
    fn test_unexpected_companion_format_is_dropped() {
        assert!(Companion::from_stored(&json!({ "UUID": "seven", "companion": 1 })).is_none());
        assert!(Companion::from_stored(&json!("just a string")).is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let avatar = Avatar {
            id: "a1".to_string(),
            name: "Grace Chapel".to_string(),
            role: "church".to_string(),
            avatar_name: String::new(),
            avatar_point_of_view: String::new(),
            image_url: None,
            avatar_url: None,
            description: None,
            avatar_structured_data: None,
        };
        assert_eq!(avatar.display_name(), "Grace Chapel");
    }
}
