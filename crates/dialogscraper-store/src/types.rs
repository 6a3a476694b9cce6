//! Dialog record types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Placeholder written in place of the local player's display name
pub const USERNAME_TOKEN: &str = "%USERNAME%";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Format a capture time as ISO-8601 with millisecond precision and offset
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The NPC a conversation is held with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NpcRef {
    pub id: i32,
    pub name: String,
}

impl NpcRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Structural shape of a dialog turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Player,
    Npc,
    Options,
}

impl DialogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Player => "player",
            DialogKind::Npc => "npc",
            DialogKind::Options => "options",
        }
    }
}

/// Kind-specific content of a dialog turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPayload {
    /// A line spoken by the local player (speaker is always the placeholder)
    Player {
        text: String,
        animation: Option<i32>,
    },
    Npc {
        name: String,
        text: String,
        animation: Option<i32>,
    },
    /// A menu of selectable replies
    Options { options: Vec<String> },
}

/// One turn in a conversation.
///
/// All text is already sanitized. `previous_text` is a snapshot taken when the
/// entry is built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DialogRecord")]
pub struct DialogEntry {
    pub payload: DialogPayload,
    pub previous_text: Option<String>,
    pub timestamp: DateTime<FixedOffset>,
}

impl DialogEntry {
    pub fn kind(&self) -> DialogKind {
        match self.payload {
            DialogPayload::Player { .. } => DialogKind::Player,
            DialogPayload::Npc { .. } => DialogKind::Npc,
            DialogPayload::Options { .. } => DialogKind::Options,
        }
    }

    pub fn speaker(&self) -> Option<&str> {
        match &self.payload {
            DialogPayload::Player { .. } => Some(USERNAME_TOKEN),
            DialogPayload::Npc { name, .. } => Some(name.as_str()),
            DialogPayload::Options { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            DialogPayload::Player { text, .. } | DialogPayload::Npc { text, .. } => {
                Some(text.as_str())
            }
            DialogPayload::Options { .. } => None,
        }
    }

    pub fn animation(&self) -> Option<i32> {
        match self.payload {
            DialogPayload::Player { animation, .. } | DialogPayload::Npc { animation, .. } => {
                animation
            }
            DialogPayload::Options { .. } => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match &self.payload {
            DialogPayload::Options { options } => Some(options.as_slice()),
            _ => None,
        }
    }

    /// Flatten into the on-disk shape
    pub fn to_record(&self) -> DialogRecord {
        DialogRecord {
            name: self.speaker().map(str::to_string),
            kind: self.kind(),
            text: self.text().map(str::to_string),
            animation: self.animation(),
            previous_text: self.previous_text.clone(),
            options: self.options().map(<[String]>::to_vec),
            date: format_timestamp(&self.timestamp),
        }
    }
}

/// Ordered turns of one conversation
pub type Conversation = Vec<DialogEntry>;

/// On-disk dialog entry. Every key is always written; absent values are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: DialogKind,
    pub text: Option<String>,
    pub animation: Option<i32>,
    pub previous_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub date: String,
}

/// Contents of one NPC transcript file: conversations in capture order
pub type TranscriptFile = Vec<Vec<DialogRecord>>;

impl From<DialogEntry> for DialogRecord {
    fn from(entry: DialogEntry) -> Self {
        entry.to_record()
    }
}

/// A captured quest diary page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDiaryRecord {
    pub name: String,
    pub lines: Vec<String>,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(-5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(&at()), "2024-01-02T03:04:05.000-05:00");
    }

    #[test]
    fn test_player_entry_serializes_all_keys() {
        let entry = DialogEntry {
            payload: DialogPayload::Player {
                text: "Hello".to_string(),
                animation: Some(588),
            },
            previous_text: None,
            timestamp: at(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "%USERNAME%",
                "type": "player",
                "text": "Hello",
                "animation": 588,
                "previousText": null,
                "options": null,
                "date": "2024-01-02T03:04:05.000-05:00",
            })
        );
    }

    #[test]
    fn test_options_entry_has_null_text_and_name() {
        let entry = DialogEntry {
            payload: DialogPayload::Options {
                options: vec!["Yes".to_string(), "No".to_string()],
            },
            previous_text: Some("Will you help?".to_string()),
            timestamp: at(),
        };

        let record = entry.to_record();
        assert_eq!(record.name, None);
        assert_eq!(record.text, None);
        assert_eq!(record.animation, None);
        assert_eq!(record.kind, DialogKind::Options);
        assert_eq!(record.options.as_deref(), Some(&["Yes".to_string(), "No".to_string()][..]));
    }

    #[test]
    fn test_key_order_is_stable() {
        let entry = DialogEntry {
            payload: DialogPayload::Npc {
                name: "Hans".to_string(),
                text: "Hi".to_string(),
                animation: None,
            },
            previous_text: None,
            timestamp: at(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let positions: Vec<usize> = [
            "\"name\"",
            "\"type\"",
            "\"text\"",
            "\"animation\"",
            "\"previousText\"",
            "\"options\"",
            "\"date\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }
}
