//! Builds dialog and quest diary records from the current widget snapshot

use chrono::{DateTime, FixedOffset};
use dialogscraper_store::{
    format_timestamp, DialogEntry, DialogKind, DialogPayload, QuestDiaryRecord,
};

use crate::conversation::PreviousText;
use crate::host::{ClientHost, WidgetRef};
use crate::sanitize::{normalize_multiline, remove_tags, sanitize};

const OPTION_TITLE: &str = "select an option";

/// A record could not be built from the current UI state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("widget {0:?} has no text")]
    MissingText(WidgetRef),

    #[error("widget {0:?} has no children")]
    MissingChildren(WidgetRef),
}

/// Build one dialog entry of `kind` from what the client currently shows.
///
/// A picked option in `previous_text` is sanitized on the way in. Captured
/// lines already are.
pub fn build_dialog_entry(
    kind: DialogKind,
    host: &dyn ClientHost,
    previous_text: Option<&PreviousText>,
    now: DateTime<FixedOffset>,
) -> Result<DialogEntry, RecordError> {
    let username = host.local_player_name();
    let username = username.as_deref();

    let payload = match kind {
        DialogKind::Player => player_payload(host, username)?,
        DialogKind::Npc => npc_payload(host, username)?,
        DialogKind::Options => options_payload(host, username)?,
    };

    Ok(DialogEntry {
        payload,
        previous_text: previous_text.map(|previous| match previous {
            PreviousText::Line(text) => text.clone(),
            PreviousText::Selection(text) => sanitize(text, username),
        }),
        timestamp: now,
    })
}

fn required_text(host: &dyn ClientHost, widget: WidgetRef) -> Result<String, RecordError> {
    host.widget_text(widget).ok_or(RecordError::MissingText(widget))
}

fn dialog_text(
    host: &dyn ClientHost,
    widget: WidgetRef,
    username: Option<&str>,
) -> Result<String, RecordError> {
    let raw = required_text(host, widget)?;
    Ok(sanitize(&normalize_multiline(&raw), username))
}

fn player_payload(
    host: &dyn ClientHost,
    username: Option<&str>,
) -> Result<DialogPayload, RecordError> {
    Ok(DialogPayload::Player {
        text: dialog_text(host, WidgetRef::PlayerText, username)?,
        animation: host.widget_animation_id(WidgetRef::PlayerHeadModel),
    })
}

fn npc_payload(
    host: &dyn ClientHost,
    username: Option<&str>,
) -> Result<DialogPayload, RecordError> {
    let name = required_text(host, WidgetRef::NpcName)?;
    Ok(DialogPayload::Npc {
        name: sanitize(&remove_tags(&name), username),
        text: dialog_text(host, WidgetRef::NpcText, username)?,
        animation: host.widget_animation_id(WidgetRef::NpcHeadModel),
    })
}

fn options_payload(
    host: &dyn ClientHost,
    username: Option<&str>,
) -> Result<DialogPayload, RecordError> {
    let children = host
        .widget_children(WidgetRef::OptionList)
        .ok_or(RecordError::MissingChildren(WidgetRef::OptionList))?;

    let options = children
        .iter()
        .filter(|text| is_selectable_option(text))
        .map(|text| sanitize(&remove_tags(text), username))
        .collect();

    Ok(DialogPayload::Options { options })
}

/// Options menus start with a title line and may contain spacer lines
fn is_selectable_option(text: &str) -> bool {
    !text.trim().is_empty() && !text.to_lowercase().contains(OPTION_TITLE)
}

/// Build a quest diary record from the open quest journal
pub fn build_quest_diary(
    host: &dyn ClientHost,
    now: DateTime<FixedOffset>,
) -> Result<QuestDiaryRecord, RecordError> {
    let username = host.local_player_name();
    let username = username.as_deref();

    let title = required_text(host, WidgetRef::QuestDiaryTitle)?;
    let lines = host
        .widget_children(WidgetRef::QuestDiaryText)
        .ok_or(RecordError::MissingChildren(WidgetRef::QuestDiaryText))?;

    Ok(QuestDiaryRecord {
        name: sanitize(&remove_tags(&title), username),
        lines: lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| sanitize(&normalize_multiline(line), username))
            .collect(),
        date: format_timestamp(&now),
    })
}
