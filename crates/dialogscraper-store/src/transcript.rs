//! Per-NPC transcript files for one session

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::io::{append_jsonl, atomic_write};
use crate::paths::SessionPaths;
use crate::types::{
    Conversation, DialogEntry, DialogRecord, NpcRef, QuestDiaryRecord, TranscriptFile,
};

/// Read a transcript file as typed records. A missing file is an empty
/// transcript; entries that do not fit [`DialogRecord`] are reported as corrupt.
pub fn read_transcript(path: &Path) -> Result<TranscriptFile, StoreError> {
    parse_existing(path)
}

/// Conversations already on disk, entries kept as written
fn read_stored_conversations(path: &Path) -> Result<Vec<Vec<Value>>, StoreError> {
    parse_existing(path)
}

fn parse_existing<T>(path: &Path) -> Result<Vec<T>, StoreError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Destination for finished conversations
pub trait ConversationSink: Send + Sync {
    /// Hand over a finished conversation with `npc`
    fn submit(&self, npc: &NpcRef, conversation: Conversation) -> Result<(), StoreError>;

    /// Finish any outstanding work. Called once on shutdown.
    fn close(&self) {}
}

impl<S: ConversationSink + ?Sized> ConversationSink for Arc<S> {
    fn submit(&self, npc: &NpcRef, conversation: Conversation) -> Result<(), StoreError> {
        (**self).submit(npc, conversation)
    }

    fn close(&self) {
        (**self).close()
    }
}

/// The on-disk store for one session directory
#[derive(Debug, Clone)]
pub struct SessionStore {
    paths: SessionPaths,
}

impl SessionStore {
    /// Create the session directory under `save_root`
    pub fn create(
        save_root: &Path,
        started_at: &DateTime<FixedOffset>,
    ) -> Result<Self, StoreError> {
        let paths = SessionPaths::new(save_root, started_at);
        std::fs::create_dir_all(&paths.session_dir)
            .map_err(|e| StoreError::io(&paths.session_dir, e))?;
        info!(session_dir = %paths.session_dir.display(), "Session created");
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    pub fn session_dir(&self) -> &Path {
        &self.paths.session_dir
    }

    pub fn transcript_path(&self, npc: &NpcRef) -> PathBuf {
        self.paths.transcript_file(npc)
    }

    /// Append one finished conversation to the NPC's transcript
    pub fn flush(&self, npc: &NpcRef, conversation: &[DialogEntry]) -> Result<PathBuf, StoreError> {
        let records = conversation.iter().map(|e| e.to_record()).collect();
        self.append_conversations(npc, vec![records])
    }

    /// Append conversations, in order, after the ones already on disk.
    ///
    /// Existing entries are written back exactly as read, whatever keys they
    /// carry. If the file is not an array of arrays nothing is written.
    pub fn append_conversations(
        &self,
        npc: &NpcRef,
        conversations: Vec<Vec<DialogRecord>>,
    ) -> Result<PathBuf, StoreError> {
        let path = self.transcript_path(npc);
        let mut transcript = read_stored_conversations(&path)?;
        let previous = transcript.len();
        for conversation in conversations {
            let entries = conversation
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            transcript.push(entries);
        }

        let json = serde_json::to_string_pretty(&transcript)?;
        atomic_write(&path, json.as_bytes()).map_err(|e| StoreError::io(&path, e))?;

        debug!(
            path = %path.display(),
            previous,
            total = transcript.len(),
            "Transcript written"
        );
        Ok(path)
    }

    /// Append a quest diary page to the session's quest_diary.jsonl
    pub fn append_quest_diary(&self, record: &QuestDiaryRecord) -> Result<PathBuf, StoreError> {
        let path = self.paths.quest_diary_file();
        append_jsonl(&path, record).map_err(|e| StoreError::io(&path, e))?;
        Ok(path)
    }
}

impl ConversationSink for SessionStore {
    fn submit(&self, npc: &NpcRef, conversation: Conversation) -> Result<(), StoreError> {
        let path = self.flush(npc, &conversation)?;
        info!(
            npc = %npc.name,
            entries = conversation.len(),
            path = %path.display(),
            "Conversation saved"
        );
        Ok(())
    }
}
