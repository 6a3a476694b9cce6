//! Transcript records and the on-disk session store

mod error;
mod flusher;
mod io;
mod paths;
mod transcript;
mod types;

pub use error::StoreError;
pub use flusher::BackgroundFlusher;
pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use paths::{default_save_root, transcript_file_name, SessionPaths};
pub use transcript::{read_transcript, ConversationSink, SessionStore};
pub use types::{
    format_timestamp, Conversation, DialogEntry, DialogKind, DialogPayload, DialogRecord,
    NpcRef, QuestDiaryRecord, TranscriptFile, USERNAME_TOKEN,
};
