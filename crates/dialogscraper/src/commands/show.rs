use dialogscraper_store::{read_transcript, DialogKind, TranscriptFile};
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let transcript = read_transcript(file)?;
    print!("{}", render(&transcript));
    Ok(())
}

/// Human-readable view of a transcript
fn render(transcript: &TranscriptFile) -> String {
    let mut lines = vec![format!("{} conversation(s)", transcript.len())];

    for (index, conversation) in transcript.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!(
            "## Conversation {} ({} entries)",
            index + 1,
            conversation.len()
        ));
        for record in conversation {
            if let Some(previous) = &record.previous_text {
                lines.push(format!("    <- {}", previous));
            }
            match record.kind {
                DialogKind::Player | DialogKind::Npc => lines.push(format!(
                    "  [{}] {}: {}",
                    record.kind.as_str(),
                    record.name.as_deref().unwrap_or("?"),
                    record.text.as_deref().unwrap_or("")
                )),
                DialogKind::Options => {
                    lines.push("  [options]".to_string());
                    for (n, option) in record.options.iter().flatten().enumerate() {
                        lines.push(format!("    {}. {}", n + 1, option));
                    }
                }
            }
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
