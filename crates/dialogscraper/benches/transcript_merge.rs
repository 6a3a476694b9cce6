use chrono::{FixedOffset, TimeZone};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dialogscraper_store::{DialogEntry, DialogPayload, NpcRef, SessionStore};
use std::hint::black_box;

fn conversation(lines: usize) -> Vec<DialogEntry> {
    let at = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 9, 14, 16, 20, 5)
        .unwrap();
    (0..lines)
        .map(|i| DialogEntry {
            payload: DialogPayload::Npc {
                name: "Bob Smith".to_string(),
                text: format!("Line number {i} of a long chat."),
                animation: Some(554),
            },
            previous_text: (i > 0).then(|| format!("Line number {} of a long chat.", i - 1)),
            timestamp: at,
        })
        .collect()
}

fn bench_flush_into_growing_transcript(c: &mut Criterion) {
    let temp = tempfile::TempDir::new().unwrap();
    let store = SessionStore::create(temp.path(), &chrono::Local::now().fixed_offset()).unwrap();
    let npc = NpcRef::new(100, "Bob Smith");
    let lines = conversation(20);

    // Seed a transcript that already holds a long play session
    for _ in 0..200 {
        store.flush(&npc, &lines).unwrap();
    }
    let path = store.transcript_path(&npc);
    let seed = std::fs::read(&path).unwrap();

    c.bench_function("flush_into_200_conversations", |b| {
        b.iter_batched(
            || std::fs::write(&path, &seed).unwrap(),
            |()| store.flush(black_box(&npc), black_box(&lines)).unwrap(),
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, bench_flush_into_growing_transcript);
criterion_main!(benches);
