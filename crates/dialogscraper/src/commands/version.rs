pub fn run() -> anyhow::Result<()> {
    println!("dialogscraper {}", env!("CARGO_PKG_VERSION"));
    println!("Dialog and quest diary transcripts from game client UI events");
    Ok(())
}
