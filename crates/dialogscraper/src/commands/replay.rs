//! Replays a recorded host script through the scraper.
//!
//! A script is JSONL, one host callback or UI change per line:
//!
//! ```text
//! {"event":"local_player","name":"Zezima"}
//! {"event":"interaction","source":{"kind":"local_player"},"target":{"kind":"npc","id":100,"name":"Bob Smith"}}
//! {"event":"set_widget","widget":"npc_text","text":"Hi there"}
//! {"event":"widget_loaded","group_id":231}
//! {"event":"tick"}
//! ```

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local};
use dialogscraper_core::{Actor, MemoryHost, ScraperConfig, WidgetRef, WidgetState};
use dialogscraper_plugins::DialogScraper;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::config_path;

/// One recorded host callback or UI change
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    LocalPlayer {
        name: String,
    },
    SetWidget {
        widget: WidgetRef,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        children: Option<Vec<String>>,
        #[serde(default)]
        animation: Option<i32>,
        #[serde(default)]
        hidden: bool,
    },
    RemoveWidget {
        widget: WidgetRef,
    },
    Interaction {
        source: Actor,
        #[serde(default)]
        target: Option<Actor>,
    },
    WidgetLoaded {
        group_id: i32,
    },
    MenuClicked {
        label: String,
        action: i32,
        param: i32,
    },
    KeyPressed {
        key_code: i32,
    },
    Tick {
        #[serde(default = "one")]
        count: u32,
    },
}

fn one() -> u32 {
    1
}

#[derive(Debug)]
pub struct ReplaySummary {
    pub session_dir: PathBuf,
    pub steps: usize,
    pub ticks: u32,
}

/// Parse a script. Blank lines and `#` comments are skipped.
pub fn parse_script(contents: &str) -> anyhow::Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = serde_json::from_str(line)
            .with_context(|| format!("invalid script step on line {}", index + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

/// Drive a fresh scraper with `steps`, then shut it down
pub fn replay(
    config: ScraperConfig,
    steps: &[ScriptStep],
    started_at: DateTime<FixedOffset>,
) -> anyhow::Result<ReplaySummary> {
    let mut scraper = DialogScraper::start(config, started_at)?;
    let mut host = MemoryHost::new();
    let mut ticks = 0;

    for step in steps {
        match step {
            ScriptStep::LocalPlayer { name } => host.set_local_player(name.clone()),
            ScriptStep::SetWidget {
                widget,
                text,
                children,
                animation,
                hidden,
            } => host.set_widget(
                *widget,
                WidgetState {
                    text: text.clone(),
                    children: children.clone(),
                    animation: *animation,
                    hidden: *hidden,
                },
            ),
            ScriptStep::RemoveWidget { widget } => host.remove_widget(*widget),
            ScriptStep::Interaction { source, target } => {
                scraper.on_interaction_changed(source, target.as_ref())
            }
            ScriptStep::WidgetLoaded { group_id } => scraper.on_widget_loaded(*group_id),
            ScriptStep::MenuClicked {
                label,
                action,
                param,
            } => scraper.on_menu_option_clicked(&host, label, *action, *param),
            ScriptStep::KeyPressed { key_code } => scraper.on_key_pressed(&host, *key_code),
            ScriptStep::Tick { count } => {
                for _ in 0..*count {
                    scraper.on_tick(&host);
                    ticks += 1;
                }
            }
        }
    }

    let session_dir = scraper.session_dir().to_path_buf();
    scraper.shutdown();

    Ok(ReplaySummary {
        session_dir,
        steps: steps.len(),
        ticks,
    })
}

pub fn run(script: &Path, config: Option<&Path>, save_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = ScraperConfig::load(&config_path(config))?;
    if let Some(save_path) = save_path {
        config.save_path = save_path.to_path_buf();
    }

    let contents = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let steps = parse_script(&contents)?;

    let summary = replay(config, &steps, Local::now().fixed_offset())?;
    println!(
        "Replayed {} steps ({} ticks) into {}",
        summary.steps,
        summary.ticks,
        summary.session_dir.display()
    );
    Ok(())
}
