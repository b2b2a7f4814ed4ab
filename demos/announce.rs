//! Drive the announcement engine from JSON lines on stdin.
//!
//! ```text
//! RUST_LOG=info cargo run --example announce -- "https://example.org/?type=udl" [config.json]
//! {"event": "focus", "element": {"kind": "button", "textContent": "Submit"}}
//! {"event": "key", "element": {"kind": "textInput"}, "key": "@"}
//! ```

use std::io::BufRead;
use std::path::PathBuf;

use serde::Deserialize;

use cheongeum::{
    backends::LogSpeech, AnnouncementEngine, ElementSnapshot, EngineConfig, InteractionEvent,
    Mode,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EventType {
    Hover,
    Focus,
    Key,
}

#[derive(Debug, Deserialize)]
struct ScriptedEvent {
    event: EventType,
    #[serde(default)]
    element: ElementSnapshot,
    #[serde(default)]
    key: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let launch_url = args
        .next()
        .unwrap_or_else(|| "https://example.org/?type=udl".to_string());
    let config = match args.next() {
        Some(path) => EngineConfig::from_json_file(&PathBuf::from(path))?,
        None => EngineConfig::default(),
    };

    let mode = Mode::from_launch_url(&launch_url)?;
    println!(
        "UDL mode {} ({:?} profile)",
        if mode.is_active() { "on" } else { "off" },
        config.profile
    );

    let mut engine = AnnouncementEngine::new(mode, config, LogSpeech);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let scripted: ScriptedEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                eprintln!("Skipping malformed event: {e}");
                continue;
            }
        };

        let event = match scripted.event {
            EventType::Hover => InteractionEvent::Hover(&scripted.element),
            EventType::Focus => InteractionEvent::Focus(&scripted.element),
            EventType::Key => InteractionEvent::KeyInput {
                target: &scripted.element,
                key: &scripted.key,
            },
        };

        match engine.announcement(&event) {
            Some(text) => println!("-> {text}"),
            None => println!("-> (silent)"),
        }
        engine.handle(&event);
    }

    Ok(())
}
