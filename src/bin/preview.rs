//! Preview binary - shows how a message renders for different viewers
//! without a hosting application.
//!
//! Usage:
//!   cargo run --bin preview -- "A secret worth keeping" elvish
//!   cargo run --bin preview -- "A secret worth keeping" elvish --unique-salt
//!
//! Optional environment variables:
//! - RULESET (defaults to dnd5e)
//! - KNOWN_LANGUAGES (comma-separated keys the sample persona speaks,
//!   defaults to "common")

use anyhow::{bail, Result};
use tracing::info;

use runetongue::visibility::RenderMode;
use runetongue::{Message, NullHost, Persona, Session, Settings, Viewer};

fn sample_persona(known: &str) -> Persona {
    let keys: Vec<&str> = known
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect();
    Persona::new("Sample").with_attributes(serde_json::json!({
        "traits": { "languages": { "value": keys } }
    }))
}

fn describe(rendering: &runetongue::Rendering) -> String {
    match rendering.mode {
        RenderMode::Plain => format!("plain      | {}", rendering.display_text),
        RenderMode::Translated => format!(
            "translated | {}{}",
            rendering.display_text,
            rendering
                .label
                .as_deref()
                .map(|l| format!("  [from {l}]"))
                .unwrap_or_default()
        ),
        RenderMode::Scrambled => format!(
            "scrambled  | {}  (font: {})",
            rendering.display_text,
            rendering.font.as_deref().unwrap_or("-")
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runetongue=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let unique_salt = args.iter().any(|arg| arg == "--unique-salt");
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect();
    let (text, language) = match positional.as_slice() {
        [text, language] => (text.as_str(), language.as_str()),
        _ => bail!("usage: preview <text> <language> [--unique-salt]"),
    };

    let ruleset = std::env::var("RULESET").unwrap_or_else(|_| "dnd5e".to_string());
    let known = std::env::var("KNOWN_LANGUAGES").unwrap_or_else(|_| "common".to_string());

    let settings = Settings {
        custom_languages: language.to_string(),
        use_unique_salt: unique_salt,
        ..Settings::default()
    };

    info!(ruleset = %ruleset, "building sessions");
    let message = Message::in_character("preview-1", text, language);

    for (name, viewer) in [("arbiter", Viewer::arbiter()), ("player", Viewer::player())] {
        let mut session = Session::new(&ruleset, settings.clone(), viewer, &NullHost).await;
        let persona = sample_persona(&known);
        session.rebuild_known_languages(&[&persona]);

        let rendering = session.resolve(&message);
        println!("{name:8} {}", describe(&rendering));
    }

    Ok(())
}
