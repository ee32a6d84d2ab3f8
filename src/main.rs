use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use keybinder::{Config, DispatchOutcome, InputEvent, Modifiers, ShortcutRegistry};

#[derive(Parser, Debug)]
#[command(name = "keybinder")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KEYBINDER_GIT_HASH"), ")"))]
#[command(about = "Map keyboard and pointer shortcut combos to callbacks")]
struct Cli {
    /// Print the binding table and exit
    #[arg(long, action = ArgAction::SetTrue)]
    docs: bool,

    /// Use the human-readable " + " key form in docs output
    #[arg(long, short = 'r', action = ArgAction::SetTrue)]
    readable: bool,

    /// Echo the normalized pressed tokens for every dispatched event
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    debug: bool,

    /// Load bindings from PATH instead of the default config file
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut registry = ShortcutRegistry::detached();
    registry.set_debug(cli.debug);

    if config.bindings.is_empty() {
        log::info!("No configured bindings, using built-in samples");
        seed_samples(&mut registry)?;
    } else {
        config.apply_to(&mut registry, |entry| {
            let label = if entry.description.is_empty() {
                entry.keys.clone()
            } else {
                entry.description.clone()
            };
            move |_event: &InputEvent| println!("fired: {label}")
        });
    }

    if cli.docs {
        for doc in registry.docs(cli.readable) {
            println!("{:<24} {}", doc.keys.to_string(), doc.description);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("keybinder: map shortcut combos to callbacks");
        println!();
        println!("Usage:");
        println!("  keybinder --docs              Print the binding table");
        println!("  keybinder --docs --readable   Same, with \" + \"-joined keys");
        println!("  echo ctrl+s | keybinder       Dispatch event lines from stdin");
        println!();
        println!("Event lines are modifier names joined with '+' followed by a key");
        println!("or 'click', e.g. 'ctrl+s', 'shift+click', 'escape'.");
        println!();
        println!("Bindings come from ~/.config/keybinder/config.toml ([[binding]]");
        println!("tables with keys/description/enabled); built-in samples are used");
        println!("when the file is absent or empty.");
        return Ok(());
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(event) = parse_event_line(&line) else {
            continue;
        };
        if registry.dispatch(&event) == DispatchOutcome::Unmatched {
            log::debug!("no binding for '{}'", line.trim());
        }
    }

    registry.destroy();
    Ok(())
}

/// Default to warn-level output (info with --debug so the pressed-token echo
/// shows up), while still letting RUST_LOG take precedence.
fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if debug {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    });
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn seed_samples(registry: &mut ShortcutRegistry) -> anyhow::Result<()> {
    let samples = [
        ("ctrl+s", "Save document"),
        ("ctrl+c|v", "Clipboard"),
        ("ctrl+click", "Open in new tab"),
        ("?", "Show help"),
    ];
    for (keys, description) in samples {
        registry.bind(
            keys,
            move |_event: &InputEvent| println!("fired: {description}"),
            description,
            true,
        )?;
    }
    Ok(())
}

/// Parses one stdin line into an event: modifier names joined with '+',
/// ending in a key identifier or 'click'. Lines with no key are skipped.
fn parse_event_line(line: &str) -> Option<InputEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut modifiers = Modifiers::new();
    let mut main: Option<String> = None;

    for part in trimmed.to_lowercase().split('+') {
        match part.trim() {
            "" => {}
            "ctrl" | "control" => modifiers.ctrl = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "meta" | "cmd" | "command" | "super" | "win" => modifiers.meta = true,
            key => main = Some(key.to_string()),
        }
    }

    match main.as_deref() {
        Some("click") => Some(InputEvent::click(modifiers)),
        Some(key) => Some(InputEvent::key(key, modifiers)),
        None => {
            log::warn!("Event line '{trimmed}' has no key or click, skipping");
            None
        }
    }
}
