//! The interactive chat REPL.
//!
//! A rustyline loop: free text runs a chat turn against the model host,
//! slash commands adjust settings or act on the session, and all rendering
//! (colors, thinking lines, typewriter reveal, stats panels) happens here at
//! the edge.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use jargon_core::{ChatSettings, Mode, ModelId, Session};
use jargon_interaction::{run_turn, ModelClient, OllamaClient};

use crate::reveal::{thinking_steps, Typewriter, THINKING_PAUSE};
use crate::stats::{Dashboard, MatchStats};

const SLASH_COMMANDS: &[&str] = &[
    "/mode", "/model", "/temp", "/speed", "/thinking", "/stats", "/export", "/reset", "/help",
];

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: SLASH_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Runs the REPL until the user quits.
pub async fn run(client: OllamaClient, mut settings: ChatSettings) -> Result<()> {
    let mut session = Session::new();

    let helper = CliHelper::new();
    let mut rl: Editor<CliHelper, rustyline::history::DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== FOOTBALL JARGON AI ===".bright_magenta().bold());
    println!(
        "{}",
        "Simulated Thinking • 4-Word Jargon Responses".bright_black()
    );
    println!(
        "{}",
        "Type a football question, '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Full time. Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed.starts_with('/') {
                    handle_command(trimmed, &mut session, &mut settings);
                } else {
                    chat(trimmed, &mut session, &settings, &client).await;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Runs one chat turn with the cosmetic trimmings around it.
async fn chat(input: &str, session: &mut Session, settings: &ChatSettings, client: &impl ModelClient) {
    println!("{}", format!("> {}", input).green());

    if settings.show_thinking {
        for step in thinking_steps() {
            println!("{}", step.bright_cyan().italic());
            tokio::time::sleep(THINKING_PAUSE).await;
        }
    }

    let reply = run_turn(session, settings, client, input).await;

    type_out(&reply, settings.typing_delay()).await;
    print_match_stats(&MatchStats::random());
}

/// Writes increasingly long prefixes of the reply with short pauses between
/// writes. Purely cosmetic; the session already holds the full reply.
async fn type_out(reply: &str, delay: Duration) {
    let mut stdout = std::io::stdout();
    for prefix in Typewriter::new(reply) {
        print!("\r{}", format!("⚽ {}", prefix).bright_blue());
        let _ = stdout.flush();
        tokio::time::sleep(delay).await;
    }
    println!();
}

fn print_match_stats(stats: &MatchStats) {
    println!("{}", "-- Match Stats ----------------".bright_black());
    println!("{}", format!("  Goals Scored:   {}", stats.goals_scored).bright_black());
    println!("{}", format!("  Penalties:      {}", stats.penalties).bright_black());
    println!("{}", format!("  Free-kicks:     {}", stats.free_kicks).bright_black());
    println!("{}", format!("  Trophies Won:   {}", stats.trophies).bright_black());
    println!("{}", format!("  Player Rating:  {:.1}", stats.player_rating).bright_black());
    println!("{}", "-------------------------------".bright_black());
}

/// Dispatches a slash command. Bad input is reported, never fatal.
fn handle_command(input: &str, session: &mut Session, settings: &mut ChatSettings) {
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match command {
        "/mode" => match arg.map(str::parse::<Mode>) {
            Some(Ok(mode)) => {
                settings.mode = mode;
                println!("{}", format!("Mode set to {}", mode).bright_green());
            }
            _ => {
                let options: Vec<String> = Mode::iter().map(|m| m.to_string()).collect();
                println!(
                    "{}",
                    format!("Usage: /mode <{}>", options.join("|")).yellow()
                );
            }
        },
        "/model" => match arg.map(str::parse::<ModelId>) {
            Some(Ok(model)) => {
                settings.model = model;
                println!("{}", format!("Model set to {}", model).bright_green());
            }
            _ => {
                let options: Vec<String> = ModelId::iter().map(|m| m.to_string()).collect();
                println!(
                    "{}",
                    format!("Usage: /model <{}>", options.join("|")).yellow()
                );
            }
        },
        "/temp" => match arg.map(str::parse::<f32>) {
            Some(Ok(value)) => {
                settings.set_temperature(value);
                println!(
                    "{}",
                    format!("Chaos level set to {:.2}", settings.temperature()).bright_green()
                );
            }
            _ => println!("{}", "Usage: /temp <0.0..1.5>".yellow()),
        },
        "/speed" => match arg.map(str::parse::<u64>) {
            Some(Ok(millis)) => {
                settings.set_typing_delay(Duration::from_millis(millis));
                println!(
                    "{}",
                    format!(
                        "Typing delay set to {}ms per character",
                        settings.typing_delay().as_millis()
                    )
                    .bright_green()
                );
            }
            _ => println!("{}", "Usage: /speed <milliseconds>".yellow()),
        },
        "/thinking" => match arg {
            Some("on") => {
                settings.show_thinking = true;
                println!("{}", "Thinking process on".bright_green());
            }
            Some("off") => {
                settings.show_thinking = false;
                println!("{}", "Thinking process off".bright_green());
            }
            _ => println!("{}", "Usage: /thinking on|off".yellow()),
        },
        "/stats" => {
            let dashboard = Dashboard::capture(session, settings);
            println!("{}", "-- Control Panel --------------".bright_black());
            println!("{}", format!("  Match Focus:    {}", dashboard.match_focus).bright_black());
            println!("{}", format!("  Total Queries:  {}", dashboard.total_queries).bright_black());
            println!("{}", format!("  Uptime (sec):   {}", dashboard.uptime_secs).bright_black());
            println!("{}", format!("  Chaos Energy:   {}", dashboard.chaos_energy).bright_black());
            println!("{}", "-------------------------------".bright_black());
        }
        "/export" => match export_session(session, arg) {
            Ok(path) => println!(
                "{}",
                format!("Chat exported to {}", path.display()).bright_green()
            ),
            Err(err) => eprintln!("{}", format!("Export failed: {}", err).red()),
        },
        "/reset" => {
            session.reset();
            println!("{}", "Chat reset. Fresh kickoff.".bright_green());
        }
        "/help" => print_help(),
        _ => println!("{}", "Unknown command. Try /help.".bright_black()),
    }
}

fn print_help() {
    let modes: Vec<String> = Mode::iter().map(|m| m.to_string()).collect();
    let models: Vec<String> = ModelId::iter().map(|m| m.to_string()).collect();
    println!("{}", "Commands:".bright_black());
    println!("{}", format!("  /mode <{}>", modes.join("|")).bright_black());
    println!("{}", format!("  /model <{}>", models.join("|")).bright_black());
    println!("{}", "  /temp <0.0..1.5>      sampling temperature".bright_black());
    println!("{}", "  /speed <ms>           typing delay per character".bright_black());
    println!("{}", "  /thinking on|off      canned thinking lines".bright_black());
    println!("{}", "  /stats                control panel metrics".bright_black());
    println!("{}", "  /export [path]        write chat history as JSON".bright_black());
    println!("{}", "  /reset                clear the session".bright_black());
    println!("{}", "  quit                  leave".bright_black());
}

/// Writes the session history to `path`, or to a timestamped file in the
/// working directory when no path is given. Returns the path written.
fn export_session(session: &Session, path: Option<&str>) -> jargon_core::Result<PathBuf> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(format!(
            "jargon_chat_{}.json",
            Utc::now().format("%Y%m%d_%H%M%S")
        )),
    };

    let json = session.export_json()?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_core::{Message, Role};

    #[test]
    fn test_export_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");

        let mut session = Session::new();
        session.ensure_system_prompt(Mode::Tactical);
        session.push_user("Who marks the false nine?");
        session.push_assistant("Zonal cover absorbs rotation");

        let written = export_session(&session, Some(path.to_str().unwrap())).unwrap();
        assert_eq!(written, path);

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, session.messages());
        assert_eq!(parsed[0].role, Role::System);
    }

    #[test]
    fn test_default_export_path_is_timestamped_json() {
        let session = Session::new();
        let dir = tempfile::tempdir().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let written = export_session(&session, None).unwrap();
        let name = written.file_name().unwrap().to_string_lossy().into_owned();

        std::env::set_current_dir(prev).unwrap();

        assert!(name.starts_with("jargon_chat_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_command_mutates_settings() {
        let mut session = Session::new();
        let mut settings = ChatSettings::default();

        handle_command("/mode historical", &mut session, &mut settings);
        assert_eq!(settings.mode, Mode::Historical);

        handle_command("/model llama3", &mut session, &mut settings);
        assert_eq!(settings.model, ModelId::Llama3);

        handle_command("/temp 99", &mut session, &mut settings);
        assert_eq!(settings.temperature(), 1.5);

        handle_command("/thinking off", &mut session, &mut settings);
        assert!(!settings.show_thinking);
    }

    #[test]
    fn test_reset_command_empties_session() {
        let mut session = Session::new();
        session.push_user("hello");
        session.record_query();
        let mut settings = ChatSettings::default();

        handle_command("/reset", &mut session, &mut settings);

        assert!(session.messages().is_empty());
        assert_eq!(session.query_count(), 0);
    }
}
