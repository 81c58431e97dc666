//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::WordIndex;
use crate::engine::{Engine, Position, WordBuilderState};
use crate::output::print_state;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed REPL line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Add(char, Position),
    Remove(usize),
    Undo,
    Reset,
    State,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments for '{command}'"));
        }

        match command.to_lowercase().as_str() {
            "p" | "prefix" => Ok(Self::Add(single_letter(argument)?, Position::Prefix)),
            "s" | "suffix" => Ok(Self::Add(single_letter(argument)?, Position::Suffix)),
            "r" | "remove" => {
                let index = argument.ok_or("Usage: r <index>")?;
                index
                    .parse()
                    .map(Self::Remove)
                    .map_err(|_| format!("Invalid index '{index}'"))
            }
            "u" | "undo" => Ok(Self::Undo),
            "n" | "new" | "reset" => Ok(Self::Reset),
            "state" | "show" => Ok(Self::State),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        }
    }
}

fn single_letter(argument: Option<&str>) -> Result<char, String> {
    let argument = argument.ok_or("Expected a letter")?;
    let mut chars = argument.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(format!("Expected a single letter, got '{argument}'")),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: WordIndex + ?Sized>(engine: &Engine<'_, D>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Builder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Build words one letter at a time. {} words loaded.\n",
        engine.dictionary().word_count()
    );
    print_help();

    let mut history: Vec<WordBuilderState> = Vec::new();
    let mut state = engine.reset();
    print_state(&state);

    loop {
        let Some(line) = get_user_input("Command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}\n", format!("❌ {message}").red());
                continue;
            }
        };

        let transition = match command {
            ReplCommand::Add(letter, position) => engine.add_letter_at(&state, letter, position),
            ReplCommand::Remove(index) => engine.remove_letter(&state, index),
            ReplCommand::Undo => {
                if let Some(previous) = history.pop() {
                    state = previous;
                    println!("✓ Undone!\n");
                    print_state(&state);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            ReplCommand::Reset => {
                history.clear();
                state = engine.reset();
                println!("\n🔄 New game started!\n");
                print_state(&state);
                continue;
            }
            ReplCommand::State => {
                print_state(&state);
                continue;
            }
            ReplCommand::Help => {
                print_help();
                continue;
            }
            ReplCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        };

        match transition {
            Ok(transition) => {
                println!("\n{}", transition.message.bright_white());
                history.push(std::mem::replace(&mut state, transition.state));
                print_state(&state);
            }
            Err(err) => println!("{}\n", format!("❌ {err}").red()),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  p <letter>   add a letter before the answer");
    println!("  s <letter>   add a letter after the answer");
    println!("  r <index>    remove the letter at index");
    println!("  undo, reset, state, help, quit\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_commands() {
        assert_eq!(ReplCommand::parse("p c"), Ok(ReplCommand::Add('c', Position::Prefix)));
        assert_eq!(ReplCommand::parse("suffix t"), Ok(ReplCommand::Add('t', Position::Suffix)));
        assert_eq!(ReplCommand::parse("  S   x "), Ok(ReplCommand::Add('x', Position::Suffix)));
    }

    #[test]
    fn rejects_bad_letters() {
        assert!(ReplCommand::parse("p").is_err());
        assert!(ReplCommand::parse("p ab").is_err());
        assert!(ReplCommand::parse("s a b").is_err());
    }

    #[test]
    fn parses_remove_index() {
        assert_eq!(ReplCommand::parse("r 2"), Ok(ReplCommand::Remove(2)));
        assert_eq!(ReplCommand::parse("remove 0"), Ok(ReplCommand::Remove(0)));
        assert!(ReplCommand::parse("r -1").is_err());
        assert!(ReplCommand::parse("r").is_err());
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(ReplCommand::parse("undo"), Ok(ReplCommand::Undo));
        assert_eq!(ReplCommand::parse("reset"), Ok(ReplCommand::Reset));
        assert_eq!(ReplCommand::parse("state"), Ok(ReplCommand::State));
        assert_eq!(ReplCommand::parse("?"), Ok(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("QUIT"), Ok(ReplCommand::Quit));
        assert!(ReplCommand::parse("dance").is_err());
        assert!(ReplCommand::parse("").is_err());
    }
}
