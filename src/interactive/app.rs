//! TUI application state and logic

use crate::core::{IndexType, WordIndex};
use crate::engine::{Engine, Position, Transition, WordBuilderState};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<'a> {
    pub engine: Engine<'a, IndexType>,
    pub state: WordBuilderState,
    pub undo_stack: Vec<WordBuilderState>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub remove_buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typed letters go to this end of the answer
    Letters(Position),
    /// Typing a removal index
    Remove(Position),
}

impl InputMode {
    /// The side letters are added to, kept while in remove mode
    #[must_use]
    pub const fn side(self) -> Position {
        match self {
            Self::Letters(side) | Self::Remove(side) => side,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games: usize,
    pub transitions: usize,
    pub words_formed: usize,
    pub rejected: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: Engine<'a, IndexType>) -> Self {
        let state = engine.reset();
        let word_count = engine.dictionary().word_count();

        Self {
            engine,
            state,
            undo_stack: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! {word_count} words loaded."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters to build a word; TAB switches side".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Letters(Position::Suffix),
            remove_buffer: String::new(),
        }
    }

    /// Add a letter on the active side
    pub fn add_letter(&mut self, letter: char) {
        let side = self.input_mode.side();
        let result = self.engine.add_letter_at(&self.state, letter, side);
        self.apply(result);
    }

    /// Remove the letter at `index`
    pub fn remove_at(&mut self, index: usize) {
        let result = self.engine.remove_letter(&self.state, index);
        self.apply(result);
    }

    /// Remove the letter nearest the active side
    pub fn remove_edge(&mut self) {
        let len = self.state.answer().chars().count();
        if len == 0 {
            self.add_message("Nothing to remove!", MessageStyle::Error);
            return;
        }
        match self.input_mode.side() {
            Position::Prefix => self.remove_at(0),
            Position::Suffix => self.remove_at(len - 1),
        }
    }

    fn apply(&mut self, result: crate::engine::Result<Transition>) {
        match result {
            Ok(transition) => {
                self.stats.transitions += 1;
                if transition.state.is_valid_word() {
                    self.stats.words_formed += 1;
                }
                for line in transition.message.lines() {
                    let style = if line.starts_with("***") {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Info
                    };
                    self.add_message(line, style);
                }
                let previous = std::mem::replace(&mut self.state, transition.state);
                self.undo_stack.push(previous);
            }
            Err(err) => {
                self.stats.rejected += 1;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn toggle_side(&mut self) {
        let side = self.input_mode.side().toggled();
        self.input_mode = InputMode::Letters(side);
        self.add_message(&format!("Adding letters as {side}"), MessageStyle::Info);
    }

    pub fn enter_remove_mode(&mut self) {
        if self.state.answer().is_empty() {
            self.add_message("Nothing to remove!", MessageStyle::Error);
            return;
        }
        self.input_mode = InputMode::Remove(self.input_mode.side());
        self.remove_buffer.clear();
    }

    pub fn cancel_remove(&mut self) {
        self.input_mode = InputMode::Letters(self.input_mode.side());
        self.remove_buffer.clear();
    }

    /// Remove the letter at the typed index and leave remove mode
    pub fn submit_remove(&mut self) {
        if let Ok(index) = self.remove_buffer.parse::<usize>() {
            self.remove_at(index);
        } else {
            self.add_message("Enter the index of the letter to remove", MessageStyle::Error);
            return;
        }
        self.cancel_remove();
    }

    pub fn new_game(&mut self) {
        self.state = self.engine.reset();
        self.undo_stack.clear();
        self.messages.clear();
        self.remove_buffer.clear();
        self.input_mode = InputMode::Letters(Position::Suffix);
        self.stats.games += 1;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.state = previous;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if ctrl => app.should_quit = true,
                (_, KeyCode::Char('n')) if ctrl => app.new_game(),
                (_, KeyCode::Char('u')) if ctrl => app.undo_last(),
                (InputMode::Letters(_), KeyCode::Esc) => app.should_quit = true,
                (InputMode::Letters(_), KeyCode::Char('r')) if ctrl => app.enter_remove_mode(),
                (InputMode::Letters(_), KeyCode::Tab) => app.toggle_side(),
                (InputMode::Letters(_), KeyCode::Left) => app.input_mode = InputMode::Letters(Position::Prefix),
                (InputMode::Letters(_), KeyCode::Right) => app.input_mode = InputMode::Letters(Position::Suffix),
                (InputMode::Letters(_), KeyCode::Backspace) => app.remove_edge(),
                (InputMode::Letters(_), KeyCode::Char(c)) if !ctrl && c.is_alphabetic() => app.add_letter(c),
                (InputMode::Remove(_), KeyCode::Esc) => app.cancel_remove(),
                (InputMode::Remove(_), KeyCode::Char(c)) if c.is_ascii_digit() => app.remove_buffer.push(c),
                (InputMode::Remove(_), KeyCode::Backspace) => {
                    app.remove_buffer.pop();
                }
                (InputMode::Remove(_), KeyCode::Enter) => app.submit_remove(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> IndexType {
        let words: Vec<String> = ["cat", "car", "cart", "at"]
            .iter()
            .map(ToString::to_string)
            .collect();
        IndexType::from_name("trie", &words)
    }

    #[test]
    fn letters_build_answer_on_active_side() {
        let index = index();
        let mut app = App::new(Engine::new(&index));

        app.add_letter('a');
        app.add_letter('t');
        assert_eq!(app.state.answer(), "at");
        assert_eq!(app.stats.words_formed, 1);

        app.toggle_side();
        app.add_letter('c');
        assert_eq!(app.state.answer(), "cat");
        assert_eq!(app.stats.transitions, 3);
        assert_eq!(app.stats.words_formed, 2);
        assert_eq!(app.undo_stack.len(), 3);
    }

    #[test]
    fn rejected_letter_keeps_state() {
        let index = index();
        let mut app = App::new(Engine::new(&index));

        app.add_letter('z');
        assert_eq!(app.state.answer(), "");
        assert_eq!(app.stats.rejected, 1);
        assert!(app.undo_stack.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Invalid letter 'z' for suffix position.");
    }

    #[test]
    fn undo_restores_previous_state() {
        let index = index();
        let mut app = App::new(Engine::new(&index));

        app.add_letter('c');
        app.add_letter('a');
        let ca = app.state.clone();
        app.add_letter('r');
        app.undo_last();
        assert_eq!(app.state, ca);

        app.undo_last();
        app.undo_last();
        assert_eq!(app.state.answer(), "");
        app.undo_last();
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo!");
    }

    #[test]
    fn remove_mode_removes_typed_index() {
        let index = index();
        let mut app = App::new(Engine::new(&index));
        for letter in ['c', 'a', 'r', 't'] {
            app.add_letter(letter);
        }

        app.enter_remove_mode();
        assert_eq!(app.input_mode, InputMode::Remove(Position::Suffix));
        app.remove_buffer.push('3');
        app.submit_remove();
        assert_eq!(app.state.answer(), "car");
        assert_eq!(app.input_mode, InputMode::Letters(Position::Suffix));
    }

    #[test]
    fn backspace_removes_from_active_side() {
        let index = index();
        let mut app = App::new(Engine::new(&index));
        for letter in ['c', 'a', 't'] {
            app.add_letter(letter);
        }

        app.remove_edge();
        assert_eq!(app.state.answer(), "ca");
        app.toggle_side();
        app.remove_edge();
        assert_eq!(app.state.answer(), "a");
    }

    #[test]
    fn new_game_resets_everything_but_stats() {
        let index = index();
        let mut app = App::new(Engine::new(&index));
        app.add_letter('a');
        app.toggle_side();

        app.new_game();
        assert_eq!(app.state.answer(), "");
        assert!(app.undo_stack.is_empty());
        assert_eq!(app.input_mode, InputMode::Letters(Position::Suffix));
        assert_eq!(app.stats.games, 2);
        assert_eq!(app.stats.transitions, 1);
    }
}
