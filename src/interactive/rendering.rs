//! TUI rendering with ratatui
//!
//! Panels for the answer, both candidate sets, completions and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::WordIndex;
use crate::engine::Position;
use crate::output::formatters::answer_with_indices;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Game on the left, message log on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD BUILDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Answer
            Constraint::Percentage(50), // Letter sets
            Constraint::Min(4),         // Completions
        ])
        .split(area);

    render_answer(f, app, chunks[0]);
    render_letter_sets(f, app, chunks[1]);
    render_completions(f, app, chunks[2]);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let (color, verdict) = if state.is_valid_word() {
        (Color::Green, "✓ valid word")
    } else if state.answer().is_empty() {
        (Color::DarkGray, "start with any letter")
    } else if state.is_dead_end() {
        (Color::Red, "dead end")
    } else {
        (Color::Yellow, "keep going")
    };

    let content = if state.answer().is_empty() {
        vec![Line::from(""), Line::from(Span::styled(verdict, Style::default().fg(color)))]
    } else {
        let (letters, indices) = answer_with_indices(&state.answer().to_uppercase());
        vec![
            Line::from(Span::styled(
                letters,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(indices, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(verdict, Style::default().fg(color))),
        ]
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Answer (step {}) ", state.step()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_letter_sets(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_letter_set(f, app, Position::Prefix, chunks[0]);
    render_letter_set(f, app, Position::Suffix, chunks[1]);
}

fn render_letter_set(f: &mut Frame, app: &App, position: Position, area: Rect) {
    let active = app.input_mode.side() == position;
    let letters = app.state.letters_for(position).sorted();
    let text = if letters.is_empty() {
        "(none)".to_string()
    } else {
        letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let (border, title) = match (position, active) {
        (Position::Prefix, true) => (Color::Yellow, " ◀ Prefix letters "),
        (Position::Prefix, false) => (Color::DarkGray, " Prefix letters "),
        (Position::Suffix, true) => (Color::Yellow, " Suffix letters ▶ "),
        (Position::Suffix, false) => (Color::DarkGray, " Suffix letters "),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(paragraph, area);
}

fn render_completions(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.state.current_state();

    let mut lines: Vec<Line> = snapshot
        .valid_completions
        .iter()
        .map(|word| Line::from(format!("  • {}", word.to_uppercase())))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No completions",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !snapshot.suggestion.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("💡 {}", snapshot.suggestion),
            Style::default().fg(Color::Magenta),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Completions ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Letters(Position::Prefix) => (
            " Type a letter to PREPEND | TAB: switch side | Backspace: remove first ",
            String::new(),
            Color::Yellow,
        ),
        InputMode::Letters(Position::Suffix) => (
            " Type a letter to APPEND | TAB: switch side | Backspace: remove last ",
            String::new(),
            Color::Yellow,
        ),
        InputMode::Remove(_) => (
            " Index of letter to remove | Enter: remove | ESC: cancel ",
            app.remove_buffer.clone(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let index = app.engine.dictionary();
    let index_text = format!("{}: {} words", index.name(), index.word_count());
    f.render_widget(Paragraph::new(index_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Words formed: {}",
        app.stats.games, app.stats.words_formed
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let moves_text = format!(
        "Moves: {} | Rejected: {}",
        app.stats.transitions, app.stats.rejected
    );
    f.render_widget(Paragraph::new(moves_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^U: Undo | ^N: New | ^R: Remove")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
