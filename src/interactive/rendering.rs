//! TUI rendering with ratatui
//!
//! Panels for the board, constraints, candidates, eliminators and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, Observation, WORD_LEN};
use crate::game::MAX_ATTEMPTS;
use crate::solver::SuggestionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed in the candidate panel
const SHOWN_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT")
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

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2),
            Constraint::Min(5),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(8),
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_eliminators(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn board_row(observation: &Observation) -> Line<'static> {
    let spans: Vec<Span> = observation
        .word()
        .letters()
        .iter()
        .zip(observation.pattern().marks())
        .map(|(&letter, mark)| {
            Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                tile_style(mark),
            )
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let observations = app.session.observations();
    let mut lines: Vec<Line> = observations.iter().map(board_row).collect();

    if app.input_mode != InputMode::GameOver && observations.len() < MAX_ATTEMPTS {
        let typed = match (&app.current_word, app.input_mode) {
            (Some(word), InputMode::Pattern) => word.clone(),
            _ => app.input_buffer.clone(),
        };
        let mut spans: Vec<Span> = typed
            .chars()
            .map(|c| {
                Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        for _ in typed.chars().count()..WORD_LEN {
            spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board ({}) ", app.session.status()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = &app.snapshot.candidates;

    let content = if candidates.is_empty() {
        vec![Line::styled(
            "No matches. Check the patterns (Ctrl-U to undo).",
            Style::default().fg(Color::Red),
        )]
    } else {
        let mut lines: Vec<Line> = candidates
            .chunks(4)
            .take(SHOWN_CANDIDATES.div_ceil(4))
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|w| format!("{:<7}", w.to_uppercase()))
                        .collect::<String>(),
                )
            })
            .collect();
        if candidates.len() > SHOWN_CANDIDATES {
            lines.push(Line::styled(
                format!("… and {} more", candidates.len() - SHOWN_CANDIDATES),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = &app.snapshot.constraints;

    let template: String = (0..WORD_LEN)
        .map(|p| {
            constraints
                .fixed_at(p)
                .map_or('_', |l| char::from(l).to_ascii_uppercase())
        })
        .collect();
    let misplaced: Vec<String> = constraints
        .required_misplaced()
        .iter()
        .map(|&(letter, position)| {
            format!("{}≠{}", char::from(letter).to_ascii_uppercase(), position + 1)
        })
        .collect();
    let or_dash = |s: String| if s.is_empty() { "-".to_string() } else { s };

    let content = vec![
        Line::from(vec![
            Span::raw("Fixed:     "),
            Span::styled(
                template,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Misplaced: "),
            Span::styled(or_dash(misplaced.join(" ")), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Excluded:  "),
            Span::styled(
                or_dash(constraints.excluded().to_string().to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("Untested:  "),
            Span::raw(or_dash(constraints.untested().to_string().to_uppercase())),
        ]),
        Line::from(vec![
            Span::raw("Rejected:  "),
            Span::styled(
                or_dash(app.session.invalid().sorted().join(" ").to_uppercase()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_eliminators(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .snapshot
        .eliminators
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {:>5} ", entry.score), Style::default().fg(Color::Cyan)),
                Span::raw(entry.category.to_string()),
                Span::styled(
                    format!(" [{}]", entry.tested_letters().to_string().to_uppercase()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Eliminators ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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
    let suggestion = app.snapshot.suggestion.as_ref().map_or_else(String::new, |s| {
        let kind = match s.kind {
            SuggestionKind::Candidate => "candidate",
            SuggestionKind::Eliminator => "eliminator",
        };
        format!("{} ({kind})", s.word.to_uppercase())
    });

    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guess => (
            format!(" Word played | Enter alone uses {suggestion} "),
            app.input_buffer.clone(),
            Color::Cyan,
        ),
        InputMode::Pattern => {
            let preview = app
                .pending_pattern()
                .map(|p| format!("  {}", p.to_emoji()))
                .unwrap_or_default();
            (
                format!(
                    " Feedback for {} (C/M/A, G/Y/-) | Esc cancels ",
                    app.current_word.as_deref().unwrap_or("").to_uppercase()
                ),
                format!("{}{preview}", app.input_buffer),
                Color::Yellow,
            )
        }
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
    let win_rate = if app.stats.games_played > 0 {
        app.stats.games_won as f64 / app.stats.games_played as f64 * 100.0
    } else {
        0.0
    };
    let status = format!(
        "Games: {} | Win rate: {win_rate:.0}% | Ctrl-R reject · Ctrl-U undo · Ctrl-N new · Esc quit",
        app.stats.games_played
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
