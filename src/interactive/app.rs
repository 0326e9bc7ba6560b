//! TUI application state and logic

use crate::core::{Observation, Pattern, WORD_LEN, Word};
use crate::game::{GameStatus, MAX_ATTEMPTS, Session};
use crate::solver::{Assistant, ConstraintSet, EliminatorEntry, Suggestion, SuggestionKind};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most messages kept in the message panel
const MAX_MESSAGES: usize = 6;

/// What the input line is currently collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the feedback for `App::current_word`
    Pattern,
    /// Game finished; waiting for a new game or quit
    GameOver,
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

/// Results across games in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `distribution[i]` counts wins in `i + 1` guesses
    pub distribution: [usize; MAX_ATTEMPTS],
}

/// Analysis of the current board, recomputed after every change
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub constraints: ConstraintSet,
    pub candidates: Vec<String>,
    pub eliminators: Vec<EliminatorEntry>,
    pub suggestion: Option<Suggestion>,
}

/// Application state
pub struct App<'a> {
    pub assistant: Assistant<'a>,
    pub session: Session,
    pub snapshot: Snapshot,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Word whose feedback is being entered
    pub current_word: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        let assistant = Assistant::new(dictionary);
        let session = Session::new();
        let snapshot = Self::analyze(&assistant, &session);

        Self {
            assistant,
            session,
            snapshot,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            current_word: None,
            messages: vec![
                Message {
                    text: "Type the word you played, or press Enter to use the suggestion."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Ctrl-R rejected word · Ctrl-U undo · Ctrl-N new game · Esc quit"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    fn analyze(assistant: &Assistant<'_>, session: &Session) -> Snapshot {
        let analysis = assistant.analyze(session.observations(), session.invalid());
        let suggestion = match session.pending_openers().first() {
            Some(opener) => Some(Suggestion {
                word: (*opener).to_string(),
                kind: SuggestionKind::Candidate,
            }),
            None => assistant.suggest(&analysis, session.attempts_left()),
        };

        Snapshot {
            candidates: analysis
                .candidates
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            eliminators: analysis.eliminators,
            constraints: analysis.constraints,
            suggestion,
        }
    }

    /// Recompute the analysis after the session changed
    pub fn refresh(&mut self) {
        self.snapshot = Self::analyze(&self.assistant, &self.session);
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Accept the typed word (or the suggestion when nothing was typed)
    pub fn submit_guess(&mut self) {
        let typed = self.input_buffer.trim().to_lowercase();
        let word = if typed.is_empty() {
            match &self.snapshot.suggestion {
                Some(suggestion) => suggestion.word.clone(),
                None => {
                    self.add_message("No suggestion available", MessageStyle::Error);
                    return;
                }
            }
        } else {
            typed
        };

        match Word::new(word.as_str()) {
            Ok(word) => {
                self.add_message(
                    format!("Enter feedback for {}", word.text().to_uppercase()),
                    MessageStyle::Info,
                );
                self.current_word = Some(word.text().to_string());
                self.input_mode = InputMode::Pattern;
                self.input_buffer.clear();
            }
            Err(e) => self.add_message(format!("{}: {e}", word.to_uppercase()), MessageStyle::Error),
        }
    }

    /// Record the typed pattern for the current word
    pub fn submit_pattern(&mut self) {
        let Some(word) = self.current_word.clone() else {
            self.input_mode = InputMode::Guess;
            return;
        };
        let observation = match Observation::from_parts(&word, &self.input_buffer) {
            Ok(observation) => observation,
            Err(e) => {
                self.add_message(format!("Invalid pattern: {e}"), MessageStyle::Error);
                return;
            }
        };

        match self.session.record(observation) {
            Ok(status) => {
                self.current_word = None;
                self.input_buffer.clear();
                self.refresh();
                self.after_record(&status);
            }
            Err(e) => {
                self.add_message(e.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn after_record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Solved { word, attempts } => {
                self.stats.games_played += 1;
                self.stats.games_won += 1;
                self.stats.distribution[attempts - 1] += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    format!("🎉 Solved {} in {attempts}!", word.to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::OutOfAttempts => {
                self.stats.games_played += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message("Out of attempts.", MessageStyle::Error);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress { .. } => {
                self.input_mode = InputMode::Guess;
                if self.snapshot.candidates.is_empty() {
                    self.add_message(
                        "No matches. A pattern may be wrong: Ctrl-U to undo.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        format!("{} candidates remaining", self.snapshot.candidates.len()),
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    /// Mark the word being entered as refused by the game
    pub fn reject_current(&mut self) {
        let word = match (&self.current_word, self.input_mode) {
            (Some(word), InputMode::Pattern) => word.clone(),
            _ => self.input_buffer.trim().to_lowercase(),
        };
        if word.len() != WORD_LEN {
            self.add_message("Nothing to reject", MessageStyle::Error);
            return;
        }

        self.session.reject(&word);
        self.current_word = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
        self.refresh();
        self.add_message(
            format!("{} marked as not accepted", word.to_uppercase()),
            MessageStyle::Info,
        );
    }

    /// Take back the last row of a game still in progress
    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::GameOver {
            self.add_message("Game over: press 'n' for a new game.", MessageStyle::Error);
            return;
        }
        match self.session.undo() {
            Some(observation) => {
                self.current_word = None;
                self.input_buffer.clear();
                self.input_mode = InputMode::Guess;
                self.refresh();
                self.add_message(format!("Undid {observation}"), MessageStyle::Info);
            }
            None => self.add_message("Nothing to undo!", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.current_word = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
        self.messages.clear();
        self.refresh();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.reject_current(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LEN => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Pattern => match key.code {
                KeyCode::Esc => {
                    self.current_word = None;
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Guess;
                }
                KeyCode::Char(c) if self.input_buffer.chars().count() < WORD_LEN => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_pattern(),
                _ => {}
            },
        }
    }

    /// Preview of the pattern being typed, if it parses
    #[must_use]
    pub fn pending_pattern(&self) -> Option<Pattern> {
        Pattern::parse(&self.input_buffer).ok()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::debug!(
                played = app.stats.games_played,
                won = app.stats.games_won,
                "leaving tui"
            );
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn dictionary() -> Vec<Word> {
        words_from_slice(&[
            "moist", "lunch", "ready", "batty", "fatty", "salty", "flout", "dusty", "crane",
        ])
    }

    #[test]
    fn enter_on_empty_line_takes_the_opener() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Pattern);
        assert_eq!(app.current_word.as_deref(), Some("moist"));
    }

    #[test]
    fn typed_guess_and_pattern_are_recorded() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "AAMAA");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.attempts(), 1);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.snapshot.candidates, ["batty", "fatty", "salty"]);
        assert!(!app.snapshot.eliminators.is_empty());
    }

    #[test]
    fn bad_pattern_keeps_pattern_mode() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "AAXAA");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Pattern);
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn rejecting_does_not_use_an_attempt() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "batty");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'r');

        assert_eq!(app.session.attempts(), 0);
        assert!(app.session.invalid().contains("batty"));
        assert!(!app.snapshot.candidates.contains(&"batty".to_string()));
        assert_eq!(app.input_mode, InputMode::Guess);
    }

    #[test]
    fn solving_ends_the_game() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "salty");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "CCCCC");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.distribution[0], 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn finished_game_cannot_be_undone_and_counted_twice() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "salty");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "CCCCC");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::GameOver);

        ctrl(&mut app, 'u');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.attempts(), 1);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.distribution[0], 1);
    }

    #[test]
    fn undo_and_quit() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "AAMAA");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'u');
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.snapshot.candidates.len(), dictionary.len());

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn escape_in_pattern_mode_cancels_the_word() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary);

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert!(!app.should_quit);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.current_word.is_none());
    }
}
