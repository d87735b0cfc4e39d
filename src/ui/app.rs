//! Main application state and logic.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::practice::{LetterPicker, Practice};
use super::theme::{icons, Theme};
use super::widgets::{FeedbackBanner, KeyHints, Logo, PromptCard, ResultsScreen, SessionBar, TileButtons};
use crate::config::Config;
use crate::quiz::{QuizKind, TestKind};
use crate::session::{MatchStrategy, Phase};
use crate::tables::{search_numbers, ALPHABET};

// ══════════════════════════════════════════════════════════════════════════
// Application State
// ══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    AlphabetReference,
    NumberReference,
    Practice,
    Results,
}

/// Entries of the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AlphabetReference,
    NumberReference,
    Practice(QuizKind),
}

pub const MENU: [(MenuItem, &str, &str); 7] = [
    (MenuItem::AlphabetReference, "Alphabet", "letters, sounds and example words"),
    (MenuItem::Practice(QuizKind::AlphabetSounds), "Alphabet Practice", "type the sound of each letter"),
    (MenuItem::Practice(QuizKind::LetterMatching), "Letter Matching", "build words from their sounds"),
    (MenuItem::NumberReference, "Numbers", "0 to 100, searchable"),
    (MenuItem::Practice(QuizKind::Numbers), "Number Practice", "read the word, type the number"),
    (MenuItem::Practice(QuizKind::Arithmetic), "Math Practice", "add and subtract in Bulgarian"),
    (MenuItem::Practice(QuizKind::Test(TestKind::Alphabet)), "Knowledge Test", "ten questions, scored"),
];

pub struct App {
    pub screen: Screen,
    pub running: bool,

    // Config and theme
    pub config: Config,
    pub config_path: PathBuf,
    pub theme: Theme,

    rng: StdRng,

    // Home menu
    pub menu_state: ListState,

    // Reference screens
    pub letter_state: ListState,
    pub number_query: String,
    pub number_state: ListState,

    // Current round; dropping it drops any scheduled advance
    pub practice: Option<Practice>,

    // Status message (shown temporarily)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, rng: StdRng) -> Self {
        let theme = Theme::from_name(&config.theme);

        Self {
            screen: Screen::Home,
            running: true,
            config,
            config_path,
            theme,
            rng,
            menu_state: ListState::default().with_selected(Some(0)),
            letter_state: ListState::default().with_selected(Some(0)),
            number_query: String::new(),
            number_state: ListState::default().with_selected(Some(0)),
            practice: None,
            status_message: None,
        }
    }

    pub fn cycle_theme(&mut self) {
        let new_theme_name = self.theme.name.next();
        self.theme = Theme::new(new_theme_name);
        self.config.theme = new_theme_name.as_str().to_string();
        if let Err(e) = self.config.save_to(&self.config_path) {
            log::warn!("could not save config: {:#}", e);
            self.set_status(format!("Could not save config: {}", e));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    fn feedback_delay(&self) -> Option<Duration> {
        self.config.auto_advance.then(|| self.config.advance_delay())
    }

    pub fn open(&mut self, item: MenuItem) {
        match item {
            MenuItem::AlphabetReference => self.screen = Screen::AlphabetReference,
            MenuItem::NumberReference => {
                self.number_query.clear();
                self.number_state.select(Some(0));
                self.screen = Screen::NumberReference;
            }
            MenuItem::Practice(kind) => self.start_practice(kind),
        }
    }

    pub fn start_practice(&mut self, kind: QuizKind) {
        log::info!("starting {}", kind.title());
        self.practice = Some(Practice::new(kind, &self.config, &mut self.rng));
        self.screen = Screen::Practice;
    }

    /// Leave the practice screen, discarding the round.
    pub fn leave_practice(&mut self) {
        self.practice = None;
        self.screen = Screen::Home;
    }

    fn check_complete(&mut self) {
        if self.practice.as_ref().is_some_and(|p| p.session.is_complete()) {
            self.screen = Screen::Results;
        }
    }

    /// Advance the clock: fires a due auto-advance.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen != Screen::Practice {
            return;
        }
        if let Some(practice) = self.practice.as_mut() {
            if practice.tick(now, &mut self.rng) {
                self.check_complete();
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, Instant::now());
                }
            }
        }
        self.on_tick(Instant::now());
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match self.screen {
            Screen::Home => self.handle_home_keys(key),
            Screen::AlphabetReference => self.handle_alphabet_keys(key),
            Screen::NumberReference => self.handle_number_keys(key),
            Screen::Practice => self.handle_practice_keys(key, now),
            Screen::Results => self.handle_results_keys(key),
        }
    }

    fn handle_home_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => step_list(&mut self.menu_state, MENU.len(), false),
            KeyCode::Down | KeyCode::Char('j') => step_list(&mut self.menu_state, MENU.len(), true),
            KeyCode::Enter => {
                if let Some((item, _, _)) = self.menu_state.selected().and_then(|i| MENU.get(i)) {
                    self.open(*item);
                }
            }
            _ => {}
        }
    }

    fn handle_alphabet_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.screen = Screen::Home,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => step_list(&mut self.letter_state, ALPHABET.len(), false),
            KeyCode::Down | KeyCode::Char('j') => step_list(&mut self.letter_state, ALPHABET.len(), true),
            KeyCode::Char('p') => self.start_practice(QuizKind::AlphabetSounds),
            _ => {}
        }
    }

    fn handle_number_keys(&mut self, key: KeyCode) {
        let count = search_numbers(&self.number_query).len();
        match key {
            KeyCode::Esc => {
                if self.number_query.is_empty() {
                    self.screen = Screen::Home;
                } else {
                    self.number_query.clear();
                    self.number_state.select(Some(0));
                }
            }
            KeyCode::Up => step_list(&mut self.number_state, count, false),
            KeyCode::Down => step_list(&mut self.number_state, count, true),
            KeyCode::Backspace => {
                self.number_query.pop();
                self.number_state.select(Some(0));
            }
            KeyCode::Char(c) => {
                self.number_query.push(c);
                self.number_state.select(Some(0));
            }
            _ => {}
        }
    }

    fn handle_practice_keys(&mut self, key: KeyCode, now: Instant) {
        let delay = self.feedback_delay();
        let Some(practice) = self.practice.as_mut() else {
            self.screen = Screen::Home;
            return;
        };

        if practice.picker.is_some() {
            match key {
                KeyCode::Esc => practice.cancel_picker(),
                KeyCode::Enter => practice.apply_picker(&mut self.rng),
                _ => {
                    if let Some(picker) = practice.picker.as_mut() {
                        match key {
                            KeyCode::Char(' ') => picker.toggle(),
                            KeyCode::Left => picker.move_by(-1, 0),
                            KeyCode::Right => picker.move_by(1, 0),
                            KeyCode::Up => picker.move_by(0, -1),
                            KeyCode::Down => picker.move_by(0, 1),
                            _ => {}
                        }
                    }
                }
            }
            return;
        }

        match key {
            KeyCode::Esc => self.leave_practice(),
            KeyCode::Tab => match practice.kind {
                QuizKind::Test(_) => practice.cycle_test_kind(&mut self.rng),
                _ => practice.cycle_preset(true, &mut self.rng),
            },
            KeyCode::BackTab => practice.cycle_preset(false, &mut self.rng),
            KeyCode::F(2) => practice.toggle_randomize(&mut self.rng),
            KeyCode::F(3) => {
                if practice.current_preset().is_some_and(|p| p.bounds.is_none()) {
                    practice.open_picker();
                }
            }
            KeyCode::Enter => match practice.session.phase() {
                Phase::Feedback(_) => {
                    practice.advance(&mut self.rng);
                    self.check_complete();
                }
                Phase::InProgress => {
                    practice.submit(now, delay);
                }
                Phase::Idle | Phase::Complete => {}
            },
            KeyCode::Backspace => practice.backspace(),
            KeyCode::Left => practice.move_picked_cursor(false),
            KeyCode::Right => practice.move_picked_cursor(true),
            KeyCode::Delete => practice.remove_picked(),
            KeyCode::Char(c) => {
                let tiled = practice.session.current().is_some_and(|p| p.is_tiled());
                match c.to_digit(10) {
                    Some(n) if tiled => practice.pick_tile(n as usize),
                    _ => practice.type_char(c),
                }
            }
            _ => {}
        }
    }

    fn handle_results_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('r') => {
                if let Some(practice) = self.practice.as_mut() {
                    practice.restart(&mut self.rng);
                    self.screen = Screen::Practice;
                } else {
                    self.screen = Screen::Home;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.leave_practice(),
            _ => {}
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        match self.screen {
            Screen::Home => self.render_home(frame, area),
            Screen::AlphabetReference => self.render_alphabet(frame, area),
            Screen::NumberReference => self.render_numbers(frame, area),
            Screen::Practice => self.render_practice(frame, area),
            Screen::Results => self.render_results(frame, area),
        }
    }

    fn render_home(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),   // Top padding
            Constraint::Length(7),   // Logo
            Constraint::Length(1),   // Spacing
            Constraint::Min(5),      // Menu
            Constraint::Length(1),   // Status
            Constraint::Length(2),   // Help
        ])
        .split(area);

        Logo::render_to(&self.theme, chunks[1], frame.buffer_mut());

        let items: Vec<ListItem> = MENU
            .iter()
            .map(|(_, title, description)| {
                ListItem::new(Line::from(vec![
                    Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", description), self.theme.muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Start your language journey ")
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, centered_rect(70, 100, chunks[3]), &mut self.menu_state);

        self.render_status(frame, chunks[4]);

        let theme_hint = format!("[{}]", self.theme.name.display_name());
        let hints_data: [(&str, &str); 4] = [
            ("j/k", "nav"),
            ("Enter", "open"),
            ("t", &theme_hint),
            ("q", "quit"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[5]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some((ref msg, time)) = self.status_message {
            if time.elapsed().as_secs() < 5 {
                let status = Paragraph::new(msg.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.colors.warning));
                frame.render_widget(status, area);
            }
        }
    }

    fn render_alphabet(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(2),   // Hints
        ])
        .split(area);

        let title = Paragraph::new("Bulgarian Alphabet")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let main_chunks = Layout::horizontal([
            Constraint::Percentage(35),  // Letter list
            Constraint::Percentage(65),  // Letter details
        ])
        .split(chunks[1]);

        let items: Vec<ListItem> = ALPHABET
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.letter, self.theme.prompt()),
                    Span::styled(format!("  {}", entry.sound), self.theme.muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Letters ")
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, main_chunks[0], &mut self.letter_state);

        if let Some(entry) = self.letter_state.selected().and_then(|i| ALPHABET.get(i)) {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}  {}", entry.letter, entry.letter.to_lowercase()),
                    self.theme.prompt(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Sound: ", self.theme.muted()),
                    Span::styled(entry.sound, self.theme.highlight()),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Example: ", self.theme.muted()),
                    Span::styled(entry.word, self.theme.title()),
                ]),
                Line::from(vec![
                    Span::styled("Pronunciation: ", self.theme.muted()),
                    Span::styled(entry.pronunciation, Style::default().fg(self.theme.colors.text)),
                ]),
                Line::from(vec![
                    Span::styled("Translation: ", self.theme.muted()),
                    Span::styled(entry.translation, Style::default().fg(self.theme.colors.text)),
                ]),
            ];

            let details = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(self.theme.colors.accent))
                        .title(" Letter ")
                        .title_style(Style::default().fg(self.theme.colors.accent)),
                );
            frame.render_widget(details, main_chunks[1]);
        }

        let hints = KeyHints::new(&[
            ("j/k", "nav"),
            ("p", "practice"),
            ("Esc", "back"),
        ], &self.theme);
        frame.render_widget(hints, chunks[2]);
    }

    fn render_numbers(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),   // Title
            Constraint::Length(3),   // Search
            Constraint::Min(5),      // List
            Constraint::Length(2),   // Hints
        ])
        .split(centered_rect(60, 100, area));

        let title = Paragraph::new("Number Reference")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let search = Paragraph::new(self.number_query.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.field(true))
                .title(" Search numbers ")
                .title_style(self.theme.field(true)),
        );
        frame.render_widget(search, chunks[1]);
        frame.set_cursor_position((
            chunks[1].x + 1 + self.number_query.width() as u16,
            chunks[1].y + 1,
        ));

        let matches = search_numbers(&self.number_query);
        let items: Vec<ListItem> = matches
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>3}  ", entry.value), self.theme.highlight()),
                    Span::styled(entry.word.as_str(), Style::default().fg(self.theme.colors.text)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(format!(" {} numbers ", matches.len()))
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[2], &mut self.number_state);

        let hints = KeyHints::new(&[
            ("type", "search"),
            ("↑/↓", "nav"),
            ("Esc", "clear/back"),
        ], &self.theme);
        frame.render_widget(hints, chunks[3]);
    }

    fn render_practice(&mut self, frame: &mut Frame, area: Rect) {
        let Some(practice) = self.practice.as_ref() else {
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(2),   // Title
            Constraint::Length(1),   // Session bar
            Constraint::Length(1),   // Error line
            Constraint::Min(7),      // Prompt
            Constraint::Length(3),   // Answer field
            Constraint::Length(3),   // Tiles / feedback
            Constraint::Length(2),   // Hints
        ])
        .split(centered_rect(80, 100, area));

        let title = Paragraph::new(practice.kind.title())
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        frame.render_widget(
            SessionBar::new(
                practice.session.score(),
                practice.session.progress(),
                practice.settings_label(),
                &self.theme,
            ),
            chunks[1],
        );

        if let Some(error) = &practice.error {
            let error = Paragraph::new(error.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.colors.incorrect));
            frame.render_widget(error, chunks[2]);
        }

        match practice.session.current() {
            Some(prompt) => {
                frame.render_widget(PromptCard::new(prompt, &self.theme), chunks[3]);

                let awaiting = practice.session.awaiting_answer();
                let (label, content) = if prompt.is_tiled() {
                    (" Your sounds ", String::new())
                } else if practice.session.current_strategy() == MatchStrategy::Numeric {
                    (" Enter the number ", practice.input.clone())
                } else {
                    (" Type your answer ", practice.input.clone())
                };
                let line = if prompt.is_tiled() {
                    self.picked_line(practice)
                } else {
                    Line::from(content.as_str())
                };
                let field = Paragraph::new(line).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(self.theme.field(awaiting))
                        .title(label)
                        .title_style(self.theme.field(awaiting)),
                );
                frame.render_widget(field, chunks[4]);
                if awaiting && !prompt.is_tiled() && practice.picker.is_none() {
                    frame.set_cursor_position((
                        chunks[4].x + 1 + content.width() as u16,
                        chunks[4].y + 1,
                    ));
                }

                if let Some(verdict) = practice.session.feedback() {
                    frame.render_widget(FeedbackBanner::new(verdict, &self.theme), chunks[5]);
                } else if prompt.is_tiled() {
                    frame.render_widget(
                        TileButtons::new(&practice.tiles, awaiting, &self.theme),
                        chunks[5],
                    );
                }
            }
            None => {
                let empty = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled("No prompts selected", self.theme.title())),
                    Line::from(Span::styled(
                        "Pick a range or choose some letters to practice.",
                        self.theme.muted(),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(self.theme.colors.text_dim)),
                );
                frame.render_widget(empty, chunks[3]);
            }
        }

        let mut hints: Vec<(&str, &str)> = Vec::new();
        if practice.session.feedback().is_some() {
            hints.push(("Enter", "next"));
        } else if practice.session.current().is_some_and(|p| p.is_tiled()) {
            hints.extend([("1-9", "pick"), ("←/→", "select"), ("Del", "remove"), ("Enter", "check")]);
        } else {
            hints.push(("Enter", "check"));
        }
        if !practice.kind.presets().is_empty() {
            hints.push(("Tab", "range"));
        }
        if matches!(practice.kind, QuizKind::Test(_)) {
            hints.push(("Tab", "test type"));
        }
        if practice.kind.supports_randomize() {
            hints.push(("F2", icons::SHUFFLE));
        }
        if practice.current_preset().is_some_and(|p| p.bounds.is_none()) {
            hints.push(("F3", "letters"));
        }
        hints.push(("Esc", "back"));
        frame.render_widget(KeyHints::new(&hints, &self.theme), chunks[6]);

        if let Some(picker) = &practice.picker {
            self.render_picker(frame, area, picker);
        }
    }

    /// Picked sounds in order, the selected one highlighted.
    fn picked_line(&self, practice: &Practice) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, sound) in practice.picked.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", self.theme.muted()));
            }
            let style = if practice.picked_cursor == Some(i) {
                self.theme.selected().add_modifier(Modifier::BOLD)
            } else {
                self.theme.highlight()
            };
            spans.push(Span::styled(sound.clone(), style));
        }
        Line::from(spans)
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, picker: &LetterPicker) {
        let popup = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.theme.colors.accent))
            .style(Style::default().bg(self.theme.colors.bg_card))
            .title(format!(" Select Letters ({}) ", picker.chosen.len()))
            .title_style(self.theme.highlight())
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines: Vec<Line> = ALPHABET
            .chunks(LetterPicker::COLUMNS)
            .enumerate()
            .map(|(row, letters)| {
                let spans: Vec<Span> = letters
                    .iter()
                    .enumerate()
                    .flat_map(|(col, entry)| {
                        let index = row * LetterPicker::COLUMNS + col;
                        let mut style = self.theme.toggle(picker.chosen.contains(&index));
                        if index == picker.cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        [Span::styled(format!(" {} ", entry.letter), style), Span::raw(" ")]
                    })
                    .collect();
                Line::from(spans)
            })
            .flat_map(|line| [line, Line::from("")])
            .collect();
        lines.push(Line::from(vec![
            Span::styled("Space", self.theme.key_highlight()),
            Span::styled(" toggle  ", self.theme.key_hint()),
            Span::styled("Enter", self.theme.key_highlight()),
            Span::styled(" apply  ", self.theme.key_hint()),
            Span::styled("Esc", self.theme.key_highlight()),
            Span::styled(" cancel", self.theme.key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let Some(practice) = self.practice.as_ref() else {
            return;
        };
        let Some(band) = practice.session.band() else {
            return;
        };
        let card_area = centered_rect(60, 50, area);
        frame.render_widget(
            ResultsScreen::new(
                practice.kind.title(),
                practice.session.score(),
                practice.session.len(),
                band,
                &self.theme,
            ),
            card_area,
        );
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

/// Move a list selection one step, wrapping at both ends.
fn step_list(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = state.selected().unwrap_or(0).min(len - 1);
    let next = match (forward, i) {
        (true, i) if i + 1 >= len => 0,
        (true, i) => i + 1,
        (false, 0) => len - 1,
        (false, i) => i - 1,
    };
    state.select(Some(next));
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
