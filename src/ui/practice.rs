//! State of the practice screen: round settings, the live session and the answer being typed.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::Config;
use crate::models::Answer;
use crate::quiz::{self, QuizKind, RoundSettings, TestKind};
use crate::selection::{PromptSet, Selection};
use crate::session::{MatchStrategy, QuizSession};
use crate::tables::{Preset, ALPHABET};

/// Grid for hand-picking letters when the "Custom" range is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPicker {
    pub cursor: usize,
    pub chosen: BTreeSet<usize>,
}

impl LetterPicker {
    pub const COLUMNS: usize = 10;

    fn new(chosen: &BTreeSet<usize>) -> Self {
        Self {
            cursor: 0,
            chosen: chosen.clone(),
        }
    }

    pub fn toggle(&mut self) {
        if !self.chosen.remove(&self.cursor) {
            self.chosen.insert(self.cursor);
        }
    }

    /// Move the cursor by `dx` columns and `dy` rows, wrapping around the grid.
    pub fn move_by(&mut self, dx: isize, dy: isize) {
        let len = ALPHABET.len() as isize;
        let step = dx + dy * Self::COLUMNS as isize;
        self.cursor = (self.cursor as isize + step).rem_euclid(len) as usize;
    }
}

pub struct Practice {
    pub kind: QuizKind,
    pub session: QuizSession,
    pub preset: usize,
    pub custom: BTreeSet<usize>,
    pub randomize: bool,
    pub length: usize,
    pub input: String,
    pub tiles: Vec<String>,
    pub picked: Vec<String>,
    /// Picked sound selected for removal.
    pub picked_cursor: Option<usize>,
    pub picker: Option<LetterPicker>,
    /// Last configuration error, shown until the next successful change.
    pub error: Option<String>,
}

impl Practice {
    pub fn new<R: Rng + ?Sized>(kind: QuizKind, config: &Config, rng: &mut R) -> Self {
        let mut practice = Self {
            kind,
            session: QuizSession::new(PromptSet::default(), kind.strategy()),
            preset: 0,
            custom: BTreeSet::new(),
            randomize: config.randomize && kind.supports_randomize(),
            length: match kind {
                QuizKind::Arithmetic => config.arithmetic_rounds,
                _ => config.test_length,
            },
            input: String::new(),
            tiles: Vec::new(),
            picked: Vec::new(),
            picked_cursor: None,
            picker: None,
            error: None,
        };

        let warning = if kind == QuizKind::AlphabetSounds {
            practice.apply_configured_range(config)
        } else {
            None
        };
        practice.restart(rng);
        if practice.error.is_none() {
            practice.error = warning;
        }
        practice
    }

    /// Map the configured alphabet range onto a preset or the custom pick.
    fn apply_configured_range(&mut self, config: &Config) -> Option<String> {
        match config.alphabet_selection() {
            Ok(Selection::Range { start, end }) => {
                let presets = self.kind.presets();
                if let Some(i) = presets.iter().position(|p| p.bounds == Some((start, end))) {
                    self.preset = i;
                } else if let Some(i) = presets.iter().position(|p| p.bounds.is_none()) {
                    self.preset = i;
                    self.custom = (start..end).collect();
                }
            }
            Ok(Selection::Subset(indices)) => self.custom = indices,
            Err(e) => {
                log::warn!("ignoring alphabet_range {:?}: {}", config.alphabet_range, e);
                return Some(format!("alphabet_range: {}", e));
            }
        }
        None
    }

    pub fn current_preset(&self) -> Option<&'static Preset> {
        self.kind.presets().get(self.preset)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.current_preset()
            .map(|preset| Selection::from_preset(preset, &self.custom))
    }

    /// Build a fresh round from the current settings, dropping the old one.
    ///
    /// On a configuration error the previous round is kept.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let settings = RoundSettings {
            selection: self.selection(),
            randomize: self.randomize,
            length: self.length,
        };
        match quiz::build_round(self.kind, &settings, rng) {
            Ok(set) => {
                self.session.reset(set);
                self.error = None;
                self.prompt_changed(rng);
            }
            Err(e) => {
                log::warn!("could not configure {}: {}", self.kind.title(), e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn prompt_changed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.input.clear();
        self.picked.clear();
        self.picked_cursor = None;
        self.tiles = match self.session.current() {
            Some(prompt) if prompt.is_tiled() => quiz::tile_choices(prompt, rng),
            _ => Vec::new(),
        };
    }

    pub fn cycle_preset<R: Rng + ?Sized>(&mut self, forward: bool, rng: &mut R) {
        let count = self.kind.presets().len();
        if count == 0 {
            return;
        }
        self.preset = if forward {
            (self.preset + 1) % count
        } else {
            (self.preset + count - 1) % count
        };
        if self.current_preset().is_some_and(|p| p.bounds.is_none()) {
            self.picker = Some(LetterPicker::new(&self.custom));
        }
        self.restart(rng);
    }

    pub fn toggle_randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.kind.supports_randomize() {
            self.randomize = !self.randomize;
            self.restart(rng);
        }
    }

    pub fn cycle_test_kind<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let QuizKind::Test(test) = self.kind {
            self.set_test_kind(test.next(), rng);
        }
    }

    pub fn set_test_kind<R: Rng + ?Sized>(&mut self, test: TestKind, rng: &mut R) {
        if matches!(self.kind, QuizKind::Test(_)) {
            self.kind = QuizKind::Test(test);
            self.restart(rng);
        }
    }

    pub fn open_picker(&mut self) {
        self.picker = Some(LetterPicker::new(&self.custom));
    }

    /// Use the picker's letters as the custom range.
    pub fn apply_picker<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(picker) = self.picker.take() {
            self.custom = picker.chosen;
            self.restart(rng);
        }
    }

    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    pub fn type_char(&mut self, c: char) {
        if !self.session.awaiting_answer() || self.session.current().is_some_and(|p| p.is_tiled()) {
            return;
        }
        if self.session.current_strategy() == MatchStrategy::Numeric && !c.is_ascii_digit() {
            return;
        }
        self.input.push(c);
    }

    /// Pick the tile shown as number `n` (one-based).
    pub fn pick_tile(&mut self, n: usize) {
        if !self.session.awaiting_answer() {
            return;
        }
        let expected = self.session.current().map_or(0, |p| p.tokens.len());
        if let Some(tile) = n.checked_sub(1).and_then(|i| self.tiles.get(i)) {
            if self.picked.len() < expected {
                self.picked.push(tile.clone());
            }
        }
    }

    pub fn backspace(&mut self) {
        if !self.session.awaiting_answer() {
            return;
        }
        if self.picked.pop().is_some() {
            self.picked_cursor = self.picked_cursor.filter(|&i| i < self.picked.len());
        } else {
            self.input.pop();
        }
    }

    /// Select the previous or next picked sound, wrapping.
    pub fn move_picked_cursor(&mut self, forward: bool) {
        let len = self.picked.len();
        if len == 0 || !self.session.awaiting_answer() {
            self.picked_cursor = None;
            return;
        }
        self.picked_cursor = Some(match (self.picked_cursor, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    /// Remove the selected picked sound, or the last one when none is selected.
    pub fn remove_picked(&mut self) {
        if !self.session.awaiting_answer() || self.picked.is_empty() {
            return;
        }
        let index = self
            .picked_cursor
            .filter(|&i| i < self.picked.len())
            .unwrap_or(self.picked.len() - 1);
        self.picked.remove(index);
        self.picked_cursor = match self.picked.len() {
            0 => None,
            len => self.picked_cursor.map(|_| index.min(len - 1)),
        };
    }

    fn answer(&self) -> Answer {
        match self.session.current() {
            Some(prompt) if prompt.is_tiled() => Answer::Tokens(self.picked.clone()),
            _ => Answer::Text(self.input.clone()),
        }
    }

    /// Check the typed or picked answer. Blank answers are ignored.
    pub fn submit(&mut self, now: Instant, delay: Option<Duration>) -> bool {
        let answer = self.answer();
        if answer.is_blank() {
            return false;
        }
        if self.session.submit_answer(&answer).is_none() {
            return false;
        }
        if let Some(delay) = delay {
            self.session.schedule_advance(now, delay);
        }
        true
    }

    /// Skip the remaining feedback delay.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let moved = self.session.advance();
        if moved {
            self.prompt_changed(rng);
        }
        moved
    }

    /// Let a scheduled advance fire.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let moved = self.session.tick(now);
        if moved {
            self.prompt_changed(rng);
        }
        moved
    }

    /// Short description of the round's settings for the status bar.
    pub fn settings_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(preset) = self.current_preset() {
            if preset.bounds.is_none() {
                parts.push(format!("Custom ({})", self.custom.len()));
            } else {
                parts.push(format!("Range {}", preset.label));
            }
        }
        if let QuizKind::Test(test) = self.kind {
            parts.push(format!("{} test", test.name()));
        }
        if self.kind.supports_randomize() {
            parts.push(if self.randomize { "Random" } else { "In order" }.to_string());
        }
        parts.join(" · ")
    }
}
