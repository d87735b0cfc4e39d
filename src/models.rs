//! Data models for reference entries, prompts and results.

use serde::Serialize;

use crate::session::MatchStrategy;

/// How hard a letter-matching word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
        }
    }
}

/// One letter of the alphabet with its Latin sound and an example word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlphabetEntry {
    pub letter: &'static str,
    pub sound: &'static str,
    pub word: &'static str,
    pub pronunciation: &'static str,
    pub translation: &'static str,
}

impl AlphabetEntry {
    /// "автобус (avtobus) - bus"
    pub fn example(&self) -> String {
        format!("{} ({}) - {}", self.word, self.pronunciation, self.translation)
    }
}

/// A number together with its spelled-out form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberEntry {
    pub value: u32,
    pub word: String,
}

/// A word broken into the Latin sounds of its letters, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchWord {
    pub bulgarian: &'static str,
    pub sounds: &'static [&'static str],
    pub translation: &'static str,
    pub difficulty: Difficulty,
}

/// A single question shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What is displayed: a letter, a word, or an arithmetic expression.
    pub text: String,
    /// Expected answer in its display form.
    pub answer: String,
    /// Expected ordered sound tokens; empty unless the prompt is answered with tiles.
    pub tokens: Vec<String>,
    /// Secondary line under the prompt (translation, difficulty).
    pub hint: Option<String>,
    /// Question asked about the prompt.
    pub instruction: &'static str,
    /// Overrides the session's strategy for this prompt.
    pub strategy: Option<MatchStrategy>,
}

impl Prompt {
    pub fn new(text: impl Into<String>, answer: impl Into<String>, instruction: &'static str) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            tokens: Vec::new(),
            hint: None,
            instruction,
            strategy: None,
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the prompt is answered by picking sound tiles.
    pub fn is_tiled(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// What the learner handed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Tokens(Vec<String>),
}

impl Answer {
    #[cfg(test)]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Tokens(t) => t.is_empty(),
        }
    }
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub expected: String,
}

/// Qualitative tier of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Perfect,
    Great,
    Good,
    KeepLearning,
}

impl Band {
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::KeepLearning;
        }
        if score >= total {
            Self::Perfect
        } else if score * 100 >= total * 80 {
            Self::Great
        } else if score * 100 >= total * 60 {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! Amazing work!",
            Self::Great => "Great job! Keep it up!",
            Self::Good => "Good effort! Keep practicing!",
            Self::KeepLearning => "Keep learning! You'll improve!",
        }
    }
}

/// Score as a rounded percentage.
pub fn percent(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (score * 200 + total) / (2 * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_percentage_thresholds() {
        assert_eq!(Band::from_score(10, 10), Band::Perfect);
        assert_eq!(Band::from_score(9, 10), Band::Great);
        assert_eq!(Band::from_score(8, 10), Band::Great);
        assert_eq!(Band::from_score(7, 10), Band::Good);
        assert_eq!(Band::from_score(6, 10), Band::Good);
        assert_eq!(Band::from_score(5, 10), Band::KeepLearning);
        assert_eq!(Band::from_score(3, 10), Band::KeepLearning);
    }

    #[test]
    fn empty_round_is_not_perfect() {
        assert_eq!(Band::from_score(0, 0), Band::KeepLearning);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn blank_answers() {
        assert!(Answer::text("   ").is_blank());
        assert!(Answer::Tokens(Vec::new()).is_blank());
        assert!(!Answer::text("ya").is_blank());
    }
}
