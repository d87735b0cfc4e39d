//! The quiz session: one linear pass through a prompt set with a running score.

use std::time::{Duration, Instant};

use crate::models::{Answer, Band, Prompt, Verdict};
use crate::selection::PromptSet;

/// How an answer is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Trimmed, case-insensitive string equality.
    Exact,
    /// Integer equality of the parsed input.
    Numeric,
    /// Ordered equality of sound tokens.
    TokenSequence,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl MatchStrategy {
    pub fn matches(&self, prompt: &Prompt, answer: &Answer) -> bool {
        match self {
            Self::Exact => normalize(&answer_text(answer)) == normalize(&prompt.answer),
            Self::Numeric => {
                let given = answer_text(answer);
                match (given.trim().parse::<i64>(), prompt.answer.trim().parse::<i64>()) {
                    (Ok(given), Ok(expected)) => given == expected,
                    (Err(_), Ok(_)) => false,
                    _ => normalize(&given) == normalize(&prompt.answer),
                }
            }
            Self::TokenSequence => {
                let expected: Vec<String> = if prompt.tokens.is_empty() {
                    prompt.answer.split_whitespace().map(normalize).collect()
                } else {
                    prompt.tokens.iter().map(|t| normalize(t)).collect()
                };
                let given: Vec<String> = match answer {
                    Answer::Tokens(tokens) => tokens.iter().map(|t| normalize(t)).collect(),
                    Answer::Text(text) => text.split_whitespace().map(normalize).collect(),
                };
                given == expected
            }
        }
    }
}

fn answer_text(answer: &Answer) -> String {
    match answer {
        Answer::Text(text) => text.clone(),
        Answer::Tokens(tokens) => tokens.concat(),
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No prompts were selected.
    Idle,
    /// Waiting for an answer to the current prompt.
    InProgress,
    /// The current prompt was answered; the result is on screen.
    Feedback(Verdict),
    /// Every prompt has been answered.
    Complete,
}

/// Drives one round over a [`PromptSet`].
///
/// Invariants: `position < len` while in progress, `score <= answered <= position + 1`,
/// and feedback is cleared before the position moves. A pending delayed advance
/// belongs to the session and is dropped by [`QuizSession::reset`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    prompts: PromptSet,
    strategy: MatchStrategy,
    position: usize,
    score: usize,
    answered: usize,
    phase: Phase,
    pending_advance: Option<Instant>,
}

impl QuizSession {
    pub fn new(prompts: PromptSet, strategy: MatchStrategy) -> Self {
        let mut session = Self {
            prompts: PromptSet::default(),
            strategy,
            position: 0,
            score: 0,
            answered: 0,
            phase: Phase::Idle,
            pending_advance: None,
        };
        session.reset(prompts);
        session
    }

    /// Discard the current round and start over with `prompts`.
    pub fn reset(&mut self, prompts: PromptSet) {
        self.pending_advance = None;
        self.position = 0;
        self.score = 0;
        self.answered = 0;
        self.phase = if prompts.is_empty() {
            Phase::Idle
        } else {
            Phase::InProgress
        };
        self.prompts = prompts;
        log::debug!("session reset with {} prompts", self.prompts.len());
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Whether an answer would currently be accepted.
    pub fn awaiting_answer(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// The prompt on screen, if a round is running.
    pub fn current(&self) -> Option<&Prompt> {
        match self.phase {
            Phase::InProgress | Phase::Feedback(_) => self.prompts.get(self.position),
            Phase::Idle | Phase::Complete => None,
        }
    }

    /// How the prompt on screen is checked.
    pub fn current_strategy(&self) -> MatchStrategy {
        self.current()
            .and_then(|prompt| prompt.strategy)
            .unwrap_or(self.strategy)
    }

    /// The verdict being shown, if any.
    pub fn feedback(&self) -> Option<&Verdict> {
        match &self.phase {
            Phase::Feedback(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// One-based "N of M" progress.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current().map(|_| (self.position + 1, self.prompts.len()))
    }

    /// Check `answer` against the current prompt.
    ///
    /// Returns `None` when no answer is expected, so a prompt is never scored twice.
    pub fn submit_answer(&mut self, answer: &Answer) -> Option<Verdict> {
        if self.phase != Phase::InProgress {
            return None;
        }
        let prompt = self.prompts.get(self.position)?;
        let correct = prompt.strategy.unwrap_or(self.strategy).matches(prompt, answer);
        let verdict = Verdict {
            correct,
            expected: prompt.answer.clone(),
        };
        self.answered += 1;
        if correct {
            self.score += 1;
        }
        log::debug!(
            "prompt {} of {}: {:?} -> {}",
            self.position + 1,
            self.prompts.len(),
            answer,
            if correct { "correct" } else { "incorrect" }
        );
        self.phase = Phase::Feedback(verdict.clone());
        Some(verdict)
    }

    /// Move past the answered prompt, finishing the round after the last one.
    ///
    /// Only has an effect while feedback is shown; returns whether it did.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.phase, Phase::Feedback(_)) {
            return false;
        }
        self.pending_advance = None;
        if self.position + 1 >= self.prompts.len() {
            self.phase = Phase::Complete;
            log::info!(
                "round complete: {} correct of {} answered",
                self.score,
                self.answered
            );
        } else {
            self.position += 1;
            self.phase = Phase::InProgress;
        }
        true
    }

    /// Arrange for [`QuizSession::tick`] to advance once `delay` has passed.
    pub fn schedule_advance(&mut self, now: Instant, delay: Duration) {
        if matches!(self.phase, Phase::Feedback(_)) {
            self.pending_advance = Some(now + delay);
        }
    }

    /// Fire the scheduled advance if it is due. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_advance {
            Some(deadline) if now >= deadline => self.advance(),
            _ => false,
        }
    }

    /// Result tier, once the round is over.
    pub fn band(&self) -> Option<Band> {
        self.is_complete()
            .then(|| Band::from_score(self.score, self.prompts.len()))
    }
}

#[cfg(test)]
impl QuizSession {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn pending_advance(&self) -> Option<Instant> {
        self.pending_advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use crate::tables::ALPHABET;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn letter_prompts() -> Vec<Prompt> {
        ALPHABET
            .iter()
            .map(|e| Prompt::new(e.letter, e.sound, "What sound does this letter make?"))
            .collect()
    }

    fn session_of(answers: &[&str], strategy: MatchStrategy) -> QuizSession {
        let prompts: Vec<Prompt> = answers
            .iter()
            .enumerate()
            .map(|(i, a)| Prompt::new(format!("q{i}"), *a, "?"))
            .collect();
        QuizSession::new(prompts.into(), strategy)
    }

    #[test]
    fn first_five_letters_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = PromptSet::configure(&letter_prompts(), &Selection::range(0, 5), false, &mut rng)
            .unwrap();
        let letters: Vec<&str> = set.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(letters, vec!["А", "Б", "В", "Г", "Д"]);

        let mut session = QuizSession::new(set, MatchStrategy::Exact);
        assert_eq!(session.current().unwrap().text, "А");
        let verdict = session.submit_answer(&Answer::text("a")).unwrap();
        assert!(verdict.correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let mut session = session_of(&["ya", "ya"], MatchStrategy::Exact);
        assert!(session.submit_answer(&Answer::text("YA")).unwrap().correct);
        session.advance();
        assert!(session.submit_answer(&Answer::text("  ya ")).unwrap().correct);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn numeric_match_parses_integers() {
        let prompt = Prompt::new("седем", "7", "?");
        assert!(MatchStrategy::Numeric.matches(&prompt, &Answer::text("7")));
        assert!(MatchStrategy::Numeric.matches(&prompt, &Answer::text(" 07 ")));
        assert!(!MatchStrategy::Numeric.matches(&prompt, &Answer::text("8")));
        assert!(!MatchStrategy::Numeric.matches(&prompt, &Answer::text("seven")));
    }

    #[test]
    fn token_sequence_requires_order() {
        let prompt = Prompt::new("юни", "yuni", "?").with_tokens(["yu", "n", "i"]);
        let tokens = |t: &[&str]| Answer::Tokens(t.iter().map(|s| s.to_string()).collect());
        assert!(MatchStrategy::TokenSequence.matches(&prompt, &tokens(&["yu", "n", "i"])));
        assert!(MatchStrategy::TokenSequence.matches(&prompt, &tokens(&["YU", "N", "I"])));
        assert!(!MatchStrategy::TokenSequence.matches(&prompt, &tokens(&["n", "yu", "i"])));
        assert!(!MatchStrategy::TokenSequence.matches(&prompt, &tokens(&["yu", "n"])));
        // Concatenation alone is not enough: "y" "u" is not the token "yu".
        assert!(!MatchStrategy::TokenSequence.matches(&prompt, &tokens(&["y", "u", "n", "i"])));
        assert!(MatchStrategy::TokenSequence.matches(&prompt, &Answer::text("yu n i")));
    }

    #[test]
    fn resubmission_does_not_double_score() {
        let mut session = session_of(&["a", "b"], MatchStrategy::Exact);
        assert!(session.submit_answer(&Answer::text("a")).is_some());
        assert!(session.submit_answer(&Answer::text("a")).is_none());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn walks_through_to_complete() {
        let mut session = session_of(&["a", "b", "c"], MatchStrategy::Exact);
        assert_eq!(session.progress(), Some((1, 3)));
        assert!(!session.advance(), "cannot advance before answering");

        for (i, answer) in ["a", "x", "c"].iter().enumerate() {
            assert_eq!(session.phase(), &Phase::InProgress);
            assert_eq!(session.position(), i);
            session.submit_answer(&Answer::text(*answer));
            assert!(session.feedback().is_some());
            assert!(session.advance());
            assert!(session.feedback().is_none());
        }

        assert!(session.is_complete());
        assert!(session.current().is_none());
        assert_eq!(session.score(), 2);
        assert_eq!(session.band(), Some(Band::Good));
        assert!(session.submit_answer(&Answer::text("c")).is_none());
        assert!(!session.advance());
    }

    #[test]
    fn empty_set_is_idle() {
        let mut session = QuizSession::new(PromptSet::default(), MatchStrategy::Exact);
        assert_eq!(session.phase(), &Phase::Idle);
        assert!(session.current().is_none());
        assert!(session.submit_answer(&Answer::text("a")).is_none());
        assert!(session.band().is_none());
    }

    #[test]
    fn reset_restarts_and_cancels_pending_advance() {
        let now = Instant::now();
        let mut session = session_of(&["a", "b"], MatchStrategy::Exact);
        session.submit_answer(&Answer::text("a"));
        session.schedule_advance(now, Duration::from_millis(1500));
        assert!(session.pending_advance().is_some());

        session.reset(vec![Prompt::new("x", "x", "?")].into());
        assert!(session.pending_advance().is_none());
        assert_eq!(session.score(), 0);
        assert_eq!(session.position(), 0);
        assert!(!session.tick(now + Duration::from_secs(5)));
        assert_eq!(session.phase(), &Phase::InProgress);

        session.reset(PromptSet::default());
        assert_eq!(session.phase(), &Phase::Idle);
    }

    #[test]
    fn tick_fires_only_after_deadline() {
        let now = Instant::now();
        let delay = Duration::from_millis(1500);
        let mut session = session_of(&["a", "b"], MatchStrategy::Exact);

        session.schedule_advance(now, delay);
        assert!(session.pending_advance().is_none(), "nothing to advance yet");

        session.submit_answer(&Answer::text("a"));
        session.schedule_advance(now, delay);
        assert!(!session.tick(now + Duration::from_millis(1000)));
        assert_eq!(session.position(), 0);
        assert!(session.tick(now + delay));
        assert_eq!(session.position(), 1);
        assert!(session.pending_advance().is_none());
        assert!(!session.tick(now + delay * 2));
    }

    #[test]
    fn manual_advance_cancels_timer() {
        let now = Instant::now();
        let mut session = session_of(&["a", "b", "c"], MatchStrategy::Exact);
        session.submit_answer(&Answer::text("a"));
        session.schedule_advance(now, Duration::from_millis(1500));
        session.advance();
        session.submit_answer(&Answer::text("b"));
        // The old deadline must not skip the freshly answered prompt.
        assert!(!session.tick(now + Duration::from_secs(2)));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let mut session = session_of(&["a", "b", "c", "d"], MatchStrategy::Exact);
            for _ in 0..20 {
                if rng.random_bool(0.5) {
                    let guess = ["a", "b", "c", "d"][rng.random_range(0..4)];
                    session.submit_answer(&Answer::text(guess));
                } else {
                    session.advance();
                }
                assert!(session.score() <= session.answered());
                assert!(session.answered() <= session.position() + 1);
            }
        }
    }
}
