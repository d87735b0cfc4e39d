//! Practice modes and how each one turns the reference tables into prompts.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::arithmetic::ArithmeticProblem;
use crate::error::RoundError;
use crate::models::{AlphabetEntry, MatchWord, NumberEntry, Prompt};
use crate::selection::{PromptSet, Selection};
use crate::session::MatchStrategy;
use crate::tables::{Preset, ALPHABET, ALPHABET_PRESETS, MATCH_WORDS, NUMBERS, NUMBER_PRESETS};

/// Which pool the knowledge test draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Alphabet,
    Numbers,
    Mixed,
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alphabet => "Alphabet",
            Self::Numbers => "Numbers",
            Self::Mixed => "Mixed",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Alphabet => Self::Numbers,
            Self::Numbers => Self::Mixed,
            Self::Mixed => Self::Alphabet,
        }
    }
}

/// A practice mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    AlphabetSounds,
    Numbers,
    Arithmetic,
    LetterMatching,
    Test(TestKind),
}

impl QuizKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AlphabetSounds => "Alphabet Practice",
            Self::Numbers => "Number Practice",
            Self::Arithmetic => "Math Practice",
            Self::LetterMatching => "Letter Matching",
            Self::Test(_) => "Knowledge Test",
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        match self {
            Self::AlphabetSounds | Self::Test(_) => MatchStrategy::Exact,
            Self::Numbers | Self::Arithmetic => MatchStrategy::Numeric,
            Self::LetterMatching => MatchStrategy::TokenSequence,
        }
    }

    /// Range presets offered for this mode; empty when the mode has none.
    pub fn presets(&self) -> &'static [Preset] {
        match self {
            Self::AlphabetSounds => &ALPHABET_PRESETS,
            Self::Numbers => &NUMBER_PRESETS,
            _ => &[],
        }
    }

    pub fn supports_randomize(&self) -> bool {
        matches!(self, Self::AlphabetSounds | Self::Numbers)
    }
}

/// Options for building one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSettings {
    /// Table entries to use; `None` means the whole table.
    pub selection: Option<Selection>,
    pub randomize: bool,
    /// Number of prompts for generated rounds (arithmetic, test).
    pub length: usize,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            selection: None,
            randomize: false,
            length: 10,
        }
    }
}

pub fn letter_prompt(entry: &AlphabetEntry) -> Prompt {
    Prompt::new(entry.letter, entry.sound, "What sound does this letter make?")
}

pub fn number_prompt(entry: &NumberEntry) -> Prompt {
    Prompt::new(entry.word.clone(), entry.value.to_string(), "What number is this?")
}

pub fn arithmetic_prompt(problem: &ArithmeticProblem) -> Prompt {
    Prompt::new(problem.question(), problem.result.to_string(), "Solve it and answer in digits")
}

pub fn match_prompt(word: &MatchWord) -> Prompt {
    Prompt::new(word.bulgarian, word.sounds.join(" "), "Pick the sounds in order")
        .with_hint(format!("\"{}\" · {}", word.translation, word.difficulty.name()))
        .with_tokens(word.sounds.iter().copied())
}

fn translation_prompt(word: &str, translation: &str) -> Prompt {
    Prompt::new(word, translation, "Translate to English")
}

fn whole(len: usize) -> Selection {
    Selection::range(0, len)
}

/// Build the prompt set for one round of `kind`.
pub fn build_round<R: Rng + ?Sized>(
    kind: QuizKind,
    settings: &RoundSettings,
    rng: &mut R,
) -> Result<PromptSet, RoundError> {
    let set = match kind {
        QuizKind::AlphabetSounds => {
            let source: Vec<Prompt> = ALPHABET.iter().map(letter_prompt).collect();
            let selection = settings.selection.clone().unwrap_or_else(|| whole(source.len()));
            PromptSet::configure(&source, &selection, settings.randomize, rng)?
        }
        QuizKind::Numbers => {
            let source: Vec<Prompt> = NUMBERS.iter().map(number_prompt).collect();
            let selection = settings.selection.clone().unwrap_or_else(|| whole(source.len()));
            PromptSet::configure(&source, &selection, settings.randomize, rng)?
        }
        QuizKind::Arithmetic => (0..settings.length)
            .map(|_| ArithmeticProblem::generate(&mut *rng).map(|p| arithmetic_prompt(&p)))
            .collect::<Result<Vec<_>, _>>()?
            .into(),
        QuizKind::LetterMatching => {
            let source: Vec<Prompt> = MATCH_WORDS.iter().map(match_prompt).collect();
            PromptSet::configure(&source, &whole(source.len()), true, rng)?
        }
        QuizKind::Test(test) => {
            let mut pool = test_pool(test);
            pool.shuffle(rng);
            pool.truncate(settings.length);
            pool.into()
        }
    };
    log::info!("built {} round with {} prompts", kind.title(), set.len());
    Ok(set)
}

fn test_pool(kind: TestKind) -> Vec<Prompt> {
    let mut pool = Vec::new();
    if matches!(kind, TestKind::Alphabet | TestKind::Mixed) {
        let mut seen = std::collections::HashSet::new();
        let words = ALPHABET
            .iter()
            .map(|e| (e.word, e.translation))
            .chain(MATCH_WORDS.iter().map(|w| (w.bulgarian, w.translation)));
        for (word, translation) in words {
            if seen.insert(word) {
                pool.push(translation_prompt(word, translation));
            }
        }
    }
    if matches!(kind, TestKind::Numbers | TestKind::Mixed) {
        pool.extend(NUMBERS.iter().map(|e| {
            Prompt::new(e.word.clone(), e.value.to_string(), "Convert to a number")
                .with_strategy(MatchStrategy::Numeric)
        }));
    }
    pool
}

/// Sound tiles offered for a letter-matching prompt: its distinct tokens, shuffled.
pub fn tile_choices<R: Rng + ?Sized>(prompt: &Prompt, rng: &mut R) -> Vec<String> {
    let mut tiles: Vec<String> = Vec::new();
    for token in &prompt.tokens {
        if !tiles.contains(token) {
            tiles.push(token.clone());
        }
    }
    tiles.shuffle(rng);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProblemError, SelectionError};
    use crate::models::Answer;
    use crate::session::QuizSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    #[test]
    fn alphabet_round_uses_selection() {
        let settings = RoundSettings {
            selection: Some("0-5".parse().unwrap()),
            ..Default::default()
        };
        let set = build_round(QuizKind::AlphabetSounds, &settings, &mut rng()).unwrap();
        let answers: Vec<&str> = set.iter().map(|p| p.answer.as_str()).collect();
        assert_eq!(answers, vec!["a", "b", "v", "g", "d"]);
    }

    #[test]
    fn alphabet_round_rejects_bad_range() {
        let settings = RoundSettings {
            selection: Some(Selection::range(20, 40)),
            ..Default::default()
        };
        assert_eq!(
            build_round(QuizKind::AlphabetSounds, &settings, &mut rng()),
            Err(RoundError::Selection(SelectionError::OutOfBounds { index: 40, len: 30 }))
        );
    }

    #[test]
    fn number_preset_is_inclusive_of_its_label() {
        let preset = NUMBER_PRESETS[1];
        let settings = RoundSettings {
            selection: Some(Selection::from_preset(&preset, &Default::default())),
            ..Default::default()
        };
        let set = build_round(QuizKind::Numbers, &settings, &mut rng()).unwrap();
        let values: Vec<&str> = set.iter().map(|p| p.answer.as_str()).collect();
        assert_eq!(values.first(), Some(&"11"));
        assert_eq!(values.last(), Some(&"20"));
        assert_eq!(set.get(0).unwrap().text, "единадесет");
    }

    #[test]
    fn arithmetic_round_has_requested_length() {
        let settings = RoundSettings {
            length: 4,
            ..Default::default()
        };
        let set = build_round(QuizKind::Arithmetic, &settings, &mut rng()).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|p| p.answer.parse::<u32>().unwrap() <= 100));
    }

    #[test]
    fn letter_matching_covers_every_word() {
        let set = build_round(QuizKind::LetterMatching, &RoundSettings::default(), &mut rng())
            .unwrap();
        assert_eq!(set.len(), MATCH_WORDS.len());
        assert!(set.iter().all(Prompt::is_tiled));

        let mut session = QuizSession::new(set, QuizKind::LetterMatching.strategy());
        let tokens = session.current().unwrap().tokens.clone();
        assert!(session.submit_answer(&Answer::Tokens(tokens)).unwrap().correct);
    }

    #[test]
    fn test_rounds_are_truncated_and_typed() {
        let settings = RoundSettings::default();
        let alphabet = build_round(QuizKind::Test(TestKind::Alphabet), &settings, &mut rng()).unwrap();
        assert_eq!(alphabet.len(), 10);
        assert!(alphabet.iter().all(|p| p.instruction == "Translate to English"));

        let numbers = build_round(QuizKind::Test(TestKind::Numbers), &settings, &mut rng()).unwrap();
        assert!(numbers.iter().all(|p| p.answer.parse::<u32>().is_ok()));

        let short = RoundSettings {
            length: 500,
            ..Default::default()
        };
        let mixed = build_round(QuizKind::Test(TestKind::Mixed), &short, &mut rng()).unwrap();
        assert_eq!(mixed.len(), test_pool(TestKind::Mixed).len());
    }

    #[test]
    fn mixed_test_checks_numbers_numerically() {
        let pool = test_pool(TestKind::Mixed);
        let seven = pool.iter().find(|p| p.text == "седем").unwrap().clone();
        let word = pool.iter().find(|p| p.text == "вода").unwrap().clone();
        assert_eq!(seven.strategy, Some(MatchStrategy::Numeric));
        assert_eq!(word.strategy, None);

        let strategy = QuizKind::Test(TestKind::Mixed).strategy();
        let mut session = QuizSession::new(vec![seven, word].into(), strategy);
        assert_eq!(session.current_strategy(), MatchStrategy::Numeric);
        assert!(session.submit_answer(&Answer::text("07")).unwrap().correct);
        session.advance();
        assert_eq!(session.current_strategy(), MatchStrategy::Exact);
        assert!(session.submit_answer(&Answer::text(" Water ")).unwrap().correct);
    }

    #[test]
    fn problem_errors_surface_as_round_errors() {
        let err = RoundError::from(ProblemError::Negative { left: 3, right: 5 });
        assert_eq!(err.to_string(), "3 - 5 would be negative");
    }

    #[test]
    fn test_pool_has_no_duplicate_words() {
        let pool = test_pool(TestKind::Alphabet);
        let mut words: Vec<&str> = pool.iter().map(|p| p.text.as_str()).collect();
        let before = words.len();
        words.sort();
        words.dedup();
        assert_eq!(words.len(), before);
    }

    #[test]
    fn tiles_are_distinct_tokens() {
        let prompt = match_prompt(&MATCH_WORDS[0]);
        let mut tiles = tile_choices(&prompt, &mut rng());
        tiles.sort();
        assert_eq!(tiles, vec!["a", "d", "g", "o", "ya"]);
    }

    #[test]
    fn test_kind_cycles() {
        let mut kind = TestKind::Alphabet;
        for _ in 0..3 {
            kind = kind.next();
        }
        assert_eq!(kind, TestKind::Alphabet);
    }
}
