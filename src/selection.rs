//! Choosing which table entries go into a round.

use std::collections::BTreeSet;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SelectionError;
use crate::models::Prompt;
use crate::tables::Preset;

/// Which entries of a reference table a round draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Half-open index range `[start, end)`.
    Range { start: usize, end: usize },
    /// Explicit set of indices, kept in table order.
    Subset(BTreeSet<usize>),
}

impl Selection {
    pub fn range(start: usize, end: usize) -> Self {
        Self::Range { start, end }
    }

    pub fn from_preset(preset: &Preset, custom: &BTreeSet<usize>) -> Self {
        match preset.bounds {
            Some((start, end)) => Self::range(start, end),
            None => Self::Subset(custom.clone()),
        }
    }

    /// Check the selection against a table of `len` entries.
    pub fn validate(&self, len: usize) -> Result<(), SelectionError> {
        match self {
            Self::Range { start, end } => {
                if start > end {
                    return Err(SelectionError::Inverted {
                        start: *start,
                        end: *end,
                    });
                }
                if *end > len {
                    return Err(SelectionError::OutOfBounds { index: *end, len });
                }
            }
            Self::Subset(indices) => {
                if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                    return Err(SelectionError::OutOfBounds { index, len });
                }
            }
        }
        Ok(())
    }

    /// Pick the selected entries out of `table`, in table order.
    pub fn apply<T: Clone>(&self, table: &[T]) -> Result<Vec<T>, SelectionError> {
        self.validate(table.len())?;
        Ok(match self {
            Self::Range { start, end } => table[*start..*end].to_vec(),
            Self::Subset(indices) => indices.iter().map(|&i| table[i].clone()).collect(),
        })
    }
}

impl FromStr for Selection {
    type Err = SelectionError;

    /// Parses `"START-END"` (half-open).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SelectionError::Malformed(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(malformed)?;
        let start = start.trim().parse::<usize>().map_err(|_| malformed())?;
        let end = end.trim().parse::<usize>().map_err(|_| malformed())?;
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        Ok(Self::range(start, end))
    }
}

/// The ordered prompts of one round. Fixed once the round starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSet {
    prompts: Vec<Prompt>,
}

impl PromptSet {
    /// Select prompts from `source` and shuffle them if `randomize` is set.
    pub fn configure<R: Rng + ?Sized>(
        source: &[Prompt],
        selection: &Selection,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self, SelectionError> {
        let mut prompts = selection.apply(source)?;
        if randomize {
            prompts.shuffle(rng);
        }
        Ok(Self { prompts })
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get(index)
    }

    #[cfg(test)]
    pub fn iter(&self) -> std::slice::Iter<'_, Prompt> {
        self.prompts.iter()
    }
}

impl From<Vec<Prompt>> for PromptSet {
    fn from(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn source(n: usize) -> Vec<Prompt> {
        (0..n)
            .map(|i| Prompt::new(format!("p{i}"), format!("a{i}"), "?"))
            .collect()
    }

    fn texts(set: &PromptSet) -> Vec<String> {
        set.iter().map(|p| p.text.clone()).collect()
    }

    #[test]
    fn parses_range_strings() {
        assert_eq!("0-5".parse::<Selection>(), Ok(Selection::range(0, 5)));
        assert_eq!(" 10 - 20 ".parse::<Selection>(), Ok(Selection::range(10, 20)));
        assert_eq!(
            "5-2".parse::<Selection>(),
            Err(SelectionError::Inverted { start: 5, end: 2 })
        );
        for bad in ["", "5", "a-b", "1-", "-3", "1-2-3"] {
            assert!(
                matches!(bad.parse::<Selection>(), Err(SelectionError::Malformed(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn range_keeps_length_and_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let src = source(30);
        for (start, end) in [(0, 5), (5, 10), (10, 20), (20, 30), (7, 7)] {
            let set = PromptSet::configure(&src, &Selection::range(start, end), false, &mut rng)
                .unwrap();
            assert_eq!(set.len(), end - start);
            let expected: Vec<String> = (start..end).map(|i| format!("p{i}")).collect();
            assert_eq!(texts(&set), expected);
        }
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let src = source(30);
        let err = PromptSet::configure(&src, &Selection::range(25, 31), false, &mut rng);
        assert_eq!(err, Err(SelectionError::OutOfBounds { index: 31, len: 30 }));
    }

    #[test]
    fn subset_keeps_table_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let src = source(10);
        let subset = Selection::Subset([7, 2, 4].into_iter().collect());
        let set = PromptSet::configure(&src, &subset, false, &mut rng).unwrap();
        assert_eq!(texts(&set), vec!["p2", "p4", "p7"]);

        let bad = Selection::Subset([3, 10].into_iter().collect());
        assert_eq!(
            bad.apply(&src),
            Err(SelectionError::OutOfBounds { index: 10, len: 10 })
        );
    }

    #[test]
    fn empty_subset_is_a_valid_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = PromptSet::configure(&source(5), &Selection::Subset(BTreeSet::new()), true, &mut rng)
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        for n in [0, 1, 2, 5, 30] {
            for seed in 0..8 {
                let mut rng = StdRng::seed_from_u64(seed);
                let src = source(n);
                let set = PromptSet::configure(&src, &Selection::range(0, n), true, &mut rng)
                    .unwrap();
                let mut got = texts(&set);
                let mut want: Vec<String> = src.iter().map(|p| p.text.clone()).collect();
                got.sort();
                want.sort();
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn shuffle_reorders_large_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        let src = source(30);
        let moved = (0..5).any(|_| {
            let set = PromptSet::configure(&src, &Selection::range(0, 30), true, &mut rng).unwrap();
            set.iter().zip(&src).any(|(a, b)| a != b)
        });
        assert!(moved);
    }
}
