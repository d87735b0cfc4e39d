//! Addition and subtraction problems with spelled-out operands.

use std::fmt;

use rand::Rng;

use crate::error::ProblemError;
use crate::tables::{number_word, MAX_NUMBER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }
}

/// A problem such as "десет - седем" whose result stays within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticProblem {
    pub left: u32,
    pub right: u32,
    pub operator: Operator,
    pub result: u32,
    pub left_word: &'static str,
    pub right_word: &'static str,
}

impl ArithmeticProblem {
    /// Build a problem, rejecting negative results and operands without a word.
    pub fn new(left: u32, operator: Operator, right: u32) -> Result<Self, ProblemError> {
        let left_word = number_word(left).ok_or(ProblemError::OutOfRange(left))?;
        let right_word = number_word(right).ok_or(ProblemError::OutOfRange(right))?;
        let result = match operator {
            Operator::Add => left + right,
            Operator::Subtract => left
                .checked_sub(right)
                .ok_or(ProblemError::Negative { left, right })?,
        };
        if result > MAX_NUMBER {
            return Err(ProblemError::OutOfRange(result));
        }
        Ok(Self {
            left,
            right,
            operator,
            result,
            left_word,
            right_word,
        })
    }

    /// Draw a random problem.
    ///
    /// Addition picks `left` in 1..=50 and `right` so the sum is at most 100;
    /// subtraction picks `right <= left`. The draw goes through [`ArithmeticProblem::new`].
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, ProblemError> {
        let problem = if rng.random_bool(0.5) {
            let left = rng.random_range(1..=50);
            Self::new(left, Operator::Add, rng.random_range(1..=MAX_NUMBER - left))?
        } else {
            let left = rng.random_range(1..=MAX_NUMBER);
            Self::new(left, Operator::Subtract, rng.random_range(1..=left))?
        };
        log::debug!("generated {}", problem);
        Ok(problem)
    }

    /// The question as shown to the learner.
    pub fn question(&self) -> String {
        format!("{} {} {}", self.left_word, self.operator.symbol(), self.right_word)
    }
}

impl fmt::Display for ArithmeticProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left,
            self.operator.symbol(),
            self.right,
            self.result
        )
    }
}
