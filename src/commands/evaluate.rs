//! Guess evaluation command

use crate::core::{Cell, Feedback, WORD_LENGTH, Word};
use crate::error::Result;

/// Evaluation of one guess against a solution
pub struct EvaluationResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
    pub cells: [Cell; WORD_LENGTH],
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn evaluate_words(guess: &str, solution: &str) -> Result<EvaluationResult> {
    let guess: Word = guess.parse()?;
    let solution: Word = solution.parse()?;
    let feedback = Feedback::evaluate(&guess, &solution);
    let cells = feedback.cells(&guess);

    Ok(EvaluationResult {
        guess,
        solution,
        feedback,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult::{Exact, Miss, Present};

    #[test]
    fn evaluates_duplicate_letters() {
        let result = evaluate_words("LOLLY", "allot").unwrap();
        assert_eq!(result.guess.text(), "lolly");
        assert_eq!(
            *result.feedback.results(),
            [Present, Present, Exact, Miss, Miss]
        );
        assert_eq!(result.cells[2].letter, Some('l'));
        assert_eq!(result.cells[2].result, Some(Exact));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(evaluate_words("otto o", "robot").is_err());
        assert!(evaluate_words("crane", "toolong").is_err());
    }
}
