//! Next-question rule for quiz play

use super::Question;

/// Pick the next quiz question.
///
/// The number of previously asked questions is used as a zero-based
/// index into `candidates` (ordered by id). Which ids were asked does
/// not matter, only how many. `None` means the quiz is over.
pub fn next_question<T>(candidates: Vec<Question>, previous: &[T]) -> Option<Question> {
    candidates.into_iter().nth(previous.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn first_question_when_nothing_asked() {
        let picked = next_question::<i32>(vec![question(4), question(9)], &[]);
        assert_eq!(picked.map(|q| q.id), Some(4));
    }

    #[test]
    fn index_is_the_count_of_previous_questions() {
        let candidates = vec![question(4), question(9), question(12)];
        assert_eq!(next_question(candidates, &[4]).map(|q| q.id), Some(9));
    }

    #[test]
    fn previous_ids_are_not_excluded_by_identity() {
        // Two previous ids that are not 4 and 9 still advance to index 2.
        let candidates = vec![question(4), question(9), question(12)];
        assert_eq!(next_question(candidates, &[100, 200]).map(|q| q.id), Some(12));
    }

    #[test]
    fn exhausted_quiz_returns_none() {
        let candidates = vec![question(4), question(9)];
        assert!(next_question(candidates.clone(), &[4, 9]).is_none());
        assert!(next_question(candidates, &[1, 2, 3]).is_none());
    }
}
