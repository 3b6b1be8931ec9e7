//! Question records

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Question record from the store.
///
/// Serialized form is `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Fields for a question that has not been stored yet.
///
/// All four fields are required; a body missing any of them is
/// rejected before it reaches the store. `category` is not checked
/// against existing categories. Form clients post `category` and
/// `difficulty` as strings, so numeric strings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub category: i32,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub difficulty: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Number(i64),
    Text(String),
}

fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawInt::deserialize(deserializer)? {
        RawInt::Number(n) => i32::try_from(n)
            .map_err(|_| D::Error::custom(format!("integer {n} out of range"))),
        RawInt::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

impl NewQuestion {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_wire_shape() {
        let q = Question {
            id: 7,
            question: "Who painted the Mona Lisa?".into(),
            answer: "Leonardo da Vinci".into(),
            category: 2,
            difficulty: 1,
        };

        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({
                "id": 7,
                "question": "Who painted the Mona Lisa?",
                "answer": "Leonardo da Vinci",
                "category": 2,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn new_question_requires_every_field() {
        let err = serde_json::from_value::<NewQuestion>(json!({
            "question": "How did Tacitus die?",
            "answer": "Unknown",
            "category": 3
        }))
        .unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn new_question_accepts_numeric_strings() {
        let new: NewQuestion = serde_json::from_value(json!({
            "question": "What is the heaviest organ?",
            "answer": "The liver",
            "category": "1",
            "difficulty": " 4 "
        }))
        .unwrap();
        assert_eq!(new.category, 1);
        assert_eq!(new.difficulty, 4);
    }

    #[test]
    fn new_question_rejects_non_numeric_values() {
        for (category, difficulty) in [
            (json!("science"), json!(1)),
            (json!(1), json!(2.5)),
            (json!(1), json!(null)),
            (json!(i64::from(i32::MAX) + 1), json!(1)),
        ] {
            let result = serde_json::from_value::<NewQuestion>(json!({
                "question": "q",
                "answer": "a",
                "category": category,
                "difficulty": difficulty
            }));
            assert!(result.is_err(), "{category} / {difficulty} should be rejected");
        }
    }
}
