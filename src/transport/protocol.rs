//! Response contracts of the flashcard service.
//!
//! `/upload/` and `/text/` answer with the version 1 envelope
//! `{"flashcards": [...]}`; `/flashcards/` answers with a bare array. Each
//! endpoint has exactly one accepted shape.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::core::{
    FlashError,
    Flashcard,
};

#[derive(Debug, Serialize)]
pub struct TextRequest<'a> {
    pub text: &'a str,
}

/// Decodes a submission response.
pub fn decode_envelope(body: &str) -> Result<Vec<Flashcard>, FlashError> {
    let value: Value = serde_json::from_str(body)?;

    let list = match value {
        Value::Object(mut object) => match object.remove("flashcards") {
            Some(Value::Array(list)) => list,
            Some(other) => {
                return Err(FlashError::UnexpectedShape(format!(
                    "'flashcards' is {}, expected an array",
                    describe(&other)
                )))
            }
            None => {
                return Err(FlashError::UnexpectedShape(
                    "response object has no 'flashcards' field".to_string(),
                ))
            }
        },
        other => {
            return Err(FlashError::UnexpectedShape(format!(
                "expected an object with a 'flashcards' array, got {}",
                describe(&other)
            )))
        }
    };

    Ok(decode_records(list))
}

/// Decodes the saved-flashcards listing.
pub fn decode_list(body: &str) -> Result<Vec<Flashcard>, FlashError> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Array(list) => Ok(decode_records(list)),
        other => Err(FlashError::UnexpectedShape(format!(
            "expected an array of flashcards, got {}",
            describe(&other)
        ))),
    }
}

/// Decodes each record on its own. A record that does not fit the flashcard
/// shape becomes an empty card, which the renderer skips and reports.
fn decode_records(list: Vec<Value>) -> Vec<Flashcard> {
    list.into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).unwrap_or_else(|e| {
                warn!(index, error = %e, "Malformed flashcard record");
                Flashcard::default()
            })
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"flashcards": [
            {"front": "What is AI?", "back": "Machines that think.", "category": "General"},
            {"front": "What is ML?", "back": "Learning from data.", "category": "General", "links": ["What is AI?"]}
        ]}"#;

        let cards = decode_envelope(body).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].links, vec!["What is AI?".to_string()]);
    }

    #[test]
    fn test_envelope_rejects_other_shapes() {
        for body in [r#"[]"#, r#"{"cards": []}"#, r#"{"flashcards": {"front": "Q"}}"#, "null"] {
            let result = decode_envelope(body);
            assert!(
                matches!(result, Err(FlashError::UnexpectedShape(_))),
                "body {body} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(decode_envelope("{\"flashcards\": ["), Err(FlashError::Json(_))));
        assert!(matches!(decode_list("<html>"), Err(FlashError::Json(_))));
    }

    #[test]
    fn test_decode_list() {
        let cards = decode_list(r#"[{"front": "Q", "back": "A", "category": "C"}]"#).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A", "C")]);

        assert!(matches!(
            decode_list(r#"{"flashcards": []}"#),
            Err(FlashError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_malformed_records_keep_the_batch() {
        let body = r#"{"flashcards": [
            {"front": "Q", "back": "A", "category": "C"},
            null,
            "oops",
            {"front": 7, "back": "A", "category": "C"},
            {"front": "Q2", "back": "A2", "category": "C", "links": "Q"}
        ]}"#;

        let cards = decode_envelope(body).unwrap();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0], Flashcard::new("Q", "A", "C"));
        assert!(cards[1..].iter().all(|card| !card.is_valid()));

        let listed = decode_list(r#"[null, {"front": "Q", "back": "A", "category": "C"}]"#).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], Flashcard::default());
        assert!(listed[1].is_valid());
    }

    #[test]
    fn test_text_request_body() {
        let body = serde_json::to_string(&TextRequest { text: "Symbolic AI" }).unwrap();
        assert_eq!(body, r#"{"text":"Symbolic AI"}"#);
    }
}
