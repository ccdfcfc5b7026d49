use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// A question/answer/category record as produced by the backend.
///
/// Decoding is lenient: absent or `null` fields become empty so that one bad
/// record never fails the whole batch. Use [`Flashcard::is_valid`] before
/// displaying a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub front: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub back: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Fronts of related cards, matched by exact string.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl Flashcard {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            category: category.into(),
            links: Vec::new(),
        }
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Names of the required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.front.is_empty() {
            missing.push("front");
        }
        if self.back.is_empty() {
            missing.push("back");
        }
        if self.category.is_empty() {
            missing.push("category");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// A record left out of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    pub index: usize,
    pub missing: Vec<&'static str>,
}

impl SkippedCard {
    pub fn describe(&self) -> String {
        format!("#{}: missing {}", self.index + 1, self.missing.join(", "))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_decoding() {
        let card: Flashcard = serde_json::from_str(
            r#"{"front": "What is AI?", "back": null, "category": "General"}"#,
        )
        .unwrap();

        assert_eq!(card.front, "What is AI?");
        assert!(card.back.is_empty());
        assert!(card.links.is_empty());
        assert_eq!(card.missing_fields(), vec!["back"]);
        assert!(!card.is_valid());

        let empty: Flashcard = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.missing_fields(), vec!["front", "back", "category"]);
    }

    #[test]
    fn test_links_are_kept_in_order() {
        let card: Flashcard = serde_json::from_str(
            r#"{"front": "Q2", "back": "A2", "category": "C", "links": ["Q3", "Q1"]}"#,
        )
        .unwrap();

        assert!(card.is_valid());
        assert_eq!(card.links, vec!["Q3".to_string(), "Q1".to_string()]);
    }

    #[test]
    fn test_skipped_card_description() {
        let skipped = SkippedCard { index: 2, missing: vec!["back", "category"] };
        assert_eq!(skipped.describe(), "#3: missing back, category");
    }
}
