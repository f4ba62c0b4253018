use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A review written for a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Review identifier; higher ids were written later.
    pub id: u64,
    /// Name of the reviewer.
    #[serde(default)]
    pub name: String,
    /// Score out of 5.
    pub score: u8,
    /// Review text.
    pub description: String,
}

/// Input names of the review form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReviewField {
    /// The `score` input.
    Score,
    /// The `description` input.
    Description,
}

/// Pending, not yet submitted, review form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewFields {
    /// Score as typed, validated by the server.
    pub score: String,
    /// Review text typed so far.
    pub description: String,
}

impl ReviewFields {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: ReviewField) -> &str {
        match field {
            ReviewField::Score => &self.score,
            ReviewField::Description => &self.description,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: ReviewField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReviewField::Score => self.score = value,
            ReviewField::Description => self.description = value,
        }
    }
}

/// Body of `POST /restaurants/:id/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Score as typed.
    pub score: String,
    /// Review text.
    pub description: String,
}

impl From<&ReviewFields> for ReviewRequest {
    fn from(fields: &ReviewFields) -> Self {
        Self {
            score: fields.score.clone(),
            description: fields.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_review_field_names() {
        let names: Vec<String> = ReviewField::iter().map(|field| field.to_string()).collect();
        assert_eq!(names, vec!["score", "description"]);
        assert_eq!(ReviewField::from_str("description"), Ok(ReviewField::Description));
        assert!(ReviewField::from_str("title").is_err());
    }

    #[test]
    fn test_review_fields_set_and_get() {
        let mut fields = ReviewFields::default();
        fields.set(ReviewField::Score, "5");
        fields.set(ReviewField::Description, "정말 최고");

        assert_eq!(fields.get(ReviewField::Score), "5");
        assert_eq!(fields.get(ReviewField::Description), "정말 최고");
        assert_eq!(
            ReviewRequest::from(&fields),
            ReviewRequest {
                score: "5".to_string(),
                description: "정말 최고".to_string(),
            }
        );
    }
}
