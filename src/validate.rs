//! Form Validation
//!
//! Pure field-level validation for item drafts. No cross-field rules,
//! no server-side checks.

use crate::models::ItemDraft;

pub const NAME_REQUIRED: &str = "Name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5";
pub const DATE_REQUIRED: &str = "Date is required";

/// Per-field error messages; a field is valid when its slot is `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub rating: Option<&'static str>,
    pub description: Option<&'static str>,
    pub created_date: Option<&'static str>,
}

impl FieldErrors {
    /// The draft is valid iff no field carries an error
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.rating.is_none()
            && self.description.is_none()
            && self.created_date.is_none()
    }
}

/// Check every rule independently; multiple errors may co-exist
pub fn validate(draft: &ItemDraft) -> FieldErrors {
    FieldErrors {
        name: draft.name.trim().is_empty().then_some(NAME_REQUIRED),
        rating: (!(1..=5).contains(&draft.rating)).then_some(RATING_OUT_OF_RANGE),
        description: draft
            .description
            .trim()
            .is_empty()
            .then_some(DESCRIPTION_REQUIRED),
        created_date: draft.created_date.is_empty().then_some(DATE_REQUIRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ItemDraft {
        ItemDraft {
            id: None,
            name: "Book".to_string(),
            rating: 4,
            description: "Good read".to_string(),
            created_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate(&valid_draft());
        assert!(errors.is_empty());
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_blank_name_flagged() {
        for name in ["", "   ", "\t\n"] {
            let mut draft = valid_draft();
            draft.name = name.to_string();
            let errors = validate(&draft);
            assert_eq!(errors.name, Some(NAME_REQUIRED));
            assert!(!errors.is_empty());
        }
    }

    #[test]
    fn test_blank_description_flagged() {
        let mut draft = valid_draft();
        draft.description = "  ".to_string();
        assert_eq!(validate(&draft).description, Some(DESCRIPTION_REQUIRED));
    }

    #[test]
    fn test_rating_bounds() {
        for rating in [0, -1, 6, 100] {
            let mut draft = valid_draft();
            draft.rating = rating;
            assert_eq!(
                validate(&draft).rating,
                Some(RATING_OUT_OF_RANGE),
                "rating {} should be rejected",
                rating
            );
        }
        for rating in 1..=5 {
            let mut draft = valid_draft();
            draft.rating = rating;
            assert_eq!(validate(&draft).rating, None);
        }
    }

    #[test]
    fn test_missing_date_flagged() {
        let mut draft = valid_draft();
        draft.created_date = String::new();
        assert_eq!(validate(&draft).created_date, Some(DATE_REQUIRED));
    }

    #[test]
    fn test_errors_accumulate_independently() {
        let draft = ItemDraft {
            id: None,
            name: " ".to_string(),
            rating: 0,
            description: String::new(),
            created_date: String::new(),
        };
        let errors = validate(&draft);
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.rating, Some(RATING_OUT_OF_RANGE));
        assert_eq!(errors.description, Some(DESCRIPTION_REQUIRED));
        assert_eq!(errors.created_date, Some(DATE_REQUIRED));
    }
}
