//! Configuration types
//!
//! Forms described as plain data, optionally (de)serializable with the
//! `serde` feature.

pub mod types;

pub use types::*;

use vtform_display::Position;

use crate::field::{EditableField, FieldError};

impl EditableField {
    /// Build a field from its description
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldError> {
        let origin = Position::new(config.row, config.col);
        match config.kind {
            FieldKind::Text { max_length, policy } => {
                let mut field = EditableField::text(origin, max_length as usize, policy)?;
                field.set_content(&config.initial);
                Ok(field)
            }
            FieldKind::Boolean { state } => Ok(EditableField::boolean(origin, state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::TextPolicy;

    #[test]
    fn test_text_from_config() {
        let config = FieldConfig::text(10, 11, 9, TextPolicy::free_text()).with_initial("Edit me");
        let field = EditableField::from_config(&config).unwrap();
        assert_eq!(field.origin(), Position::new(10, 11));
        assert_eq!(field.max_length(), 9);
        assert_eq!(field.content(), "Edit me");
        assert_eq!(field.cursor_position(), 7);
    }

    #[test]
    fn test_initial_is_folded_and_cut() {
        let config = FieldConfig::text(1, 1, 3, TextPolicy::strict()).with_initial("abcdef");
        let field = EditableField::from_config(&config).unwrap();
        assert_eq!(field.content(), "ABC");
    }

    #[test]
    fn test_boolean_from_config() {
        let field = EditableField::from_config(&FieldConfig::boolean(12, 11, true)).unwrap();
        assert!(field.is_boolean());
        assert_eq!(field.state(), Some(true));
    }

    #[test]
    fn test_bad_capacity() {
        let config = FieldConfig::text(1, 1, 0, TextPolicy::strict());
        assert_eq!(
            EditableField::from_config(&config).unwrap_err(),
            FieldError::ZeroCapacity
        );
    }

    #[test]
    fn test_with_initial_truncates_to_storage() {
        let long = "y".repeat(200);
        let config = FieldConfig::text(1, 1, 10, TextPolicy::strict()).with_initial(&long);
        assert_eq!(config.initial.len(), crate::field::MAX_FIELD_LEN);
    }

    #[test]
    fn test_form_capacity() {
        let mut form = FormConfig::new();
        for i in 0..crate::group::MAX_FIELDS as u16 {
            assert!(form.push(FieldConfig::boolean(i + 1, 1, false)).is_ok());
        }
        assert!(form.push(FieldConfig::boolean(20, 1, false)).is_err());
    }

    #[test]
    fn test_with_ignores_fields_past_capacity() {
        let form = (0..=crate::group::MAX_FIELDS as u16)
            .fold(FormConfig::new(), |form, i| form.with(FieldConfig::boolean(i + 1, 1, false)));
        assert_eq!(form.fields.len(), crate::group::MAX_FIELDS);
        assert_eq!(form.fields.last().map(|f| f.row), Some(crate::group::MAX_FIELDS as u16));
        assert!(crate::FieldGroup::from_config(&form).is_ok());
    }
}
