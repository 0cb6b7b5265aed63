//! The part entity and its field rules.
//!
//! A [`Part`] only knows its own parent by id. Children are never stored on the
//! entity; they are a projection computed by the materializer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{BomError, BomResult};

/// Store-assigned identity of a part.
pub type PartId = i64;

/// Maximum number of characters allowed in `name` and `number`.
pub const MAX_FIELD_LENGTH: usize = 255;

/// A node of the Bill-of-Materials tree as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Identity assigned on creation, immutable afterwards.
    pub id: PartId,

    /// Display label.
    pub name: String,

    /// Part number (not unique).
    pub number: String,

    /// Parent part, `None` for roots.
    pub parent_id: Option<PartId>,
}

impl Part {
    /// Whether this part has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Attributes of this part, as used when copying it.
    pub fn attributes(&self) -> NewPart {
        NewPart::new(self.name.clone(), self.number.clone())
    }

    /// One-line description used by list outputs.
    pub fn describe(&self) -> String {
        format!(
            "Part with Id '{}', Name: '{}', Number: '{}', Parent: '{}'",
            self.id,
            self.name,
            self.number,
            self.parent_id.map(|p| p.to_string()).unwrap_or_default()
        )
    }
}

/// Attributes of a part that does not exist yet (or replacement attributes for an update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewPart {
    /// Display label.
    pub name: String,

    /// Part number.
    pub number: String,
}

impl NewPart {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Check that both fields are non-empty, single-line and within [`MAX_FIELD_LENGTH`].
    pub fn validate(&self) -> BomResult<()> {
        validate_field("name", &self.name)?;
        validate_field("number", &self.number)
    }
}

fn validate_field(field: &'static str, value: &str) -> BomResult<()> {
    if value.trim().is_empty() {
        return Err(BomError::validation(field, "must not be empty"));
    }

    if value.chars().any(char::is_control) {
        return Err(BomError::validation(field, "must not contain control characters"));
    }

    let length = value.chars().count();
    if length > MAX_FIELD_LENGTH {
        return Err(BomError::validation(
            field,
            format!("must be at most {MAX_FIELD_LENGTH} characters (got {length})"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_attributes() {
        assert!(NewPart::new("Engine", "E-10").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = NewPart::new("", "E-10").validate().unwrap_err();
        assert!(matches!(err, BomError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_blank_number_rejected() {
        let err = NewPart::new("Engine", "   ").validate().unwrap_err();
        assert!(matches!(err, BomError::Validation { field: "number", .. }));
    }

    #[test]
    fn test_control_characters_rejected() {
        for name in ["Engine\nPart Id: 99", "Engine\r", "En\tgine"] {
            let err = NewPart::new(name, "E-10").validate().unwrap_err();
            assert!(matches!(err, BomError::Validation { field: "name", .. }));
            assert!(err.to_string().contains("control characters"));
        }

        let err = NewPart::new("Engine", "E-\n10").validate().unwrap_err();
        assert!(matches!(err, BomError::Validation { field: "number", .. }));
    }

    #[test]
    fn test_length_bound_counts_characters() {
        let at_limit = "ä".repeat(MAX_FIELD_LENGTH);
        assert!(NewPart::new(at_limit.clone(), "N").validate().is_ok());

        let over = format!("{at_limit}x");
        let err = NewPart::new("Engine", over).validate().unwrap_err();
        assert!(err.to_string().contains("at most 255"));
    }

    #[test]
    fn test_describe_root_and_child() {
        let root = Part {
            id: 1,
            name: "Car".into(),
            number: "C-100".into(),
            parent_id: None,
        };
        assert!(root.is_root());
        assert_eq!(
            root.describe(),
            "Part with Id '1', Name: 'Car', Number: 'C-100', Parent: ''"
        );

        let child = Part {
            parent_id: Some(1),
            id: 2,
            ..root
        };
        assert!(child.describe().ends_with("Parent: '1'"));
    }

    #[test]
    fn test_record_serializes_parent_id_camel_case() {
        let part = Part {
            id: 4,
            name: "Piston".into(),
            number: "P-1".into(),
            parent_id: Some(2),
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["parentId"], 2);
        assert_eq!(json["id"], 4);
    }
}
