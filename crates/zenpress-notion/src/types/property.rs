//! Page property types.

use serde::{Deserialize, Serialize};

use super::text::{DateValue, FileSource, PageRef, RichText, User};

/// One page property: the wire `id` plus the typed value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Property {
    #[serde(default)]
    pub id: Option<String>,
    /// Type tag plus the value it selects.
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// Property value variants.
///
/// Nullable wire values (empty selects, cleared dates) stay `Option` so
/// that consumers distinguish "property exists but is empty" from a type
/// mismatch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Select { select: Option<SelectOption> },
    Status { status: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Checkbox { checkbox: bool },
    Date { date: Option<DateValue> },
    Number { number: Option<f64> },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    People { people: Vec<User> },
    Files { files: Vec<FileAttachment> },
    Formula { formula: FormulaValue },
    Relation { relation: Vec<PageRef> },
    CreatedTime { created_time: String },
    CreatedBy { created_by: User },
    LastEditedTime { last_edited_time: String },
    LastEditedBy { last_edited_by: User },
    /// Property kind not covered by this model (rollup, verification, ...).
    #[serde(other)]
    Unsupported,
}

/// A select or multi-select option.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// One entry of a files property.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileAttachment {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub source: FileSource,
}

/// Computed formula result.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
    #[serde(other)]
    Unsupported,
}

impl Property {
    /// Whether this property's type tag is `title`.
    #[must_use]
    pub fn is_title(&self) -> bool {
        matches!(self.value, PropertyValue::Title { .. })
    }

    /// Whether this property's type tag is `rich_text`.
    #[must_use]
    pub fn is_rich_text(&self) -> bool {
        matches!(self.value, PropertyValue::RichText { .. })
    }

    /// Whether this property's type tag is `select`.
    #[must_use]
    pub fn is_select(&self) -> bool {
        matches!(self.value, PropertyValue::Select { .. })
    }

    /// Whether this property's type tag is `status`.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self.value, PropertyValue::Status { .. })
    }

    /// Whether this property's type tag is `multi_select`.
    #[must_use]
    pub fn is_multi_select(&self) -> bool {
        matches!(self.value, PropertyValue::MultiSelect { .. })
    }

    /// Whether this property's type tag is `checkbox`.
    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, PropertyValue::Checkbox { .. })
    }

    /// Whether this property's type tag is `date`.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self.value, PropertyValue::Date { .. })
    }

    /// Whether this property's type tag is `number`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.value, PropertyValue::Number { .. })
    }

    /// Whether this property's type tag is `url`.
    #[must_use]
    pub fn is_url(&self) -> bool {
        matches!(self.value, PropertyValue::Url { .. })
    }

    /// Whether this property's type tag is `email`.
    #[must_use]
    pub fn is_email(&self) -> bool {
        matches!(self.value, PropertyValue::Email { .. })
    }

    /// Whether this property's type tag is `phone_number`.
    #[must_use]
    pub fn is_phone_number(&self) -> bool {
        matches!(self.value, PropertyValue::PhoneNumber { .. })
    }

    /// Whether this property's type tag is `people`.
    #[must_use]
    pub fn is_people(&self) -> bool {
        matches!(self.value, PropertyValue::People { .. })
    }

    /// Whether this property's type tag is `files`.
    #[must_use]
    pub fn is_files(&self) -> bool {
        matches!(self.value, PropertyValue::Files { .. })
    }

    /// Whether this property's type tag is `formula`.
    #[must_use]
    pub fn is_formula(&self) -> bool {
        matches!(self.value, PropertyValue::Formula { .. })
    }

    /// Whether this property's type tag is `relation`.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        matches!(self.value, PropertyValue::Relation { .. })
    }

    /// Whether this property's type tag is `created_time`.
    #[must_use]
    pub fn is_created_time(&self) -> bool {
        matches!(self.value, PropertyValue::CreatedTime { .. })
    }

    /// Whether this property's type tag is `created_by`.
    #[must_use]
    pub fn is_created_by(&self) -> bool {
        matches!(self.value, PropertyValue::CreatedBy { .. })
    }

    /// Whether this property's type tag is `last_edited_time`.
    #[must_use]
    pub fn is_last_edited_time(&self) -> bool {
        matches!(self.value, PropertyValue::LastEditedTime { .. })
    }

    /// Whether this property's type tag is `last_edited_by`.
    #[must_use]
    pub fn is_last_edited_by(&self) -> bool {
        matches!(self.value, PropertyValue::LastEditedBy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn property(json: serde_json::Value) -> Property {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_select_deserializes() {
        let prop = property(serde_json::json!({
            "id": "%3D%5BO%3C",
            "type": "select",
            "select": { "id": "]ns^", "name": "tech", "color": "blue" }
        }));

        assert!(prop.is_select());
        match &prop.value {
            PropertyValue::Select {
                select: Some(option),
            } => assert_eq!(option.name, "tech"),
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_select_is_none() {
        let prop = property(serde_json::json!({
            "id": "x",
            "type": "select",
            "select": null
        }));

        assert!(prop.is_select());
        assert!(matches!(prop.value, PropertyValue::Select { select: None }));
    }

    #[test]
    fn test_multi_select_preserves_order() {
        let prop = property(serde_json::json!({
            "id": "ZzyO",
            "type": "multi_select",
            "multi_select": [
                { "id": "1", "name": "notion", "color": "brown" },
                { "id": "2", "name": "rust", "color": "orange" }
            ]
        }));

        match &prop.value {
            PropertyValue::MultiSelect { multi_select } => {
                let names: Vec<&str> = multi_select.iter().map(|o| o.name.as_str()).collect();
                assert_eq!(names, ["notion", "rust"]);
            }
            other => panic!("expected multi_select, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_property_kind_falls_back() {
        let prop = property(serde_json::json!({
            "id": "x",
            "type": "verification",
            "verification": { "state": "verified" }
        }));

        assert!(matches!(prop.value, PropertyValue::Unsupported));
        assert!(!prop.is_select());
        assert!(!prop.is_title());
    }
}
