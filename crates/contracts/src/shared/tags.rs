//! Атрибуты (теги) записей справочников
//!
//! Атрибут - пара «метка: значение(я)», например `Country: India`.
//! Атрибут однозначно определяется парой (метка, строковое значение),
//! поэтому повторное добавление той же пары отклоняется.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Атрибут записи или условие фильтра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTag {
    pub label: String,
    #[serde(rename = "allowsMultipleValues", default)]
    pub allows_multiple_values: bool,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("Атрибут «{label}: {value}» уже добавлен")]
    AlreadyAdded { label: String, value: String },
    #[error("Атрибут «{label}» допускает только одно значение")]
    SingleValueOnly { label: String },
    #[error("У атрибута должны быть метка и хотя бы одно значение")]
    Empty,
}

impl AttributeTag {
    /// Атрибут с одним значением
    pub fn single(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into().trim().to_string(),
            allows_multiple_values: false,
            values: vec![value.into().trim().to_string()],
        }
    }

    /// Атрибут с несколькими значениями (внутри логическое ИЛИ)
    pub fn multi<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into().trim().to_string(),
            allows_multiple_values: true,
            values: values.into_iter().map(|v| v.into().trim().to_string()).collect(),
        }
    }

    /// Строковое представление значения, часть идентичности атрибута.
    ///
    /// Значения склеиваются через ", " в исходном порядке, без сортировки и
    /// экранирования. Идентичность совпадает с тем, что показывает чип:
    /// `[US, India]` и `[India, US]` разные атрибуты, а одиночное
    /// `"India, US"` равно множественному `[India, US]`.
    pub fn value_string(&self) -> String {
        self.values.join(", ")
    }

    /// Та же пара (метка, строковое значение), см. [`Self::value_string`]
    pub fn same_identity(&self, other: &AttributeTag) -> bool {
        self.label == other.label && self.value_string() == other.value_string()
    }

    /// Совпадает метка и пересекаются множества значений
    pub fn intersects(&self, other: &AttributeTag) -> bool {
        self.label == other.label && self.values.iter().any(|v| other.values.contains(v))
    }

    pub fn validate(&self) -> Result<(), TagError> {
        if self.label.is_empty() || self.values.iter().all(|v| v.is_empty()) {
            return Err(TagError::Empty);
        }
        if !self.allows_multiple_values && self.values.len() > 1 {
            return Err(TagError::SingleValueOnly {
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn duplicate_error(&self) -> TagError {
        TagError::AlreadyAdded {
            label: self.label.clone(),
            value: self.value_string(),
        }
    }
}

impl fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value_string())
    }
}

/// Запись, к которой можно прикреплять атрибуты
pub trait Tagged {
    fn tags(&self) -> &[AttributeTag];
    fn tags_mut(&mut self) -> &mut Vec<AttributeTag>;
}

/// Добавить атрибут в список, отклоняя дубликаты
pub fn push_unique(tags: &mut Vec<AttributeTag>, tag: AttributeTag) -> Result<(), TagError> {
    tag.validate()?;
    if tags.iter().any(|t| t.same_identity(&tag)) {
        log::warn!("duplicate attribute rejected: {}", tag);
        return Err(tag.duplicate_error());
    }
    tags.push(tag);
    Ok(())
}

/// Прикрепить атрибут к записи
pub fn attach_tag<T: Tagged>(record: &mut T, tag: AttributeTag) -> Result<(), TagError> {
    push_unique(record.tags_mut(), tag)
}

/// Убрать атрибут по паре (метка, строковое значение)
pub fn remove_tag(tags: &mut Vec<AttributeTag>, label: &str, value: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| !(t.label == label && t.value_string() == value));
    tags.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        tags: Vec<AttributeTag>,
    }

    impl Tagged for Row {
        fn tags(&self) -> &[AttributeTag] {
            &self.tags
        }
        fn tags_mut(&mut self) -> &mut Vec<AttributeTag> {
            &mut self.tags
        }
    }

    #[test]
    fn test_display_and_identity() {
        let a = AttributeTag::single("Country", " India ");
        assert_eq!(a.to_string(), "Country: India");
        assert!(a.same_identity(&AttributeTag::single("Country", "India")));
        assert!(!a.same_identity(&AttributeTag::multi("Country", ["India", "US"])));
    }

    #[test]
    fn test_identity_follows_displayed_value() {
        let multi = AttributeTag::multi("Country", ["India", "US"]);
        assert!(multi.same_identity(&AttributeTag::single("Country", "India, US")));
        assert!(!multi.same_identity(&AttributeTag::multi("Country", ["US", "India"])));

        let mut tags = vec![multi];
        assert!(!remove_tag(&mut tags, "Country", "US, India"));
        assert!(remove_tag(&mut tags, "Country", "India, US"));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_intersects_requires_same_label() {
        let row_tag = AttributeTag::single("Country", "India");
        assert!(row_tag.intersects(&AttributeTag::multi("Country", ["India", "US"])));
        assert!(!row_tag.intersects(&AttributeTag::single("Country", "US")));
        assert!(!row_tag.intersects(&AttributeTag::single("Region", "India")));
    }

    #[test]
    fn test_attach_rejects_duplicate() {
        let mut row = Row { tags: Vec::new() };
        assert!(attach_tag(&mut row, AttributeTag::single("Country", "India")).is_ok());
        let err = attach_tag(&mut row, AttributeTag::single("Country", "India")).unwrap_err();
        assert_eq!(
            err,
            TagError::AlreadyAdded {
                label: "Country".into(),
                value: "India".into()
            }
        );
        assert_eq!(row.tags().len(), 1);
    }

    #[test]
    fn test_validation() {
        assert_eq!(AttributeTag::single("", "x").validate(), Err(TagError::Empty));
        let mut tag = AttributeTag::multi("Country", ["India", "US"]);
        assert!(tag.validate().is_ok());
        tag.allows_multiple_values = false;
        assert!(matches!(tag.validate(), Err(TagError::SingleValueOnly { .. })));
    }

    #[test]
    fn test_remove_tag() {
        let mut tags = vec![
            AttributeTag::single("Country", "India"),
            AttributeTag::single("Tier", "Gold"),
        ];
        assert!(remove_tag(&mut tags, "Country", "India"));
        assert!(!remove_tag(&mut tags, "Country", "India"));
        assert_eq!(tags, vec![AttributeTag::single("Tier", "Gold")]);
    }
}
