//! Фильтр по атрибутам (тегам)
//!
//! Строка подходит, если для каждого условия фильтра у неё есть атрибут с той
//! же меткой и пересекающимся множеством значений. Значения внутри одного
//! условия объединяются по ИЛИ, разные условия по И.

use contracts::domain::common::MasterRecord;
use contracts::shared::tags::{push_unique, remove_tag, AttributeTag, TagError, Tagged};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagFilterSet {
    tags: Vec<AttributeTag>,
}

impl TagFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[AttributeTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Добавить условие; повтор пары (метка, значение) отклоняется
    pub fn add(&mut self, tag: AttributeTag) -> Result<(), TagError> {
        push_unique(&mut self.tags, tag)
    }

    pub fn remove(&mut self, label: &str, value: &str) -> bool {
        remove_tag(&mut self.tags, label, value)
    }

    /// Сброс к значению по умолчанию (без условий)
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn matches(&self, row_tags: &[AttributeTag]) -> bool {
        self.tags
            .iter()
            .all(|filter| row_tags.iter().any(|attached| attached.intersects(filter)))
    }

    /// Применить фильтр к набору строк. Пустой фильтр возвращает все строки
    /// в исходном порядке.
    pub fn apply<T: Tagged + Clone>(&self, rows: &[T]) -> Vec<T> {
        rows.iter()
            .filter(|row| self.matches(row.tags()))
            .cloned()
            .collect()
    }

    /// ID подходящих строк (для выбора «по атрибуту»)
    pub fn matching_ids<T: Tagged + MasterRecord>(&self, rows: &[T]) -> Vec<T::Id> {
        rows.iter()
            .filter(|row| self.matches(row.tags()))
            .map(MasterRecord::id)
            .collect()
    }
}

/// Метки атрибутов, встречающиеся в строках (без повторов, по алфавиту)
pub fn known_labels<T: Tagged>(rows: &[T]) -> Vec<String> {
    let labels: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.tags().iter().map(|t| t.label.as_str()))
        .collect();
    labels.into_iter().map(str::to_string).collect()
}

/// Разобрать ввод пользователя: "India, US" → атрибут с двумя значениями
pub fn tag_from_input(label: &str, raw_values: &str) -> Result<AttributeTag, TagError> {
    let values: Vec<&str> = raw_values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    let tag = match values.as_slice() {
        [] => return Err(TagError::Empty),
        [single] => AttributeTag::single(label, *single),
        many => AttributeTag::multi(label, many.iter().copied()),
    };
    tag.validate()?;
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        id: u32,
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

    impl MasterRecord for Row {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
        fn set_id(&mut self, id: u32) {
            self.id = id;
        }
        fn display_name(&self) -> &str {
            "row"
        }
        fn aggregate_index() -> &'static str {
            "t002"
        }
        fn collection_name() -> &'static str {
            "row"
        }
        fn element_name() -> &'static str {
            "Row"
        }
        fn list_name() -> &'static str {
            "Rows"
        }
    }

    fn india() -> Vec<AttributeTag> {
        vec![AttributeTag::single("Country", "India")]
    }

    #[test]
    fn test_or_within_tag() {
        let mut filter = TagFilterSet::new();
        filter
            .add(AttributeTag::multi("Country", ["India", "US"]))
            .unwrap();
        assert!(filter.matches(&india()));

        let mut us_only = TagFilterSet::new();
        us_only.add(AttributeTag::single("Country", "US")).unwrap();
        assert!(!us_only.matches(&india()));
    }

    #[test]
    fn test_and_across_tags() {
        let mut filter = TagFilterSet::new();
        filter.add(AttributeTag::single("Country", "India")).unwrap();
        filter.add(AttributeTag::single("Tier", "Gold")).unwrap();
        assert!(!filter.matches(&india()));

        let mut tags = india();
        tags.push(AttributeTag::single("Tier", "Gold"));
        assert!(filter.matches(&tags));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut filter = TagFilterSet::new();
        assert!(filter.add(AttributeTag::single("Country", "India")).is_ok());
        let err = filter
            .add(AttributeTag::single("Country", "India"))
            .unwrap_err();
        assert!(matches!(err, TagError::AlreadyAdded { .. }));
        assert!(err.to_string().contains("уже добавлен"));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let rows = vec![
            Row { id: 3, tags: india() },
            Row { id: 1, tags: Vec::new() },
            Row { id: 2, tags: india() },
        ];
        let mut filter = TagFilterSet::new();
        filter.add(AttributeTag::single("Country", "India")).unwrap();
        assert_eq!(filter.matching_ids(&rows), vec![3, 2]);

        filter.clear();
        let ids: Vec<u32> = filter.apply(&rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut filter = TagFilterSet::new();
        filter.add(AttributeTag::multi("Country", ["India", "US"])).unwrap();
        assert!(!filter.remove("Country", "India"));
        assert!(filter.remove("Country", "India, US"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_known_labels() {
        let mut tier = india();
        tier.push(AttributeTag::single("Tier", "Gold"));
        let rows = vec![
            Row { id: 1, tags: tier },
            Row { id: 2, tags: india() },
            Row { id: 3, tags: Vec::new() },
        ];
        assert_eq!(known_labels(&rows), vec!["Country".to_string(), "Tier".to_string()]);
    }

    #[test]
    fn test_tag_from_input() {
        let tag = tag_from_input("Country", " India , US ,").unwrap();
        assert_eq!(tag, AttributeTag::multi("Country", ["India", "US"]));
        assert_eq!(
            tag_from_input("Country", "India").unwrap(),
            AttributeTag::single("Country", "India")
        );
        assert_eq!(tag_from_input("Country", " , "), Err(TagError::Empty));
        assert_eq!(tag_from_input("", "India"), Err(TagError::Empty));
    }
}
