use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use serde::{Deserialize, Serialize};

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Наименование родительской категории (пусто для корневых)
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub description: String,
    pub sort_order: i32,
}

impl Category {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.parent.as_deref().map(str::trim) == Some(self.name.trim()) {
            return Err("Категория не может быть родителем самой себе".into());
        }
        Ok(())
    }

    /// Путь категории для отображения, например "Инструмент / Электроинструмент"
    pub fn path(&self) -> String {
        match &self.parent {
            Some(parent) if !parent.trim().is_empty() => format!("{} / {}", parent, self.name),
            _ => self.name.clone(),
        }
    }
}

impl MasterRecord for Category {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "name": "Инструмент", "sort_order": 10},
    {"id": 2, "name": "Электроинструмент", "parent": "Инструмент", "sort_order": 20},
    {"id": 3, "name": "Ручной инструмент", "parent": "Инструмент", "sort_order": 30},
    {"id": 4, "name": "Крепёж", "sort_order": 40, "description": "Метизы и анкеры"},
    {"id": 5, "name": "Саморезы", "parent": "Крепёж", "sort_order": 50},
    {"id": 6, "name": "Расходные материалы", "sort_order": 60},
    {"id": 7, "name": "Оснастка", "parent": "Электроинструмент", "sort_order": 70}
]"#;

pub fn seed() -> Vec<Category> {
    load_or_empty("categories", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_and_path() {
        let rows = seed();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].path(), "Инструмент");
        assert_eq!(rows[1].path(), "Инструмент / Электроинструмент");
    }

    #[test]
    fn test_self_parent_rejected() {
        let cat = Category {
            name: "Крепёж".into(),
            parent: Some("Крепёж".into()),
            ..Default::default()
        };
        assert!(cat.validate().is_err());
    }
}
