use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Бренд (торговая марка)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brand {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub is_active: bool,
}

impl Brand {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.code.chars().any(char::is_whitespace) {
            return Err("Код не должен содержать пробелов".into());
        }
        Ok(())
    }
}

impl MasterRecord for Brand {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "brand"
    }

    fn element_name() -> &'static str {
        "Бренд"
    }

    fn list_name() -> &'static str {
        "Бренды"
    }
}

// ============================================================================
// Seed data
// ============================================================================

const FIXTURE: &str = r#"[
    {"id": 1, "code": "ACME", "name": "Acme", "country": "USA", "is_active": true},
    {"id": 2, "code": "BOSCH", "name": "Bosch", "country": "Germany", "is_active": true},
    {"id": 3, "code": "TATA", "name": "Tata", "country": "India", "is_active": true},
    {"id": 4, "code": "MAKITA", "name": "Makita", "country": "Japan", "is_active": true},
    {"id": 5, "code": "ZUBR", "name": "Зубр", "country": "Russia", "is_active": true, "comment": "Ручной инструмент"},
    {"id": 6, "code": "STANLEY", "name": "Stanley", "country": "USA", "is_active": false},
    {"id": 7, "code": "HILTI", "name": "Hilti", "country": "Liechtenstein", "is_active": true},
    {"id": 8, "code": "DEWALT", "name": "DeWalt", "country": "USA", "is_active": true},
    {"id": 9, "code": "METABO", "name": "Metabo", "country": "Germany", "is_active": true},
    {"id": 10, "code": "INTERSKOL", "name": "Интерскол", "country": "Russia", "is_active": true},
    {"id": 11, "code": "BLACKDECKER", "name": "Black+Decker", "country": "USA", "is_active": false},
    {"id": 12, "code": "RYOBI", "name": "Ryobi", "country": "Japan", "is_active": true},
    {"id": 13, "code": "GODREJ", "name": "Godrej", "country": "India", "is_active": true},
    {"id": 14, "code": "FESTOOL", "name": "Festool", "country": "Germany", "is_active": true}
]"#;

/// Начальный набор брендов
pub fn seed() -> Vec<Brand> {
    load_or_empty("brands", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::IdSequence;

    #[test]
    fn test_seed_parses_with_unique_ids() {
        let rows = seed();
        assert_eq!(rows.len(), 14);
        let mut ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_sequence_continues_after_seed() {
        let rows = seed();
        let mut seq = IdSequence::after(&rows);
        assert_eq!(seq.next_id(), Ok(15));
    }

    #[test]
    fn test_validate() {
        let mut brand = Brand {
            code: "ACME".into(),
            name: "Acme".into(),
            ..Default::default()
        };
        assert!(brand.validate().is_ok());
        brand.code = "AC ME".into();
        assert!(brand.validate().is_err());
        brand.name = " ".into();
        assert_eq!(
            brand.validate(),
            Err("Наименование не может быть пустым".to_string())
        );
    }
}
