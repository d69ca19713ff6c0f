use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Скидка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: u32,
    pub name: String,
    /// Процент скидки, 0..=100
    pub percent: f64,
    pub valid_from: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    pub is_active: bool,
}

impl Default for Discount {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            percent: 0.0,
            valid_from: NaiveDate::default(),
            valid_until: None,
            is_active: true,
        }
    }
}

impl Discount {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if !(0.0..=100.0).contains(&self.percent) {
            return Err("Процент скидки должен быть от 0 до 100".into());
        }
        if let Some(until) = self.valid_until {
            if until < self.valid_from {
                return Err("Дата окончания раньше даты начала".into());
            }
        }
        Ok(())
    }

    /// Действует ли скидка на дату
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && date >= self.valid_from
            && self.valid_until.map_or(true, |until| date <= until)
    }
}

impl MasterRecord for Discount {
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
        "a004"
    }

    fn collection_name() -> &'static str {
        "discount"
    }

    fn element_name() -> &'static str {
        "Скидка"
    }

    fn list_name() -> &'static str {
        "Скидки"
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "name": "Новый клиент", "percent": 5.0, "valid_from": "2025-01-01", "is_active": true},
    {"id": 2, "name": "Оптовая", "percent": 12.5, "valid_from": "2025-01-01", "is_active": true},
    {"id": 3, "name": "Чёрная пятница", "percent": 30.0, "valid_from": "2025-11-28", "valid_until": "2025-11-30", "is_active": true},
    {"id": 4, "name": "Распродажа склада", "percent": 40.0, "valid_from": "2025-06-01", "valid_until": "2025-06-30", "is_active": false},
    {"id": 5, "name": "Партнёрская", "percent": 7.0, "valid_from": "2025-03-15", "is_active": true}
]"#;

pub fn seed() -> Vec<Discount> {
    load_or_empty("discounts", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed() {
        let rows = seed();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].valid_until, Some(date(2025, 11, 30)));
    }

    #[test]
    fn test_validity_window() {
        let rows = seed();
        assert!(rows[2].is_valid_on(date(2025, 11, 29)));
        assert!(!rows[2].is_valid_on(date(2025, 12, 1)));
        assert!(!rows[3].is_valid_on(date(2025, 6, 10)));
    }

    #[test]
    fn test_validate_percent_and_dates() {
        let mut d = Discount {
            name: "X".into(),
            percent: 150.0,
            ..Default::default()
        };
        assert!(d.validate().is_err());
        d.percent = 10.0;
        d.valid_from = date(2025, 5, 1);
        d.valid_until = Some(date(2025, 4, 1));
        assert!(d.validate().is_err());
    }
}
