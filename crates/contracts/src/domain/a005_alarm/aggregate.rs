use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use crate::shared::tags::{AttributeTag, Tagged};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Важность оповещения
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn all() -> [Severity; 4] {
        [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Severity> {
        Self::all().into_iter().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Правило оповещения (например, остаток ниже порога)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Alarm {
    pub id: u32,
    pub title: String,
    pub severity: Severity,
    pub threshold: f64,
    #[serde(default)]
    pub last_triggered_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: Vec<AttributeTag>,
}

impl Alarm {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.threshold < 0.0 {
            return Err("Порог не может быть отрицательным".into());
        }
        Ok(())
    }
}

impl Tagged for Alarm {
    fn tags(&self) -> &[AttributeTag] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<AttributeTag> {
        &mut self.tags
    }
}

impl MasterRecord for Alarm {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "alarm"
    }

    fn element_name() -> &'static str {
        "Оповещение"
    }

    fn list_name() -> &'static str {
        "Оповещения"
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "title": "Низкий остаток: саморезы", "severity": "medium", "threshold": 500.0,
     "last_triggered_at": "2025-09-14T08:30:00", "tags": [{"label": "Zone", "values": ["Warehouse"]}]},
    {"id": 2, "title": "Просроченные заказы", "severity": "high", "threshold": 3.0,
     "tags": [{"label": "Zone", "values": ["Sales"]}]},
    {"id": 3, "title": "Температура склада", "severity": "critical", "threshold": 35.0,
     "last_triggered_at": "2025-07-02T15:12:00", "tags": [{"label": "Zone", "values": ["Warehouse"]}, {"label": "Sensor", "values": ["T-01"]}]},
    {"id": 4, "title": "Нет цен у товара", "severity": "low", "threshold": 1.0, "tags": []}
]"#;

pub fn seed() -> Vec<Alarm> {
    load_or_empty("alarms", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let rows = seed();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].severity, Severity::Critical);
        assert!(rows[0].last_triggered_at.is_some());
        assert!(rows[1].last_triggered_at.is_none());
    }

    #[test]
    fn test_severity_strings() {
        for s in Severity::all() {
            assert_eq!(Severity::from_str_opt(s.as_str()), Some(s));
        }
        assert_eq!(Severity::from_str_opt("nope"), None);
        assert!(Severity::Critical > Severity::Low);
    }
}
