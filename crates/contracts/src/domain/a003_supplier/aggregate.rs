use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use crate::shared::tags::{AttributeTag, Tagged};
use serde::{Deserialize, Serialize};

/// Поставщик
///
/// Поставщики несут атрибуты (`Country: India`, `Certification: ISO 9001`),
/// по которым работают фильтр и выбор «по атрибуту».
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<AttributeTag>,
}

impl Supplier {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        let email = self.contact_email.trim();
        if !email.is_empty() {
            let valid = email
                .split_once('@')
                .map(|(user, host)| !user.is_empty() && host.contains('.'))
                .unwrap_or(false);
            if !valid {
                return Err("Некорректный email".into());
            }
        }
        Ok(())
    }

    /// Атрибуты одной строкой для ячейки таблицы
    pub fn tags_summary(&self) -> String {
        self.tags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Tagged for Supplier {
    fn tags(&self) -> &[AttributeTag] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<AttributeTag> {
        &mut self.tags
    }
}

impl MasterRecord for Supplier {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Поставщик"
    }

    fn list_name() -> &'static str {
        "Поставщики"
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "name": "Mumbai Tools Ltd", "contact_email": "sales@mumbaitools.in", "phone": "+91 22 5550 1000",
     "tags": [{"label": "Country", "values": ["India"]}, {"label": "Certification", "allowsMultipleValues": true, "values": ["ISO 9001"]}]},
    {"id": 2, "name": "Chicago Fasteners", "contact_email": "info@chifast.com", "phone": "+1 312 555 0199",
     "tags": [{"label": "Country", "values": ["US"]}]},
    {"id": 3, "name": "ООО «СтройКрепёж»", "contact_email": "zakaz@stroykrep.ru", "phone": "+7 495 555-10-20",
     "tags": [{"label": "Country", "values": ["Russia"]}, {"label": "Tier", "values": ["Gold"]}]},
    {"id": 4, "name": "Pune Abrasives", "contact_email": "hello@puneabrasives.in",
     "tags": [{"label": "Country", "values": ["India"]}, {"label": "Tier", "values": ["Silver"]}]},
    {"id": 5, "name": "Rhein Werkzeug GmbH", "contact_email": "kontakt@rhein-wz.de",
     "tags": [{"label": "Country", "values": ["Germany"]}, {"label": "Certification", "allowsMultipleValues": true, "values": ["ISO 9001", "ISO 14001"]}]},
    {"id": 6, "name": "Osaka Precision", "phone": "+81 6 5550 7788", "tags": []}
]"#;

pub fn seed() -> Vec<Supplier> {
    load_or_empty("suppliers", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tags() {
        let rows = seed();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].tags_summary(), "Country: India; Certification: ISO 9001");
        assert!(rows[4].tags[1].allows_multiple_values);
        assert!(!rows[0].tags[0].allows_multiple_values);
    }

    #[test]
    fn test_email_validation() {
        let mut s = Supplier {
            name: "X".into(),
            ..Default::default()
        };
        assert!(s.validate().is_ok());
        s.contact_email = "broken".into();
        assert!(s.validate().is_err());
        s.contact_email = "a@b.io".into();
        assert!(s.validate().is_ok());
    }
}
