use crate::domain::common::MasterRecord;
use crate::shared::fixtures::load_or_empty;
use crate::shared::tags::{AttributeTag, Tagged};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(default)]
    pub tags: Vec<AttributeTag>,
}

impl User {
    pub fn validate(&self) -> Result<(), String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Логин не может быть пустым".into());
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err("Логин может содержать только латиницу, цифры, '_' и '.'".into());
        }
        if let Some(email) = self.email.as_deref() {
            if !email.is_empty() && !email.contains('@') {
                return Err("Некорректный email".into());
            }
        }
        Ok(())
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_admin {
            "Администратор"
        } else {
            "Пользователь"
        }
    }
}

impl Tagged for User {
    fn tags(&self) -> &[AttributeTag] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<AttributeTag> {
        &mut self.tags
    }
}

impl MasterRecord for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.username
    }

    fn aggregate_index() -> &'static str {
        "sys_users"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Пользователь"
    }

    fn list_name() -> &'static str {
        "Пользователи"
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "username": "admin", "email": "admin@example.com", "full_name": "Администратор", "is_active": true, "is_admin": true,
     "tags": [{"label": "Department", "values": ["IT"]}]},
    {"id": 2, "username": "ivanov", "email": "ivanov@example.com", "full_name": "Иван Иванов", "is_active": true, "is_admin": false,
     "tags": [{"label": "Department", "values": ["Sales"]}, {"label": "Country", "values": ["Russia"]}]},
    {"id": 3, "username": "priya.s", "email": "priya@example.in", "full_name": "Priya Sharma", "is_active": true, "is_admin": false,
     "tags": [{"label": "Department", "values": ["Purchasing"]}, {"label": "Country", "values": ["India"]}]},
    {"id": 4, "username": "old_ops", "email": null, "full_name": null, "is_active": false, "is_admin": false, "tags": []}
]"#;

pub fn seed() -> Vec<User> {
    load_or_empty("users", FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let rows = seed();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].role_label(), "Администратор");
        assert_eq!(rows[3].email, None);
    }

    #[test]
    fn test_username_rules() {
        let mut u = User {
            username: "priya.s".into(),
            ..Default::default()
        };
        assert!(u.validate().is_ok());
        u.username = "иван".into();
        assert!(u.validate().is_err());
        u.username = "ivan".into();
        u.email = Some("nope".into());
        assert!(u.validate().is_err());
    }
}
