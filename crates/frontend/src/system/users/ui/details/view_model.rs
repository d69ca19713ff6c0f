use contracts::system::users::User;
use leptos::prelude::*;

/// Черновик формы пользователя: необязательные поля как строки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDraft {
    pub record: User,
    pub email: String,
    pub full_name: String,
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl UserDraft {
    pub fn from_record(record: User) -> Self {
        Self {
            email: record.email.clone().unwrap_or_default(),
            full_name: record.full_name.clone().unwrap_or_default(),
            record,
        }
    }

    pub fn to_record(&self) -> Result<User, String> {
        let mut record = self.record.clone();
        record.username = record.username.trim().to_string();
        record.email = non_empty(&self.email);
        record.full_name = non_empty(&self.full_name);
        record.validate()?;
        Ok(record)
    }
}

#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserDraft>,
    pub error: RwSignal<Option<String>>,
}

impl UserDetailsViewModel {
    pub fn new(initial: Option<User>) -> Self {
        let record = initial.unwrap_or_else(|| User {
            is_active: true,
            ..Default::default()
        });
        Self {
            form: RwSignal::new(UserDraft::from_record(record)),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, on_submit: Callback<User>) {
        match self.form.with_untracked(UserDraft::to_record) {
            Ok(record) => {
                self.error.set(None);
                on_submit.run(record);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_become_none() {
        let draft = UserDraft {
            record: User {
                username: " petrov ".into(),
                ..Default::default()
            },
            email: "  ".into(),
            full_name: "Пётр Петров".into(),
        };
        let user = draft.to_record().unwrap();
        assert_eq!(user.username, "petrov");
        assert_eq!(user.email, None);
        assert_eq!(user.full_name.as_deref(), Some("Пётр Петров"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut draft = UserDraft::from_record(User {
            username: "petrov".into(),
            ..Default::default()
        });
        draft.email = "petrov.example.com".into();
        assert_eq!(draft.to_record().unwrap_err(), "Некорректный email");
    }
}
