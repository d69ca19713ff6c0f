use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

/// Черновик формы: порядок сортировки редактируется как текст
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryDraft {
    pub record: Category,
    pub sort_order: String,
}

impl CategoryDraft {
    pub fn from_record(record: Category) -> Self {
        let sort_order = record.sort_order.to_string();
        Self { record, sort_order }
    }

    pub fn to_record(&self) -> Result<Category, String> {
        let sort_order = match self.sort_order.trim() {
            "" => 0,
            raw => raw
                .parse::<i32>()
                .map_err(|_| format!("Порядок сортировки должен быть целым числом: «{}»", raw))?,
        };
        let mut record = self.record.clone();
        record.sort_order = sort_order;
        record.parent = record.parent.filter(|p| !p.trim().is_empty());
        record.validate()?;
        Ok(record)
    }
}

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDraft>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    pub fn new(initial: Option<Category>) -> Self {
        Self {
            form: RwSignal::new(CategoryDraft::from_record(initial.unwrap_or_default())),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, on_submit: Callback<Category>) {
        match self.form.with_untracked(CategoryDraft::to_record) {
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
    fn test_draft_parses_sort_order() {
        let mut draft = CategoryDraft::from_record(Category {
            id: 3,
            name: "Абразивы".into(),
            parent: Some("  ".into()),
            ..Default::default()
        });
        draft.sort_order = " 15 ".into();
        let record = draft.to_record().unwrap();
        assert_eq!(record.sort_order, 15);
        assert_eq!(record.parent, None);
        assert_eq!(record.id, 3);

        draft.sort_order = "first".into();
        assert!(draft.to_record().unwrap_err().contains("first"));
    }

    #[test]
    fn test_draft_runs_record_validation() {
        let draft = CategoryDraft::default();
        assert!(draft.to_record().is_err());
    }
}
