//! In-memory хранилище строк справочника
//!
//! Данные живут только в памяти экрана и заполняются начальными данными.
//! ID выдаёт `IdSequence`, поэтому удалённый ID повторно не используется.

use crate::shared::crud_wizard::{DeleteRequest, FormMode, FormSubmission};
use contracts::domain::common::{IdExhausted, IdSequence, MasterRecord};
use contracts::shared::tags::{attach_tag, AttributeTag, TagError, Tagged};

#[derive(Debug, Clone)]
pub struct RecordStore<T: MasterRecord> {
    rows: Vec<T>,
    sequence: IdSequence<T::Id>,
}

impl<T: MasterRecord> RecordStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        let sequence = IdSequence::after(&seed);
        Self {
            rows: seed,
            sequence,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Добавить запись с новым ID, вернуть этот ID
    pub fn create(&mut self, mut values: T) -> Result<T::Id, IdExhausted> {
        let id = self.sequence.next_id().map_err(|e| {
            log::error!("{}: {}", T::collection_name(), e);
            e
        })?;
        values.set_id(id);
        log::debug!("{}: created {:?}", T::collection_name(), id);
        self.rows.push(values);
        Ok(id)
    }

    /// Заменить запись с тем же ID, сохранив её позицию
    pub fn update(&mut self, values: T) -> bool {
        let id = values.id();
        match self.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                *row = values;
                log::debug!("{}: updated {:?}", T::collection_name(), id);
                true
            }
            None => {
                log::warn!("{}: update of missing {:?}", T::collection_name(), id);
                false
            }
        }
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let pos = self.rows.iter().position(|r| r.id() == id)?;
        log::debug!("{}: removed {:?}", T::collection_name(), id);
        Some(self.rows.remove(pos))
    }

    /// Удалить набор записей, вернуть число удалённых
    pub fn remove_many(&mut self, ids: &[T::Id]) -> usize {
        let before = self.rows.len();
        self.rows.retain(|r| !ids.contains(&r.id()));
        let removed = before - self.rows.len();
        log::debug!("{}: removed {} rows", T::collection_name(), removed);
        removed
    }

    /// Применить отправленную форму: создание или замена записи
    pub fn apply_submission(&mut self, submission: FormSubmission<T>) -> Result<T::Id, IdExhausted> {
        match submission.mode {
            FormMode::Create => self.create(submission.values),
            FormMode::Edit => {
                let id = submission.values.id();
                self.update(submission.values);
                Ok(id)
            }
        }
    }

    pub fn apply_delete(&mut self, request: &DeleteRequest<T::Id>) -> usize {
        self.remove_many(&request.ids())
    }
}

impl<T: MasterRecord + Tagged> RecordStore<T> {
    /// Прикрепить атрибут к записи; дубликат отклоняется
    pub fn attach_tag(&mut self, id: T::Id, tag: AttributeTag) -> Result<bool, TagError> {
        match self.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => attach_tag(row, tag).map(|_| true),
            None => Ok(false),
        }
    }

    /// Прикрепить атрибут ко всем выбранным записям
    ///
    /// Записи, где атрибут уже есть, пропускаются; возвращается число
    /// записей, получивших атрибут.
    pub fn attach_tag_to_many(&mut self, ids: &[T::Id], tag: &AttributeTag) -> Result<usize, TagError> {
        tag.validate()?;
        let mut attached = 0;
        for row in self.rows.iter_mut().filter(|r| ids.contains(&r.id())) {
            match attach_tag(row, tag.clone()) {
                Ok(()) => attached += 1,
                Err(TagError::AlreadyAdded { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_supplier::aggregate::{seed, Supplier};

    fn supplier(name: &str) -> Supplier {
        Supplier {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_assigns_fresh_ids_never_reused() {
        let mut store = RecordStore::new(seed());
        let id = store.create(supplier("New")).unwrap();
        assert_eq!(id, 7);
        assert!(store.remove(id).is_some());
        let next = store.create(supplier("Newer"));
        assert_eq!(next, Ok(8));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = RecordStore::new(seed());
        let mut row = store.get(3).cloned().unwrap();
        row.name = "Renamed".into();
        assert!(store.update(row));
        assert_eq!(store.rows()[2].name, "Renamed");

        let ghost = Supplier {
            id: 99,
            ..supplier("Ghost")
        };
        assert!(!store.update(ghost));
    }

    #[test]
    fn test_remove_many() {
        let mut store = RecordStore::new(seed());
        assert_eq!(store.remove_many(&[1, 2, 42]), 2);
        assert!(store.get(1).is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_apply_submission_and_delete() {
        let mut store = RecordStore::new(seed());
        let id = store.apply_submission(FormSubmission {
            mode: FormMode::Create,
            values: supplier("Created"),
        });
        assert_eq!(id, Ok(7));

        let mut edited = store.get(2).cloned().unwrap();
        edited.phone = "+1 555 0100".into();
        assert_eq!(
            store.apply_submission(FormSubmission {
                mode: FormMode::Edit,
                values: edited,
            }),
            Ok(2)
        );
        assert_eq!(store.get(2).unwrap().phone, "+1 555 0100");
        assert_eq!(store.len(), 7);

        assert_eq!(store.apply_delete(&DeleteRequest::Bulk(vec![2, 7])), 2);
        assert_eq!(store.apply_delete(&DeleteRequest::Single(2)), 0);
    }

    #[test]
    fn test_attach_tag_to_many_skips_duplicates() {
        let mut store = RecordStore::new(seed());
        let tag = AttributeTag::single("Country", "India");
        // 1 already carries Country: India
        assert_eq!(store.attach_tag_to_many(&[1, 6], &tag), Ok(1));
        assert!(store.get(6).unwrap().tags.contains(&tag));

        assert!(matches!(
            store.attach_tag(1, tag.clone()),
            Err(TagError::AlreadyAdded { .. })
        ));
        assert_eq!(store.attach_tag(404, tag), Ok(false));
    }
}
