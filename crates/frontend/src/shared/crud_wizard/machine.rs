//! Конечный автомат экрана справочника
//!
//! Idle → FormOpen(create | edit) → Idle
//! Idle → DeleteConfirm(строка | выбранные) → Idle
//!
//! Одновременно открыто не больше одного из: форма, подтверждение удаления.
//! Попытка открыть что-либо не из Idle блокируется (`WizardError::Busy`).
//! Автомат не выполняет I/O: сохранение и удаление делают внешние callback.

use crate::shared::table_engine::{derive_view, TableConfig, TableState};
use contracts::domain::common::MasterRecord;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone)]
pub enum DeleteTarget<T: MasterRecord> {
    Single(T),
    /// Массовое удаление: ID выбранных строк
    Bulk(Vec<T::Id>),
}

impl<T: MasterRecord> DeleteTarget<T> {
    pub fn count(&self) -> usize {
        match self {
            DeleteTarget::Single(_) => 1,
            DeleteTarget::Bulk(ids) => ids.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum WizardPhase<T: MasterRecord> {
    Idle,
    FormOpen {
        mode: FormMode,
        target: Option<T>,
    },
    DeleteConfirm(DeleteTarget<T>),
}

impl<T: MasterRecord> WizardPhase<T> {
    pub fn name(&self) -> &'static str {
        match self {
            WizardPhase::Idle => "idle",
            WizardPhase::FormOpen { .. } => "form",
            WizardPhase::DeleteConfirm(_) => "delete-confirm",
        }
    }
}

/// Что получает компонент формы
#[derive(Debug)]
pub struct FormRequest<'a, T> {
    pub open: bool,
    pub mode: FormMode,
    pub initial_values: Option<&'a T>,
}

#[derive(Debug, Clone)]
pub struct FormSubmission<T> {
    pub mode: FormMode,
    pub values: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest<Id> {
    Single(Id),
    Bulk(Vec<Id>),
}

impl<Id: Clone> DeleteRequest<Id> {
    pub fn ids(&self) -> Vec<Id> {
        match self {
            DeleteRequest::Single(id) => vec![id.clone()],
            DeleteRequest::Bulk(ids) => ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("действие недоступно: уже открыт диалог ({0})")]
    Busy(&'static str),
    #[error("форма не открыта")]
    FormNotOpen,
    #[error("нет открытого подтверждения удаления")]
    DeleteNotOpen,
    #[error("не выбрано ни одной записи")]
    NothingSelected,
    #[error("массовый выбор отключён для этого справочника")]
    BulkDisabled,
}

#[derive(Debug, Clone)]
pub struct CrudWizard<T: MasterRecord> {
    phase: WizardPhase<T>,
    table: TableState<T::Id>,
    bulk: bool,
}

impl<T: MasterRecord> CrudWizard<T> {
    pub fn new(page_size: usize, bulk: bool) -> Self {
        Self {
            phase: WizardPhase::Idle,
            table: TableState::new(page_size),
            bulk,
        }
    }

    pub fn phase(&self) -> &WizardPhase<T> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, WizardPhase::Idle)
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.phase, WizardPhase::FormOpen { .. })
    }

    pub fn is_delete_open(&self) -> bool {
        matches!(self.phase, WizardPhase::DeleteConfirm(_))
    }

    pub fn bulk_enabled(&self) -> bool {
        self.bulk
    }

    pub fn table(&self) -> &TableState<T::Id> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState<T::Id> {
        &mut self.table
    }

    pub fn selection(&self) -> Vec<T::Id> {
        self.table.selected_ids()
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.is_idle() {
            Ok(())
        } else {
            log::warn!(
                "{}: transition blocked, phase = {}",
                T::collection_name(),
                self.phase.name()
            );
            Err(WizardError::Busy(self.phase.name()))
        }
    }

    fn close(&mut self) {
        log::debug!("{}: {} → idle", T::collection_name(), self.phase.name());
        self.phase = WizardPhase::Idle;
    }

    // ------------------------------------------------------------------------
    // Форма
    // ------------------------------------------------------------------------

    pub fn form_request(&self) -> FormRequest<'_, T> {
        match &self.phase {
            WizardPhase::FormOpen { mode, target } => FormRequest {
                open: true,
                mode: *mode,
                initial_values: target.as_ref(),
            },
            _ => FormRequest {
                open: false,
                mode: FormMode::Create,
                initial_values: None,
            },
        }
    }

    pub fn open_create(&mut self) -> Result<(), WizardError> {
        self.ensure_idle()?;
        log::debug!("{}: idle → form(create)", T::collection_name());
        self.phase = WizardPhase::FormOpen {
            mode: FormMode::Create,
            target: None,
        };
        Ok(())
    }

    pub fn open_edit(&mut self, row: &T) -> Result<(), WizardError> {
        self.ensure_idle()?;
        log::debug!("{}: idle → form(edit {:?})", T::collection_name(), row.id());
        self.phase = WizardPhase::FormOpen {
            mode: FormMode::Edit,
            target: Some(row.clone()),
        };
        Ok(())
    }

    /// Закрыть форму без сохранения. Данные строк не меняются.
    pub fn cancel_form(&mut self) {
        if self.is_form_open() {
            self.close();
        }
    }

    /// Передать значения формы внешнему обработчику и закрыть форму.
    /// При редактировании ID строки сохраняется.
    pub fn submit_form<F>(&mut self, mut values: T, on_submit: F) -> Result<(), WizardError>
    where
        F: FnOnce(FormSubmission<T>),
    {
        let mode = match &self.phase {
            WizardPhase::FormOpen { mode, target } => {
                if let Some(target) = target {
                    values.set_id(target.id());
                }
                *mode
            }
            _ => return Err(WizardError::FormNotOpen),
        };
        on_submit(FormSubmission { mode, values });
        self.close();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Удаление
    // ------------------------------------------------------------------------

    pub fn request_delete(&mut self, row: &T) -> Result<(), WizardError> {
        self.ensure_idle()?;
        log::debug!("{}: idle → delete({:?})", T::collection_name(), row.id());
        self.phase = WizardPhase::DeleteConfirm(DeleteTarget::Single(row.clone()));
        Ok(())
    }

    pub fn request_bulk_delete(&mut self) -> Result<(), WizardError> {
        if !self.bulk {
            return Err(WizardError::BulkDisabled);
        }
        self.ensure_idle()?;
        let ids = self.table.selected_ids();
        if ids.is_empty() {
            return Err(WizardError::NothingSelected);
        }
        log::debug!("{}: idle → delete({} rows)", T::collection_name(), ids.len());
        self.phase = WizardPhase::DeleteConfirm(DeleteTarget::Bulk(ids));
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        if self.is_delete_open() {
            self.close();
        }
    }

    /// Вызвать внешний callback удаления и закрыть подтверждение.
    /// Удалённые ID убираются из выбора; массовое удаление очищает выбор.
    pub fn confirm_delete<F>(&mut self, on_delete: F) -> Result<(), WizardError>
    where
        F: FnOnce(DeleteRequest<T::Id>),
    {
        let request = match &self.phase {
            WizardPhase::DeleteConfirm(DeleteTarget::Single(row)) => DeleteRequest::Single(row.id()),
            WizardPhase::DeleteConfirm(DeleteTarget::Bulk(ids)) => DeleteRequest::Bulk(ids.clone()),
            _ => return Err(WizardError::DeleteNotOpen),
        };
        match &request {
            DeleteRequest::Single(id) => self.table.set_row_selected(*id, false),
            DeleteRequest::Bulk(_) => self.table.clear_selection(),
        }
        on_delete(request);
        self.close();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Выбор и набор строк
    // ------------------------------------------------------------------------

    /// Выбор «по атрибуту»: добавить к выбору переданные ID
    pub fn select_matching<I>(&mut self, ids: I) -> Result<usize, WizardError>
    where
        I: IntoIterator<Item = T::Id>,
    {
        if !self.bulk {
            return Err(WizardError::BulkDisabled);
        }
        let before = self.table.selected_count();
        self.table.select_ids(ids);
        Ok(self.table.selected_count() - before)
    }

    /// Набор строк заменён целиком (например, применён фильтр)
    pub fn rows_replaced(&mut self) {
        log::debug!("{}: rows replaced, table state reset", T::collection_name());
        self.table.reset();
    }

    /// Строки удалены: убрать из выбора исчезнувшие ID и вернуться на
    /// последнюю существующую страницу. Сам движок страницу не ограничивает.
    pub fn rows_removed(&mut self, rows: &[T], config: &TableConfig<T>) {
        let existing: HashSet<T::Id> = rows.iter().map(MasterRecord::id).collect();
        self.table.retain_selection(&existing);
        let last_page = derive_view(rows, &self.table, config)
            .page_count
            .saturating_sub(1);
        if self.table.page_index > last_page {
            log::debug!(
                "{}: page {} is gone, moving to {}",
                T::collection_name(),
                self.table.page_index,
                last_page
            );
            self.table.set_page(last_page);
        }
    }
}
