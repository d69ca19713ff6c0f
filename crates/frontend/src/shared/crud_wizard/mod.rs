//! Обобщённый CRUD-экран справочника
//!
//! `machine` - автомат состояний без зависимостей от UI, `config` - тексты и
//! параметры экрана, `view` - Leptos-компонент поверх автомата.

pub mod config;
pub mod machine;
pub mod tagged;
pub mod view;

pub use config::{DeleteDialogCopy, HeaderCopy, PagingOptions, ResourceConfig};
pub use machine::{
    CrudWizard, DeleteRequest, DeleteTarget, FormMode, FormRequest, FormSubmission, WizardError,
    WizardPhase,
};
pub use tagged::{filtered_rows, tag_filter_toolbar};
pub use view::{CrudWizardPage, FormProps, FormRenderer};
