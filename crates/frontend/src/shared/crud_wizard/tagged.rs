//! Подключение фильтра по атрибутам к экрану справочника с тегами

use super::machine::CrudWizard;
use crate::shared::components::tag_filter_panel::TagFilterPanel;
use crate::shared::data::store::RecordStore;
use crate::shared::tag_filter::{known_labels, TagFilterSet};
use contracts::domain::common::MasterRecord;
use contracts::shared::tags::{AttributeTag, TagError, Tagged};
use leptos::prelude::*;
use std::sync::Arc;

/// Строки хранилища после фильтра по атрибутам
pub fn filtered_rows<T>(store: RwSignal<RecordStore<T>>, filter: RwSignal<TagFilterSet>) -> Signal<Vec<T>>
where
    T: MasterRecord + Tagged,
{
    Signal::derive(move || store.with(|s| filter.with(|f| f.apply(s.rows()))))
}

/// Панель фильтра по атрибутам для `CrudWizardPage::toolbar`
///
/// Изменение фильтра заменяет набор строк целиком, поэтому состояние таблицы
/// сбрасывается. В режиме массового выбора доступны «Выбрать подходящие» и
/// «Прикрепить к выбранным».
pub fn tag_filter_toolbar<T>(
    store: RwSignal<RecordStore<T>>,
    wizard: RwSignal<CrudWizard<T>>,
    filter: RwSignal<TagFilterSet>,
) -> ChildrenFn
where
    T: MasterRecord + Tagged,
{
    let bulk = wizard.with_untracked(CrudWizard::bulk_enabled);

    let on_change = Callback::new(move |_| wizard.update(CrudWizard::rows_replaced));

    let select_matching = Callback::new(move |_| {
        let ids = store.with_untracked(|s| filter.with_untracked(|f| f.matching_ids(s.rows())));
        match wizard.try_update(|w| w.select_matching(ids)) {
            Some(Ok(added)) => log::debug!("{}: selected {} matching rows", T::collection_name(), added),
            Some(Err(e)) => log::warn!("{}: {}", T::collection_name(), e),
            None => {}
        }
    });

    let attach = Callback::new(move |tag: AttributeTag| -> Result<usize, TagError> {
        let ids = wizard.with_untracked(CrudWizard::selection);
        store
            .try_update(|s| s.attach_tag_to_many(&ids, &tag))
            .unwrap_or(Ok(0))
    });

    Arc::new(move || {
        let labels = store.with_untracked(|s| known_labels(s.rows()));
        if bulk {
            view! {
                <TagFilterPanel
                    filter=filter
                    known_labels=labels
                    on_change=on_change
                    on_select_matching=select_matching
                    on_attach=attach
                />
            }
            .into_any()
        } else {
            view! { <TagFilterPanel filter=filter known_labels=labels on_change=on_change /> }
                .into_any()
        }
    })
}
